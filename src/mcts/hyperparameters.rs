//! MCTS Hyperparameters Configuration
//!
//! Tunable knobs of the search driver. Every field has a default, so a
//! configuration file only needs to name what it changes.

use crate::{DominoError, Result};
use serde::{Deserialize, Serialize};

/// MCTS hyperparameters configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSHyperparameters {
    /// Exploration constant `C` of the UCB score.
    /// Higher values = more exploration
    /// Default: sqrt(2)
    pub exploration_constant: f64,

    /// Selection/expansion/rollout/backpropagation cycles per search.
    /// Default: 500
    pub num_searches: usize,

    /// Moves a single rollout may make before it is cut off.
    /// Default: 200
    pub rollout_step_cap: usize,

    /// Seed for the search's own choice source; `None` draws from the OS.
    pub seed: Option<u64>,

    /// Seat whose pip count the search minimises; `None` means the seat to
    /// act at the root.
    pub tracked_player: Option<usize>,
}

impl Default for MCTSHyperparameters {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            num_searches: 500,
            rollout_step_cap: 200,
            seed: None,
            tracked_player: None,
        }
    }
}

impl MCTSHyperparameters {
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(DominoError::InvalidConfig(format!(
                "exploration_constant must be a non-negative number, got {}",
                self.exploration_constant
            )));
        }
        if self.num_searches == 0 {
            return Err(DominoError::InvalidConfig(
                "num_searches must be at least 1".to_string(),
            ));
        }
        if self.rollout_step_cap == 0 {
            return Err(DominoError::InvalidConfig(
                "rollout_step_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get configuration as string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "C={:.2} searches={} rollout_cap={} seed={:?} tracked={:?}",
            self.exploration_constant,
            self.num_searches,
            self.rollout_step_cap,
            self.seed,
            self.tracked_player
        )
    }
}
