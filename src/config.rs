//! Engine configuration file.
//!
//! One JSON document groups the table rules, the search hyperparameters and
//! the rule-based weights. Missing sections and keys fall back to defaults.

use crate::game::domino_game::GameConfig;
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::strategy::RuleBasedWeights;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub game: GameConfig,
    pub mcts: MCTSHyperparameters,
    pub rule_based: RuleBasedWeights,
}

impl EngineConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.mcts.validate()?;
        log::debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
