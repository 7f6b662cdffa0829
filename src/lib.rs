//! # Domino MCTS Library
//!
//! A dominoes (block/draw variant) game engine with an automated player
//! driven by Monte Carlo Tree Search.
//!
//! ## Features
//!
//! - **Game Engine**: tiles, hands, ground chain, move validity, drawing,
//!   win/deadlock detection and scoring
//! - **AI Engine**: single-perspective MCTS over an arena-backed tree with
//!   seeded, bounded random rollouts
//! - **Strategies**: MCTS, blind (uniform random) and rule-based players
//! - **Match Play**: multi-round matches to a target score
//!
//! ## Usage
//!
//! ```rust
//! use domino_mcts::{
//!     game::domino_game::{DominoGame, GameConfig},
//!     strategy::{MctsStrategy, Strategy},
//!     mcts::hyperparameters::MCTSHyperparameters,
//! };
//!
//! let game = DominoGame::new(vec!["ai 1".into(), "ai 2".into()], GameConfig::default()).unwrap();
//! let state = game.new_round(42);
//! let params = MCTSHyperparameters { num_searches: 50, seed: Some(1), ..Default::default() };
//! let mut strategy = MctsStrategy::from_params(params).unwrap();
//! let tile = strategy.choose_move(&state).unwrap();
//! assert!(state.players[0].hand.contains(&tile));
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Monte Carlo Tree Search AI engine
pub mod mcts;

/// Round scoring
pub mod scoring;

/// Move choosers built on the engine
pub mod strategy;

/// Configuration file loading
pub mod config;

/// Logger bootstrap
pub mod logging;

/// Utility functions and helpers
pub mod utils;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::board_state::BoardState;
pub use game::player::Player;
pub use game::tile::Tile;
pub use mcts::algorithm::mcts_search;
pub use strategy::Strategy;
pub use utils::random_index::{ChoiceSource, ScriptedChoices, SeededChoices};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Domino MCTS library.
///
/// Every variant except `Io` and `Json` is a broken caller contract: an
/// illegal move, a stale cache or a tile that cannot be found where it must be.
#[derive(Debug, thiserror::Error)]
pub enum DominoError {
    #[error("the ground is empty, it has no open ends")]
    EmptyBoard,

    #[error("tile {tile} is not in the hand of player {player}")]
    TileNotInHand { tile: Tile, player: usize },

    #[error("tile {tile} cannot be placed on either open end")]
    InvalidMove { tile: Tile },

    #[error("cached move conditions of player {player} do not match the hand")]
    StaleConditions { player: usize },

    #[error("player {player} has no valid move")]
    NoValidMove { player: usize },

    #[error("[SAFEGUARD] tile {tile} not found in the real hand")]
    TileNotFound { tile: Tile },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DominoError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
