//! Move choosers.
//!
//! A strategy looks at the live board and names a tile from the acting
//! player's real hand. Strategies that reason on copies must map their
//! choice back with [`match_tile_in_real_hand`].

pub mod blind;
pub mod mcts_strategy;
pub mod rule_based;

use crate::game::board_state::BoardState;
use crate::game::check_play::Side;
use crate::game::tile::Tile;
use crate::{DominoError, Result};

pub use blind::BlindStrategy;
pub use mcts_strategy::MctsStrategy;
pub use rule_based::{RuleBasedStrategy, RuleBasedWeights};

pub trait Strategy {
    /// Picks a tile for the seat to act. Only called when that seat has at
    /// least one legal move.
    fn choose_move(&mut self, state: &BoardState) -> Result<Tile>;

    /// Side to use if the chosen tile fits both ends.
    fn preferred_side(&self) -> Option<Side> {
        None
    }

    fn name(&self) -> &'static str;
}

/// Finds `chosen` in `real_hand`, ignoring orientation, and returns the
/// hand's own tile.
pub fn match_tile_in_real_hand(chosen: &Tile, real_hand: &[Tile]) -> Result<Tile> {
    real_hand
        .iter()
        .find(|tile| {
            (tile.left == chosen.left && tile.right == chosen.right)
                || (tile.left == chosen.right && tile.right == chosen.left)
        })
        .copied()
        .ok_or_else(|| {
            log::error!("[SAFEGUARD] tile {} not found in real hand {:?}", chosen, real_hand);
            DominoError::TileNotFound { tile: *chosen }
        })
}
