use crate::game::check_play::{Playable, Side};
use crate::game::tile::Tile;
use serde::{Deserialize, Serialize};

/// A seat at the table: its hand, accumulated score and the playability of
/// each hand tile as of the last `valid_moves` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub hand: Vec<Tile>,
    pub score: u32,
    /// Aligned positionally with `hand`; refreshed by `valid_moves`.
    pub conditions: Vec<Playable>,
    /// Side to use when the next tile fits both ends, set by heuristics.
    pub preferred_side: Option<Side>,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            hand: Vec::new(),
            score: 0,
            conditions: Vec::new(),
            preferred_side: None,
        }
    }

    pub fn set_hand(&mut self, tiles: Vec<Tile>) {
        self.hand = tiles;
        self.conditions.clear();
    }

    pub fn append_tile_to_hand(&mut self, tile: Tile) {
        self.hand.push(tile);
    }

    /// Total pips still held.
    pub fn count_hand(&self) -> u32 {
        self.hand.iter().map(Tile::pip_sum).sum()
    }

    pub fn position_in_hand(&self, tile: &Tile) -> Option<usize> {
        self.hand.iter().position(|held| held == tile)
    }

    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }
}
