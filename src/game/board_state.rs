use crate::game::player::Player;
use crate::game::tile::Tile;
use crate::{DominoError, Result};
use std::collections::VecDeque;

/// The world a round evolves: the ground chain, the stock and the seats.
///
/// `Clone` is a full value copy: every tile, hand and cached condition is
/// duplicated, so a clone can be explored freely without touching the
/// original.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub ground: VecDeque<Tile>,
    pub stock: Vec<Tile>,
    pub players: Vec<Player>,
    pub turn_idx: usize,
}

impl BoardState {
    pub fn new(players: Vec<Player>, stock: Vec<Tile>) -> Self {
        BoardState {
            ground: VecDeque::new(),
            stock,
            players,
            turn_idx: 0,
        }
    }

    /// Independent copy used by search and rollouts.
    pub fn snapshot(&self) -> BoardState {
        self.clone()
    }

    /// `(front.left, back.right)` of the ground chain.
    pub fn open_ends(&self) -> Result<(u8, u8)> {
        match (self.ground.front(), self.ground.back()) {
            (Some(front), Some(back)) => Ok((front.left, back.right)),
            _ => Err(DominoError::EmptyBoard),
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_idx]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn_idx]
    }

    pub fn change_turn(&mut self) {
        self.turn_idx = (self.turn_idx + 1) % self.players.len();
    }

    /// Every tile in play: hands, then stock, then ground.
    pub fn all_tiles(&self) -> Vec<Tile> {
        self.players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .chain(self.stock.iter().copied())
            .chain(self.ground.iter().copied())
            .collect()
    }

    /// True when every adjacent ground pair touches with equal pips.
    pub fn is_ground_contiguous(&self) -> bool {
        self.ground
            .iter()
            .zip(self.ground.iter().skip(1))
            .all(|(a, b)| a.right == b.left)
    }
}
