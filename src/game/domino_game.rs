//! Round set-up: the table configuration and dealing.

use crate::game::board_state::BoardState;
use crate::game::create_domino_set::{create_domino_set, DOUBLE_SIX};
use crate::game::player::Player;
use crate::{DominoError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Table rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Highest pip value in the set.
    pub max_pip: u8,
    /// Tiles dealt to each player; `None` splits the whole set evenly.
    pub hand_size: Option<usize>,
    /// A match ends once a player's score goes past this.
    pub target_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_pip: DOUBLE_SIX,
            hand_size: None,
            target_score: 101,
        }
    }
}

impl GameConfig {
    pub fn set_size(&self) -> usize {
        let n = usize::from(self.max_pip) + 1;
        n * (n + 1) / 2
    }

    pub fn validate(&self, num_players: usize) -> Result<()> {
        if num_players < 2 {
            return Err(DominoError::InvalidConfig(format!(
                "at least 2 players are required, got {}",
                num_players
            )));
        }
        let hand_size = self.effective_hand_size(num_players);
        if hand_size == 0 || hand_size * num_players > self.set_size() {
            return Err(DominoError::InvalidConfig(format!(
                "cannot deal {} tiles to {} players from a set of {}",
                hand_size,
                num_players,
                self.set_size()
            )));
        }
        Ok(())
    }

    pub fn effective_hand_size(&self, num_players: usize) -> usize {
        self.hand_size
            .unwrap_or_else(|| self.set_size() / num_players.max(1))
    }
}

/// Seats and rules; deals fresh rounds.
#[derive(Debug, Clone)]
pub struct DominoGame {
    pub names: Vec<String>,
    pub config: GameConfig,
}

impl DominoGame {
    pub fn new(names: Vec<String>, config: GameConfig) -> Result<Self> {
        config.validate(names.len())?;
        Ok(Self { names, config })
    }

    pub fn num_players(&self) -> usize {
        self.names.len()
    }

    /// Shuffles a full set with `seed` and deals it. Deterministic in `seed`.
    pub fn new_round(&self, seed: u64) -> BoardState {
        let players = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(i, name.clone()))
            .collect();
        self.deal(players, seed)
    }

    /// Deals a new round to existing players, keeping their scores, with
    /// `starter` to act first.
    pub fn next_round(&self, previous: &BoardState, starter: usize, seed: u64) -> BoardState {
        let players = previous
            .players
            .iter()
            .map(|p| {
                let mut fresh = Player::new(p.id, p.name.clone());
                fresh.score = p.score;
                fresh
            })
            .collect();
        let mut state = self.deal(players, seed);
        state.turn_idx = starter % state.players.len();
        state
    }

    fn deal(&self, mut players: Vec<Player>, seed: u64) -> BoardState {
        let mut tiles = create_domino_set(self.config.max_pip);
        let mut rng = StdRng::seed_from_u64(seed);
        tiles.shuffle(&mut rng);

        let hand_size = self.config.effective_hand_size(players.len());
        for (i, player) in players.iter_mut().enumerate() {
            player.set_hand(tiles[i * hand_size..(i + 1) * hand_size].to_vec());
        }
        tiles.drain(..hand_size * players.len());

        log::debug!(
            "dealt {} tiles to {} players, {} left in stock (seed {})",
            hand_size,
            players.len(),
            tiles.len(),
            seed
        );
        BoardState::new(players, tiles)
    }
}
