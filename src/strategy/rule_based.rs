use crate::game::board_state::BoardState;
use crate::game::check_play::{check_play, Side};
use crate::game::tile::Tile;
use crate::strategy::{match_tile_in_real_hand, Strategy};
use crate::{DominoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weights of the hand-tuned scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleBasedWeights {
    /// Per pip: shed heavy tiles first.
    pub tile_value: f64,
    /// Multiplier applied to doubles.
    pub double_tiles: f64,
    /// Bonus per hand tile sharing the value left exposed.
    pub tiles_in_hand: f64,
    /// Penalty per ground tile showing the touching value.
    pub tiles_in_ground: f64,
}

impl Default for RuleBasedWeights {
    fn default() -> Self {
        Self {
            tile_value: 1.0,
            double_tiles: 1.5,
            tiles_in_hand: 2.0,
            tiles_in_ground: 1.0,
        }
    }
}

/// Occurrences of each pip value; a double counts once.
pub fn value_frequency<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> HashMap<u8, u32> {
    let mut frequency = HashMap::new();
    for tile in tiles {
        *frequency.entry(tile.left).or_insert(0) += 1;
        if !tile.is_double() {
            *frequency.entry(tile.right).or_insert(0) += 1;
        }
    }
    frequency
}

/// Greedy scorer: prefers heavy tiles and doubles, keeps ends it can follow
/// up on, and avoids feeding values already common on the ground.
pub struct RuleBasedStrategy {
    weights: RuleBasedWeights,
    preferred: Option<Side>,
}

impl RuleBasedStrategy {
    pub fn new(weights: RuleBasedWeights) -> Self {
        Self {
            weights,
            preferred: None,
        }
    }

    /// Scores every legal tile; returns `(tile, score, side preference)`.
    pub fn score_moves(&self, state: &BoardState) -> Vec<(Tile, f64, Option<Side>)> {
        let w = &self.weights;
        let hand = &state.current_player().hand;
        let hand_frequency = value_frequency(hand);
        let ground_frequency = value_frequency(&state.ground);
        let count = |freq: &HashMap<u8, u32>, value: u8| f64::from(freq.get(&value).copied().unwrap_or(0));

        hand.iter()
            .filter_map(|held| {
                let mut tile = *held;
                let condition = check_play(&state.ground, &mut tile);
                if !condition.any() {
                    return None;
                }

                let mut score = f64::from(tile.pip_sum()) * w.tile_value;
                if tile.is_double() {
                    score *= w.double_tiles;
                }

                let (left_end, right_end) = state.open_ends().unwrap_or((tile.right, tile.left));
                let exposed = |end: u8| if tile.left == end { tile.right } else { tile.left };
                let side_score = |end: u8| {
                    count(&hand_frequency, exposed(end)) * w.tiles_in_hand
                        - count(&ground_frequency, end) * w.tiles_in_ground
                };

                if condition.both() {
                    let side = if side_score(left_end) >= side_score(right_end) {
                        Side::Left
                    } else {
                        Side::Right
                    };
                    return Some((tile, score, Some(side)));
                }

                score += if condition.left {
                    side_score(left_end)
                } else {
                    side_score(right_end)
                };
                Some((tile, score, None))
            })
            .collect()
    }
}

impl Default for RuleBasedStrategy {
    fn default() -> Self {
        Self::new(RuleBasedWeights::default())
    }
}

impl Strategy for RuleBasedStrategy {
    fn choose_move(&mut self, state: &BoardState) -> Result<Tile> {
        self.preferred = None;
        let scored = self.score_moves(state);

        let mut best: Option<&(Tile, f64, Option<Side>)> = None;
        for entry in &scored {
            match best {
                Some(current) if entry.1 <= current.1 => {}
                _ => best = Some(entry),
            }
        }
        let (tile, _, side) = best.ok_or(DominoError::NoValidMove {
            player: state.turn_idx,
        })?;
        self.preferred = *side;
        match_tile_in_real_hand(tile, &state.current_player().hand)
    }

    fn preferred_side(&self) -> Option<Side> {
        self.preferred
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}
