use crate::game::board_state::BoardState;
use crate::game::tile::Tile;
use crate::mcts::algorithm::mcts_search;
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::mcts::mcts_result::MCTSResult;
use crate::strategy::blind::random_valid_tile;
use crate::strategy::{match_tile_in_real_hand, Strategy};
use crate::utils::random_index::{ChoiceSource, SeededChoices};
use crate::{DominoError, Result};

/// Picks the most visited root move of an MCTS search run on a copy of the
/// live board.
pub struct MctsStrategy<C: ChoiceSource = SeededChoices> {
    params: MCTSHyperparameters,
    choices: C,
    last_result: Option<MCTSResult>,
}

impl MctsStrategy<SeededChoices> {
    /// Uses `params.seed` for its choice source.
    pub fn from_params(params: MCTSHyperparameters) -> Result<Self> {
        params.validate()?;
        let choices = SeededChoices::from_optional_seed(params.seed);
        Ok(Self::new(params, choices))
    }
}

impl<C: ChoiceSource> MctsStrategy<C> {
    pub fn new(params: MCTSHyperparameters, choices: C) -> Self {
        Self {
            params,
            choices,
            last_result: None,
        }
    }

    pub fn params(&self) -> &MCTSHyperparameters {
        &self.params
    }

    /// Distribution behind the last searched decision.
    pub fn last_result(&self) -> Option<&MCTSResult> {
        self.last_result.as_ref()
    }
}

/// Tile with the highest pip sum; the first one wins ties.
pub fn heaviest_tile(hand: &[Tile]) -> Option<Tile> {
    hand.iter().fold(None, |best: Option<Tile>, tile| match best {
        Some(current) if tile.pip_sum() <= current.pip_sum() => Some(current),
        _ => Some(*tile),
    })
}

impl<C: ChoiceSource> Strategy for MctsStrategy<C> {
    fn choose_move(&mut self, state: &BoardState) -> Result<Tile> {
        let real_hand = &state.current_player().hand;

        if state.ground.is_empty() {
            let opening = heaviest_tile(real_hand).ok_or(DominoError::NoValidMove {
                player: state.turn_idx,
            })?;
            return match_tile_in_real_hand(&opening, real_hand);
        }

        let search_state = state.snapshot();
        let result = mcts_search(&search_state, &self.params, &mut self.choices)?;
        let best = result.best_action();
        self.last_result = Some(result);

        match best {
            Some(action) => match_tile_in_real_hand(&action, real_hand),
            None => {
                log::warn!(
                    "MCTS returned no moves for seat {}, falling back to a random valid move",
                    state.turn_idx
                );
                random_valid_tile(state, &mut self.choices)
            }
        }
    }

    fn name(&self) -> &'static str {
        "mcts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::Player;

    fn params() -> MCTSHyperparameters {
        MCTSHyperparameters {
            num_searches: 60,
            seed: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn test_heaviest_tile_first_on_ties() {
        let hand = [Tile::new(1, 2), Tile::new(6, 3), Tile::new(4, 5), Tile::new(0, 0)];
        assert_eq!(heaviest_tile(&hand), Some(Tile::new(6, 3)));
        assert_eq!(heaviest_tile(&[]), None);
    }

    #[test]
    fn test_opening_move_plays_heaviest_tile() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(1, 2), Tile::new(6, 5), Tile::new(3, 3)]);
        players[1].set_hand(vec![Tile::new(0, 0)]);
        let state = BoardState::new(players, Vec::new());

        let mut strategy = MctsStrategy::from_params(params()).unwrap();
        let tile = strategy.choose_move(&state).unwrap();
        assert_eq!(tile, Tile::new(5, 6));
        assert!(strategy.last_result().is_none(), "No search for the opening move");
    }

    #[test]
    fn test_choice_comes_from_the_real_hand() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(6, 6), Tile::new(5, 2), Tile::new(4, 2)]);
        players[1].set_hand(vec![Tile::new(2, 3), Tile::new(1, 1)]);
        let mut state = BoardState::new(players, vec![Tile::new(0, 0)]);
        state.ground.push_back(Tile::new(2, 2));
        let before = format!("{:?}", state);

        let mut strategy = MctsStrategy::from_params(params()).unwrap();
        let tile = strategy.choose_move(&state).unwrap();

        let held = &state.players[0].hand;
        let index = held.iter().position(|t| *t == tile).expect("tile must be held");
        assert_eq!((held[index].left, held[index].right), (tile.left, tile.right));
        assert!(tile == Tile::new(5, 2) || tile == Tile::new(4, 2));
        assert_eq!(format!("{:?}", state), before, "The live state must not be touched");
        assert!(strategy.last_result().is_some());
    }

    #[test]
    fn test_degenerate_search_falls_back_to_random() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(6, 6)]);
        players[1].set_hand(vec![Tile::new(2, 3)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(2, 2));

        // Seat 0 has no legal move: the search is empty and so is the fallback.
        let mut strategy = MctsStrategy::from_params(params()).unwrap();
        assert!(matches!(
            strategy.choose_move(&state),
            Err(DominoError::NoValidMove { player: 0 })
        ));
        assert!(strategy.last_result().map(MCTSResult::is_empty).unwrap_or(false));
    }
}
