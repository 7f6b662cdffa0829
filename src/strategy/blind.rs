use crate::game::board_state::BoardState;
use crate::game::get_valid_moves::peek_valid_moves;
use crate::game::tile::Tile;
use crate::strategy::{match_tile_in_real_hand, Strategy};
use crate::utils::random_index::{ChoiceSource, SeededChoices};
use crate::{DominoError, Result};

/// Plays a uniformly random legal tile.
pub struct BlindStrategy<C: ChoiceSource = SeededChoices> {
    choices: C,
}

impl<C: ChoiceSource> BlindStrategy<C> {
    pub fn new(choices: C) -> Self {
        Self { choices }
    }
}

/// Uniformly random tile among the acting seat's legal moves.
pub fn random_valid_tile<C: ChoiceSource + ?Sized>(state: &BoardState, choices: &mut C) -> Result<Tile> {
    let player = state.current_player();
    let valid: Vec<Tile> = player
        .hand
        .iter()
        .zip(peek_valid_moves(player, &state.ground))
        .filter(|(_, condition)| condition.any())
        .map(|(tile, _)| *tile)
        .collect();
    if valid.is_empty() {
        return Err(DominoError::NoValidMove {
            player: state.turn_idx,
        });
    }
    let chosen = valid[choices.pick(valid.len())];
    match_tile_in_real_hand(&chosen, &player.hand)
}

impl<C: ChoiceSource> Strategy for BlindStrategy<C> {
    fn choose_move(&mut self, state: &BoardState) -> Result<Tile> {
        random_valid_tile(state, &mut self.choices)
    }

    fn name(&self) -> &'static str {
        "blind"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::Player;
    use crate::utils::random_index::ScriptedChoices;

    #[test]
    fn test_blind_only_picks_legal_tiles() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(6, 6), Tile::new(1, 4), Tile::new(5, 5), Tile::new(4, 2)]);
        players[1].set_hand(vec![Tile::new(0, 0)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(4, 3));

        let mut strategy = BlindStrategy::new(ScriptedChoices::new(vec![0, 1, 2, 3]));
        for _ in 0..4 {
            let tile = strategy.choose_move(&state).unwrap();
            assert!(tile == Tile::new(1, 4) || tile == Tile::new(4, 2));
        }
    }

    #[test]
    fn test_blind_without_moves_is_an_error() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(6, 6)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(4, 3));
        let mut strategy = BlindStrategy::new(ScriptedChoices::first());
        assert!(strategy.choose_move(&state).is_err());
    }
}
