use crate::game::board_state::BoardState;
use crate::game::player::Player;

/// Points a round winner collects: every pip left in the other hands.
pub fn score<'a>(non_winners: impl IntoIterator<Item = &'a Player>) -> u32 {
    non_winners.into_iter().map(Player::count_hand).sum()
}

/// Credits `winner` with the pips of every other hand and returns the gain.
pub fn update_score(state: &mut BoardState, winner: usize) -> u32 {
    let gained = score(
        state
            .players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != winner)
            .map(|(_, p)| p),
    );
    state.players[winner].score += gained;
    gained
}

/// Pips left across all hands.
pub fn calculate_score(state: &BoardState) -> u32 {
    score(&state.players)
}
