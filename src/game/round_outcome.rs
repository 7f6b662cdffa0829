use crate::game::board_state::BoardState;
use crate::game::get_valid_moves::has_valid_move;

/// How a round ended; these are game events, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A player emptied their hand.
    Domino { winner: usize },
    /// No open end value is left anywhere in hands or stock.
    Deadlock { winner: usize },
    /// Every player passed in turn with an empty stock.
    Blocked { winner: usize },
}

impl RoundOutcome {
    pub fn winner(&self) -> usize {
        match *self {
            RoundOutcome::Domino { winner }
            | RoundOutcome::Deadlock { winner }
            | RoundOutcome::Blocked { winner } => winner,
        }
    }
}

/// True once a hand is empty or nobody has a valid move. The stock is not
/// consulted.
pub fn is_terminal(state: &BoardState) -> bool {
    if state.players.iter().any(|p| p.has_empty_hand()) {
        return true;
    }
    !state
        .players
        .iter()
        .any(|p| has_valid_move(p, &state.ground))
}

/// First seat with an empty hand.
pub fn check_win(state: &BoardState) -> Option<usize> {
    let winner = state.players.iter().position(|p| p.has_empty_hand());
    if let Some(winner) = winner {
        log::info!("WINNER: {}", state.players[winner].name);
    }
    winner
}

/// Seat holding the fewest pips, lowest index on ties.
pub fn lowest_hand(state: &BoardState) -> usize {
    state
        .players
        .iter()
        .enumerate()
        .min_by_key(|(i, p)| (p.count_hand(), *i))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Detects a dead end: neither open end value appears in any hand or in the
/// stock. The lightest hand wins.
pub fn check_deadlock(state: &BoardState) -> Option<usize> {
    let (left, right) = state.open_ends().ok()?;
    let reachable = |tile: &crate::game::tile::Tile| tile.contains(left) || tile.contains(right);

    if state
        .players
        .iter()
        .any(|p| p.hand.iter().any(reachable))
    {
        return None;
    }
    if state.stock.iter().any(reachable) {
        return None;
    }

    let winner = lowest_hand(state);
    log::info!("DEADEND, winner: {}", state.players[winner].name);
    Some(winner)
}

/// Win first, then deadlock.
pub fn check_round_over(state: &BoardState) -> Option<RoundOutcome> {
    if let Some(winner) = check_win(state) {
        return Some(RoundOutcome::Domino { winner });
    }
    check_deadlock(state).map(|winner| RoundOutcome::Deadlock { winner })
}
