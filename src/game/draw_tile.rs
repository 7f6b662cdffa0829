use crate::game::board_state::BoardState;
use crate::game::check_play::check_play;
use crate::game::get_valid_moves::has_valid_move;

/// What happened when the player to act tried to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    pub drawn: usize,
    /// The last drawn tile fits the ground.
    pub playable: bool,
}

/// Draws from the back of the stock into the acting player's hand until a
/// playable tile arrives or the stock runs out. The turn is not advanced.
pub fn draw_until_playable(state: &mut BoardState) -> DrawOutcome {
    let mut drawn = 0;
    while let Some(mut tile) = state.stock.pop() {
        drawn += 1;
        let playable = check_play(&state.ground, &mut tile).any();
        state.current_player_mut().append_tile_to_hand(tile);
        if playable {
            log::trace!("seat {} drew {} tile(s)", state.turn_idx, drawn);
            return DrawOutcome {
                drawn,
                playable: true,
            };
        }
    }
    DrawOutcome {
        drawn,
        playable: false,
    }
}

/// Brings the state to a point where the player to act can play, drawing and
/// passing as the rules require. Returns `false` when no seat can act.
pub fn settle_turn(state: &mut BoardState) -> bool {
    if state.players.iter().any(|p| p.has_empty_hand()) {
        return false;
    }
    for _ in 0..state.players.len() {
        if has_valid_move(state.current_player(), &state.ground) {
            return true;
        }
        if draw_until_playable(state).playable {
            return true;
        }
        state.change_turn();
    }
    false
}
