use crate::game::apply_move::apply_move;
use crate::game::board_state::BoardState;
use crate::game::draw_tile::settle_turn;
use crate::game::get_valid_moves::playable_tiles;
use crate::game::round_outcome::is_terminal;
use crate::utils::random_index::ChoiceSource;
use crate::Result;

/// Outcome of one random playout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloutResult {
    pub value: f64,
    pub steps: usize,
    /// False when the step cap cut the playout short.
    pub reached_terminal: bool,
}

/// Utility of `state` for `tracked`: minus the pips it still holds, paired
/// with whether the state is terminal.
pub fn evaluate_state(state: &BoardState, tracked: usize) -> (f64, bool) {
    let value = -f64::from(state.players[tracked].count_hand());
    (value, is_terminal(state))
}

/// Plays uniformly random legal moves on a copy of `state` until it is
/// terminal or `step_cap` moves have been made. Players without a move draw
/// from the stock, or pass once it is empty.
pub fn simulate_game<C: ChoiceSource + ?Sized>(
    state: &BoardState,
    tracked: usize,
    step_cap: usize,
    choices: &mut C,
) -> Result<RolloutResult> {
    let mut rollout = state.snapshot();

    for steps in 0..step_cap {
        let (_, terminal) = evaluate_state(&rollout, tracked);
        if terminal || !settle_turn(&mut rollout) {
            // settle_turn may have drawn tiles, so value the final position
            return Ok(RolloutResult {
                value: evaluate_state(&rollout, tracked).0,
                steps,
                reached_terminal: true,
            });
        }

        let seat = rollout.turn_idx;
        let moves = playable_tiles(&mut rollout.players[seat], &rollout.ground);
        let tile = moves[choices.pick(moves.len())];
        apply_move(&mut rollout, &tile, seat, choices)?;
        rollout.change_turn();
    }

    let (value, terminal) = evaluate_state(&rollout, tracked);
    if !terminal {
        log::warn!("rollout stopped at the step cap ({} moves)", step_cap);
    }
    Ok(RolloutResult {
        value,
        steps: step_cap,
        reached_terminal: terminal,
    })
}
