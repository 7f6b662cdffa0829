//! Playing rounds and whole matches between strategies.

use crate::game::apply_move::apply_move;
use crate::game::board_state::BoardState;
use crate::game::check_play::Playable;
use crate::game::domino_game::DominoGame;
use crate::game::draw_tile::draw_until_playable;
use crate::game::get_valid_moves::get_valid_moves;
use crate::game::round_outcome::{check_round_over, lowest_hand, RoundOutcome};
use crate::scoring::scoring::update_score;
use crate::strategy::Strategy;
use crate::utils::random_index::ChoiceSource;
use crate::{DominoError, Result};

/// Safety bound on the number of rounds in one match.
pub const MAX_ROUNDS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub outcome: RoundOutcome,
    pub points: u32,
    pub moves: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub scores: Vec<u32>,
    pub rounds: Vec<RoundRecord>,
    /// Highest score, lowest seat on ties.
    pub winner: usize,
}

/// Plays `state` until the round ends. Players without a legal move draw;
/// with an empty stock they pass, and a full cycle of passes blocks the round.
pub fn play_round<C: ChoiceSource + ?Sized>(
    state: &mut BoardState,
    strategies: &mut [Box<dyn Strategy>],
    choices: &mut C,
) -> Result<(RoundOutcome, usize)> {
    let mut passes = 0;
    let mut moves = 0;

    loop {
        let seat = state.turn_idx;
        let conditions = get_valid_moves(&mut state.players[seat], &state.ground);
        if !conditions.iter().any(Playable::any) {
            if !state.stock.is_empty() {
                draw_until_playable(state);
                continue;
            }
            passes += 1;
            log::trace!("{} has no valid moves, skipping turn", state.players[seat].name);
            if passes >= state.players.len() {
                let winner = lowest_hand(state);
                log::info!("no valid moves for any player, winner: {}", state.players[winner].name);
                return Ok((RoundOutcome::Blocked { winner }, moves));
            }
            state.change_turn();
            continue;
        }
        passes = 0;

        let strategy = &mut strategies[seat];
        let tile = strategy.choose_move(state)?;
        state.players[seat].preferred_side = strategy.preferred_side();
        apply_move(state, &tile, seat, choices)?;
        moves += 1;

        if let Some(outcome) = check_round_over(state) {
            return Ok((outcome, moves));
        }
        state.change_turn();
    }
}

/// Plays rounds until a score passes the target. The winner of each round
/// opens the next one; every deal is seeded from `choices`.
pub fn play_match<C: ChoiceSource + ?Sized>(
    game: &DominoGame,
    strategies: &mut [Box<dyn Strategy>],
    choices: &mut C,
) -> Result<MatchSummary> {
    if strategies.len() != game.num_players() {
        return Err(DominoError::InvalidConfig(format!(
            "{} strategies for {} players",
            strategies.len(),
            game.num_players()
        )));
    }

    let target = game.config.target_score;
    let mut state = game.new_round(choices.next_seed());
    let mut rounds = Vec::new();

    loop {
        let (outcome, moves) = play_round(&mut state, strategies, choices)?;
        let points = update_score(&mut state, outcome.winner());
        log::info!(
            "Round {} over: {:?}, {} scores {} (now {})",
            rounds.len() + 1,
            outcome,
            state.players[outcome.winner()].name,
            points,
            state.players[outcome.winner()].score
        );
        rounds.push(RoundRecord {
            outcome,
            points,
            moves,
        });

        if state.players.iter().any(|p| p.score > target) {
            break;
        }
        if rounds.len() >= MAX_ROUNDS {
            log::warn!("match stopped after {} rounds without reaching {}", MAX_ROUNDS, target);
            break;
        }
        state = game.next_round(&state, outcome.winner(), choices.next_seed());
    }

    let scores: Vec<u32> = state.players.iter().map(|p| p.score).collect();
    let winner = scores
        .iter()
        .enumerate()
        .fold(0, |best, (i, &s)| if s > scores[best] { i } else { best });

    Ok(MatchSummary {
        scores,
        rounds,
        winner,
    })
}
