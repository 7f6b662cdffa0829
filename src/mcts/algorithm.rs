//! Monte Carlo Tree Search driver.
//!
//! Each iteration selects a leaf by UCB, expands one untried move, plays a
//! random rollout from the new node and propagates the rollout's utility
//! back to the root. The returned [`MCTSResult`] holds the visit-frequency
//! distribution over the root's moves.

use crate::game::board_state::BoardState;
use crate::game::simulate_game::{evaluate_state, simulate_game};
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::mcts::mcts_result::{ActionProbability, MCTSResult};
use crate::mcts::node::SearchTree;
use crate::mcts::selection::{backpropagate, select_leaf};
use crate::utils::random_index::ChoiceSource;
use crate::{DominoError, Result};

/// Runs `num_searches` iterations on a private copy of `state`.
///
/// Returns an empty distribution when the seat to act has no legal move.
pub fn mcts_search<C: ChoiceSource + ?Sized>(
    state: &BoardState,
    params: &MCTSHyperparameters,
    choices: &mut C,
) -> Result<MCTSResult> {
    params.validate()?;
    let tracked = params.tracked_player.unwrap_or(state.turn_idx);
    if tracked >= state.players.len() {
        return Err(DominoError::InvalidConfig(format!(
            "tracked_player {} is not a seat at a table of {}",
            tracked,
            state.players.len()
        )));
    }

    let mut tree = SearchTree::new(state.snapshot());
    let (_, root_terminal) = evaluate_state(&tree.root().state, tracked);
    if !root_terminal && tree.root().unexpanded_moves.is_empty() {
        log::warn!("MCTS root has no legal move for seat {}", state.turn_idx);
        return Ok(MCTSResult::default());
    }

    let c = params.exploration_constant;
    let mut terminal_root_hits = 0;

    for _ in 0..params.num_searches {
        let leaf = select_leaf(&tree, SearchTree::ROOT, c);
        let (value, terminal) = evaluate_state(&tree.node(leaf).state, tracked);

        let (target, value) = if terminal || tree.node(leaf).unexpanded_moves.is_empty() {
            if leaf == SearchTree::ROOT {
                terminal_root_hits += 1;
            }
            (leaf, value)
        } else {
            let child = tree.expand(leaf, choices)?;
            let rollout = simulate_game(
                &tree.node(child).state,
                tracked,
                params.rollout_step_cap,
                choices,
            )?;
            (child, rollout.value)
        };

        backpropagate(&mut tree, target, value);
    }

    let root = tree.root();
    let total: u32 = root
        .children
        .iter()
        .map(|&id| tree.node(id).visit_count)
        .sum();

    let distribution = root
        .children
        .iter()
        .filter_map(|&id| {
            let child = tree.node(id);
            let action = child.action_taken?;
            let probability = if total == 0 {
                0.0
            } else {
                f64::from(child.visit_count) / f64::from(total)
            };
            Some(ActionProbability {
                probability,
                visits: child.visit_count,
                mean_value: child.average_value(),
                action,
            })
        })
        .collect();

    let result = MCTSResult {
        distribution,
        iterations: params.num_searches,
        root_visits: root.visit_count,
        terminal_root_hits,
        tree_size: tree.len(),
    };
    log::debug!(
        "MCTS seat {}: {} iterations, {} nodes, best {:?}",
        state.turn_idx,
        result.iterations,
        result.tree_size,
        result.best_action()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::domino_game::{DominoGame, GameConfig};
    use crate::game::draw_tile::settle_turn;
    use crate::game::player::Player;
    use crate::game::tile::Tile;
    use crate::utils::random_index::SeededChoices;

    fn params(num_searches: usize) -> MCTSHyperparameters {
        MCTSHyperparameters {
            num_searches,
            ..Default::default()
        }
    }

    fn dealt_state(seed: u64) -> BoardState {
        let config = GameConfig {
            hand_size: Some(7),
            ..GameConfig::default()
        };
        let game = DominoGame::new(vec!["ai 1".into(), "ai 2".into()], config).unwrap();
        let mut state = game.new_round(seed);
        // open with the first tile of seat 0 so the ground has ends
        let opening = state.players[0].hand.remove(0);
        state.ground.push_back(opening);
        state.turn_idx = 1;
        assert!(settle_turn(&mut state));
        state
    }

    #[test]
    fn test_visit_accounting() {
        let state = dealt_state(12);
        let mut choices = SeededChoices::new(1);
        let result = mcts_search(&state, &params(200), &mut choices).unwrap();

        assert!(!result.is_empty());
        assert_eq!(result.root_visits, 200);
        assert_eq!(result.terminal_root_hits, 0);
        assert_eq!(result.child_visits() as usize, 200 - result.terminal_root_hits);
        let total: f64 = result.distribution.iter().map(|e| e.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_search_never_mutates_input() {
        let state = dealt_state(31);
        let before = format!("{:?}", state);
        mcts_search(&state, &params(100), &mut SeededChoices::new(2)).unwrap();
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_search_is_deterministic_with_seed() {
        let state = dealt_state(77);
        let a = mcts_search(&state, &params(150), &mut SeededChoices::new(9)).unwrap();
        let b = mcts_search(&state, &params(150), &mut SeededChoices::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_terminal_root_counts_every_iteration() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(2, 2)]);
        players[1].set_hand(Vec::new());
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(2, 3));

        let result = mcts_search(&state, &params(25), &mut SeededChoices::new(0)).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.terminal_root_hits, 25);
        assert_eq!(result.root_visits, 25);
    }

    #[test]
    fn test_no_legal_root_move_gives_empty_distribution() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(6, 6)]);
        players[1].set_hand(vec![Tile::new(3, 4)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(2, 3));

        let result = mcts_search(&state, &params(10), &mut SeededChoices::new(0)).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.root_visits, 0);
    }

    #[test]
    fn test_single_move_gets_all_visits() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(3, 5), Tile::new(6, 6)]);
        players[1].set_hand(vec![Tile::new(1, 1), Tile::new(0, 4)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(2, 3));

        let result = mcts_search(&state, &params(30), &mut SeededChoices::new(5)).unwrap();
        assert_eq!(result.distribution.len(), 1);
        assert_eq!(result.distribution[0].action, Tile::new(3, 5));
        assert_eq!(result.distribution[0].probability, 1.0);
        assert_eq!(result.best_action(), Some(Tile::new(3, 5)));
    }

    #[test]
    fn test_every_iteration_lands_below_a_live_root() {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(3, 6), Tile::new(0, 3)]);
        players[1].set_hand(vec![Tile::new(1, 1), Tile::new(1, 2)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(3, 3));

        let result = mcts_search(&state, &params(200), &mut SeededChoices::new(3)).unwrap();
        assert_eq!(result.distribution.len(), 2);
        assert!(result.best_action().is_some());
        assert_eq!(result.child_visits(), 200);
    }

    #[test]
    fn test_rejects_unknown_tracked_seat() {
        let state = dealt_state(1);
        let bad = MCTSHyperparameters {
            tracked_player: Some(5),
            ..Default::default()
        };
        assert!(mcts_search(&state, &bad, &mut SeededChoices::new(0)).is_err());
    }
}
