//! Tree descent and value propagation.
//!
//! Selection uses UCB1 over visited children; values are propagated upwards
//! unchanged at every level, so the whole tree scores positions from one
//! tracked seat's point of view.

use crate::mcts::node::{MCTSNode, NodeId, SearchTree};

/// UCB1: `mean + c * sqrt(ln(N_parent) / N_child)`.
///
/// Only defined for visited children.
pub fn ucb(parent_visits: u32, child: &MCTSNode, c: f64) -> f64 {
    debug_assert!(child.visit_count > 0, "UCB is undefined for unvisited children");
    let visits = f64::from(child.visit_count);
    child.value_sum / visits + c * (f64::from(parent_visits).ln() / visits).sqrt()
}

/// Child of `id` with the highest UCB; the first one scanned wins ties.
///
/// # Returns
/// Index of the best child, or None if no children exist
pub fn select_best_child(tree: &SearchTree, id: NodeId, c: f64) -> Option<NodeId> {
    let node = tree.node(id);
    let mut best: Option<(NodeId, f64)> = None;

    for &child_id in &node.children {
        let score = ucb(node.visit_count, tree.node(child_id), c);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((child_id, score)),
        }
    }

    best.map(|(child_id, _)| child_id)
}

/// Descends from `from` while nodes are fully expanded.
pub fn select_leaf(tree: &SearchTree, from: NodeId, c: f64) -> NodeId {
    let mut current = from;
    while tree.node(current).is_fully_expanded() {
        match select_best_child(tree, current, c) {
            Some(child) => current = child,
            None => break,
        }
    }
    current
}

/// Adds one visit and `value` to `from` and each of its ancestors.
pub fn backpropagate(tree: &mut SearchTree, from: NodeId, value: f64) {
    let mut current = Some(from);
    while let Some(id) = current {
        let node = tree.node_mut(id);
        node.visit_count += 1;
        node.value_sum += value;
        current = node.parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board_state::BoardState;
    use crate::game::player::Player;
    use crate::game::tile::Tile;
    use crate::utils::random_index::ScriptedChoices;

    fn expanded_tree() -> SearchTree {
        let mut players = vec![Player::new(0, "ai 1"), Player::new(1, "ai 2")];
        players[0].set_hand(vec![Tile::new(1, 4), Tile::new(1, 5), Tile::new(1, 6)]);
        players[1].set_hand(vec![Tile::new(4, 4), Tile::new(5, 5), Tile::new(6, 6)]);
        let mut state = BoardState::new(players, Vec::new());
        state.ground.push_back(Tile::new(1, 1));

        let mut tree = SearchTree::new(state);
        let mut choices = ScriptedChoices::first();
        for _ in 0..3 {
            tree.expand(SearchTree::ROOT, &mut choices).unwrap();
        }
        tree
    }

    #[test]
    fn test_ucb_formula() {
        let mut tree = expanded_tree();
        let child = tree.root().children[0];
        tree.node_mut(child).visit_count = 4;
        tree.node_mut(child).value_sum = -8.0;
        let expected = -2.0 + 1.5 * ((10f64).ln() / 4.0).sqrt();
        assert!((ucb(10, tree.node(child), 1.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_select_best_child_empty() {
        let tree = expanded_tree();
        let leaf = tree.root().children[0];
        assert_eq!(select_best_child(&tree, leaf, 1.4), None);
    }

    #[test]
    fn test_exploration_prefers_less_visited() {
        let mut tree = expanded_tree();
        let children = tree.root().children.clone();
        tree.node_mut(SearchTree::ROOT).visit_count = 12;
        for (&child, visits) in children.iter().zip([5u32, 2, 5]) {
            tree.node_mut(child).visit_count = visits;
            tree.node_mut(child).value_sum = -5.0 * f64::from(visits);
        }
        assert_eq!(select_best_child(&tree, SearchTree::ROOT, 1.4), Some(children[1]));
    }

    #[test]
    fn test_exploitation_without_exploration() {
        let mut tree = expanded_tree();
        let children = tree.root().children.clone();
        tree.node_mut(SearchTree::ROOT).visit_count = 3;
        for (&child, value) in children.iter().zip([-9.0, -3.0, -6.0]) {
            tree.node_mut(child).visit_count = 1;
            tree.node_mut(child).value_sum = value;
        }
        assert_eq!(select_best_child(&tree, SearchTree::ROOT, 0.0), Some(children[1]));
    }

    #[test]
    fn test_ties_go_to_first_child() {
        let mut tree = expanded_tree();
        let children = tree.root().children.clone();
        tree.node_mut(SearchTree::ROOT).visit_count = 3;
        for &child in &children {
            tree.node_mut(child).visit_count = 1;
            tree.node_mut(child).value_sum = -4.0;
        }
        assert_eq!(select_best_child(&tree, SearchTree::ROOT, 1.4), Some(children[0]));
        assert_eq!(select_leaf(&tree, SearchTree::ROOT, 1.4), children[0]);
    }

    #[test]
    fn test_backpropagate_reaches_root_without_negation() {
        let mut tree = expanded_tree();
        let child = tree.root().children[2];
        let grandchild = tree.expand(child, &mut ScriptedChoices::first()).unwrap();

        backpropagate(&mut tree, grandchild, -7.0);

        for id in [grandchild, child, SearchTree::ROOT] {
            assert_eq!(tree.node(id).visit_count, 1);
            assert_eq!(tree.node(id).value_sum, -7.0, "Values are not negated per level");
        }
        assert_eq!(tree.node(tree.root().children[0]).visit_count, 0);
    }

    #[test]
    fn test_select_leaf_stops_at_partially_expanded_root() {
        let mut tree = expanded_tree();
        tree.node_mut(SearchTree::ROOT).unexpanded_moves.push(Tile::new(1, 3));
        assert_eq!(select_leaf(&tree, SearchTree::ROOT, 1.4), SearchTree::ROOT);
    }
}
