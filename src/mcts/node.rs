//! Arena-backed search tree.
//!
//! Nodes live in one `Vec` and refer to each other by index. Children are
//! owned by the arena; the parent index is only followed upwards during
//! backpropagation.

use crate::game::apply_move::apply_move;
use crate::game::board_state::BoardState;
use crate::game::draw_tile::settle_turn;
use crate::game::get_valid_moves::playable_tiles;
use crate::game::round_outcome::is_terminal;
use crate::game::tile::Tile;
use crate::utils::random_index::ChoiceSource;
use crate::Result;

pub type NodeId = usize;

/// A node in the MCTS tree
#[derive(Debug, Clone)]
pub struct MCTSNode {
    /// Owned snapshot of the position
    pub state: BoardState,

    /// Index of parent node (if any) - used for backpropagation
    pub parent: Option<NodeId>,

    pub children: Vec<NodeId>,

    /// Legal tiles of the seat to act that have no child yet
    pub unexpanded_moves: Vec<Tile>,

    pub visit_count: u32,

    /// Sum of all values backpropagated through this node
    pub value_sum: f64,

    /// Tile played to reach this node from its parent
    pub action_taken: Option<Tile>,
}

impl MCTSNode {
    pub fn new(mut state: BoardState, parent: Option<NodeId>, action_taken: Option<Tile>) -> Self {
        let unexpanded_moves = if is_terminal(&state) {
            Vec::new()
        } else {
            let seat = state.turn_idx;
            playable_tiles(&mut state.players[seat], &state.ground)
        };

        MCTSNode {
            state,
            parent,
            children: Vec::new(),
            unexpanded_moves,
            visit_count: 0,
            value_sum: 0.0,
            action_taken,
        }
    }

    /// Returns the average value of this node
    pub fn average_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.value_sum / f64::from(self.visit_count)
        }
    }

    /// No moves left to expand and at least one child to descend into.
    pub fn is_fully_expanded(&self) -> bool {
        self.unexpanded_moves.is_empty() && !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Owns every node of one search.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<MCTSNode>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    /// Roots a tree at `state`, which must already be a private copy.
    pub fn new(state: BoardState) -> Self {
        SearchTree {
            nodes: vec![MCTSNode::new(state, None, None)],
        }
    }

    pub fn root(&self) -> &MCTSNode {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expands `id` with one unexpanded move chosen uniformly at random.
    ///
    /// The move is played on a copy of the node's state, the turn advances,
    /// and the next seat draws or passes until it can act.
    ///
    /// # Panics
    /// Panics if the node has no unexpanded moves left.
    pub fn expand<C: ChoiceSource + ?Sized>(&mut self, id: NodeId, choices: &mut C) -> Result<NodeId> {
        let node = &mut self.nodes[id];
        assert!(
            !node.unexpanded_moves.is_empty(),
            "expand called on a node without unexpanded moves"
        );
        let index = choices.pick(node.unexpanded_moves.len());
        let action = node.unexpanded_moves.remove(index);

        let mut child_state = node.state.snapshot();
        let seat = child_state.turn_idx;
        apply_move(&mut child_state, &action, seat, choices)?;
        child_state.change_turn();
        settle_turn(&mut child_state);

        let child_id = self.nodes.len();
        self.nodes
            .push(MCTSNode::new(child_state, Some(id), Some(action)));
        self.nodes[id].children.push(child_id);
        Ok(child_id)
    }
}
