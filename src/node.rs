//! The search tree: an arena of [`Node`]s addressed by compact [`NodeId`]s
//! Parent/child links are plain indices, not references.
//! There is no ownership cycle to reason about, and the whole arena drops
//! in one shot when the owning [`Tree`] goes out of scope.

use crate::error::SearchError;
use crate::game::{Game, Player};
use crate::rng::Rng;

/// An index into a [`Tree`]'s node arena. Cheap to copy, meaningless outside
/// the `Tree` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One node of the search tree.
pub struct Node<G: Game> {
    /// The move that produced this node's state from its parent's, or
    /// `G::NO_MOVE` at the root. Immutable.
    mv: G::Move,
    /// Back-reference to the parent, or `None` at the root. A relation, not
    /// an ownership edge.
    parent: Option<NodeId>,
    /// The player to move *at this node's state*, captured at construction.
    player_to_move: Player,
    /// Accumulated backpropagated scores.
    wins: f64,
    /// Number of times this node appeared on a backpropagated path.
    visits: u64,
    /// Legal moves from this node's state that no child has yet explored.
    untried_moves: Vec<G::Move>,
    /// Children, in the order they were added.
    children: Vec<NodeId>,
}

impl<G: Game> Node<G> {
    fn new(mv: G::Move, parent: Option<NodeId>, state: &G) -> Self {
        let untried_moves = if state.terminal() {
            Vec::new()
        } else {
            state.legal_moves()
        };
        Node {
            mv,
            parent,
            player_to_move: state.player_to_move(),
            wins: 0.0,
            visits: 0,
            untried_moves,
            children: Vec::new(),
        }
    }

    pub fn mv(&self) -> G::Move {
        self.mv
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn wins(&self) -> f64 {
        self.wins
    }

    pub fn visits(&self) -> u64 {
        self.visits
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn untried_moves(&self) -> &[G::Move] {
        &self.untried_moves
    }

    pub fn has_untried(&self) -> bool {
        !self.untried_moves.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Draw an untried move uniformly at random. Does not remove it;
    /// removal happens in [`Tree::add_child`] once the move is actually
    /// expanded. Precondition: `has_untried()`.
    pub fn pick_untried<R: Rng>(&self, rng: &mut R) -> G::Move {
        debug_assert!(self.has_untried(), "pick_untried on a fully expanded node");
        let idx = rng.gen_range(0..self.untried_moves.len());
        self.untried_moves[idx]
    }

    fn update(&mut self, score: f64) {
        self.visits += 1;
        self.wins += score;
    }
}

/// An arena-allocated MCTS tree, owned by a single worker. Trees never share
/// mutable state across workers.
pub struct Tree<G: Game> {
    nodes: Vec<Node<G>>,
}

impl<G: Game> Tree<G> {
    /// Build a tree containing only the root, constructed from `root_state`.
    pub fn new(root_state: &G) -> (Self, NodeId) {
        let root = Node::new(G::NO_MOVE, None, root_state);
        let tree = Tree { nodes: vec![root] };
        (tree, NodeId(0))
    }

    pub fn get(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Apply a backpropagated score to a single node.
    pub fn update(&mut self, id: NodeId, score: f64) {
        self.nodes[id.0].update(score);
    }

    /// Create a new child of `parent` for `mv`, producing it from
    /// `child_state` (already advanced past `mv`), and remove `mv` from
    /// `parent`'s untried moves. Precondition: `mv ∈ untried_moves`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        mv: G::Move,
        child_state: &G,
    ) -> Result<NodeId, SearchError> {
        let pos = self.nodes[parent.0]
            .untried_moves
            .iter()
            .position(|&m| m == mv)
            .ok_or_else(|| {
                SearchError::internal_invariant(format!(
                    "add_child: move {mv} not found in parent's untried_moves"
                ))
            })?;
        self.nodes[parent.0].untried_moves.swap_remove(pos);

        let child = Node::new(mv, Some(parent), child_state);
        let id = NodeId(self.nodes.len());
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Select the child maximizing UCT, breaking ties by first-seen order.
    /// Precondition: `has_children()`.
    ///
    /// `Iterator::max_by` is deliberately not used here: it resolves ties to
    /// the *last* equally-maximal element, the opposite of the stable,
    /// first-seen tie-break wanted here.
    pub fn select_uct(&self, id: NodeId) -> Result<NodeId, SearchError> {
        let node = &self.nodes[id.0];
        if node.children.is_empty() {
            return Err(SearchError::internal_invariant(
                "select_uct called on a node with no children",
            ));
        }
        let parent_visits = node.visits as f64;

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let score = self.uct_score(child_id, parent_visits);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }
        Ok(best.expect("children is non-empty").0)
    }

    fn uct_score(&self, child_id: NodeId, parent_visits: f64) -> f64 {
        let child = &self.nodes[child_id.0];
        let visits = child.visits as f64;
        let exploitation = child.wins / visits;
        let exploration = (2.0 * parent_visits.ln() / visits).sqrt();
        exploitation + exploration
    }

    /// The child with the greatest visit count, ties broken by first-seen
    /// order. Precondition: `has_children()`.
    pub fn best_child_by_visits(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        let mut best: Option<(NodeId, u64)> = None;
        for &child_id in &node.children {
            let visits = self.nodes[child_id.0].visits;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((child_id, visits)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Walk from `leaf` up through parent links to the root, updating each
    /// node's statistics from its own perspective. Precondition:
    /// `terminal_state` is terminal.
    pub fn backpropagate(&mut self, leaf: NodeId, terminal_state: &G) -> Result<(), SearchError> {
        if !terminal_state.terminal() {
            return Err(SearchError::internal_invariant(
                "backpropagate called with a non-terminal state",
            ));
        }

        let mut current = Some(leaf);
        while let Some(id) = current {
            let perspective = self.nodes[id.0].player_to_move;
            let score = terminal_state.result(perspective);
            self.nodes[id.0].update(score);
            current = self.nodes[id.0].parent;
        }
        Ok(())
    }
}
