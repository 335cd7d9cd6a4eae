//! The single-tree MCTS loop: select → expand → simulate →
//! backpropagate, bounded by iteration count and/or wall-clock time, seeded
//! from a caller-supplied 64-bit value.

use std::time::Instant;

use crate::driver::ComputeOptions;
use crate::error::{Result, SearchError};
use crate::game::{validate_player, Game};
use crate::node::{NodeId, Tree};
use crate::rng::RngProvider;

/// The owned result of a single-tree search: the fully populated tree, the
/// root's id, and the number of iterations actually run.
pub struct TreeResult<G: Game> {
    pub tree: Tree<G>,
    pub root: NodeId,
    pub iterations: u64,
}

impl<G: Game> TreeResult<G> {
    /// The move this single tree recommends on its own: the root's most
    /// visited child, ties broken by first-seen order. `None` only if the
    /// search ran zero iterations and the root was never expanded.
    ///
    /// `compute_move` does not call this: root-parallel selection merges
    /// every worker's children by move and picks by Laplace-smoothed win
    /// rate instead, which is a different (and better-founded) criterion
    /// once more than one tree is involved. This is for callers driving a
    /// single tree directly.
    pub fn best_move(&self) -> Option<G::Move> {
        self.tree
            .best_child_by_visits(self.root)
            .map(|id| self.tree.get(id).mv())
    }
}

fn validate_options(options: &ComputeOptions) -> Result<()> {
    if options.max_iterations == 0 {
        return Err(SearchError::invalid_argument(
            "max_iterations must not be zero; use a negative value for no iteration bound",
        ));
    }
    if options.max_iterations < 0 && options.max_time < 0.0 {
        return Err(SearchError::invalid_argument(
            "at least one of max_iterations or max_time must be non-negative",
        ));
    }
    Ok(())
}

fn budget_exhausted(options: &ComputeOptions, iterations: u64, start: Instant) -> bool {
    let iteration_limit_hit =
        options.max_iterations >= 0 && iterations >= options.max_iterations as u64;
    let time_limit_hit =
        options.max_time >= 0.0 && start.elapsed().as_secs_f64() >= options.max_time;
    iteration_limit_hit || time_limit_hit
}

/// Run one deterministic MCTS search from `root_state`, seeded by `seed`.
/// Precondition: `root_state` is non-terminal and `root_state.player_to_move()`
/// is `1` or `2`. Given identical `(root_state, options, seed)` this produces
/// a bit-identical tree.
pub fn compute_tree<G, R>(root_state: G, options: &ComputeOptions, seed: u64) -> Result<TreeResult<G>>
where
    G: Game,
    R: RngProvider,
{
    validate_options(options)?;
    validate_player(root_state.player_to_move())?;
    if root_state.terminal() {
        return Err(SearchError::invalid_argument(
            "compute_tree called with a terminal root state",
        ));
    }

    let mut rng = R::from_seed(seed);
    let (mut tree, root) = Tree::new(&root_state);
    let start = Instant::now();
    let mut iterations: u64 = 0;

    while !budget_exhausted(options, iterations, start) {
        let mut state = root_state.clone();
        let mut node = root;

        // Selection: descend while fully expanded and non-terminal.
        while !tree.get(node).has_untried() && tree.get(node).has_children() {
            node = tree.select_uct(node)?;
            state.apply(tree.get(node).mv());
        }

        // Expansion: if there's an untried move, add exactly one child.
        if tree.get(node).has_untried() {
            let mv = tree.get(node).pick_untried(&mut rng);
            state.apply(mv);
            node = tree.add_child(node, mv, &state)?;
        }

        // Simulation: random playout to a terminal state. A no-op if
        // expansion's child was itself terminal.
        while !state.terminal() {
            state.apply_random(&mut rng);
        }

        // Backpropagation: walk node -> root, scoring each from its own
        // player_to_move's perspective.
        tree.backpropagate(node, &state)?;

        iterations += 1;
    }

    Ok(TreeResult {
        tree,
        root,
        iterations,
    })
}
