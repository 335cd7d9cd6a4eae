//! The root-parallel driver: spawn N independent single-tree
//! workers from the same root state, wait for all of them, merge their root
//! children by move, and pick the move with the best Laplace-smoothed
//! success rate.

use std::collections::BTreeMap;
use std::thread;

use crate::error::{Result, SearchError};
use crate::game::{validate_player, Game};
use crate::report;
use crate::rng::RngProvider;
use crate::search::compute_tree;

/// Search configuration: bounds on how much work a search may do, and
/// whether it reports what it found.
#[derive(Clone, Debug)]
pub struct ComputeOptions {
    /// Number of parallel workers spawned by the driver. Must be positive.
    pub number_of_threads: usize,
    /// Iteration bound per worker. Negative means "no iteration bound", in
    /// which case `max_time` must be non-negative.
    pub max_iterations: i64,
    /// Wall-clock bound per worker, in seconds. Negative means "no time
    /// bound".
    pub max_time: f64,
    /// If true, the driver emits per-move merged statistics and a summary
    /// line via `tracing`.
    pub verbose: bool,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        ComputeOptions {
            number_of_threads: 8,
            max_iterations: 10_000,
            max_time: -1.0,
            verbose: false,
        }
    }
}

impl ComputeOptions {
    pub fn number_of_threads(mut self, n: usize) -> Self {
        self.number_of_threads = n;
        self
    }

    pub fn max_iterations(mut self, n: i64) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn max_time(mut self, seconds: f64) -> Self {
        self.max_time = seconds;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.number_of_threads == 0 {
            return Err(SearchError::invalid_argument(
                "number_of_threads must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::invalid_argument(
                "max_iterations must not be zero; use a negative value for no iteration bound",
            ));
        }
        if self.max_iterations < 0 && self.max_time < 0.0 {
            return Err(SearchError::invalid_argument(
                "at least one of max_iterations or max_time must be non-negative",
            ));
        }
        Ok(())
    }
}

/// A simple affine seed schedule, reproducible across runs: worker `t` gets
/// `a * t + b` for fixed odd `a`/`b` chosen to spread seeds well across the
/// 64-bit space.
fn worker_seed(worker_index: u64) -> u64 {
    const A: u64 = 0x9E37_79B9_7F4A_7C15;
    const B: u64 = 0xD1B5_4A32_D192_ED03;
    worker_index.wrapping_mul(A).wrapping_add(B)
}

fn laplace_score(wins: f64, visits: u64) -> f64 {
    (wins + 1.0) / (visits as f64 + 2.0)
}

/// Pick the move in `merged` maximizing the Laplace-smoothed success rate,
/// ties broken by iteration order over the map (i.e. by `Move`'s `Ord`).
fn pick_best_move<M: Copy + Ord>(merged: &BTreeMap<M, (f64, u64)>) -> M {
    let mut best: Option<(M, f64)> = None;
    for (&mv, &(wins, visits)) in merged {
        let score = laplace_score(wins, visits);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best.expect("merged is non-empty").0
}

/// Run root-parallel MCTS from `root_state` and return the move judged best.
/// Precondition: `root_state` is non-terminal and
/// `root_state.player_to_move()` is `1` or `2`.
///
/// If there is exactly one legal move, it is returned immediately without
/// spawning any worker.
pub fn compute_move<G, R>(root_state: G, options: &ComputeOptions) -> Result<G::Move>
where
    G: Game,
    R: RngProvider,
{
    options.validate()?;
    validate_player(root_state.player_to_move())?;

    let legal_moves = root_state.legal_moves();
    if legal_moves.is_empty() {
        return Err(SearchError::invalid_argument(
            "compute_move called with a terminal root state",
        ));
    }
    if legal_moves.len() == 1 {
        return Ok(legal_moves[0]);
    }

    // The driver owns reporting; workers never report themselves.
    let worker_options = ComputeOptions {
        verbose: false,
        ..options.clone()
    };

    let handles: Vec<_> = (0..options.number_of_threads)
        .map(|t| {
            let state = root_state.clone();
            let opts = worker_options.clone();
            let seed = worker_seed(t as u64);
            thread::Builder::new()
                .name(format!("rmcts-worker-{t}"))
                .spawn(move || compute_tree::<G, R>(state, &opts, seed))
                .expect("failed to spawn MCTS worker thread")
        })
        .collect();

    let mut merged: BTreeMap<G::Move, (f64, u64)> = BTreeMap::new();
    for handle in handles {
        let tree_result = handle
            .join()
            .map_err(|_| SearchError::worker_panicked("a worker thread panicked"))??;

        let root_node = tree_result.tree.get(tree_result.root);
        for &child_id in root_node.children() {
            let child = tree_result.tree.get(child_id);
            let entry = merged.entry(child.mv()).or_insert((0.0, 0));
            entry.0 += child.wins();
            entry.1 += child.visits();
        }
    }

    let best_move = pick_best_move(&merged);

    if options.verbose {
        report::log_summary(&merged, best_move);
    }

    Ok(best_move)
}
