//! A generic Monte Carlo Tree Search engine for finite, deterministic,
//! two-player, zero-sum games with perfect information.
//!
//! The engine is organized as four cooperating pieces:
//!
//! - [`Game`], the contract a caller's game state must satisfy.
//! - [`node`], the arena-allocated search tree, one node per explored
//!   state.
//! - [`search::compute_tree`], one deterministic single-tree MCTS loop.
//! - [`compute_move`], the root-parallel driver: runs `N` independent
//!   trees from the same root and merges their statistics to pick a move.
//!
//! Simulations are uniformly random; there is no learned policy, no
//! transposition table, and no persistence of a tree across moves. Every
//! call to [`compute_move`] starts fresh.

pub mod error;
pub mod game;
pub mod node;
pub mod rng;

mod driver;
mod report;
mod search;

pub use driver::{compute_move, ComputeOptions};
pub use error::SearchError;
pub use game::{Game, Player, PLAYER_ONE, PLAYER_TWO};
pub use node::{Node, NodeId, Tree};
pub use rng::{Rng, RngProvider};
pub use search::{compute_tree, TreeResult};

#[cfg(feature = "nanorand")]
pub use rng::DefaultRng;
