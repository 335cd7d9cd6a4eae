//! The contract a game must satisfy to be searched. Purely
//! behavioral: how a game represents its own state is its own affair.

use std::fmt::Display;

use crate::error::SearchError;
use crate::rng::Rng;

/// Either player in a two-player game, represented as the raw `1`/`2` the
/// contract uses rather than a 2-variant enum, since `player_to_move ∉ {1, 2}`
/// must be a *runtime-checked* contract violation, which an enum
/// would make unrepresentable and therefore untestable.
pub type Player = u8;

pub const PLAYER_ONE: Player = 1;
pub const PLAYER_TWO: Player = 2;

/// `Err` iff `player` is not `1` or `2`.
pub fn validate_player(player: Player) -> Result<(), SearchError> {
    if player == PLAYER_ONE || player == PLAYER_TWO {
        Ok(())
    } else {
        Err(SearchError::invalid_argument(format!(
            "player_to_move must be 1 or 2, got {player}"
        )))
    }
}

/// A finite, deterministic, two-player, zero-sum game with perfect
/// information.
pub trait Game: Clone + Send + Sync + 'static {
    /// A move is copyable, equality-comparable, orderable (used as the key
    /// when the driver merges per-worker statistics), and displayable (used
    /// in verbose diagnostics).
    type Move: Copy + Eq + Ord + Display + Send + 'static;

    /// Sentinel used for the root node's `move` field, which was produced by
    /// no move at all.
    const NO_MOVE: Self::Move;

    /// All moves legal from this state. Empty iff the state is terminal.
    /// Order need not be stable across calls.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Mutate `self` into the successor of `mv`. Precondition: `mv` is in
    /// `self.legal_moves()`. Must flip `player_to_move` to the opponent,
    /// except in games that grant an extra turn, which represent it as a
    /// forced "pass" move of their own, not as an exception in the core.
    fn apply(&mut self, mv: Self::Move);

    /// Mutate `self` by applying one legal move chosen uniformly at random.
    /// Precondition: `self` is non-terminal.
    fn apply_random<R: Rng>(&mut self, rng: &mut R);

    /// True iff `legal_moves()` is empty.
    fn terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// The terminal result from `perspective`'s point of view: `1.0` if
    /// `perspective` lost, `0.0` if `perspective` won, `0.5` for a draw.
    /// Precondition: `self` is terminal.
    fn result(&self, perspective: Player) -> f64;

    /// The side to move in this state.
    fn player_to_move(&self) -> Player;
}
