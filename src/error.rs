use thiserror::Error;

/// The three error categories of the engine: a caller or `Game` impl broke a
/// precondition, an internal invariant was violated (an engine or `Game`
/// bug), or a worker thread failed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A precondition documented on a public function was violated, e.g. a
    /// terminal root state, an out-of-range `player_to_move`, or an
    /// unsatisfiable `ComputeOptions` (both bounds negative).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal consistency check failed: `add_child` couldn't find its
    /// move in `untried_moves`, or `select_uct` was called on a childless
    /// node. Indicates a defect in the engine or in the `Game` it was given.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),

    /// A worker thread panicked. The driver surfaces this rather than
    /// propagating the panic into the caller's thread.
    #[error("worker thread panicked: {0}")]
    WorkerPanicked(String),
}

impl SearchError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SearchError::InvalidArgument(message.into())
    }

    pub fn internal_invariant(message: impl Into<String>) -> Self {
        SearchError::InternalInvariant(message.into())
    }

    pub fn worker_panicked(message: impl Into<String>) -> Self {
        SearchError::WorkerPanicked(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
