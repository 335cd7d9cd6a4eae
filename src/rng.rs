//! A small RNG abstraction so the search core doesn't commit to one
//! generator. Workers need a *deterministic*, caller-supplied seed so that
//! a fixed `(root_state, options, seed)` always produces the same tree, so
//! `RngProvider` seeds explicitly rather than offering a bare `init()`.

use std::ops::Range;

/// Implement this for any custom random number generator.
pub trait Rng: Send + Sync + 'static {
    fn gen_range(&mut self, bounds: Range<usize>) -> usize;
}

/// An `Rng` that can be constructed deterministically from a 64-bit seed.
pub trait RngProvider: Rng {
    fn from_seed(seed: u64) -> Self;
}

#[cfg(feature = "nanorand")]
mod default_rng {
    use nanorand::WyRand;
    use std::ops::Range;

    /// The default RNG backend: `nanorand`'s WyRand, seeded per worker.
    pub struct DefaultRng(WyRand);

    impl super::RngProvider for DefaultRng {
        fn from_seed(seed: u64) -> Self {
            DefaultRng(WyRand::new_seed(seed))
        }
    }

    impl super::Rng for DefaultRng {
        fn gen_range(&mut self, bounds: Range<usize>) -> usize {
            use nanorand::Rng;
            self.0.generate_range(bounds)
        }
    }
}

#[cfg(feature = "nanorand")]
pub use default_rng::*;
