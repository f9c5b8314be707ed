//! Content selection strategies.
//!
//! The generator never decides which pool entry to use by itself; it asks a
//! [`Selector`]. Production code uses [`RandomSelector`], tests can pin the
//! output with [`FixedSelector`] or a seeded random selector.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one entry out of a pool
pub trait Selector: Send + Sync {
    /// Index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

impl<T: Selector + ?Sized> Selector for &T {
    fn pick(&self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: Selector + ?Sized> Selector for Box<T> {
    fn pick(&self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Choose an element of a non-empty pool.
///
/// Out-of-range picks are clamped to the last element.
pub fn choose<'a, T, S: Selector + ?Sized>(selector: &S, pool: &'a [T]) -> &'a T {
    let last = pool.len().saturating_sub(1);
    &pool[selector.pick(pool.len()).min(last)]
}

/// Uniform random selection
#[derive(Debug, Default)]
pub struct RandomSelector {
    /// Seeded generator; thread-local rng when `None`
    seeded: Option<Mutex<StdRng>>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproducible selection from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Selector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        match &self.seeded {
            Some(rng) => rng.lock().random_range(0..len),
            None => rand::rng().random_range(0..len),
        }
    }
}

/// Always picks the same index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl Selector for FixedSelector {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}
