//! Benchmark input profiles for the Kest selection arena.
//!
//! Provides deterministic source sequences for benchmarking:
//!
//! - [`random_profile`]: seeded uniform values, the typical case
//! - [`saturated_profile`]: every element equal, the collapse-heavy worst case
//! - [`ascending_profile`]: sorted ascending, the best-replacement worst case

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Seeded uniform random values in `[-1_000_000, 1_000_000)`.
///
/// The same `(len, seed)` pair always produces the same sequence, so
/// criterion runs are comparable across machines and commits.
pub fn random_profile(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random_range(-1_000_000..1_000_000))
        .collect()
}

/// Every element equal: each round collapses all but one slot.
pub fn saturated_profile(len: usize) -> Vec<i64> {
    vec![42; len]
}

/// Strictly ascending values: every scanned live slot replaces the
/// running best, the most comparison-heavy layout for a single round.
pub fn ascending_profile(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}
