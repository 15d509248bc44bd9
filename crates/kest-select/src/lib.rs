//! Destructive order-statistic selection over a Kest slot arena.
//!
//! [`select_nth`] answers "what is the `n`-th largest *distinct* value?"
//! by repeated in-place maximum extraction: each round scans the arena's
//! slots once, collapses duplicates of the running best as it finds them,
//! and consumes the winner. No element is ever copied and no auxiliary
//! buffer is allocated — the cost is `O(n * len)` time and `O(1)` extra
//! space, which beats a full sort whenever only a few top ranks are needed.
//!
//! [`nth_largest`] wraps construction and a single query for callers that
//! do not want to manage arena state themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod select;

// Public re-exports for the primary API surface.
pub use select::{nth_largest, select_nth};
