//! Kest: a bounded, single-allocation arena for repeated k-th largest queries.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Kest sub-crates. For most users, adding `kest` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kest::prelude::*;
//!
//! let readings = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! // One arena, one allocation, a sequence of destructive queries.
//! let mut arena = SlotArena::new(&readings).unwrap();
//! assert_eq!(select_nth(&mut arena, 1), Some(&9));
//! assert_eq!(select_nth(&mut arena, 1), Some(&6));
//!
//! // Or a one-shot query that manages its own arena.
//! assert_eq!(nth_largest(&readings, 2).unwrap(), Some(&6));
//! ```
//!
//! The source slice is never copied, mutated, or reordered: results borrow
//! it at their original positions, and the arena's only heap allocation is
//! its slot table, released exactly once when the arena drops.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `kest-arena` | [`arena::SlotArena`], [`arena::Slot`], [`arena::ArenaError`] |
//! | [`select`] | `kest-select` | [`select::select_nth`], [`select::nth_largest`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot storage and the arena lifecycle (`kest-arena`).
///
/// Most users only need [`arena::SlotArena`] from this module — it is also
/// available in the [`prelude`].
pub use kest_arena as arena;

/// Destructive order-statistic selection (`kest-select`).
///
/// [`select::select_nth`] runs one ranked query over an existing arena;
/// [`select::nth_largest`] builds a throwaway arena for a single query.
pub use kest_select as select;

/// Common imports for typical Kest usage.
///
/// ```rust
/// use kest::prelude::*;
/// ```
pub mod prelude {
    pub use kest_arena::{ArenaError, Slot, SlotArena};
    pub use kest_select::{nth_largest, select_nth};
}
