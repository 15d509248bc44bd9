//! Single-allocation indirection arena over an immutable sequence.
//!
//! This is the storage half of Kest. A [`SlotArena`] borrows a read-only
//! source slice and owns exactly one heap allocation: a boxed slice of
//! [`Slot`]s, one per source element. Selection (in `kest-select`) works
//! entirely on the slots, consuming them in place, so the source is never
//! copied or reordered.
//!
//! The backing allocation is made once at construction and released once by
//! `Drop`, on every exit path. Allocator refusal is reported as
//! [`ArenaError::AllocationFailed`] rather than aborting the process.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod slot;

// Public re-exports for the primary API surface.
pub use arena::SlotArena;
pub use error::ArenaError;
pub use slot::Slot;
