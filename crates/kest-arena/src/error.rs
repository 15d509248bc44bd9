//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing a [`SlotArena`](crate::SlotArena).
///
/// Construction is the only fallible operation in this crate. Selection in
/// `kest-select` never fails in the error sense — it reports "no result" as
/// a plain `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The source sequence is empty, or the slot representation is
    /// zero-sized. Either way the backing allocation would be degenerate
    /// and no query could ever produce a value.
    ZeroSize,
    /// The allocator refused the single backing reservation.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "arena would be zero-sized"),
            Self::AllocationFailed { requested } => {
                write!(f, "arena allocation failed: requested {requested} bytes")
            }
        }
    }
}

impl Error for ArenaError {}
