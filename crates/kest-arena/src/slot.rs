//! The indirection slot: live or consumed, nothing else.

/// One entry of a [`SlotArena`](crate::SlotArena).
///
/// Slot `i` starts as `Live(i)`, pointing at the source element in the same
/// position. Selection consumes slots in place; `Consumed` is terminal — a
/// slot never becomes live again, so the arena's live population only
/// shrinks over its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Refers to the source element at the contained position.
    Live(usize),
    /// Nullified by selection, either as a round winner or as a duplicate
    /// collapsed during a scan.
    Consumed,
}

impl Slot {
    /// Whether this slot still refers to a source element.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// The source position this slot refers to, or `None` once consumed.
    pub fn source_index(self) -> Option<usize> {
        match self {
            Self::Live(index) => Some(index),
            Self::Consumed => None,
        }
    }
}
