//! The single-allocation slot arena.
//!
//! [`SlotArena`] is a mutable, nullable view over immutable data. It owns
//! exactly `source.len()` [`Slot`]s in one contiguous boxed slice and never
//! grows, shrinks, or relocates them — consumers flip slots to
//! [`Slot::Consumed`] in place. Values handed out by [`SlotArena::value`]
//! borrow the source directly for the source's own lifetime, so they stay
//! valid after the arena is dropped.

use std::mem;
use std::ops::Index;

use crate::error::ArenaError;
use crate::slot::Slot;

/// Indirection arena over a borrowed, read-only source slice.
///
/// Construction makes exactly one allocation request, sized
/// `source.len() * size_of::<Slot>()`; destruction releases it exactly once
/// via `Drop`, however the owning scope exits. Use-after-release is
/// unrepresentable — dropping the arena consumes it.
///
/// The arena supports one logical sequence of destructive queries by a
/// single caller. Queries that must not observe each other's consumption
/// need one arena each, built from the same source.
#[derive(Debug)]
pub struct SlotArena<'a, T> {
    /// The borrowed source sequence. Never mutated or reordered.
    source: &'a [T],
    /// One slot per source element. The only heap allocation this type owns.
    slots: Box<[Slot]>,
}

impl<'a, T> SlotArena<'a, T> {
    /// Build an arena over `source`, with slot `i` initially live and
    /// referring to source position `i`.
    ///
    /// Fails with [`ArenaError::ZeroSize`] on an empty source (no query
    /// could produce a value) and with [`ArenaError::AllocationFailed`] if
    /// the allocator refuses the backing reservation.
    pub fn new(source: &'a [T]) -> Result<Self, ArenaError> {
        // A zero-sized Slot is impossible with the current representation,
        // but the sizing arithmetic below assumes it is non-zero.
        if source.is_empty() || mem::size_of::<Slot>() == 0 {
            return Err(ArenaError::ZeroSize);
        }
        let requested = source
            .len()
            .checked_mul(mem::size_of::<Slot>())
            .ok_or(ArenaError::AllocationFailed {
                requested: usize::MAX,
            })?;

        // Reserve the exact capacity up front so the fill below cannot
        // reallocate: one request, one backing block.
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(source.len())
            .map_err(|_| ArenaError::AllocationFailed { requested })?;
        slots.extend((0..source.len()).map(Slot::Live));

        Ok(Self {
            source,
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots. Fixed at construction; equals the source length.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena holds no slots. Always `false` for a successfully
    /// constructed arena; provided for the conventional `len`/`is_empty`
    /// pairing.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots still live. Monotonically non-increasing.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_live()).count()
    }

    /// The slot at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn slot(&self, position: usize) -> Slot {
        self.slots[position]
    }

    /// Resolve the slot at `position` to its source element, or `None` if
    /// the slot has been consumed.
    ///
    /// The returned reference borrows the source, not the arena, so it
    /// outlives subsequent mutation of the slots.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn value(&self, position: usize) -> Option<&'a T> {
        let source: &'a [T] = self.source;
        self.slots[position].source_index().map(|i| &source[i])
    }

    /// Consume the slot at `position`, nullifying it in place. No other
    /// slot moves. Consuming an already-consumed slot leaves it consumed.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn consume(&mut self, position: usize) {
        self.slots[position] = Slot::Consumed;
    }

    /// Iterate slots left to right as `(position, slot)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Slot)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// The borrowed source sequence.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Size of the backing slot allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * mem::size_of::<Slot>()
    }
}

impl<T> Index<usize> for SlotArena<'_, T> {
    type Output = Slot;

    fn index(&self, position: usize) -> &Slot {
        &self.slots[position]
    }
}
