//! Repeated-maximum selection with duplicate collapse.

use kest_arena::{ArenaError, SlotArena};

/// Select the `n`-th largest distinct value among the arena's live slots.
///
/// Rank is 1-indexed: `n == 1` is the largest distinct value, `n == 2` the
/// second-largest, and so on. `n == 0` is a defined edge case, not an
/// error — there is no 0th maximum, so it returns `None` without touching
/// any slot.
///
/// Each of the up-to-`n` rounds scans the slots once, strictly left to
/// right. The first live slot becomes the running best; later live slots
/// replace it only on strict `>`. A live slot whose value equals the
/// running best's, at a different slot position, is consumed during the
/// same scan, so equal values act as one logical candidate. The round
/// winner is consumed before the next round begins. If a round starts with
/// no live slot, fewer than `n` distinct values remain and the query
/// answers `None`.
///
/// The returned reference borrows the source sequence at the winning
/// value's original position — nothing is copied.
///
/// Queries compose: because winners and their duplicates stay consumed,
/// calling `select_nth(arena, 1)` twice yields the largest and then the
/// second-largest distinct value.
///
/// Ties between equal values are represented by the first position
/// discovered as the running best during the collapsing scan. Callers that
/// need position-deterministic results on data with repeated values rely on
/// this exact discovery order.
pub fn select_nth<'a, T: PartialOrd>(arena: &mut SlotArena<'a, T>, n: usize) -> Option<&'a T> {
    if n == 0 {
        return None;
    }
    let mut result = None;
    for _ in 0..n {
        let best = run_round(arena)?;
        result = arena.value(best);
        arena.consume(best);
    }
    result
}

/// Build a fresh arena over `source` and run a single `n`-th largest query.
///
/// Construction failures ([`ArenaError::ZeroSize`] on an empty source,
/// [`ArenaError::AllocationFailed`] if the backing reservation is refused)
/// propagate to the caller; a successful construction always yields a
/// well-defined `Ok` outcome, with `None` standing for "no such rank".
pub fn nth_largest<T: PartialOrd>(source: &[T], n: usize) -> Result<Option<&T>, ArenaError> {
    let mut arena = SlotArena::new(source)?;
    Ok(select_nth(&mut arena, n))
}

/// One extraction round: a single left-to-right scan that finds the best
/// live slot and collapses its duplicates along the way.
///
/// Returns the winning slot's position, still live, or `None` if no live
/// slot remains. Identity is compared by slot position, never by address,
/// so "same value elsewhere" and "the best slot itself" cannot be confused.
fn run_round<'a, T: PartialOrd>(arena: &mut SlotArena<'a, T>) -> Option<usize> {
    let mut best: Option<(usize, &'a T)> = None;
    for position in 0..arena.len() {
        let Some(value) = arena.value(position) else {
            continue;
        };
        match best {
            None => best = Some((position, value)),
            Some((best_position, best_value)) => {
                if value > best_value {
                    best = Some((position, value));
                } else if value == best_value && position != best_position {
                    // Equal value at a distinct position: collapse it now so
                    // the winner is unambiguous by the end of the scan.
                    arena.consume(position);
                }
            }
        }
    }
    best.map(|(position, _)| position)
}
