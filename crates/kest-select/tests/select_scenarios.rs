use kest_arena::{ArenaError, SlotArena};
use kest_select::{nth_largest, select_nth};

#[test]
fn pi_digits_cover_first_and_second_rank() {
    let source = [3, 1, 4, 1, 5, 9, 2, 6];

    let mut arena = SlotArena::new(&source).unwrap();
    assert_eq!(select_nth(&mut arena, 1), Some(&9));

    let mut arena = SlotArena::new(&source).unwrap();
    assert_eq!(select_nth(&mut arena, 2), Some(&6));
}

#[test]
fn all_equal_source_has_a_single_distinct_rank() {
    let source = [5, 5, 5];

    let mut arena = SlotArena::new(&source).unwrap();
    assert_eq!(select_nth(&mut arena, 1), Some(&5));

    let mut arena = SlotArena::new(&source).unwrap();
    assert_eq!(select_nth(&mut arena, 2), None);
}

#[test]
fn empty_source_fails_at_construction() {
    let source: [i32; 0] = [];
    assert_eq!(SlotArena::new(&source).unwrap_err(), ArenaError::ZeroSize);
    assert_eq!(nth_largest(&source, 3).unwrap_err(), ArenaError::ZeroSize);
}

#[test]
fn singleton_source_covers_every_rank_edge() {
    let source = [7];
    assert_eq!(nth_largest(&source, 0).unwrap(), None);
    assert_eq!(nth_largest(&source, 1).unwrap(), Some(&7));
    assert_eq!(nth_largest(&source, 2).unwrap(), None);
}

#[test]
fn full_rank_walk_exhausts_a_mixed_source() {
    let source = [4, 8, 8, 2, 4, 8, 1];
    let mut arena = SlotArena::new(&source).unwrap();
    assert_eq!(select_nth(&mut arena, 1), Some(&8));
    assert_eq!(select_nth(&mut arena, 1), Some(&4));
    assert_eq!(select_nth(&mut arena, 1), Some(&2));
    assert_eq!(select_nth(&mut arena, 1), Some(&1));
    assert_eq!(select_nth(&mut arena, 1), None);
    assert_eq!(arena.live_count(), 0);
}

#[test]
fn early_exit_does_not_disturb_release() {
    // Arena construction inside a function that bails with `?` still drops
    // the arena exactly once; the returned reference stays valid because it
    // borrows the source, not the arena.
    fn second_largest(source: &[i32]) -> Result<Option<&i32>, ArenaError> {
        let mut arena = SlotArena::new(source)?;
        Ok(select_nth(&mut arena, 2))
    }

    assert_eq!(second_largest(&[]).unwrap_err(), ArenaError::ZeroSize);
    assert_eq!(second_largest(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), Some(&6));
}

#[test]
fn works_over_borrowed_string_data() {
    let source = ["pear", "apple", "quince", "apple", "fig"];
    let mut arena = SlotArena::new(&source).unwrap();
    assert_eq!(select_nth(&mut arena, 1), Some(&"quince"));
    assert_eq!(select_nth(&mut arena, 1), Some(&"pear"));
    assert_eq!(select_nth(&mut arena, 1), Some(&"fig"));
    assert_eq!(select_nth(&mut arena, 1), Some(&"apple"));
    assert_eq!(select_nth(&mut arena, 1), None);
}
