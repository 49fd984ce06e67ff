//! Unit tests for Drum.
//!
//! The drum has no ends, so most tests drive the cursor and check what it
//! reads. `contains` moves the cursor and gets its own section.

use std::num::NonZeroUsize;

use chainkit::drum::Drum;
use chainkit::error::ContainerError;
use rstest::rstest;

fn filled(values: &[i32]) -> Drum<i32> {
    let mut drum = Drum::new(values.len()).unwrap();
    for value in values {
        drum.write(*value);
        drum.rotate_clockwise();
    }
    drum
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(1)]
#[case(3)]
#[case(64)]
fn test_new_fills_with_default(#[case] capacity: usize) {
    let drum: Drum<i32> = Drum::new(capacity).unwrap();
    assert_eq!(drum.capacity(), capacity);
    assert!(drum.iter().all(|value| *value == 0));
}

#[rstest]
fn test_zero_capacity_is_rejected() {
    let result: Result<Drum<i32>, _> = Drum::new(0);
    assert!(matches!(
        result,
        Err(ContainerError::InvalidConfiguration { .. })
    ));
}

#[rstest]
fn test_with_capacity_never_fails() {
    let drum: Drum<String> = Drum::with_capacity(NonZeroUsize::MIN);
    assert_eq!(drum.capacity(), 1);
    assert_eq!(drum.read(), "");
}

#[rstest]
fn test_try_from_vec_starts_on_first_slot() {
    let drum = Drum::try_from(vec![5, 6, 7]).unwrap();
    assert_eq!(drum.read(), &5);
    assert_eq!(drum, filled(&[5, 6, 7]));
}

#[rstest]
fn test_try_from_empty_vec_is_rejected() {
    let result = Drum::<i32>::try_from(Vec::new());
    assert!(result.is_err());
}

// =============================================================================
// Rotation
// =============================================================================

#[rstest]
fn test_write_rotate_fill_wraps_to_start() {
    let drum = filled(&[1, 2, 3]);
    assert_eq!(drum.read(), &1);
}

#[rstest]
fn test_counter_clockwise_from_start_wraps_to_last() {
    let mut drum = filled(&[1, 2, 3]);
    drum.rotate_counter_clockwise();
    assert_eq!(drum.read(), &3);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_full_revolution_returns_to_start(#[case] capacity: usize) {
    let mut drum: Drum<usize> = Drum::new(capacity).unwrap();
    drum.write(42);
    for _ in 0..capacity {
        drum.rotate_clockwise();
    }
    assert_eq!(drum.read(), &42);
    for _ in 0..capacity {
        drum.rotate_counter_clockwise();
    }
    assert_eq!(drum.read(), &42);
}

#[rstest]
fn test_rotations_cancel() {
    let mut drum = filled(&[1, 2, 3, 4]);
    drum.rotate_clockwise();
    drum.rotate_clockwise();
    drum.rotate_counter_clockwise();
    assert_eq!(drum.read(), &2);
}

#[rstest]
fn test_single_slot_is_its_own_neighbor() {
    let mut drum = filled(&[8]);
    drum.rotate_clockwise();
    assert_eq!(drum.read(), &8);
    drum.rotate_counter_clockwise();
    assert_eq!(drum.read(), &8);
}

#[rstest]
fn test_write_overwrites_only_cursor_slot() {
    let mut drum = filled(&[1, 2, 3]);
    drum.rotate_clockwise();
    drum.write(20);
    assert_eq!(drum.read(), &20);
    drum.rotate_counter_clockwise();
    assert_eq!(drum.read(), &1);
    drum.rotate_counter_clockwise();
    assert_eq!(drum.read(), &3);
}

// =============================================================================
// Contains
// =============================================================================

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 3)]
fn test_contains_hit_leaves_cursor_on_match(#[case] target: i32, #[case] expected: i32) {
    let mut drum = filled(&[1, 2, 3]);
    assert!(drum.contains(&target));
    assert_eq!(drum.read(), &expected);
}

#[rstest]
fn test_contains_miss_restores_cursor() {
    let mut drum = filled(&[1, 2, 3]);
    drum.rotate_clockwise();
    assert!(!drum.contains(&99));
    assert_eq!(drum.read(), &2);
}

#[rstest]
fn test_contains_searches_from_cursor() {
    let mut drum = filled(&[7, 1, 7]);
    drum.rotate_counter_clockwise();
    assert!(drum.contains(&7));
    drum.rotate_clockwise();
    assert_eq!(drum.read(), &7);
    drum.rotate_clockwise();
    assert_eq!(drum.read(), &1);
}

// =============================================================================
// Clear
// =============================================================================

#[rstest]
fn test_clear_resets_slots_and_keeps_cursor() {
    let mut drum = filled(&[1, 2, 3]);
    drum.rotate_clockwise();
    drum.clear();
    assert_eq!(drum.capacity(), 3);
    assert!(drum.iter().all(|value| *value == 0));
    drum.write(5);
    drum.rotate_counter_clockwise();
    drum.rotate_clockwise();
    assert_eq!(drum.read(), &5);
}

#[rstest]
fn test_clear_twice_is_same_as_once() {
    let mut once = filled(&[1, 2, 3]);
    once.clear();
    let mut twice = filled(&[1, 2, 3]);
    twice.clear();
    twice.clear();
    assert_eq!(once, twice);
}

// =============================================================================
// Iteration and traits
// =============================================================================

#[rstest]
fn test_iter_starts_at_cursor_and_wraps() {
    let mut drum = filled(&[1, 2, 3]);
    drum.rotate_clockwise();
    let values: Vec<i32> = drum.iter().copied().collect();
    assert_eq!(values, vec![2, 3, 1]);
    assert_eq!(drum.read(), &2);
    assert_eq!(drum.iter().len(), 3);
}

#[rstest]
fn test_equality_is_cursor_relative() {
    let mut rotated = filled(&[1, 2, 3]);
    rotated.rotate_clockwise();
    let other = filled(&[2, 3, 1]);
    assert_eq!(rotated, other);
    assert_ne!(filled(&[1, 2, 3]), filled(&[1, 2, 3, 0]));
}

#[rstest]
fn test_display_from_cursor() {
    let mut drum = filled(&[1, 2, 3]);
    drum.rotate_counter_clockwise();
    assert_eq!(format!("{drum}"), "[3, 1, 2]");
}

#[rstest]
fn test_debug_shows_layout() {
    let mut drum = filled(&[1, 2]);
    drum.rotate_clockwise();
    assert_eq!(
        format!("{drum:?}"),
        "Drum { capacity: 2, cursor: 1, slots: [1, 2] }"
    );
}
