//! Tests for the accumulator contract
//!
//! These tests pin the observable behavior of ByteStack: ordering of the
//! finalized buffer, accuracy of the size/count queries, re-finalization,
//! rejection of empty objects, and the lazy (non-refreshing) cache read.

use bytestack::{ByteStack, BytestackError};

use proptest::collection::vec;
use proptest::prelude::*;

// ============================================================
// Order Preservation
// ============================================================

#[test]
fn test_finish_concatenates_in_append_order() {
    let mut stack = ByteStack::new();
    stack.grow(b"p1-").unwrap();
    stack.grow(b"p2-").unwrap();
    stack.grow(b"p3").unwrap();
    assert_eq!(stack.finish(), b"p1-p2-p3\0");
}

#[test]
fn test_mixed_append_forms() {
    // Raw, formatted, and string appends interleave in call order
    let mut stack = ByteStack::new();
    stack.grow_str("AB").unwrap();
    stack.grow_fmt(format_args!("{}", "CDE")).unwrap();
    stack.grow(b"FGH").unwrap();

    assert_eq!(stack.finish(), b"ABCDEFGH\0");
    assert_eq!(stack.size(), 8);
    assert_eq!(stack.len(), 3);
}

// ============================================================
// Size / Count Accuracy
// ============================================================

#[test]
fn test_queries_track_successful_appends_only() {
    let mut stack = ByteStack::new();
    stack.grow(b"abcd").unwrap();
    assert!(stack.grow(b"").is_err());
    stack.grow(b"ef").unwrap();

    assert_eq!(stack.size(), 6);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_queries_on_fresh_stack() {
    let stack = ByteStack::new();
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
}

// ============================================================
// Finalization
// ============================================================

#[test]
fn test_finish_with_zero_appends() {
    let mut stack = ByteStack::new();
    assert_eq!(stack.finish(), b"\0");
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_refinish_without_growth_is_idempotent() {
    let mut stack = ByteStack::new();
    stack.grow(b"stable").unwrap();

    let (first, first_ptr) = {
        let buf = stack.finish();
        (buf.to_vec(), buf.as_ptr())
    };
    let (second, second_ptr) = {
        let buf = stack.finish();
        (buf.to_vec(), buf.as_ptr())
    };

    // Identical content, but each finish produces a fresh allocation: the
    // replacement buffer is built while the previous one is still live, so
    // the two cannot share an address
    assert_eq!(first, second);
    assert_ne!(first_ptr, second_ptr);
}

#[test]
fn test_finish_reflects_growth_after_previous_finish() {
    let mut stack = ByteStack::new();
    stack.grow(b"a").unwrap();
    assert_eq!(stack.finish(), b"a\0");
    stack.grow(b"b").unwrap();
    assert_eq!(stack.finish(), b"ab\0");
    assert_eq!(stack.size(), 2);
}

// ============================================================
// Empty-Object Rejection
// ============================================================

#[test]
fn test_empty_object_is_rejected_with_no_state_change() {
    let mut stack = ByteStack::new();
    let err = stack.grow(b"").unwrap_err();
    assert!(matches!(err, BytestackError::EmptyObject));
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.finish(), b"\0");
}

// ============================================================
// Lazy Cache Read
// ============================================================

#[test]
fn test_final_data_builds_lazily_then_serves_cache() {
    let mut stack = ByteStack::new();
    stack.grow(b"cached").unwrap();

    // First call builds, second call re-serves the same content
    assert_eq!(stack.final_data(), b"cached\0");
    assert_eq!(stack.final_data(), b"cached\0");

    // Cache hit, not a rebuild: the same allocation is served back
    let p1 = stack.final_data().as_ptr();
    let p2 = stack.final_data().as_ptr();
    assert_eq!(p1, p2);
}

#[test]
fn test_final_data_returns_stale_buffer_after_growth() {
    // The cache read does not track staleness; only finish rebuilds.
    let mut stack = ByteStack::new();
    for _ in 0..3 {
        stack.grow(&[0xab; 16]).unwrap();
    }
    assert_eq!(stack.finish().len(), 49);

    stack.grow(&[0xcd; 16]).unwrap();

    // Stale three-record buffer, while the live queries see four records
    assert_eq!(stack.final_data().len(), 49);
    assert_eq!(stack.size(), 64);
    assert_eq!(stack.len(), 4);

    // An explicit finish catches the cache up
    assert_eq!(stack.finish().len(), 65);
}

// ============================================================
// Property Tests
// ============================================================

proptest! {
    #[test]
    fn prop_finish_is_concat_plus_terminator(
        payloads in vec(vec(any::<u8>(), 1..64), 0..32)
    ) {
        let mut stack = ByteStack::new();
        for p in &payloads {
            stack.grow(p).unwrap();
        }

        let mut expected: Vec<u8> = payloads.concat();
        expected.push(0);

        prop_assert_eq!(stack.finish(), expected.as_slice());
    }

    #[test]
    fn prop_queries_match_appended_totals(
        payloads in vec(vec(any::<u8>(), 1..64), 0..32)
    ) {
        let mut stack = ByteStack::new();
        for p in &payloads {
            stack.grow(p).unwrap();
        }

        let total: usize = payloads.iter().map(|p| p.len()).sum();
        prop_assert_eq!(stack.size(), total);
        prop_assert_eq!(stack.len(), payloads.len());
        prop_assert_eq!(stack.finish().len(), total + 1);
    }

    #[test]
    fn prop_interleaved_rejects_leave_totals_intact(
        payloads in vec(vec(any::<u8>(), 1..16), 1..16)
    ) {
        let mut stack = ByteStack::new();
        for p in &payloads {
            stack.grow(p).unwrap();
            // An empty append between every valid one must be invisible
            prop_assert!(stack.grow(b"").is_err());
        }

        prop_assert_eq!(stack.len(), payloads.len());
        let total: usize = payloads.iter().map(|p| p.len()).sum();
        prop_assert_eq!(stack.size(), total);
    }
}
