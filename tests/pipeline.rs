//! Forward-cursor pipelines: laziness, combinator laws, and the concrete
//! end-to-end scenarios.

use penelope::cursor::{empty, over, Cursor, VecCursor};
use penelope::TraverseError;

use proptest::prelude::*;
use test_case::test_case;

mod common;
use common::ascending;

#[test]
fn filter_map_take_scenario() {
    // [1,2,3,4,5] -> evens -> squares -> first one
    let result = over(vec![1, 2, 3, 4, 5])
        .filter(|v| v % 2 == 0)
        .map(|v| v * v)
        .take(1)
        .collect_vec();
    assert_eq!(result, vec![4]);
}

#[test]
fn take_then_skip_partition_the_source() {
    let source = ascending(10);
    let head = over(source.clone()).take(4).collect_vec();
    let tail = over(source.clone()).skip(4).collect_vec();

    assert_eq!(head, vec![1, 2, 3, 4]);
    assert_eq!(tail, vec![5, 6, 7, 8, 9, 10]);

    let mut rejoined = head;
    rejoined.extend(tail);
    assert_eq!(rejoined, source);
}

#[test]
fn take_zero_is_empty_and_skip_zero_is_identity() {
    assert_eq!(over(ascending(3)).take(0).count(), 0);
    assert_eq!(over(ascending(3)).skip(0).collect_vec(), ascending(3));
}

#[test]
fn skip_discards_lazily_and_at_most_available() {
    assert_eq!(over(ascending(3)).skip(10).count(), 0);

    let pulls = std::cell::Cell::new(0usize);
    let mut skipped = over((0..10).map(|v| {
        pulls.set(pulls.get() + 1);
        v
    }))
    .skip(3);
    // Construction pulls nothing; the first access resolves the offset.
    assert_eq!(pulls.get(), 0);
    assert_eq!(skipped.next(), Some(3));
    assert_eq!(pulls.get(), 4);
}

#[test_case(7, 3, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]; "partial tail")]
#[test_case(6, 3, vec![vec![1, 2, 3], vec![4, 5, 6]]; "exact multiple")]
#[test_case(1, 3, vec![vec![1]]; "single element")]
#[test_case(0, 3, vec![]; "empty source")]
fn group_batches_have_the_expected_shape(len: i64, size: usize, expected: Vec<Vec<i64>>) {
    let batches = over(ascending(len)).group_vec(size).collect_vec();
    assert_eq!(batches, expected);
}

#[test]
fn group_respects_the_collection_factory() {
    use std::collections::VecDeque;

    let batches = over(ascending(4))
        .group(3, VecDeque::with_capacity)
        .collect_vec();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], VecDeque::from(vec![1, 2, 3]));
    assert_eq!(batches[1], VecDeque::from(vec![4]));
}

#[test]
#[should_panic(expected = "group size must be non-zero")]
fn group_rejects_zero_size_at_construction() {
    let _ = over(ascending(3)).group_vec(0);
}

#[test]
fn zip_ends_with_the_shorter_source() {
    let pairs = over(vec![1, 2, 3]).zip(over(vec!["a", "b"])).collect_vec();
    assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
}

#[test]
fn append_runs_sources_in_sequence() {
    let joined = over(vec![1, 2]).append(over(vec![3])).collect_vec();
    assert_eq!(joined, vec![1, 2, 3]);
}

#[test]
fn flat_map_steps_over_empty_inner_cursors() {
    let flattened = over(vec![0, 2, 0, 3])
        .flat_map(|n| over(0..n))
        .collect_vec();
    assert_eq!(flattened, vec![0, 1, 0, 1, 2]);
}

#[test]
fn flatten_is_depth_first() {
    let flattened = over(vec![over(vec![1, 2]), over(vec![]), over(vec![3])])
        .flatten()
        .collect_vec();
    assert_eq!(flattened, vec![1, 2, 3]);
}

#[test]
fn extract_skips_rejected_elements() {
    let parsed = over(vec!["1", "x", "2", "y", "3"])
        .extract(|token| token.parse::<i32>().ok())
        .collect_vec();
    assert_eq!(parsed, vec![1, 2, 3]);
}

#[test]
fn unmodifiable_rejects_remove_even_over_mutable_storage() {
    let mut values = vec![1, 2, 3];
    let mut view = VecCursor::new(&mut values).unmodifiable();
    view.next();
    assert!(matches!(
        view.remove(),
        Err(TraverseError::Unsupported { .. })
    ));
}

#[test]
fn unmodifiable_wrapping_is_idempotent() {
    // The inherent method resolves first, so this stays a single wrapper.
    let view = over(vec![1, 2]).unmodifiable().unmodifiable();
    assert_eq!(view.collect_vec(), vec![1, 2]);
}

#[test]
fn remove_forwards_through_plain_decorators() {
    let mut values = vec![1, 2, 3];
    let mut cursor = VecCursor::new(&mut values);
    let mut decorated = Box::new(&mut cursor);
    decorated.next();
    decorated.remove().expect("decorators forward remove");
    assert_eq!(values, vec![2, 3]);
}

#[test]
fn filter_rejects_remove() {
    let mut values = vec![1, 2, 3];
    let mut filtered = VecCursor::new(&mut values).filter(|v| v % 2 == 1);
    filtered.next();
    assert!(matches!(
        filtered.remove(),
        Err(TraverseError::Unsupported { .. })
    ));
}

#[test]
fn try_next_reports_exhaustion() {
    let mut spent = empty::<i32>();
    assert!(matches!(
        spent.try_next(),
        Err(TraverseError::Exhausted(_))
    ));
}

#[test]
fn eager_terminals_agree_with_materialization() {
    let source = ascending(9);

    assert_eq!(over(source.clone()).count(), 9);
    assert_eq!(over(source.clone()).first(), Some(1));
    assert_eq!(over(source.clone()).find(|v| *v > 4), Some(5));
    assert_eq!(
        over(source.clone()).extract_first(|v| (v % 4 == 0).then_some(v * 10)),
        Some(40)
    );
    assert!(over(source.clone()).any(|v| *v == 9));
    assert!(over(source.clone()).all(|v| *v > 0));
    assert_eq!(over(source.clone()).least_by(|a, b| a.cmp(b)), Some(1));
    assert_eq!(over(source.clone()).greatest_by(|a, b| a.cmp(b)), Some(9));
    assert_eq!(over(source).fold(0, |acc, v| acc + v), 45);
}

#[test]
fn chained_filters_match_the_conjoined_predicate() {
    let source = ascending(30);
    let chained = over(source.clone())
        .filter(|v| v % 2 == 0)
        .filter(|v| v % 3 == 0)
        .collect_vec();
    let conjoined = over(source)
        .filter(|v| v % 2 == 0 && v % 3 == 0)
        .collect_vec();
    assert_eq!(chained, conjoined);
}

#[test]
fn combinators_pull_no_more_than_needed() {
    let pulls = std::cell::Cell::new(0usize);
    let mut pipeline = over((1..=100).map(|v| {
        pulls.set(pulls.get() + 1);
        v
    }))
    .filter(|v| v % 2 == 0)
    .map(|v| v * v);

    assert_eq!(pipeline.next(), Some(4));
    // One rejected probe (1) plus the accepted element (2).
    assert_eq!(pulls.get(), 2);
}

proptest! {
    #[test]
    fn lazy_pipeline_matches_materialized_pipeline(
        source in proptest::collection::vec(-50i64..50, 0..64),
        modulus in 1i64..5,
        skip in 0usize..8,
        take in 0usize..8,
    ) {
        let lazy = over(source.clone())
            .filter(move |v| v % modulus == 0)
            .map(|v| v * 3)
            .skip(skip)
            .take(take)
            .collect_vec();

        let eager: Vec<i64> = source
            .into_iter()
            .filter(|v| v % modulus == 0)
            .map(|v| v * 3)
            .skip(skip)
            .take(take)
            .collect();

        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn group_batch_arithmetic_holds(
        len in 0usize..40,
        size in 1usize..7,
    ) {
        let source: Vec<usize> = (0..len).collect();
        let batches = over(source).group_vec(size).collect_vec();

        prop_assert_eq!(batches.len(), len.div_ceil(size));
        for batch in batches.iter().take(batches.len().saturating_sub(1)) {
            prop_assert_eq!(batch.len(), size);
        }
        if let Some(last) = batches.last() {
            let expected = if len % size == 0 { size } else { len % size };
            prop_assert_eq!(last.len(), expected);
            prop_assert!(!last.is_empty());
        }
    }

    #[test]
    fn flat_map_matches_std_flat_map(
        source in proptest::collection::vec(0u8..5, 0..16),
    ) {
        let lazy = over(source.clone())
            .flat_map(|n| over(0..n))
            .collect_vec();
        let eager: Vec<u8> = source.into_iter().flat_map(|n| 0..n).collect();
        prop_assert_eq!(lazy, eager);
    }
}
