//! Accumulator family: write-side views, deduplication, delegation, and
//! the pair adapters.

use penelope::accum::{Accumulator, Collect, Counter, Curried, Finish, Fold, PairAccumulator, Unzip};
use penelope::cursor::{over, Cursor};
use penelope::effect::SharedEffect;
use penelope::pair::PairCursor;

mod common;
use common::{ascending, words};

#[test]
fn filtering_drops_rejected_elements_silently() {
    let mut evens = Collect::<Vec<i64>, i64>::new().filtering(|v| v % 2 == 0);
    evens.add_all(ascending(6));
    assert_eq!(evens.finish(), vec![2, 4, 6]);
}

#[test]
fn mapping_transforms_incoming_elements() {
    let mut lengths = Collect::<Vec<usize>, usize>::new().mapping(|word: String| word.len());
    lengths.add_all(words());
    assert_eq!(lengths.finish(), vec![5, 4, 5, 4, 5]);
}

#[test]
fn extracting_forwards_at_most_one_per_input() {
    let mut numbers =
        Collect::<Vec<i32>, i32>::new().extracting(|token: &str| token.parse().ok());
    numbers.add_all(vec!["3", "x", "1", "4"]);
    assert_eq!(numbers.finish(), vec![3, 1, 4]);
}

#[test]
fn extracting_all_forwards_zero_or_more_per_input() {
    let mut chars = Collect::<Vec<char>, char>::new()
        .extracting_all(|word: &str| word.chars().collect::<Vec<_>>());
    chars.add_all(vec!["ab", "", "c"]);
    assert_eq!(chars.finish(), vec!['a', 'b', 'c']);
}

#[test]
fn normalizing_keeps_first_occurrences() {
    // [a, b, a', c] with equal keys for a and a' accumulates like [a, b, c].
    let mut unique = Collect::<Vec<String>, String>::new().normalizing();
    unique.add_all(words());
    assert_eq!(unique.finish(), vec!["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn normalizing_by_deduplicates_on_the_derived_key() {
    let mut one_per_length = Collect::<Vec<String>, String>::new().normalizing_by(String::len);
    one_per_length.add_all(words());
    assert_eq!(one_per_length.finish(), vec!["alpha", "beta"]);
}

#[test]
fn map_output_transforms_only_the_result() {
    let mut summed = Fold::new(0i64, |state: &mut i64, item: i64| *state += item)
        .map_output(|total| total * 10);
    summed.add_all(ascending(4));
    assert_eq!(summed.finish(), 100);
}

#[test]
fn views_compose_on_the_write_side() {
    let mut pipeline = Collect::<Vec<i64>, i64>::new()
        .mapping(|v: i64| v * v)
        .filtering(|v| v % 2 != 0);
    pipeline.add_all(ascending(5));
    assert_eq!(pipeline.finish(), vec![1, 9, 25]);
}

#[test]
fn delegated_views_share_one_state() {
    let mut base = Collect::<Vec<i64>, i64>::new();
    {
        let mut evens = base.by_ref().filtering(|v| v % 2 == 0);
        evens.add_all(ascending(4));
    }
    {
        let mut doubled = base.by_ref().mapping(|v: i64| v * 2);
        doubled.add(10);
    }
    // The base retained every element the narrowed views forwarded.
    assert_eq!(base.finish(), vec![2, 4, 20]);
}

#[test]
fn drain_into_bridges_cursors_to_accumulators() {
    let mut tally = Counter::new();
    over(ascending(5)).filter(|v| v % 2 == 1).drain_into(&mut tally);
    assert_eq!(tally.finish(), 3);
}

#[test]
fn unzip_and_curry_round_trip() {
    let split = Unzip::new(
        Collect::<Vec<i64>, i64>::new(),
        Collect::<Vec<&str>, &str>::new(),
    );
    let mut tupled = split.uncurried();
    tupled.add_all(vec![(1, "one"), (2, "two")]);
    let (numbers, names) = tupled.finish();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(names, vec!["one", "two"]);

    let mut curried = Curried::new(Collect::<Vec<(i64, i64)>, (i64, i64)>::new());
    curried.add_pair(1, 10);
    curried.add_pair(2, 20);
    assert_eq!(curried.finish(), vec![(1, 10), (2, 20)]);
}

#[test]
fn pair_cursors_drain_into_pair_accumulators() {
    let mut split = Unzip::new(
        Collect::<Vec<i64>, i64>::new(),
        Collect::<Vec<i64>, i64>::new(),
    );
    over(vec![1, 2, 3])
        .zip(over(vec![10, 20, 30]))
        .drain_into_pairs(&mut split);
    let (left, right) = split.finish();
    assert_eq!(left, vec![1, 2, 3]);
    assert_eq!(right, vec![10, 20, 30]);
}

#[test]
fn unzip_into_routes_components_to_two_sinks() {
    let mut left = Collect::<Vec<i64>, i64>::new();
    let mut right = Collect::<Vec<i64>, i64>::new();
    over(vec![(1, 2), (3, 4)]).unzip_into(&mut left, &mut right);
    assert_eq!(left.finish(), vec![1, 3]);
    assert_eq!(right.finish(), vec![2, 4]);
}

#[test]
fn shared_effect_serializes_concurrent_callers() {
    use std::sync::atomic::{AtomicI64, Ordering};

    let sum = AtomicI64::new(0);
    let effect = SharedEffect::new(|value: i64| {
        sum.fetch_add(value, Ordering::Relaxed);
    });

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for value in ascending(20) {
                    effect.call(value);
                }
            });
        }
    });

    assert_eq!(sum.load(Ordering::Relaxed), 8 * 210);
}
