//! Unit tests for the sequence combinators.
//!
//! Tests cover:
//! - take over bounded and unbounded sources (no over-pull)
//! - each_tuple / each_pair windowing
//! - with_index ordinals
//! - append_first / append_last / concat
//! - repeat over re-iterable sources
//! - eager operations: join, satisfy_all, satisfy_any
//! - traversal kinds and cursor protocol violations

use lazyseq::prelude::*;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Helpers
// =============================================================================

/// Cursor over `0..` that counts how many values were pulled from it.
struct CountingCursor<'a> {
    pulls: &'a Cell<usize>,
    next_value: i64,
}

impl Cursor for CountingCursor<'_> {
    type Item = i64;

    fn has_next(&mut self) -> lazyseq::Result<bool> {
        Ok(true)
    }

    fn next(&mut self) -> lazyseq::Result<i64> {
        self.pulls.set(self.pulls.get() + 1);
        let value = self.next_value;
        self.next_value += 1;
        Ok(value)
    }
}

/// Unbounded sequence backed by [`CountingCursor`].
struct CountingRange<'a> {
    pulls: &'a Cell<usize>,
}

impl<'a> Sequence for CountingRange<'a> {
    type Item = i64;
    type Cursor = CountingCursor<'a>;

    fn cursor(&self) -> lazyseq::Result<Self::Cursor> {
        Ok(CountingCursor {
            pulls: self.pulls,
            next_value: 0,
        })
    }

    fn traversal(&self) -> Traversal {
        Traversal::Reiterable
    }
}

// =============================================================================
// take
// =============================================================================

#[rstest]
#[case(0, vec![])]
#[case(3, vec![1, 2, 3])]
#[case(5, vec![1, 2, 3, 4, 5])]
#[case(9, vec![1, 2, 3, 4, 5])]
fn take_yields_min_of_count_and_length(#[case] count: usize, #[case] expected: Vec<i64>) {
    assert_eq!(from_int(1).to(5).take(count).to_vec().unwrap(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(100)]
fn take_over_unbounded_pulls_exactly_n(#[case] count: usize) {
    let pulls = Cell::new(0);
    let bounded = CountingRange { pulls: &pulls }.take(count);

    let values = bounded.to_vec().unwrap();

    assert_eq!(values.len(), count);
    assert_eq!(pulls.get(), count);
}

#[rstest]
fn take_has_next_after_limit_does_not_pull() {
    let pulls = Cell::new(0);
    let bounded = CountingRange { pulls: &pulls }.take(2);
    let mut cursor = bounded.cursor().unwrap();

    cursor.next().unwrap();
    cursor.next().unwrap();
    assert!(!cursor.has_next().unwrap());
    assert!(!cursor.has_next().unwrap());
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn fizz_buzz_over_infinite_range() {
    let fizz_buzz = from_int(1)
        .to_infinity()
        .transform(|number| match (number % 3, number % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => from_int(number).to_string(),
        })
        .take(15);

    let rendered = fizz_buzz.to_vec().unwrap();
    assert_eq!(rendered.len(), 15);
    assert_eq!(rendered[2], "Fizz");
    assert_eq!(rendered[4], "Buzz");
    assert_eq!(rendered[14], "FizzBuzz");
    assert_eq!(rendered[13], "14");
}

// =============================================================================
// each_tuple / each_pair
// =============================================================================

#[rstest]
#[case(1, 4)]
#[case(2, 3)]
#[case(4, 1)]
#[case(5, 0)]
fn each_tuple_count(#[case] size: usize, #[case] expected: usize) {
    assert_eq!(from_int(1).to(4).each_tuple(size).count().unwrap(), expected);
}

#[rstest]
fn each_tuple_elements_are_consecutive() {
    let windows: Vec<Vec<i64>> = from_int(10)
        .to(14)
        .each_tuple(3)
        .transform(Tuple::into_vec)
        .to_vec()
        .unwrap();
    assert_eq!(
        windows,
        vec![vec![10, 11, 12], vec![11, 12, 13], vec![12, 13, 14]]
    );
}

#[rstest]
#[case(vec![1, 2, 3, 4], true)]
#[case(vec![1, 2, 4, 3], false)]
#[case(vec![5], true)]
#[case(vec![], true)]
fn sortedness_via_each_pair(#[case] values: Vec<i32>, #[case] expected: bool) {
    let sorted = from_iterable(values)
        .each_pair()
        .satisfy_all(|pair| pair[0] <= pair[1])
        .unwrap();
    assert_eq!(sorted, expected);
}

#[rstest]
fn each_tuple_has_next_is_idempotent() {
    let mut cursor = from_int(1).to(3).each_pair().cursor().unwrap();
    for _ in 0..5 {
        assert!(cursor.has_next().unwrap());
    }
    assert_eq!(cursor.next().unwrap().as_slice(), &[1, 2]);
}

// =============================================================================
// with_index
// =============================================================================

#[rstest]
fn with_index_tags_in_order() {
    let tagged = from_iterable(vec!["x", "y", "z"]).with_index().to_vec().unwrap();
    assert_eq!(
        tagged,
        vec![
            WithIndex::new(0, "x"),
            WithIndex::new(1, "y"),
            WithIndex::new(2, "z"),
        ]
    );
}

#[rstest]
fn with_index_counts_its_own_values() {
    let tagged = from_int(100).to(200).take(2).with_index().to_vec().unwrap();
    assert_eq!(tagged[0].index, 0);
    assert_eq!(tagged[0].value, 100);
    assert_eq!(tagged[1].index, 1);
}

// =============================================================================
// append_first / append_last / concat
// =============================================================================

#[rstest]
fn append_first_leaves_original_iterable() {
    let original = from_int(1).to(3);
    let prefixed = (&original).append_first(0);

    assert_eq!(prefixed.to_vec().unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(original.to_vec().unwrap(), vec![1, 2, 3]);
    assert_eq!(prefixed.to_vec().unwrap(), vec![0, 1, 2, 3]);
}

#[rstest]
fn append_last_over_unbounded_is_never_reached() {
    let values = from_int(0).to_infinity().append_last(-1).take(3);
    assert_eq!(values.to_vec().unwrap(), vec![0, 1, 2]);
}

#[rstest]
fn append_first_before_unbounded() {
    let values = from_int(5).to_infinity().append_first(-1).take(3);
    assert_eq!(values.to_vec().unwrap(), vec![-1, 5, 6]);
}

// =============================================================================
// repeat
// =============================================================================

#[rstest]
#[case(0, "")]
#[case(1, "1 2")]
#[case(3, "1 2 1 2 1 2")]
fn repeat_replays_reiterable_source(#[case] times: usize, #[case] expected: &str) {
    assert_eq!(from_int(1).to(2).repeat(times).join(" ").unwrap(), expected);
}

#[rstest]
fn repeat_of_windows_restarts_each_pass() {
    let pairs = from_iterable(vec![1, 2, 3]).each_pair().repeat(2).count().unwrap();
    assert_eq!(pairs, 4);
}

// =============================================================================
// each_tuple bounds
// =============================================================================

#[rstest]
#[case(usize::MAX)]
#[case(1 << 60)]
#[case(4)]
fn each_tuple_wider_than_source_yields_nothing(#[case] size: usize) {
    assert_eq!(from_int(1).to(3).each_tuple(size).count().unwrap(), 0);
}

// =============================================================================
// join
// =============================================================================

#[rstest]
#[case(" ", "1 2 3 4 5")]
#[case(", ", "1, 2, 3, 4, 5")]
#[case("", "12345")]
fn join_bounded_range(#[case] separator: &str, #[case] expected: &str) {
    assert_eq!(from_int(1).to(5).join(separator).unwrap(), expected);
}

#[rstest]
fn join_tuples_uses_display() {
    let joined = from_int(1).to(3).each_pair().join(" ").unwrap();
    assert_eq!(joined, "(1, 2) (2, 3)");
}

// =============================================================================
// Traversal and protocol
// =============================================================================

#[rstest]
fn reiterable_chain_reports_reiterable() {
    let chain = from_int(1).to(3).transform(|value| value + 1).with_index();
    assert_eq!(chain.traversal(), Traversal::Reiterable);
    assert_eq!(chain.to_vec().unwrap(), chain.to_vec().unwrap());
}

#[cfg(feature = "lines")]
#[rstest]
fn chain_over_lines_reports_single_pass() {
    let lines = from_reader("a\nb\n".as_bytes()).lines();
    let chain = lines.with_index().append_last(WithIndex::new(9, "end".to_string()));
    assert_eq!(chain.traversal(), Traversal::SinglePass);
}

#[rstest]
fn next_without_pending_value_is_exhausted() {
    let mut cursor = from_int(1).to(1).transform(|value| value * 2).cursor().unwrap();
    assert_eq!(cursor.next().unwrap(), 2);
    assert!(matches!(cursor.next(), Err(SequenceError::ExhaustedCursor)));
}

#[rstest]
fn iter_drives_a_chain() {
    let collected: Vec<i64> = from_int(1)
        .to(6)
        .each_pair()
        .transform(|pair| pair[0] * pair[1])
        .iter()
        .map(|value| value.unwrap())
        .collect();
    assert_eq!(collected, vec![2, 6, 12, 20, 30]);
}
