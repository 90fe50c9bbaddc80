//! Property tests over whole pipelines.
//!
//! Each property pins an end-to-end equivalence: a river pipeline over
//! arbitrary input must agree with the corresponding `Iterator` or slice
//! computation, and stateful behavior (reset, resumption after an early
//! stop) must hold for arbitrary stop points.

use proptest::collection::vec;
use proptest::prelude::*;

use rivers::prelude::*;

proptest! {
    #[test]
    fn reset_replays_the_same_elements(from in -50i32..50, len in 0usize..64) {
        let mut r = seq(from, from + len as i32);
        let first = r.into_vec();
        r.reset();
        let second = r.into_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn count_matches_consumer_invocations(items in vec(any::<i32>(), 0..64)) {
        let mut invocations = 0usize;
        let mut r = from_vec(items);
        r.by_ref().for_each(|_| invocations += 1);
        r.reset();
        prop_assert_eq!(r.count(), invocations);
    }

    #[test]
    fn take_is_a_prefix(items in vec(any::<i32>(), 0..64), n in 0usize..80) {
        let expected: Vec<i32> = items.iter().copied().take(n).collect();
        prop_assert_eq!(from_vec(items).take(n).into_vec(), expected);
    }

    #[test]
    fn drop_then_take_is_a_window(
        items in vec(any::<i32>(), 0..64),
        n in 0usize..80,
        m in 0usize..80,
    ) {
        let expected: Vec<i32> = items.iter().copied().skip(n).take(m).collect();
        prop_assert_eq!(from_vec(items).drop(n).take(m).into_vec(), expected);
    }

    #[test]
    fn filter_and_map_agree_with_iterators(items in vec(-1000i32..1000, 0..64)) {
        let expected: Vec<i64> = items
            .iter()
            .filter(|i| **i % 3 != 0)
            .map(|i| i64::from(*i) * 2)
            .collect();
        let got = from_vec(items)
            .filter(|i| i % 3 != 0)
            .map(|i| i64::from(i) * 2)
            .into_vec();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn chain_concatenates(
        a in vec(any::<i32>(), 0..32),
        b in vec(any::<i32>(), 0..32),
    ) {
        let mut expected = a.clone();
        expected.extend_from_slice(&b);
        prop_assert_eq!(from_vec(a).chain(from_vec(b)).into_vec(), expected);
    }

    #[test]
    fn stopped_drive_resumes_in_place(items in vec(any::<i32>(), 0..64), k in 0usize..80) {
        let mut r = from_vec(items.clone());
        r.by_ref().take(k).consume();
        prop_assert_eq!(r.next(), items.get(k).copied());
    }

    #[test]
    fn split_matches_slice_split(items in vec(0u8..4, 0..64)) {
        let expected: Vec<usize> = items.split(|b| *b == 0).map(<[u8]>::len).collect();
        let got: Vec<usize> = from_vec(items)
            .split(0u8)
            .map(|mut segment| segment.count())
            .into_vec();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn split_segments_carry_the_right_elements(items in vec(0u8..4, 0..64)) {
        let expected: Vec<Vec<u8>> = items.split(|b| *b == 0).map(<[u8]>::to_vec).collect();
        let got: Vec<Vec<u8>> = from_vec(items)
            .split(0u8)
            .map(|mut segment| segment.into_vec())
            .into_vec();
        prop_assert_eq!(got, expected);
    }
}
