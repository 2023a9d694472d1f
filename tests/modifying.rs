//! Mutating algorithms: tabular cases plus agreement with std equivalents.

use proptest::prelude::*;
use seqalg::modifying::{
    remove, remove_if, replace_copy_if, reverse, reverse_copy, rotate, rotate_copy, rotate_with,
    shift_left, shift_right, unique, unique_by, unique_copy,
};
use seqalg::{AlgorithmError, RotateStrategy, SliceWriter};
use test_case::test_case;

#[test_case(RotateStrategy::ForwardSwap ; "forward swap")]
#[test_case(RotateStrategy::Reversal ; "reversal")]
#[test_case(RotateStrategy::CycleLeader ; "cycle leader")]
fn rotate_strategy_matches_expected(strategy: RotateStrategy) {
    let mut v: Vec<u32> = (1..=12).collect();
    let first = rotate_with(&mut v, 8, strategy).expect("mid in bounds");
    assert_eq!(first, 4);
    assert_eq!(v, vec![9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test_case(&[1, 2, 3], 1, &[2, 3] ; "by one")]
#[test_case(&[1, 2, 3, 4], 3, &[4] ; "all but one")]
#[test_case(&[1, 2, 3], 3, &[] ; "whole length")]
#[test_case(&[], 1, &[] ; "empty input")]
#[test_case(&[1, 2, 3], 0, &[] ; "zero places")]
fn shift_left_keeps_suffix(input: &[i32], n: usize, kept: &[i32]) {
    let mut v = input.to_vec();
    let range = shift_left(&mut v, n);
    assert_eq!(&v[range], kept);
}

#[test_case(&[1, 2, 3], 1, &[1, 2] ; "by one")]
#[test_case(&[1, 2, 3, 4], 3, &[1] ; "all but one")]
#[test_case(&[1, 2, 3], 5, &[] ; "past the end")]
fn shift_right_keeps_prefix(input: &[i32], n: usize, kept: &[i32]) {
    let mut v = input.to_vec();
    let range = shift_right(&mut v, n);
    assert_eq!(&v[range], kept);
}

#[test_case(&[1, 3, 3, 1, 1], &[1, 3, 1] ; "runs collapse")]
#[test_case(&[7, 7, 7], &[7] ; "single run")]
#[test_case(&[], &[] ; "empty")]
#[test_case(&[1, 2, 3], &[1, 2, 3] ; "already unique")]
fn unique_collapses_runs(input: &[i32], expected: &[i32]) {
    let mut v = input.to_vec();
    let len = unique(&mut v);
    assert_eq!(&v[..len], expected);
}

#[test]
fn unique_by_parity_keeps_first() {
    let mut v = vec![1, 3, 3, 1, 1];
    let len = unique_by(&mut v, |a, b| a % 2 == b % 2);
    assert_eq!(&v[..len], &[1]);
}

#[test]
fn rotate_copy_into_bounded_writer() {
    let src = [1, 2, 3, 4, 5];
    let mut dst = [0; 5];
    let written = rotate_copy(&src, 3, &mut SliceWriter::new(&mut dst)).expect("fits");
    assert_eq!(written, 5);
    assert_eq!(dst, [4, 5, 1, 2, 3]);

    let mut short = [0; 3];
    let err = rotate_copy(&src, 3, &mut SliceWriter::new(&mut short)).unwrap_err();
    assert_eq!(err, AlgorithmError::OutputExhausted { capacity: 3 });
    assert!(rotate_copy(&src, 6, &mut Vec::new()).is_err());
}

#[test]
fn copy_variants_compose() {
    let mut reversed = Vec::new();
    reverse_copy(&[1, 2, 3], &mut reversed).expect("vec grows");
    assert_eq!(reversed, vec![3, 2, 1]);

    let mut clamped = Vec::new();
    replace_copy_if(reversed.iter().copied(), |x| *x > 2, &2, &mut clamped).expect("vec grows");
    assert_eq!(clamped, vec![2, 2, 1]);

    let mut deduped = Vec::new();
    unique_copy(clamped, &mut deduped).expect("vec grows");
    assert_eq!(deduped, vec![2, 1]);
}

proptest! {
    #[test]
    fn every_rotate_strategy_matches_rotate_left(
        v in proptest::collection::vec(any::<u8>(), 0..80),
        mid_seed in any::<usize>(),
    ) {
        let mid = if v.is_empty() { 0 } else { mid_seed % (v.len() + 1) };
        let mut expected = v.clone();
        expected.rotate_left(mid);
        for strategy in RotateStrategy::ALL {
            let mut actual = v.clone();
            let first = rotate_with(&mut actual, mid, strategy).expect("mid in bounds");
            prop_assert_eq!(first, v.len() - mid);
            prop_assert_eq!(&actual, &expected);
        }
        let mut default = v.clone();
        rotate(&mut default, mid).expect("mid in bounds");
        prop_assert_eq!(default, expected);
    }

    #[test]
    fn unique_matches_dedup(v in proptest::collection::vec(0u8..4, 0..60)) {
        let mut expected = v.clone();
        expected.dedup();
        let mut actual = v.clone();
        let len = unique(&mut actual);
        prop_assert_eq!(&actual[..len], &expected[..]);
    }

    #[test]
    fn remove_if_matches_retain_and_keeps_elements(v in proptest::collection::vec(0i32..10, 0..60)) {
        let mut expected = v.clone();
        expected.retain(|x| x % 3 != 0);
        let mut actual = v.clone();
        let len = remove_if(&mut actual, |x| x % 3 == 0);
        prop_assert_eq!(&actual[..len], &expected[..]);

        let mut all = actual.clone();
        all.sort_unstable();
        let mut original = v.clone();
        original.sort_unstable();
        prop_assert_eq!(all, original);
    }

    #[test]
    fn remove_value_count(v in proptest::collection::vec(0i32..4, 0..60), value in 0i32..4) {
        let mut actual = v.clone();
        let len = remove(&mut actual, &value);
        prop_assert_eq!(len, v.iter().filter(|&&x| x != value).count());
    }

    #[test]
    fn reverse_is_involution(v in proptest::collection::vec(any::<i16>(), 0..50)) {
        let mut actual = v.clone();
        reverse(&mut actual);
        let expected: Vec<i16> = v.iter().rev().copied().collect();
        prop_assert_eq!(&actual, &expected);
        reverse(&mut actual);
        prop_assert_eq!(actual, v);
    }
}
