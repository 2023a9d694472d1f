//! Property tests: subsequence and run search agree with brute-force scans.

use proptest::prelude::*;
use seqalg::non_modifying::{
    adjacent_find, find_end, find_end_n, find_first_of, mismatch, search, search_n,
};

mod common;
use common::{occurrences, runs};

fn small_values(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0i32..3, 0..max_len)
}

proptest! {
    #[test]
    fn search_finds_first_occurrence(hay in small_values(40), needle in small_values(4)) {
        let expected = occurrences(&hay, &needle).first().map(|&s| s..s + needle.len());
        if needle.is_empty() {
            prop_assert_eq!(search(&hay, &needle), Some(0..0));
        } else {
            prop_assert_eq!(search(&hay, &needle), expected);
        }
    }

    #[test]
    fn find_end_finds_last_occurrence(hay in small_values(40), needle in small_values(4)) {
        let expected = occurrences(&hay, &needle).last().map(|&s| s..s + needle.len());
        if needle.is_empty() {
            prop_assert_eq!(find_end(&hay, &needle), Some(hay.len()..hay.len()));
        } else {
            prop_assert_eq!(find_end(&hay, &needle), expected);
        }
    }

    #[test]
    fn run_search_brackets_all_runs(hay in small_values(40), count in 1usize..5, value in 0i32..3) {
        let all = runs(&hay, count, value);
        prop_assert_eq!(search_n(&hay, count, &value), all.first().cloned());
        prop_assert_eq!(find_end_n(&hay, count, &value), all.last().cloned());
    }

    #[test]
    fn mismatch_is_common_prefix_length(a in small_values(20), b in small_values(20)) {
        let idx = mismatch(&a, &b);
        prop_assert!(idx <= a.len().min(b.len()));
        prop_assert_eq!(&a[..idx], &b[..idx]);
        if idx < a.len().min(b.len()) {
            prop_assert_ne!(a[idx], b[idx]);
        }
    }

    #[test]
    fn adjacent_find_reports_first_pair(v in small_values(30)) {
        let expected = (1..v.len()).find(|&i| v[i - 1] == v[i]).map(|i| i - 1);
        prop_assert_eq!(adjacent_find(&v), expected);
    }

    #[test]
    fn find_first_of_matches_linear_scan(v in small_values(30), set in small_values(3)) {
        let expected = v.iter().position(|x| set.contains(x));
        prop_assert_eq!(find_first_of(&v, &set), expected);
    }
}
