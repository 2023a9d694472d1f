//! Equality, lexicographic ordering and extremes through the public API.

use std::cmp::Ordering;

use proptest::prelude::*;
use seqalg::comparison::{
    equal, equal_by, equal_n, lexicographical_compare, lexicographical_compare_by,
    lexicographical_compare_three_way, lexicographical_compare_three_way_by,
};
use seqalg::functional::{greater, projected, projected_cmp};
use seqalg::minmax::{
    clamp, max_element, max_element_by, min_element, min_element_by_key, minmax_element,
    minmax_of,
};
use seqalg::MinMax;
use test_case::test_case;

#[test]
fn equal_with_projection() {
    let a = [1, 4, 7];
    let b = [10, 13, 16];
    assert!(!equal(&a, &b));
    assert!(equal_by(&a, &b, projected(|x: &i32, y: &i32| x == y, |x: &i32| x % 3, |y: &i32| y % 3)));
    assert!(equal_n(&a, 2, &[1, 4, 99], 2));
}

#[test]
fn three_way_with_offset_projections() {
    let v1 = [1, 2, 3, 4, 5];
    let v2 = [1, 2, 3, 4, 8];
    let cmp = projected_cmp(|a: &i32, b: &i32| a.cmp(b), |x: &i32| x + 6, |y: &i32| y + 3);
    assert_eq!(lexicographical_compare_three_way_by(&v1, &v2, cmp), Ordering::Greater);
    assert_eq!(lexicographical_compare_three_way(&v1, &v2), Ordering::Less);
}

#[test_case(&[1, 2, 3], &[1, 2, 3], Ordering::Equal ; "identical")]
#[test_case(&[1, 2], &[1, 2, 3], Ordering::Less ; "proper prefix")]
#[test_case(&[2], &[1, 9, 9], Ordering::Greater ; "first element decides")]
#[test_case(&[], &[], Ordering::Equal ; "both empty")]
fn three_way_table(a: &[i32], b: &[i32], expected: Ordering) {
    assert_eq!(lexicographical_compare_three_way(a, b), expected);
    assert_eq!(lexicographical_compare(a, b), expected == Ordering::Less);
}

#[test]
fn descending_comparator() {
    assert!(lexicographical_compare_by(&[3, 1], &[2, 9], greater()));
}

#[test]
fn element_extremes_follow_tie_rules() {
    let v = [2, 0, 5, 0, 5];
    assert_eq!(min_element(&v), Some(1));
    assert_eq!(max_element(&v), Some(2));
    assert_eq!(minmax_element(&v), Some(MinMax { min: 1, max: 4 }));
    assert_eq!(max_element_by(&v, greater()), Some(1));
    assert_eq!(min_element_by_key(&[-1, -4, -3, -7, -5], |x| x % 3), Some(4));
    assert_eq!(*clamp(&10, &0, &5), 5);
}

proptest! {
    #[test]
    fn three_way_matches_slice_ord(
        a in proptest::collection::vec(0u8..4, 0..12),
        b in proptest::collection::vec(0u8..4, 0..12),
    ) {
        prop_assert_eq!(lexicographical_compare_three_way(&a, &b), a.cmp(&b));
        prop_assert_eq!(equal(&a, &b), a == b);
    }

    #[test]
    fn minmax_of_matches_iterator_extremes(v in proptest::collection::vec(any::<i32>(), 1..40)) {
        let mm = minmax_of(v.iter().copied()).expect("non-empty");
        prop_assert_eq!(Some(mm.min), v.iter().copied().min());
        prop_assert_eq!(Some(mm.max), v.iter().copied().max());
    }
}
