//! Sequence equality and lexicographic ordering.

use std::cmp::Ordering;

/// `true` if both sequences have the same length and equal elements.
pub fn equal<A, B>(a: &[A], b: &[B]) -> bool
where
    A: PartialEq<B>,
{
    equal_by(a, b, |x, y| x == y)
}

/// [`equal`] with a custom equivalence.
///
/// Sequences of different length are never equal; the predicate is not
/// called in that case.
pub fn equal_by<A, B, P>(a: &[A], b: &[B], mut pred: P) -> bool
where
    P: FnMut(&A, &B) -> bool,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| pred(x, y))
}

/// Compare the first `n1` elements of `a` with the first `n2` of `b`.
///
/// Returns `false` when the counts differ.
pub fn equal_n<A, B>(a: &[A], n1: usize, b: &[B], n2: usize) -> bool
where
    A: PartialEq<B>,
{
    equal_n_by(a, n1, b, n2, |x, y| x == y)
}

/// [`equal_n`] with a custom equivalence.
pub fn equal_n_by<A, B, P>(a: &[A], n1: usize, b: &[B], n2: usize, pred: P) -> bool
where
    P: FnMut(&A, &B) -> bool,
{
    if n1 != n2 {
        return false;
    }
    equal_by(&a[..n1.min(a.len())], &b[..n2.min(b.len())], pred)
}

/// `true` if `a` orders strictly before `b`.
pub fn lexicographical_compare<T: Ord>(a: &[T], b: &[T]) -> bool {
    lexicographical_compare_by(a, b, |x, y| x.cmp(y))
}

/// [`lexicographical_compare`] with a custom comparator.
pub fn lexicographical_compare_by<A, B, C>(a: &[A], b: &[B], cmp: C) -> bool
where
    C: FnMut(&A, &B) -> Ordering,
{
    lexicographical_compare_three_way_by(a, b, cmp) == Ordering::Less
}

/// Lexicographic "less than" on the first `n` elements of each sequence.
pub fn lexicographical_compare_n<T: Ord>(a: &[T], b: &[T], n: usize) -> bool {
    lexicographical_compare_n_by(a, b, n, |x, y| x.cmp(y))
}

/// [`lexicographical_compare_n`] with a custom comparator.
pub fn lexicographical_compare_n_by<A, B, C>(a: &[A], b: &[B], n: usize, cmp: C) -> bool
where
    C: FnMut(&A, &B) -> Ordering,
{
    lexicographical_compare_three_way_n_by(a, b, n, cmp) == Ordering::Less
}

/// Three-way lexicographic comparison.
///
/// The first unequal pair decides; otherwise the shorter sequence orders first.
pub fn lexicographical_compare_three_way<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    lexicographical_compare_three_way_by(a, b, |x, y| x.cmp(y))
}

/// [`lexicographical_compare_three_way`] with a custom comparator.
///
/// ```
/// use std::cmp::Ordering;
/// use seqalg::comparison::lexicographical_compare_three_way_by;
/// use seqalg::functional::projected_cmp;
///
/// let v1 = [1, 2, 3, 4, 5];
/// let v2 = [1, 2, 3, 4, 8];
/// let cmp = projected_cmp(|a: &i32, b: &i32| a.cmp(b), |x: &i32| x + 6, |y: &i32| y + 3);
/// assert_eq!(lexicographical_compare_three_way_by(&v1, &v2, cmp), Ordering::Greater);
/// ```
pub fn lexicographical_compare_three_way_by<A, B, C>(a: &[A], b: &[B], mut cmp: C) -> Ordering
where
    C: FnMut(&A, &B) -> Ordering,
{
    for (x, y) in a.iter().zip(b) {
        match cmp(x, y) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

/// Three-way comparison of the first `n` elements of each sequence.
pub fn lexicographical_compare_three_way_n<T: Ord>(a: &[T], b: &[T], n: usize) -> Ordering {
    lexicographical_compare_three_way_n_by(a, b, n, |x, y| x.cmp(y))
}

/// [`lexicographical_compare_three_way_n`] with a custom comparator.
pub fn lexicographical_compare_three_way_n_by<A, B, C>(
    a: &[A],
    b: &[B],
    n: usize,
    cmp: C,
) -> Ordering
where
    C: FnMut(&A, &B) -> Ordering,
{
    lexicographical_compare_three_way_by(&a[..n.min(a.len())], &b[..n.min(b.len())], cmp)
}
