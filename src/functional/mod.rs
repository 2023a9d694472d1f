//! Predicate and projection combinators.
//!
//! Every `_by` algorithm takes a plain closure. These helpers build the
//! common shapes: comparisons on projected keys, negation, and the
//! default equality/ordering relations.

use std::cmp::Ordering;

/// Projection that returns its argument unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Identity {
    /// Apply the projection.
    #[inline]
    pub fn apply<T>(&self, value: T) -> T {
        value
    }

    /// Key function for `_by_key` algorithms that compare elements directly.
    #[inline]
    pub fn cloned<T: Clone>(value: &T) -> T {
        value.clone()
    }
}

/// Equality relation `a == b`, usable across types.
pub fn equal_to<A, B>() -> impl FnMut(&A, &B) -> bool + Copy
where
    A: PartialEq<B>,
{
    |a: &A, b: &B| a == b
}

/// Inequality relation `a != b`.
pub fn not_equal_to<A, B>() -> impl FnMut(&A, &B) -> bool + Copy
where
    A: PartialEq<B>,
{
    |a: &A, b: &B| a != b
}

/// Ascending total order, as a three-way comparator.
pub fn less<T: Ord>() -> impl FnMut(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.cmp(b)
}

/// Descending total order, as a three-way comparator.
pub fn greater<T: Ord>() -> impl FnMut(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| b.cmp(a)
}

/// Complement of a unary predicate.
pub fn negate<T, P>(mut pred: P) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
{
    move |x| !pred(x)
}

/// Unary predicate applied to a projected key.
///
/// ```
/// use seqalg::functional::project;
/// use seqalg::non_modifying::count_if;
///
/// let words = ["a", "bb", "cc", "ddd"];
/// assert_eq!(count_if(&words, project(|n: &usize| *n == 2, |w: &&str| w.len())), 2);
/// ```
pub fn project<T, K, P, F>(mut pred: P, mut key: F) -> impl FnMut(&T) -> bool
where
    P: FnMut(&K) -> bool,
    F: FnMut(&T) -> K,
{
    move |x| pred(&key(x))
}

/// Binary predicate applied to independently projected keys.
///
/// `proj1` maps elements of the first sequence, `proj2` those of the second.
pub fn projected<A, B, KA, KB, P, F1, F2>(
    mut pred: P,
    mut proj1: F1,
    mut proj2: F2,
) -> impl FnMut(&A, &B) -> bool
where
    P: FnMut(&KA, &KB) -> bool,
    F1: FnMut(&A) -> KA,
    F2: FnMut(&B) -> KB,
{
    move |a, b| pred(&proj1(a), &proj2(b))
}

/// Three-way comparator applied to independently projected keys.
pub fn projected_cmp<A, B, KA, KB, C, F1, F2>(
    mut cmp: C,
    mut proj1: F1,
    mut proj2: F2,
) -> impl FnMut(&A, &B) -> Ordering
where
    C: FnMut(&KA, &KB) -> Ordering,
    F1: FnMut(&A) -> KA,
    F2: FnMut(&B) -> KB,
{
    move |a, b| cmp(&proj1(a), &proj2(b))
}

/// Ascending comparator on a key function.
pub fn compare_by_key<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Converse of a comparator (swap its arguments).
pub fn converse<T, C>(mut cmp: C) -> impl FnMut(&T, &T) -> Ordering
where
    C: FnMut(&T, &T) -> Ordering,
{
    move |a, b| cmp(b, a)
}
