//! Minimum, maximum and clamp.
//!
//! Two-value forms return references, slice forms return indices, and the
//! `_of` forms consume any iterator and return owned values.
//!
//! Tie rules: on two equal values `min` returns the second, `max` the first,
//! and `minmax` the pair `(b, a)`. Over a slice `min_element` and
//! `max_element` report the first extreme, and `minmax_element` reports the
//! first smallest and the last largest.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pair of a minimum and a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinMax<T> {
    /// Smallest value (or its position).
    pub min: T,
    /// Largest value (or its position).
    pub max: T,
}

impl<T> MinMax<T> {
    /// Map both halves.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MinMax<U> {
        MinMax {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

/// Smaller of two values; `b` on ties.
pub fn min<'a, T: Ord>(a: &'a T, b: &'a T) -> &'a T {
    min_by(a, b, T::cmp)
}

/// [`min`] with a custom comparator.
pub fn min_by<'a, T, C>(a: &'a T, b: &'a T, mut cmp: C) -> &'a T
where
    C: FnMut(&T, &T) -> Ordering,
{
    if cmp(a, b) == Ordering::Less {
        a
    } else {
        b
    }
}

/// Larger of two values; `a` on ties.
pub fn max<'a, T: Ord>(a: &'a T, b: &'a T) -> &'a T {
    max_by(a, b, T::cmp)
}

/// [`max`] with a custom comparator.
pub fn max_by<'a, T, C>(a: &'a T, b: &'a T, mut cmp: C) -> &'a T
where
    C: FnMut(&T, &T) -> Ordering,
{
    if cmp(a, b) == Ordering::Less {
        b
    } else {
        a
    }
}

/// Both extremes of two values, `(b, a)` when they compare equal.
pub fn minmax<'a, T: Ord>(a: &'a T, b: &'a T) -> MinMax<&'a T> {
    minmax_by(a, b, T::cmp)
}

/// [`minmax`] with a custom comparator.
pub fn minmax_by<'a, T, C>(a: &'a T, b: &'a T, mut cmp: C) -> MinMax<&'a T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    if cmp(a, b) == Ordering::Less {
        MinMax { min: a, max: b }
    } else {
        MinMax { min: b, max: a }
    }
}

/// Clamp `v` to the closed interval `[lo, hi]`.
///
/// If `hi < lo` the result is whichever bound `v` falls outside first,
/// checking `lo` first.
pub fn clamp<'a, T: Ord>(v: &'a T, lo: &'a T, hi: &'a T) -> &'a T {
    clamp_by(v, lo, hi, T::cmp)
}

/// [`clamp`] with a custom comparator.
pub fn clamp_by<'a, T, C>(v: &'a T, lo: &'a T, hi: &'a T, mut cmp: C) -> &'a T
where
    C: FnMut(&T, &T) -> Ordering,
{
    if cmp(v, lo) == Ordering::Less {
        lo
    } else if cmp(hi, v) == Ordering::Less {
        hi
    } else {
        v
    }
}

/// Index of the first smallest element.
pub fn min_element<T: Ord>(s: &[T]) -> Option<usize> {
    min_element_by(s, T::cmp)
}

/// [`min_element`] with a custom comparator.
pub fn min_element_by<T, C>(s: &[T], mut cmp: C) -> Option<usize>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let mut best = 0;
    for i in 1..s.len() {
        if cmp(&s[i], &s[best]) == Ordering::Less {
            best = i;
        }
    }
    (!s.is_empty()).then_some(best)
}

/// [`min_element`] comparing projected keys.
///
/// ```
/// use seqalg::minmax::min_element_by_key;
///
/// let v = [-1, -4, -3, -7, -5];
/// assert_eq!(min_element_by_key(&v, |x| x % 3), Some(4));
/// ```
pub fn min_element_by_key<T, K, F>(s: &[T], mut key: F) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    min_element_by(s, |a, b| key(a).cmp(&key(b)))
}

/// Index of the first largest element.
pub fn max_element<T: Ord>(s: &[T]) -> Option<usize> {
    max_element_by(s, T::cmp)
}

/// [`max_element`] with a custom comparator.
pub fn max_element_by<T, C>(s: &[T], mut cmp: C) -> Option<usize>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let mut best = 0;
    for i in 1..s.len() {
        if cmp(&s[best], &s[i]) == Ordering::Less {
            best = i;
        }
    }
    (!s.is_empty()).then_some(best)
}

/// [`max_element`] comparing projected keys.
///
/// ```
/// use seqalg::functional::Identity;
/// use seqalg::minmax::{max_element, max_element_by_key};
///
/// let v = [2, 9, 4, 9];
/// assert_eq!(max_element_by_key(&v, Identity::cloned), max_element(&v));
/// assert_eq!(max_element_by_key(&v, |x| -x), Some(0));
/// ```
pub fn max_element_by_key<T, K, F>(s: &[T], mut key: F) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    max_element_by(s, |a, b| key(a).cmp(&key(b)))
}

/// Indices of the first smallest and the last largest element.
pub fn minmax_element<T: Ord>(s: &[T]) -> Option<MinMax<usize>> {
    minmax_element_by(s, T::cmp)
}

/// [`minmax_element`] with a custom comparator.
pub fn minmax_element_by<T, C>(s: &[T], mut cmp: C) -> Option<MinMax<usize>>
where
    C: FnMut(&T, &T) -> Ordering,
{
    if s.is_empty() {
        return None;
    }
    let mut result = MinMax { min: 0, max: 0 };
    for i in 1..s.len() {
        if cmp(&s[i], &s[result.min]) == Ordering::Less {
            result.min = i;
        }
        if cmp(&s[i], &s[result.max]) != Ordering::Less {
            result.max = i;
        }
    }
    Some(result)
}

/// [`minmax_element`] comparing projected keys.
pub fn minmax_element_by_key<T, K, F>(s: &[T], mut key: F) -> Option<MinMax<usize>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    minmax_element_by(s, |a, b| key(a).cmp(&key(b)))
}

/// Smallest item of an iterator (first on ties).
pub fn min_of<I>(iter: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    min_of_by(iter, Ord::cmp)
}

/// [`min_of`] with a custom comparator.
pub fn min_of_by<I, C>(iter: I, mut cmp: C) -> Option<I::Item>
where
    I: IntoIterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    iter.into_iter().fold(None, |best, item| match best {
        Some(b) if cmp(&item, &b) != Ordering::Less => Some(b),
        _ => Some(item),
    })
}

/// [`min_of`] comparing projected keys.
pub fn min_of_by_key<I, K, F>(iter: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    min_of_by(iter, |a, b| key(a).cmp(&key(b)))
}

/// Largest item of an iterator (first on ties).
pub fn max_of<I>(iter: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    max_of_by(iter, Ord::cmp)
}

/// [`max_of`] with a custom comparator.
pub fn max_of_by<I, C>(iter: I, mut cmp: C) -> Option<I::Item>
where
    I: IntoIterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    iter.into_iter().fold(None, |best, item| match best {
        Some(b) if cmp(&b, &item) != Ordering::Less => Some(b),
        _ => Some(item),
    })
}

/// [`max_of`] comparing projected keys.
pub fn max_of_by_key<I, K, F>(iter: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    max_of_by(iter, |a, b| key(a).cmp(&key(b)))
}

/// Smallest (first) and largest (last) items of an iterator.
pub fn minmax_of<I>(iter: I) -> Option<MinMax<I::Item>>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    minmax_of_by(iter, Ord::cmp)
}

/// [`minmax_of`] with a custom comparator.
pub fn minmax_of_by<I, C>(iter: I, mut cmp: C) -> Option<MinMax<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = iter.into_iter();
    let first = iter.next()?;
    let mut result = MinMax {
        min: first.clone(),
        max: first,
    };
    for item in iter {
        if cmp(&item, &result.min) == Ordering::Less {
            result.min = item;
        } else if cmp(&item, &result.max) != Ordering::Less {
            result.max = item;
        }
    }
    Some(result)
}

/// [`minmax_of`] comparing projected keys.
pub fn minmax_of_by_key<I, K, F>(iter: I, mut key: F) -> Option<MinMax<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    minmax_of_by(iter, |a, b| key(a).cmp(&key(b)))
}
