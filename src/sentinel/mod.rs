//! End markers for iterator-bounded ranges.
//!
//! A range is an iterator plus something that says when to stop. Slices and
//! ordinary iterators carry their own end; a [`Sentinel`] adds a second,
//! value-dependent stop condition, and [`counted`] gives the explicit-count
//! form.

use std::iter::{FusedIterator, Take};

/// Predicate that decides whether an element marks the end of a range.
pub trait Sentinel<T> {
    /// Return `true` if `item` is the end marker.
    fn is_end(&mut self, item: &T) -> bool;
}

/// Sentinel that never fires; the range ends with the underlying iterator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unreachable;

impl<T> Sentinel<T> for Unreachable {
    #[inline]
    fn is_end(&mut self, _item: &T) -> bool {
        false
    }
}

/// Sentinel that fires on the first element equal to a stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<V>(pub V);

impl<T, V> Sentinel<T> for Value<V>
where
    T: PartialEq<V>,
{
    #[inline]
    fn is_end(&mut self, item: &T) -> bool {
        *item == self.0
    }
}

impl<T, F> Sentinel<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn is_end(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Iterator adapter yielding items until a sentinel fires.
///
/// The item that triggers the sentinel is consumed but not yielded.
#[derive(Debug, Clone)]
pub struct Until<I, S> {
    iter: I,
    sentinel: S,
    done: bool,
}

/// Bound `iter` by `sentinel`.
///
/// ```
/// use seqalg::sentinel::{until, Value};
///
/// let c_string = [b'h', b'i', 0, b'x'];
/// let text: Vec<u8> = until(c_string.iter().copied(), Value(0u8)).collect();
/// assert_eq!(text, b"hi");
/// ```
pub fn until<I, S>(iter: I, sentinel: S) -> Until<I::IntoIter, S>
where
    I: IntoIterator,
    S: Sentinel<I::Item>,
{
    Until {
        iter: iter.into_iter(),
        sentinel,
        done: false,
    }
}

impl<I, S> Iterator for Until<I, S>
where
    I: Iterator,
    S: Sentinel<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if !self.sentinel.is_end(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, S> FusedIterator for Until<I, S>
where
    I: Iterator,
    S: Sentinel<I::Item>,
{
}

/// Counted range: the first `n` items of `iter`.
pub fn counted<I: IntoIterator>(iter: I, n: usize) -> Take<I::IntoIter> {
    iter.into_iter().take(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_closure_sentinel() {
        let v = [3, 5, 7, -1, 9];
        let items: Vec<i32> = until(v, |x: &i32| *x < 0).collect();
        assert_eq!(items, vec![3, 5, 7]);
    }

    #[test]
    fn test_until_is_fused() {
        let mut it = until(vec![1, 0, 2], Value(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_unreachable_runs_to_end() {
        let items: Vec<u8> = until(1..=4u8, Unreachable).collect();
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(counted(items, 2).count(), 2);
    }
}
