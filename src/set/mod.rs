//! Set algebra on sorted sequences.
//!
//! Inputs must be sorted by the comparator in use. Equal elements are
//! treated as a multiset: an element present `m` times in the first input
//! and `n` times in the second appears
//!
//! - `max(m, n)` times in the union,
//! - `min(m, n)` times in the intersection,
//! - `m - n` times (saturating) in the difference,
//! - `|m - n|` times in the symmetric difference,
//! - `m + n` times in a merge.
//!
//! Comparators always receive an element of the first input as their first
//! argument. Where an element is kept from both sides the first input's
//! copy is written.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::output::OutputSink;
use crate::Result;

/// `true` if every element of sorted `b` appears in sorted `a` (as a multiset).
pub fn includes<T: Ord>(a: &[T], b: &[T]) -> bool {
    includes_by(a, b, T::cmp)
}

/// [`includes`] with a custom comparator.
pub fn includes_by<A, B, C>(a: &[A], b: &[B], mut cmp: C) -> bool
where
    C: FnMut(&A, &B) -> Ordering,
{
    let mut i = 0;
    for y in b {
        loop {
            let Some(x) = a.get(i) else {
                return false;
            };
            match cmp(x, y) {
                Ordering::Less => i += 1,
                Ordering::Equal => {
                    i += 1;
                    break;
                }
                Ordering::Greater => return false,
            }
        }
    }
    true
}

/// Write the sorted union of `a` and `b`.
///
/// ```
/// use seqalg::set::set_union;
///
/// let mut out = Vec::new();
/// set_union([1, 2, 2, 5], [2, 3, 5, 5], &mut out).unwrap();
/// assert_eq!(out, [1, 2, 2, 3, 5, 5]);
/// ```
pub fn set_union<T, IA, IB, O>(a: IA, b: IB, out: &mut O) -> Result<usize>
where
    T: Ord,
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    set_union_by(a, b, T::cmp, out)
}

/// [`set_union`] with a custom comparator.
pub fn set_union_by<T, IA, IB, O, C>(a: IA, b: IB, cmp: C, out: &mut O) -> Result<usize>
where
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    combine(a, b, cmp, out, SetOp::Union)
}

/// Write the elements present in both `a` and `b`.
pub fn set_intersection<T, IA, IB, O>(a: IA, b: IB, out: &mut O) -> Result<usize>
where
    T: Ord,
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    set_intersection_by(a, b, T::cmp, out)
}

/// [`set_intersection`] with a custom comparator.
pub fn set_intersection_by<T, IA, IB, O, C>(a: IA, b: IB, cmp: C, out: &mut O) -> Result<usize>
where
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    combine(a, b, cmp, out, SetOp::Intersection)
}

/// Write the elements of `a` not present in `b`.
pub fn set_difference<T, IA, IB, O>(a: IA, b: IB, out: &mut O) -> Result<usize>
where
    T: Ord,
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    set_difference_by(a, b, T::cmp, out)
}

/// [`set_difference`] with a custom comparator.
pub fn set_difference_by<T, IA, IB, O, C>(a: IA, b: IB, cmp: C, out: &mut O) -> Result<usize>
where
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    combine(a, b, cmp, out, SetOp::Difference)
}

/// Write the elements present in exactly one of `a` and `b`.
pub fn set_symmetric_difference<T, IA, IB, O>(a: IA, b: IB, out: &mut O) -> Result<usize>
where
    T: Ord,
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    set_symmetric_difference_by(a, b, T::cmp, out)
}

/// [`set_symmetric_difference`] with a custom comparator.
///
/// ```
/// use seqalg::functional::projected_cmp;
/// use seqalg::set::set_symmetric_difference_by;
///
/// let mut out = Vec::new();
/// let cmp = projected_cmp(|a: &i32, b: &i32| a.cmp(b), |x: &i32| *x, |y: &i32| y + 1);
/// set_symmetric_difference_by([1, 2, 4, 5, 6], [2, 5, 7], cmp, &mut out).unwrap();
/// assert_eq!(out, [1, 2, 2, 4, 5, 7]);
/// ```
pub fn set_symmetric_difference_by<T, IA, IB, O, C>(
    a: IA,
    b: IB,
    cmp: C,
    out: &mut O,
) -> Result<usize>
where
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    combine(a, b, cmp, out, SetOp::SymmetricDifference)
}

/// Stable merge of two sorted inputs; on ties `a` comes first.
pub fn merge<T, IA, IB, O>(a: IA, b: IB, out: &mut O) -> Result<usize>
where
    T: Ord,
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    merge_by(a, b, T::cmp, out)
}

/// [`merge`] with a custom comparator.
pub fn merge_by<T, IA, IB, O, C>(a: IA, b: IB, cmp: C, out: &mut O) -> Result<usize>
where
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    combine(a, b, cmp, out, SetOp::Merge)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetOp {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
    Merge,
}

impl SetOp {
    fn keeps_first_tail(self) -> bool {
        !matches!(self, SetOp::Intersection)
    }

    fn keeps_second_tail(self) -> bool {
        matches!(self, SetOp::Union | SetOp::SymmetricDifference | SetOp::Merge)
    }
}

fn combine<T, IA, IB, O, C>(a: IA, b: IB, mut cmp: C, out: &mut O, op: SetOp) -> Result<usize>
where
    IA: IntoIterator<Item = T>,
    IB: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();
    let mut written = 0;
    loop {
        let ord = match (a.peek(), b.peek()) {
            (Some(x), Some(y)) => cmp(x, y),
            (Some(_), None) if op.keeps_first_tail() => Ordering::Less,
            (None, Some(_)) if op.keeps_second_tail() => Ordering::Greater,
            _ => break,
        };
        match (ord, op) {
            (Ordering::Less, SetOp::Intersection) => {
                a.next();
            }
            (Ordering::Less, _) => written += emit(&mut a, out)?,
            (Ordering::Greater, SetOp::Intersection | SetOp::Difference) => {
                b.next();
            }
            (Ordering::Greater, _) => written += emit(&mut b, out)?,
            (Ordering::Equal, SetOp::Union | SetOp::Intersection) => {
                written += emit(&mut a, out)?;
                b.next();
            }
            (Ordering::Equal, SetOp::Merge) => written += emit(&mut a, out)?,
            (Ordering::Equal, SetOp::Difference | SetOp::SymmetricDifference) => {
                a.next();
                b.next();
            }
        }
    }
    Ok(written)
}

fn emit<T, I, O>(iter: &mut Peekable<I>, out: &mut O) -> Result<usize>
where
    I: Iterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    match iter.next() {
        Some(item) => {
            out.put(item)?;
            Ok(1)
        }
        None => Ok(0),
    }
}
