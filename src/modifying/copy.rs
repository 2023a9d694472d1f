use std::mem;
use std::ops::Range;

use crate::output::{drain_into, OutputSink};
use crate::{check_range, AlgorithmError, Result};

/// Write every item of `src` into `out`, returning how many were written.
pub fn copy<T, I, O>(src: I, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    drain_into(src, out)
}

/// Write the first `n` items of `src` into `out`.
pub fn copy_n<T, I, O>(src: I, n: usize, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    drain_into(src.into_iter().take(n), out)
}

/// Write the items of `src` that satisfy `pred`.
pub fn copy_if<T, I, O, P>(src: I, mut pred: P, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    drain_into(src.into_iter().filter(|x| pred(x)), out)
}

/// Write the first `n` items of `src` that satisfy `pred`.
///
/// `n` counts written items, not inspected ones.
pub fn copy_if_n<T, I, O, P>(src: I, n: usize, mut pred: P, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    drain_into(src.into_iter().filter(|x| pred(x)).take(n), out)
}

/// Copy `src` into the tail of `dst`, last element first.
///
/// Returns the index in `dst` where the copied block starts.
pub fn copy_backward<T: Clone>(src: &[T], dst: &mut [T]) -> Result<usize> {
    let start = tail_start(src.len(), dst.len())?;
    for (d, s) in dst[start..].iter_mut().rev().zip(src.iter().rev()) {
        *d = s.clone();
    }
    Ok(start)
}

/// [`copy_backward`] for the first `n` elements of `src`.
pub fn copy_backward_n<T: Clone>(src: &[T], n: usize, dst: &mut [T]) -> Result<usize> {
    copy_backward(&src[..n.min(src.len())], dst)
}

/// Copy `buf[src]` so that it ends at `dest_end`, working right to left.
///
/// The destination may overlap the source when it lies to the right, or sit
/// anywhere to the left of `src.start` without overlapping. Returns the start
/// of the destination block.
pub fn copy_backward_within<T: Clone>(
    buf: &mut [T],
    src: Range<usize>,
    dest_end: usize,
) -> Result<usize> {
    let dest_start = within_dest(buf.len(), &src, dest_end)?;
    for i in (0..src.len()).rev() {
        buf[dest_start + i] = buf[src.start + i].clone();
    }
    Ok(dest_start)
}

/// Move every element of `src` into `out`, leaving `T::default()` behind.
pub fn move_into<T, O>(src: &mut [T], out: &mut O) -> Result<usize>
where
    T: Default,
    O: OutputSink<T> + ?Sized,
{
    drain_into(src.iter_mut().map(mem::take), out)
}

/// [`move_into`] for the first `n` elements.
pub fn move_n<T, O>(src: &mut [T], n: usize, out: &mut O) -> Result<usize>
where
    T: Default,
    O: OutputSink<T> + ?Sized,
{
    let n = n.min(src.len());
    move_into(&mut src[..n], out)
}

/// Move `src` into the tail of `dst`, last element first.
pub fn move_backward<T: Default>(src: &mut [T], dst: &mut [T]) -> Result<usize> {
    let start = tail_start(src.len(), dst.len())?;
    for (d, s) in dst[start..].iter_mut().rev().zip(src.iter_mut().rev()) {
        *d = mem::take(s);
    }
    Ok(start)
}

/// [`move_backward`] for the first `n` elements of `src`.
pub fn move_backward_n<T: Default>(src: &mut [T], n: usize, dst: &mut [T]) -> Result<usize> {
    let n = n.min(src.len());
    move_backward(&mut src[..n], dst)
}

/// Move `buf[src]` so that it ends at `dest_end`, working right to left.
///
/// Vacated source slots not covered by the destination hold `T::default()`.
pub fn move_backward_within<T: Default>(
    buf: &mut [T],
    src: Range<usize>,
    dest_end: usize,
) -> Result<usize> {
    let dest_start = within_dest(buf.len(), &src, dest_end)?;
    for i in (0..src.len()).rev() {
        buf[dest_start + i] = mem::take(&mut buf[src.start + i]);
    }
    Ok(dest_start)
}

/// Swap the common prefix of `a` and `b`, returning its length.
pub fn swap_ranges<T>(a: &mut [T], b: &mut [T]) -> usize {
    let n = a.len().min(b.len());
    a[..n].swap_with_slice(&mut b[..n]);
    n
}

fn tail_start(src_len: usize, dst_len: usize) -> Result<usize> {
    dst_len
        .checked_sub(src_len)
        .ok_or(AlgorithmError::LengthMismatch {
            expected: src_len,
            actual: dst_len,
        })
}

fn within_dest(len: usize, src: &Range<usize>, dest_end: usize) -> Result<usize> {
    check_range(src, len)?;
    let dest_start = dest_end.checked_sub(src.len());
    match dest_start {
        Some(start) if dest_end <= len && (start >= src.start || dest_end <= src.start) => {
            Ok(start)
        }
        _ => Err(AlgorithmError::InvalidRange {
            start: dest_start.unwrap_or(0),
            end: dest_end,
            len,
        }),
    }
}
