use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::output::OutputSink;
use crate::{check_position, Result};

use super::copy::copy;

/// Below this length the triple-reversal rotate beats cycle following.
const REVERSAL_CUTOFF: usize = 64;

/// Element exchange pattern used by [`rotate_with`].
///
/// All three produce the same permutation; they differ in access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RotateStrategy {
    /// Block swaps advancing a single forward cursor (Gries-Mills).
    ForwardSwap,
    /// Reverse both halves, then the whole range.
    Reversal,
    /// Follow the `gcd(len, mid)` permutation cycles, one swap per element.
    CycleLeader,
}

impl RotateStrategy {
    /// Strategy picked by [`rotate`] for a sequence of `len` elements.
    pub fn for_len(len: usize) -> Self {
        if len <= REVERSAL_CUTOFF {
            RotateStrategy::Reversal
        } else {
            RotateStrategy::CycleLeader
        }
    }

    /// Every strategy, in declaration order.
    pub const ALL: [RotateStrategy; 3] = [
        RotateStrategy::ForwardSwap,
        RotateStrategy::Reversal,
        RotateStrategy::CycleLeader,
    ];
}

impl fmt::Display for RotateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotateStrategy::ForwardSwap => "forward-swap",
            RotateStrategy::Reversal => "reversal",
            RotateStrategy::CycleLeader => "cycle-leader",
        };
        f.write_str(name)
    }
}

/// Unrecognised rotate strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rotate strategy `{0}` (expected forward-swap, reversal or cycle-leader)")]
pub struct UnknownStrategy(pub String);

impl FromStr for RotateStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "forward-swap" | "forward" => Ok(RotateStrategy::ForwardSwap),
            "reversal" | "reverse" => Ok(RotateStrategy::Reversal),
            "cycle-leader" | "cycle" => Ok(RotateStrategy::CycleLeader),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Reverse `s` in place.
pub fn reverse<T>(s: &mut [T]) {
    let mut lo = 0;
    let mut hi = s.len();
    while lo + 1 < hi {
        hi -= 1;
        s.swap(lo, hi);
        lo += 1;
    }
}

/// Reverse the first `n` elements.
pub fn reverse_n<T>(s: &mut [T], n: usize) -> usize {
    let n = n.min(s.len());
    reverse(&mut s[..n]);
    n
}

/// Write `src` back to front.
pub fn reverse_copy<T, O>(src: &[T], out: &mut O) -> Result<usize>
where
    T: Clone,
    O: OutputSink<T> + ?Sized,
{
    copy(src.iter().rev().cloned(), out)
}

/// Write the first `n` elements of `src` back to front.
pub fn reverse_copy_n<T, O>(src: &[T], n: usize, out: &mut O) -> Result<usize>
where
    T: Clone,
    O: OutputSink<T> + ?Sized,
{
    reverse_copy(&src[..n.min(src.len())], out)
}

/// Rotate left so that `s[mid]` becomes the first element.
///
/// Returns `len - mid`, the index the former first element lands on (equal
/// to `len` for the no-op rotate by zero). The strategy follows
/// [`RotateStrategy::for_len`].
pub fn rotate<T>(s: &mut [T], mid: usize) -> Result<usize> {
    rotate_with(s, mid, RotateStrategy::for_len(s.len()))
}

/// [`rotate`] with an explicit strategy.
pub fn rotate_with<T>(s: &mut [T], mid: usize, strategy: RotateStrategy) -> Result<usize> {
    check_position(mid, s.len())?;
    let len = s.len();
    if mid == 0 || mid == len {
        return Ok(len - mid);
    }
    trace!(len, mid, %strategy, "rotating");
    match strategy {
        RotateStrategy::ForwardSwap => rotate_forward(s, mid),
        RotateStrategy::Reversal => rotate_reversal(s, mid),
        RotateStrategy::CycleLeader => rotate_cycles(s, mid),
    }
    Ok(len - mid)
}

fn rotate_forward<T>(s: &mut [T], mid: usize) {
    let len = s.len();
    let mut first = 0;
    let mut middle = mid;
    let mut next = middle;
    while first != next {
        s.swap(first, next);
        first += 1;
        next += 1;
        if next == len {
            next = middle;
        } else if first == middle {
            middle = next;
        }
    }
}

fn rotate_reversal<T>(s: &mut [T], mid: usize) {
    reverse(&mut s[..mid]);
    reverse(&mut s[mid..]);
    reverse(s);
}

fn rotate_cycles<T>(s: &mut [T], mid: usize) {
    let len = s.len();
    for start in 0..gcd(len, mid) {
        let mut hole = start;
        loop {
            let source = if hole + mid >= len {
                hole + mid - len
            } else {
                hole + mid
            };
            if source == start {
                break;
            }
            s.swap(hole, source);
            hole = source;
        }
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Write `src` rotated left by `mid`, leaving `src` untouched.
pub fn rotate_copy<T, O>(src: &[T], mid: usize, out: &mut O) -> Result<usize>
where
    T: Clone,
    O: OutputSink<T> + ?Sized,
{
    check_position(mid, src.len())?;
    let head = copy(src[mid..].iter().cloned(), out)?;
    let tail = copy(src[..mid].iter().cloned(), out)?;
    Ok(head + tail)
}

/// Move elements `n` places towards the front.
///
/// Returns the range now holding the kept elements, `0..len - n`. The `n`
/// displaced elements occupy the tail in unspecified order. When `n` is zero
/// or `n >= len` nothing moves and the empty range `0..0` is returned.
pub fn shift_left<T>(s: &mut [T], n: usize) -> Range<usize> {
    let len = s.len();
    if n == 0 || n >= len {
        return 0..0;
    }
    for i in n..len {
        s.swap(i - n, i);
    }
    0..len - n
}

/// Move elements `n` places towards the back.
///
/// Returns the range now holding the kept elements, `n..len`. The `n`
/// displaced elements occupy the head in unspecified order. When `n >= len`
/// nothing moves and the range is empty.
pub fn shift_right<T>(s: &mut [T], n: usize) -> Range<usize> {
    let len = s.len();
    if n == 0 {
        return 0..len;
    }
    if n >= len {
        return len..len;
    }
    for i in (n..len).rev() {
        s.swap(i - n, i);
    }
    n..len
}
