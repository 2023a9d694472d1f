use crate::non_modifying::find_if;
use crate::output::{drain_into, OutputSink};
use crate::Result;

/// Compact away elements equal to `value`, returning the new length.
///
/// Kept elements retain their relative order in `s[..len]`; the removed
/// ones end up in `s[len..]` in unspecified order.
pub fn remove<T, V>(s: &mut [T], value: &V) -> usize
where
    T: PartialEq<V>,
{
    remove_if(s, |x| x == value)
}

/// Compact away elements whose projected key equals `key`.
pub fn remove_by_key<T, K, F>(s: &mut [T], key: &K, mut proj: F) -> usize
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    remove_if(s, |x| proj(x) == *key)
}

/// [`remove`] within the first `n` elements; the rest are untouched.
pub fn remove_n<T, V>(s: &mut [T], n: usize, value: &V) -> usize
where
    T: PartialEq<V>,
{
    let n = n.min(s.len());
    remove(&mut s[..n], value)
}

/// Compact away elements satisfying `pred`, returning the new length.
pub fn remove_if<T, P>(s: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let Some(mut write) = find_if(s, &mut pred) else {
        return s.len();
    };
    for read in write + 1..s.len() {
        if !pred(&s[read]) {
            s.swap(write, read);
            write += 1;
        }
    }
    write
}

/// [`remove_if`] within the first `n` elements.
pub fn remove_if_n<T, P>(s: &mut [T], n: usize, pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let n = n.min(s.len());
    remove_if(&mut s[..n], pred)
}

/// Write the items of `src` not equal to `value`.
pub fn remove_copy<T, V, I, O>(src: I, value: &V, out: &mut O) -> Result<usize>
where
    T: PartialEq<V>,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    remove_copy_if(src, |x| x == value, out)
}

/// [`remove_copy`] over the first `n` items of `src`.
pub fn remove_copy_n<T, V, I, O>(src: I, n: usize, value: &V, out: &mut O) -> Result<usize>
where
    T: PartialEq<V>,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    remove_copy(src.into_iter().take(n), value, out)
}

/// Write the items of `src` that do not satisfy `pred`.
pub fn remove_copy_if<T, I, O, P>(src: I, mut pred: P, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    drain_into(src.into_iter().filter(|x| !pred(x)), out)
}

/// [`remove_copy_if`] over the first `n` items of `src`.
pub fn remove_copy_if_n<T, I, O, P>(src: I, n: usize, pred: P, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    remove_copy_if(src.into_iter().take(n), pred, out)
}

/// Collapse runs of equal neighbours to their first element.
///
/// Returns the new length; duplicates end up in `s[len..]`.
pub fn unique<T: PartialEq>(s: &mut [T]) -> usize {
    unique_by(s, |kept, next| kept == next)
}

/// [`unique`] with a custom equivalence.
///
/// `pred(kept, next)` compares a candidate against the last element kept,
/// not against its immediate predecessor.
pub fn unique_by<T, P>(s: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T, &T) -> bool,
{
    if s.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..s.len() {
        if !pred(&s[write - 1], &s[read]) {
            if read != write {
                s.swap(write, read);
            }
            write += 1;
        }
    }
    write
}

/// Write `src` with runs of equal neighbours collapsed.
pub fn unique_copy<T, I, O>(src: I, out: &mut O) -> Result<usize>
where
    T: PartialEq + Clone,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    unique_copy_by(src, |kept, next| kept == next, out)
}

/// [`unique_copy`] with a custom equivalence.
pub fn unique_copy_by<T, I, O, P>(src: I, mut pred: P, out: &mut O) -> Result<usize>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T, &T) -> bool,
{
    let mut last: Option<T> = None;
    let mut written = 0;
    for item in src {
        if last.as_ref().map_or(true, |kept| !pred(kept, &item)) {
            out.put(item.clone())?;
            last = Some(item);
            written += 1;
        }
    }
    Ok(written)
}
