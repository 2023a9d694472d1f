use crate::output::{drain_into, OutputSink};
use crate::Result;

/// Overwrite elements equal to `old` with `new`, returning how many changed.
pub fn replace<T, V>(s: &mut [T], old: &V, new: &T) -> usize
where
    T: PartialEq<V> + Clone,
{
    replace_if(s, |x| x == old, new)
}

/// Overwrite elements whose projected key equals `key`.
pub fn replace_by_key<T, K, F>(s: &mut [T], key: &K, mut proj: F, new: &T) -> usize
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    replace_if(s, |x| proj(x) == *key, new)
}

/// [`replace`] within the first `n` elements.
pub fn replace_n<T, V>(s: &mut [T], n: usize, old: &V, new: &T) -> usize
where
    T: PartialEq<V> + Clone,
{
    let n = n.min(s.len());
    replace(&mut s[..n], old, new)
}

/// Overwrite elements satisfying `pred` with `new`.
pub fn replace_if<T, P>(s: &mut [T], mut pred: P, new: &T) -> usize
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut replaced = 0;
    for x in s.iter_mut() {
        if pred(&*x) {
            *x = new.clone();
            replaced += 1;
        }
    }
    replaced
}

/// [`replace_if`] within the first `n` elements.
pub fn replace_if_n<T, P>(s: &mut [T], n: usize, pred: P, new: &T) -> usize
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let n = n.min(s.len());
    replace_if(&mut s[..n], pred, new)
}

/// Write `src`, substituting `new` for items equal to `old`.
pub fn replace_copy<T, V, I, O>(src: I, old: &V, new: &T, out: &mut O) -> Result<usize>
where
    T: PartialEq<V> + Clone,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    replace_copy_if(src, |x| x == old, new, out)
}

/// [`replace_copy`] over the first `n` items of `src`.
pub fn replace_copy_n<T, V, I, O>(src: I, n: usize, old: &V, new: &T, out: &mut O) -> Result<usize>
where
    T: PartialEq<V> + Clone,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    replace_copy(src.into_iter().take(n), old, new, out)
}

/// Write `src`, substituting `new` for items satisfying `pred`.
pub fn replace_copy_if<T, I, O, P>(src: I, mut pred: P, new: &T, out: &mut O) -> Result<usize>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    drain_into(
        src.into_iter()
            .map(|x| if pred(&x) { new.clone() } else { x }),
        out,
    )
}

/// [`replace_copy_if`] over the first `n` items of `src`.
pub fn replace_copy_if_n<T, I, O, P>(
    src: I,
    n: usize,
    pred: P,
    new: &T,
    out: &mut O,
) -> Result<usize>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    replace_copy_if(src.into_iter().take(n), pred, new, out)
}
