use crate::sentinel::counted;

/// Apply `f` to every element, returning `f` so accumulated state survives.
pub fn for_each<T, F>(s: &[T], mut f: F) -> F
where
    F: FnMut(&T),
{
    s.iter().for_each(&mut f);
    f
}

/// Apply `f` to every element by mutable reference.
pub fn for_each_mut<T, F>(s: &mut [T], mut f: F) -> F
where
    F: FnMut(&mut T),
{
    s.iter_mut().for_each(&mut f);
    f
}

/// Apply `f` to the first `n` elements, returning how many were visited.
pub fn for_each_n<T, F>(s: &[T], n: usize, f: F) -> usize
where
    F: FnMut(&T),
{
    let n = n.min(s.len());
    for_each(&s[..n], f);
    n
}

/// Mutable [`for_each_n`].
pub fn for_each_n_mut<T, F>(s: &mut [T], n: usize, f: F) -> usize
where
    F: FnMut(&mut T),
{
    let n = n.min(s.len());
    for_each_mut(&mut s[..n], f);
    n
}

/// Number of elements equal to `value`.
pub fn count<T, V>(s: &[T], value: &V) -> usize
where
    T: PartialEq<V>,
{
    count_if(s, |x| x == value)
}

/// Number of elements whose projected key equals `key`.
pub fn count_by_key<T, K, F>(s: &[T], key: &K, mut proj: F) -> usize
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    count_if(s, |x| proj(x) == *key)
}

/// [`count`] over the first `n` elements.
pub fn count_n<T, V>(s: &[T], n: usize, value: &V) -> usize
where
    T: PartialEq<V>,
{
    count(&s[..n.min(s.len())], value)
}

/// Number of elements satisfying `pred`.
pub fn count_if<T, P>(s: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    s.iter().filter(|x| pred(*x)).count()
}

/// [`count_if`] over the first `n` elements.
pub fn count_if_n<T, P>(s: &[T], n: usize, pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    count_if(&s[..n.min(s.len())], pred)
}

/// `true` if every element satisfies `pred` (vacuously true when empty).
pub fn all_of<T, P>(s: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    s.iter().all(pred)
}

/// [`all_of`] over the first `n` elements.
pub fn all_of_n<T, P>(s: &[T], n: usize, pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    counted(s, n).all(pred)
}

/// `true` if some element satisfies `pred`.
pub fn any_of<T, P>(s: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    s.iter().any(pred)
}

/// [`any_of`] over the first `n` elements.
pub fn any_of_n<T, P>(s: &[T], n: usize, pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    counted(s, n).any(pred)
}

/// `true` if no element satisfies `pred`.
pub fn none_of<T, P>(s: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any_of(s, pred)
}

/// [`none_of`] over the first `n` elements.
pub fn none_of_n<T, P>(s: &[T], n: usize, pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any_of_n(s, n, pred)
}

/// First index at which `a` and `b` differ, or the shorter length.
pub fn mismatch<A, B>(a: &[A], b: &[B]) -> usize
where
    A: PartialEq<B>,
{
    mismatch_by(a, b, |x, y| x == y)
}

/// [`mismatch`] with a custom equivalence.
pub fn mismatch_by<A, B, P>(a: &[A], b: &[B], mut pred: P) -> usize
where
    P: FnMut(&A, &B) -> bool,
{
    a.iter()
        .zip(b)
        .position(|(x, y)| !pred(x, y))
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// [`mismatch`] over at most the first `n` pairs.
pub fn mismatch_n<A, B>(a: &[A], b: &[B], n: usize) -> usize
where
    A: PartialEq<B>,
{
    mismatch_n_by(a, b, n, |x, y| x == y)
}

/// [`mismatch_n`] with a custom equivalence.
pub fn mismatch_n_by<A, B, P>(a: &[A], b: &[B], n: usize, pred: P) -> usize
where
    P: FnMut(&A, &B) -> bool,
{
    mismatch_by(&a[..n.min(a.len())], &b[..n.min(b.len())], pred)
}
