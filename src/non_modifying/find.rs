/// Index of the first element equal to `value`.
pub fn find<T, V>(s: &[T], value: &V) -> Option<usize>
where
    T: PartialEq<V>,
{
    find_if(s, |x| x == value)
}

/// Index of the first element whose projected key equals `key`.
pub fn find_by_key<T, K, F>(s: &[T], key: &K, mut proj: F) -> Option<usize>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    find_if(s, |x| proj(x) == *key)
}

/// [`find`] within the first `n` elements.
pub fn find_n<T, V>(s: &[T], n: usize, value: &V) -> Option<usize>
where
    T: PartialEq<V>,
{
    find(&s[..n.min(s.len())], value)
}

/// Index of the first element satisfying `pred`.
pub fn find_if<T, P>(s: &[T], pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    s.iter().position(pred)
}

/// [`find_if`] within the first `n` elements.
pub fn find_if_n<T, P>(s: &[T], n: usize, pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    find_if(&s[..n.min(s.len())], pred)
}

/// Index of the first element not satisfying `pred`.
pub fn find_if_not<T, P>(s: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    find_if(s, |x| !pred(x))
}

/// [`find_if_not`] within the first `n` elements.
pub fn find_if_not_n<T, P>(s: &[T], n: usize, pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    find_if_not(&s[..n.min(s.len())], pred)
}

/// Index of the first element of `s` equal to any element of `candidates`.
pub fn find_first_of<T, U>(s: &[T], candidates: &[U]) -> Option<usize>
where
    T: PartialEq<U>,
{
    find_first_of_by(s, candidates, |x, y| x == y)
}

/// [`find_first_of`] with a custom equivalence.
pub fn find_first_of_by<T, U, P>(s: &[T], candidates: &[U], mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &U) -> bool,
{
    find_if(s, |x| candidates.iter().any(|c| pred(x, c)))
}

/// [`find_first_of`] within the first `n` elements of `s` and the first
/// `m` candidates.
pub fn find_first_of_n<T, U>(s: &[T], n: usize, candidates: &[U], m: usize) -> Option<usize>
where
    T: PartialEq<U>,
{
    find_first_of_n_by(s, n, candidates, m, |x, y| x == y)
}

/// [`find_first_of_n`] with a custom equivalence.
pub fn find_first_of_n_by<T, U, P>(
    s: &[T],
    n: usize,
    candidates: &[U],
    m: usize,
    pred: P,
) -> Option<usize>
where
    P: FnMut(&T, &U) -> bool,
{
    find_first_of_by(
        &s[..n.min(s.len())],
        &candidates[..m.min(candidates.len())],
        pred,
    )
}

/// Index of the first element of the first pair of equal neighbours.
pub fn adjacent_find<T: PartialEq>(s: &[T]) -> Option<usize> {
    adjacent_find_by(s, |a, b| a == b)
}

/// [`adjacent_find`] with a custom relation between neighbours.
pub fn adjacent_find_by<T, P>(s: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &T) -> bool,
{
    s.windows(2).position(|w| pred(&w[0], &w[1]))
}

/// [`adjacent_find`] within the first `n` elements.
pub fn adjacent_find_n<T: PartialEq>(s: &[T], n: usize) -> Option<usize> {
    adjacent_find_n_by(s, n, |a, b| a == b)
}

/// [`adjacent_find_n`] with a custom relation between neighbours.
pub fn adjacent_find_n_by<T, P>(s: &[T], n: usize, pred: P) -> Option<usize>
where
    P: FnMut(&T, &T) -> bool,
{
    adjacent_find_by(&s[..n.min(s.len())], pred)
}
