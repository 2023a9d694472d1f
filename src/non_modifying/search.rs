use std::ops::Range;

/// `true` if `s` begins with `prefix`.
pub fn starts_with<T, U>(s: &[T], prefix: &[U]) -> bool
where
    T: PartialEq<U>,
{
    starts_with_by(s, prefix, |x, y| x == y)
}

/// [`starts_with`] with a custom equivalence.
pub fn starts_with_by<T, U, P>(s: &[T], prefix: &[U], pred: P) -> bool
where
    P: FnMut(&T, &U) -> bool,
{
    prefix.len() <= s.len() && crate::comparison::equal_by(&s[..prefix.len()], prefix, pred)
}

/// [`starts_with`] on the first `n` elements of `s` and `m` of `prefix`.
pub fn starts_with_n<T, U>(s: &[T], n: usize, prefix: &[U], m: usize) -> bool
where
    T: PartialEq<U>,
{
    starts_with_n_by(s, n, prefix, m, |x, y| x == y)
}

/// [`starts_with_n`] with a custom equivalence.
pub fn starts_with_n_by<T, U, P>(s: &[T], n: usize, prefix: &[U], m: usize, pred: P) -> bool
where
    P: FnMut(&T, &U) -> bool,
{
    starts_with_by(&s[..n.min(s.len())], &prefix[..m.min(prefix.len())], pred)
}

/// `true` if `s` ends with `suffix`.
pub fn ends_with<T, U>(s: &[T], suffix: &[U]) -> bool
where
    T: PartialEq<U>,
{
    ends_with_by(s, suffix, |x, y| x == y)
}

/// [`ends_with`] with a custom equivalence.
pub fn ends_with_by<T, U, P>(s: &[T], suffix: &[U], pred: P) -> bool
where
    P: FnMut(&T, &U) -> bool,
{
    suffix.len() <= s.len()
        && crate::comparison::equal_by(&s[s.len() - suffix.len()..], suffix, pred)
}

/// [`ends_with`] on the first `n` elements of `s` and `m` of `suffix`.
pub fn ends_with_n<T, U>(s: &[T], n: usize, suffix: &[U], m: usize) -> bool
where
    T: PartialEq<U>,
{
    ends_with_n_by(s, n, suffix, m, |x, y| x == y)
}

/// [`ends_with_n`] with a custom equivalence.
pub fn ends_with_n_by<T, U, P>(s: &[T], n: usize, suffix: &[U], m: usize, pred: P) -> bool
where
    P: FnMut(&T, &U) -> bool,
{
    ends_with_by(&s[..n.min(s.len())], &suffix[..m.min(suffix.len())], pred)
}

/// First occurrence of `needle` in `haystack`.
///
/// An empty needle matches at `0..0`.
pub fn search<T, U>(haystack: &[T], needle: &[U]) -> Option<Range<usize>>
where
    T: PartialEq<U>,
{
    search_by(haystack, needle, |x, y| x == y)
}

/// [`search`] with a custom equivalence.
pub fn search_by<T, U, P>(haystack: &[T], needle: &[U], mut pred: P) -> Option<Range<usize>>
where
    P: FnMut(&T, &U) -> bool,
{
    let m = needle.len();
    if m > haystack.len() {
        return None;
    }
    (0..=haystack.len() - m)
        .find(|&start| matches_at(haystack, start, needle, &mut pred))
        .map(|start| start..start + m)
}

/// First run of `count` consecutive elements equal to `value`.
///
/// `count == 0` matches at `0..0`.
pub fn search_n<T, V>(haystack: &[T], count: usize, value: &V) -> Option<Range<usize>>
where
    T: PartialEq<V>,
{
    search_n_by(haystack, count, value, |x, v| x == v)
}

/// [`search_n`] with a custom relation between element and value.
pub fn search_n_by<T, V, P>(
    haystack: &[T],
    count: usize,
    value: &V,
    mut pred: P,
) -> Option<Range<usize>>
where
    P: FnMut(&T, &V) -> bool,
{
    if count == 0 {
        return Some(0..0);
    }
    let mut run = 0;
    for (i, item) in haystack.iter().enumerate() {
        if pred(item, value) {
            run += 1;
            if run == count {
                return Some(i + 1 - count..i + 1);
            }
        } else {
            run = 0;
        }
    }
    None
}

/// Last occurrence of `needle` in `haystack`, found by searching backwards.
///
/// An empty needle matches at `len..len`.
pub fn find_end<T, U>(haystack: &[T], needle: &[U]) -> Option<Range<usize>>
where
    T: PartialEq<U>,
{
    find_end_by(haystack, needle, |x, y| x == y)
}

/// [`find_end`] with a custom equivalence.
pub fn find_end_by<T, U, P>(haystack: &[T], needle: &[U], mut pred: P) -> Option<Range<usize>>
where
    P: FnMut(&T, &U) -> bool,
{
    let m = needle.len();
    if m > haystack.len() {
        return None;
    }
    (0..=haystack.len() - m)
        .rev()
        .find(|&start| matches_at(haystack, start, needle, &mut pred))
        .map(|start| start..start + m)
}

/// Last run of `count` consecutive elements equal to `value`.
///
/// `count == 0` matches at `len..len`.
///
/// ```
/// use seqalg::non_modifying::find_end_n;
///
/// let v = [1, 2, 2, 3, 2, 2, 1];
/// assert_eq!(find_end_n(&v, 2, &2), Some(4..6));
/// assert_eq!(find_end_n(&v, 3, &2), None);
/// ```
pub fn find_end_n<T, V>(haystack: &[T], count: usize, value: &V) -> Option<Range<usize>>
where
    T: PartialEq<V>,
{
    find_end_n_by(haystack, count, value, |x, v| x == v)
}

/// [`find_end_n`] with a custom relation between element and value.
pub fn find_end_n_by<T, V, P>(
    haystack: &[T],
    count: usize,
    value: &V,
    mut pred: P,
) -> Option<Range<usize>>
where
    P: FnMut(&T, &V) -> bool,
{
    if count == 0 {
        return Some(haystack.len()..haystack.len());
    }
    let mut run = 0;
    for i in (0..haystack.len()).rev() {
        if pred(&haystack[i], value) {
            run += 1;
            if run == count {
                return Some(i..i + count);
            }
        } else {
            run = 0;
        }
    }
    None
}

fn matches_at<T, U, P>(haystack: &[T], start: usize, needle: &[U], pred: &mut P) -> bool
where
    P: FnMut(&T, &U) -> bool,
{
    haystack[start..start + needle.len()]
        .iter()
        .zip(needle)
        .all(|(x, y)| pred(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix() {
        let v = [1, 2, 3, 4];
        assert!(starts_with(&v, &[1, 2]));
        assert!(!starts_with(&v, &[1, 2, 3, 4, 5]));
        assert!(ends_with(&v, &[3, 4]));
        assert!(ends_with::<i32, i32>(&v, &[]));
        assert!(starts_with_n(&v, 2, &[1, 2, 9], 2));
        assert!(ends_with_n(&v, 3, &[2, 3], 2));
        assert!(!ends_with_n(&v, 3, &[3, 4], 2));
    }

    #[test]
    fn test_search_empty_needle() {
        let v = [5, 6, 7];
        assert_eq!(search::<i32, i32>(&v, &[]), Some(0..0));
        assert_eq!(find_end::<i32, i32>(&v, &[]), Some(3..3));
        assert_eq!(search_n(&v, 0, &9), Some(0..0));
        assert_eq!(find_end_n(&v, 0, &9), Some(3..3));
    }

    #[test]
    fn test_search_first_and_last() {
        let v = [1, 2, 1, 2, 1];
        assert_eq!(search(&v, &[2, 1]), Some(1..3));
        assert_eq!(find_end(&v, &[2, 1]), Some(3..5));
        assert_eq!(search(&v, &[3]), None);
        assert_eq!(find_end(&v, &[1, 2, 1, 2, 1, 2]), None);
    }

    #[test]
    fn test_search_n_runs() {
        let v = [2, 2, 1, 2, 2, 2];
        assert_eq!(search_n(&v, 2, &2), Some(0..2));
        assert_eq!(search_n(&v, 3, &2), Some(3..6));
        assert_eq!(find_end_n(&v, 2, &2), Some(4..6));
        assert_eq!(search_n(&v, 4, &2), None);
    }

    #[test]
    fn test_find_end_n_with_relation() {
        let v = [1, 2, 2, 3, 2, 2, 1];
        assert_eq!(find_end_n_by(&v, 2, &1, |x, y| x % 3 == y % 3), None);
        assert_eq!(find_end_n_by(&v, 2, &4, |x, y| x * x == *y), Some(4..6));
        assert_eq!(find_end_n_by(&v, 3, &1, |x, y| x % 3 != y % 3), Some(3..6));
    }
}
