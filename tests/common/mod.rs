//! Brute-force reference implementations the property tests compare against.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::ops::Range;

/// Every start index where `needle` occurs in `hay`.
pub fn occurrences(hay: &[i32], needle: &[i32]) -> Vec<usize> {
    if needle.len() > hay.len() {
        return Vec::new();
    }
    (0..=hay.len() - needle.len())
        .filter(|&start| hay[start..start + needle.len()] == *needle)
        .collect()
}

/// Every window of `count` consecutive copies of `value`.
pub fn runs(hay: &[i32], count: usize, value: i32) -> Vec<Range<usize>> {
    if count == 0 || count > hay.len() {
        return Vec::new();
    }
    (0..=hay.len() - count)
        .filter(|&start| hay[start..start + count].iter().all(|&x| x == value))
        .map(|start| start..start + count)
        .collect()
}

/// Multiplicity of each value.
pub fn counts(values: &[i32]) -> BTreeMap<i32, usize> {
    let mut map = BTreeMap::new();
    for &v in values {
        *map.entry(v).or_insert(0) += 1;
    }
    map
}

/// Expand a multiplicity map back into a sorted sequence.
pub fn expand(map: &BTreeMap<i32, usize>) -> Vec<i32> {
    map.iter()
        .flat_map(|(&value, &n)| std::iter::repeat(value).take(n))
        .collect()
}

/// Combine two multiplicity maps key by key with `f(m, n)`.
pub fn combine_counts(
    a: &[i32],
    b: &[i32],
    f: impl Fn(usize, usize) -> usize,
) -> Vec<i32> {
    let ca = counts(a);
    let cb = counts(b);
    let mut out = BTreeMap::new();
    for key in ca.keys().chain(cb.keys()) {
        let m = ca.get(key).copied().unwrap_or(0);
        let n = cb.get(key).copied().unwrap_or(0);
        out.insert(*key, f(m, n));
    }
    expand(&out)
}

/// Sorted copy of `values`.
pub fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}
