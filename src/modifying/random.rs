use rand::Rng;
use tracing::trace;

use crate::output::OutputSink;
use crate::Result;

/// Uniformly permute `s` (Fisher-Yates).
pub fn shuffle<T, R>(s: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    trace!(len = s.len(), "shuffling");
    for i in (1..s.len()).rev() {
        let j = rng.gen_range(0..=i);
        s.swap(i, j);
    }
}

/// Write `min(n, len)` elements of `src` chosen uniformly without
/// replacement, preserving their relative order (selection sampling).
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use seqalg::modifying::sample;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut picked = Vec::new();
/// sample(&[10, 20, 30, 40, 50], 3, &mut picked, &mut rng).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(picked.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn sample<T, O, R>(src: &[T], n: usize, out: &mut O, rng: &mut R) -> Result<usize>
where
    T: Clone,
    O: OutputSink<T> + ?Sized,
    R: Rng + ?Sized,
{
    let mut needed = n.min(src.len());
    let wanted = needed;
    trace!(len = src.len(), wanted, "selection sampling");
    for (i, item) in src.iter().enumerate() {
        if needed == 0 {
            break;
        }
        let remaining = src.len() - i;
        if rng.gen_range(0..remaining) < needed {
            out.put(item.clone())?;
            needed -= 1;
        }
    }
    Ok(wanted)
}

/// Choose `min(n, count)` items uniformly from a single-pass iterator
/// (reservoir sampling). The order of the result is unspecified.
pub fn sample_iter<I, R>(iter: I, n: usize, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    if n == 0 {
        return Vec::new();
    }
    let mut iter = iter.into_iter();
    let mut reservoir: Vec<I::Item> = iter.by_ref().take(n).collect();
    if reservoir.len() < n {
        return reservoir;
    }
    let mut seen = n;
    for item in iter {
        seen += 1;
        let j = rng.gen_range(0..seen);
        if j < n {
            reservoir[j] = item;
        }
    }
    trace!(seen, kept = n, "reservoir sampling");
    reservoir
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut v: Vec<u32> = (0..50).collect();
        shuffle(&mut v, &mut rng);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_sample_more_than_available() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();
        assert_eq!(sample(&[1, 2, 3], 10, &mut out, &mut rng), Ok(3));
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_sample_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut out: Vec<i32> = Vec::new();
        assert_eq!(sample(&[1, 2, 3], 0, &mut out, &mut rng), Ok(0));
        assert!(out.is_empty());
        assert!(sample_iter(0..10, 0, &mut rng).is_empty());

        let mut pulled = 0;
        let source = (0..10).inspect(|_| pulled += 1);
        assert!(sample_iter(source, 0, &mut rng).is_empty());
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_reservoir_subset() {
        let mut rng = StdRng::seed_from_u64(9);
        let picked = sample_iter(100..200, 5, &mut rng);
        assert_eq!(picked.len(), 5);
        assert!(picked.iter().all(|x| (100..200).contains(x)));
        let mut dedup = picked.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 5);

        assert_eq!(sample_iter([1, 2], 5, &mut rng), vec![1, 2]);
    }
}
