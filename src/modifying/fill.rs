use crate::output::{drain_into, OutputSink};
use crate::Result;

/// Assign `value` to every element.
pub fn fill<T: Clone>(s: &mut [T], value: &T) {
    s.fill(value.clone());
}

/// Assign `value` to the first `n` elements, returning the index past the last one.
pub fn fill_n<T: Clone>(s: &mut [T], n: usize, value: &T) -> usize {
    let n = n.min(s.len());
    fill(&mut s[..n], value);
    n
}

/// Assign successive results of `gen` to every element.
pub fn generate<T, G>(s: &mut [T], gen: G)
where
    G: FnMut() -> T,
{
    s.fill_with(gen);
}

/// [`generate`] for the first `n` elements, returning the index past the last one.
pub fn generate_n<T, G>(s: &mut [T], n: usize, gen: G) -> usize
where
    G: FnMut() -> T,
{
    let n = n.min(s.len());
    generate(&mut s[..n], gen);
    n
}

/// Write `f(x)` for every item of `src`.
pub fn transform<T, U, I, O, F>(src: I, f: F, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<U> + ?Sized,
    F: FnMut(T) -> U,
{
    drain_into(src.into_iter().map(f), out)
}

/// [`transform`] over the first `n` items.
pub fn transform_n<T, U, I, O, F>(src: I, n: usize, f: F, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<U> + ?Sized,
    F: FnMut(T) -> U,
{
    drain_into(src.into_iter().take(n).map(f), out)
}

/// Write `f(a, b)` for paired items, stopping at the shorter input.
pub fn transform2<A, B, U, IA, IB, O, F>(a: IA, b: IB, mut f: F, out: &mut O) -> Result<usize>
where
    IA: IntoIterator<Item = A>,
    IB: IntoIterator<Item = B>,
    O: OutputSink<U> + ?Sized,
    F: FnMut(A, B) -> U,
{
    drain_into(a.into_iter().zip(b).map(|(x, y)| f(x, y)), out)
}

/// [`transform2`] over the first `n` pairs.
pub fn transform2_n<A, B, U, IA, IB, O, F>(
    a: IA,
    b: IB,
    n: usize,
    mut f: F,
    out: &mut O,
) -> Result<usize>
where
    IA: IntoIterator<Item = A>,
    IB: IntoIterator<Item = B>,
    O: OutputSink<U> + ?Sized,
    F: FnMut(A, B) -> U,
{
    drain_into(a.into_iter().zip(b).take(n).map(|(x, y)| f(x, y)), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SliceWriter;

    #[test]
    fn test_fill_and_generate() {
        let mut v = [0; 5];
        assert_eq!(fill_n(&mut v, 2, &7), 2);
        assert_eq!(v, [7, 7, 0, 0, 0]);

        let mut next = 0;
        assert_eq!(
            generate_n(&mut v, 10, || {
                next += 1;
                next
            }),
            5
        );
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_transform_in_place_via_writer() {
        let src = [1, 2, 3];
        let mut dst = [0; 3];
        transform(src, |x| x * x, &mut SliceWriter::new(&mut dst)).expect("fits");
        assert_eq!(dst, [1, 4, 9]);
    }

    #[test]
    fn test_transform2_stops_at_shorter() {
        let mut out = Vec::new();
        let n = transform2([1, 2, 3], [10, 20], |a, b| a + b, &mut out).expect("vec grows");
        assert_eq!(n, 2);
        assert_eq!(out, vec![11, 22]);

        let mut labels = Vec::new();
        transform2_n(["a", "b", "c"], 1.., 2, |s, i| format!("{s}{i}"), &mut labels)
            .expect("vec grows");
        assert_eq!(labels, ["a1", "b2"]);
    }

    #[test]
    fn test_transform_n_limits_input() {
        let mut out = Vec::new();
        assert_eq!(transform_n(1.., 3, |x: u32| x * 2, &mut out), Ok(3));
        assert_eq!(out, vec![2, 4, 6]);
    }
}
