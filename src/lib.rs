//! # Generic Sequence Algorithms
//!
//! A flat catalogue of single-pass algorithms over slices and iterators,
//! parameterised by element type, comparison predicate and projection.
//!
//! ## Conventions
//!
//! 1. **Positions are indices**: queries over `&[T]` return `usize`,
//!    `Option<usize>` or `Range<usize>`; `None` means "not found"
//! 2. **In-place algorithms** take `&mut [T]` and return the new logical
//!    length (`remove`, `unique`) or the new position of the first element
//!    (`rotate`)
//! 3. **Copy-like algorithms** consume any `IntoIterator` and write into an
//!    [`OutputSink`], returning how many elements were written
//! 4. **Explicit counts**: every `_n` variant operates on the first `n`
//!    elements, saturating at the sequence length
//!
//! Predicates are plain closures; the [`functional`] module builds the
//! projected and negated forms.
//!
//! ## Usage Example
//!
//! ```
//! use seqalg::modifying::{rotate, unique};
//! use seqalg::non_modifying::find_end;
//!
//! let mut v = vec![1, 2, 3, 4, 5];
//! let first = rotate(&mut v, 2).unwrap();
//! assert_eq!(v, [3, 4, 5, 1, 2]);
//! assert_eq!(first, 3);
//!
//! let mut w = vec![1, 3, 3, 1, 1];
//! let len = unique(&mut w);
//! assert_eq!(&w[..len], &[1, 3, 1]);
//!
//! assert_eq!(find_end(&[1, 2, 1, 2], &[1, 2]), Some(2..4));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Building blocks shared by every algorithm family
pub mod functional; // Predicate and projection combinators
pub mod output;     // Output sinks for copy-like algorithms
pub mod sentinel;   // Iterator end markers and counted ranges

// Algorithm families
pub mod comparison;    // Equality and lexicographic ordering
pub mod minmax;        // Minimum, maximum and clamp
pub mod modifying;     // Copy, fill, remove, replace, reorder, random
pub mod non_modifying; // Scan, find and subsequence search
pub mod set;           // Sorted-range set algebra

// Re-exports for convenience
pub use minmax::MinMax;
pub use modifying::RotateStrategy;
pub use output::{Discard, OutputSink, SliceWriter};
pub use sentinel::{Sentinel, Unreachable};

use thiserror::Error;

/// Errors reported by algorithms that take positions or write to bounded sinks.
///
/// Pure queries never fail; only operations whose arguments can describe an
/// impossible position, or whose destination can run out of room, return one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// A bounded output sink was full.
    #[error("output exhausted after {capacity} elements")]
    OutputExhausted {
        /// Number of elements the sink could hold.
        capacity: usize,
    },

    /// A position argument lies past the end of the sequence.
    #[error("position {position} out of bounds for length {len}")]
    PositionOutOfBounds {
        /// Requested position.
        position: usize,
        /// Sequence length.
        len: usize,
    },

    /// A range argument is reversed or extends past the sequence.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Sequence length.
        len: usize,
    },

    /// A destination was shorter than the source it has to hold.
    #[error("destination holds {actual} elements, {expected} required")]
    LengthMismatch {
        /// Elements the operation needs room for.
        expected: usize,
        /// Elements the destination actually holds.
        actual: usize,
    },
}

/// Result alias for fallible algorithms.
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Check that `range` lies within a sequence of length `len`.
pub(crate) fn check_range(range: &std::ops::Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(AlgorithmError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

/// Check that `position` is a valid position (including one past the end).
pub(crate) fn check_position(position: usize, len: usize) -> Result<()> {
    if position > len {
        return Err(AlgorithmError::PositionOutOfBounds { position, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(&(0..0), 0).is_ok());
        assert!(check_range(&(1..3), 3).is_ok());
        assert_eq!(
            check_range(&(2..4), 3),
            Err(AlgorithmError::InvalidRange { start: 2, end: 4, len: 3 })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert!(check_range(&reversed, 3).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = AlgorithmError::PositionOutOfBounds { position: 7, len: 5 };
        assert_eq!(err.to_string(), "position 7 out of bounds for length 5");
        let err = AlgorithmError::OutputExhausted { capacity: 2 };
        assert_eq!(err.to_string(), "output exhausted after 2 elements");
    }
}
