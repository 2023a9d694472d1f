//! Mutating algorithms.
//!
//! In-place operations take `&mut [T]`. Operations that produce a new
//! sequence consume any `IntoIterator` and write into an
//! [`OutputSink`](crate::OutputSink), returning the number of elements
//! written or the first sink error.
//!
//! Compacting operations (`remove*`, `unique*`) never shrink the slice:
//! they return the new logical length and park discarded elements after it.

mod copy;
mod fill;
mod random;
mod remove;
mod reorder;
mod replace;

pub use copy::{
    copy, copy_backward, copy_backward_n, copy_backward_within, copy_if, copy_if_n, copy_n,
    move_backward, move_backward_n, move_backward_within, move_into, move_n, swap_ranges,
};
pub use fill::{fill, fill_n, generate, generate_n, transform, transform2, transform2_n, transform_n};
pub use random::{sample, sample_iter, shuffle};
pub use remove::{
    remove, remove_by_key, remove_copy, remove_copy_if, remove_copy_if_n, remove_copy_n,
    remove_if, remove_if_n, remove_n, unique, unique_by, unique_copy, unique_copy_by,
};
pub use reorder::{
    reverse, reverse_copy, reverse_copy_n, reverse_n, rotate, rotate_copy, rotate_with,
    shift_left, shift_right, RotateStrategy, UnknownStrategy,
};
pub use replace::{
    replace, replace_by_key, replace_copy, replace_copy_if, replace_copy_if_n, replace_copy_n,
    replace_if, replace_if_n, replace_n,
};
