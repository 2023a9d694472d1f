//! Read-only algorithms: visiting, counting, finding and subsequence search.
//!
//! Every operation takes a slice and reports positions as indices. The `_n`
//! variants consider only the first `n` elements, saturating at the slice
//! length.

mod find;
mod scan;
mod search;

pub use find::{
    adjacent_find, adjacent_find_by, adjacent_find_n, adjacent_find_n_by, find, find_by_key,
    find_first_of, find_first_of_by, find_first_of_n, find_first_of_n_by, find_if, find_if_n,
    find_if_not, find_if_not_n, find_n,
};
pub use scan::{
    all_of, all_of_n, any_of, any_of_n, count, count_by_key, count_if, count_if_n, count_n,
    for_each, for_each_mut, for_each_n, for_each_n_mut, mismatch, mismatch_by, mismatch_n,
    mismatch_n_by, none_of, none_of_n,
};
pub use search::{
    ends_with, ends_with_by, ends_with_n, ends_with_n_by, find_end, find_end_by, find_end_n,
    find_end_n_by, search, search_by, search_n, search_n_by, starts_with, starts_with_by,
    starts_with_n, starts_with_n_by,
};
