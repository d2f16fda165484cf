//! Generic helpers over slices: equality, search, first-occurrence
//! deduplication, map and filter.
//!
//! Every value-equality function delegates to its `_by` counterpart with
//! `==` as the comparison. Functions that may call back into fallible caller
//! code come in `try_` variants which stop at, and return, the first error.
mod compact;
mod equal;
mod search;
mod transform;

pub use compact::{compact, compact_by, compact_hashed, try_compact_by};
pub use equal::{equal, equal_by, try_equal_by};
pub use search::{contains, contains_by, index, index_by, try_contains_by, try_index_by};
pub use transform::{filter, map, try_filter, try_map};
