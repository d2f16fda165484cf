use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

/// Removes duplicate elements, keeping the first occurrence of each.
///
/// This is a global deduplication, not a collapse of adjacent runs:
/// `[2, 3, 4, 2, 1, 5, 1]` compacts to `[2, 3, 4, 1, 5]`.
pub fn compact<T: PartialEq + Clone>(s: &[T]) -> Vec<T> {
    compact_by(s, |candidate, kept| candidate == kept)
}

/// Like [`compact`], but uses a comparison function.
///
/// Each element of `s` is compared against the elements kept so far, in
/// order, and is kept only if `f` returns `false` for all of them. `f` is
/// always called as `f(candidate, kept)`; it should be symmetric and
/// transitive, otherwise the outcome depends on this argument order.
///
/// Runs in quadratic time. See [`compact_hashed`] for hashable elements.
pub fn compact_by<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut kept: Vec<T> = Vec::new();
    'outer: for candidate in s {
        for seen in &kept {
            if f(candidate, seen) {
                continue 'outer;
            }
        }
        kept.push(candidate.clone());
    }
    kept
}

/// Like [`compact_by`], but the comparison may fail. The first error is
/// returned and no further comparisons are made.
pub fn try_compact_by<T, E, F>(s: &[T], mut f: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut kept: Vec<T> = Vec::new();
    'outer: for candidate in s {
        for seen in &kept {
            if f(candidate, seen)? {
                continue 'outer;
            }
        }
        kept.push(candidate.clone());
    }
    Ok(kept)
}

/// Same result as [`compact`], in linear time, for elements that can be
/// hashed.
pub fn compact_hashed<T: Hash + Eq + Clone>(s: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(s.len());
    s.iter().filter(|e| seen.insert(*e)).cloned().collect()
}
