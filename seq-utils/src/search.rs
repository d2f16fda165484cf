/// Returns the index of the first occurrence of `v` in `s`, or `None` if it
/// is not present.
pub fn index<T: PartialEq>(s: &[T], v: &T) -> Option<usize> {
    index_by(s, |e| e == v)
}

/// Returns the index of the first element of `s` satisfying `f`, or `None`
/// if none do. Elements are tested left to right and the scan stops at the
/// first match.
pub fn index_by<T, F>(s: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (i, e) in s.iter().enumerate() {
        if f(e) {
            return Some(i);
        }
    }
    None
}

/// Like [`index_by`], but the predicate may fail. The scan stops at the
/// first error, which is returned.
pub fn try_index_by<T, E, F>(s: &[T], mut f: F) -> Result<Option<usize>, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    for (i, e) in s.iter().enumerate() {
        if f(e)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Reports whether `v` is present in `s`.
pub fn contains<T: PartialEq>(s: &[T], v: &T) -> bool {
    index(s, v).is_some()
}

/// Reports whether any element of `s` satisfies `f`.
pub fn contains_by<T, F>(s: &[T], f: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    index_by(s, f).is_some()
}

/// Like [`contains_by`], but the predicate may fail. The scan stops at the
/// first error, which is returned.
pub fn try_contains_by<T, E, F>(s: &[T], f: F) -> Result<bool, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    Ok(try_index_by(s, f)?.is_some())
}
