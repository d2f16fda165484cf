/// Creates a new vector with every element of `s` mapped through `f`.
///
/// The result has the same length as `s`; `f` is called exactly once per
/// element, in order.
pub fn map<T, U, F>(s: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    s.iter().map(f).collect()
}

/// Like [`map`], but `f` may fail. Mapping stops at the first error, which is
/// returned.
pub fn try_map<T, U, E, F>(s: &[T], mut f: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut result = Vec::with_capacity(s.len());
    for e in s {
        result.push(f(e)?);
    }
    Ok(result)
}

/// Creates a new vector with the elements of `s` that satisfy `f`, in their
/// original order.
pub fn filter<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    s.iter().filter(|&e| f(e)).cloned().collect()
}

/// Like [`filter`], but the predicate may fail. Filtering stops at the first
/// error, which is returned.
pub fn try_filter<T, E, F>(s: &[T], mut f: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for e in s {
        if f(e)? {
            result.push(e.clone());
        }
    }
    Ok(result)
}
