/// Reports whether two slices are equal: the same length and all elements
/// equal.
pub fn equal<T: PartialEq>(s1: &[T], s2: &[T]) -> bool {
    equal_by(s1, s2, |left, right| left == right)
}

/// Reports whether two slices are equal using a comparison function on each
/// pair of elements.
///
/// The slices may hold different element types. Lengths are compared first;
/// if they differ `f` is never called. Otherwise `f` is called in index
/// order and the comparison stops at the first pair for which it returns
/// `false`.
pub fn equal_by<A, B, F>(s1: &[A], s2: &[B], mut f: F) -> bool
where
    F: FnMut(&A, &B) -> bool,
{
    if s1.len() != s2.len() {
        return false;
    }
    s1.iter().zip(s2).all(|(a, b)| f(a, b))
}

/// Like [`equal_by`], but the comparison may fail. The first error is
/// returned and no further pairs are compared.
pub fn try_equal_by<A, B, E, F>(s1: &[A], s2: &[B], mut f: F) -> Result<bool, E>
where
    F: FnMut(&A, &B) -> Result<bool, E>,
{
    if s1.len() != s2.len() {
        return Ok(false);
    }
    for (a, b) in s1.iter().zip(s2) {
        if !f(a, b)? {
            return Ok(false);
        }
    }
    Ok(true)
}
