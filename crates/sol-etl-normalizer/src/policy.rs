//! Non-empty-collection policy
//!
//! Downstream consumers explode every nested list into child rows and expect
//! at least one child per parent. Every nested output list therefore goes
//! through one of the helpers below, which fall back to a single all-`None`
//! placeholder row when there is nothing to emit.

/// The canonical empty row of a sub-record type.
#[inline]
pub fn placeholder<R: Default>() -> R {
    R::default()
}

/// Maps the non-null entries of `entries` with `f`.
///
/// Null entries are dropped first; if nothing is left, the result is exactly
/// one placeholder row.
pub fn non_empty<'a, T, R, I, F>(entries: I, f: F) -> Vec<R>
where
    T: 'a,
    R: Default,
    I: IntoIterator<Item = &'a Option<T>>,
    F: FnMut(&'a T) -> R,
{
    let mut rows: Vec<R> = entries.into_iter().filter_map(Option::as_ref).map(f).collect();
    if rows.is_empty() {
        rows.push(placeholder());
    }
    rows
}

/// Single-valued variant of [`non_empty`] for optional nested values.
pub fn non_empty_optional<T, R, F>(value: Option<T>, f: F) -> Vec<R>
where
    R: Default,
    F: FnOnce(T) -> R,
{
    vec![value.map_or_else(placeholder, f)]
}
