//! Mapping between stored records and boundary shapes.
//!
//! Building a new value from a source uses the standard `From`/`Into`
//! conversions. Overwriting an existing record in place goes through
//! [`MapOnto`].

/// Overwrites every mutable field of `target` with the values in `self`.
pub trait MapOnto<T> {
    fn map_onto(self, target: &mut T);
}

/// Boundary shapes that name the row they address.
pub trait Identified {
    fn id(&self) -> i32;
}

/// Convert every item of a collection.
pub fn map_all<S, T>(items: impl IntoIterator<Item = S>) -> Vec<T>
where
    T: From<S>,
{
    items.into_iter().map(T::from).collect()
}
