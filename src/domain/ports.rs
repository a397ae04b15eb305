use crate::utils::error::Result;

/// Positional CRUD over an ordered sequence of one element type.
///
/// Valid positions are `0..len()`; `add` additionally accepts `len()` to
/// append. A call with an invalid position fails with
/// [`CatalogError::OutOfRange`](crate::utils::error::CatalogError::OutOfRange)
/// and leaves the container untouched.
pub trait Container<T> {
    /// Inserts `element` at `index`, shifting later elements one place right.
    fn add(&mut self, index: usize, element: T) -> Result<()>;

    /// Removes and returns the element at `index`, shifting later elements left.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Replaces the element at `index`.
    fn update(&mut self, index: usize, element: T) -> Result<()>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Copy of every element in positional order. Changing the returned
    /// vector does not affect the container.
    fn get_all(&self) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
