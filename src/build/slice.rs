//! Rivers over borrowed slices.

use crate::river::{MultiPass, Resettable, River};

/// A river over a borrowed slice, yielding `&T` into the original storage.
///
/// The position persists across `drive` calls. The borrow checker keeps the
/// underlying collection alive for as long as the river (or anything built
/// on it) exists.
pub struct FromSlice<'a, T> {
    items: &'a [T],
    pos: usize,
}

/// Create a river over a borrowed slice.
///
/// ```rust
/// use rivers::prelude::*;
///
/// let v = vec![1, 2, 3];
/// let mut r = from_slice(&v);
/// assert_eq!(r.sum(), 6);
/// assert_eq!(r.sum(), 0);
/// r.reset();
/// assert_eq!(r.sum(), 6);
/// ```
pub fn from_slice<T>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice { items, pos: 0 }
}

impl<'a, T> River for FromSlice<'a, T> {
    type Ref = &'a T;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(&'a T) -> bool,
    {
        let items = self.items;
        while self.pos < items.len() {
            let elem = &items[self.pos];
            self.pos += 1;
            if !consumer(elem) {
                return false;
            }
        }
        true
    }
}

impl<T> Resettable for FromSlice<'_, T> {
    fn reset(&mut self) {
        self.pos = 0;
    }
}

impl<T> MultiPass for FromSlice<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_point_into_storage() {
        let v = vec![1, 2, 3];
        let mut r = from_slice(&v);
        let front = r.next().unwrap();
        assert!(std::ptr::eq(front, &v[0]));
    }

    #[test]
    fn test_exhaustion_and_reset() {
        let v = vec![1, 2, 3];
        let mut r = from_slice(&v);
        assert_eq!(r.sum(), 6);
        assert_eq!(r.sum(), 0);
        r.reset();
        assert_eq!(r.sum(), 6);
    }

    #[test]
    fn test_empty_slice() {
        let v: Vec<i32> = vec![];
        let mut r = from_slice(&v);
        assert_eq!(r.next(), None);
        assert!(r.drive(|_| false));
    }
}
