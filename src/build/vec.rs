//! Rivers over owned element lists.

use crate::river::{MultiPass, Resettable, River};

/// A river that owns a fixed list of values, cloning each one out to the
/// consumer. Resettable and multi-pass.
pub struct FromVec<T> {
    items: Vec<T>,
    pos: usize,
}

/// Create a river that takes ownership of a vector of values.
///
/// ```rust
/// use rivers::prelude::*;
///
/// assert_eq!(from_vec(vec![3, 4, 5]).product(), 60);
/// ```
pub fn from_vec<T: Clone>(items: Vec<T>) -> FromVec<T> {
    FromVec { items, pos: 0 }
}

/// Create a river from explicitly listed values.
///
/// ```rust
/// use rivers::prelude::*;
///
/// assert_eq!(from_values([1, 2, 3]).sum(), 6);
/// ```
pub fn from_values<T: Clone>(values: impl IntoIterator<Item = T>) -> FromVec<T> {
    from_vec(values.into_iter().collect())
}

impl<T: Clone> River for FromVec<T> {
    type Ref = T;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        while self.pos < self.items.len() {
            let elem = self.items[self.pos].clone();
            self.pos += 1;
            if !consumer(elem) {
                return false;
            }
        }
        true
    }
}

impl<T: Clone> Resettable for FromVec<T> {
    fn reset(&mut self) {
        self.pos = 0;
    }
}

impl<T: Clone> MultiPass for FromVec<T> {}
