//! Rivers of exactly one value.

use crate::river::{MultiPass, Resettable, River};

/// A river producing exactly one value, with an explicit consumed flag.
///
/// Once the value has been handed out, subsequent drives report exhaustion
/// without invoking the consumer; `reset` clears the flag.
pub struct Single<T> {
    value: T,
    consumed: bool,
}

/// Create a river of exactly one value.
///
/// ```rust
/// use rivers::prelude::*;
///
/// let mut one = of(1);
/// assert_eq!(one.next(), Some(1));
/// assert_eq!(one.next(), None);
/// one.reset();
/// assert_eq!(one.next(), Some(1));
/// ```
pub fn of<T: Clone>(value: T) -> Single<T> {
    Single {
        value,
        consumed: false,
    }
}

impl<T: Clone> River for Single<T> {
    type Ref = T;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        if self.consumed {
            return true;
        }
        self.consumed = true;
        consumer(self.value.clone())
    }
}

impl<T: Clone> Resettable for Single<T> {
    fn reset(&mut self) {
        self.consumed = false;
    }
}

impl<T: Clone> MultiPass for Single<T> {}
