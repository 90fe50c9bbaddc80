//! Rivers over foreign iterators.

use crate::river::River;

/// A river wrapping an arbitrary iterator as a single-pass stream.
///
/// This is the boundary adapter for foreign sequence types: anything that is
/// `IntoIterator` can be driven. The source is consumed irrevocably, so the
/// river is neither resettable nor multi-pass; once it reports exhaustion it
/// stays exhausted.
pub struct FromIter<I: Iterator> {
    iter: std::iter::Fuse<I>,
}

/// Create a single-pass river from any iterable.
///
/// ```rust
/// use rivers::prelude::*;
///
/// let mut r = from_iter("1 2 3 4 5".split_whitespace().map(|w| w.parse::<i32>().unwrap()));
/// assert_eq!(r.sum(), 15);
/// assert_eq!(r.sum(), 0);
/// ```
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I: Iterator> River for FromIter<I> {
    type Ref = I::Item;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(I::Item) -> bool,
    {
        for elem in self.iter.by_ref() {
            if !consumer(elem) {
                return false;
            }
        }
        true
    }
}
