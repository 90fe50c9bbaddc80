//! Discarding the first `n` elements of a river.

use crate::river::{MultiPass, Resettable, River};

/// Consumes and discards the first `n` upstream elements, then passes the
/// rest through.
///
/// The count persists across `drive` calls: once the first `n` elements have
/// been dropped, later drives forward everything.
pub struct Drop<R> {
    base: R,
    n: usize,
    i: usize,
}

/// Create a river of all but the first `n` elements of `base`.
pub fn drop<R: River>(base: R, n: usize) -> Drop<R> {
    Drop { base, n, i: 0 }
}

impl<R: River> River for Drop<R> {
    type Ref = R::Ref;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(R::Ref) -> bool,
    {
        let n = self.n;
        let i = &mut self.i;
        self.base.drive(|elem| {
            if *i < n {
                *i += 1;
                true
            } else {
                consumer(elem)
            }
        })
    }
}

impl<R: Resettable> Resettable for Drop<R> {
    fn reset(&mut self) {
        self.base.reset();
        self.i = 0;
    }
}

impl<R: MultiPass> MultiPass for Drop<R> {}
