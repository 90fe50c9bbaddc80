//! Limiting a river to its first `n` elements.

use crate::river::{MultiPass, Resettable, River};

/// Passes through at most the first `n` elements of the upstream.
///
/// The counter persists across `drive` calls. Reaching the limit is reported
/// as completion (`drive` returns `true`) even though the upstream was cut
/// short, and every later drive is a no-op returning `true`. The limit is
/// indistinguishable from natural exhaustion afterwards.
pub struct Take<R> {
    base: R,
    n: usize,
    i: usize,
}

/// Create a river of at most the first `n` elements of `base`.
pub fn take<R: River>(base: R, n: usize) -> Take<R> {
    Take { base, n, i: 0 }
}

impl<R: River> River for Take<R> {
    type Ref = R::Ref;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(R::Ref) -> bool,
    {
        if self.i == self.n {
            return true;
        }
        let n = self.n;
        let i = &mut self.i;
        let result = self.base.drive(|elem| {
            *i += 1;
            consumer(elem) && *i != n
        });
        result || self.i == self.n
    }
}

impl<R: Resettable> Resettable for Take<R> {
    fn reset(&mut self) {
        self.base.reset();
        self.i = 0;
    }
}

impl<R: MultiPass> MultiPass for Take<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::seq;

    #[test]
    fn test_take_zero_is_empty() {
        let mut r = seq(1, 100).take(0);
        assert_eq!(r.next(), None);
    }

    #[test]
    fn test_take_prefix_sum() {
        assert_eq!(seq(1, 100).take(5).sum(), 15);
    }

    #[test]
    fn test_take_more_than_available_behaves_as_source() {
        assert_eq!(seq(1, 4).take(10).into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reaching_the_limit_reports_completion() {
        let mut r = seq(1, 6).take(5);
        let mut s = 0;
        let completed = r.drive(|i| {
            s += i;
            true
        });
        assert!(completed);
        assert_eq!(s, 15);
    }

    #[test]
    fn test_consumer_stop_on_the_limit_element() {
        let mut r = seq(1, 100).take(3);
        // the consumer stops on the 3rd element exactly; the limit was also
        // reached, so later drives behave as exhausted either way
        assert!(r.drive(|i| i < 3));
        assert_eq!(r.next(), None);
        assert!(r.drive(|_| false));
    }

    #[test]
    fn test_counter_persists_across_drives() {
        let mut r = seq(1, 100).take(5);
        assert_eq!(r.next(), Some(1));
        assert_eq!(r.next(), Some(2));
        assert_eq!(r.sum(), 12); // 3 + 4 + 5
        assert_eq!(r.next(), None);
    }

    #[test]
    fn test_reset_clears_the_counter() {
        let mut r = seq(1, 100).take(5);
        assert_eq!(r.sum(), 15);
        r.reset();
        assert_eq!(r.sum(), 15);
    }
}
