//! Dropping elements that fail a predicate.

use crate::river::{MultiPass, Resettable, River};

/// Passes through only the elements satisfying a predicate.
///
/// A rejected element is consumed internally: the wrapper keeps the upstream
/// going, and only a kept element's consumer result decides whether the
/// drive continues.
pub struct Filter<R, P> {
    base: R,
    pred: P,
}

/// Create a river keeping only the elements of `base` that satisfy `pred`.
pub fn filter<R, P>(base: R, pred: P) -> Filter<R, P>
where
    R: River,
    P: FnMut(&R::Ref) -> bool,
{
    Filter { base, pred }
}

impl<R, P> River for Filter<R, P>
where
    R: River,
    P: FnMut(&R::Ref) -> bool,
{
    type Ref = R::Ref;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(R::Ref) -> bool,
    {
        let pred = &mut self.pred;
        self.base.drive(|elem| {
            if pred(&elem) {
                consumer(elem)
            } else {
                // rejected: keep the upstream going
                true
            }
        })
    }
}

impl<R, P> Resettable for Filter<R, P>
where
    R: Resettable,
    P: FnMut(&R::Ref) -> bool,
{
    fn reset(&mut self) {
        self.base.reset();
    }
}

impl<R, P> MultiPass for Filter<R, P>
where
    R: MultiPass,
    P: FnMut(&R::Ref) -> bool,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_vec, seq};

    #[test]
    fn test_filter_keeps_matching_elements() {
        let mut evens = seq(0, 100).filter(|i| i % 2 == 0);
        assert_eq!(evens.next(), Some(0));
        assert_eq!(evens.next(), Some(2));
        assert_eq!(evens.next(), Some(4));
        evens.reset();
        assert_eq!(evens.sum(), 2450);
    }

    #[test]
    fn test_filter_then_map_never_maps_rejected() {
        let mut mapped = Vec::new();
        let kept: Vec<i32> = seq(0, 10)
            .filter(|i| i % 3 == 0)
            .map(|i| {
                mapped.push(i);
                i * 10
            })
            .collect();
        assert_eq!(kept, vec![0, 30, 60, 90]);
        assert_eq!(mapped, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_rejected_elements_do_not_stop_the_drive() {
        // the consumer returns false only for kept elements; a rejection in
        // between must not be interpreted as a stop
        let mut r = seq(0, 10).filter(|i| *i >= 8);
        assert_eq!(r.next(), Some(8));
        assert_eq!(r.next(), Some(9));
        assert_eq!(r.next(), None);
    }

    #[test]
    fn test_filter_truthy_uses_element_as_predicate() {
        let mut r = from_vec(vec![true, false, true, false]).filter_truthy();
        assert_eq!(r.count(), 2);
    }
}
