//! Transforming elements as they flow past.

use std::marker::PhantomData;

use crate::river::{MultiPass, Resettable, River};

/// Applies a function to every element reaching the consumer.
///
/// The reference type becomes the function's return type. The function runs
/// exactly once per element that reaches this stage; elements cut off by a
/// downstream `take`, or stopped-before by the consumer, are never mapped.
pub struct Map<R, F, O> {
    base: R,
    f: F,
    _output: PhantomData<O>,
}

/// Create a river that transforms each element of `base` with `f`.
///
/// ```rust
/// use rivers::prelude::*;
///
/// let mut squares = rivers::compose::map(seq(1, 5), |i| i * i);
/// assert_eq!(squares.sum(), 30);
/// ```
pub fn map<R, F, O>(base: R, f: F) -> Map<R, F, O>
where
    R: River,
    F: FnMut(R::Ref) -> O,
{
    Map {
        base,
        f,
        _output: PhantomData,
    }
}

impl<R, F, O> River for Map<R, F, O>
where
    R: River,
    F: FnMut(R::Ref) -> O,
{
    type Ref = O;

    fn drive<P>(&mut self, mut consumer: P) -> bool
    where
        P: FnMut(O) -> bool,
    {
        let f = &mut self.f;
        self.base.drive(|elem| consumer(f(elem)))
    }
}

impl<R, F, O> Resettable for Map<R, F, O>
where
    R: Resettable,
    F: FnMut(R::Ref) -> O,
{
    fn reset(&mut self) {
        self.base.reset();
    }
}

impl<R, F, O> MultiPass for Map<R, F, O>
where
    R: MultiPass,
    F: FnMut(R::Ref) -> O,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_slice, seq};

    #[test]
    fn test_map_transforms_each_element() {
        let mut squares = seq(1, 5).map(|i| i * i);
        assert_eq!(squares.next(), Some(1));
        assert_eq!(squares.next(), Some(4));
        assert_eq!(squares.next(), Some(9));
        assert_eq!(squares.next(), Some(16));
        assert_eq!(squares.next(), None);
    }

    #[test]
    fn test_map_reset_forwards_to_upstream() {
        let mut squares = seq(1, 5).map(|i| i * i);
        assert_eq!(squares.sum(), 30);
        squares.reset();
        assert_eq!(squares.product(), 576);
    }

    #[test]
    fn test_map_changes_reference_type() {
        let v = vec![1, 2, 3];
        let labels: Vec<String> = from_slice(&v).map(|i| format!("#{i}")).collect();
        assert_eq!(labels, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn test_map_runs_once_per_reached_element() {
        let mut calls = 0;
        seq(0, 100)
            .map(|i| {
                calls += 1;
                i
            })
            .take(3)
            .consume();
        assert_eq!(calls, 3);
    }
}
