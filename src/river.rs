//! Core trait for push-based sequences.
//!
//! This module defines the [`River`] trait, the fundamental building block of
//! this library. A [`River`] is a producer of elements that *drives its own
//! iteration*: instead of exposing a cursor for the consumer to advance, it
//! takes a consumer callback and feeds elements into it until the source runs
//! dry or the consumer asks to stop.
//!
//! # The River Trait
//!
//! [`River`] has a single required operation, [`drive`](River::drive):
//! - the consumer receives one element reference ([`River::Ref`]) per call
//!   and returns `true` to keep going;
//! - `drive` returns `true` when the river ran to exhaustion, `false` when
//!   the consumer stopped it early.
//!
//! Every adapter and every terminal operation is built by composing `drive`
//! calls with wrapped consumers. A `false` from the innermost consumer
//! propagates out through every adapter layer; that propagation *is* the
//! cancellation mechanism.
//!
//! # Examples
//!
//! ```rust
//! use rivers::prelude::*;
//!
//! let mut evens = seq(0, 100).filter(|i| i % 2 == 0);
//! assert_eq!(evens.next(), Some(0));
//! assert_eq!(evens.next(), Some(2));
//! evens.reset();
//! assert_eq!(evens.sum(), 2450);
//! ```

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    compose::{chain, drop, filter, map, split, take, Chain, Drop, Filter, Map, Split, Take},
    value::{Decay, One, Value},
};

/// A push-based, composable producer of elements.
///
/// Driving is stateful: elements already fed to a consumer are consumed, and
/// a later `drive` call picks up where the previous one left off. A river
/// that has run to exhaustion keeps returning `true` without invoking the
/// consumer again, unless it is [`Resettable`] and reset.
///
/// ```rust
/// use rivers::prelude::*;
///
/// let mut ints = seq(1, 10);
/// assert_eq!(ints.next(), Some(1));
/// assert_eq!(ints.next(), Some(2));
/// assert_eq!(ints.sum(), 42); // 3 + 4 + ... + 9
/// assert_eq!(ints.next(), None);
/// ```
pub trait River {
    /// The type handed to a consumer per element: a borrow into storage, an
    /// owned value, or a synthetic wrapper such as a split segment.
    type Ref;

    /// Feed consecutive elements to `consumer`, in order, until the river is
    /// exhausted (returns `true`) or the consumer returns `false` (returns
    /// `false`).
    fn drive<F>(&mut self, consumer: F) -> bool
    where
        F: FnMut(Self::Ref) -> bool;

    ///////////////////////////////////////////////////////////////////
    // adapters
    ///////////////////////////////////////////////////////////////////

    /// Transform each element with `f`.
    ///
    /// `f` runs exactly once per element that actually reaches this stage;
    /// elements cut off downstream are never mapped.
    ///
    /// ```rust
    /// use rivers::prelude::*;
    ///
    /// let mut squares = seq(1, 5).map(|i| i * i);
    /// assert_eq!(squares.sum(), 30);
    /// ```
    fn map<O, F>(self, f: F) -> Map<Self, F, O>
    where
        Self: Sized,
        F: FnMut(Self::Ref) -> O,
    {
        map(self, f)
    }

    /// Keep only the elements satisfying `pred`.
    ///
    /// Rejected elements are consumed internally and never reach the
    /// downstream consumer.
    ///
    /// ```rust
    /// use rivers::prelude::*;
    ///
    /// let mut evens = seq(0, 100).filter(|i| i % 2 == 0);
    /// assert_eq!(evens.next(), Some(0));
    /// assert_eq!(evens.next(), Some(2));
    /// ```
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Ref) -> bool,
    {
        filter(self, pred)
    }

    /// Keep only elements that are themselves true, for rivers of booleans.
    fn filter_truthy(self) -> Filter<Self, fn(&Self::Ref) -> bool>
    where
        Self: Sized,
        Self::Ref: Clone + Into<bool>,
    {
        filter(self, |elem: &Self::Ref| elem.clone().into())
    }

    /// Pass through at most the first `n` elements.
    ///
    /// The limit persists across `drive` calls; once `n` elements have been
    /// forwarded the river reports exhaustion.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, n)
    }

    /// Discard the first `n` elements, then pass the rest through.
    ///
    /// The count persists across `drive` calls: driving twice does not drop
    /// another `n` elements.
    fn drop(self, n: usize) -> Drop<Self>
    where
        Self: Sized,
    {
        drop(self, n)
    }

    /// Exhaust this river, then continue with `other`.
    ///
    /// Both rivers must produce the same reference type. An early consumer
    /// stop during `self` never drives `other`.
    ///
    /// ```rust
    /// use rivers::prelude::*;
    ///
    /// let mut r = seq(1, 4).chain(seq(4, 6));
    /// assert_eq!(r.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    fn chain<R2>(self, other: R2) -> Chain<Self, R2>
    where
        Self: Sized,
        R2: River<Ref = Self::Ref>,
    {
        chain(self, other)
    }

    /// Lazily partition this river into segments separated by `delim`.
    ///
    /// Produces a river of [`Segment`](crate::compose::Segment)s without
    /// buffering any of them; see [`compose::split`](crate::compose) for the
    /// segment contract.
    ///
    /// ```rust
    /// use rivers::prelude::*;
    ///
    /// let mut words = from_str("A bunch of words").split(' ');
    /// assert_eq!(words.count(), 4);
    /// ```
    fn split<D>(self, delim: D) -> Split<Self, D>
    where
        Self: Sized,
        Self::Ref: PartialEq<D>,
    {
        split(self, delim)
    }

    /// Borrow this river as a river.
    ///
    /// Adapters built over the borrow advance the original: state consumed
    /// through one chain is visible to the owner afterwards. The borrow
    /// checker guarantees the original outlives every such chain.
    ///
    /// ```rust
    /// use rivers::prelude::*;
    ///
    /// let mut ints = seq(1, 100);
    /// assert_eq!(ints.by_ref().take(5).sum(), 15);
    /// assert_eq!(ints.next(), Some(6));
    /// ```
    fn by_ref(&mut self) -> &mut Self {
        self
    }

    ///////////////////////////////////////////////////////////////////
    // terminal operations
    ///////////////////////////////////////////////////////////////////

    /// Left-fold every remaining element into `init`.
    fn fold<Z, F>(&mut self, init: Z, mut op: F) -> Z
    where
        F: FnMut(Z, Self::Ref) -> Z,
    {
        let mut acc = Some(init);
        self.drive(|elem| {
            let current = acc.take().expect("fold accumulator is always present");
            acc = Some(op(current, elem));
            true
        });
        acc.expect("fold accumulator is always present")
    }

    /// Run `f` on every remaining element.
    fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(Self::Ref),
    {
        self.drive(|elem| {
            f(elem);
            true
        });
    }

    /// Sum of the remaining elements, starting from the value type's default.
    fn sum(&mut self) -> Value<Self>
    where
        Self::Ref: Decay,
        Value<Self>: Default + std::ops::Add<Output = Value<Self>>,
    {
        self.fold(Value::<Self>::default(), |acc, elem| acc + elem.decay())
    }

    /// Product of the remaining elements, starting from one.
    fn product(&mut self) -> Value<Self>
    where
        Self::Ref: Decay,
        Value<Self>: One + std::ops::Mul<Output = Value<Self>>,
    {
        self.fold(Value::<Self>::one(), |acc, elem| acc * elem.decay())
    }

    /// Number of remaining elements.
    fn count(&mut self) -> usize {
        self.fold(0, |n, _| n + 1)
    }

    /// Whether every remaining element satisfies `pred`.
    ///
    /// Stops driving at the first failure.
    fn all<P>(&mut self, pred: P) -> bool
    where
        P: FnMut(Self::Ref) -> bool,
    {
        self.drive(pred)
    }

    /// Whether any remaining element satisfies `pred`.
    ///
    /// Stops driving at the first success.
    fn any<P>(&mut self, mut pred: P) -> bool
    where
        P: FnMut(Self::Ref) -> bool,
    {
        !self.all(move |elem| !pred(elem))
    }

    /// Whether no remaining element satisfies `pred`.
    fn none<P>(&mut self, pred: P) -> bool
    where
        P: FnMut(Self::Ref) -> bool,
    {
        !self.any(pred)
    }

    /// `all` for rivers whose elements are themselves booleans.
    fn all_truthy(&mut self) -> bool
    where
        Self::Ref: Into<bool>,
    {
        self.all(|elem| elem.into())
    }

    /// `any` for rivers whose elements are themselves booleans.
    fn any_truthy(&mut self) -> bool
    where
        Self::Ref: Into<bool>,
    {
        self.any(|elem| elem.into())
    }

    /// `none` for rivers whose elements are themselves booleans.
    fn none_truthy(&mut self) -> bool
    where
        Self::Ref: Into<bool>,
    {
        self.none(|elem| elem.into())
    }

    /// The next element reference, or `None` if the river is exhausted.
    fn next(&mut self) -> Option<Self::Ref> {
        let mut first = None;
        self.drive(|elem| {
            first = Some(elem);
            false
        });
        first
    }

    /// The next element as an owned value, or `None` if exhausted.
    fn next_value(&mut self) -> Option<Value<Self>>
    where
        Self::Ref: Decay,
    {
        self.next().map(Decay::decay)
    }

    /// Drain the river into a freshly constructed container.
    ///
    /// ```rust
    /// use rivers::prelude::*;
    ///
    /// let digits: String = from_str("0123456789").take(3).collect();
    /// assert_eq!(digits, "012");
    /// ```
    fn collect<C>(&mut self) -> C
    where
        Self::Ref: Decay,
        C: Default + Extend<Value<Self>>,
    {
        let mut out = C::default();
        self.for_each(|elem| out.extend(std::iter::once(elem.decay())));
        out
    }

    /// Drain the river into a `Vec` of owned values.
    fn into_vec(&mut self) -> Vec<Value<Self>>
    where
        Self::Ref: Decay,
    {
        self.collect()
    }

    /// Drain a river of characters into a `String`.
    fn into_str(&mut self) -> String
    where
        Self::Ref: Decay<Value = char>,
    {
        self.collect()
    }

    /// Drive to exhaustion, discarding every element.
    fn consume(&mut self) {
        self.drive(|_| true);
    }
}

/// Capability: cheaply return a river to its initial drivable state.
///
/// `reset` is assumed to be O(1) or O(state-size). A source that would need
/// to re-do expensive work to restore its start position should not declare
/// itself resettable; callers needing repeated traversal over such a source
/// cache its elements instead.
pub trait Resettable: River {
    fn reset(&mut self);
}

/// Capability: repeated drives (without intervening mutation) observe the
/// same elements.
///
/// Asserted only by sources wrapping stable collections and propagated by
/// adapters whose upstreams all carry it. One-shot streams never do.
pub trait MultiPass: River {}

///////////////////////////////////////////////////////////////////
// forwarding impls
///////////////////////////////////////////////////////////////////

impl<R: River> River for &mut R {
    type Ref = R::Ref;

    fn drive<F>(&mut self, consumer: F) -> bool
    where
        F: FnMut(Self::Ref) -> bool,
    {
        (**self).drive(consumer)
    }
}

impl<R: Resettable> Resettable for &mut R {
    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<R: MultiPass> MultiPass for &mut R {}

/// `None` behaves as an exhausted river.
impl<R: River> River for Option<R> {
    type Ref = R::Ref;

    fn drive<F>(&mut self, consumer: F) -> bool
    where
        F: FnMut(Self::Ref) -> bool,
    {
        match self {
            Some(river) => river.drive(consumer),
            None => true,
        }
    }
}

impl<R: Resettable> Resettable for Option<R> {
    fn reset(&mut self) {
        if let Some(river) = self {
            river.reset();
        }
    }
}

/// Shared single-threaded handle. Access must be strictly sequenced: driving
/// a shared river from inside its own consumer panics on the nested borrow.
impl<R: River> River for Rc<RefCell<R>> {
    type Ref = R::Ref;

    fn drive<F>(&mut self, consumer: F) -> bool
    where
        F: FnMut(Self::Ref) -> bool,
    {
        self.as_ref().borrow_mut().drive(consumer)
    }
}

impl<R: Resettable> Resettable for Rc<RefCell<R>> {
    fn reset(&mut self) {
        self.as_ref().borrow_mut().reset()
    }
}

impl<R: MultiPass> MultiPass for Rc<RefCell<R>> {}

/// Conditional pipeline branches: either side drives, as long as both sides
/// agree on the reference type.
impl<L, R> River for Either<L, R>
where
    L: River,
    R: River<Ref = L::Ref>,
{
    type Ref = L::Ref;

    fn drive<F>(&mut self, consumer: F) -> bool
    where
        F: FnMut(Self::Ref) -> bool,
    {
        match self {
            Either::Left(left) => left.drive(consumer),
            Either::Right(right) => right.drive(consumer),
        }
    }
}

impl<L, R> Resettable for Either<L, R>
where
    L: Resettable,
    R: Resettable + River<Ref = L::Ref>,
{
    fn reset(&mut self) {
        match self {
            Either::Left(left) => left.reset(),
            Either::Right(right) => right.reset(),
        }
    }
}

impl<L, R> MultiPass for Either<L, R>
where
    L: MultiPass,
    R: MultiPass + River<Ref = L::Ref>,
{
}
