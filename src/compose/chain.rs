//! Running rivers back to back.

use crate::river::{MultiPass, Resettable, River};

/// Exhausts the first river, then drives the second.
///
/// Both rivers must share a reference type. Repeated drives rely on
/// idempotent exhaustion: a finished first river answers `true` immediately
/// and the drive moves on to the second. An early consumer stop in the first
/// river returns without touching the second. Longer chains nest:
/// `a.chain(b).chain(c)`.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Create a river producing all of `first`'s elements, then all of
/// `second`'s.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: River,
    B: River<Ref = A::Ref>,
{
    Chain { first, second }
}

impl<A, B> River for Chain<A, B>
where
    A: River,
    B: River<Ref = A::Ref>,
{
    type Ref = A::Ref;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(A::Ref) -> bool,
    {
        self.first.drive(&mut consumer) && self.second.drive(&mut consumer)
    }
}

impl<A, B> Resettable for Chain<A, B>
where
    A: Resettable,
    B: Resettable + River<Ref = A::Ref>,
{
    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

impl<A, B> MultiPass for Chain<A, B>
where
    A: MultiPass,
    B: MultiPass + River<Ref = A::Ref>,
{
}
