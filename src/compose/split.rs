//! Lazily partitioning a river into delimiter-separated segments.
//!
//! [`Split`] presents a river-of-rivers over an upstream river and a
//! delimiter value, without copying or buffering any segment. Each
//! [`Segment`] is the run of elements up to the next delimiter (or the end
//! of the source); the consumer of the outer river drives one segment at a
//! time, in order, since where segment two starts cannot be known until
//! segment one has been driven past its delimiter.
//!
//! The parent and the current segment share their cursor state through an
//! `Rc<RefCell<_>>` handle. Only one segment is live at a time: the parent
//! hands out a fresh one per iteration of its drive loop, and force-drains
//! it once the consumer is done with it. If the outer consumer stops early
//! mid-segment, the parent remembers the segment as partial and resumes
//! *that same segment's remainder* on the next drive, rather than skipping
//! ahead.
//!
//! A source ending exactly on a delimiter produces one trailing empty
//! segment, and consecutive delimiters produce empty segments in between.
//!
//! ```rust
//! use rivers::prelude::*;
//!
//! let mut lengths = from_str("A bunch of words")
//!     .split(' ')
//!     .map(|mut word| word.count());
//! assert_eq!(lengths.into_vec(), vec![1, 5, 2, 5]);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::river::{Resettable, River};

struct SplitCore<R, D> {
    base: R,
    delim: D,
    /// The outer river has seen the source end without a delimiter.
    exhausted: bool,
    /// The current segment has already hit its delimiter.
    found_delim: bool,
}

/// Lazily partitions an upstream river into [`Segment`]s on a delimiter.
pub struct Split<R, D> {
    core: Rc<RefCell<SplitCore<R, D>>>,
    /// The last drive stopped mid-segment; resume that segment first.
    partial: bool,
}

/// One delimiter-bounded run of elements, exposed as a river.
///
/// Segments are produced by [`Split`] and do not own any data; they share
/// the parent's cursor into the upstream source. A segment is meant to be
/// driven while the outer consumer holds it: the parent force-drains
/// whatever is left of it before producing the next one, and driving a
/// stale segment after that observes the shared cursor wherever it then is.
pub struct Segment<R, D> {
    core: Rc<RefCell<SplitCore<R, D>>>,
}

/// Create a river of the delimiter-separated segments of `base`.
pub fn split<R, D>(base: R, delim: D) -> Split<R, D>
where
    R: River,
    R::Ref: PartialEq<D>,
{
    Split {
        core: Rc::new(RefCell::new(SplitCore {
            base,
            delim,
            exhausted: false,
            found_delim: false,
        })),
        partial: false,
    }
}

impl<R, D> Split<R, D>
where
    R: River,
    R::Ref: PartialEq<D>,
{
    fn segment(&self) -> Segment<R, D> {
        Segment {
            core: Rc::clone(&self.core),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.core.borrow().exhausted
    }
}

impl<R, D> River for Split<R, D>
where
    R: River,
    R::Ref: PartialEq<D>,
{
    type Ref = Segment<R, D>;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(Segment<R, D>) -> bool,
    {
        if self.is_exhausted() {
            return true;
        }

        if self.partial {
            // resume the interrupted segment: drain its remainder without
            // exposing the elements
            self.segment().consume();
            if self.is_exhausted() {
                return true;
            }
            self.partial = false;
        }

        loop {
            self.core.borrow_mut().found_delim = false;
            if consumer(self.segment()) {
                // the consumer is done with the segment, drained or not;
                // skip whatever it left behind
                self.segment().consume();
                if self.is_exhausted() {
                    return true;
                }
            } else {
                let found_delim = self.core.borrow().found_delim;
                self.partial = !found_delim;
                return false;
            }
        }
    }
}

impl<R, D> Resettable for Split<R, D>
where
    R: Resettable,
    R::Ref: PartialEq<D>,
{
    fn reset(&mut self) {
        let mut core = self.core.borrow_mut();
        core.base.reset();
        core.exhausted = false;
        core.found_delim = false;
        self.partial = false;
    }
}

impl<R, D> River for Segment<R, D>
where
    R: River,
    R::Ref: PartialEq<D>,
{
    type Ref = R::Ref;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(R::Ref) -> bool,
    {
        let mut core = self.core.borrow_mut();
        if core.found_delim {
            return true;
        }

        let core = &mut *core;
        let delim = &core.delim;
        let found_delim = &mut core.found_delim;
        let result = core.base.drive(|elem| {
            if elem == *delim {
                *found_delim = true;
                false
            } else {
                consumer(elem)
            }
        });

        if result && !*found_delim {
            // the source ended without a trailing delimiter: this was the
            // last segment
            core.exhausted = true;
        }
        result
    }
}
