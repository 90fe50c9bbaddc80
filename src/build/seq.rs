//! Generated ranges of incrementable values.
//!
//! `seq(3, 5)` produces the elements `[3, 4]`; `seq_to(5)` produces
//! `[0, 1, 2, 3, 4]`. Generation is lazy: memory is O(1) regardless of the
//! range size, and the river is always resettable and multi-pass.

use crate::{
    river::{MultiPass, Resettable, River},
    value::One,
};

/// A river of successive values in `[from, to)`.
///
/// The cursor advances across `drive` calls, so partially driving a `Seq`
/// and driving it again continues rather than restarting. The cursor is
/// advanced *before* the consumer runs, so each element is consumed exactly
/// once even if the consumer unwinds.
pub struct Seq<I> {
    from: I,
    to: I,
    cur: I,
}

/// Create a river of the values in `[from, to)`.
///
/// ```rust
/// use rivers::prelude::*;
///
/// assert_eq!(seq(1, 10).sum(), 45);
/// ```
pub fn seq<I: Clone>(from: I, to: I) -> Seq<I> {
    Seq {
        cur: from.clone(),
        from,
        to,
    }
}

/// Create a river of the values in `[I::default(), to)`.
///
/// ```rust
/// use rivers::prelude::*;
///
/// assert_eq!(seq_to(5).into_vec(), vec![0, 1, 2, 3, 4]);
/// ```
pub fn seq_to<I: Clone + Default>(to: I) -> Seq<I> {
    seq(I::default(), to)
}

impl<I> River for Seq<I>
where
    I: Clone + PartialEq + One + std::ops::Add<Output = I>,
{
    type Ref = I;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(I) -> bool,
    {
        while self.cur != self.to {
            let value = self.cur.clone();
            self.cur = value.clone() + I::one();
            if !consumer(value) {
                return false;
            }
        }
        true
    }
}

impl<I> Resettable for Seq<I>
where
    I: Clone + PartialEq + One + std::ops::Add<Output = I>,
{
    fn reset(&mut self) {
        self.cur = self.from.clone();
    }
}

impl<I> MultiPass for Seq<I> where I: Clone + PartialEq + One + std::ops::Add<Output = I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_tracks_position_across_drives() {
        let mut ints = seq(1, 10);
        assert_eq!(ints.next(), Some(1));
        assert_eq!(ints.next(), Some(2));
        assert_eq!(ints.sum(), 42);
        assert_eq!(ints.next(), None);
    }

    #[test]
    fn test_seq_reset_restores_start() {
        let mut ints = seq(1, 10);
        ints.consume();
        ints.reset();
        assert_eq!(ints.next(), Some(1));
    }

    #[test]
    fn test_seq_to_starts_at_default() {
        assert_eq!(seq_to(5_u64).into_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_seq_is_exhausted() {
        let mut r = seq(3, 3);
        let mut invoked = false;
        assert!(r.drive(|_| {
            invoked = true;
            true
        }));
        assert!(!invoked);
    }

    #[test]
    fn test_seq_early_stop_reports_false() {
        let mut r = seq(0, 10);
        assert!(!r.drive(|i| i < 4));
        // elements up to the stop are consumed
        assert_eq!(r.next(), Some(5));
    }
}
