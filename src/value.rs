//! Decaying element references into owned values.
//!
//! A river hands its consumer an *element reference* ([`River::Ref`]), which
//! may be a borrowed `&T`, an owned value, or a tuple of references. The
//! accumulation terminals (`sum`, `product`, `collect`, `next_value`) need
//! the *owned* form of that type. [`Decay`] is the conversion: it strips a
//! reference down to a clone of its target, passes owned values through, and
//! recurses into tuples so that a reference type of `(&K, &V)` decays to
//! `(K, V)` rather than a tuple of borrows.
//!
//! Rust's coherence rules do not allow a single blanket impl covering both
//! `&T` and every owned `T`, so owned types are covered by explicit impls:
//! the primitives, `String` and `Vec<T>` are wired up here, and foreign
//! element types opt in with a one-line impl.
//!
//! ```rust
//! use rivers::Decay;
//!
//! let x = 7_i32;
//! assert_eq!((&x).decay(), 7);
//! assert_eq!((&x, &true).decay(), (7, true));
//! ```

use crate::river::River;

/// Conversion from an element reference type to its owned value type.
pub trait Decay {
    /// The owned form of this reference type.
    type Value;

    /// Produce the owned value, cloning out of borrows where needed.
    fn decay(self) -> Self::Value;
}

/// The value type of a river: its reference type, decayed.
pub type Value<R> = <<R as River>::Ref as Decay>::Value;

impl<T: Clone> Decay for &T {
    type Value = T;

    fn decay(self) -> T {
        self.clone()
    }
}

impl<T: Clone> Decay for &mut T {
    type Value = T;

    fn decay(self) -> T {
        self.clone()
    }
}

impl<A: Decay, B: Decay> Decay for (A, B) {
    type Value = (A::Value, B::Value);

    fn decay(self) -> Self::Value {
        (self.0.decay(), self.1.decay())
    }
}

impl<A: Decay, B: Decay, C: Decay> Decay for (A, B, C) {
    type Value = (A::Value, B::Value, C::Value);

    fn decay(self) -> Self::Value {
        (self.0.decay(), self.1.decay(), self.2.decay())
    }
}

impl<T> Decay for Vec<T> {
    type Value = Vec<T>;

    fn decay(self) -> Self::Value {
        self
    }
}

macro_rules! decay_owned {
    ($($t:ty),* $(,)?) => {$(
        impl Decay for $t {
            type Value = $t;

            fn decay(self) -> $t {
                self
            }
        }
    )*};
}

decay_owned!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

/// The multiplicative identity, used as the seed for `product`.
pub trait One {
    fn one() -> Self;
}

macro_rules! one_impl {
    ($($t:ty => $v:expr),* $(,)?) => {$(
        impl One for $t {
            fn one() -> $t {
                $v
            }
        }
    )*};
}

one_impl!(
    i8 => 1,
    i16 => 1,
    i32 => 1,
    i64 => 1,
    i128 => 1,
    isize => 1,
    u8 => 1,
    u16 => 1,
    u32 => 1,
    u64 => 1,
    u128 => 1,
    usize => 1,
    f32 => 1.0,
    f64 => 1.0,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_reference_clones_out() {
        let s = String::from("abc");
        let r = &s;
        assert_eq!(r.decay(), "abc");
        // the original is untouched
        assert_eq!(s, "abc");
    }

    #[test]
    fn test_decay_mut_reference() {
        let mut x = 5;
        let r = &mut x;
        assert_eq!(r.decay(), 5);
    }

    #[test]
    fn test_decay_owned_is_identity() {
        assert_eq!(3_i32.decay(), 3);
        assert_eq!('x'.decay(), 'x');
        assert_eq!(String::from("hi").decay(), "hi");
    }

    #[test]
    fn test_decay_pair_of_references() {
        let (a, b) = (1_i32, String::from("two"));
        let pair = (&a, &b);
        let owned: (i32, String) = pair.decay();
        assert_eq!(owned, (1, String::from("two")));
    }

    #[test]
    fn test_decay_nested_tuple() {
        let x = 1_u8;
        let y = 2_u8;
        let z = 3_u8;
        assert_eq!((&x, (&y, &z)).decay(), (1, (2, 3)));
    }

    #[test]
    fn test_one_identities() {
        assert_eq!(i32::one(), 1);
        assert_eq!(u64::one(), 1);
        assert_eq!(f64::one(), 1.0);
    }
}
