//! Rivers over the characters of a borrowed string.

use crate::river::{MultiPass, Resettable, River};

/// A river over the characters of a borrowed `str`.
///
/// Resettable and multi-pass: `reset` re-obtains the character cursor from
/// the start of the string.
pub struct FromStr<'a> {
    src: &'a str,
    chars: std::str::Chars<'a>,
}

/// Create a river over a string's characters.
///
/// ```rust
/// use rivers::prelude::*;
///
/// assert_eq!(from_str("A bunch of words").split(' ').count(), 4);
/// ```
pub fn from_str(src: &str) -> FromStr<'_> {
    FromStr {
        src,
        chars: src.chars(),
    }
}

impl River for FromStr<'_> {
    type Ref = char;

    fn drive<F>(&mut self, mut consumer: F) -> bool
    where
        F: FnMut(char) -> bool,
    {
        for c in self.chars.by_ref() {
            if !consumer(c) {
                return false;
            }
        }
        true
    }
}

impl Resettable for FromStr<'_> {
    fn reset(&mut self) {
        self.chars = self.src.chars();
    }
}

impl MultiPass for FromStr<'_> {}
