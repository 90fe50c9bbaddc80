//! Commonly used imports
//!
//! Use `use rivers::prelude::*;` for quick access to the most common types
//! and functions.

// Core traits
pub use crate::river::{MultiPass, Resettable, River};

// Value conversion
pub use crate::value::{Decay, One, Value};

// Sources
pub use crate::build::{from_iter, from_slice, from_str, from_values, from_vec, of, seq, seq_to};
