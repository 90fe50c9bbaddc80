//! Building rivers from scratch.
//!
//! This module provides the source adapters: entry points that turn a
//! generated range, a collection, an iterator, a string, or a single value
//! into a river. Everything else in the crate wraps one of these.

mod iter;
mod seq;
mod single;
mod slice;
mod str;
mod vec;

pub use iter::{from_iter, FromIter};
pub use seq::{seq, seq_to, Seq};
pub use single::{of, Single};
pub use slice::{from_slice, FromSlice};
pub use str::{from_str, FromStr};
pub use vec::{from_values, from_vec, FromVec};
