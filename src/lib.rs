//! # Rivers: Push-Based Sequence Processing
//!
//! Build lazy, composable pipelines over sequences where the *source* drives
//! the iteration, feeding elements into a consumer callback instead of
//! waiting to be pulled from.
//!
//! ## Core Traits
//!
//! - **[`River`]**: Push-based producers with one required method, `drive`
//! - **[`Resettable`]**: Rivers that can cheaply return to their start
//! - **[`MultiPass`]**: Rivers whose repeated drives see the same elements
//!
//! ## Key Features
//!
//! - **Composable**: Wrap rivers with `.map()`, `.filter()`, `.take()`,
//!   `.drop()`, `.chain()`, `.split()`
//! - **Lazy**: Nothing runs until a terminal operation drives the pipeline
//! - **Early exit for free**: A consumer returning `false` stops every
//!   upstream stage immediately
//!
//! ## Example
//!
//! ```
//! use rivers::prelude::*;
//!
//! // Sum of the first five even squares
//! let total = seq(0, 100)
//!     .map(|i| i * i)
//!     .filter(|sq| sq % 2 == 0)
//!     .take(5)
//!     .sum();
//! assert_eq!(total, 0 + 4 + 16 + 36 + 64);
//!
//! // Length of each whitespace-separated word, without allocating them
//! let lengths = from_str("A bunch of words")
//!     .split(' ')
//!     .map(|mut word| word.count())
//!     .into_vec();
//! assert_eq!(lengths, vec![1, 5, 2, 5]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Rivers:**
//! - [`seq(from, to)`](build::seq) - Half-open range of consecutive values
//! - [`from_slice(items)`](build::from_slice) - Borrowing view over a slice
//! - [`from_vec(items)`](build::from_vec) - Owning river over a `Vec`
//! - [`from_iter(iter)`](build::from_iter) - Bridge from any `Iterator`
//! - [`from_str(s)`](build::from_str) - Characters of a string slice
//! - [`of(value)`](build::of) - Single-element river
//!
//! **Terminal Operations:**
//! - [`fold`](River::fold), [`sum`](River::sum), [`count`](River::count),
//!   [`all`](River::all) / [`any`](River::any) / [`none`](River::none)
//! - [`next`](River::next) - One element at a time; rivers keep their
//!   position between drives
//! - [`collect`](River::collect) / [`into_vec`](River::into_vec) /
//!   [`into_str`](River::into_str) - Drain into a container

pub mod build;
pub mod compose;
pub mod prelude;
mod river;
mod value;

pub use river::{MultiPass, Resettable, River};
pub use value::{Decay, One, Value};

pub use build::{
    from_iter, from_slice, from_str, from_values, from_vec, of, seq, seq_to, FromIter, FromSlice,
    FromStr, FromVec, Seq, Single,
};
pub use compose::{Chain, Filter, Map, Segment, Split, Take};
