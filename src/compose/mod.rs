//! Wrapping one river in another.
//!
//! This module provides the adapters: rivers that own an upstream river and
//! change what reaches the consumer. Each adapter exclusively owns its
//! upstream (and any captured closure); to share an upstream between chains,
//! build the adapter over `&mut river` instead (see
//! [`River::by_ref`](crate::River::by_ref)).

mod chain;
mod drop;
mod filter;
mod map;
mod split;
mod take;

pub use chain::{chain, Chain};
pub use drop::{drop, Drop};
pub use filter::{filter, Filter};
pub use map::{map, Map};
pub use split::{split, Segment, Split};
pub use take::{take, Take};
