//! # pullseq
//!
//! Lazy, composable sequences built on an explicit pull protocol.
//!
//! ## Overview
//!
//! A [`Sequence`](sequence::Sequence) produces elements one pull at a time
//! and only when asked. Pipelines over sequences do no work at construction
//! time, which makes transformations of infinite sequences cheap to describe
//! and safe to consume through bounded consumers. The library provides:
//!
//! - **Sources**: [`range`](source::range), [`from_vec`](source::from_vec),
//!   [`from_fn`](source::from_fn), [`empty`](source::empty)
//! - **Combinators**: [`map`](combinator::map), [`filter`](combinator::filter),
//!   [`filter_map`](combinator::filter_map), [`concat`](combinator::concat),
//!   [`flatten`](combinator::flatten), [`combine`](combinator::combine),
//!   [`copy`](combinator::copy)
//! - **Consumers**: [`for_each`](consumer::for_each),
//!   [`to_vec`](consumer::to_vec), [`take`](consumer::take)
//! - **Iterator bridges**: cross into and out of `std::iter` in either
//!   direction ([`iter`])
//!
//! Sequences are single-pass and pull-driven. A panic raised by a
//! user-supplied closure surfaces at the pull that invoked it; the
//! interrupted sequence is safe to drop but its remaining elements are
//! unspecified.
//!
//! ## Example
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let squares_of_multiples = map(
//!     filter(range(1, 100), |value| value % 3 == 0),
//!     |value| value * value,
//! );
//! assert_eq!(take(squares_of_multiples, 4), vec![9, 36, 81, 144]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence trait, every source, combinator, consumer, and
/// the iterator bridges.
///
/// # Usage
///
/// ```rust
/// use pullseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::consumer::*;
    pub use crate::iter::*;
    pub use crate::sequence::*;
    pub use crate::source::*;
}

pub mod combinator;
pub mod consumer;
pub mod iter;
pub mod sequence;
pub mod source;
