//! Transformers that build new sequences out of existing ones.
//!
//! Every combinator here is lazy: constructing one pulls nothing from its
//! input, and a pull on the result pulls from the input only as far as
//! needed to produce one element. The available transformations:
//!
//! - [`map`]: apply a function to every element
//! - [`filter`]: keep the elements a predicate accepts
//! - [`filter_map`]: transform and select in a single pass
//! - [`concat`]: chain sequences end to end
//! - [`flatten`]: splice out one level of nesting
//! - [`combine`]: Cartesian product in odometer order
//! - [`copy`]: buffer a sequence for multi-pass traversal
//!
//! # Examples
//!
//! ## Composing a pipeline
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let doubled_evens = map(filter(range(1, 10), |value| value % 2 == 0), |value| {
//!     value * 2
//! });
//! assert_eq!(to_vec(doubled_evens), vec![4, 8, 12, 16, 20]);
//! ```
//!
//! ## Traversing twice
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let shared = copy(map(range(1, 3), |value| value * value));
//! let squares = shared.replay();
//! assert_eq!(to_vec(shared), vec![1, 4, 9]);
//! assert_eq!(to_vec(squares), vec![1, 4, 9]);
//! ```

mod combine;
mod concat;
mod filter;
mod filter_map;
mod flatten;
mod map;
mod replay;

pub use combine::combine;
pub use concat::{Concat, concat};
pub use filter::{Filter, filter};
pub use filter_map::{FilterMap, Skip, filter_map};
pub use flatten::{Flatten, flatten};
pub use map::{Map, map};
pub use replay::{Replay, copy};
