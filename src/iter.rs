//! Bridges between sequences and `std::iter`.
//!
//! The two abstractions share a pull model, so crossing over is a plain
//! delegation in either direction. [`SequenceIterator`] makes a sequence
//! usable with `for` loops and the iterator adapters; [`from_iterator`]
//! pulls any `IntoIterator` through the sequence combinators.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let squares: Vec<i64> = range(1, 3)
//!     .into_iterator()
//!     .map(|value| value * value)
//!     .collect();
//! assert_eq!(squares, vec![1, 4, 9]);
//!
//! let halved = map(from_iterator(0..6), |value| value / 2);
//! assert_eq!(to_vec(halved), vec![0, 0, 1, 1, 2, 2]);
//! ```

use crate::sequence::Sequence;
use std::iter::Fuse;

/// Adapter exposing a sequence as an [`Iterator`].
///
/// Exhaustion carries over: the iterator returns `None` exactly when the
/// sequence does.
#[derive(Clone)]
pub struct SequenceIterator<S> {
    sequence: S,
}

impl<S> SequenceIterator<S>
where
    S: Sequence,
{
    /// Wraps `sequence` for use as an [`Iterator`].
    #[inline]
    #[must_use]
    pub const fn new(sequence: S) -> Self {
        Self { sequence }
    }

    /// Returns the underlying sequence, which resumes where the iterator
    /// stopped.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S> Iterator for SequenceIterator<S>
where
    S: Sequence,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.sequence.next()
    }
}

/// Adapter exposing an [`Iterator`] as a sequence. See [`from_iterator`].
#[derive(Clone)]
pub struct IteratorSequence<I>
where
    I: Iterator,
{
    iterator: Fuse<I>,
}

/// Creates a sequence pulling from any `IntoIterator`.
///
/// The iterator is fused first: once it reports exhaustion the sequence
/// stays exhausted, even for iterators that would otherwise resume.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let letters = from_iterator(vec!["a", "b", "c"]);
/// assert_eq!(to_vec(letters), vec!["a", "b", "c"]);
/// ```
#[inline]
pub fn from_iterator<I>(iterable: I) -> IteratorSequence<I::IntoIter>
where
    I: IntoIterator,
{
    IteratorSequence {
        iterator: iterable.into_iter().fuse(),
    }
}

impl<I> Sequence for IteratorSequence<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iterator.next()
    }
}
