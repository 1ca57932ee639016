//! The pull-based sequence abstraction.
//!
//! This module provides the [`Sequence`] trait, the single interface every
//! combinator in this crate produces and consumes: a value that can be asked,
//! repeatedly, for its next element until it is exhausted.
//!
//! # The pull contract
//!
//! Calling [`Sequence::next`] either produces the next element (`Some`) or
//! signals exhaustion (`None`). Three rules govern every implementation in
//! this crate, and every implementation supplied by callers is expected to
//! follow them:
//!
//! - **Idempotent exhaustion**: once `next` returns `None`, a conforming
//!   sequence keeps returning `None` on every subsequent call. Combinators
//!   preserve this property when wrapping a conforming source.
//! - **Single-pass**: each element is produced at most once per pull chain.
//!   Re-pulling an exhausted sequence does not replay prior values; use
//!   [`copy`](crate::combinator::copy) when independent re-iteration is
//!   needed.
//! - **Demand-driven**: nothing is computed until pulled. A sequence may be
//!   infinite; only the eager consumers ([`to_vec`](crate::consumer::to_vec),
//!   [`for_each`](crate::consumer::for_each)) require finiteness.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let doubled_evens = range(0, 9)
//!     .filter(|value| value % 2 == 0)
//!     .map(|value| value * 2)
//!     .to_vec();
//! assert_eq!(doubled_evens, vec![0, 4, 8, 12, 16]);
//! ```

use crate::combinator::{
    Filter, FilterMap, Flatten, Map, Replay, Skip, copy, filter, filter_map, flatten, map,
};
use crate::consumer::{for_each, take, to_vec};
use crate::iter::SequenceIterator;

/// A type-erased pull source.
///
/// Boxing is how pipelines mix sequences of different concrete types and how
/// [`combine`](crate::combinator::combine) expresses its arity recursion: the
/// element type is all that matters, the combinator shape is erased.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let sequences: Vec<BoxSequence<i64>> = vec![
///     range(0, 1).boxed(),
///     from_vec(vec![7, 8]).boxed(),
/// ];
/// let tuples = take(combine(sequences), 2);
/// assert_eq!(tuples, vec![vec![0, 7], vec![0, 8]]);
/// ```
pub type BoxSequence<T> = Box<dyn Sequence<Item = T>>;

/// A pull source: a value that produces its elements one at a time, on
/// demand, until exhausted.
///
/// `Sequence` is the crate's only abstraction. Constructors
/// ([`range`](crate::source::range), [`from_vec`](crate::source::from_vec),
/// [`from_fn`](crate::source::from_fn)) build sequences from data,
/// transformers wrap sequences in new sequences, and consumers drive a
/// sequence to completion or to a bound. Every transformer is lazy: building
/// a pipeline performs no work until a consumer (or a manual
/// [`next`](Sequence::next) call) pulls a value through it.
///
/// The canonical operations exist as free functions (the composition
/// surface) and as provided methods on this trait (the chaining surface);
/// the methods delegate to the functions and the two spellings are
/// interchangeable.
///
/// # Implementing
///
/// Only [`next`](Sequence::next) is required. Implementations should keep
/// exhaustion idempotent: after the first `None`, keep returning `None`.
///
/// ```rust
/// use pullseq::sequence::Sequence;
///
/// /// Counts down to one, then exhausts.
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             None
///         } else {
///             let value = self.0;
///             self.0 -= 1;
///             Some(value)
///         }
///     }
/// }
///
/// assert_eq!(Countdown(3).to_vec(), vec![3, 2, 1]);
/// ```
///
/// # Driving by reference
///
/// `&mut S` implements `Sequence` whenever `S` does, so a sequence can be
/// partially drained without being consumed:
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = range(0, 9);
/// assert_eq!(take(&mut sequence, 3), vec![0, 1, 2]);
/// assert_eq!(sequence.next(), Some(3)); // the remainder is still available
/// ```
pub trait Sequence {
    /// The type of the elements this sequence produces.
    type Item;

    /// Pulls the next element, or `None` when the sequence is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut sequence = range(1, 2);
    /// assert_eq!(sequence.next(), Some(1));
    /// assert_eq!(sequence.next(), Some(2));
    /// assert_eq!(sequence.next(), None);
    /// assert_eq!(sequence.next(), None); // exhaustion is idempotent
    /// ```
    fn next(&mut self) -> Option<Self::Item>;

    /// Transforms every element with `transform`, lazily.
    ///
    /// Method form of [`map`](crate::combinator::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let squares = range(1, 4).map(|value| value * value).to_vec();
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    /// ```
    fn map<B, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        map(self, transform)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Method form of [`filter`](crate::combinator::filter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let odds = range(0, 6).filter(|value| value % 2 != 0).to_vec();
    /// assert_eq!(odds, vec![1, 3, 5]);
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Transforms and filters in a single pass.
    ///
    /// Method form of [`filter_map`](crate::combinator::filter_map); see it
    /// for the dual skip signal ([`Skip::mark`] or returning `None`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let negated_odds = range(0, 5)
    ///     .filter_map(|value, skip| {
    ///         if value % 2 == 0 {
    ///             skip.mark();
    ///             None
    ///         } else {
    ///             Some(-value)
    ///         }
    ///     })
    ///     .to_vec();
    /// assert_eq!(negated_odds, vec![-1, -3, -5]);
    /// ```
    fn filter_map<B, F>(self, transform: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item, &mut Skip) -> Option<B>,
    {
        filter_map(self, transform)
    }

    /// Concatenates the inner sequences of a sequence of sequences.
    ///
    /// Method form of [`flatten`](crate::combinator::flatten).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let values = from_vec(vec![range(0, 0), range(2, 4)]).flatten().to_vec();
    /// assert_eq!(values, vec![0, 2, 3, 4]);
    /// ```
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Sequence,
    {
        flatten(self)
    }

    /// Wraps this sequence in a memoizing replay so it can be iterated
    /// independently any number of times.
    ///
    /// Method form of [`copy`](crate::combinator::copy).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let replay = range(0, 2).into_replay();
    /// assert_eq!(replay.replay().to_vec(), vec![0, 1, 2]);
    /// assert_eq!(replay.replay().to_vec(), vec![0, 1, 2]);
    /// ```
    fn into_replay(self) -> Replay<Self>
    where
        Self: Sized,
    {
        copy(self)
    }

    /// Drains the sequence, invoking `callback` once per element, in order.
    ///
    /// Method form of [`for_each`](crate::consumer::for_each). Never returns
    /// if the sequence is infinite.
    fn for_each<F>(self, callback: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for_each(self, callback);
    }

    /// Drains the sequence into a `Vec`, in order.
    ///
    /// Method form of [`to_vec`](crate::consumer::to_vec). Never returns if
    /// the sequence is infinite.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        to_vec(self)
    }

    /// Pulls up to `count` elements into a `Vec`, stopping early on
    /// exhaustion.
    ///
    /// Method form of [`take`](crate::consumer::take). Unlike the lazy
    /// adapter of the same name on [`Iterator`], this materializes its
    /// result; it is the bounded consumer that makes infinite sequences
    /// safe to sample.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut counter = 0;
    /// let naturals = from_fn(move || {
    ///     let value = counter;
    ///     counter += 1;
    ///     Some(value)
    /// });
    /// assert_eq!(naturals.take(4), vec![0, 1, 2, 3]);
    /// ```
    fn take(self, count: usize) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        take(self, count)
    }

    /// Adapts this sequence to [`std::iter::Iterator`], so pipelines drop
    /// into `for` loops and the standard adapter ecosystem.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let sum: i64 = range(1, 4).into_iterator().sum();
    /// assert_eq!(sum, 10);
    /// ```
    fn into_iterator(self) -> SequenceIterator<Self>
    where
        Self: Sized,
    {
        SequenceIterator::new(self)
    }

    /// Erases the concrete combinator type behind [`BoxSequence`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// // Both arms produce the same type despite different pipelines.
    /// let negate = true;
    /// let sequence: BoxSequence<i64> = if negate {
    ///     range(0, 2).map(|value| -value).boxed()
    /// } else {
    ///     range(0, 2).boxed()
    /// };
    /// assert_eq!(sequence.to_vec(), vec![0, -1, -2]);
    /// ```
    fn boxed(self) -> BoxSequence<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

// `combine` and `boxed` rely on `dyn Sequence` staying well-formed.
static_assertions::assert_obj_safe!(Sequence<Item = i64>);
