//! Constructors: sequences built from plain data.
//!
//! Everything here is a leaf of the combinator graph. Each constructor
//! returns an owning struct whose fields are the whole iteration state;
//! nothing is shared and nothing is computed until pulled.
//!
//! - [`from_vec`]: the elements of a vector, in order.
//! - [`range`]: consecutive integers, both bounds inclusive.
//! - [`from_fn`]: a closure pulled for each element, the building block for
//!   infinite sequences.
//! - [`empty`]: no elements at all.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! assert_eq!(to_vec(range(0, 3)), vec![0, 1, 2, 3]);
//! assert_eq!(to_vec(from_vec(vec!['a', 'b'])), vec!['a', 'b']);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::sequence::Sequence;

/// A sequence with no elements. See [`empty`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

/// Creates a sequence that is exhausted from the start.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut sequence = empty::<i64>();
/// assert_eq!(sequence.next(), None);
/// ```
#[inline]
#[must_use]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }
}

/// A sequence over the elements of an owned vector. See [`from_vec`].
#[derive(Clone, Debug)]
pub struct FromVec<T> {
    items: std::vec::IntoIter<T>,
}

/// Creates a sequence yielding `items[0], items[1], …` in order, then
/// exhausting.
///
/// The vector is moved into the sequence; the caller's data is never
/// mutated or observed again.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(to_vec(from_vec(vec![1, 2, 3])), vec![1, 2, 3]);
/// assert_eq!(to_vec(from_vec(Vec::<i64>::new())), Vec::<i64>::new());
/// ```
#[inline]
#[must_use]
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: items.into_iter(),
    }
}

impl<T> Sequence for FromVec<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }
}

/// A sequence that pulls its elements from a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    producer: F,
}

/// Creates a sequence that calls `producer` once per pull.
///
/// `Some(value)` produces `value`; `None` signals exhaustion. This is the
/// escape hatch for sequences that are not backed by data, in particular
/// infinite ones. The idempotent-exhaustion contract is the producer's to
/// uphold: once it returns `None` it should keep returning `None`.
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
/// assert_eq!(take(naturals, 5), vec![0, 1, 2, 3, 4]);
/// ```
#[inline]
#[must_use]
pub fn from_fn<T, F>(producer: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { producer }
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.producer)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// A sequence of consecutive integers. See [`range`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range {
    current: Option<i64>,
    max: i64,
}

/// Creates a sequence yielding every integer `i` with `min <= i <= max`,
/// ascending, both bounds inclusive.
///
/// `min > max` yields nothing; `min == max` yields exactly one value. The
/// empty case is a defined result, not an error.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(to_vec(range(0, 3)), vec![0, 1, 2, 3]);
/// assert_eq!(to_vec(range(0, 0)), vec![0]);
/// assert_eq!(to_vec(range(0, -1)), Vec::<i64>::new());
/// ```
#[inline]
#[must_use]
pub const fn range(min: i64, max: i64) -> Range {
    Range {
        current: Some(min),
        max,
    }
}

impl Sequence for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.current?;
        if value > self.max {
            self.current = None;
            return None;
        }
        // `checked_add` exhausts naturally when max == i64::MAX.
        self.current = value.checked_add(1);
        Some(value)
    }
}
