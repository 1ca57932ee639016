//! Terminal operations that drive a sequence.
//!
//! Everything in this module pulls. [`for_each`] and [`to_vec`] run their
//! input to exhaustion and never return on an infinite sequence; [`take`]
//! pulls a bounded number of elements and is the safe way to materialize a
//! prefix of anything, infinite included.

use crate::sequence::Sequence;

/// Pulls `sequence` to exhaustion, invoking `callback` on each element in
/// order.
///
/// # Arguments
///
/// * `sequence` - The sequence to drain
/// * `callback` - Invoked once per element, in pull order
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut total = 0;
/// for_each(range(1, 4), |value| total += value);
/// assert_eq!(total, 10);
/// ```
#[inline]
pub fn for_each<S, F>(mut sequence: S, mut callback: F)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    while let Some(value) = sequence.next() {
        callback(value);
    }
}

/// Pulls `sequence` to exhaustion and collects every element into a `Vec`.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(to_vec(range(1, 3)), vec![1, 2, 3]);
/// ```
#[inline]
#[must_use]
pub fn to_vec<S>(sequence: S) -> Vec<S::Item>
where
    S: Sequence,
{
    let mut collected = Vec::new();
    for_each(sequence, |value| collected.push(value));
    collected
}

/// Pulls at most `count` elements from `sequence` and collects them.
///
/// Exactly `min(count, remaining)` elements are pulled: a `count` of zero
/// pulls nothing, and the element after the prefix is never requested, so
/// `take` terminates on infinite sequences.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut current = 0;
/// let naturals = from_fn(move || {
///     let value = current;
///     current += 1;
///     Some(value)
/// });
/// assert_eq!(take(naturals, 3), vec![0, 1, 2]);
/// ```
#[inline]
#[must_use]
pub fn take<S>(mut sequence: S, count: usize) -> Vec<S::Item>
where
    S: Sequence,
{
    let mut collected = Vec::new();
    for _ in 0..count {
        let Some(value) = sequence.next() else {
            break;
        };
        collected.push(value);
    }
    collected
}
