//! One-level flattening of a sequence of sequences.

use crate::sequence::Sequence;

/// A sequence that splices the elements of each inner sequence in place.
/// See [`flatten`].
#[derive(Clone)]
pub struct Flatten<S>
where
    S: Sequence,
{
    outer: S,
    inner: Option<S::Item>,
}

/// Creates a sequence yielding, for each inner sequence of `sequence`, all
/// of its elements before moving to the next inner sequence.
///
/// Exactly one level of nesting is removed. Inner sequences are obtained on
/// demand, so the outer sequence may be infinite; each inner sequence is
/// drained before the next is requested, so an infinite inner sequence
/// shadows everything after it. Empty inner sequences contribute nothing.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let nested = from_vec(vec![range(1, 2), range(5, 6)]);
/// assert_eq!(to_vec(flatten(nested)), vec![1, 2, 5, 6]);
/// ```
#[inline]
#[must_use]
pub fn flatten<S>(sequence: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    Flatten {
        outer: sequence,
        inner: None,
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(value) = inner.next() {
                    return Some(value);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?);
        }
    }
}
