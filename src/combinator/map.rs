//! Element-wise transformation.

use crate::sequence::Sequence;

/// A sequence that transforms every element of another sequence. See
/// [`map`].
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

/// Creates a sequence yielding `transform(value)` for every `value` of
/// `sequence`, in order.
///
/// `transform` is called exactly once per produced element, and only when
/// that element is pulled, so mapping an infinite sequence is fine.
/// Exhaustion of the source propagates unchanged.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(to_vec(map(range(2, 5), |value| value * 2)), vec![4, 6, 8, 10]);
/// ```
#[inline]
#[must_use]
pub fn map<S, B, F>(sequence: S, transform: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    Map {
        source: sequence,
        transform,
    }
}

impl<S, B, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.source.next().map(&mut self.transform)
    }
}
