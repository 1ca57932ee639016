//! Predicate-based selection.

use crate::sequence::Sequence;

/// A sequence that keeps only the elements of another sequence passing a
/// predicate. See [`filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

/// Creates a sequence yielding only the elements of `sequence` for which
/// `predicate` returns `true`, in order.
///
/// Each pull discards failing elements until one passes or the source
/// exhausts, so an infinite source is fine as long as the predicate keeps
/// eventually passing. A predicate that rejects forever makes that `next`
/// call never return; knowing the predicate passes infinitely often is the
/// caller's responsibility, not something this combinator checks.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// assert_eq!(to_vec(filter(range(0, 5), |value| value % 2 == 0)), vec![0, 2, 4]);
/// ```
#[inline]
#[must_use]
pub fn filter<S, P>(sequence: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        source: sequence,
        predicate,
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            let value = self.source.next()?;
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
    }
}
