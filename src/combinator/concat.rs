//! End-to-end chaining of sequences.

use crate::sequence::Sequence;

/// A sequence that drains each member sequence in order. See [`concat`].
#[derive(Clone)]
pub struct Concat<S> {
    sequences: Vec<S>,
    position: usize,
}

/// Creates a sequence yielding every element of `sequences[0]`, then every
/// element of `sequences[1]`, and so on.
///
/// Members are drained strictly in order and nothing is pulled from a member
/// until every earlier member is exhausted. An empty member contributes
/// nothing; an empty `sequences` produces an already-exhausted sequence; a
/// single member behaves exactly like that member. If some member is
/// infinite, later members are never reached.
///
/// Sequences of differing concrete types chain through
/// [`BoxSequence`](crate::sequence::BoxSequence).
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let chained = concat(vec![range(1, 2), range(5, 6)]);
/// assert_eq!(to_vec(chained), vec![1, 2, 5, 6]);
/// ```
#[inline]
#[must_use]
pub fn concat<S>(sequences: Vec<S>) -> Concat<S>
where
    S: Sequence,
{
    Concat {
        sequences,
        position: 0,
    }
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while let Some(current) = self.sequences.get_mut(self.position) {
            if let Some(value) = current.next() {
                return Some(value);
            }
            self.position += 1;
        }
        None
    }
}
