//! Cartesian products of sequences.

use crate::combinator::map::map;
use crate::combinator::replay::ReplayBuffer;
use crate::sequence::{BoxSequence, Sequence};
use crate::source::empty;

/// Creates a sequence yielding every combination of one element per member
/// of `sequences`, as a `Vec` with one entry per member.
///
/// Combinations come out in odometer order: the last member varies fastest,
/// the first slowest. Every member after the first is buffered as it is
/// pulled, so each of its elements is computed once and replayed for the
/// subsequent elements of the members before it. The buffers fill on demand,
/// which keeps the product lazy end to end.
///
/// An empty member makes the whole product empty. The first member may be
/// infinite; an infinite later member pins the members before it to their
/// first elements, since it never exhausts.
///
/// Degenerate arities are defined: no members produce an empty product, and
/// a single member produces one-element combinations.
///
/// Members must share one concrete type; mixed pipelines can be unified as
/// [`BoxSequence`](crate::sequence::BoxSequence) values first.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let product = combine(vec![range(0, 1), range(10, 11)]);
/// assert_eq!(
///     to_vec(product),
///     vec![vec![0, 10], vec![0, 11], vec![1, 10], vec![1, 11]],
/// );
/// ```
#[must_use]
pub fn combine<S>(sequences: Vec<S>) -> BoxSequence<Vec<S::Item>>
where
    S: Sequence + 'static,
    S::Item: Clone + 'static,
{
    let mut remaining = sequences.into_iter();
    let Some(first) = remaining.next() else {
        return Box::new(empty());
    };
    let Some(second) = remaining.next() else {
        return Box::new(map(first, |value| vec![value]));
    };
    let Some(third) = remaining.next() else {
        return Box::new(map(
            Pairs::new(first, second),
            |(left_value, right_value)| vec![left_value, right_value],
        ));
    };
    let mut tail_sequences = vec![second, third];
    tail_sequences.extend(remaining);
    let tail = combine(tail_sequences);
    Box::new(map(Pairs::new(first, tail), |(left_value, mut rest)| {
        let mut combination = Vec::with_capacity(rest.len() + 1);
        combination.push(left_value);
        combination.append(&mut rest);
        combination
    }))
}

/// The two-factor product underlying [`combine`]: for each element of
/// `left`, yields it paired with every element of `right` in order. The
/// right factor is buffered lazily so it can be traversed once per left
/// element while being pulled only once overall.
pub(crate) struct Pairs<L, R>
where
    L: Sequence,
    R: Sequence,
{
    left: L,
    right: ReplayBuffer<R>,
    current: Option<L::Item>,
    cursor: usize,
    done: bool,
}

impl<L, R> Pairs<L, R>
where
    L: Sequence,
    R: Sequence,
{
    pub(crate) fn new(left: L, right: R) -> Self {
        Self {
            left,
            right: ReplayBuffer::new(right),
            current: None,
            cursor: 0,
            done: false,
        }
    }
}

impl<L, R> Sequence for Pairs<L, R>
where
    L: Sequence,
    L::Item: Clone,
    R: Sequence,
    R::Item: Clone,
{
    type Item = (L::Item, R::Item);

    fn next(&mut self) -> Option<(L::Item, R::Item)> {
        if self.done {
            return None;
        }
        loop {
            let left_value = match self.current.as_ref() {
                Some(value) => value.clone(),
                None => {
                    let Some(value) = self.left.next() else {
                        self.done = true;
                        return None;
                    };
                    self.cursor = 0;
                    self.current = Some(value.clone());
                    value
                }
            };
            if let Some(right_value) = self.right.get(self.cursor) {
                let right_value = right_value.clone();
                self.cursor += 1;
                return Some((left_value, right_value));
            }
            if self.cursor == 0 {
                // An empty right factor empties the whole product.
                self.done = true;
                return None;
            }
            self.current = None;
        }
    }
}
