//! Shared buffering for multi-pass traversal.
//!
//! A sequence is single-pass: once an element is pulled it is gone. [`copy`]
//! lifts a sequence into a [`Replay`], which records pulled elements in a
//! buffer shared by every cursor derived from it. The underlying sequence is
//! pulled at most once per element no matter how many cursors traverse it or
//! in what order they interleave.

use crate::sequence::Sequence;
use static_assertions::assert_not_impl_any;
use std::cell::RefCell;
use std::rc::Rc;

/// Lazily-filled cache over a sequence. Elements are pulled from the source
/// the first time an index is requested and served from the cache after.
pub(crate) struct ReplayBuffer<S>
where
    S: Sequence,
{
    source: S,
    cached: Vec<S::Item>,
    exhausted: bool,
}

impl<S> ReplayBuffer<S>
where
    S: Sequence,
{
    pub(crate) const fn new(source: S) -> Self {
        Self {
            source,
            cached: Vec::new(),
            exhausted: false,
        }
    }

    /// Returns the element at `index`, pulling from the source just far
    /// enough to reach it. `None` means the source ended before `index`.
    pub(crate) fn get(&mut self, index: usize) -> Option<&S::Item> {
        while !self.exhausted && self.cached.len() <= index {
            match self.source.next() {
                Some(value) => self.cached.push(value),
                None => self.exhausted = true,
            }
        }
        self.cached.get(index)
    }
}

/// A multi-pass view of a sequence. See [`copy`].
///
/// Each `Replay` value is one cursor into a buffer shared with every other
/// cursor obtained from the same [`copy`] call. [`Replay::replay`] starts a
/// fresh cursor at the beginning; [`Clone`] forks the current position.
pub struct Replay<S>
where
    S: Sequence,
{
    buffer: Rc<RefCell<ReplayBuffer<S>>>,
    cursor: usize,
}

/// Creates a re-traversable view of `sequence`.
///
/// The returned [`Replay`] pulls from `sequence` on demand and buffers what
/// it pulls, so the sequence is consumed at most once per element across
/// all cursors. Nothing is pulled until a cursor is advanced, and a fully
/// buffered sequence can be replayed any number of times.
///
/// Buffering grows with the number of distinct elements reached, so keeping
/// a replay of an infinite sequence around retains every element pulled
/// so far.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let first_pass = copy(range(0, 2));
/// let second_pass = first_pass.replay();
/// assert_eq!(to_vec(first_pass), vec![0, 1, 2]);
/// assert_eq!(to_vec(second_pass), vec![0, 1, 2]);
/// ```
#[inline]
#[must_use]
pub fn copy<S>(sequence: S) -> Replay<S>
where
    S: Sequence,
{
    Replay {
        buffer: Rc::new(RefCell::new(ReplayBuffer::new(sequence))),
        cursor: 0,
    }
}

impl<S> Replay<S>
where
    S: Sequence,
{
    /// Returns a fresh cursor positioned at the first element, sharing this
    /// cursor's buffer.
    #[inline]
    #[must_use]
    pub fn replay(&self) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
            cursor: 0,
        }
    }
}

/// Forks the cursor: the clone continues from the same position over the
/// same shared buffer.
impl<S> Clone for Replay<S>
where
    S: Sequence,
{
    fn clone(&self) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
            cursor: self.cursor,
        }
    }
}

impl<S> Sequence for Replay<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let value = self.buffer.borrow_mut().get(self.cursor).cloned();
        if value.is_some() {
            self.cursor += 1;
        }
        value
    }
}

// The buffer is shared through `Rc`, so cursors stay on one thread.
assert_not_impl_any!(Replay<crate::source::Range>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumer::to_vec;
    use crate::source::{from_fn, range};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_replay_traverses_from_the_start() {
        let first_pass = copy(range(0, 2));
        let second_pass = first_pass.replay();
        assert_eq!(to_vec(first_pass), vec![0, 1, 2]);
        assert_eq!(to_vec(second_pass), vec![0, 1, 2]);
    }

    #[rstest]
    fn test_source_is_pulled_once_per_element() {
        let pulls = Cell::new(0);
        let mut values = vec![1, 2, 3].into_iter();
        let counted = from_fn(|| {
            pulls.set(pulls.get() + 1);
            values.next()
        });
        let first_pass = copy(counted);
        let second_pass = first_pass.replay();
        let third_pass = first_pass.replay();
        assert_eq!(to_vec(first_pass), vec![1, 2, 3]);
        assert_eq!(to_vec(second_pass), vec![1, 2, 3]);
        assert_eq!(to_vec(third_pass), vec![1, 2, 3]);
        // Three values plus the exhaustion probe.
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    fn test_interleaved_cursors_see_the_full_stream() {
        let mut first = copy(range(10, 12));
        let mut second = first.replay();
        assert_eq!(first.next(), Some(10));
        assert_eq!(second.next(), Some(10));
        assert_eq!(second.next(), Some(11));
        assert_eq!(first.next(), Some(11));
        assert_eq!(first.next(), Some(12));
        assert_eq!(first.next(), None);
        assert_eq!(second.next(), Some(12));
        assert_eq!(second.next(), None);
    }

    #[rstest]
    fn test_clone_forks_the_current_position() {
        let mut original = copy(range(1, 3));
        assert_eq!(original.next(), Some(1));
        let forked = original.clone();
        assert_eq!(to_vec(original), vec![2, 3]);
        assert_eq!(to_vec(forked), vec![2, 3]);
    }

    #[rstest]
    fn test_replay_after_exhaustion_starts_over() {
        let mut first_pass = copy(range(0, 1));
        assert_eq!(to_vec(&mut first_pass), vec![0, 1]);
        assert_eq!(first_pass.next(), None);
        assert_eq!(to_vec(first_pass.replay()), vec![0, 1]);
    }

    #[rstest]
    fn test_replay_is_lazy_until_advanced() {
        let pulls = Cell::new(0);
        let counted = from_fn(|| {
            pulls.set(pulls.get() + 1);
            Some(7)
        });
        let untouched = copy(counted);
        let _cursor = untouched.replay();
        assert_eq!(pulls.get(), 0);
    }
}
