//! Single-pass transform-and-select.
//!
//! [`filter_map`] folds a [`filter`](crate::combinator::filter) and a
//! [`map`](crate::combinator::map) into one pull. The transform excludes an
//! element through either of two equivalent signals: marking the [`Skip`]
//! token it receives, or returning `None` (the absent marker). Both are
//! always honored; a transform that returns a value but marks the token
//! has still skipped.

use crate::sequence::Sequence;

/// The mark-to-exclude token handed to a [`filter_map`] transform.
///
/// A fresh token is created for every element; marking it discards that
/// element regardless of what the transform returns.
///
/// # Examples
///
/// ```rust
/// use pullseq::combinator::Skip;
///
/// let mut skip = Skip::new();
/// assert!(!skip.is_marked());
/// skip.mark();
/// assert!(skip.is_marked());
/// ```
#[derive(Debug, Default)]
pub struct Skip {
    marked: bool,
}

impl Skip {
    /// Creates an unmarked token.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { marked: false }
    }

    /// Marks the current element as excluded.
    #[inline]
    pub const fn mark(&mut self) {
        self.marked = true;
    }

    /// Returns whether the current element was marked excluded.
    #[inline]
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.marked
    }
}

/// A sequence that transforms and selects in a single pass. See
/// [`filter_map`].
#[derive(Clone)]
pub struct FilterMap<S, F> {
    source: S,
    transform: F,
}

/// Creates a sequence yielding `transform(value, skip)` for every `value`
/// of `sequence` that the transform does not exclude.
///
/// For each pulled element the transform receives the element and a fresh
/// [`Skip`] token. The element is discarded (and the next underlying
/// element tried) when the token was marked during the call OR the
/// transform returned `None`; otherwise the `Some` payload is yielded.
/// Either signal alone suffices, and a marked token overrides a returned
/// value.
///
/// The same laziness and non-termination contract as
/// [`filter`](crate::combinator::filter) applies: an infinite source is fine
/// while the transform keeps eventually producing; a transform that excludes
/// forever makes the pull never return.
///
/// # Examples
///
/// ```rust
/// use pullseq::prelude::*;
///
/// // Marking the token and returning the absent marker are equivalent.
/// let via_mark = to_vec(filter_map(range(0, 5), |value, skip| {
///     if value % 2 == 0 {
///         skip.mark();
///     }
///     Some(-value)
/// }));
/// let via_absent = to_vec(filter_map(range(0, 5), |value, _skip| {
///     if value % 2 == 0 { None } else { Some(-value) }
/// }));
/// assert_eq!(via_mark, vec![-1, -3, -5]);
/// assert_eq!(via_absent, vec![-1, -3, -5]);
/// ```
#[inline]
#[must_use]
pub fn filter_map<S, B, F>(sequence: S, transform: F) -> FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item, &mut Skip) -> Option<B>,
{
    FilterMap {
        source: sequence,
        transform,
    }
}

impl<S, B, F> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item, &mut Skip) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        loop {
            let value = self.source.next()?;
            let mut skip = Skip::new();
            let produced = (self.transform)(value, &mut skip);
            if !skip.is_marked() {
                if let Some(result) = produced {
                    return Some(result);
                }
            }
        }
    }
}
