use core::iter::{Skip, Take};

use crate::{Sequence, SequenceMut};

/// A contiguous window `[offset, offset + len)` of a sequence.
///
/// Created by [`shift`] and [`shift_from`].
#[derive(Debug, Clone)]
pub struct Shift<S> {
    seq: S,
    offset: usize,
    len: usize,
}

impl<S: Sequence> Shift<S> {
    /// Creates a window starting at `offset`. A `len` of `None` runs to the end
    /// of `seq`.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside `seq`.
    pub fn new(seq: S, offset: usize, len: Option<usize>) -> Self {
        let available = seq.len();
        let len = len.unwrap_or_else(|| available.saturating_sub(offset));
        assert!(
            offset <= available && len <= available - offset,
            "shift window {offset}..{offset}+{len} is out of bounds for a sequence of length {available}"
        );
        tracing::trace!(offset, len, available, "shift view");
        Shift { seq, offset, len }
    }

    /// Position of the first element of the window inside the wrapped sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Sequence for Shift<S> {
    type Item = S::Item;
    type Iter<'a>
        = Take<Skip<S::Iter<'a>>>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        precondition!(index < self.len, "index {index} out of shift window of length {}", self.len);
        self.seq.at(self.offset + index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.seq.iter().skip(self.offset).take(self.len)
    }
}

impl<S: SequenceMut> SequenceMut for Shift<S> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut S::Item {
        precondition!(index < self.len, "index {index} out of shift window of length {}", self.len);
        self.seq.at_mut(self.offset + index)
    }
}

/// Returns a view of `len` elements of `seq` starting at `pos`.
///
/// `len` may be a `usize` or `None`, where `None` means "up to the end":
///
/// ```
/// use cherry_ranges::{Sequence, shift};
///
/// let values = [0, 1, 2, 3, 4];
/// assert_eq!(shift(&values, 1, 2).iter().copied().collect::<Vec<_>>(), [1, 2]);
/// assert_eq!(shift(&values, 3, None).iter().copied().collect::<Vec<_>>(), [3, 4]);
/// ```
///
/// # Panics
///
/// Panics if `pos + len` exceeds the length of `seq`.
#[inline]
pub fn shift<S: Sequence>(seq: S, pos: usize, len: impl Into<Option<usize>>) -> Shift<S> {
    Shift::new(seq, pos, len.into())
}

/// Returns a view of `seq` from `pos` to the end.
#[inline]
pub fn shift_from<S: Sequence>(seq: S, pos: usize) -> Shift<S> {
    Shift::new(seq, pos, None)
}
