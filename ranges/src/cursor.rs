use core::fmt;

use crate::SequenceMut;

/// A mutable traversal over a [`SequenceMut`], usable from both ends.
///
/// Unlike an iterator, a cursor lends each element only until the next call.
/// This matters for [`Indexing`](crate::Indexing) views, which may select the
/// same element more than once: handing out two live `&mut` to it would be
/// unsound.
///
/// ```
/// use cherry_ranges::{SequenceMut, reverse};
///
/// let mut values = vec![0; 4];
/// let mut view = reverse(&mut values);
/// let mut cursor = view.cursor_mut();
/// let mut next = 0;
/// while let Some(value) = cursor.next_mut() {
///     *value = next;
///     next += 1;
/// }
/// assert_eq!(values, [3, 2, 1, 0]);
/// ```
pub struct CursorMut<'a, S: ?Sized> {
    seq: &'a mut S,
    front: usize,
    back: usize,
}

impl<'a, S: SequenceMut + ?Sized> CursorMut<'a, S> {
    pub fn new(seq: &'a mut S) -> Self {
        let back = seq.len();
        CursorMut {
            seq,
            front: 0,
            back,
        }
    }

    /// Advances from the front and lends the element passed over.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut S::Item> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(self.seq.at_mut(index))
    }

    /// Advances from the back and lends the element passed over.
    #[inline]
    pub fn next_back_mut(&mut self) -> Option<&mut S::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.at_mut(self.back))
    }

    /// Number of elements not yet visited from either end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }

    /// Logical position of the front end.
    #[inline]
    pub fn position(&self) -> usize {
        self.front
    }
}

impl<S: ?Sized> fmt::Debug for CursorMut<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}
