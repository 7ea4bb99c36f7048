use core::iter::Rev;

use crate::{Sequence, SequenceMut};

/// A sequence traversed back to front.
///
/// Created by [`reverse`]. No state besides the wrapped sequence: forward
/// traversal borrows the wrapped backward traversal and vice versa.
#[derive(Debug, Clone)]
pub struct Reverse<S> {
    seq: S,
}

impl<S: Sequence> Reverse<S> {
    pub fn new(seq: S) -> Self {
        tracing::trace!(len = seq.len(), "reverse view");
        Reverse { seq }
    }

    pub fn into_inner(self) -> S {
        self.seq
    }

    #[inline]
    fn mirror(&self, index: usize) -> usize {
        let len = self.seq.len();
        precondition!(index < len, "index {index} out of reversed sequence of length {len}");
        len - 1 - index
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Iter<'a>
        = Rev<S::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        self.seq.at(self.mirror(index))
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.seq.iter().rev()
    }
}

impl<S: SequenceMut> SequenceMut for Reverse<S> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut S::Item {
        let index = self.mirror(index);
        self.seq.at_mut(index)
    }
}

/// Returns a view of `seq` in reverse order.
///
/// ```
/// use cherry_ranges::{Sequence, reverse};
///
/// let values = [1, 2, 3];
/// assert_eq!(reverse(&values).iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[inline]
pub fn reverse<S: Sequence>(seq: S) -> Reverse<S> {
    Reverse::new(seq)
}
