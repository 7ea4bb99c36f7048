use core::fmt;
use core::iter::FusedIterator;

use crate::{Sequence, SequenceMut};

/// Elements of `items` selected by, and ordered as, the positions in `indexes`.
///
/// Created by [`indexing`]. Nothing is copied: every access reads the index
/// and then the item, so changes to either sequence are seen by the next
/// traversal. Duplicate and unordered indexes are allowed.
///
/// Every value in `indexes` must be a valid position in `items`. This is
/// checked only with `debug_assertions` or the `checked` feature.
#[derive(Debug, Clone)]
pub struct Indexing<S, X> {
    items: S,
    indexes: X,
}

impl<S: Sequence, X: Sequence<Item = usize>> Indexing<S, X> {
    pub fn new(items: S, indexes: X) -> Self {
        tracing::trace!(items = items.len(), indexes = indexes.len(), "indexing view");
        Indexing { items, indexes }
    }

    pub fn items(&self) -> &S {
        &self.items
    }

    pub fn indexes(&self) -> &X {
        &self.indexes
    }

    pub fn into_parts(self) -> (S, X) {
        (self.items, self.indexes)
    }

    #[inline]
    fn position(&self, index: usize) -> usize {
        let position = *self.indexes.at(index);
        precondition!(
            position < self.items.len(),
            "index value {position} at {index} is out of bounds for {} items",
            self.items.len()
        );
        position
    }
}

impl<S: Sequence, X: Sequence<Item = usize>> Sequence for Indexing<S, X> {
    type Item = S::Item;
    type Iter<'a>
        = IndexingIter<'a, S, X::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.indexes.len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        self.items.at(self.position(index))
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        IndexingIter {
            items: &self.items,
            indexes: self.indexes.iter(),
        }
    }
}

impl<S: SequenceMut, X: Sequence<Item = usize>> SequenceMut for Indexing<S, X> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut S::Item {
        let position = self.position(index);
        self.items.at_mut(position)
    }
}

/// Iterator over an [`Indexing`] view.
///
/// Advancing moves the inner iterator over the indexes; each step then reads
/// the selected item.
pub struct IndexingIter<'a, S, I> {
    items: &'a S,
    indexes: I,
}

impl<'a, S: Sequence, I> IndexingIter<'a, S, I>
where
    I: Iterator<Item = &'a usize>,
{
    #[inline]
    fn select(&self, position: usize) -> &'a S::Item {
        let items = self.items;
        precondition!(
            position < items.len(),
            "index value {position} is out of bounds for {} items",
            items.len()
        );
        items.at(position)
    }
}

impl<'a, S: Sequence, I> Iterator for IndexingIter<'a, S, I>
where
    I: Iterator<Item = &'a usize>,
{
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let &position = self.indexes.next()?;
        Some(self.select(position))
    }

    /// Skips by index only; skipped items are never read.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let &position = self.indexes.nth(n)?;
        Some(self.select(position))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indexes.size_hint()
    }
}

impl<'a, S: Sequence, I> DoubleEndedIterator for IndexingIter<'a, S, I>
where
    I: DoubleEndedIterator<Item = &'a usize>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let &position = self.indexes.next_back()?;
        Some(self.select(position))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let &position = self.indexes.nth_back(n)?;
        Some(self.select(position))
    }
}

impl<'a, S: Sequence, I> ExactSizeIterator for IndexingIter<'a, S, I> where
    I: ExactSizeIterator<Item = &'a usize>
{
}

impl<'a, S: Sequence, I> FusedIterator for IndexingIter<'a, S, I> where
    I: FusedIterator<Item = &'a usize>
{
}

impl<S, I: Clone> Clone for IndexingIter<'_, S, I> {
    fn clone(&self) -> Self {
        IndexingIter {
            items: self.items,
            indexes: self.indexes.clone(),
        }
    }
}

impl<S, I: fmt::Debug> fmt::Debug for IndexingIter<'_, S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexingIter")
            .field("indexes", &self.indexes)
            .finish_non_exhaustive()
    }
}

/// Returns a view of `items` at the positions listed in `indexes`.
///
/// ```
/// use cherry_ranges::{Sequence, indexing};
///
/// let items = [5, 6, 7, 8, 9];
/// let indexes = [4, 3, 2, 1, 0];
/// let picked = indexing(&items, &indexes);
/// assert_eq!(picked.iter().copied().collect::<Vec<_>>(), [9, 8, 7, 6, 5]);
/// ```
#[inline]
pub fn indexing<S, X>(items: S, indexes: X) -> Indexing<S, X>
where
    S: Sequence,
    X: Sequence<Item = usize>,
{
    Indexing::new(items, indexes)
}
