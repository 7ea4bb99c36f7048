use core::iter::FusedIterator;

use crate::{Sequence, SequenceMut};

/// Two sequences of the same element type traversed as one.
///
/// Created by [`join`]. Forward traversal yields all of `first` and then all of
/// `second`; backward traversal is its mirror image, so it yields `second`
/// backward and then `first` backward.
#[derive(Debug, Clone)]
pub struct Join<A, B> {
    first: A,
    second: B,
}

/// A location inside a [`Join`]: which half, and the offset within it.
///
/// Two positions are equal only if both the half and the offset match, so the
/// end of `first` never compares equal to any position in `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinPosition {
    pub in_first: bool,
    pub offset: usize,
}

impl<A: Sequence, B: Sequence<Item = A::Item>> Join<A, B> {
    pub fn new(first: A, second: B) -> Self {
        tracing::trace!(first = first.len(), second = second.len(), "join view");
        Join { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Maps a logical index onto the half that holds it.
    ///
    /// Indexes at or past the end map into `second`, with `len()` mapping to the
    /// one-past-the-end position of `second`.
    pub fn locate(&self, index: usize) -> JoinPosition {
        let split = self.first.len();
        if index < split {
            JoinPosition {
                in_first: true,
                offset: index,
            }
        } else {
            JoinPosition {
                in_first: false,
                offset: index - split,
            }
        }
    }

    #[inline]
    fn checked_locate(&self, index: usize) -> JoinPosition {
        precondition!(
            index < self.len(),
            "index {index} out of joined sequence of length {}",
            self.len()
        );
        self.locate(index)
    }
}

impl<A: Sequence, B: Sequence<Item = A::Item>> Sequence for Join<A, B> {
    type Item = A::Item;
    type Iter<'a>
        = JoinIter<A::Iter<'a>, B::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    #[inline]
    fn at(&self, index: usize) -> &A::Item {
        match self.checked_locate(index) {
            JoinPosition {
                in_first: true,
                offset,
            } => self.first.at(offset),
            JoinPosition { offset, .. } => self.second.at(offset),
        }
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        JoinIter::new(self.first.iter(), self.second.iter())
    }
}

impl<A: SequenceMut, B: SequenceMut<Item = A::Item>> SequenceMut for Join<A, B> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut A::Item {
        match self.checked_locate(index) {
            JoinPosition {
                in_first: true,
                offset,
            } => self.first.at_mut(offset),
            JoinPosition { offset, .. } => self.second.at_mut(offset),
        }
    }
}

/// Iterator over a [`Join`] view.
///
/// `in_first` starts out `true` only if the first iterator has anything to
/// yield and flips once that iterator is drained; from then on the front end
/// advances the second iterator. The back end drains the second iterator
/// before touching the first.
#[derive(Debug, Clone)]
pub struct JoinIter<I, J> {
    in_first: bool,
    first: I,
    second: J,
}

impl<I: ExactSizeIterator, J> JoinIter<I, J> {
    pub fn new(first: I, second: J) -> Self {
        JoinIter {
            in_first: first.len() != 0,
            first,
            second,
        }
    }

    /// Whether the front end is still inside the first sequence.
    pub fn in_first(&self) -> bool {
        self.in_first
    }
}

impl<T, I, J> Iterator for JoinIter<I, J>
where
    I: ExactSizeIterator<Item = T>,
    J: Iterator<Item = T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.in_first {
            let item = self.first.next();
            if self.first.len() == 0 {
                self.in_first = false;
            }
            if item.is_some() {
                return item;
            }
        }
        self.second.next()
    }

    /// Splits the skip across both halves by length.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        let mut n = n;
        if self.in_first {
            let head = self.first.len();
            if n < head {
                let item = self.first.nth(n);
                if self.first.len() == 0 {
                    self.in_first = false;
                }
                return item;
            }
            if let Some(last) = head.checked_sub(1) {
                self.first.nth(last);
            }
            self.in_first = false;
            n -= head;
        }
        self.second.nth(n)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.second.size_hint();
        let head = self.first.len();
        (
            lower.saturating_add(head),
            upper.and_then(|upper| upper.checked_add(head)),
        )
    }
}

impl<T, I, J> DoubleEndedIterator for JoinIter<I, J>
where
    I: DoubleEndedIterator<Item = T> + ExactSizeIterator,
    J: DoubleEndedIterator<Item = T> + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if let Some(item) = self.second.next_back() {
            return Some(item);
        }
        let item = self.first.next_back();
        if self.first.len() == 0 {
            self.in_first = false;
        }
        item
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let tail = self.second.len();
        if n < tail {
            return self.second.nth_back(n);
        }
        if let Some(last) = tail.checked_sub(1) {
            self.second.nth_back(last);
        }
        let item = self.first.nth_back(n - tail);
        if self.first.len() == 0 {
            self.in_first = false;
        }
        item
    }
}

impl<T, I, J> ExactSizeIterator for JoinIter<I, J>
where
    I: ExactSizeIterator<Item = T>,
    J: ExactSizeIterator<Item = T>,
{
}

impl<T, I, J> FusedIterator for JoinIter<I, J>
where
    I: ExactSizeIterator<Item = T> + FusedIterator,
    J: FusedIterator<Item = T>,
{
}

/// Returns a view of `first` followed by `second`.
///
/// Both sequences must yield the same element type; that is checked by the
/// compiler.
///
/// ```
/// use cherry_ranges::{Sequence, join};
///
/// let (a, b) = ([1, 2], vec![3, 4, 5]);
/// let both = join(&a, &b);
/// assert_eq!(both.len(), 5);
/// assert_eq!(both.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
/// assert_eq!(both.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn join<A, B>(first: A, second: B) -> Join<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Join::new(first, second)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::{JoinPosition, join};
    use crate::{Sequence, SequenceMut, indexing, reverse, shift};

    #[test]
    fn first_then_second() {
        let mut a = vec![0; 10];
        let mut b = vec![1; 10];

        let mut index = 0;
        join(&mut a, &mut b).for_each_mut(|v| {
            assert_eq!(*v, if index < 10 { 0 } else { 1 });
            *v = 2;
            index += 1;
        });
        assert_eq!(index, 20);
        assert!(a.iter().chain(b.iter()).all(|&v| v == 2));
    }

    #[test]
    fn backward_mirrors_forward() {
        let a = [1, 2, 3];
        let b = [4, 5];
        let view = join(&a, &b);
        let forward: Vec<_> = view.iter().copied().collect();
        let mut backward: Vec<_> = view.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn both_ends_meet() {
        let a = [1, 2];
        let b = [3, 4];
        let view = join(&a, &b);
        let mut iter = view.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next_back(), Some(&2));
        assert!(iter.in_first());
        assert_eq!(iter.next(), Some(&1));
        assert!(!iter.in_first());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn join_of_join() {
        let mut a = vec![0; 10];
        let mut b = vec![0; 10];
        let mut c = vec![0; 10];
        join(join(&mut a, &mut b), &mut c).for_each_mut(|v| *v = 3);
        for values in [&a, &b, &c] {
            assert!(values.iter().all(|&v| v == 3));
        }
    }

    #[test]
    fn join_with_reversed_middle() {
        let mut a = vec![3; 10];
        let mut b = vec![3; 10];
        let mut c = vec![3; 10];
        let mut next = 0;
        join(join(&mut a, reverse(&mut b)), &mut c).for_each_mut(|v| {
            *v = next;
            next += 1;
        });
        let expected: Vec<i32> = (10..20).rev().collect();
        assert_eq!(b, expected);
        assert_eq!(a, (0..10).collect::<Vec<_>>());
        assert_eq!(c, (20..30).collect::<Vec<_>>());
    }

    #[test]
    fn mixed_mutability_reads() {
        let mutable = vec![0; 10];
        let immutable = vec![0; 10];
        let view = join(&mutable, join(&mutable, &immutable));
        assert_eq!(view.len(), 30);
        assert!(view.iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_halves() {
        let empty: Vec<i32> = Vec::new();
        let view = join(&empty, &empty);
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
        assert!(!view.iter().in_first());

        let tail = [7];
        let view = join(&empty, &tail);
        assert_eq!(view.iter().collect::<Vec<_>>(), [&7]);
        assert_eq!(view.at(0), &7);
    }

    #[test]
    fn positions_compare_half_and_offset() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let view = join(&a, &b);
        assert_eq!(
            view.locate(1),
            JoinPosition {
                in_first: true,
                offset: 1
            }
        );
        assert_eq!(
            view.locate(3),
            JoinPosition {
                in_first: false,
                offset: 0
            }
        );
        let end_of_first = JoinPosition {
            in_first: true,
            offset: 3,
        };
        let same_offset_in_second = JoinPosition {
            in_first: false,
            offset: 3,
        };
        assert_ne!(end_of_first, same_offset_in_second);
        assert_eq!(view.locate(view.len()), same_offset_in_second);
    }

    #[test]
    fn nth_crosses_halves() {
        let a = [0, 1, 2];
        let b = [3, 4, 5, 6];
        let view = join(&a, &b);

        for n in 0..8 {
            assert_eq!(view.iter().nth(n), view.checked_at(n), "nth({n})");
            assert_eq!(
                view.iter().nth_back(n),
                view.len().checked_sub(n + 1).map(|i| view.at(i)),
                "nth_back({n})"
            );
        }

        let mut iter = view.iter();
        assert_eq!(iter.nth(3), Some(&3));
        assert!(!iter.in_first());
        assert_eq!(iter.nth_back(1), Some(&5));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&4));

        let mut iter = view.iter();
        assert_eq!(iter.nth_back(4), Some(&2));
        assert!(iter.in_first());
        assert_eq!(iter.nth(1), Some(&1));
        assert!(!iter.in_first());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn shifted_window_skips_unread_selection() {
        let items = [10, 11];
        let indexes = [9, 0];
        let tail = [20, 21];
        let view = join(indexing(&items, &indexes), &tail);
        assert_eq!(view.iter().nth(2), Some(&20));
        assert_eq!(shift(&view, 1, None).iter().copied().collect::<Vec<_>>(), [10, 20, 21]);
    }

    #[test]
    fn random_access_and_shift() {
        let a = [0, 1, 2];
        let b = [3, 4, 5];
        let view = shift(join(&a, &b), 2, 3);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(view.at(1), &3);
    }
}
