use alloc::collections::{VecDeque, vec_deque};
use alloc::vec::Vec;
use core::slice;

use crate::CursorMut;

/// A finite, ordered collection with constant-time length and random access.
///
/// Traversal goes through [`Sequence::iter`], which hands out a fresh
/// double-ended iterator on every call: `next` walks forward and `next_back`
/// walks backward.
///
/// Views are sequences too, which is what lets them nest.
pub trait Sequence {
    type Item;

    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Item> + ExactSizeIterator
    where
        Self: 'a;

    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// `index` must be less than [`len`](Sequence::len).
    fn at(&self, index: usize) -> &Self::Item;

    fn iter(&self) -> Self::Iter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked [`at`](Sequence::at).
    #[inline]
    fn checked_at(&self, index: usize) -> Option<&Self::Item> {
        if index < self.len() {
            Some(self.at(index))
        } else {
            None
        }
    }
}

/// A [`Sequence`] whose elements can be written in place.
pub trait SequenceMut: Sequence {
    /// Returns the element at `index` mutably.
    ///
    /// `index` must be less than [`len`](Sequence::len).
    fn at_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Bounds-checked [`at_mut`](SequenceMut::at_mut).
    #[inline]
    fn checked_at_mut(&mut self, index: usize) -> Option<&mut Self::Item> {
        if index < self.len() {
            Some(self.at_mut(index))
        } else {
            None
        }
    }

    /// Starts a new mutable traversal from both ends.
    #[inline]
    fn cursor_mut(&mut self) -> CursorMut<'_, Self> {
        CursorMut::new(self)
    }

    /// Calls `f` on every element, front to back.
    fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Self::Item),
    {
        let mut cursor = self.cursor_mut();
        while let Some(item) = cursor.next_mut() {
            f(item);
        }
    }
}

// --- Containers ---

impl<T> Sequence for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        <[T]>::iter_mut(self).for_each(f);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> SequenceMut for Vec<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.as_mut_slice().iter_mut().for_each(f);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Sequence for smallvec::SmallVec<A> {
    type Item = A::Item;
    type Iter<'a>
        = slice::Iter<'a, A::Item>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &A::Item {
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> SequenceMut for smallvec::SmallVec<A> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut A::Item {
        &mut self[index]
    }
}

// --- Borrowed storage ---
//
// A shared borrow is read-only even when the target is mutable; only `&mut S`
// forwards `SequenceMut`.

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        (**self).at(index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        (**self).at(index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for &mut S {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut S::Item {
        (**self).at_mut(index)
    }

    #[inline]
    fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut S::Item),
    {
        (**self).for_each_mut(f);
    }
}
