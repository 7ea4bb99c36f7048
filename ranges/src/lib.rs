//! Lazy, zero-copy views over sequences.
//!
//! Four view shapes are provided, and each of them is itself a [`Sequence`], so
//! they nest to any depth:
//!
//! | View | Constructor | Elements |
//! |------|-------------|----------|
//! | [`Shift`] | [`shift`] | the window `[pos, pos + len)` |
//! | [`Reverse`] | [`reverse`] | the elements back to front |
//! | [`Indexing`] | [`indexing`] | `items[indexes[i]]` for every `i` |
//! | [`Join`] | [`join`] | the first sequence, then the second |
//!
//! # Ownership and mutability
//!
//! A view stores whatever it was given. Passing `&seq` gives a read-only view,
//! passing `&mut seq` gives a view that can write through to `seq`, and passing
//! an owned value (a `Vec`, or another view) moves it into the view:
//!
//! ```
//! use cherry_ranges::{Sequence, SequenceMut, join, reverse, shift};
//!
//! let mut values = vec![0; 10];
//! shift(&mut values, 5, None).for_each_mut(|v| *v = 1);
//! assert_eq!(values, [0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
//!
//! // Views over views.
//! let tail = reverse(shift(&values, 3, 4));
//! assert_eq!(tail.iter().copied().collect::<Vec<_>>(), [1, 1, 0, 0]);
//!
//! // Owned storage.
//! let both = join(vec![1, 2], vec![3]);
//! assert_eq!(both.len(), 3);
//! ```
//!
//! Views never allocate. Mutability follows the storage type: a view over
//! `&Vec<T>` does not implement [`SequenceMut`], so this is rejected:
//!
//! ```compile_fail
//! use cherry_ranges::{SequenceMut, shift};
//!
//! let values = vec![0; 4];
//! shift(&values, 0, None).for_each_mut(|v| *v = 1);
//! ```
//!
//! Joined sequences must have the same element type:
//!
//! ```compile_fail
//! use cherry_ranges::join;
//!
//! let ints = vec![1i32, 2];
//! let bytes = vec![1u8, 2];
//! let _ = join(&ints, &bytes);
//! ```
//!
//! # Preconditions
//!
//! Out-of-range positions are programmer errors. [`Shift`] always validates its
//! window at construction. Per-element checks inside the views (such as an
//! index value pointing past the end of the items) run only with
//! `debug_assertions` or the `checked` feature; without them the access falls
//! through to the innermost container, which still panics rather than reading
//! out of bounds.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

macro_rules! precondition {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($cond, $($arg)+);
        }
    };
}

mod cursor;
mod indexing;
mod join;
mod reverse;
mod sequence;
mod shift;

pub use cursor::CursorMut;
pub use indexing::{Indexing, IndexingIter, indexing};
pub use join::{Join, JoinIter, JoinPosition, join};
pub use reverse::{Reverse, reverse};
pub use sequence::{Sequence, SequenceMut};
pub use shift::{Shift, shift, shift_from};

/// Implements `IntoIterator` for `&View` so views work directly in `for` loops.
macro_rules! impl_into_iterator {
    ($view:ident<$($param:ident),+> where $($bounds:tt)+) => {
        impl<'a, $($param),+> IntoIterator for &'a $view<$($param),+>
        where
            $($bounds)+
        {
            type Item = &'a <$view<$($param),+> as Sequence>::Item;
            type IntoIter = <$view<$($param),+> as Sequence>::Iter<'a>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                Sequence::iter(self)
            }
        }
    };
}

impl_into_iterator!(Shift<S> where S: Sequence);
impl_into_iterator!(Reverse<S> where S: Sequence);
impl_into_iterator!(Indexing<S, X> where S: Sequence, X: Sequence<Item = usize>);
impl_into_iterator!(Join<A, B> where A: Sequence, B: Sequence<Item = A::Item>);
