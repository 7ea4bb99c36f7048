//! Whole-sequence algorithms.
//!
//! Every function takes any [`Sequence`], so containers and views are
//! interchangeable:
//!
//! ```
//! use cherry::algo::{find, sum};
//! use cherry::shift;
//!
//! let values = vec![0, 1, 2, 3, 4];
//! assert_eq!(sum(&values), 10);
//! assert!(!find(&shift(&values, 1, None), &0));
//! ```

use core::hash::Hash;
use core::iter::Sum;

use cherry_ranges::{Sequence, SequenceMut};
use hashbrown::HashSet;

/// Copies `first` and then `second` into a new vector.
pub fn concat<A, B>(first: &A, second: &B) -> Vec<A::Item>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Clone,
{
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend(first.iter().cloned());
    out.extend(second.iter().cloned());
    out
}

/// Applies `f` to every element, collecting the results in order.
pub fn map<S, U, F>(seq: &S, f: F) -> Vec<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> U,
{
    seq.iter().map(f).collect()
}

pub fn sum<S>(seq: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Sum,
{
    seq.iter().cloned().sum()
}

/// Whether any value occurs more than once.
pub fn check_duplicate<S>(seq: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Hash + Eq,
{
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter().any(|item| !seen.insert(item))
}

pub fn for_each<S, F>(seq: &S, f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    seq.iter().for_each(f);
}

/// Calls `f` on every element mutably, front to back.
///
/// Pass views by value, e.g. `for_each_mut(&mut reverse(&mut v), f)`.
pub fn for_each_mut<S, F>(seq: &mut S, f: F)
where
    S: SequenceMut + ?Sized,
    F: FnMut(&mut S::Item),
{
    seq.for_each_mut(f);
}

pub fn all_of<S, F>(seq: &S, f: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    seq.iter().all(f)
}

pub fn any_of<S, F>(seq: &S, f: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    seq.iter().any(f)
}

pub fn none_of<S, F>(seq: &S, f: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    !any_of(seq, f)
}

/// Whether `value` is an element of `seq`.
pub fn find<S>(seq: &S, value: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    seq.iter().any(|item| item == value)
}
