//! Nesting views inside views.

use std::collections::VecDeque;

use cherry_ranges::{
    Indexing, Join, Reverse, Sequence, SequenceMut, Shift, indexing, join, reverse, shift,
    shift_from,
};
use pretty_assertions::assert_eq;

fn collect<S: Sequence>(seq: &S) -> Vec<S::Item>
where
    S::Item: Clone,
{
    seq.iter().cloned().collect()
}

fn collect_back<S: Sequence>(seq: &S) -> Vec<S::Item>
where
    S::Item: Clone,
{
    seq.iter().rev().cloned().collect()
}

/// Random access and both traversal directions must agree.
fn assert_consistent<S: Sequence>(seq: &S)
where
    S::Item: Clone + PartialEq + std::fmt::Debug,
{
    let forward = collect(seq);
    let mut backward = collect_back(seq);
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), seq.len());
    assert_eq!(seq.iter().len(), seq.len());
    for (i, item) in forward.iter().enumerate() {
        assert_eq!(seq.at(i), item);
    }
    assert_eq!(seq.checked_at(seq.len()), None);
}

// =============================================================================
// Window arithmetic
// =============================================================================

#[test]
fn every_window_of_a_sequence() {
    let values: Vec<u32> = (0..8).collect();
    for pos in 0..=values.len() {
        for len in 0..=values.len() - pos {
            let view = shift(&values, pos, len);
            assert_eq!(collect(&view), values[pos..pos + len].to_vec());
            assert_consistent(&view);
        }
    }
}

#[test]
fn reversing_a_window_matches_window_of_reversal() {
    let values: Vec<u32> = (0..8).collect();
    let n = values.len();
    for pos in 0..=n {
        for len in 0..=n - pos {
            let lhs = reverse(shift(&values, pos, len));
            let rhs = shift(reverse(&values), n - pos - len, len);
            assert_eq!(collect(&lhs), collect(&rhs));
        }
    }
}

// =============================================================================
// Closure under composition
// =============================================================================

#[test]
fn composition_closure() {
    let items: Vec<i32> = (0..10).collect();
    let indexes: Vec<usize> = vec![4, 3, 2, 1, 0];
    let (a, b, c) = (vec![1, 2], vec![3], vec![4, 5, 6]);

    assert_consistent(&reverse(shift(&items, 2, 5)));
    assert_consistent(&shift(reverse(&items), 2, 5));
    assert_consistent(&indexing(&items, reverse(&indexes)));
    assert_consistent(&join(join(&a, &b), &c));
    assert_consistent(&reverse(indexing(&items, &indexes)));
    assert_consistent(&reverse(join(shift(&items, 7, None), indexing(&items, &indexes))));

    assert_eq!(collect(&join(join(&a, &b), &c)), [1, 2, 3, 4, 5, 6]);
    assert_eq!(collect(&indexing(&items, &indexes)), [4, 3, 2, 1, 0]);
    assert_eq!(collect(&reverse(indexing(&items, &indexes))), [0, 1, 2, 3, 4]);
}

#[test]
fn deep_nesting_writes_through() {
    let mut items: Vec<i32> = (0..10).collect();
    let mut extra = VecDeque::from(vec![100, 200]);
    let indexes = [4usize, 0];

    let mut view = reverse(join(indexing(shift_from(&mut items, 5), &indexes), &mut extra));
    assert_eq!(view.len(), 4);
    assert_eq!(collect(&view), [200, 100, 5, 9]);

    *view.at_mut(0) = -1;
    view.for_each_mut(|v| *v *= 2);
    drop(view);

    assert_eq!(items, [0, 1, 2, 3, 4, 10, 6, 7, 8, 18]);
    assert_eq!(extra, [200, -2]);
}

#[test]
fn join_of_two_empties() {
    let (a, b): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
    let mut count = 0;
    for _ in &join(&a, &b) {
        count += 1;
    }
    assert_eq!(count, 0);
    assert_consistent(&join(&a, &b));
}

#[test]
fn views_in_for_loops() {
    let values = vec![1, 2, 3, 4];
    let mut seen = Vec::new();
    for v in &shift(&values, 1, 2) {
        seen.push(*v);
    }
    for v in &reverse(&values) {
        seen.push(*v);
    }
    assert_eq!(seen, [2, 3, 4, 3, 2, 1]);
}

#[test]
fn iteration_is_restartable() {
    let values = vec![1, 2, 3];
    let view = join(&values, reverse(&values));
    let first: Vec<_> = view.iter().collect();
    let second: Vec<_> = view.iter().collect();
    assert_eq!(first, second);

    let mut owned = join(vec![1, 2], vec![3]);
    let mut cursor = owned.cursor_mut();
    cursor.next_mut();
    drop(cursor);
    assert_eq!(owned.cursor_mut().remaining(), 3);
}

#[test]
fn owned_and_borrowed_storage() {
    let borrowed = vec![1, 2, 3];
    let view = join(&borrowed, vec![4, 5]);
    assert_eq!(collect(&view), [1, 2, 3, 4, 5]);

    let (first, second) = view.into_parts();
    assert_eq!(first, &borrowed);
    assert_eq!(second, [4, 5]);

    let mut owned = reverse(vec![1, 2, 3]);
    *owned.at_mut(0) = 30;
    assert_eq!(owned.into_inner(), [1, 2, 30]);
}

// =============================================================================
// Type-level guarantees
// =============================================================================

type Slice = &'static [i32];
type SliceMut = &'static mut [i32];

static_assertions::assert_impl_all!(Shift<SliceMut>: SequenceMut);
static_assertions::assert_impl_all!(Reverse<SliceMut>: SequenceMut);
static_assertions::assert_impl_all!(Indexing<SliceMut, &'static [usize]>: SequenceMut);
static_assertions::assert_impl_all!(Join<SliceMut, SliceMut>: SequenceMut);

static_assertions::assert_not_impl_any!(Shift<Slice>: SequenceMut);
static_assertions::assert_not_impl_any!(Reverse<Slice>: SequenceMut);
static_assertions::assert_not_impl_any!(Indexing<Slice, &'static [usize]>: SequenceMut);
static_assertions::assert_not_impl_any!(Join<SliceMut, Slice>: SequenceMut);
static_assertions::assert_not_impl_any!(Reverse<Shift<Join<Slice, SliceMut>>>: SequenceMut);

// Views add no storage beyond what they wrap.
static_assertions::assert_eq_size!(Reverse<Slice>, Slice);
static_assertions::assert_eq_size!(Shift<Slice>, (Slice, usize, usize));
static_assertions::assert_eq_size!(Join<Slice, Slice>, (Slice, Slice));
