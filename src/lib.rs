//! Cherry - small generic helpers for performance-sensitive code
//!
//! # Overview
//!
//! - [`NanoTimer`]: lap timer with nanosecond resolution
//! - [`Random`]: seedable uniform generator over a closed interval
//! - Lazy views over sequences ([`shift`], [`reverse`], [`indexing`], [`join`]),
//!   re-exported from `cherry-ranges`
//! - [`algo`]: sum, duplicate checks, predicates and friends over any view
//! - [`pretty`] and [`units`]: human-readable sizes and durations
//! - [`color`]: ANSI console colours
//! - [`Bitset`]: fixed-capacity bitset, re-exported from `cherry-bitset`
//!
//! # Quick Start
//!
//! ```
//! use cherry::algo::{check_duplicate, sum};
//! use cherry::{Sequence, SequenceMut, indexing, join, reverse, shift};
//!
//! let mut values = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! // Zero the last half, back to front.
//! reverse(shift(&mut values, 5, None)).for_each_mut(|v| *v = 0);
//! assert_eq!(sum(&values), 10);
//!
//! // Views compose freely and never copy.
//! let order = [4, 3, 2, 1, 0];
//! let picked = join(indexing(&values, &order), shift(&values, 5, 2));
//! assert_eq!(picked.iter().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0, 0, 0]);
//! assert!(check_duplicate(&picked));
//! ```
//!
//! # Features
//!
//! - `checked`: keep per-element view preconditions in release builds
//! - `smallvec`: implement [`Sequence`] for `SmallVec`

pub mod algo;
pub mod color;
mod error;
pub mod pretty;
pub mod random;
pub mod timer;
pub mod units;

pub use cherry_bitset::Bitset;
pub use cherry_ranges::{
    CursorMut, Indexing, IndexingIter, Join, JoinIter, JoinPosition, Reverse, Sequence,
    SequenceMut, Shift, indexing, join, reverse, shift, shift_from,
};
pub use error::{Error, Result};
pub use pretty::{pretty_bytes, pretty_nanoseconds};
pub use random::{Random, global_random_int};
pub use timer::NanoTimer;
