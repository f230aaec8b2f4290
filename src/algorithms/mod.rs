//! Generic LCS alignment.
//!
//! The implementation in this module is relatively low level and exposes the
//! most generic bounds possible.  It works on two indexable objects (for
//! instance slices) and reports its results to a [`DiffHook`].  Note that the
//! diff hook does not get access to the actual values but only the indexes.
//!
//! What makes this alignment different from a classic diff is that the
//! comparison is a predicate supplied by the caller rather than `Eq`.  The
//! [`text`](crate::text) module uses this to pair up words that merely look
//! alike, and characters that only differ in case.

mod capture;
mod hook;
pub mod lcs;
pub mod utils;

use std::ops::{Index, Range};
use std::time::Instant;

pub use capture::*;
pub use hook::*;

/// Creates an alignment between old and new using `eq` as comparison.
///
/// Diffs `old`, between indices `old_range` and `new` between indices `new_range`.
pub fn diff_by<Old, New, D, F>(
    d: &mut D,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    deadline: Option<Instant>,
    eq: F,
) -> Result<(), D::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    D: DiffHook,
    F: Fn(&Old::Output, &New::Output) -> bool,
{
    lcs::diff_deadline_by(d, old, old_range, new, new_range, deadline, eq)
}

/// Creates an alignment between old and new capturing the ops.
///
/// This is like [`diff_by`] but instead of using an arbitrary hook this will
/// always use [`Capture`] and return the captured [`DiffOp`]s.
pub fn capture_diff_by<Old, New, F>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    deadline: Option<Instant>,
    eq: F,
) -> Vec<DiffOp>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: Fn(&Old::Output, &New::Output) -> bool,
{
    let mut d = Capture::new();
    match diff_by(&mut d, old, old_range, new, new_range, deadline, eq) {
        Ok(()) => d.into_ops(),
        Err(never) => match never {},
    }
}

/// Shortcut for capturing the alignment of two slices with `PartialEq`.
pub fn capture_diff_slices<T: PartialEq>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    capture_diff_by(old, 0..old.len(), new, 0..new.len(), None, |a, b| a == b)
}

#[test]
fn test_capture_diff_slices() {
    let ops = capture_diff_slices(&["a", "b", "c"], &["a", "x", "c"]);
    assert_eq!(
        ops.iter().map(|op| op.tag()).collect::<Vec<_>>(),
        vec![DiffTag::Equal, DiffTag::Insert, DiffTag::Delete, DiffTag::Equal]
    );
}
