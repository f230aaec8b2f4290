//! LCS alignment with a pluggable comparison predicate.
//!
//! * time: `O(NM)`
//! * space `O(NM)`
//!
//! Unlike a plain equality based diff the predicate does not have to be an
//! equivalence relation.  Fuzzy predicates (such as "these two words look
//! alike") are supported, which is why no common suffix is stripped: the
//! walk always starts at the front and pairs up items greedily whenever the
//! predicate accepts them.
//!
//! On ties the walk consumes the new sequence first, so an insertion is
//! reported before the deletion it competes with.
use std::ops::{Index, Range};
use std::time::Instant;

use crate::algorithms::utils::common_prefix_len_by;
use crate::algorithms::DiffHook;
use crate::deadline_support::deadline_exceeded;

/// LCS alignment using `PartialEq` as the comparison predicate.
///
/// Diff `old`, between indices `old_range` and `new` between indices `new_range`.
pub fn diff<Old, New, D>(
    d: &mut D,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> Result<(), D::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    D: DiffHook,
    New::Output: PartialEq<Old::Output>,
{
    diff_deadline_by(d, old, old_range, new, new_range, None, |a, b| b == a)
}

/// LCS alignment with a custom comparison predicate.
///
/// `eq` is called with an item of the old sequence and an item of the new
/// sequence and decides if the two are to be paired up.
pub fn diff_by<Old, New, D, F>(
    d: &mut D,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    eq: F,
) -> Result<(), D::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    D: DiffHook,
    F: Fn(&Old::Output, &New::Output) -> bool,
{
    diff_deadline_by(d, old, old_range, new, new_range, None, eq)
}

/// LCS alignment with a custom comparison predicate and an optional deadline.
///
/// If the deadline passes while the score table is being built the
/// remaining (non prefix) items are reported as one insertion followed by
/// one deletion.
pub fn diff_deadline_by<Old, New, D, F>(
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
    let prefix_len = common_prefix_len_by(old, old_range.clone(), new, new_range.clone(), &eq);
    if prefix_len > 0 {
        d.equal(old_range.start, new_range.start, prefix_len)?;
    }

    let old_start = old_range.start + prefix_len;
    let new_start = new_range.start + prefix_len;
    let old_len = old_range.end.saturating_sub(old_start);
    let new_len = new_range.end.saturating_sub(new_start);

    if new_len == 0 {
        if old_len > 0 {
            d.delete(old_start, old_len, new_start)?;
        }
        return d.finish();
    } else if old_len == 0 {
        d.insert(old_start, new_start, new_len)?;
        return d.finish();
    }

    let maybe_table = make_table(
        old,
        old_start..old_range.end,
        new,
        new_start..new_range.end,
        deadline,
        &eq,
    );
    let table = match maybe_table {
        Some(table) => table,
        None => {
            tracing::debug!(old_len, new_len, "deadline exceeded, reporting full replacement");
            d.insert(old_start, new_start, new_len)?;
            d.delete(old_start, old_len, new_start + new_len)?;
            return d.finish();
        }
    };

    let mut old_idx = 0;
    let mut new_idx = 0;
    while old_idx < old_len && new_idx < new_len {
        let old_orig_idx = old_start + old_idx;
        let new_orig_idx = new_start + new_idx;

        if eq(&old[old_orig_idx], &new[new_orig_idx]) {
            d.equal(old_orig_idx, new_orig_idx, 1)?;
            old_idx += 1;
            new_idx += 1;
        } else if table.get(old_idx, new_idx + 1) >= table.get(old_idx + 1, new_idx) {
            d.insert(old_orig_idx, new_orig_idx, 1)?;
            new_idx += 1;
        } else {
            d.delete(old_orig_idx, 1, new_orig_idx)?;
            old_idx += 1;
        }
    }

    if new_idx < new_len {
        d.insert(old_start + old_idx, new_start + new_idx, new_len - new_idx)?;
        new_idx = new_len;
    }

    if old_idx < old_len {
        d.delete(old_start + old_idx, old_len - old_idx, new_start + new_idx)?;
    }

    d.finish()
}

/// Dense LCS score table.
///
/// `get(i, j)` is the length of the longest common subsequence of
/// `old[i..]` and `new[j..]` (relative to the ranges the table was built
/// for).  Row `old_len` and column `new_len` are the zero border.
#[derive(Debug, PartialEq)]
struct Table {
    cells: Vec<u32>,
    width: usize,
}

impl Table {
    fn new(old_len: usize, new_len: usize) -> Table {
        Table {
            cells: vec![0; (old_len + 1) * (new_len + 1)],
            width: new_len + 1,
        }
    }

    #[inline(always)]
    fn get(&self, old_idx: usize, new_idx: usize) -> u32 {
        self.cells[old_idx * self.width + new_idx]
    }

    #[inline(always)]
    fn set(&mut self, old_idx: usize, new_idx: usize, value: u32) {
        self.cells[old_idx * self.width + new_idx] = value;
    }
}

fn make_table<Old, New, F>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    deadline: Option<Instant>,
    eq: &F,
) -> Option<Table>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: Fn(&Old::Output, &New::Output) -> bool,
{
    let old_len = old_range.len();
    let new_len = new_range.len();
    let mut table = Table::new(old_len, new_len);

    for i in (0..old_len).rev() {
        // are we running for too long?  give up on the table
        if deadline_exceeded(deadline) {
            return None;
        }

        for j in (0..new_len).rev() {
            let val = if eq(&old[old_range.start + i], &new[new_range.start + j]) {
                table.get(i + 1, j + 1) + 1
            } else {
                table.get(i + 1, j).max(table.get(i, j + 1))
            };
            table.set(i, j, val);
        }
    }

    Some(table)
}

#[test]
fn test_table() {
    let eq = |a: &i32, b: &i32| a == b;
    let table = make_table(&vec![2, 3], 0..2, &vec![0, 1, 2], 0..3, None, &eq).unwrap();
    assert_eq!(table.get(0, 0), 1);
    assert_eq!(table.get(0, 2), 1);
    assert_eq!(table.get(1, 0), 0);
    assert_eq!(table.get(2, 3), 0);
}

#[test]
fn test_diff() {
    let a: &[usize] = &[0, 1, 2, 3, 4];
    let b: &[usize] = &[0, 1, 2, 9, 4];

    let mut d = crate::algorithms::Capture::new();
    diff(&mut d, a, 0..a.len(), b, 0..b.len()).unwrap();
    insta::assert_debug_snapshot!(d.ops(), @r###"
    [
        Equal {
            old_index: 0,
            new_index: 0,
            len: 3,
        },
        Insert {
            old_index: 3,
            new_index: 3,
            new_len: 1,
        },
        Delete {
            old_index: 3,
            old_len: 1,
            new_index: 4,
        },
        Equal {
            old_index: 4,
            new_index: 4,
            len: 1,
        },
    ]
    "###);
}

#[test]
fn test_insert_wins_ties() {
    let a: &[char] = &['a', 't'];
    let b: &[char] = &['o', 't'];

    let mut d = crate::algorithms::Capture::new();
    diff(&mut d, a, 0..a.len(), b, 0..b.len()).unwrap();
    let tags = d
        .ops()
        .iter()
        .map(|op| op.tag())
        .collect::<Vec<_>>();
    use crate::algorithms::DiffTag::*;
    assert_eq!(tags, vec![Insert, Delete, Equal]);
}

#[test]
fn test_fuzzy_predicate() {
    let a: &[&str] = &["Hello", "World"];
    let b: &[&str] = &["hello", "there", "world"];

    let mut d = crate::algorithms::Capture::new();
    diff_by(&mut d, a, 0..a.len(), b, 0..b.len(), |x: &&str, y: &&str| {
        x.eq_ignore_ascii_case(y)
    })
    .unwrap();
    insta::assert_debug_snapshot!(d.ops(), @r###"
    [
        Equal {
            old_index: 0,
            new_index: 0,
            len: 1,
        },
        Insert {
            old_index: 1,
            new_index: 1,
            new_len: 1,
        },
        Equal {
            old_index: 1,
            new_index: 2,
            len: 1,
        },
    ]
    "###);
}

#[test]
fn test_one_side_empty() {
    let a: &[u8] = b"abc";
    let b: &[u8] = b"";

    let mut d = crate::algorithms::Capture::new();
    diff(&mut d, a, 0..a.len(), b, 0..b.len()).unwrap();
    assert_eq!(
        d.ops(),
        &[crate::algorithms::DiffOp::Delete {
            old_index: 0,
            old_len: 3,
            new_index: 0,
        }]
    );

    let mut d = crate::algorithms::Capture::new();
    diff(&mut d, b, 0..b.len(), a, 0..a.len()).unwrap();
    assert_eq!(
        d.ops(),
        &[crate::algorithms::DiffOp::Insert {
            old_index: 0,
            new_index: 0,
            new_len: 3,
        }]
    );
}

#[test]
fn test_expired_deadline_falls_back() {
    use std::time::Duration;

    let a: &[usize] = &[0, 1, 2, 3];
    let b: &[usize] = &[0, 3, 2, 1];
    let deadline = Instant::now()
        .checked_sub(Duration::from_secs(1))
        .unwrap_or_else(Instant::now);
    std::thread::sleep(Duration::from_millis(1));

    let mut d = crate::algorithms::Capture::new();
    diff_deadline_by(&mut d, a, 0..a.len(), b, 0..b.len(), Some(deadline), |x, y| x == y)
        .unwrap();
    insta::assert_debug_snapshot!(d.ops(), @r###"
    [
        Equal {
            old_index: 0,
            new_index: 0,
            len: 1,
        },
        Insert {
            old_index: 1,
            new_index: 1,
            new_len: 3,
        },
        Delete {
            old_index: 1,
            old_len: 3,
            new_index: 4,
        },
    ]
    "###);
}
