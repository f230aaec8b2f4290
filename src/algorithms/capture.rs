use std::convert::Infallible;
use std::ops::Range;

use crate::algorithms::hook::DiffHook;

/// The tag of a diff operation.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum DiffTag {
    /// The diff op encodes an equal segment.
    Equal,
    /// The diff op encodes a deleted segment.
    Delete,
    /// The diff op encodes an inserted segment.
    Insert,
}

/// Utility enum to capture a diff operation.
///
/// This is used by [`Capture`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case", tag = "op")
)]
pub enum DiffOp {
    /// A segment is equal (see [`DiffHook::equal`])
    Equal {
        old_index: usize,
        new_index: usize,
        len: usize,
    },
    /// A segment was deleted (see [`DiffHook::delete`])
    Delete {
        old_index: usize,
        old_len: usize,
        new_index: usize,
    },
    /// A segment was inserted (see [`DiffHook::insert`])
    Insert {
        old_index: usize,
        new_index: usize,
        new_len: usize,
    },
}

impl DiffOp {
    /// Returns the tag of the operation.
    pub fn tag(self) -> DiffTag {
        self.as_tag_tuple().0
    }

    /// Returns the old range.
    pub fn old_range(&self) -> Range<usize> {
        self.as_tag_tuple().1
    }

    /// Returns the new range.
    pub fn new_range(&self) -> Range<usize> {
        self.as_tag_tuple().2
    }

    /// Transform the op into a tuple of diff tag and ranges.
    ///
    /// This is useful when operating on slices.  The returned format is
    /// `(tag, i1..i2, j1..j2)`:
    ///
    /// * `Equal`: `a[i1..i2] == b[j1..j2]`
    /// * `Delete`: `a[i1..i2]` should be deleted (`j1 == j2` in this case).
    /// * `Insert`: `b[j1..j2]` should be inserted at `a[i1..i2]` (`i1 == i2` in this case).
    pub fn as_tag_tuple(&self) -> (DiffTag, Range<usize>, Range<usize>) {
        match *self {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => (
                DiffTag::Equal,
                old_index..old_index + len,
                new_index..new_index + len,
            ),
            DiffOp::Delete {
                old_index,
                new_index,
                old_len,
            } => (
                DiffTag::Delete,
                old_index..old_index + old_len,
                new_index..new_index,
            ),
            DiffOp::Insert {
                old_index,
                new_index,
                new_len,
            } => (
                DiffTag::Insert,
                old_index..old_index,
                new_index..new_index + new_len,
            ),
        }
    }
}

/// A [`DiffHook`] that captures all diff operations.
///
/// Consecutive operations of the same kind that continue each other are
/// merged into a single op, so a run of single item matches comes out as
/// one [`DiffOp::Equal`].
#[derive(Default, Clone)]
pub struct Capture(Vec<DiffOp>);

impl Capture {
    /// Creates a new capture hook.
    pub fn new() -> Capture {
        Capture::default()
    }

    /// Converts the capture hook into a vector of ops.
    pub fn into_ops(self) -> Vec<DiffOp> {
        self.0
    }

    /// Accesses the captured operations.
    pub fn ops(&self) -> &[DiffOp] {
        &self.0
    }
}

impl DiffHook for Capture {
    type Error = Infallible;

    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Self::Error> {
        if let Some(DiffOp::Equal {
            old_index: last_old,
            new_index: last_new,
            len: last_len,
        }) = self.0.last_mut()
        {
            if *last_old + *last_len == old_index && *last_new + *last_len == new_index {
                *last_len += len;
                return Ok(());
            }
        }
        self.0.push(DiffOp::Equal {
            old_index,
            new_index,
            len,
        });
        Ok(())
    }

    fn delete(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
    ) -> Result<(), Self::Error> {
        if let Some(DiffOp::Delete {
            old_index: last_old,
            old_len: last_len,
            new_index: last_new,
        }) = self.0.last_mut()
        {
            if *last_old + *last_len == old_index && *last_new == new_index {
                *last_len += old_len;
                return Ok(());
            }
        }
        self.0.push(DiffOp::Delete {
            old_index,
            old_len,
            new_index,
        });
        Ok(())
    }

    fn insert(
        &mut self,
        old_index: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Self::Error> {
        if let Some(DiffOp::Insert {
            old_index: last_old,
            new_index: last_new,
            new_len: last_len,
        }) = self.0.last_mut()
        {
            if *last_old == old_index && *last_new + *last_len == new_index {
                *last_len += new_len;
                return Ok(());
            }
        }
        self.0.push(DiffOp::Insert {
            old_index,
            new_index,
            new_len,
        });
        Ok(())
    }
}

#[test]
fn test_capture_merges_runs() {
    let mut d = Capture::new();
    d.equal(0, 0, 1).unwrap();
    d.equal(1, 1, 1).unwrap();
    d.insert(2, 2, 1).unwrap();
    d.insert(2, 3, 1).unwrap();
    d.delete(2, 1, 4).unwrap();
    d.delete(3, 1, 4).unwrap();
    d.equal(4, 4, 1).unwrap();
    insta::assert_debug_snapshot!(d.ops(), @r###"
    [
        Equal {
            old_index: 0,
            new_index: 0,
            len: 2,
        },
        Insert {
            old_index: 2,
            new_index: 2,
            new_len: 2,
        },
        Delete {
            old_index: 2,
            old_len: 2,
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
fn test_tag_tuples() {
    let op = DiffOp::Delete {
        old_index: 3,
        old_len: 2,
        new_index: 1,
    };
    assert_eq!(op.tag(), DiffTag::Delete);
    assert_eq!(op.old_range(), 3..5);
    assert_eq!(op.new_range(), 1..1);

    let op = DiffOp::Insert {
        old_index: 3,
        new_index: 1,
        new_len: 4,
    };
    assert_eq!(op.as_tag_tuple(), (DiffTag::Insert, 3..3, 1..5));
}
