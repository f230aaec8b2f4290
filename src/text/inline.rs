use std::ops::Range;
use std::time::Instant;

use crate::algorithms::{capture_diff_by, DiffOp};

/// Character level alignment of two similar words.
///
/// Each side is a list of `(emphasized, range)` pairs covering the whole
/// word, ranges being byte offsets into that word.  A unit is emphasized if
/// it only exists on one side or if it only matched the other side when
/// ignoring case.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct InlineDiff {
    old: Vec<(bool, Range<usize>)>,
    new: Vec<(bool, Range<usize>)>,
}

impl InlineDiff {
    /// Returns the units of the old word.
    pub fn old_values(&self) -> &[(bool, Range<usize>)] {
        &self.old
    }

    /// Returns the units of the new word.
    pub fn new_values(&self) -> &[(bool, Range<usize>)] {
        &self.new
    }

    /// Returns `true` if any unit on either side is emphasized.
    pub fn has_emphasis(&self) -> bool {
        self.old.iter().chain(self.new.iter()).any(|x| x.0)
    }
}

/// Splits a word into the units the character alignment works on.
fn split_units(s: &str, graphemes: bool) -> Vec<Range<usize>> {
    #[cfg(feature = "unicode")]
    {
        if graphemes {
            use unicode_segmentation::UnicodeSegmentation;
            return s
                .grapheme_indices(true)
                .map(|(idx, g)| idx..idx + g.len())
                .collect();
        }
    }
    #[cfg(not(feature = "unicode"))]
    {
        let _ = graphemes;
    }
    s.char_indices()
        .map(|(idx, c)| idx..idx + c.len_utf8())
        .collect()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Aligns two words unit by unit.
///
/// The units are characters, or grapheme clusters if `graphemes` is set and
/// the `unicode` feature is enabled.  Units are paired up when they are
/// equal ignoring case.
pub fn diff_units(old: &str, new: &str, deadline: Option<Instant>, graphemes: bool) -> InlineDiff {
    let old_units = split_units(old, graphemes)
        .into_iter()
        .map(|range| (&old[range.clone()], range))
        .collect::<Vec<_>>();
    let new_units = split_units(new, graphemes)
        .into_iter()
        .map(|range| (&new[range.clone()], range))
        .collect::<Vec<_>>();

    let ops = capture_diff_by(
        &old_units[..],
        0..old_units.len(),
        &new_units[..],
        0..new_units.len(),
        deadline,
        |a, b| eq_ignore_case(a.0, b.0),
    );

    let mut rv = InlineDiff::default();
    for op in ops {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                let pairs = old_units[old_index..old_index + len]
                    .iter()
                    .zip(new_units[new_index..new_index + len].iter());
                for ((old_value, old_range), (new_value, new_range)) in pairs {
                    let emphasized = old_value != new_value;
                    rv.old.push((emphasized, old_range.clone()));
                    rv.new.push((emphasized, new_range.clone()));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for (_, range) in &old_units[old_index..old_index + old_len] {
                    rv.old.push((true, range.clone()));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for (_, range) in &new_units[new_index..new_index + new_len] {
                    rv.new.push((true, range.clone()));
                }
            }
        }
    }

    tracing::trace!(old, new, emphasized = rv.has_emphasis(), "aligned characters");
    rv
}

#[cfg(test)]
fn render(word: &str, values: &[(bool, Range<usize>)]) -> String {
    values
        .iter()
        .map(|(emphasized, range)| {
            if *emphasized {
                format!("({})", &word[range.clone()])
            } else {
                word[range.clone()].to_string()
            }
        })
        .collect()
}

#[test]
fn test_substitution() {
    let diff = diff_units("cat", "cot", None, false);
    assert_eq!(render("cat", diff.old_values()), "c(a)t");
    assert_eq!(render("cot", diff.new_values()), "c(o)t");
}

#[test]
fn test_case_change_is_emphasized() {
    let diff = diff_units("Hello", "hello", None, false);
    assert_eq!(render("Hello", diff.old_values()), "(H)ello");
    assert_eq!(render("hello", diff.new_values()), "(h)ello");
}

#[test]
fn test_insertion_and_deletion() {
    let diff = diff_units("colour", "color", None, false);
    assert_eq!(render("colour", diff.old_values()), "colo(u)r");
    assert_eq!(render("color", diff.new_values()), "color");

    let diff = diff_units("word", "words", None, false);
    assert_eq!(render("word", diff.old_values()), "word");
    assert_eq!(render("words", diff.new_values()), "word(s)");
}

#[test]
fn test_multibyte_ranges() {
    let diff = diff_units("straße", "strasse", None, false);
    assert_eq!(render("straße", diff.old_values()), "stra(ß)e");
    assert_eq!(render("strasse", diff.new_values()), "stra(s)(s)e");
    assert!(diff.has_emphasis());
}

#[test]
fn test_identical_words() {
    let diff = diff_units("same", "same", None, false);
    assert!(!diff.has_emphasis());
    assert_eq!(diff.old_values().len(), 4);
}

#[cfg(feature = "unicode")]
#[test]
fn test_grapheme_units() {
    // "e" followed by a combining acute accent
    let old = "cafe\u{301}";
    let new = "cafe";
    let diff = diff_units(old, new, None, true);
    assert_eq!(render(old, diff.old_values()), "caf(e\u{301})");
    assert_eq!(render(new, diff.new_values()), "caf(e)");

    let diff = diff_units(old, new, None, false);
    assert_eq!(render(old, diff.old_values()), "cafe(\u{301})");
}
