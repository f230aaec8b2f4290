use std::fmt;
use std::ops::Range;

use crate::text::inline::diff_units;
use crate::text::render::{Brackets, DiffResult, Markup};
use crate::text::spaces::{classify_space_run, SpaceRun};
use crate::text::{TextDiff, Token, TokenOp};

/// Which version of the text an [`Annotated`] belongs to.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Side {
    /// The old text.  Changes on this side are removals.
    Old,
    /// The new text.  Changes on this side are additions.
    New,
}

/// The marker attached to a segment of annotated text.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Mark {
    /// Unchanged text.
    Plain,
    /// Removed (old side) or added (new side) text.
    Changed,
    /// A single whitespace character to be shown as a solid block.
    Block,
}

/// One version of the text split into marked segments.
///
/// The segments cover the source text in order and without gaps, so
/// concatenating them reproduces the source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<'s> {
    side: Side,
    source: &'s str,
    segments: Vec<(Mark, Range<usize>)>,
}

impl<'s> Annotated<'s> {
    fn new(side: Side, source: &'s str) -> Annotated<'s> {
        Annotated {
            side,
            source,
            segments: Vec::new(),
        }
    }

    /// Returns the side this annotation belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the text this annotation covers.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Returns the raw segments as byte ranges into [`source`](Self::source).
    pub fn segments(&self) -> &[(Mark, Range<usize>)] {
        &self.segments
    }

    /// Iterates over the marked segments.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &'s str)> + '_ {
        let source = self.source;
        self.segments
            .iter()
            .map(move |(mark, range)| (*mark, &source[range.clone()]))
    }

    /// Returns `true` if any segment carries a marker.
    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|(mark, _)| *mark != Mark::Plain)
    }

    /// Renders the annotation with the given markup.
    ///
    /// Line breaks are mapped to [`Markup::line_break`] as the very last
    /// step, so they are replaced inside marked segments too.
    pub fn render<M: Markup + ?Sized>(&self, markup: &M) -> String {
        let mut rv = String::with_capacity(self.source.len());
        for (mark, value) in self.iter() {
            match mark {
                Mark::Plain => markup.plain(&mut rv, value),
                Mark::Changed => markup.changed(&mut rv, self.side, value),
                Mark::Block => markup.block(&mut rv, self.side, value),
            }
        }
        match markup.line_break() {
            "\n" => rv,
            line_break => rv.replace('\n', line_break),
        }
    }

    fn push(&mut self, mark: Mark, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        debug_assert_eq!(
            self.segments.last().map_or(0, |x| x.1.end),
            range.start,
            "segments must be contiguous"
        );
        if mark != Mark::Block {
            if let Some((last_mark, last_range)) = self.segments.last_mut() {
                if *last_mark == mark && last_range.end == range.start {
                    last_range.end = range.end;
                    return;
                }
            }
        }
        self.segments.push((mark, range));
    }

    fn push_blocks(&mut self, range: Range<usize>) {
        let start = range.start;
        for (idx, c) in self.source[range].char_indices() {
            self.push(Mark::Block, start + idx..start + idx + c.len_utf8());
        }
    }

    fn push_space_run(&mut self, token: &Token<'_>, run: SpaceRun, fallback: Mark) {
        let range = token.range();
        match run {
            SpaceRun::Interior => {
                let first_len = token.as_str().chars().next().map_or(0, char::len_utf8);
                self.push(Mark::Plain, range.start..range.start + first_len);
                self.push_blocks(range.start + first_len..range.end);
            }
            SpaceRun::Highlighted => self.push_blocks(range),
            SpaceRun::Plain => self.push(fallback, range),
        }
    }

    /// Pushes one side of a matched pair of differing whitespace runs.
    fn push_matched_space(&mut self, tokens: &[Token<'_>], idx: usize, highlight_spaces: bool) {
        let token = &tokens[idx];
        if !highlight_spaces {
            self.push(Mark::Changed, token.range());
        } else {
            self.push_space_run(token, classify_space_run(tokens, idx), Mark::Plain);
        }
    }

    /// Pushes a token that has no counterpart on the other side.
    fn push_unmatched(&mut self, tokens: &[Token<'_>], idx: usize, highlight_spaces: bool) {
        let token = &tokens[idx];
        if highlight_spaces && token.is_space() {
            self.push_space_run(token, classify_space_run(tokens, idx), Mark::Changed);
        } else {
            self.push(Mark::Changed, token.range());
        }
    }

    fn push_inline(&mut self, offset: usize, values: &[(bool, Range<usize>)]) {
        for (emphasized, range) in values {
            let mark = if *emphasized {
                Mark::Changed
            } else {
                Mark::Plain
            };
            self.push(mark, offset + range.start..offset + range.end);
        }
    }
}

impl<'s> fmt::Display for Annotated<'s> {
    /// Renders with [`Brackets`] markup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Brackets))
    }
}

/// Both versions of the text with their change markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'old, 'new> {
    old: Annotated<'old>,
    new: Annotated<'new>,
}

impl<'old, 'new> Annotation<'old, 'new> {
    /// Returns the annotated old text.
    pub fn old(&self) -> &Annotated<'old> {
        &self.old
    }

    /// Returns the annotated new text.
    pub fn new(&self) -> &Annotated<'new> {
        &self.new
    }

    /// Returns `true` if either side carries a marker.
    pub fn has_changes(&self) -> bool {
        self.old.has_changes() || self.new.has_changes()
    }

    /// Renders both sides with the given markup.
    pub fn render<M: Markup + ?Sized>(&self, markup: &M) -> DiffResult {
        DiffResult {
            old_annotated: self.old.render(markup),
            new_annotated: self.new.render(markup),
        }
    }

    /// Splits the annotation into its two sides.
    pub fn into_parts(self) -> (Annotated<'old>, Annotated<'new>) {
        (self.old, self.new)
    }
}

/// Walks the operation stream of a diff and marks up both sides.
pub(crate) fn annotate<'old, 'new>(diff: &TextDiff<'old, 'new>) -> Annotation<'old, 'new> {
    let mut old = Annotated::new(Side::Old, diff.old_source());
    let mut new = Annotated::new(Side::New, diff.new_source());
    let highlight_spaces = diff.highlight_spaces();

    for change in diff.iter_all_token_ops() {
        match change {
            TokenOp::Match {
                old_index,
                new_index,
                old: old_token,
                new: new_token,
            } => {
                if old_token.as_str() == new_token.as_str() {
                    old.push(Mark::Plain, old_token.range());
                    new.push(Mark::Plain, new_token.range());
                } else if old_token.is_space() && new_token.is_space() {
                    old.push_matched_space(diff.old_tokens(), old_index, highlight_spaces);
                    new.push_matched_space(diff.new_tokens(), new_index, highlight_spaces);
                } else if old_token.is_space() || new_token.is_space() {
                    // whitespace paired with the empty token of an empty text
                    old.push_unmatched(diff.old_tokens(), old_index, highlight_spaces);
                    new.push_unmatched(diff.new_tokens(), new_index, highlight_spaces);
                } else {
                    let inline = diff_units(
                        old_token.as_str(),
                        new_token.as_str(),
                        diff.deadline(),
                        diff.graphemes(),
                    );
                    old.push_inline(old_token.offset(), inline.old_values());
                    new.push_inline(new_token.offset(), inline.new_values());
                }
            }
            TokenOp::Delete { old_index, .. } => {
                old.push_unmatched(diff.old_tokens(), old_index, highlight_spaces);
            }
            TokenOp::Insert { new_index, .. } => {
                new.push_unmatched(diff.new_tokens(), new_index, highlight_spaces);
            }
        }
    }

    debug_assert_eq!(old.segments.last().map_or(0, |x| x.1.end), old.source.len());
    debug_assert_eq!(new.segments.last().map_or(0, |x| x.1.end), new.source.len());

    Annotation { old, new }
}

#[cfg(test)]
fn brackets(old: &str, new: &str) -> (String, String) {
    let diff = TextDiff::new(old, new);
    let annotation = diff.annotate();
    (annotation.old().to_string(), annotation.new().to_string())
}

#[test]
fn test_word_substitution() {
    assert_eq!(
        brackets("The cat sat", "The cot sat"),
        ("The c[-a-]t sat".into(), "The c{+o+}t sat".into())
    );
}

#[test]
fn test_unrelated_words() {
    assert_eq!(
        brackets("go now", "go later"),
        ("go [-now-]".into(), "go {+later+}".into())
    );
}

#[test]
fn test_interior_double_space() {
    let diff = TextDiff::new("Hello  world", "Hello world");
    let annotation = diff.annotate();
    insta::assert_debug_snapshot!(annotation.old().iter().collect::<Vec<_>>(), @r###"
    [
        (
            Plain,
            "Hello ",
        ),
        (
            Block,
            " ",
        ),
        (
            Plain,
            "world",
        ),
    ]
    "###);
    assert!(!annotation.new().has_changes());
}

#[test]
fn test_spaces_without_highlighting() {
    let diff = TextDiff::configure()
        .highlight_spaces(false)
        .diff("Hello  world", "Hello world");
    let annotation = diff.annotate();
    assert_eq!(annotation.old().to_string(), "Hello[-  -]world");
    assert_eq!(annotation.new().to_string(), "Hello{+ +}world");
}

#[test]
fn test_inserted_space_between_words() {
    // "ab" does not look like any of "a", " " or "b", so everything on the
    // new side is an insertion.  The lone interior space is not a block.
    assert_eq!(brackets("ab", "a b"), ("[-ab-]".into(), "{+a b+}".into()));
}

#[test]
fn test_inserted_interior_spaces() {
    assert_eq!(
        brackets("ab", "a  b"),
        ("[-ab-]".into(), "{+a+} {_ _}{+b+}".into())
    );
    assert_eq!(
        brackets("a  b", "ab"),
        ("[-a-] [_ _][-b-]".into(), "{+ab+}".into())
    );
}

#[test]
fn test_inserted_trailing_spaces() {
    assert_eq!(
        brackets("end", "end  "),
        ("end".into(), "end{_ _}{_ _}".into())
    );
}

#[test]
fn test_case_only_change() {
    assert_eq!(
        brackets("Rust is fun", "rust is fun"),
        ("[-R-]ust is fun".into(), "{+r+}ust is fun".into())
    );
}

#[test]
fn test_segments_cover_source() {
    let diff = TextDiff::new("a  b\tc\n", " a b  d");
    let annotation = diff.annotate();
    assert_eq!(
        annotation.old().iter().map(|x| x.1).collect::<String>(),
        "a  b\tc\n"
    );
    assert_eq!(
        annotation.new().iter().map(|x| x.1).collect::<String>(),
        " a b  d"
    );
}
