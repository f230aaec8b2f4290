//! Text comparison at word and character level.
//!
//! The main type you want to work with is [`TextDiff`].  It splits both texts
//! into alternating runs of whitespace and non whitespace ([`Token`]s),
//! aligns the two token sequences and can then mark up both texts for
//! display.
//!
//! # Alignment
//!
//! Tokens are not compared for equality but for similarity (see
//! [`tokens_similar`]): words that only differ in case or in a few letters
//! at the same positions are paired up, and any two whitespace runs are
//! paired up regardless of their length.  The alignment maximizes the
//! number of such pairs.
//!
//! A pair whose texts are identical is left alone.  Other pairs of words are
//! aligned again character by character so that only the letters that
//! actually changed get marked.  Pairs of whitespace runs are handed to the
//! whitespace classifier ([`classify_space_run`]) which decides if the run
//! should be shown as visible blocks.
//!
//! # Examples
//!
//! ```rust
//! use redpen::text::TextDiff;
//!
//! let diff = TextDiff::new("Hello  world", "Hello world");
//! let annotation = diff.annotate();
//! assert_eq!(annotation.old().to_string(), "Hello [_ _]world");
//! assert_eq!(annotation.new().to_string(), "Hello world");
//! ```
//!
//! The rendered strings can be produced with any [`Markup`], for instance
//! the [`Html`] one:
//!
//! ```rust
//! use redpen::text::{Html, TextDiff};
//!
//! let result = TextDiff::new("go now", "go later").render(&Html);
//! assert_eq!(result.old_annotated, "go <span class=\"text-red-500\">now</span>");
//! ```
use std::time::{Duration, Instant};

mod annotate;
mod inline;
mod render;
mod similarity;
mod spaces;
mod token;

pub use self::annotate::{Annotated, Annotation, Mark, Side};
pub use self::inline::{diff_units, InlineDiff};
pub use self::render::{Brackets, DiffResult, Html, Markup};
pub use self::similarity::{positional_ratio, tokens_similar, SIMILARITY_THRESHOLD};
pub use self::spaces::{classify_space_run, SpaceRun};
pub use self::token::{split_tokens, Token, TokenKind};

use crate::algorithms::{capture_diff_by, DiffOp, DiffTag};
use crate::deadline_support::duration_to_deadline;

/// A builder type config for more complex uses of [`TextDiff`].
#[derive(Clone, Debug)]
pub struct TextDiffConfig {
    highlight_spaces: bool,
    timeout: Option<Duration>,
    graphemes: bool,
}

impl Default for TextDiffConfig {
    fn default() -> TextDiffConfig {
        TextDiffConfig {
            highlight_spaces: true,
            timeout: None,
            graphemes: false,
        }
    }
}

impl TextDiffConfig {
    /// Controls if whitespace changes are shown as visible blocks.
    ///
    /// This is enabled by default.  When disabled, whitespace that changed
    /// is marked like any other changed text.
    pub fn highlight_spaces(&mut self, yes: bool) -> &mut Self {
        self.highlight_spaces = yes;
        self
    }

    /// Sets a timeout for the diff operation.
    ///
    /// By default there is no timeout.  The alignment is quadratic in the
    /// number of tokens, so for large inputs a timeout keeps the time spent
    /// bounded.  Once the timeout is hit the remaining tokens (or characters)
    /// are reported as removed and added as a whole instead.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /// Controls if words are aligned by grapheme clusters instead of
    /// characters.
    ///
    /// This requires the `unicode` feature.
    #[cfg(feature = "unicode")]
    pub fn graphemes(&mut self, yes: bool) -> &mut Self {
        self.graphemes = yes;
        self
    }

    /// Compares two texts.
    pub fn diff<'old, 'new>(&self, old: &'old str, new: &'new str) -> TextDiff<'old, 'new> {
        let deadline = self.timeout.and_then(duration_to_deadline);
        let old_tokens = split_tokens(old);
        let new_tokens = split_tokens(new);
        let ops = capture_diff_by(
            &old_tokens[..],
            0..old_tokens.len(),
            &new_tokens[..],
            0..new_tokens.len(),
            deadline,
            tokens_similar,
        );
        tracing::debug!(
            old_tokens = old_tokens.len(),
            new_tokens = new_tokens.len(),
            ops = ops.len(),
            "aligned tokens"
        );
        TextDiff {
            old,
            new,
            old_tokens,
            new_tokens,
            ops,
            config: self.clone(),
            deadline,
        }
    }
}

/// A single step of the token level operation stream.
///
/// A `Match` pairs two similar tokens, which may still differ verbatim.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenOp<'old, 'new> {
    /// The tokens were paired up.
    Match {
        old_index: usize,
        new_index: usize,
        old: Token<'old>,
        new: Token<'new>,
    },
    /// The old token has no counterpart.
    Delete { old_index: usize, old: Token<'old> },
    /// The new token has no counterpart.
    Insert { new_index: usize, new: Token<'new> },
}

impl<'old, 'new> TokenOp<'old, 'new> {
    /// Returns the tag of the operation.
    pub fn tag(&self) -> DiffTag {
        match *self {
            TokenOp::Match { .. } => DiffTag::Equal,
            TokenOp::Delete { .. } => DiffTag::Delete,
            TokenOp::Insert { .. } => DiffTag::Insert,
        }
    }

    /// Returns the old token if there is one.
    pub fn old_token(&self) -> Option<Token<'old>> {
        match *self {
            TokenOp::Match { old, .. } | TokenOp::Delete { old, .. } => Some(old),
            TokenOp::Insert { .. } => None,
        }
    }

    /// Returns the new token if there is one.
    pub fn new_token(&self) -> Option<Token<'new>> {
        match *self {
            TokenOp::Match { new, .. } | TokenOp::Insert { new, .. } => Some(new),
            TokenOp::Delete { .. } => None,
        }
    }

    /// Returns `true` for a match whose tokens are identical.
    pub fn is_verbatim(&self) -> bool {
        match *self {
            TokenOp::Match { old, new, .. } => old.as_str() == new.as_str(),
            _ => false,
        }
    }
}

/// Captures the alignment of two texts.
pub struct TextDiff<'old, 'new> {
    old: &'old str,
    new: &'new str,
    old_tokens: Vec<Token<'old>>,
    new_tokens: Vec<Token<'new>>,
    ops: Vec<DiffOp>,
    config: TextDiffConfig,
    deadline: Option<Instant>,
}

impl<'old, 'new> TextDiff<'old, 'new> {
    /// Configures a text differ before diffing.
    pub fn configure() -> TextDiffConfig {
        TextDiffConfig::default()
    }

    /// Compares two texts with the default configuration.
    ///
    /// Equivalent to `TextDiff::configure().diff(old, new)`.
    pub fn new(old: &'old str, new: &'new str) -> TextDiff<'old, 'new> {
        TextDiff::configure().diff(old, new)
    }

    /// Returns the old text.
    pub fn old_source(&self) -> &'old str {
        self.old
    }

    /// Returns the new text.
    pub fn new_source(&self) -> &'new str {
        self.new
    }

    /// Returns the tokens of the old text.
    pub fn old_tokens(&self) -> &[Token<'old>] {
        &self.old_tokens
    }

    /// Returns the tokens of the new text.
    pub fn new_tokens(&self) -> &[Token<'new>] {
        &self.new_tokens
    }

    /// Returns `true` if whitespace changes are shown as blocks.
    pub fn highlight_spaces(&self) -> bool {
        self.config.highlight_spaces
    }

    /// Returns `true` if words are aligned by grapheme clusters.
    pub fn graphemes(&self) -> bool {
        self.config.graphemes
    }

    /// Returns the deadline of this diff, if a timeout was configured.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns all ops of the alignment.
    ///
    /// The ops are expressed in token indexes.  Use
    /// [`iter_token_ops`](Self::iter_token_ops) to get at the tokens.
    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    /// Expands a diff op into its token level steps.
    pub fn iter_token_ops<'x>(
        &'x self,
        op: &DiffOp,
    ) -> Box<dyn Iterator<Item = TokenOp<'old, 'new>> + 'x> {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => Box::new(old_range.zip(new_range).map(move |(old_index, new_index)| {
                TokenOp::Match {
                    old_index,
                    new_index,
                    old: self.old_tokens[old_index],
                    new: self.new_tokens[new_index],
                }
            })),
            DiffTag::Delete => Box::new(old_range.map(move |old_index| TokenOp::Delete {
                old_index,
                old: self.old_tokens[old_index],
            })),
            DiffTag::Insert => Box::new(new_range.map(move |new_index| TokenOp::Insert {
                new_index,
                new: self.new_tokens[new_index],
            })),
        }
    }

    /// Iterates over the whole token level operation stream.
    pub fn iter_all_token_ops<'x>(&'x self) -> impl Iterator<Item = TokenOp<'old, 'new>> + 'x {
        self.ops.iter().flat_map(move |op| self.iter_token_ops(op))
    }

    /// Marks up both texts.
    pub fn annotate(&self) -> Annotation<'old, 'new> {
        annotate::annotate(self)
    }

    /// Marks up both texts and renders them with `markup`.
    pub fn render<M: Markup + ?Sized>(&self, markup: &M) -> DiffResult {
        self.annotate().render(markup)
    }
}

#[test]
fn test_token_ops() {
    let diff = TextDiff::new("go now", "go later");
    let ops = diff
        .iter_all_token_ops()
        .map(|op| {
            (
                op.tag(),
                op.old_token().map(|x| x.as_str()),
                op.new_token().map(|x| x.as_str()),
            )
        })
        .collect::<Vec<_>>();
    insta::assert_debug_snapshot!(ops, @r###"
    [
        (
            Equal,
            Some(
                "go",
            ),
            Some(
                "go",
            ),
        ),
        (
            Equal,
            Some(
                " ",
            ),
            Some(
                " ",
            ),
        ),
        (
            Insert,
            None,
            Some(
                "later",
            ),
        ),
        (
            Delete,
            Some(
                "now",
            ),
            None,
        ),
    ]
    "###);
}

#[test]
fn test_ops_cover_both_sides() {
    let diff = TextDiff::new("a quick  brown fox", "A quick brown dog jumps");
    let old = diff
        .iter_all_token_ops()
        .filter_map(|op| op.old_token())
        .map(|x| x.as_str())
        .collect::<String>();
    let new = diff
        .iter_all_token_ops()
        .filter_map(|op| op.new_token())
        .map(|x| x.as_str())
        .collect::<String>();
    assert_eq!(old, "a quick  brown fox");
    assert_eq!(new, "A quick brown dog jumps");
}

#[test]
fn test_verbatim_matches() {
    let diff = TextDiff::new("Same text", "same text");
    let verbatim = diff
        .iter_all_token_ops()
        .map(|op| op.is_verbatim())
        .collect::<Vec<_>>();
    assert_eq!(verbatim, vec![false, true, true]);
}

#[test]
fn test_timeout_keeps_output_lossless() {
    let old = "one two three four five six seven";
    let new = "one 2 three for five sixx seven eight";
    let diff = TextDiff::configure()
        .timeout(Duration::from_secs(60))
        .diff(old, new);
    assert!(diff.deadline().is_some());
    let annotation = diff.annotate();
    assert_eq!(annotation.old().iter().map(|x| x.1).collect::<String>(), old);
    assert_eq!(annotation.new().iter().map(|x| x.1).collect::<String>(), new);
}

#[cfg(feature = "unicode")]
#[test]
fn test_configured_grapheme_alignment() {
    let old = "cafe\u{301} noir";
    let new = "cafe noir";

    let diff = TextDiff::configure().graphemes(true).diff(old, new);
    assert!(diff.graphemes());
    let annotation = diff.annotate();
    assert_eq!(annotation.old().to_string(), "caf[-e\u{301}-] noir");
    assert_eq!(annotation.new().to_string(), "caf{+e+} noir");

    let annotation = TextDiff::new(old, new).annotate();
    assert_eq!(annotation.old().to_string(), "cafe[-\u{301}-] noir");
    assert_eq!(annotation.new().to_string(), "cafe noir");
}
