//! This crate highlights the differences between two versions of a text at
//! word and character level, including changes to whitespace, for display to
//! a human reviewer.
//!
//! ```rust
//! use redpen::text::{Brackets, TextDiff};
//!
//! let result = TextDiff::new("The cat sat", "The cot sat").render(&Brackets);
//! assert_eq!(result.old_annotated, "The c[-a-]t sat");
//! assert_eq!(result.new_annotated, "The c{+o+}t sat");
//! ```
//!
//! The crate is split into two levels:
//!
//! * [`algorithms`]: a generic LCS alignment over indexable sequences that
//!   pairs up items with a caller supplied comparison predicate.
//! * [`text`]: tokenization, fuzzy word similarity, character level
//!   alignment of similar words, whitespace classification and rendering of
//!   the two annotated texts.
//!
//! Every comparison is a pure function of its two inputs.  It never fails:
//! empty texts on either side are fine, and the rendered output always
//! contains every character of the input.
//!
//! # Features
//!
//! * `unicode`: allows aligning words by grapheme clusters instead of
//!   characters (see `TextDiffConfig::graphemes`).
//! * `serde`: implements `Serialize` for the result and op types.
mod deadline_support;

pub mod algorithms;
pub mod text;

pub use self::text::{Annotation, DiffResult, Html, Markup, TextDiff, TextDiffConfig};

/// Compares two texts and renders both sides as HTML.
///
/// This uses the default configuration.  Line breaks are rendered as `<br>`.
///
/// ```rust
/// let result = redpen::diff_texts("go now", "go later");
/// assert_eq!(result.new_annotated, "go <span class=\"text-green-500\">later</span>");
/// ```
pub fn diff_texts(old: &str, new: &str) -> DiffResult {
    TextDiff::new(old, new).render(&Html)
}

#[test]
fn test_diff_texts() {
    let result = diff_texts("a\nb", "a\nc");
    assert_eq!(
        result.old_annotated,
        "a<br><span class=\"text-red-500\">b</span>"
    );
    assert_eq!(
        result.new_annotated,
        "a<br><span class=\"text-green-500\">c</span>"
    );
}
