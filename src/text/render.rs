//! Turning annotated text into strings.
//!
//! An [`Annotated`](crate::text::Annotated) only knows which segments are
//! plain, changed or blocks.  How these end up in a string is decided by a
//! [`Markup`].  Two are provided: [`Html`] for rendering in a browser and
//! [`Brackets`] for terminals and tests.
//!
//! ```rust
//! use redpen::text::{Brackets, Html, Markup, TextDiff};
//!
//! let diff = TextDiff::new("The cat sat", "The cot sat");
//! let result = diff.render(&Brackets);
//! assert_eq!(result.old_annotated, "The c[-a-]t sat");
//! assert_eq!(result.new_annotated, "The c{+o+}t sat");
//!
//! let html = diff.render(&Html);
//! assert_eq!(Html.strip(&html.old_annotated), "The cat sat");
//! ```
use crate::text::Side;

/// The two rendered sides of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiffResult {
    /// The old text with removal markers.
    pub old_annotated: String,
    /// The new text with addition markers.
    pub new_annotated: String,
}

/// Writes marked up text segments.
pub trait Markup {
    /// Writes unchanged text.
    fn plain(&self, out: &mut String, text: &str);

    /// Writes text that was removed (old side) or added (new side).
    fn changed(&self, out: &mut String, side: Side, text: &str);

    /// Writes a single whitespace character as a visible block.
    fn block(&self, out: &mut String, side: Side, text: &str);

    /// The replacement for `\n` in the final output.
    fn line_break(&self) -> &str {
        "\n"
    }

    /// Removes all markup from rendered text, recovering the source.
    fn strip(&self, rendered: &str) -> String;
}

const REMOVED_COLOR: &str = "#fb2c36";
const ADDED_COLOR: &str = "#22c55e";

/// HTML markup.
///
/// Text is escaped, changes are wrapped in colored spans, whitespace blocks
/// become fixed width inline blocks and line breaks turn into `<br>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

fn escape_html(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

impl Markup for Html {
    fn plain(&self, out: &mut String, text: &str) {
        escape_html(out, text);
    }

    fn changed(&self, out: &mut String, side: Side, text: &str) {
        out.push_str(match side {
            Side::Old => "<span class=\"text-red-500\">",
            Side::New => "<span class=\"text-green-500\">",
        });
        escape_html(out, text);
        out.push_str("</span>");
    }

    fn block(&self, out: &mut String, side: Side, text: &str) {
        let color = match side {
            Side::Old => REMOVED_COLOR,
            Side::New => ADDED_COLOR,
        };
        out.push_str("<span style=\"display:inline-block;width:0.6em;height:1em;background-color:");
        out.push_str(color);
        out.push_str(";margin:0 1px;\">");
        escape_html(out, text);
        out.push_str("</span>");
    }

    fn line_break(&self) -> &str {
        "<br>"
    }

    fn strip(&self, rendered: &str) -> String {
        let mut rv = String::with_capacity(rendered.len());
        let mut rest = rendered;
        while let Some(start) = rest.find('<') {
            rv.push_str(&unescape_html(&rest[..start]));
            match rest[start..].find('>') {
                Some(len) => {
                    if &rest[start..=start + len] == "<br>" {
                        rv.push('\n');
                    }
                    rest = &rest[start + len + 1..];
                }
                None => {
                    rest = &rest[start..];
                    break;
                }
            }
        }
        rv.push_str(&unescape_html(rest));
        rv
    }
}

/// Plain text markup.
///
/// Removals are written as `[-text-]`, additions as `{+text+}`, whitespace
/// blocks as `[_ _]` (old) and `{_ _}` (new).  Nothing is escaped, so
/// [`strip`](Markup::strip) is only exact for texts that do not contain these
/// markers themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brackets;

const BRACKET_MARKERS: [&str; 8] = ["[-", "-]", "{+", "+}", "[_", "_]", "{_", "_}"];

impl Markup for Brackets {
    fn plain(&self, out: &mut String, text: &str) {
        out.push_str(text);
    }

    fn changed(&self, out: &mut String, side: Side, text: &str) {
        let (open, close) = match side {
            Side::Old => ("[-", "-]"),
            Side::New => ("{+", "+}"),
        };
        out.push_str(open);
        out.push_str(text);
        out.push_str(close);
    }

    fn block(&self, out: &mut String, side: Side, text: &str) {
        let (open, close) = match side {
            Side::Old => ("[_", "_]"),
            Side::New => ("{_", "_}"),
        };
        out.push_str(open);
        out.push_str(text);
        out.push_str(close);
    }

    fn strip(&self, rendered: &str) -> String {
        BRACKET_MARKERS
            .iter()
            .fold(rendered.to_string(), |rv, marker| rv.replace(marker, ""))
    }
}

#[test]
fn test_html_escaping() {
    let mut out = String::new();
    Html.changed(&mut out, Side::Old, "a<b> & c");
    assert_eq!(
        out,
        "<span class=\"text-red-500\">a&lt;b&gt; &amp; c</span>"
    );
    assert_eq!(Html.strip(&out), "a<b> & c");
}

#[test]
fn test_html_block() {
    let mut out = String::new();
    Html.block(&mut out, Side::New, " ");
    assert_eq!(
        out,
        "<span style=\"display:inline-block;width:0.6em;height:1em;\
         background-color:#22c55e;margin:0 1px;\"> </span>"
    );
}

#[test]
fn test_html_strip() {
    assert_eq!(
        Html.strip("one<br><span class=\"text-green-500\">&amp;lt;</span>two"),
        "one\n&lt;two"
    );
    assert_eq!(Html.strip("no tags"), "no tags");
}

#[test]
fn test_brackets() {
    let mut out = String::new();
    Brackets.plain(&mut out, "a ");
    Brackets.changed(&mut out, Side::New, "b");
    Brackets.block(&mut out, Side::New, "\t");
    assert_eq!(out, "a {+b+}{_\t_}");
    assert_eq!(Brackets.strip(&out), "a b\t");
    assert_eq!(Brackets.line_break(), "\n");
}
