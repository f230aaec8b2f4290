use std::fmt;
use std::ops::Range;

/// The kind of a [`Token`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// A run of non whitespace characters.
    ///
    /// The empty token produced for empty input is also a word.
    Word,
    /// A run of whitespace characters.
    Space,
}

/// A maximal run of either whitespace or non whitespace characters.
///
/// Tokens borrow from the text they were split from and remember their byte
/// offset in it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Token<'s> {
    value: &'s str,
    offset: usize,
}

impl<'s> Token<'s> {
    pub(crate) fn new(value: &'s str, offset: usize) -> Token<'s> {
        Token { value, offset }
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &'s str {
        self.value
    }

    /// Returns the byte offset of the token in the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the byte range of the token in the source text.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.value.len()
    }

    /// Returns the kind of the token.
    pub fn kind(&self) -> TokenKind {
        if self.is_space() {
            TokenKind::Space
        } else {
            TokenKind::Word
        }
    }

    /// Returns `true` if this is a non empty whitespace run.
    pub fn is_space(&self) -> bool {
        !self.value.is_empty() && self.is_blank()
    }

    /// Returns `true` if the token is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.chars().all(char::is_whitespace)
    }

    /// Returns `true` if the token contains at least one non whitespace character.
    pub fn has_text(&self) -> bool {
        !self.is_blank()
    }

    /// Returns the length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

impl<'s> fmt::Display for Token<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

/// Splits text into alternating runs of whitespace and non whitespace.
///
/// The returned tokens cover the input without gaps, so concatenating them
/// yields the input again.  Empty input produces a single empty token, which
/// means the result is never empty.
pub fn split_tokens(s: &str) -> Vec<Token<'_>> {
    let mut rv = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (idx, c) in s.char_indices() {
        let is_space = c.is_whitespace();
        if in_space.map_or(false, |x| x != is_space) {
            rv.push(Token::new(&s[start..idx], start));
            start = idx;
        }
        in_space = Some(is_space);
    }

    rv.push(Token::new(&s[start..], start));
    rv
}

#[test]
fn test_split_tokens() {
    let tokens = split_tokens("foo    bar baz\n\n  aha");
    assert_eq!(
        tokens.iter().map(|x| x.as_str()).collect::<Vec<_>>(),
        ["foo", "    ", "bar", " ", "baz", "\n\n  ", "aha"]
    );
    assert_eq!(tokens[2].range(), 7..10);
    assert_eq!(tokens[1].kind(), TokenKind::Space);
    assert_eq!(tokens[2].kind(), TokenKind::Word);
}

#[test]
fn test_split_tokens_edges() {
    let tokens = split_tokens("  hi\t");
    assert_eq!(
        tokens.iter().map(|x| x.as_str()).collect::<Vec<_>>(),
        ["  ", "hi", "\t"]
    );
    assert_eq!(
        split_tokens("über  straße")
            .iter()
            .map(|x| x.as_str())
            .collect::<Vec<_>>(),
        ["über", "  ", "straße"]
    );
}

#[test]
fn test_split_empty() {
    let tokens = split_tokens("");
    assert_eq!(tokens, vec![Token::new("", 0)]);
    assert_eq!(tokens[0].kind(), TokenKind::Word);
    assert!(tokens[0].is_blank());
    assert!(!tokens[0].is_space());
}
