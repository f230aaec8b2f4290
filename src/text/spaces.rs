use crate::text::Token;

/// How a whitespace run is to be made visible.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum SpaceRun {
    /// Extra whitespace between two words: the first character stays
    /// literal, every further character is shown as a block.
    Interior,
    /// Every character of the run is shown as a block.
    Highlighted,
    /// A lone space between two words, nothing remarkable about it.
    Plain,
}

/// Classifies the whitespace token at `idx` of `tokens`.
///
/// Runs of two or more characters are always made visible, either fully or
/// (when sitting between two words) all but the first character.  A single
/// character is only made visible at the very start or end of the text or
/// when it is not surrounded by words.
pub fn classify_space_run(tokens: &[Token<'_>], idx: usize) -> SpaceRun {
    let token = &tokens[idx];
    debug_assert!(token.is_space(), "classifying a non whitespace token");

    let prev = idx.checked_sub(1).and_then(|idx| tokens.get(idx));
    let next = tokens.get(idx + 1);
    let len = token.char_len();

    if len >= 2 {
        if prev.map_or(false, Token::has_text) && next.map_or(false, Token::has_text) {
            SpaceRun::Interior
        } else {
            SpaceRun::Highlighted
        }
    } else if idx == 0
        || idx + 1 == tokens.len()
        || prev.map_or(true, Token::is_blank)
        || next.map_or(true, Token::is_blank)
    {
        SpaceRun::Highlighted
    } else {
        SpaceRun::Plain
    }
}

#[test]
fn test_classify_space_run() {
    use crate::text::split_tokens;

    let tokens = split_tokens("Hello  world");
    assert_eq!(classify_space_run(&tokens, 1), SpaceRun::Interior);

    let tokens = split_tokens("Hello world");
    assert_eq!(classify_space_run(&tokens, 1), SpaceRun::Plain);

    let tokens = split_tokens(" Hi");
    assert_eq!(classify_space_run(&tokens, 0), SpaceRun::Highlighted);

    let tokens = split_tokens("Hi ");
    assert_eq!(classify_space_run(&tokens, 1), SpaceRun::Highlighted);

    let tokens = split_tokens("Hi   ");
    assert_eq!(classify_space_run(&tokens, 1), SpaceRun::Highlighted);

    let tokens = split_tokens("\t\t");
    assert_eq!(classify_space_run(&tokens, 0), SpaceRun::Highlighted);

    let tokens = split_tokens("one\ntwo");
    assert_eq!(classify_space_run(&tokens, 1), SpaceRun::Plain);
}
