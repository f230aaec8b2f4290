use crate::text::Token;

/// Positional overlap two words need to exceed to be considered similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Calculates the positional character overlap of two strings.
///
/// Both strings are trimmed and lowercased, then the characters at equal
/// positions are compared up to the length of the shorter one.  The count of
/// equal positions is divided by the length of the longer string.  This
/// rewards words of equal length that differ in a few letters and punishes
/// anything that shifts characters around.
///
/// Two strings that are both empty after trimming have a ratio of `1.0`.
pub fn positional_ratio(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase().chars().collect::<Vec<_>>();
    let b = b.trim().to_lowercase().chars().collect::<Vec<_>>();
    let len = a.len().max(b.len());
    if len == 0 {
        return 1.0;
    }
    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / len as f64
}

/// Decides if two tokens are to be aligned with each other.
///
/// * Two whitespace runs are always similar, whatever their length.
/// * Otherwise tokens that are equal after trimming and ignoring case are
///   similar.
/// * Otherwise the [`positional_ratio`] has to exceed
///   [`SIMILARITY_THRESHOLD`].
pub fn tokens_similar(a: &Token<'_>, b: &Token<'_>) -> bool {
    if a.is_space() && b.is_space() {
        return true;
    }
    let a = a.as_str().trim().to_lowercase();
    let b = b.as_str().trim().to_lowercase();
    if a == b {
        return true;
    }
    positional_ratio(&a, &b) > SIMILARITY_THRESHOLD
}

#[cfg(test)]
fn token(s: &str) -> Token<'_> {
    Token::new(s, 0)
}

#[test]
fn test_positional_ratio() {
    assert_eq!(positional_ratio("cat", "cot"), 2.0 / 3.0);
    assert_eq!(positional_ratio("now", "later"), 0.0);
    assert_eq!(positional_ratio(" Foo ", "foo"), 1.0);
    assert_eq!(positional_ratio("", "  "), 1.0);
    assert_eq!(positional_ratio("", "Hi"), 0.0);
    // a shift by one character destroys every positional match
    assert_eq!(positional_ratio("color", "xcolor"), 0.0);
}

#[test]
fn test_tokens_similar() {
    assert!(tokens_similar(&token("cat"), &token("cot")));
    assert!(tokens_similar(&token("Hello"), &token("hello")));
    assert!(tokens_similar(&token(" "), &token("   ")));
    assert!(tokens_similar(&token("\n"), &token("\t ")));
    assert!(tokens_similar(&token(""), &token("  ")));
    assert!(!tokens_similar(&token("now"), &token("later")));
    assert!(!tokens_similar(&token(""), &token("Hi")));
    assert!(!tokens_similar(&token(" "), &token("Hi")));
}

#[test]
fn test_threshold_is_exclusive() {
    // 3 of 5 positions match: exactly at the threshold
    assert_eq!(positional_ratio("abcde", "abcxy"), 0.6);
    assert!(!tokens_similar(&token("abcde"), &token("abcxy")));

    // 61 of 100 positions match
    let old = "a".repeat(100);
    let new = format!("{}{}", "a".repeat(61), "b".repeat(39));
    assert_eq!(positional_ratio(&old, &new), 0.61);
    assert!(tokens_similar(&token(&old), &token(&new)));
}
