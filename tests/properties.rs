use proptest::prelude::*;

use redpen::text::{split_tokens, Brackets, Html, Markup, TextDiff, TokenKind};

/// Short texts over a tiny alphabet so that similar words and competing
/// whitespace runs come up often.
fn small_text() -> impl Strategy<Value = String> {
    "[abcAB \t\n]{0,24}"
}

proptest! {
    #[test]
    fn tokens_reproduce_input(text in any::<String>()) {
        let tokens = split_tokens(&text);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.iter().map(|x| x.as_str()).collect::<String>(), text.clone());
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind(), pair[1].kind());
            prop_assert_eq!(pair[0].range().end, pair[1].range().start);
        }
    }

    #[test]
    fn segments_reproduce_input(old in any::<String>(), new in any::<String>()) {
        let annotation = TextDiff::new(&old, &new).annotate();
        prop_assert_eq!(annotation.old().iter().map(|x| x.1).collect::<String>(), old.clone());
        prop_assert_eq!(annotation.new().iter().map(|x| x.1).collect::<String>(), new.clone());
    }

    #[test]
    fn html_strips_to_input(old in any::<String>(), new in any::<String>()) {
        let result = TextDiff::new(&old, &new).render(&Html);
        prop_assert_eq!(Html.strip(&result.old_annotated), old);
        prop_assert_eq!(Html.strip(&result.new_annotated), new);
    }

    #[test]
    fn brackets_strip_to_input(
        old in small_text(),
        new in small_text(),
        highlight in any::<bool>()
    ) {
        let result = TextDiff::configure()
            .highlight_spaces(highlight)
            .diff(&old, &new)
            .render(&Brackets);
        prop_assert_eq!(Brackets.strip(&result.old_annotated), old);
        prop_assert_eq!(Brackets.strip(&result.new_annotated), new);
    }

    #[test]
    fn equal_inputs_have_no_changes(text in any::<String>()) {
        let annotation = TextDiff::new(&text, &text).annotate();
        prop_assert!(!annotation.has_changes());
    }

    #[test]
    fn ops_cover_both_token_sequences(old in small_text(), new in small_text()) {
        let diff = TextDiff::new(&old, &new);
        let old_indexes = diff
            .iter_all_token_ops()
            .filter_map(|op| op.old_token())
            .map(|x| x.offset())
            .collect::<Vec<_>>();
        let new_indexes = diff
            .iter_all_token_ops()
            .filter_map(|op| op.new_token())
            .map(|x| x.offset())
            .collect::<Vec<_>>();
        prop_assert_eq!(
            old_indexes,
            diff.old_tokens().iter().map(|x| x.offset()).collect::<Vec<_>>()
        );
        prop_assert_eq!(
            new_indexes,
            diff.new_tokens().iter().map(|x| x.offset()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn matches_never_pair_words_with_spaces(old in small_text(), new in small_text()) {
        let diff = TextDiff::new(&old, &new);
        for op in diff.iter_all_token_ops() {
            if let (Some(a), Some(b)) = (op.old_token(), op.new_token()) {
                let word_and_space = (a.kind() == TokenKind::Space && b.has_text())
                    || (b.kind() == TokenKind::Space && a.has_text());
                prop_assert!(!word_and_space, "{:?} paired with {:?}", a, b);
            }
        }
    }
}
