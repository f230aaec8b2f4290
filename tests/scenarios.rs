use redpen::algorithms::{DiffOp, DiffTag};
use redpen::text::{Brackets, Html, Mark, Markup, TextDiff};

const REMOVED_BLOCK: &str = "<span style=\"display:inline-block;width:0.6em;height:1em;\
                             background-color:#fb2c36;margin:0 1px;\">";
const ADDED_BLOCK: &str = "<span style=\"display:inline-block;width:0.6em;height:1em;\
                           background-color:#22c55e;margin:0 1px;\">";

fn brackets(old: &str, new: &str) -> (String, String) {
    let result = TextDiff::new(old, new).render(&Brackets);
    (result.old_annotated, result.new_annotated)
}

#[test]
fn test_plain_substitution() {
    let diff = TextDiff::new("The cat sat", "The cot sat");
    assert_eq!(
        diff.ops(),
        &[DiffOp::Equal {
            old_index: 0,
            new_index: 0,
            len: 5,
        }]
    );

    let result = diff.render(&Html);
    assert_eq!(
        result.old_annotated,
        "The c<span class=\"text-red-500\">a</span>t sat"
    );
    assert_eq!(
        result.new_annotated,
        "The c<span class=\"text-green-500\">o</span>t sat"
    );
}

#[test]
fn test_unrelated_replacement() {
    let diff = TextDiff::new("go now", "go later");
    let tags = diff.ops().iter().map(|op| op.tag()).collect::<Vec<_>>();
    assert_eq!(tags, vec![DiffTag::Equal, DiffTag::Insert, DiffTag::Delete]);

    let result = diff.render(&Html);
    assert_eq!(
        result.old_annotated,
        "go <span class=\"text-red-500\">now</span>"
    );
    assert_eq!(
        result.new_annotated,
        "go <span class=\"text-green-500\">later</span>"
    );
}

#[test]
fn test_interior_double_space() {
    let result = TextDiff::new("Hello  world", "Hello world").render(&Html);
    assert_eq!(
        result.old_annotated,
        format!("Hello {} </span>world", REMOVED_BLOCK)
    );
    assert_eq!(result.new_annotated, "Hello world");
}

#[test]
fn test_leading_space() {
    let diff = TextDiff::new(" Hi", "Hi");
    assert_eq!(
        diff.ops(),
        &[
            DiffOp::Delete {
                old_index: 0,
                old_len: 1,
                new_index: 0,
            },
            DiffOp::Equal {
                old_index: 1,
                new_index: 0,
                len: 1,
            },
        ]
    );
    let result = diff.render(&Html);
    assert_eq!(result.old_annotated, format!("{} </span>Hi", REMOVED_BLOCK));
    assert_eq!(result.new_annotated, "Hi");
}

#[test]
fn test_empty_old_text() {
    let diff = TextDiff::new("", "Hi");
    assert_eq!(diff.old_tokens().len(), 1);
    assert_eq!(diff.old_tokens()[0].as_str(), "");

    let inserted = diff
        .iter_all_token_ops()
        .filter(|op| op.tag() == DiffTag::Insert)
        .map(|op| op.new_token().map(|x| x.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(inserted, vec![Some("Hi")]);

    let result = diff.render(&Html);
    assert_eq!(result.old_annotated, "");
    assert_eq!(
        result.new_annotated,
        "<span class=\"text-green-500\">Hi</span>"
    );
}

#[test]
fn test_both_empty() {
    let diff = TextDiff::new("", "");
    let annotation = diff.annotate();
    assert!(!annotation.has_changes());
    assert_eq!(diff.render(&Html), Default::default());
}

#[test]
fn test_whitespace_against_empty() {
    assert_eq!(brackets("", "  "), ("".into(), "{_ _}{_ _}".into()));
    assert_eq!(brackets(" \t", ""), ("[_ _][_\t_]".into(), "".into()));
}

#[test]
fn test_one_side_empty_marks_everything() {
    assert_eq!(brackets("", "x y"), ("".into(), "{+x y+}".into()));
    assert_eq!(brackets("x y", ""), ("[-x y-]".into(), "".into()));

    let result = TextDiff::new("", "x y").render(&Html);
    assert_eq!(
        result.new_annotated,
        "<span class=\"text-green-500\">x y</span>"
    );
}

#[test]
fn test_trailing_space_removed() {
    assert_eq!(brackets("Hi ", "Hi"), ("Hi[_ _]".into(), "Hi".into()));
}

#[test]
fn test_character_insertion() {
    assert_eq!(
        brackets("the color red", "the colour red"),
        ("the color red".into(), "the colo{+u+}r red".into())
    );
}

#[test]
fn test_word_insertion() {
    assert_eq!(
        brackets("the fox", "the quick fox"),
        ("the fox".into(), "the {+quick +}fox".into())
    );
}

#[test]
fn test_line_breaks() {
    let old = "line one\nline two";
    let new = "line one\n\nline two";
    assert_eq!(
        brackets(old, new),
        (old.into(), "line one\n{_\n_}line two".into())
    );

    let result = TextDiff::new(old, new).render(&Html);
    assert_eq!(result.old_annotated, "line one<br>line two");
    assert_eq!(
        result.new_annotated,
        format!("line one<br>{}<br></span>line two", ADDED_BLOCK)
    );
    assert_eq!(Html.strip(&result.new_annotated), new);
}

#[test]
fn test_highlighting_disabled() {
    let result = TextDiff::configure()
        .highlight_spaces(false)
        .diff(" Hi  there", "Hi there ")
        .render(&Brackets);
    assert_eq!(result.old_annotated, "[- -]Hi[-  -]there");
    assert_eq!(result.new_annotated, "Hi{+ +}there{+ +}");
}

#[test]
fn test_html_is_escaped() {
    let result = TextDiff::new("a <b> & c", "a <i> & c").render(&Html);
    assert_eq!(Html.strip(&result.old_annotated), "a <b> & c");
    assert_eq!(Html.strip(&result.new_annotated), "a <i> & c");
    assert!(!result.old_annotated.contains("<b>"));
}

#[test]
fn test_marks() {
    let diff = TextDiff::new("one  two", "one two");
    let annotation = diff.annotate();
    let marks = annotation
        .old()
        .iter()
        .map(|(mark, _)| mark)
        .collect::<Vec<_>>();
    assert_eq!(marks, vec![Mark::Plain, Mark::Block, Mark::Plain]);
}

#[test]
fn test_equal_inputs() {
    let text = "  Some text\twith   odd\n\nspacing ";
    let annotation = TextDiff::new(text, text).annotate();
    assert!(!annotation.has_changes());
    assert_eq!(annotation.old().to_string(), text);
    assert_eq!(annotation.new().to_string(), text);
}

#[test]
fn test_diff_texts_shortcut() {
    let result = redpen::diff_texts("The cat sat", "The cot sat");
    assert_eq!(
        result,
        TextDiff::new("The cat sat", "The cot sat").render(&Html)
    );
}
