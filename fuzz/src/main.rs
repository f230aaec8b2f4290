#![allow(clippy::all)]

use afl::fuzz;
use arbitrary::Arbitrary;
use redpen::text::{Brackets, Html, Markup, TextDiff};

#[derive(Arbitrary, Debug)]
struct FuzzOptions {
    highlight_spaces: bool,
    old: String,
    new: String,
}

fn main() {
    fuzz!(|data: FuzzOptions| {
        let diff = TextDiff::configure()
            .highlight_spaces(data.highlight_spaces)
            .diff(&data.old, &data.new);

        let html = diff.render(&Html);
        assert_eq!(Html.strip(&html.old_annotated), data.old);
        assert_eq!(Html.strip(&html.new_annotated), data.new);

        let annotation = diff.annotate();
        assert_eq!(annotation.old().iter().map(|x| x.1).collect::<String>(), data.old);
        assert_eq!(annotation.new().iter().map(|x| x.1).collect::<String>(), data.new);
        let _ = annotation.render(&Brackets);
    });
}
