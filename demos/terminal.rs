use std::fs::read_to_string;

use anyhow::Context;
use console::Style;
use redpen::text::{Annotated, Mark, Side, TextDiff};

fn print_side(label: &str, annotated: &Annotated<'_>) {
    let style = match annotated.side() {
        Side::Old => Style::new().red(),
        Side::New => Style::new().green(),
    };
    let block = match annotated.side() {
        Side::Old => Style::new().on_red(),
        Side::New => Style::new().on_green(),
    };
    println!("{}", Style::new().bold().apply_to(label));
    for (mark, value) in annotated.iter() {
        match mark {
            Mark::Plain => print!("{}", value),
            Mark::Changed => print!("{}", style.apply_to(value).underlined()),
            Mark::Block => match value {
                "\n" => println!("{}", block.apply_to("⏎")),
                "\t" => print!("{}", block.apply_to("→")),
                _ => print!("{}", block.apply_to(" ")),
            },
        }
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<_> = std::env::args_os().collect();
    if args.len() != 3 {
        anyhow::bail!("usage: terminal [old] [new]");
    }

    let old = read_to_string(&args[1])
        .with_context(|| format!("could not read {}", args[1].to_string_lossy()))?;
    let new = read_to_string(&args[2])
        .with_context(|| format!("could not read {}", args[2].to_string_lossy()))?;

    let diff = TextDiff::new(&old, &new);
    let annotation = diff.annotate();
    if !annotation.has_changes() {
        println!("no changes");
        return Ok(());
    }

    print_side("old", annotation.old());
    print_side("new", annotation.new());
    Ok(())
}
