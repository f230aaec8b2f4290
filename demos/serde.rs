use redpen::text::{Html, TextDiff};

fn main() -> anyhow::Result<()> {
    let diff = TextDiff::new("Hello  World, how are you?", "Hello world, who are you ?");
    println!("{}", serde_json::to_string_pretty(&diff.ops())?);

    let annotation = diff.annotate();
    let segments = annotation.new().iter().collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&segments)?);

    println!("{}", serde_json::to_string_pretty(&diff.render(&Html))?);
    Ok(())
}
