use redpen::diff_texts;

const OLD: &str = "The quick brown fox\njumps over the  lazy dog.";
const NEW: &str = "The quick brown fox\n\njumped over the lazy  dog!";

fn main() {
    tracing_subscriber::fmt::init();

    let result = diff_texts(OLD, NEW);
    println!("<div class=\"grid grid-cols-2 gap-4 font-mono\">");
    println!("  <div>{}</div>", result.old_annotated);
    println!("  <div>{}</div>", result.new_annotated);
    println!("</div>");
}
