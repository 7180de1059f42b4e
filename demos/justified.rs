extern crate plaintext_layout;
use plaintext_layout::{display_width, Filler};
use std::error::Error;
use std::fmt::Write;

const WIDTH: usize = 48;

fn layout_text() -> Result<String, Box<dyn Error>> {
    let text = "Far out in the uncharted backwaters of the unfashionable end of the western spiral arm of the Galaxy lies a small unregarded yellow sun.\n\nOrbiting this at a distance of roughly ninety-two million miles is an utterly insignificant little blue-green planet whose ape-descended life forms are so amazingly primitive that they still think digital watches are a pretty neat idea.";
    let filled = Filler::new()
        .with_width(WIDTH)
        .with_justify(true)
        .fill(text)?;
    let mut result = String::new();
    writeln!(&mut result, "┏{}┓", "━".repeat(WIDTH))?;
    for l in filled.lines() {
        let pad = WIDTH.saturating_sub(display_width(l));
        writeln!(&mut result, "┃{}{}┃", l, " ".repeat(pad))?;
    }
    writeln!(&mut result, "┗{}┛", "━".repeat(WIDTH))?;
    Ok(result)
}

fn main() -> Result<(), Box<dyn Error>> {
    print!("{}", layout_text()?);
    Ok(())
}
