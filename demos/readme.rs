extern crate plaintext_layout;
use plaintext_layout::Filler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fmt::Write;

fn layout_text() -> Result<String, Box<dyn Error>> {
    let text = "Far out in the uncharted backwaters of the unfashionable end of the western spiral arm of the Galaxy lies a small unregarded yellow sun.\n\n\n\nOrbiting this at a distance of roughly ninety-two million miles is an utterly insignificant little blue-green planet whose ape-descended life forms are so amazingly primitive that they still think digital watches are a pretty neat idea.";
    let filler = Filler::new().with_width(60);
    let filled = filler.fill_with(text, &mut StdRng::seed_from_u64(0))?;
    let mut result = String::new();
    writeln!(&mut result, "┏{}┓", "━".repeat(60))?;
    for l in filled.lines() {
        let pad = 60_usize.saturating_sub(l.chars().count());
        writeln!(&mut result, "┃{}{}┃", l, " ".repeat(pad))?;
    }
    writeln!(&mut result, "┗{}┛", "━".repeat(60))?;
    Ok(result)
}

fn main() -> Result<(), Box<dyn Error>> {
    print!("{}", layout_text()?);
    Ok(())
}
