extern crate plaintext_layout;
use plaintext_layout::TableFormatter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

fn layout_table() -> Result<String, Box<dyn Error>> {
    let rows = [
        ["Name", "Kind", "Notes"],
        ["first_fit", "layout", "Packs words greedily.\nLong words overflow."],
        ["justify_line", "justifier", "Spreads spaces over random gaps."],
    ];
    let table = TableFormatter::new();
    Ok(table.format_with(&rows, &mut StdRng::seed_from_u64(0))?)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", layout_table()?);
    Ok(())
}
