//! The `gradepoint mapping` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let book = super::gradebook_from(config)?;

    let mut table = Table::new();
    table.set_header(vec!["Letter", "Points"]);
    for (letter, value) in book.mapping().entries() {
        table.add_row(vec![Cell::new(letter), Cell::new(format!("{value}"))]);
    }

    println!("{table}");
    Ok(())
}
