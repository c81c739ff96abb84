use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::{Padding, Style, object::Columns},
};

use crate::skin::Skin;

#[derive(Tabled)]
struct SkinRow {
    #[tabled(rename = "SKIN")]
    name: String,
    #[tabled(rename = "MECHANISM")]
    mechanism: String,
    #[tabled(rename = "TIMING")]
    timing: String,
    #[tabled(rename = "COLOR")]
    color: String,
    #[tabled(rename = "TIMER")]
    timer: String,
}

fn rows(selected: Option<Skin>) -> Vec<SkinRow> {
    Skin::ALL
        .into_iter()
        .map(|skin| {
            let glyph = skin.glyph();
            let marker = if selected == Some(skin) { " *" } else { "" };
            SkinRow {
                name: format!("{}{}", skin, marker),
                mechanism: glyph.mechanism().to_string(),
                timing: glyph.timing().to_string(),
                color: glyph.color_role().label().to_string(),
                timer: if glyph.schedule().is_some() {
                    "✓".to_string()
                } else {
                    "-".to_string()
                },
            }
        })
        .collect()
}

/// List all skins. The configured skin, if any, is marked with `*`.
pub fn run(selected: Option<Skin>) -> Result<()> {
    let mut table = Table::new(rows(selected));
    table
        .with(Style::blank())
        .modify(Columns::new(0..5), Padding::new(0, 1, 0, 0));

    println!("{table}");
    Ok(())
}
