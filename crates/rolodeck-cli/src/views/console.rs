//! Non-interactive rendering of the directory for the `list` command.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rolodeck_engine::Gallery;
use serde::Serialize;

/// One visible profile, flattened to its display strings.
#[derive(Debug, Serialize)]
pub struct DirectoryRow {
    pub index: usize,
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
    pub picture: String,
}

/// Rows for the currently visible cards, in grid order.
pub fn directory_rows(gallery: &Gallery) -> Vec<DirectoryRow> {
    gallery
        .cards()
        .visible_indices()
        .into_iter()
        .filter_map(|index| gallery.overlays().get(index))
        .map(|entry| DirectoryRow {
            index: entry.index,
            name: entry.panel.name.clone(),
            email: entry.panel.email.clone(),
            city: entry.panel.city.clone(),
            phone: entry.panel.phone.clone(),
            address: entry.panel.address.clone(),
            birthday: entry.panel.birthday.clone(),
            picture: entry.panel.picture_url.clone(),
        })
        .collect()
}

pub fn render_plain(rows: &[DirectoryRow]) -> Result<()> {
    if rows.is_empty() {
        println!("No profiles to show.");
        return Ok(());
    }

    let colored = std::io::stdout().is_terminal();
    for row in rows {
        if colored {
            println!("{}", row.name.bold().cyan());
        } else {
            println!("{}", row.name);
        }
        println!("  {}", row.email);
        println!("  {}", row.phone);
        println!("  {}", row.address);
        println!("  Birthday: {}", row.birthday);
        println!();
    }
    println!("{} profile(s)", rows.len());
    Ok(())
}

pub fn render_json(rows: &[DirectoryRow]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}
