use anyhow::Result;
use rolodeck_engine::Gallery;

use crate::args::SourceArgs;
use crate::config::Config;
use crate::handlers::load_profiles;
use crate::types::OutputFormat;
use crate::views::console;

/// Print the directory to stdout, optionally narrowed by a name search.
pub fn handle(
    config: &Config,
    source: SourceArgs,
    format: OutputFormat,
    search: Option<String>,
) -> Result<()> {
    let outcome = load_profiles(config, &source)?;
    if let Some(notice) = &outcome.notice {
        eprintln!("{}", notice);
    }

    let mut gallery = Gallery::from_records(outcome.records);
    if let Some(query) = search {
        gallery.set_filter_text(query);
    }

    let rows = console::directory_rows(&gallery);
    match format {
        OutputFormat::Plain => console::render_plain(&rows),
        OutputFormat::Json => console::render_json(&rows),
    }
}
