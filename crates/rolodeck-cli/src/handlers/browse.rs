use anyhow::Result;
use rolodeck_engine::Gallery;

use crate::args::SourceArgs;
use crate::config::Config;
use crate::handlers::load_profiles;
use crate::tui;

/// Fetch one batch and hand it to the interactive browser. A failed
/// fetch still opens the browser, with an empty grid and the notice
/// where the cards would be.
pub fn handle(config: &Config, source: SourceArgs) -> Result<()> {
    let outcome = load_profiles(config, &source)?;
    let gallery = Gallery::from_records(outcome.records);
    tui::run(gallery, outcome.notice)
}
