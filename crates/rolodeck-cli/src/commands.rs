use anyhow::Result;

use crate::args::{Cli, Commands, SourceArgs};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    match cli.command {
        // A bare `rolodeck` opens the browser, the way the gallery page
        // loads on visit.
        None => handlers::browse::handle(&config, SourceArgs::default()),

        Some(Commands::Browse { source }) => handlers::browse::handle(&config, source),

        Some(Commands::List {
            source,
            format,
            search,
        }) => handlers::list::handle(&config, source, format, search),
    }
}
