//! Resolves one batch of profiles: a local file when --input is given,
//! otherwise a single API fetch. Network failure is not an error here;
//! it degrades to zero records plus a static notice, exactly like the
//! empty gallery the UI must be able to render anyway.

use anyhow::{Context, Result};
use rolodeck_client::ProfileClient;
use rolodeck_types::RawUser;

use crate::args::SourceArgs;
use crate::config::Config;

pub(crate) const NETWORK_ERROR_NOTICE: &str = "Network error. Please try again later.";

pub(crate) struct FetchOutcome {
    pub records: Vec<RawUser>,
    /// User-visible message when the fetch failed.
    pub notice: Option<String>,
}

pub(crate) fn load_profiles(config: &Config, source: &SourceArgs) -> Result<FetchOutcome> {
    if let Some(path) = &source.input {
        let records = rolodeck_client::load_records(path)
            .with_context(|| format!("failed to load profiles from {}", path.display()))?;
        return Ok(FetchOutcome {
            records,
            notice: None,
        });
    }

    let count = source.count.unwrap_or(config.count);
    let nationalities = source
        .nat
        .clone()
        .unwrap_or_else(|| config.nationalities.clone());
    let client = ProfileClient::new(config.api_url.clone());

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    match runtime.block_on(client.fetch(count, &nationalities)) {
        Ok(records) => Ok(FetchOutcome {
            records,
            notice: None,
        }),
        Err(err) => {
            eprintln!("warning: {}", err);
            Ok(FetchOutcome {
                records: Vec::new(),
                notice: Some(NETWORK_ERROR_NOTICE.to_string()),
            })
        }
    }
}
