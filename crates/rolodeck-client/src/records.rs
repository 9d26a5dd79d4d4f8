use std::fs;
use std::path::Path;

use rolodeck_types::RawUser;
use serde::Deserialize;

use crate::Result;

/// A record file is either a captured API response (the envelope) or a
/// bare array of user records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Envelope { results: Vec<RawUser> },
    Bare(Vec<RawUser>),
}

/// Load profiles from a local JSON file instead of the network.
pub fn load_records(path: &Path) -> Result<Vec<RawUser>> {
    let content = fs::read_to_string(path)?;
    let parsed: RecordFile = serde_json::from_str(&content)?;
    Ok(match parsed {
        RecordFile::Envelope { results } => results,
        RecordFile::Bare(records) => records,
    })
}
