//! The profile store: fetch order in, dense ordinal indices out.

use rolodeck_types::{Profile, RawUser};

/// Owns every profile for the session. Populated once, never resized;
/// the ordinal indices it assigns are the identity used by the card
/// grid and the overlay list.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    /// Build the store from fetched records, preserving input order and
    /// assigning indices `0..n`. An empty input yields an empty store;
    /// downstream components render nothing rather than erroring.
    pub fn load(records: Vec<RawUser>) -> Self {
        let profiles = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Profile::from_raw(index, raw))
            .collect();
        Self { profiles }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
