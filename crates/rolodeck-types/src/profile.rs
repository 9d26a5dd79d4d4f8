//! Domain representation of a directory member.

use serde::{Deserialize, Serialize};

use crate::raw::RawUser;

/// One fetched user, flattened for display. Immutable after
/// construction; the ordinal `index` is its identity everywhere in the
/// directory (store, card grid, overlay list are parallel by index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub index: usize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub thumbnail_url: String,
    pub picture_url: String,
    /// Cell number exactly as the API served it, punctuation included.
    pub cell: String,
    /// ISO-8601 date-of-birth string, unparsed.
    pub birth_date: String,
    pub street_number: u32,
    pub street_name: String,
    pub postcode: String,
}

impl Profile {
    pub fn from_raw(index: usize, raw: RawUser) -> Self {
        Self {
            index,
            first_name: raw.name.first,
            last_name: raw.name.last,
            email: raw.email,
            city: raw.location.city,
            state: raw.location.state,
            country: raw.location.country,
            thumbnail_url: raw.picture.medium,
            picture_url: raw.picture.large,
            cell: raw.cell,
            birth_date: raw.dob.date,
            street_number: raw.location.street.number,
            street_name: raw.location.street.name,
            postcode: raw.location.postcode,
        }
    }

    /// "First Last", the display title used by cards and overlays.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
