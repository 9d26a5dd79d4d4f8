//! Fixture builders shared by the unit tests in this crate.

use rolodeck_types::raw::{RawDob, RawLocation, RawName, RawPicture, RawStreet};
use rolodeck_types::{Profile, RawUser};

pub fn raw_user(first: &str, last: &str) -> RawUser {
    RawUser {
        name: RawName {
            title: "Ms".to_string(),
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        cell: "(217) 555-0136".to_string(),
        dob: RawDob {
            date: "1990-05-14T07:32:12.451Z".to_string(),
            age: 36,
        },
        location: RawLocation {
            street: RawStreet {
                number: 1208,
                name: "Maple Avenue".to_string(),
            },
            city: "Springfield".to_string(),
            state: "Illinois".to_string(),
            country: "United States".to_string(),
            postcode: "62704".to_string(),
        },
        picture: RawPicture {
            large: "https://example.com/large.jpg".to_string(),
            medium: "https://example.com/medium.jpg".to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
        },
    }
}

pub fn profile(index: usize, first: &str, last: &str) -> Profile {
    Profile::from_raw(index, raw_user(first, last))
}

pub fn profiles(names: &[(&str, &str)]) -> Vec<Profile> {
    names
        .iter()
        .enumerate()
        .map(|(i, (first, last))| profile(i, first, last))
        .collect()
}
