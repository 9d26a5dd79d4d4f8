//! Pure display formatters for profile fields. Every function is total
//! over well-formed input and degrades to echoing its input otherwise.

use once_cell::sync::Lazy;
use regex::Regex;
use rolodeck_types::Profile;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// Full street address. US profiles show their state, everyone else
/// shows their country; the branch is an exact string comparison, so
/// "united states" (lowercase) is treated as a country like any other.
pub fn street_address(profile: &Profile) -> String {
    let region = if profile.country == "United States" {
        &profile.state
    } else {
        &profile.country
    };
    format!(
        "{} {}, {}, {}, {}",
        profile.street_number, profile.street_name, profile.city, region, profile.postcode
    )
}

/// `MM/DD/YYYY` sliced straight out of an ISO-8601 date string. No
/// calendar validation, no timezone conversion; anything too short to
/// slice is returned unchanged.
pub fn birth_date(raw: &str) -> String {
    match (raw.get(0..4), raw.get(5..7), raw.get(8..10)) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", month, day, year),
        _ => raw.to_string(),
    }
}

/// `(XXX) XXX-XXXX` from whatever punctuation the API wrapped the
/// number in. A single leading NANP country code ("1" on an 11-digit
/// number) is dropped first. Numbers that still have fewer than 10
/// digits come back as the bare cleaned digits, unformatted.
pub fn phone(raw: &str) -> String {
    let mut digits = NON_DIGITS.replace_all(raw, "").into_owned();
    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }
    if digits.len() < 10 {
        return digits;
    }
    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
}
