//! Wire-format records as served by the randomuser.me API.
//!
//! Only the fields the directory consumes are modeled; everything else
//! in the payload is ignored. `postcode` is the one irregular field:
//! the API emits it as a JSON string for some nationalities and a bare
//! number for others, so it deserializes from both.

use serde::{Deserialize, Deserializer, Serialize};

/// One user record from the API `results` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub name: RawName,
    pub email: String,
    pub cell: String,
    pub dob: RawDob,
    pub location: RawLocation,
    pub picture: RawPicture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDob {
    /// ISO-8601 timestamp, e.g. `1990-05-14T00:00:00.000Z`.
    pub date: String,
    #[serde(default)]
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLocation {
    pub street: RawStreet,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(deserialize_with = "postcode_as_string")]
    pub postcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStreet {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPicture {
    pub large: String,
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

fn postcode_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Postcode {
        Text(String),
        Number(i64),
    }

    Ok(match Postcode::deserialize(deserializer)? {
        Postcode::Text(s) => s,
        Postcode::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const US_RECORD: &str = r#"{
        "name": {"title": "Ms", "first": "Jane", "last": "Doe"},
        "email": "jane.doe@example.com",
        "cell": "(555) 123-4567",
        "dob": {"date": "1990-05-14T00:00:00.000Z", "age": 35},
        "location": {
            "street": {"number": 123, "name": "Main St"},
            "city": "Springfield",
            "state": "Illinois",
            "country": "United States",
            "postcode": 62704
        },
        "picture": {
            "large": "https://example.com/large.jpg",
            "medium": "https://example.com/medium.jpg",
            "thumbnail": "https://example.com/thumb.jpg"
        }
    }"#;

    const GB_RECORD: &str = r#"{
        "name": {"title": "Mr", "first": "Alfred", "last": "Hughes"},
        "email": "alfred.hughes@example.com",
        "cell": "0700-123-456",
        "dob": {"date": "1962-01-30T11:22:33.000Z", "age": 64},
        "location": {
            "street": {"number": 9, "name": "High Street"},
            "city": "York",
            "state": "North Yorkshire",
            "country": "United Kingdom",
            "postcode": "YO1 7HU"
        },
        "picture": {
            "large": "https://example.com/large2.jpg",
            "medium": "https://example.com/medium2.jpg",
            "thumbnail": "https://example.com/thumb2.jpg"
        }
    }"#;

    #[test]
    fn numeric_postcode_becomes_string() {
        let user: RawUser = serde_json::from_str(US_RECORD).unwrap();
        assert_eq!(user.location.postcode, "62704");
    }

    #[test]
    fn string_postcode_is_kept() {
        let user: RawUser = serde_json::from_str(GB_RECORD).unwrap();
        assert_eq!(user.location.postcode, "YO1 7HU");
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let mut value: serde_json::Value = serde_json::from_str(US_RECORD).unwrap();
        value["gender"] = serde_json::json!("female");
        value["login"] = serde_json::json!({"uuid": "abc"});

        let user: RawUser = serde_json::from_value(value).unwrap();
        assert_eq!(user.name.first, "Jane");
        assert_eq!(user.name.last, "Doe");
    }
}
