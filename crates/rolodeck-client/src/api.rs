use rolodeck_types::RawUser;
use serde::Deserialize;

use crate::{Error, Result};

/// Endpoint the client talks to unless overridden by config or flag.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Nationalities requested by default. These locales use the English
/// alphabet and 10-digit phone numbers, which keeps the search filter
/// and the phone formatter honest.
pub const DEFAULT_NATIONALITIES: &[&str] = &["us", "ca", "gb", "au"];

/// The API wraps results in an envelope; failures come back as a JSON
/// body with a single `error` field and often still a 200 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Page { results: Vec<RawUser> },
    Failure { error: String },
}

pub struct ProfileClient {
    http: reqwest::Client,
    api_url: String,
}

impl ProfileClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Fetch one batch of `count` random profiles. A single request, no
    /// retries; the caller decides what an error means for the UI.
    pub async fn fetch(&self, count: usize, nationalities: &[String]) -> Result<Vec<RawUser>> {
        let url = self.request_url(count, nationalities);
        let body = self.http.get(&url).send().await?.text().await?;

        match serde_json::from_str::<ApiResponse>(&body)? {
            ApiResponse::Page { results } => Ok(results),
            ApiResponse::Failure { error } => Err(Error::Api(error)),
        }
    }

    fn request_url(&self, count: usize, nationalities: &[String]) -> String {
        let mut url = format!("{}?format=json&results={}", self.api_url, count);
        if !nationalities.is_empty() {
            url.push_str("&nat=");
            url.push_str(&nationalities.join(","));
        }
        url
    }
}
