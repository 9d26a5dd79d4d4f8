//! Profile sources for the directory: the randomuser.me HTTP client and
//! a local JSON file loader. Both yield the same wire records; callers
//! decide how a failure is surfaced (the TUI treats any error as "zero
//! profiles" plus a static message, it never aborts).

mod api;
mod error;
mod records;

pub use api::{DEFAULT_API_URL, DEFAULT_NATIONALITIES, ProfileClient};
pub use error::{Error, Result};
pub use records::load_records;
