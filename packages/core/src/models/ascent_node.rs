//! Type-Safe Ascent Payload
//!
//! An Ascent logs one attempt or send of a Route. Ascent nodes are named
//! automatically (`ascent_<8 hex chars>`) and always hang below a Route.
//!
//! The `date` field is persisted as an ISO-8601 calendar date
//! (`YYYY-MM-DD`), which is what chrono's serde support emits for
//! [`NaiveDate`].
//!
//! # Examples
//!
//! ```rust
//! use rocdoc_core::models::Ascent;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let ascent = Ascent::on(date).with_tries("redpoint").as_first_ascent();
//!
//! assert_eq!(ascent.date, date);
//! assert_eq!(ascent.tries, "redpoint");
//! assert!(ascent.first_ascent);
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default value of `tries`
pub const FLASH: &str = "flash";

/// Prefix of generated ascent names
pub const ASCENT_NAME_PREFIX: &str = "ascent_";

/// Extra fields of an Ascent node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ascent {
    /// Calendar date of the ascent, today by default
    pub date: NaiveDate,

    /// Style of the send (`"flash"`, `"onsight"`, `"redpoint"`, a try count, ...)
    pub tries: String,

    /// Whether this was the first ascent of the route
    pub first_ascent: bool,
}

impl Default for Ascent {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
            tries: FLASH.to_string(),
            first_ascent: false,
        }
    }
}

impl Ascent {
    /// Ascent dated today
    pub fn new() -> Self {
        Self::default()
    }

    /// Ascent on a specific date
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    pub fn with_tries(mut self, tries: impl Into<String>) -> Self {
        self.tries = tries.into();
        self
    }

    /// Mark as first ascent
    pub fn as_first_ascent(mut self) -> Self {
        self.first_ascent = true;
        self
    }

    /// Generate a fresh `ascent_<8 hex chars>` node name
    pub fn generate_name() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{}{}", ASCENT_NAME_PREFIX, &hex[..8])
    }
}
