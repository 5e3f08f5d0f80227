mod file;
#[cfg(test)]
mod memory;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub use self::memory::MemoryStore;
pub use self::file::FileStore;
use crate::{api::indicator::IndicatorResponse, prelude::*};

/// Key-value string storage behind the daily cache.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result;

    /// Remove all the entries.
    fn clear(&self) -> Result;
}

/// Cache key of the day.
///
/// Only the day of month is encoded, the entry itself carries the full date.
#[must_use]
pub fn key_for(on: NaiveDate) -> String {
    format!("today-data-{}", on.day())
}

#[must_use]
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct CacheEntry {
    pub date: NaiveDate,
    pub payload: IndicatorResponse,
}

#[derive(Debug, thiserror::Error)]
#[error("malformed cache entry `{key}`")]
pub struct CacheDeserializationError {
    key: String,

    #[source]
    source: serde_json::Error,
}

impl CacheEntry {
    pub const fn new(date: NaiveDate, payload: IndicatorResponse) -> Self {
        Self { date, payload }
    }

    pub fn from_json(key: &str, json: &str) -> Result<Self, CacheDeserializationError> {
        serde_json::from_str(json)
            .map_err(|source| CacheDeserializationError { key: key.to_string(), source })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn is_fresh(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}
