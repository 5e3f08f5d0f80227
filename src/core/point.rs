use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::zone::ZoneId;

/// Hourly price of a zone, as published by the indicator API.
#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, derive_more::Constructor)]
pub struct PricePoint {
    #[serde(rename = "geo_id")]
    pub zone_id: ZoneId,

    #[serde(rename = "geo_name")]
    pub zone_name: String,

    /// Start of the hour, in the offset published by the API.
    #[serde(rename = "datetime")]
    pub time: DateTime<FixedOffset>,

    /// Euro per megawatt-hour.
    pub value: f64,
}
