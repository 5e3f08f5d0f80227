use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::core::point::PricePoint;

/// Identifier of a geographic pricing area («geo»).
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct ZoneId(pub i64);

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Display)]
#[display("{name} ({id})")]
pub struct Zone {
    #[serde(rename = "geo_id")]
    pub id: ZoneId,

    #[serde(rename = "geo_name")]
    pub name: String,
}

impl From<&PricePoint> for Zone {
    fn from(point: &PricePoint) -> Self {
        Self { id: point.zone_id, name: point.zone_name.clone() }
    }
}

/// Distinct zones in the order of their first occurrence.
#[must_use]
pub fn derive_zones(points: &[PricePoint]) -> Vec<Zone> {
    points.iter().unique_by(|point| point.zone_id).map(Zone::from).collect()
}

/// Points of the zone, in their original order.
///
/// An unknown zone simply yields nothing.
#[must_use]
pub fn filter_by_zone(points: &[PricePoint], zone_id: ZoneId) -> Vec<PricePoint> {
    points.iter().filter(|point| point.zone_id == zone_id).cloned().collect()
}
