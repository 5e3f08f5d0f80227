use chrono::{Datelike, NaiveDate};

use crate::core::{
    point::PricePoint,
    zone::{Zone, ZoneId, derive_zones, filter_by_zone},
};

/// Today's prices of all the zones, as loaded once a day.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct DailySeries {
    pub points: Vec<PricePoint>,

    /// Distinct zones of the points, in the order of their first occurrence.
    pub zones: Vec<Zone>,

    /// The day on which the series has been fetched or cached.
    pub cached_on: NaiveDate,
}

impl DailySeries {
    pub fn new(points: Vec<PricePoint>, cached_on: NaiveDate) -> Self {
        let zones = derive_zones(&points);
        Self { points, zones, cached_on }
    }

    #[must_use]
    pub fn cached_on_day(&self) -> u32 {
        self.cached_on.day()
    }

    /// The zone that is shown until another one gets selected.
    #[must_use]
    pub fn default_zone(&self) -> Option<&Zone> {
        self.zones.first()
    }

    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    #[must_use]
    pub fn points_in(&self, zone_id: ZoneId) -> Vec<PricePoint> {
        filter_by_zone(&self.points, zone_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_new_ok() -> Result {
        let time = DateTime::parse_from_rfc3339("2021-10-18T00:00:00+02:00")?;
        let points = vec![
            PricePoint::new(ZoneId(8741), "Península".to_string(), time, 201.42),
            PricePoint::new(ZoneId(8742), "Canarias".to_string(), time, 198.3),
            PricePoint::new(ZoneId(8741), "Península".to_string(), time, 187.55),
        ];
        let series = DailySeries::new(points, NaiveDate::from_ymd_opt(2021, 10, 18).unwrap());
        assert_eq!(series.cached_on_day(), 18);
        assert_eq!(series.zones.iter().map(|zone| zone.id).collect::<Vec<_>>(), [
            ZoneId(8741),
            ZoneId(8742)
        ]);
        assert_eq!(series.default_zone().map(|zone| zone.id), Some(ZoneId(8741)));
        assert_eq!(series.zone(ZoneId(8742)).map(|zone| zone.name.as_str()), Some("Canarias"));
        assert!(series.zone(ZoneId(1)).is_none());
        assert_eq!(series.points_in(ZoneId(8741)).len(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_has_no_default_zone() {
        let series = DailySeries::new(Vec::new(), NaiveDate::from_ymd_opt(2021, 10, 18).unwrap());
        assert!(series.zones.is_empty());
        assert!(series.default_zone().is_none());
    }
}
