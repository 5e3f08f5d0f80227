use average::Mean;
use chrono::{DateTime, FixedOffset};

use crate::core::point::PricePoint;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TierLabel {
    Minimum,
    Mean,
    Maximum,
}

impl TierLabel {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Minimum => "Minimum",
            Self::Mean => "Mean",
            Self::Maximum => "Maximum",
        }
    }
}

/// Summary statistic of a zone's daily prices.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tier {
    pub label: TierLabel,

    /// Euro per megawatt-hour, rounded to cents.
    pub price: f64,

    /// When the extreme was recorded, `None` for the mean.
    pub occurred_at: Option<DateTime<FixedOffset>>,
}

impl Tier {
    fn new(label: TierLabel, value: f64, occurred_at: Option<DateTime<FixedOffset>>) -> Self {
        Self { label, price: round_cents(value), occurred_at }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tiers {
    pub minimum: Tier,
    pub mean: Tier,
    pub maximum: Tier,
}

impl Tiers {
    /// Tiers in the order they are displayed: the most expensive first.
    #[must_use]
    pub const fn display_order(&self) -> [&Tier; 3] {
        [&self.maximum, &self.mean, &self.minimum]
    }
}

#[derive(Debug, thiserror::Error)]
#[error("cannot aggregate an empty series")]
pub struct EmptySeriesError;

/// Reduce the zone's points into the minimum, mean, and maximum tiers.
///
/// Extremes are compared at full precision, and ties resolve to the earliest point in the input.
pub fn compute_tiers(points: &[PricePoint]) -> Result<Tiers, EmptySeriesError> {
    let (first, rest) = points.split_first().ok_or(EmptySeriesError)?;

    let (mut minimum, mut maximum) = (first, first);
    for point in rest {
        if point.value < minimum.value {
            minimum = point;
        }
        if point.value > maximum.value {
            maximum = point;
        }
    }
    let mean: Mean = points.iter().map(|point| point.value).collect();

    Ok(Tiers {
        minimum: Tier::new(TierLabel::Minimum, minimum.value, Some(minimum.time)),
        mean: Tier::new(TierLabel::Mean, mean.mean(), None),
        maximum: Tier::new(TierLabel::Maximum, maximum.value, Some(maximum.time)),
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{core::zone::ZoneId, prelude::*};

    fn point(time: &str, value: f64) -> Result<PricePoint> {
        Ok(PricePoint::new(
            ZoneId(1),
            "Península".to_string(),
            DateTime::parse_from_rfc3339(time)?,
            value,
        ))
    }

    #[test]
    fn test_compute_tiers_ok() -> Result {
        let points = [
            point("2021-10-18T00:00:00+02:00", 10.0)?,
            point("2021-10-18T12:00:00+02:00", 30.0)?,
            point("2021-10-18T23:00:00+02:00", 20.0)?,
        ];
        let tiers = compute_tiers(&points)?;

        assert_eq!(tiers.minimum.label, TierLabel::Minimum);
        assert_relative_eq!(tiers.minimum.price, 10.0);
        assert_eq!(tiers.minimum.occurred_at, Some(points[0].time));

        assert_eq!(tiers.mean.label, TierLabel::Mean);
        assert_relative_eq!(tiers.mean.price, 20.0);
        assert_eq!(tiers.mean.occurred_at, None);

        assert_eq!(tiers.maximum.label, TierLabel::Maximum);
        assert_relative_eq!(tiers.maximum.price, 30.0);
        assert_eq!(tiers.maximum.occurred_at, Some(points[1].time));
        Ok(())
    }

    #[test]
    fn test_compute_tiers_first_occurrence_wins() -> Result {
        let points = [
            point("2021-10-18T10:00:00+02:00", 5.0)?,
            point("2021-10-18T14:00:00+02:00", 5.0)?,
        ];
        let tiers = compute_tiers(&points)?;
        assert_eq!(tiers.maximum.occurred_at, Some(points[0].time));
        assert_eq!(tiers.minimum.occurred_at, Some(points[0].time));
        Ok(())
    }

    #[test]
    fn test_compute_tiers_compares_at_full_precision() -> Result {
        // Both round to 100.00, but only the second one is the maximum:
        let points = [
            point("2021-10-18T08:00:00+02:00", 99.996)?,
            point("2021-10-18T09:00:00+02:00", 99.999)?,
            point("2021-10-18T10:00:00+02:00", 99.998)?,
        ];
        let tiers = compute_tiers(&points)?;
        assert_eq!(tiers.maximum.occurred_at, Some(points[1].time));
        assert_eq!(tiers.minimum.occurred_at, Some(points[0].time));
        assert_relative_eq!(tiers.maximum.price, 100.0);
        Ok(())
    }

    #[test]
    fn test_compute_tiers_ordered() -> Result {
        let series: [&[f64]; 4] = [
            &[42.0],
            &[201.42, 198.3, 187.55, 250.01, 263.9, 199.99],
            &[-3.5, 0.0, 3.5],
            &[0.104, 0.106, 0.105],
        ];
        for values in series {
            let points = values
                .iter()
                .enumerate()
                .map(|(hour, value)| point(&format!("2021-10-18T{hour:02}:00:00+02:00"), *value))
                .collect::<Result<Vec<_>>>()?;
            let tiers = compute_tiers(&points)?;
            assert!(tiers.minimum.price <= tiers.mean.price, "{values:?}");
            assert!(tiers.mean.price <= tiers.maximum.price, "{values:?}");
        }
        Ok(())
    }

    #[test]
    fn test_compute_tiers_empty() {
        assert!(matches!(compute_tiers(&[]), Err(EmptySeriesError)));
    }

    #[test]
    fn test_display_order() -> Result {
        let tiers = compute_tiers(&[point("2021-10-18T00:00:00+02:00", 1.0)?])?;
        let labels = tiers.display_order().map(|tier| tier.label);
        assert_eq!(labels, [TierLabel::Maximum, TierLabel::Mean, TierLabel::Minimum]);
        Ok(())
    }

    #[test]
    fn test_round_cents() {
        assert_relative_eq!(round_cents(20.0), 20.0);
        assert_relative_eq!(round_cents(187.554), 187.55);
        assert_relative_eq!(round_cents(187.556), 187.56);
    }
}
