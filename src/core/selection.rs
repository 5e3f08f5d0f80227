use std::sync::Arc;

use crate::{
    core::{
        point::PricePoint,
        series::DailySeries,
        tier::{Tiers, compute_tiers},
        zone::{Zone, ZoneId},
    },
    prelude::*,
};

/// Selected zone of today's series together with its tiers.
///
/// The tiers get recomputed on every zone change and are never stored anywhere else.
#[must_use]
pub struct Selection {
    series: Arc<DailySeries>,
    selected: Option<(Zone, Tiers)>,
}

impl Selection {
    /// Select the default zone, if there is any.
    pub fn try_new(series: Arc<DailySeries>) -> Result<Self> {
        let mut this = Self { series, selected: None };
        if let Some(zone_id) = this.series.default_zone().map(|zone| zone.id) {
            this.select(zone_id)?;
        }
        Ok(this)
    }

    /// Switch to another zone and recompute its tiers.
    ///
    /// The current selection is left intact on error.
    #[instrument(skip(self))]
    pub fn select(&mut self, zone_id: ZoneId) -> Result {
        let zone = self
            .series
            .zone(zone_id)
            .with_context(|| format!("zone {zone_id} is not present in today's prices"))?
            .clone();
        let tiers = compute_tiers(&self.series.points_in(zone_id))
            .with_context(|| format!("failed to aggregate the prices of {zone}"))?;
        debug!(%zone, minimum = tiers.minimum.price, maximum = tiers.maximum.price, "selected");
        self.selected = Some((zone, tiers));
        Ok(())
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.series.zones
    }

    #[must_use]
    pub fn zone(&self) -> Option<&Zone> {
        self.selected.as_ref().map(|(zone, _)| zone)
    }

    #[must_use]
    pub fn tiers(&self) -> Option<&Tiers> {
        self.selected.as_ref().map(|(_, tiers)| tiers)
    }

    /// Points of the selected zone, for the hourly chart.
    #[must_use]
    pub fn points(&self) -> Vec<PricePoint> {
        self.zone().map(|zone| self.series.points_in(zone.id)).unwrap_or_default()
    }
}
