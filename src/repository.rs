use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::{
    api::source::{DataSource, FetchError},
    cache::{CacheEntry, CacheStore, key_for},
    clock::Clock,
    core::series::DailySeries,
    prelude::*,
};

/// Today's prices, fetched at most once a day.
///
/// Loads are serialised: a call made while another one is fetching waits for it and then reuses
/// its result instead of fetching again.
#[derive(bon::Builder)]
pub struct PriceRepository {
    clock: Arc<dyn Clock>,
    source: Arc<dyn DataSource>,
    store: Arc<dyn CacheStore>,

    /// Series loaded during this session.
    #[builder(skip)]
    loaded: Mutex<Option<Arc<DailySeries>>>,
}

impl PriceRepository {
    /// Get today's series from the session, the cache, or the source, in that order.
    pub async fn get_today_series(&self) -> Result<Arc<DailySeries>, FetchError> {
        self.load(false).await
    }

    /// Ignore whatever is cached and fetch today's series again.
    ///
    /// On failure, the previously loaded series and today's cache entry are kept.
    pub async fn refresh(&self) -> Result<Arc<DailySeries>, FetchError> {
        self.load(true).await
    }

    #[instrument(skip(self))]
    async fn load(&self, force: bool) -> Result<Arc<DailySeries>, FetchError> {
        let mut loaded = self.loaded.lock().await;
        let today = self.clock.today();
        let key = key_for(today);

        if !force {
            if let Some(series) = loaded.as_ref().filter(|series| series.cached_on == today) {
                debug!("already loaded");
                return Ok(Arc::clone(series));
            }
            if let Some(entry) = self.read_entry(&key, today) {
                let series = Arc::new(DailySeries::new(entry.payload.indicator.points(), today));
                *loaded = Some(Arc::clone(&series));
                return Ok(series);
            }
            *loaded = None;
            self.clear_store();
        }

        let mut payload = self.source.fetch().await?;
        let series = Arc::new(DailySeries::new(payload.indicator.points(), today));
        info!(n_points = series.points.len(), n_zones = series.zones.len(), "fetched");

        if self.clock.today() != today {
            warn!(%today, "the day has changed while fetching, not caching");
            return Ok(series);
        }
        if force {
            // Today's entry is only replaced once the refresh has succeeded.
            self.clear_store();
        }
        payload.indicator.geos = Some(series.zones.clone());
        self.write_entry(&key, &CacheEntry::new(today, payload));
        *loaded = Some(Arc::clone(&series));
        Ok(series)
    }

    /// Read today's entry. Anything unusable is treated as a cache miss.
    fn read_entry(&self, key: &str, today: NaiveDate) -> Option<CacheEntry> {
        let json = match self.store.get(key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!(key, "cache miss");
                return None;
            }
            Err(error) => {
                warn!(key, "failed to read the cache: {error:#}");
                return None;
            }
        };
        match CacheEntry::from_json(key, &json) {
            Ok(entry) if entry.is_fresh(today) => {
                info!(key, "cache hit");
                Some(entry)
            }
            Ok(entry) => {
                info!(key, date = %entry.date, "stale cache entry");
                None
            }
            Err(error) => {
                warn!("{:#}", Error::from(error));
                None
            }
        }
    }

    fn write_entry(&self, key: &str, entry: &CacheEntry) {
        let result =
            entry.to_json().map_err(Error::from).and_then(|json| self.store.set(key, &json));
        if let Err(error) = result {
            error!(key, "failed to save the cache: {error:#}");
        }
    }

    fn clear_store(&self) {
        if let Err(error) = self.store.clear() {
            error!("failed to clear the cache: {error:#}");
        }
    }
}
