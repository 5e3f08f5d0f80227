//! Indicator API client, for example `https://api.esios.ree.es/indicators/1001`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    api::{
        client,
        source::{DataSource, FetchError},
    },
    core::{point::PricePoint, zone::Zone},
    prelude::*,
};

pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    pub fn try_new(url: Url, timeout: std::time::Duration) -> Result<Self> {
        Ok(Self { client: client::try_new(timeout)?, url })
    }
}

#[async_trait]
impl DataSource for Api {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn fetch(&self) -> Result<IndicatorResponse, FetchError> {
        info!("fetching…");
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { status });
        }
        let payload = response.json::<IndicatorResponse>().await?;
        info!(n_values = payload.indicator.values.len(), "fetched");
        Ok(payload)
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IndicatorResponse {
    pub indicator: Indicator,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Indicator {
    /// Values as published, parsed on demand by [`Indicator::points`].
    pub values: Vec<Value>,

    /// Zones derived from the values, added before the payload gets cached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geos: Option<Vec<Zone>>,

    /// Everything else the API returns, kept as is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Indicator {
    /// Parse the price points, skipping the values that do not make one.
    #[must_use]
    pub fn points(&self) -> Vec<PricePoint> {
        self.values
            .iter()
            .filter_map(|value| match PricePoint::deserialize(value) {
                Ok(point) => Some(point),
                Err(error) => {
                    warn!(%value, "skipping the malformed value: {error:#}");
                    None
                }
            })
            .collect()
    }
}
