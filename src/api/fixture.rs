use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    api::{
        indicator::IndicatorResponse,
        source::{DataSource, FetchError},
    },
    prelude::*,
};

/// Serves a previously saved response instead of calling the API.
pub struct Fixture {
    path: PathBuf,
}

impl Fixture {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DataSource for Fixture {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<IndicatorResponse, FetchError> {
        info!("reading…");
        let contents = std::fs::read(&self.path)
            .map_err(|source| FetchError::Fixture { path: self.path.clone(), source })?;
        Ok(serde_json::from_slice(&contents)?)
    }
}
