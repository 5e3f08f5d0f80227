use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::indicator::IndicatorResponse;

/// Where today's raw prices come from.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<IndicatorResponse, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("the API responded with `{status}`")]
    Status { status: StatusCode },

    #[error("failed to call the API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read `{}`", .path.display())]
    Fixture {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize the payload")]
    Payload(#[from] serde_json::Error),
}
