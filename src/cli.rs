mod show;
mod zones;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use reqwest::Url;

pub use self::{
    show::{ShowArgs, show},
    zones::{ZonesArgs, zones},
};
use crate::{
    api::{fixture::Fixture, indicator, source::DataSource},
    cache::FileStore,
    clock::SystemClock,
    prelude::*,
    repository::PriceRepository,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: show today's price tiers and the hourly curve of a zone.
    #[clap(name = "show")]
    Show(Box<ShowArgs>),

    /// List the zones present in today's prices.
    #[clap(name = "zones")]
    Zones(Box<ZonesArgs>),

    /// Remove everything from the daily cache.
    #[clap(name = "purge")]
    Purge(CacheArgs),
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Indicator API endpoint. For example: `https://api.esios.ree.es/indicators/1001`.
    #[clap(long = "base-url", env = "BASE_URL", required_unless_present = "fixture")]
    pub base_url: Option<Url>,

    /// Serve the prices from a saved JSON response instead of calling the API.
    ///
    /// Takes precedence over the base URL.
    #[clap(long = "fixture", env = "FIXTURE_PATH")]
    pub fixture: Option<PathBuf>,

    /// API request timeout.
    #[clap(long = "timeout", env = "REQUEST_TIMEOUT", default_value = "10s")]
    pub timeout: humantime::Duration,
}

impl SourceArgs {
    pub fn try_new_source(&self) -> Result<Arc<dyn DataSource>> {
        match (&self.base_url, &self.fixture) {
            (_, Some(path)) => Ok(Arc::new(Fixture::new(path.clone()))),
            (Some(url), None) => Ok(Arc::new(indicator::Api::try_new(url.clone(), *self.timeout)?)),
            (None, None) => bail!("either the base URL or the fixture path is required"),
        }
    }
}

#[derive(Parser)]
pub struct CacheArgs {
    /// Directory of the daily cache.
    #[clap(long = "cache-dir", env = "CACHE_DIR", default_value = ".cache")]
    pub dir: PathBuf,
}

impl CacheArgs {
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.dir)
    }
}

#[derive(Parser)]
pub struct DataArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    #[clap(flatten)]
    pub cache: CacheArgs,
}

impl DataArgs {
    pub fn try_new_repository(&self) -> Result<PriceRepository> {
        Ok(PriceRepository::builder()
            .clock(Arc::new(SystemClock))
            .source(self.source.try_new_source()?)
            .store(Arc::new(self.cache.store()))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_fixture() -> Result {
        let args = Args::try_parse_from([
            "pvpc",
            "show",
            "--fixture",
            "fixtures/pvpc.json",
            "--zone",
            "8742",
            "--timeout",
            "3s",
        ])?;
        let Command::Show(args) = args.command else { bail!("expected `show`") };
        assert_eq!(args.zone.map(|zone| zone.0), Some(8742));
        assert_eq!(args.data.source.fixture, Some(PathBuf::from("fixtures/pvpc.json")));
        assert_eq!(*args.data.source.timeout, std::time::Duration::from_secs(3));
        assert!(!args.refresh);
        Ok(())
    }

    #[test]
    fn test_fixture_takes_precedence_over_base_url() -> Result {
        let args = Args::try_parse_from([
            "pvpc",
            "show",
            "--base-url",
            "https://example.com/indicators/1001",
            "--fixture",
            "fixtures/pvpc.json",
        ])?;
        let Command::Show(args) = args.command else { bail!("expected `show`") };
        assert!(args.data.source.base_url.is_some());
        assert_eq!(args.data.source.fixture, Some(PathBuf::from("fixtures/pvpc.json")));
        args.data.source.try_new_source()?;
        Ok(())
    }
}
