use chrono::Local;
use clap::Parser;

use crate::{
    cli::DataArgs,
    core::{selection::Selection, zone::ZoneId},
    prelude::*,
    tables::{build_hourly_table, build_tiers_table, build_zones_table},
};

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    pub data: DataArgs,

    /// Zone to summarize, the first one in the prices by default.
    #[clap(long = "zone", env = "ZONE_ID")]
    pub zone: Option<ZoneId>,

    /// Ignore the cached prices and fetch them again.
    #[clap(long)]
    pub refresh: bool,
}

#[instrument(skip_all)]
pub async fn show(args: &ShowArgs) -> Result {
    let repository = args.data.try_new_repository()?;
    let series = if args.refresh {
        repository.refresh().await?
    } else {
        repository.get_today_series().await?
    };
    info!(
        day = series.cached_on_day(),
        n_points = series.points.len(),
        n_zones = series.zones.len(),
        "loaded today's prices"
    );

    let mut selection = Selection::try_new(series)?;
    if let Some(zone_id) = args.zone {
        selection.select(zone_id)?;
    }
    let (Some(zone), Some(tiers)) = (selection.zone(), selection.tiers()) else {
        bail!("there are no prices for today");
    };

    println!("{}", build_zones_table(selection.zones(), Some(zone)));
    println!("{}", build_tiers_table(tiers));
    println!("{}", build_hourly_table(&selection.points(), tiers.mean.price, Local::now()));
    Ok(())
}
