use clap::Parser;

use crate::{cli::DataArgs, prelude::*, tables::build_zones_table};

#[derive(Parser)]
pub struct ZonesArgs {
    #[clap(flatten)]
    pub data: DataArgs,
}

#[instrument(skip_all)]
pub async fn zones(args: &ZonesArgs) -> Result {
    let series = args.data.try_new_repository()?.get_today_series().await?;
    info!(n_zones = series.zones.len(), "loaded today's prices");
    println!("{}", build_zones_table(&series.zones, series.default_zone()));
    Ok(())
}
