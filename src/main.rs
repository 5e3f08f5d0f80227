#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cache;
mod cli;
mod clock;
mod core;
mod prelude;
mod repository;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cache::CacheStore,
    cli::{Args, Command, show, zones},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Show(args) => {
            show(&args).await?;
        }
        Command::Zones(args) => {
            zones(&args).await?;
        }
        Command::Purge(args) => {
            args.store().clear()?;
            info!(dir = %args.dir.display(), "purged the cache");
        }
    }

    info!("done!");
    Ok(())
}
