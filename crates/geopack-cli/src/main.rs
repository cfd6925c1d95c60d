//! geopack — build the balanced location database
//!
//! Usage examples
//! --------------
//!
//! - Build with the compiled-in configuration
//!   $ geopack build
//!
//! - Build from a gzipped gazetteer into a custom directory
//!   $ geopack --input cities1000.txt.gz --data-dir out build
//!
//! - Inspect how many candidates survive filtering per region
//!   $ geopack stats
//!   $ geopack stats --region AF
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use geopack_core::{build_location_db, load_candidates, region_stats, BuildConfig, Region};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = BuildConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    match args.command {
        Commands::Build => {
            let report = build_location_db(&args.input, &args.data_dir, &config)?;
            println!("Build summary:");
            println!("  Eligible cities: {}", report.eligible);
            println!("  Selected: {}", report.selected);
            println!("  Curated: {}", report.curated);
            println!("  Total locations: {}", report.total);
            for (pack, count) in &report.packs {
                println!("  - {pack}.json: {count}");
            }
        }

        Commands::Stats { region } => {
            let only = parse_region(region.as_deref())?;

            let candidates = load_candidates(&args.input, &config)?;
            println!("Eligible candidates: {}", candidates.len());
            for stats in region_stats(&candidates)
                .into_iter()
                .filter(|s| only.map_or(true, |r| s.region == r))
            {
                let quota = config.quotas.get(stats.region).unwrap_or(0);
                println!(
                    "  {}: {} cities from {} countries (quota {})",
                    stats.region, stats.candidates, stats.countries, quota
                );
            }
        }
    }

    Ok(())
}

/// `--region` value to a [`Region`]; `None` means every region.
fn parse_region(code: Option<&str>) -> anyhow::Result<Option<Region>> {
    match code {
        Some(code) => match Region::from_code(code) {
            Some(r) => Ok(Some(r)),
            None => bail!("unknown region: {code}"),
        },
        None => Ok(None),
    }
}
