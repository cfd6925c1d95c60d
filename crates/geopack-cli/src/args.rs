use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geopack
#[derive(Debug, Parser)]
#[command(
    name = "geopack",
    version,
    about = "Builds balanced location packs from a GeoNames city gazetteer"
)]
pub struct CliArgs {
    /// Path to the gazetteer (tab-separated, optionally .gz)
    #[arg(short = 'i', long = "input", global = true, default_value = "/tmp/cities1000.txt")]
    pub input: PathBuf,

    /// Output directory; receives locations.json and packs/
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Override the compiled-in random seed
    #[arg(long = "seed", global = true)]
    pub seed: Option<u64>,

    /// Log per-region details
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select, enrich and write the master list and pack files
    Build,

    /// Show eligible candidates per region without writing anything
    Stats {
        /// Only report this region (EU, AS, NA, SA, AF, OC)
        #[arg(short = 'r', long = "region")]
        region: Option<String>,
    },
}
