// crates/geopack-core/src/lib.rs

//! geopack-core
//! ============
//!
//! Builds a static, geographically balanced database of locations from a
//! GeoNames-style world city gazetteer.
//!
//! The pipeline runs once per build and is strictly one-way:
//!
//! ```text
//! gazetteer rows -> loader (filter) -> select (balanced) -> enrich -> emit
//! ```
//!
//! [`build_location_db`] wires the stages together; each stage is also usable
//! on its own.

pub mod builder;
pub mod common;
pub mod config;
pub mod emit;
pub mod enrich;
pub mod error;
pub mod loader;
pub mod model;
pub mod select;
pub mod tables;

// Re-exports
pub use crate::builder::{build_location_db, generate_locations};
pub use crate::common::{region_stats, BuildReport, RegionStats};
pub use crate::config::{BuildConfig, CountryCap, RegionQuota};
pub use crate::error::{GeoPackError, Result};
pub use crate::loader::{load_candidates, read_candidates, IngestStats};
pub use crate::model::{CandidateRecord, OutputRecord, Region, SelectedRecord};
pub use crate::select::{select, select_seeded};
