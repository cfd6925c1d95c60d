// crates/geopack-core/src/loader/mod.rs

//! # Gazetteer Loader
//!
//! Handles the physical layer (I/O, decompression) and turns raw rows into
//! [`CandidateRecord`]s. Rows are dropped silently, in this order, when they:
//!
//! 1. do not parse (wrong field count, non-numeric numbers),
//! 2. belong to a country without a region,
//! 3. belong to a low-coverage country,
//! 4. fall below the population floor.
//!
//! Duplicates are kept as-is.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::model::CandidateRecord;
use crate::tables::region_for_country;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

pub mod common_io;
pub mod gazetteer;

pub use gazetteer::{parse_row, RawRow};

/// Why rows were kept or dropped during one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub rows: usize,
    pub malformed: usize,
    pub unmapped: usize,
    pub low_coverage: usize,
    pub below_floor: usize,
    pub eligible: usize,
}

/// Outcome of filtering a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Eligible(CandidateRecord),
    Malformed,
    Unmapped,
    LowCoverage,
    BelowFloor,
}

/// Applies the eligibility rules of a [`BuildConfig`] to gazetteer rows.
pub struct Ingestor<'a> {
    config: &'a BuildConfig,
    stats: IngestStats,
}

impl<'a> Ingestor<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            config,
            stats: IngestStats::default(),
        }
    }

    pub fn classify(&self, line: &str) -> RowOutcome {
        let Some(row) = parse_row(line) else {
            return RowOutcome::Malformed;
        };
        let Some(region) = region_for_country(row.country_code) else {
            return RowOutcome::Unmapped;
        };
        if self.config.is_low_coverage(row.country_code) {
            return RowOutcome::LowCoverage;
        }
        if row.population < self.config.population_floor {
            return RowOutcome::BelowFloor;
        }
        RowOutcome::Eligible(CandidateRecord {
            name: row.name.to_string(),
            latitude: row.latitude,
            longitude: row.longitude,
            country_code: row.country_code.to_string(),
            population: row.population,
            feature_code: row.feature_code.to_string(),
            region,
        })
    }

    /// Classifies a line, records the outcome, and returns the record if eligible.
    pub fn accept(&mut self, line: &str) -> Option<CandidateRecord> {
        self.stats.rows += 1;
        match self.classify(line) {
            RowOutcome::Eligible(rec) => {
                self.stats.eligible += 1;
                return Some(rec);
            }
            RowOutcome::Malformed => self.stats.malformed += 1,
            RowOutcome::Unmapped => self.stats.unmapped += 1,
            RowOutcome::LowCoverage => self.stats.low_coverage += 1,
            RowOutcome::BelowFloor => self.stats.below_floor += 1,
        }
        None
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }
}

/// Reads every line of `reader` and keeps the eligible ones, in input order.
pub fn read_candidates<R: BufRead>(
    reader: R,
    config: &BuildConfig,
) -> Result<(Vec<CandidateRecord>, IngestStats)> {
    let mut ingestor = Ingestor::new(config);
    let mut out = Vec::new();
    for line in reader.lines() {
        if let Some(rec) = ingestor.accept(&line?) {
            out.push(rec);
        }
    }
    let stats = ingestor.stats();
    debug!(?stats, "ingestion finished");
    Ok((out, stats))
}

/// Opens `path` (plain or `.gz`) and loads its eligible candidates.
pub fn load_candidates(path: &Path, config: &BuildConfig) -> Result<Vec<CandidateRecord>> {
    info!(path = %path.display(), "loading gazetteer");
    let reader = common_io::open_stream(path)?;
    let (candidates, stats) = read_candidates(reader, config)?;
    info!(
        rows = stats.rows,
        eligible = stats.eligible,
        "loaded {} eligible cities",
        candidates.len()
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn row(name: &str, cc: &str, pop: &str) -> String {
        format!("1\t{name}\t{name}\t\t10.5\t20.25\tP\tPPL\t{cc}\t\t\t\t\t\t{pop}\t\t\t\t")
    }

    #[test]
    fn filters_in_documented_order() {
        let cfg = BuildConfig::default();
        let ing = Ingestor::new(&cfg);
        assert_eq!(ing.classify("garbage"), RowOutcome::Malformed);
        assert_eq!(ing.classify(&row("X", "AQ", "50000")), RowOutcome::Unmapped);
        // Low coverage wins over the population floor.
        assert_eq!(ing.classify(&row("X", "KP", "10")), RowOutcome::LowCoverage);
        assert_eq!(ing.classify(&row("X", "DE", "9999")), RowOutcome::BelowFloor);
        match ing.classify(&row("Bonn", "DE", "10000")) {
            RowOutcome::Eligible(rec) => {
                assert_eq!(rec.region, Region::Europe);
                assert_eq!(rec.population, 10_000);
                assert_eq!(rec.feature_code, "PPL");
            }
            other => panic!("expected eligible, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_coordinates_never_become_candidates() {
        let cfg = BuildConfig::default();
        let ing = Ingestor::new(&cfg);
        let nan_row = "1\tX\tX\t\tnan\tinf\tP\tPPL\tDE\t\t\t\t\t\t50000";
        assert_eq!(ing.classify(nan_row), RowOutcome::Malformed);
    }

    #[test]
    fn read_candidates_keeps_order_and_duplicates() {
        let cfg = BuildConfig::default();
        let input = [
            row("Lyon", "FR", "500000"),
            row("Tiny", "FR", "12"),
            row("Lyon", "FR", "500000"),
            "not\ta\trow".to_string(),
            row("Quito", "EC", "1500000"),
        ]
        .join("\n");

        let (cands, stats) = read_candidates(input.as_bytes(), &cfg).unwrap();
        let names: Vec<&str> = cands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Lyon", "Lyon", "Quito"]);
        assert_eq!(
            stats,
            IngestStats {
                rows: 5,
                malformed: 1,
                unmapped: 0,
                low_coverage: 0,
                below_floor: 1,
                eligible: 3,
            }
        );
    }
}
