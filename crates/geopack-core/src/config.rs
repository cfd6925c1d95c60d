// crates/geopack-core/src/config.rs
use crate::error::{GeoPackError, Result};
use crate::model::Region;
use crate::tables;
use std::collections::{HashMap, HashSet};

// -----------------------------------------------------------------------------
// QUOTAS
// -----------------------------------------------------------------------------

/// Target number of selected records per region.
///
/// The order of entries is the order the selector processes regions in,
/// which matters because the random source is shared across regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionQuota {
    entries: Vec<(Region, usize)>,
}

impl RegionQuota {
    /// Fails if a region is listed twice.
    pub fn new(entries: impl IntoIterator<Item = (Region, usize)>) -> Result<Self> {
        let entries: Vec<(Region, usize)> = entries.into_iter().collect();
        let mut seen = HashSet::new();
        for (region, _) in &entries {
            if !seen.insert(*region) {
                return Err(GeoPackError::InvalidConfig(format!(
                    "region {region} has more than one quota"
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, region: Region) -> Option<usize> {
        self.iter().find(|(r, _)| *r == region).map(|(_, q)| q)
    }

    /// Upper bound on the number of generated records.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, q)| q).sum()
    }
}

impl Default for RegionQuota {
    fn default() -> Self {
        Self {
            entries: tables::REGION_TARGETS.to_vec(),
        }
    }
}

// -----------------------------------------------------------------------------
// CAPS
// -----------------------------------------------------------------------------

/// Maximum records one country may contribute within a single region pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCap {
    caps: HashMap<String, usize>,
    default_cap: usize,
}

impl CountryCap {
    pub fn new(default_cap: usize) -> Result<Self> {
        Self::check(default_cap, "default")?;
        Ok(Self {
            caps: HashMap::new(),
            default_cap,
        })
    }

    pub fn with_cap(mut self, cc: impl Into<String>, cap: usize) -> Result<Self> {
        let cc = cc.into();
        Self::check(cap, &cc)?;
        self.caps.insert(cc, cap);
        Ok(self)
    }

    /// Country-specific cap if configured, the default otherwise.
    pub fn cap_for(&self, cc: &str) -> usize {
        self.caps.get(cc).copied().unwrap_or(self.default_cap)
    }

    pub fn default_cap(&self) -> usize {
        self.default_cap
    }

    fn check(cap: usize, who: &str) -> Result<()> {
        if cap == 0 {
            return Err(GeoPackError::InvalidConfig(format!(
                "cap for {who} must be positive"
            )));
        }
        Ok(())
    }
}

impl Default for CountryCap {
    fn default() -> Self {
        Self {
            caps: tables::COUNTRY_CAPS
                .iter()
                .map(|(cc, cap)| ((*cc).to_string(), *cap))
                .collect(),
            default_cap: tables::DEFAULT_COUNTRY_CAP,
        }
    }
}

// -----------------------------------------------------------------------------
// BUILD CONFIGURATION
// -----------------------------------------------------------------------------

/// Everything one build needs besides its input and output paths.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub quotas: RegionQuota,
    pub caps: CountryCap,
    /// Countries dropped at ingestion because of poor imagery coverage.
    pub low_coverage: HashSet<String>,
    pub population_floor: u64,
    /// The candidate pool for a region is its top `quota * oversample_factor` cities.
    pub oversample_factor: usize,
    pub seed: u64,
    pub feature_word_probability: f64,
    /// Decimal places kept in published coordinates.
    pub coordinate_precision: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            quotas: RegionQuota::default(),
            caps: CountryCap::default(),
            low_coverage: tables::low_coverage_set(),
            population_floor: tables::DEFAULT_POPULATION_FLOOR,
            oversample_factor: tables::DEFAULT_OVERSAMPLE_FACTOR,
            seed: tables::DEFAULT_SEED,
            feature_word_probability: tables::DEFAULT_FEATURE_WORD_PROBABILITY,
            coordinate_precision: tables::DEFAULT_COORDINATE_PRECISION,
        }
    }
}

impl BuildConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn is_low_coverage(&self, cc: &str) -> bool {
        self.low_coverage.contains(cc)
    }
}
