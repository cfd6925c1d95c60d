// crates/geopack-core/src/common.rs
use crate::model::{CandidateRecord, Region};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary of one finished build.
///
/// Returned by [`build_location_db`](crate::build_location_db); the counts
/// reflect what was actually written after curated records were merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub eligible: usize,
    pub selected: usize,
    pub curated: usize,
    pub total: usize,
    /// `(pack id, locations)` in the order the pack files were written.
    pub packs: Vec<(String, usize)>,
}

/// Eligible candidates for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: Region,
    pub candidates: usize,
    pub countries: usize,
}

/// Candidate and distinct-country counts per region, in [`Region::ALL`] order.
pub fn region_stats(candidates: &[CandidateRecord]) -> Vec<RegionStats> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let in_region = candidates.iter().filter(|c| c.region == region);
            let countries: HashSet<&str> = in_region.clone().map(|c| c.country_code.as_str()).collect();
            RegionStats {
                region,
                candidates: in_region.count(),
                countries: countries.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_candidates_and_countries_per_region() {
        let mk = |cc: &str, region| CandidateRecord {
            name: cc.into(),
            latitude: 0.0,
            longitude: 0.0,
            country_code: cc.into(),
            population: 20_000,
            feature_code: "PPL".into(),
            region,
        };
        let cands = vec![
            mk("DE", Region::Europe),
            mk("DE", Region::Europe),
            mk("FR", Region::Europe),
            mk("JP", Region::Asia),
        ];
        let stats = region_stats(&cands);
        assert_eq!(stats.len(), Region::ALL.len());
        assert_eq!(
            stats[0],
            RegionStats {
                region: Region::Europe,
                candidates: 3,
                countries: 2
            }
        );
        assert_eq!(stats[1].candidates, 1);
        assert_eq!(stats[5].candidates, 0);
    }
}
