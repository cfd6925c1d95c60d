// crates/geopack-core/src/select.rs

//! # Balanced Selector
//!
//! Picks a bounded, globally spread subset of candidates. Each region is
//! handled on its own, in quota order:
//!
//! 1. sort the region's candidates by population, descending (stable),
//! 2. keep the top `quota * oversample` as the pool,
//! 3. shuffle the pool with the shared generator,
//! 4. walk it once, skipping countries that reached their cap for this
//!    region, until the quota is met or the pool runs out.
//!
//! Under-filling a region is not an error. A candidate that misses the pool
//! is never reconsidered, even if caps later reject pool members.

use crate::config::{CountryCap, RegionQuota};
use crate::model::{CandidateRecord, Region, SelectedRecord};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The generator a build is seeded with.
pub type BuildRng = ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> BuildRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Runs a selection with a fresh generator seeded from `seed`.
pub fn select_seeded(
    candidates: Vec<CandidateRecord>,
    quotas: &RegionQuota,
    caps: &CountryCap,
    oversample: usize,
    seed: u64,
) -> Vec<SelectedRecord> {
    let mut rng = seeded_rng(seed);
    select(candidates, quotas, caps, oversample, &mut rng)
}

/// Balanced selection over all regions in `quotas`.
///
/// `rng` is advanced sequentially across regions, never reset, so the result
/// depends on quota order as well as on the seed.
pub fn select<R: Rng + ?Sized>(
    candidates: Vec<CandidateRecord>,
    quotas: &RegionQuota,
    caps: &CountryCap,
    oversample: usize,
    rng: &mut R,
) -> Vec<SelectedRecord> {
    let mut by_region: HashMap<Region, Vec<CandidateRecord>> = HashMap::new();
    for c in candidates {
        by_region.entry(c.region).or_default().push(c);
    }

    let mut selected = Vec::with_capacity(quotas.total());
    for (region, quota) in quotas.iter() {
        let pool = by_region.remove(&region).unwrap_or_default();
        if pool.is_empty() {
            debug!(%region, quota, "no candidates for region");
            continue;
        }
        let picked = select_region(pool, quota, caps, oversample, rng);
        if picked.len() < quota {
            warn!(%region, quota, picked = picked.len(), "region under-filled");
        } else {
            debug!(%region, picked = picked.len(), "region filled");
        }
        selected.extend(picked);
    }

    info!("selected {} cities", selected.len());
    selected
}

/// One region's pass. Country counts live only for the duration of this call.
fn select_region<R: Rng + ?Sized>(
    mut pool: Vec<CandidateRecord>,
    quota: usize,
    caps: &CountryCap,
    oversample: usize,
    rng: &mut R,
) -> Vec<SelectedRecord> {
    pool.sort_by(|a, b| b.population.cmp(&a.population));
    pool.truncate(quota.saturating_mul(oversample));
    pool.shuffle(rng);

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut picked = Vec::with_capacity(quota.min(pool.len()));
    for city in pool {
        if picked.len() >= quota {
            break;
        }
        let count = counts.entry(city.country_code.clone()).or_insert(0);
        if *count >= caps.cap_for(&city.country_code) {
            continue;
        }
        *count += 1;
        picked.push(city);
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn city(name: &str, cc: &str, pop: u64, region: Region) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            country_code: cc.to_string(),
            population: pop,
            feature_code: "PPL".to_string(),
            region,
        }
    }

    fn count_country(sel: &[SelectedRecord], cc: &str) -> usize {
        sel.iter().filter(|c| c.country_code == cc).count()
    }

    #[test]
    fn single_country_fills_quota_below_default_cap() {
        let cands: Vec<_> = (0..10)
            .map(|i| city(&format!("Z{i}"), "ZZ", 20_000 + i, Region::Europe))
            .collect();
        let quotas = RegionQuota::new([(Region::Europe, 3)]).unwrap();
        let caps = CountryCap::new(5).unwrap();

        let sel = select_seeded(cands, &quotas, &caps, 5, 42);
        assert_eq!(sel.len(), 3);
        assert!(sel.iter().all(|c| c.country_code == "ZZ"));
        let names: HashSet<&str> = sel.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn empty_region_contributes_nothing() {
        let cands = vec![city("Lima", "PE", 9_000_000, Region::SouthAmerica)];
        let quotas = RegionQuota::new([(Region::Africa, 10), (Region::SouthAmerica, 1)]).unwrap();
        let caps = CountryCap::new(5).unwrap();

        let sel = select_seeded(cands, &quotas, &caps, 5, 1);
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].name, "Lima");
    }

    #[test]
    fn capped_country_never_exceeds_its_cap() {
        let mut cands: Vec<_> = (0..20)
            .map(|i| city(&format!("US{i}"), "US", 1_000_000 + i, Region::NorthAmerica))
            .collect();
        for (i, cc) in ["CA", "MX", "CU", "PA"].iter().enumerate() {
            for j in 0..3 {
                cands.push(city(&format!("{cc}{j}"), cc, 50_000 + (i * 3 + j) as u64, Region::NorthAmerica));
            }
        }
        let quotas = RegionQuota::new([(Region::NorthAmerica, 10)]).unwrap();
        let caps = CountryCap::new(5).unwrap().with_cap("US", 5).unwrap();

        for seed in 0..20 {
            let sel = select_seeded(cands.clone(), &quotas, &caps, 5, seed);
            assert_eq!(sel.len(), 10);
            assert!(count_country(&sel, "US") <= 5, "seed {seed}");
        }
    }

    #[test]
    fn underfill_when_caps_exhaust_the_pool() {
        let cands: Vec<_> = (0..8)
            .map(|i| city(&format!("J{i}"), "JP", 100_000 + i, Region::Asia))
            .collect();
        let quotas = RegionQuota::new([(Region::Asia, 6)]).unwrap();
        let caps = CountryCap::new(2).unwrap();

        let sel = select_seeded(cands, &quotas, &caps, 5, 9);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn pool_is_limited_to_top_population() {
        // quota 1 * oversample 2 -> only the two largest can ever be picked.
        let cands = vec![
            city("small", "AU", 10_000, Region::Oceania),
            city("big", "AU", 5_000_000, Region::Oceania),
            city("mid", "NZ", 400_000, Region::Oceania),
            city("bigger", "NZ", 6_000_000, Region::Oceania),
        ];
        let quotas = RegionQuota::new([(Region::Oceania, 1)]).unwrap();
        let caps = CountryCap::new(5).unwrap();
        for seed in 0..30 {
            let sel = select_seeded(cands.clone(), &quotas, &caps, 2, seed);
            assert_eq!(sel.len(), 1);
            assert!(["big", "bigger"].contains(&sel[0].name.as_str()));
        }
    }

    #[test]
    fn caps_reset_between_regions() {
        // Same country code in two regions; each pass gets its own budget.
        let mut cands: Vec<_> = (0..4)
            .map(|i| city(&format!("a{i}"), "XX", 10_000 + i, Region::Europe))
            .collect();
        cands.extend((0..4).map(|i| city(&format!("b{i}"), "XX", 10_000 + i, Region::Asia)));
        let quotas = RegionQuota::new([(Region::Europe, 4), (Region::Asia, 4)]).unwrap();
        let caps = CountryCap::new(2).unwrap();

        let sel = select_seeded(cands, &quotas, &caps, 5, 3);
        assert_eq!(sel.len(), 4);
        assert_eq!(sel.iter().filter(|c| c.region == Region::Europe).count(), 2);
        assert_eq!(sel.iter().filter(|c| c.region == Region::Asia).count(), 2);
    }

    #[test]
    fn output_follows_quota_order() {
        let cands = vec![
            city("Accra", "GH", 2_000_000, Region::Africa),
            city("Oslo", "NO", 700_000, Region::Europe),
        ];
        let quotas = RegionQuota::new([(Region::Africa, 1), (Region::Europe, 1)]).unwrap();
        let caps = CountryCap::new(5).unwrap();
        let sel = select_seeded(cands, &quotas, &caps, 5, 0);
        let names: Vec<&str> = sel.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Accra", "Oslo"]);
    }

    #[test]
    fn same_seed_same_selection() {
        let cands: Vec<_> = (0..200)
            .map(|i| {
                let cc = ["DE", "FR", "IT", "ES", "PL"][i % 5];
                city(&format!("c{i}"), cc, 10_000 + (i as u64 * 37) % 1000, Region::Europe)
            })
            .collect();
        let quotas = RegionQuota::new([(Region::Europe, 12)]).unwrap();
        let caps = CountryCap::new(3).unwrap();

        let a = select_seeded(cands.clone(), &quotas, &caps, 5, 42);
        let b = select_seeded(cands, &quotas, &caps, 5, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        for cc in ["DE", "FR", "IT", "ES", "PL"] {
            assert!(count_country(&a, cc) <= 3);
        }
    }
}
