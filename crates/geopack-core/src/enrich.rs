// crates/geopack-core/src/enrich.rs
use crate::model::{OutputRecord, Region, SelectedRecord};
use crate::tables::{self, WordSet};
use rand::seq::SliceRandom;
use rand::Rng;

/// One step in the vocabulary lookup chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VocabSource {
    /// Feature-code pool, used with the given probability when one exists.
    Feature { probability: f64 },
    /// The record's own region pool.
    Region,
    /// A fixed region's pool, used when everything before it came up empty.
    Fallback(Region),
}

/// Ordered list of [`VocabSource`]s tried in sequence until one yields words.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    chain: Vec<VocabSource>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::with_feature_probability(tables::DEFAULT_FEATURE_WORD_PROBABILITY)
    }
}

impl Vocabulary {
    pub fn new(chain: Vec<VocabSource>) -> Self {
        Self { chain }
    }

    /// feature pool -> region pool -> Europe pool.
    pub fn with_feature_probability(probability: f64) -> Self {
        Self::new(vec![
            VocabSource::Feature { probability },
            VocabSource::Region,
            VocabSource::Fallback(Region::Europe),
        ])
    }

    /// Picks one word set for a record.
    ///
    /// The coin flip for a feature pool is only drawn when that pool exists,
    /// so records with plain feature codes consume one random value, not two.
    pub fn pick<R: Rng + ?Sized>(&self, region: Region, feature_code: &str, rng: &mut R) -> WordSet {
        for source in &self.chain {
            let pool = match *source {
                VocabSource::Feature { probability } => match tables::feature_words(feature_code) {
                    Some(pool) if rng.gen::<f64>() < probability => pool,
                    _ => continue,
                },
                VocabSource::Region => match tables::region_words(region) {
                    Some(pool) => pool,
                    None => continue,
                },
                VocabSource::Fallback(fallback) => match tables::region_words(fallback) {
                    Some(pool) => pool,
                    None => continue,
                },
            };
            if let Some(words) = pool.choose(rng) {
                return *words;
            }
        }
        &[]
    }
}

/// Rounds the stored value to `places` decimals.
///
/// Goes through the exact decimal expansion, so `122.95375` (stored just
/// below the tie) rounds down to `122.9537`.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// `"{name}, {cc} {flag}"`
pub fn label_for(name: &str, cc: &str) -> String {
    format!("{}, {} {}", name, cc, tables::flag_for(cc))
}

/// Decorates a selected city with its label, pack and words.
pub fn enrich<R: Rng + ?Sized>(
    record: &SelectedRecord,
    vocab: &Vocabulary,
    precision: u32,
    rng: &mut R,
) -> OutputRecord {
    let words = vocab.pick(record.region, &record.feature_code, rng);
    OutputRecord {
        lat: round_to(record.latitude, precision),
        lng: round_to(record.longitude, precision),
        label: label_for(&record.name, &record.country_code),
        pack: tables::pack_for_region(Some(record.region)).to_string(),
        words: words.iter().map(|w| (*w).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CandidateRecord;
    use crate::select::seeded_rng;

    fn record(feature: &str, region: Region) -> CandidateRecord {
        CandidateRecord {
            name: "Valparaíso".into(),
            latitude: -33.047238,
            longitude: -71.6126885,
            country_code: "CL".into(),
            population: 282_448,
            feature_code: feature.into(),
            region,
        }
    }

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_to(48.85661, 4), 48.8566);
        assert_eq!(round_to(-71.6126885, 4), -71.6127);
        assert_eq!(round_to(2.0, 4), 2.0);
    }

    #[test]
    fn rounds_the_stored_value_not_the_scaled_one() {
        assert_eq!(round_to(122.95375, 4), 122.9537);
        assert_eq!(round_to(-154.37185, 4), -154.3718);
        assert_eq!(round_to(178.02865, 4), 178.0286);
        assert_eq!(round_to(0.00005, 4), 0.0001);
    }

    #[test]
    fn enrich_builds_label_pack_and_coordinates() {
        let mut rng = seeded_rng(42);
        let out = enrich(&record("PPL", Region::SouthAmerica), &Vocabulary::default(), 4, &mut rng);
        assert_eq!(out.label, "Valparaíso, CL 🇨🇱");
        assert_eq!(out.pack, "latin-america");
        assert_eq!(out.lat, round_to(-33.047238, 4));
        assert_eq!(out.lng, round_to(-71.6126885, 4));
        assert!((3..=5).contains(&out.words.len()));
    }

    #[test]
    fn plain_features_draw_from_region_pool() {
        let vocab = Vocabulary::default();
        let pool = tables::region_words(Region::Africa).unwrap();
        let mut rng = seeded_rng(5);
        for _ in 0..50 {
            let words = vocab.pick(Region::Africa, "PPLA", &mut rng);
            assert!(pool.contains(&words));
        }
    }

    #[test]
    fn feature_pool_is_always_used_at_probability_one() {
        let vocab = Vocabulary::with_feature_probability(1.0);
        let capital = tables::feature_words("PPLC").unwrap()[0];
        let mut rng = seeded_rng(11);
        for _ in 0..20 {
            assert_eq!(vocab.pick(Region::Asia, "PPLC", &mut rng), capital);
        }
    }

    #[test]
    fn feature_pool_is_never_used_at_probability_zero() {
        let vocab = Vocabulary::with_feature_probability(0.0);
        let capital = tables::feature_words("PPLC").unwrap()[0];
        let mut rng = seeded_rng(11);
        for _ in 0..20 {
            assert_ne!(vocab.pick(Region::Asia, "PPLC", &mut rng), capital);
        }
    }

    #[test]
    fn fallback_chain_reaches_default_region() {
        let vocab = Vocabulary::new(vec![VocabSource::Fallback(Region::Europe)]);
        let europe = tables::region_words(Region::Europe).unwrap();
        let mut rng = seeded_rng(0);
        assert!(europe.contains(&vocab.pick(Region::Oceania, "PPL", &mut rng)));

        let empty = Vocabulary::new(Vec::new());
        assert!(empty.pick(Region::Oceania, "PPL", &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_words() {
        let vocab = Vocabulary::default();
        let rec = record("PPLS", Region::SouthAmerica);
        let a: Vec<_> = {
            let mut rng = seeded_rng(42);
            (0..10).map(|_| enrich(&rec, &vocab, 4, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = seeded_rng(42);
            (0..10).map(|_| enrich(&rec, &vocab, 4, &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
