// crates/geopack-core/src/builder.rs
use crate::common::BuildReport;
use crate::config::BuildConfig;
use crate::emit::emit_location_db;
use crate::enrich::{enrich, Vocabulary};
use crate::error::Result;
use crate::loader::load_candidates;
use crate::model::{CandidateRecord, OutputRecord};
use crate::select::{seeded_rng, select};
use rand::seq::SliceRandom;
use std::path::Path;
use tracing::info;

// -----------------------------------------------------------------------------
// PIPELINE
// -----------------------------------------------------------------------------

/// Full build: gazetteer -> candidates -> balanced selection -> enriched records -> files.
///
/// One generator, seeded from `config.seed`, drives selection, vocabulary
/// picks and the final shuffle, so the same input and seed always produce
/// byte-identical output.
pub fn build_location_db(input: &Path, data_dir: &Path, config: &BuildConfig) -> Result<BuildReport> {
    info!(
        "building {} -> {} (seed {})",
        input.display(),
        data_dir.display(),
        config.seed
    );
    let candidates = load_candidates(input, config)?;
    let eligible = candidates.len();

    let generated = generate_locations(candidates, config);
    let selected = generated.len();

    let summary = emit_location_db(data_dir, &generated)?;
    Ok(BuildReport {
        eligible,
        selected,
        curated: summary.curated,
        total: summary.total,
        packs: summary.packs,
    })
}

/// Selection plus enrichment, without touching the filesystem.
///
/// The generated records are shuffled at the end so packs do not list
/// locations grouped by region.
pub fn generate_locations(candidates: Vec<CandidateRecord>, config: &BuildConfig) -> Vec<OutputRecord> {
    let mut rng = seeded_rng(config.seed);
    let selected = select(
        candidates,
        &config.quotas,
        &config.caps,
        config.oversample_factor,
        &mut rng,
    );

    let vocab = Vocabulary::with_feature_probability(config.feature_word_probability);
    let mut locations: Vec<OutputRecord> = selected
        .iter()
        .map(|c| enrich(c, &vocab, config.coordinate_precision, &mut rng))
        .collect();
    locations.shuffle(&mut rng);
    locations
}
