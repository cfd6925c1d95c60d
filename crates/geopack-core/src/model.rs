// crates/geopack-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse, continent-like grouping used for quota allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "SA")]
    SouthAmerica,
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "OC")]
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Europe,
        Region::Asia,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Africa,
        Region::Oceania,
    ];

    /// Two-letter continent code (e.g. "EU", "OC").
    pub fn code(self) -> &'static str {
        match self {
            Region::Europe => "EU",
            Region::Asia => "AS",
            Region::NorthAmerica => "NA",
            Region::SouthAmerica => "SA",
            Region::Africa => "AF",
            Region::Oceania => "OC",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Id of the pack this region's locations are published in.
    pub fn pack_id(self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::NorthAmerica => "north-america",
            Region::SouthAmerica => "latin-america",
            Region::Africa => "africa",
            Region::Oceania => "oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A gazetteer entry that survived ingestion filtering.
///
/// Created once by the loader and never mutated afterwards; the selector
/// moves the chosen ones into its result and drops the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    pub population: u64,
    /// GeoNames feature code, e.g. `PPLC` (capital), `PPLS`, `PPLR`.
    pub feature_code: String,
    pub region: Region,
}

/// A candidate chosen by the balanced selector. Membership is its only extra state.
pub type SelectedRecord = CandidateRecord;

/// A selected city decorated for presentation.
///
/// Field order matches the published JSON (`lat`, `lng`, `label`, `pack`, `words`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub pack: String,
    pub words: Vec<String>,
}

/// Borrowed view of an [`OutputRecord`] without its `pack` field.
#[derive(Debug, Serialize)]
pub struct LocationView<'a> {
    pub lat: f64,
    pub lng: f64,
    pub label: &'a str,
    pub words: &'a [String],
}

impl OutputRecord {
    pub fn without_pack(&self) -> LocationView<'_> {
        LocationView {
            lat: self.lat,
            lng: self.lng,
            label: &self.label,
            words: &self.words,
        }
    }
}
