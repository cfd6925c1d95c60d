// crates/geopack-core/src/emit.rs

//! # Emission
//!
//! Writes the master `locations.json` and one `packs/<id>.json` per pack.
//! Hand-curated records are merged in ahead of generated ones and kept
//! verbatim, except that no location in any output carries a `pack` key.

use crate::error::{GeoPackError, Result};
use crate::model::OutputRecord;
use crate::tables::{self, UNUSUAL_PACK};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const MASTER_FILE: &str = "locations.json";
pub const CURATED_FILE: &str = "locations_curated.json";
pub const PACKS_DIR: &str = "packs";

/// A pre-approved location from the curated file.
///
/// `pack` is split off; every other field is preserved in its original order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CuratedRecord {
    #[serde(default)]
    pub pack: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A location ready for output: its pack plus the pack-less JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct PackEntry {
    pub pack: String,
    pub location: Map<String, Value>,
}

impl From<CuratedRecord> for PackEntry {
    fn from(rec: CuratedRecord) -> Self {
        Self {
            pack: rec.pack.unwrap_or_else(|| UNUSUAL_PACK.to_string()),
            location: rec.fields,
        }
    }
}

impl TryFrom<&OutputRecord> for PackEntry {
    type Error = GeoPackError;

    fn try_from(rec: &OutputRecord) -> Result<Self> {
        let location = match serde_json::to_value(rec.without_pack())? {
            Value::Object(map) => map,
            other => {
                return Err(GeoPackError::InvalidConfig(format!(
                    "location did not serialize to an object: {other}"
                )))
            }
        };
        Ok(Self {
            pack: rec.pack.clone(),
            location,
        })
    }
}

/// Contents of one `packs/<id>.json` file.
#[derive(Debug, Serialize)]
pub struct PackFile<'a> {
    pub id: &'a str,
    pub label: String,
    pub locations: Vec<&'a Map<String, Value>>,
}

/// Reads the curated file if it exists; a missing file means no curated records.
pub fn load_curated(path: &Path) -> Result<Vec<CuratedRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let reader = BufReader::new(File::open(path)?);
    let curated: Vec<CuratedRecord> = serde_json::from_reader(reader)?;
    info!("merging {} curated locations", curated.len());
    Ok(curated)
}

/// Curated records first, then generated ones, each group in its given order.
pub fn merge_entries(curated: Vec<CuratedRecord>, generated: &[OutputRecord]) -> Result<Vec<PackEntry>> {
    let mut entries: Vec<PackEntry> = curated.into_iter().map(PackEntry::from).collect();
    for rec in generated {
        entries.push(PackEntry::try_from(rec)?);
    }
    Ok(entries)
}

/// Groups entries by pack, keeping packs in order of first appearance.
pub fn group_into_packs(entries: &[PackEntry]) -> Vec<PackFile<'_>> {
    let mut packs: Vec<PackFile<'_>> = Vec::new();
    for entry in entries {
        match packs.iter_mut().find(|p| p.id == entry.pack) {
            Some(pack) => pack.locations.push(&entry.location),
            None => packs.push(PackFile {
                id: &entry.pack,
                label: tables::pack_label(&entry.pack),
                locations: vec![&entry.location],
            }),
        }
    }
    packs
}

/// Writes the master list. Returns the path written.
pub fn write_master(data_dir: &Path, entries: &[PackEntry]) -> Result<PathBuf> {
    let master: Vec<&Map<String, Value>> = entries.iter().map(|e| &e.location).collect();
    let path = data_dir.join(MASTER_FILE);
    write_json(&path, &master)?;
    info!("{}", written_line(MASTER_FILE, master.len()));
    Ok(path)
}

/// Writes every pack file into `packs_dir`. Returns `(pack id, location count)` per file.
pub fn write_packs(packs_dir: &Path, packs: &[PackFile<'_>]) -> Result<Vec<(String, usize)>> {
    let mut written = Vec::with_capacity(packs.len());
    for pack in packs {
        let path = packs_dir.join(format!("{}.json", pack.id));
        write_json(&path, pack)?;
        info!("{}", written_line(&format!("{}.json", pack.id), pack.locations.len()));
        written.push((pack.id.to_string(), pack.locations.len()));
    }
    Ok(written)
}

fn written_line(file: &str, count: usize) -> String {
    format!("{file}: {count} locations")
}

/// Writes any serializable value as pretty JSON (two-space indent, UTF-8 kept as-is).
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(GeoPackError::Io)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(GeoPackError::Json)?;
    writer.flush().map_err(GeoPackError::Io)?;
    Ok(())
}

/// What [`emit_location_db`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub curated: usize,
    pub total: usize,
    pub packs: Vec<(String, usize)>,
}

/// Merges curated records from `data_dir` with `generated` and writes all outputs.
pub fn emit_location_db(data_dir: &Path, generated: &[OutputRecord]) -> Result<EmitSummary> {
    let packs_dir = data_dir.join(PACKS_DIR);
    fs::create_dir_all(&packs_dir)?;

    let curated = load_curated(&data_dir.join(CURATED_FILE))?;
    let curated_count = curated.len();
    let entries = merge_entries(curated, generated)?;

    write_master(data_dir, &entries)?;
    let packs = group_into_packs(&entries);
    let written = write_packs(&packs_dir, &packs)?;

    info!(
        "grand total: {} locations across {} packs",
        entries.len(),
        written.len()
    );
    Ok(EmitSummary {
        curated: curated_count,
        total: entries.len(),
        packs: written,
    })
}
