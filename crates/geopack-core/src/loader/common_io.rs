// crates/geopack-core/src/loader/common_io.rs
use crate::error::{GeoPackError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens the gazetteer, buffers it, and unwraps gzip when the path ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        GeoPackError::NotFound(format!("Gazetteer not found at {}: {}", path.display(), e))
    })?;

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoPackError::InvalidConfig(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(BufReader::new(file)))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
