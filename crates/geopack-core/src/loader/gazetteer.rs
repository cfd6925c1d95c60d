// crates/geopack-core/src/loader/gazetteer.rs

//! GeoNames `citiesNNNN.txt` row layout (tab-separated, 0-indexed):
//!
//! ```text
//! 0:id 1:name 2:asciiname 3:altnames 4:lat 5:lng 6:feat_class 7:feat_code
//! 8:country 9:cc2 10:admin1 11:admin2 12:admin3 13:admin4
//! 14:population 15:elevation 16:dem 17:timezone 18:modification_date
//! ```

pub const MIN_FIELDS: usize = 15;

const NAME: usize = 1;
const LATITUDE: usize = 4;
const LONGITUDE: usize = 5;
const FEATURE_CODE: usize = 7;
const COUNTRY_CODE: usize = 8;
const POPULATION: usize = 14;

/// The positional fields of one gazetteer row, borrowed from the line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub feature_code: &'a str,
    pub country_code: &'a str,
    pub population: u64,
}

/// Splits one line into its required fields.
///
/// Returns `None` for rows with fewer than [`MIN_FIELDS`] columns or with
/// non-numeric coordinates/population. Coordinates must be finite and within
/// ±90 / ±180 degrees. An empty population counts as zero.
pub fn parse_row(line: &str) -> Option<RawRow<'_>> {
    let parts: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
    if parts.len() < MIN_FIELDS {
        return None;
    }

    let population = match parts[POPULATION].trim() {
        "" => 0,
        p => p.parse().ok()?,
    };

    Some(RawRow {
        name: parts[NAME],
        latitude: parse_degrees(parts[LATITUDE], 90.0)?,
        longitude: parse_degrees(parts[LONGITUDE], 180.0)?,
        feature_code: parts[FEATURE_CODE],
        country_code: parts[COUNTRY_CODE],
        population,
    })
}

fn parse_degrees(field: &str, limit: f64) -> Option<f64> {
    let v: f64 = field.trim().parse().ok()?;
    (v.is_finite() && v.abs() <= limit).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fields: &[(usize, &str)]) -> String {
        let mut cols = vec![""; 19];
        for (idx, value) in fields {
            cols[*idx] = *value;
        }
        cols.join("\t")
    }

    #[test]
    fn parses_required_positions() {
        let l = line(&[
            (0, "2988507"),
            (1, "Paris"),
            (2, "Paris"),
            (4, "48.85341"),
            (5, "2.3488"),
            (6, "P"),
            (7, "PPLC"),
            (8, "FR"),
            (14, "2138551"),
        ]);
        let row = parse_row(&l).unwrap();
        assert_eq!(row.name, "Paris");
        assert_eq!(row.latitude, 48.85341);
        assert_eq!(row.longitude, 2.3488);
        assert_eq!(row.feature_code, "PPLC");
        assert_eq!(row.country_code, "FR");
        assert_eq!(row.population, 2_138_551);
    }

    #[test]
    fn short_rows_are_malformed() {
        let l = vec!["x"; MIN_FIELDS - 1].join("\t");
        assert!(parse_row(&l).is_none());
        assert!(parse_row("").is_none());
    }

    #[test]
    fn non_numeric_fields_are_malformed() {
        assert!(parse_row(&line(&[(4, "north"), (5, "1.0"), (14, "10")])).is_none());
        assert!(parse_row(&line(&[(4, "1.0"), (5, "1.0"), (14, "many")])).is_none());
    }

    #[test]
    fn empty_population_is_zero() {
        let l = line(&[(1, "Hamlet"), (4, "1.0"), (5, "2.0")]);
        let row = parse_row(&l).unwrap();
        assert_eq!(row.population, 0);
    }

    #[test]
    fn non_finite_or_out_of_range_coordinates_are_malformed() {
        for (lat, lng) in [("nan", "1.0"), ("1.0", "inf"), ("-infinity", "1.0"), ("90.5", "1.0"), ("1.0", "-180.01")] {
            let l = line(&[(4, lat), (5, lng), (14, "50000")]);
            assert!(parse_row(&l).is_none(), "{lat} {lng}");
        }
        let l = line(&[(4, "-90"), (5, "180"), (14, "50000")]);
        assert!(parse_row(&l).is_some());
    }
}
