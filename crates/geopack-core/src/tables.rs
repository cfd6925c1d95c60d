// crates/geopack-core/src/tables.rs

//! # Static Lookup Tables
//!
//! Country classification, caps, flags, vocabulary pools and pack labels.
//! Everything here is compiled in; [`BuildConfig::default`](crate::BuildConfig)
//! reads its defaults from these tables.

use crate::model::Region;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Pack used for records that have no region (hand-curated extras).
pub const UNUSUAL_PACK: &str = "unusual";

/// Fallback glyph for countries without a flag entry.
pub const DEFAULT_FLAG: &str = "🌍";

pub const DEFAULT_COUNTRY_CAP: usize = 5;
pub const DEFAULT_POPULATION_FLOOR: u64 = 10_000;
pub const DEFAULT_OVERSAMPLE_FACTOR: usize = 5;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_FEATURE_WORD_PROBABILITY: f64 = 0.4;
pub const DEFAULT_COORDINATE_PRECISION: u32 = 4;

/// Region targets, in processing order.
pub const REGION_TARGETS: &[(Region, usize)] = &[
    (Region::Europe, 420), // excellent Street View coverage
    (Region::Asia, 310),
    (Region::NorthAmerica, 180),
    (Region::SouthAmerica, 180),
    (Region::Africa, 230),
    (Region::Oceania, 100),
];

// -----------------------------------------------------------------------------
// COUNTRY -> REGION
// -----------------------------------------------------------------------------

const EUROPE: &[&str] = &[
    "AD", "AL", "AT", "BA", "BE", "BG", "BY", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI",
    "FR", "GB", "GR", "HR", "HU", "IE", "IS", "IT", "LI", "LT", "LU", "LV", "MC", "MD", "ME",
    "MK", "MT", "NL", "NO", "PL", "PT", "RO", "RS", "RU", "SE", "SI", "SK", "SM", "UA", "VA",
    "XK", "GE", "AM", "AZ",
];

const ASIA: &[&str] = &[
    "AE", "AF", "BD", "BH", "BN", "BT", "CN", "HK", "ID", "IL", "IN", "IQ", "IR", "JO", "JP",
    "KG", "KH", "KP", "KR", "KW", "KZ", "LA", "LB", "LK", "MM", "MN", "MO", "MV", "MY", "NP",
    "OM", "PH", "PK", "PS", "QA", "SA", "SG", "SY", "TH", "TJ", "TL", "TM", "TR", "TW", "UZ",
    "VN", "YE",
];

const NORTH_AMERICA: &[&str] = &[
    "AG", "BB", "BL", "BS", "BZ", "CA", "CR", "CU", "DM", "DO", "GD", "GL", "GT", "HN", "HT",
    "JM", "KN", "LC", "MF", "MX", "NI", "PA", "PM", "PR", "SV", "TT", "US", "VC", "VG", "VI",
];

const SOUTH_AMERICA: &[&str] = &[
    "AR", "BO", "BR", "CL", "CO", "EC", "FK", "GF", "GY", "PE", "PY", "SR", "UY", "VE",
];

const AFRICA: &[&str] = &[
    "AO", "BF", "BI", "BJ", "BW", "CD", "CF", "CG", "CI", "CM", "CV", "DJ", "DZ", "EG", "ER",
    "ET", "GA", "GH", "GM", "GN", "GQ", "GW", "KE", "KM", "LR", "LS", "LY", "MA", "MG", "ML",
    "MR", "MU", "MW", "MZ", "NA", "NE", "NG", "RE", "RW", "SC", "SD", "SL", "SN", "SO", "SS",
    "ST", "SZ", "TD", "TG", "TN", "TZ", "UG", "ZA", "ZM", "ZW", "EH",
];

const OCEANIA: &[&str] = &[
    "AU", "FJ", "FM", "GU", "KI", "MH", "MP", "NC", "NR", "NZ", "PF", "PG", "PW", "SB", "TO",
    "TV", "VU", "WF", "WS",
];

static COUNTRY_REGIONS: Lazy<HashMap<&'static str, Region>> = Lazy::new(|| {
    [
        (Region::Europe, EUROPE),
        (Region::Asia, ASIA),
        (Region::NorthAmerica, NORTH_AMERICA),
        (Region::SouthAmerica, SOUTH_AMERICA),
        (Region::Africa, AFRICA),
        (Region::Oceania, OCEANIA),
    ]
    .into_iter()
    .flat_map(|(region, codes)| codes.iter().map(move |cc| (*cc, region)))
    .collect()
});

/// Region for an ISO2 country code. Codes are matched exactly (upper-case).
pub fn region_for_country(cc: &str) -> Option<Region> {
    COUNTRY_REGIONS.get(cc).copied()
}

// -----------------------------------------------------------------------------
// COVERAGE & CAPS
// -----------------------------------------------------------------------------

/// Countries with known poor or no Street View coverage.
pub const LOW_COVERAGE: &[&str] = &[
    "SO", "SS", "CF", "TD", "ER", "KP", "TM", "NR", "TV", "KI", "MH", "PW", "GW", "SL", "LR",
    "GN", "GM", "MR",
];

/// Per-country limits that keep large nations from dominating a region.
pub const COUNTRY_CAPS: &[(&str, usize)] = &[
    ("US", 60), ("CN", 40), ("IN", 40), ("RU", 30), ("BR", 45), ("AU", 28), ("DE", 22),
    ("GB", 28), ("FR", 22), ("IT", 22), ("ES", 28), ("CA", 22), ("MX", 28), ("JP", 28),
    ("KR", 18), ("TR", 18), ("ID", 15), ("PK", 12), ("NG", 12), ("ZA", 18), ("AR", 22),
    ("CO", 18), ("PL", 15), ("UA", 15), ("NL", 12), ("BE", 9), ("PT", 12), ("GR", 12),
    ("SE", 12), ("NO", 9), ("FI", 9), ("DK", 9), ("CZ", 9), ("HU", 9), ("RO", 12),
    ("TH", 12), ("VN", 12), ("MY", 9), ("PH", 12), ("CL", 12), ("PE", 12), ("EC", 9),
    ("MA", 12), ("EG", 12), ("KE", 9), ("TZ", 8), ("GH", 8), ("ET", 8), ("DZ", 9),
    ("TN", 8), ("LY", 5), ("SD", 6), ("SN", 6), ("CM", 6), ("CI", 6), ("AO", 6), ("MZ", 6),
    ("MW", 6), ("ZM", 6), ("ZW", 6), ("BO", 8), ("PY", 6), ("UY", 8), ("VE", 12), ("CU", 8),
    ("DO", 6), ("GT", 6), ("HN", 6), ("SV", 5), ("CR", 6), ("PA", 6), ("NI", 6), ("IQ", 8),
    ("IR", 12), ("SA", 12), ("YE", 3), ("SY", 3), ("LB", 6), ("JO", 6), ("IL", 8), ("KW", 5),
    ("QA", 5), ("OM", 6), ("BH", 3), ("KZ", 9), ("UZ", 8), ("AZ", 6), ("GE", 6), ("AM", 5),
    ("TM", 3), ("BD", 12), ("LK", 8), ("NP", 8), ("MM", 8), ("KH", 6), ("LA", 5), ("MN", 5),
    ("AF", 3), ("RS", 6), ("HR", 6), ("BA", 5), ("SI", 5), ("BG", 6), ("SK", 5), ("EE", 4),
    ("LV", 4), ("LT", 4), ("IS", 4), ("NZ", 9), ("SG", 4), ("HK", 4), ("TW", 6),
];

// -----------------------------------------------------------------------------
// FLAGS
// -----------------------------------------------------------------------------

/// Countries that get a flag glyph in their label; everything else gets [`DEFAULT_FLAG`].
const FLAGGED: &[&str] = &[
    "AD", "AE", "AF", "AL", "AM", "AO", "AR", "AT", "AU", "AZ", "BA", "BB", "BD", "BE", "BF",
    "BG", "BH", "BI", "BJ", "BL", "BN", "BO", "BR", "BS", "BT", "BW", "BY", "BZ", "CA", "CD",
    "CF", "CG", "CH", "CI", "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CY", "CZ", "DE", "DJ",
    "DK", "DO", "DZ", "EC", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FR", "GA", "GB", "GE",
    "GH", "GL", "GM", "GN", "GQ", "GR", "GT", "GW", "GY", "HK", "HN", "HR", "HT", "HU", "ID",
    "IE", "IL", "IN", "IQ", "IR", "IS", "IT", "JM", "JO", "JP", "KE", "KG", "KH", "KR", "KW",
    "KZ", "LA", "LB", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MD", "ME", "MG", "MK",
    "ML", "MM", "MN", "MO", "MR", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NE", "NG",
    "NI", "NL", "NO", "NP", "NR", "NZ", "OM", "PA", "PE", "PG", "PH", "PK", "PL", "PR", "PS",
    "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC", "SD", "SE", "SG",
    "SI", "SK", "SL", "SN", "SO", "SR", "SS", "ST", "SV", "SY", "SZ", "TD", "TG", "TH", "TJ",
    "TL", "TM", "TN", "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "US", "UY", "UZ", "VA", "VE",
    "VN", "VU", "WS", "XK", "YE", "ZA", "ZM", "ZW",
];

static FLAGS: Lazy<HashMap<&'static str, String>> = Lazy::new(|| {
    FLAGGED
        .iter()
        .filter_map(|cc| regional_indicators(cc).map(|flag| (*cc, flag)))
        .collect()
});

/// Flag emoji for a country: the pair of regional indicator symbols for its code.
pub fn flag_for(cc: &str) -> &'static str {
    FLAGS.get(cc).map(String::as_str).unwrap_or(DEFAULT_FLAG)
}

fn regional_indicators(cc: &str) -> Option<String> {
    if cc.len() != 2 || !cc.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    cc.bytes()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

// -----------------------------------------------------------------------------
// VOCABULARY
// -----------------------------------------------------------------------------

/// One set of descriptive words; a record receives exactly one set.
pub type WordSet = &'static [&'static str];

const EUROPE_WORDS: &[WordSet] = &[
    &["cobblestone street", "tram", "café terrace", "church spire", "bicycle lane"],
    &["old town square", "market stall", "apartment block", "pedestrian zone", "fountain"],
    &["canal", "bridge", "baroque church", "bell tower", "colourful facade"],
    &["railway station", "tramline", "roundabout", "castle", "town hall"],
    &["medieval wall", "arch", "monastery", "vineyard hillside", "waterfront"],
];

const ASIA_WORDS: &[WordSet] = &[
    &["temple", "street food stall", "motorbike", "neon sign", "market"],
    &["skyscraper", "harbour", "rickshaw", "lantern", "traditional roof"],
    &["mosque", "bazaar", "alley", "spice market", "minaret"],
    &["rice field", "palm tree", "wooden house", "canal boat", "vendor cart"],
    &["elevated highway", "cable car", "fish market", "pagoda", "street art"],
];

const NORTH_AMERICA_WORDS: &[WordSet] = &[
    &["pickup truck", "strip mall", "gas station", "parking lot", "wide boulevard"],
    &["colonial building", "cobblestone", "plaza", "horse carriage", "market stall"],
    &["beach promenade", "palm tree", "surf shop", "seafront hotel", "ice cream stand"],
    &["downtown skyscraper", "yellow cab", "fire hydrant", "walk signal", "diner"],
    &["wooden house", "church steeple", "grain silo", "railroad crossing", "small-town diner"],
];

const SOUTH_AMERICA_WORDS: &[WordSet] = &[
    &["colonial church", "cobblestone", "plaza", "market", "mural"],
    &["hillside barrio", "cable car", "colourful house", "street vendor", "bus terminal"],
    &["beach promenade", "fishing boat", "seafront", "palm tree", "kiosk"],
    &["Andean village", "adobe wall", "market", "llama", "mountain backdrop"],
    &["favela staircase", "bougainvillea", "football court", "moto-taxi", "concrete block"],
];

const AFRICA_WORDS: &[WordSet] = &[
    &["market stall", "minaret", "mud-brick wall", "motorbike taxi", "colourful bus"],
    &["fish market", "beach", "fishing boat", "palm tree", "corrugated iron roof"],
    &["colonial building", "wide boulevard", "jacaranda tree", "roundabout", "taxi rank"],
    &["souk", "carved door", "arch", "carpet shop", "narrow alley"],
    &["village hut", "red earth road", "baobab tree", "water pump", "children playing"],
];

const OCEANIA_WORDS: &[WordSet] = &[
    &["beach", "surf shop", "blue sky", "bungalow", "garden"],
    &["harbour", "ferry", "skyscraper", "park", "botanic garden"],
    &["outback road", "eucalyptus", "red earth", "roadhouse", "cattle grid"],
    &["island seafront", "palm tree", "coral reef", "diving shop", "beach bar"],
    &["vineyard", "winery", "rolling hills", "farmhouse", "sheep paddock"],
];

/// General vocabulary pool for a region.
pub fn region_words(region: Region) -> Option<&'static [WordSet]> {
    Some(match region {
        Region::Europe => EUROPE_WORDS,
        Region::Asia => ASIA_WORDS,
        Region::NorthAmerica => NORTH_AMERICA_WORDS,
        Region::SouthAmerica => SOUTH_AMERICA_WORDS,
        Region::Africa => AFRICA_WORDS,
        Region::Oceania => OCEANIA_WORDS,
    })
}

/// Feature-specific vocabulary (capitals, seaside and rural settlements).
pub fn feature_words(feature_code: &str) -> Option<&'static [WordSet]> {
    const CAPITAL: &[WordSet] = &[&[
        "government building",
        "main square",
        "national flag",
        "parliament",
        "wide avenue",
    ]];
    const SEASIDE: &[WordSet] = &[&["harbour", "beach", "promenade", "fishing boat", "seafront café"]];
    const RURAL: &[WordSet] = &[&["village square", "church", "farmhouse", "local market", "country road"]];

    match feature_code {
        "PPLC" => Some(CAPITAL),
        "PPLS" => Some(SEASIDE),
        "PPLR" => Some(RURAL),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// PACKS
// -----------------------------------------------------------------------------

const PACK_LABELS: &[(&str, &str)] = &[
    ("europe", "🌍 Europe"),
    ("latin-america", "🌎 Latin America"),
    ("asia", "🌏 Asia & Middle East"),
    ("africa", "🌍 Africa"),
    ("north-america", "🌎 North America"),
    ("oceania", "🌏 Oceania & Pacific"),
    (UNUSUAL_PACK, "🗺️ Unusual Places"),
];

/// Pack id for a region; records without a region land in [`UNUSUAL_PACK`].
pub fn pack_for_region(region: Option<Region>) -> &'static str {
    region.map(Region::pack_id).unwrap_or(UNUSUAL_PACK)
}

/// Display label for a pack, falling back to the title-cased id.
pub fn pack_label(pack_id: &str) -> String {
    PACK_LABELS
        .iter()
        .find(|(id, _)| *id == pack_id)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| title_case(pack_id))
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Low-coverage exclusion set as owned strings, for [`BuildConfig`](crate::BuildConfig).
pub fn low_coverage_set() -> HashSet<String> {
    LOW_COVERAGE.iter().map(|cc| (*cc).to_string()).collect()
}
