//! geopack-cli
//! ===========
//!
//! Command-line driver for [`geopack-core`]: turns a GeoNames city gazetteer
//! into `data/locations.json` plus one `data/packs/<pack>.json` per pack.
//!
//! ```text
//! geopack build --input /tmp/cities1000.txt --data-dir data
//! geopack stats --input cities1000.txt.gz
//! ```
//!
//! The library target exposes no API; the binary is the deliverable.
#![cfg_attr(docsrs, feature(doc_cfg))]
