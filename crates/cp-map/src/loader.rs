//! Tab-separated record loader.
//!
//! # File formats
//!
//! Buildings, one per row:
//!
//! ```text
//! shortName	longName	x	y
//! CSE	Computer Science Building	2259.7	1715.5
//! ```
//!
//! Walkable segments, one per row:
//!
//! ```text
//! x1	y1	x2	y2	distance
//! 2259.7	1715.5	2275.0	1699.2	27.1
//! ```
//!
//! Fields are trimmed and quote characters are taken literally (building
//! names may contain `"`).  Each record is checked as it is read; the first
//! bad row aborts the load with [`MapError::InvalidRecord`].

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::records::{ConnectionRecord, LocationRecord};
use crate::{MapError, MapResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load building records from a TSV file.
pub fn load_locations_tsv(path: &Path) -> MapResult<Vec<LocationRecord>> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_tsv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
pub fn load_locations_reader<R: Read>(reader: R) -> MapResult<Vec<LocationRecord>> {
    read_records(reader, LocationRecord::check)
}

/// Load connection records from a TSV file.
pub fn load_connections_tsv(path: &Path) -> MapResult<Vec<ConnectionRecord>> {
    let file = std::fs::File::open(path)?;
    load_connections_reader(file)
}

/// Like [`load_connections_tsv`] but accepts any `Read` source.
pub fn load_connections_reader<R: Read>(reader: R) -> MapResult<Vec<ConnectionRecord>> {
    read_records(reader, ConnectionRecord::check)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<R, T>(reader: R, check: fn(&T) -> Result<(), String>) -> MapResult<Vec<T>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in tsv.deserialize::<T>().enumerate() {
        let record = result?;
        check(&record).map_err(|reason| MapError::InvalidRecord { row: i + 1, reason })?;
        records.push(record);
    }
    Ok(records)
}
