//! Facility CSV loader.
//!
//! # CSV format
//!
//! One facility per record, with a header row.  Only four positional fields
//! are read; everything else is ignored.  With the default [`RecordLayout`]:
//!
//! | Field | Meaning                                        |
//! |-------|------------------------------------------------|
//! | 0     | facility identifier (kept as the label)        |
//! | 4     | region: state name or abbreviation             |
//! | 9     | latitude, decimal degrees                      |
//! | 10    | longitude, decimal degrees                     |
//!
//! Quoted fields may contain commas, doubled quotes (`""`) and newlines; a
//! record spans as many physical lines as its quoting requires.
//!
//! # Skipped records
//!
//! A record is dropped with a `warn!` and counted in
//! [`IngestReport::skipped`] when it has fewer than `min_fields` fields, its
//! latitude or longitude is empty, non-numeric or non-finite, or its region
//! is blank.  Loading continues with the next record.  Only I/O failures
//! abort the load.
//!
//! Accepted records get `NodeId`s `0, 1, 2, …` in file order.

use std::fmt;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use cg_core::{CoreError, CoreResult, Facility, GeoPoint, NodeId, RegionCode};

use crate::region::normalize_region;
use crate::IngestResult;

// ── RecordLayout ──────────────────────────────────────────────────────────────

/// Zero-based positions of the fields the loader reads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordLayout {
    pub id:         usize,
    pub region:     usize,
    pub lat:        usize,
    pub lon:        usize,
    /// Records with fewer fields than this are skipped outright.
    pub min_fields: usize,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self { id: 0, region: 4, lat: 9, lon: 10, min_fields: 11 }
    }
}

// ── IngestReport ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub skipped:  usize,
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facilities loaded, {} records skipped", self.accepted, self.skipped)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load facilities from a CSV file.
pub fn load_facilities_csv(
    path: &Path,
    layout: &RecordLayout,
) -> IngestResult<(Vec<Facility>, IngestReport)> {
    let file = std::fs::File::open(path)?;
    load_facilities_reader(file, layout)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading stdin.
pub fn load_facilities_reader<R: Read>(
    reader: R,
    layout: &RecordLayout,
) -> IngestResult<(Vec<Facility>, IngestReport)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut facilities = Vec::new();
    let mut report = IngestReport::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("skipping unreadable record: {e}");
                report.skipped += 1;
                continue;
            }
        };

        let line = record.position().map_or(0, |p| p.line());
        let id = NodeId::from_index(facilities.len())?;
        match parse_record(&record, layout, id) {
            Ok(f) => {
                facilities.push(f);
                report.accepted += 1;
            }
            Err(e) => {
                let label = record.get(layout.id).unwrap_or("?");
                warn!("skipping record {label:?} at line {line}: {e}");
                report.skipped += 1;
            }
        }
    }

    debug!("ingest: {report}");
    Ok((facilities, report))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(
    record: &csv::StringRecord,
    layout: &RecordLayout,
    id:     NodeId,
) -> CoreResult<Facility> {
    if record.len() < layout.min_fields {
        return Err(CoreError::Parse(format!(
            "incomplete record: {} fields, need at least {}",
            record.len(),
            layout.min_fields
        )));
    }

    let lat = parse_coordinate(record.get(layout.lat), "latitude")?;
    let lon = parse_coordinate(record.get(layout.lon), "longitude")?;
    let region: RegionCode = record
        .get(layout.region)
        .and_then(normalize_region)
        .ok_or_else(|| CoreError::Parse("missing region".into()))?;

    let mut facility = Facility::new(id, GeoPoint::new(lat, lon), region);
    facility.label = record
        .get(layout.id)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);
    Ok(facility)
}

fn parse_coordinate(field: Option<&str>, what: &str) -> CoreResult<f64> {
    let raw = field.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(CoreError::Parse(format!("missing {what}")));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CoreError::Parse(format!("invalid {what} {raw:?}"))),
    }
}
