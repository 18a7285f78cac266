//! Facilities (graph nodes) and the region codes that partition them.

use std::fmt;

use crate::{GeoPoint, NodeId};

// ── RegionCode ────────────────────────────────────────────────────────────────

/// Canonical region code, e.g. a two-letter state abbreviation.
///
/// Always stored trimmed and uppercase, so two codes compare equal iff they
/// name the same region.  Turning free-form names ("California") into codes
/// is the ingestion layer's job; this type only canonicalises case and
/// surrounding whitespace.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionCode(String);

impl RegionCode {
    /// Returns `None` for a blank code.
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        Some(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Origin ────────────────────────────────────────────────────────────────────

/// Where a facility came from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Origin {
    /// Read from an input record, or built by hand.
    #[default]
    Ingested,
    /// Created by the placement heuristic.
    Synthesized,
}

// ── Facility ──────────────────────────────────────────────────────────────────

/// One geolocated facility: a node of the proximity graph.
///
/// Adjacency is not stored here; it belongs to the graph built over a
/// region's facilities and is thrown away on every rebuild.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id:     NodeId,
    pub pos:    GeoPoint,
    pub region: RegionCode,
    /// Identifier carried by the source record, if it had one.
    pub label:  Option<String>,
    pub origin: Origin,
}

impl Facility {
    pub fn new(id: NodeId, pos: GeoPoint, region: RegionCode) -> Self {
        Self { id, pos, region, label: None, origin: Origin::Ingested }
    }

    /// An unlabeled facility created by placement.
    pub fn synthesized(id: NodeId, pos: GeoPoint, region: RegionCode) -> Self {
        Self { id, pos, region, label: None, origin: Origin::Synthesized }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `true` for facilities created by placement rather than ingestion.
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.origin == Origin::Synthesized
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.origin, &self.label) {
            (Origin::Synthesized, _) => {
                write!(f, "{} [synthesized] {} {}", self.id, self.region, self.pos)
            }
            (Origin::Ingested, Some(label)) => {
                write!(f, "{} [{}] {} {}", self.id, label, self.region, self.pos)
            }
            (Origin::Ingested, None) => write!(f, "{} {} {}", self.id, self.region, self.pos),
        }
    }
}
