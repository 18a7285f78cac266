//! The full node set: every facility known to the session, indexed by id.
//!
//! Storage is dense.  The facility with id `n` lives at position `n`, which
//! is what makes "next id = current size" hold and lets lookups skip any
//! hashing.  Facilities are only ever appended.

use std::collections::BTreeMap;

use crate::{CoreError, CoreResult, Facility, GeoPoint, NodeId, RegionCode};

#[derive(Clone, Debug, Default)]
pub struct FacilityStore {
    facilities: Vec<Facility>,
}

impl FacilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an already-numbered facility list.
    ///
    /// Fails with [`CoreError::Config`] unless ids run `0, 1, 2, …` in order.
    pub fn from_facilities(facilities: Vec<Facility>) -> CoreResult<Self> {
        for (i, f) in facilities.iter().enumerate() {
            if f.id.index() != i {
                return Err(CoreError::Config(format!(
                    "facility at position {i} carries id {}; ids must be dense and ordered",
                    f.id
                )));
            }
        }
        Ok(Self { facilities })
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// The id the next appended facility will receive.
    pub fn next_id(&self) -> CoreResult<NodeId> {
        NodeId::from_index(self.facilities.len())
    }

    pub fn get(&self, id: NodeId) -> Option<&Facility> {
        self.facilities.get(id.index())
    }

    /// Like [`get`](Self::get) but reports a missing id as an error.
    pub fn try_get(&self, id: NodeId) -> CoreResult<&Facility> {
        self.get(id).ok_or(CoreError::NodeNotFound(id))
    }

    /// Append an ingested facility under a fresh id and return that id.
    pub fn push(
        &mut self,
        pos:    GeoPoint,
        region: RegionCode,
        label:  Option<String>,
    ) -> CoreResult<NodeId> {
        let id = self.next_id()?;
        let mut facility = Facility::new(id, pos, region);
        facility.label = label;
        self.facilities.push(facility);
        Ok(id)
    }

    /// Append a facility created by placement under a fresh id.
    pub fn push_synthesized(&mut self, pos: GeoPoint, region: RegionCode) -> CoreResult<NodeId> {
        let id = self.next_id()?;
        self.facilities.push(Facility::synthesized(id, pos, region));
        Ok(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facility> + '_ {
        self.facilities.iter()
    }

    /// The region node set: every facility in `region`, in id order.
    pub fn in_region(&self, region: &RegionCode) -> Vec<Facility> {
        self.facilities
            .iter()
            .filter(|f| &f.region == region)
            .cloned()
            .collect()
    }

    /// Facility count per region, sorted by region code.
    pub fn regions(&self) -> Vec<(RegionCode, usize)> {
        let mut counts: BTreeMap<&RegionCode, usize> = BTreeMap::new();
        for f in &self.facilities {
            *counts.entry(&f.region).or_default() += 1;
        }
        counts.into_iter().map(|(r, n)| (r.clone(), n)).collect()
    }
}
