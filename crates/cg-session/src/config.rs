//! Session configuration.

use cg_graph::EngineKind;

use crate::{SessionError, SessionResult};

/// Proximity threshold used when none is configured, in kilometres.
pub const DEFAULT_THRESHOLD_KM: f64 = 2.0;

/// Top-level session configuration.
///
/// Typically filled from command-line flags by the application crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Two facilities are linked iff their haversine distance is at most
    /// this many kilometres.  `0.0` is allowed and yields edgeless graphs.
    pub threshold_km: f64,

    /// Engine used when a caller does not name one.
    pub engine: EngineKind,
}

impl SessionConfig {
    /// Reject thresholds that are negative or not finite.
    pub fn validate(&self) -> SessionResult<()> {
        if !self.threshold_km.is_finite() || self.threshold_km < 0.0 {
            return Err(SessionError::Config(format!(
                "threshold_km must be a finite, non-negative number of kilometres (got {})",
                self.threshold_km
            )));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { threshold_km: DEFAULT_THRESHOLD_KM, engine: EngineKind::default() }
    }
}
