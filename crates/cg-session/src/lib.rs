//! `cg-session`: session controller for the chargegraph workspace.
//!
//! # Data flow
//!
//! ```text
//! full node set ──region filter──▶ region node set ──build──▶ ProximityGraph
//!       ▲                                                          │
//!       │                                             select_source + engine
//!       │                                                          ▼
//!       └──── append synthesized facility ◀── placement ◀── (source, farthest)
//! ```
//!
//! After every append the region filter and the graph build run again, so
//! the graph always reflects the full node set.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cg_graph::EngineKind;
//! use cg_ingest::RecordLayout;
//! use cg_session::{Session, SessionConfig};
//!
//! let (mut session, _) = Session::load_csv(path, &RecordLayout::default(), SessionConfig::default())?;
//! session.select_region("TX")?;
//! let placed = session.place_new_facility(EngineKind::Dijkstra)?;
//! ```

pub mod config;
pub mod error;
pub mod placement;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_THRESHOLD_KM, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use placement::suggest_and_insert;
pub use session::{EngineComparison, Session};
