//! `cg-graph`: proximity graph, shortest-path engines, and source selection.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`graph`]   | `ProximityGraph` (dense slots + symmetric adjacency)         |
//! | [`builder`] | `ProximityGraphBuilder`, `PairScan`, `build`                 |
//! | [`engine`]  | `ShortestPathEngine` trait, `DijkstraEngine`, `BellmanFordEngine`, `EngineKind` |
//! | [`source`]  | `select_source`                                              |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `EngineKind`.           |

pub mod builder;
pub mod engine;
pub mod error;
pub mod graph;
pub mod source;


pub use builder::{PairScan, ProximityGraphBuilder, build};
pub use engine::{
    BellmanFordEngine, DijkstraEngine, Eccentricity, EngineKind, ShortestPathEngine, ShortestPaths,
};
pub use error::{GraphError, GraphResult};
pub use graph::ProximityGraph;
pub use source::select_source;
