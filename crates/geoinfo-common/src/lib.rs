//! Common types and traits shared across `geoinfo` crates.
//!
//! This crate provides the read-only data model that the summary engine in
//! `geoinfo-core` queries: attribute tables, shared arc topology, per-feature
//! shapes, layers and datasets, and projection lookup.

pub mod layer;
pub mod projection;
pub mod table;
pub mod topology;
pub mod value;

// Re-export commonly used types
pub use layer::{Dataset, GeometryType, Layer, Shape};
pub use projection::{DatasetProjection, ProjectionResolver, UNKNOWN_PROJECTION};
pub use table::{AttributeTable, DataTable};
pub use topology::{ArcCollection, ArcId, Bounds, Topology, TopologyError};
pub use value::{Record, Value};
