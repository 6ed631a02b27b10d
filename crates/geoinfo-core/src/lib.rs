//! `geoinfo-core` summarizes in-memory geospatial layers as a text report.
//!
//! This crate includes:
//! - **Statistics**: feature counts, null shape and null record counts, layer
//!   extents and projection lookup ([`stats`]).
//! - **Geometry diagnostics**: outer ring and hole classification by signed
//!   area ([`rings`]) and node / interior vertex counts ([`vertices`]).
//! - **Rendering**: an aligned preview of one attribute record
//!   ([`attributes`]), the multi-layer report ([`report`]) and a one-row-per
//!   layer overview table ([`summary`]).
//!
//! Inputs are never modified. The data model lives in `geoinfo-common`.

pub mod attributes;
pub mod detect;
pub mod error;
pub mod format;
pub mod options;
pub mod report;
pub mod rings;
pub mod stats;
pub mod summary;
pub mod vertices;

pub use error::{ConfigError, ReportError, Result};
pub use options::{FieldOrder, ReportOptions};
pub use report::{LayerEntry, compose_report, compose_report_with, print_info};
pub use stats::{LayerStatistics, compute_statistics};
