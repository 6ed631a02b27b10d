//! One-row-per-layer overview table.

use geoinfo_common::Layer;
use tabled::{Table, Tabled};

use crate::detect::{count_null_records, count_null_shapes};
use crate::format::format_count;
use crate::options::ReportOptions;
use crate::report::{LayerEntry, is_target};
use crate::stats::feature_count;

/// Table row representation for displaying a layer overview.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct LayerSummaryRow {
    /// 1-based layer number, with the target marker when applicable.
    #[tabled(rename = "Layer")]
    pub layer: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub geometry_type: String,
    #[tabled(rename = "Records")]
    pub records: String,
    #[tabled(rename = "Null shapes")]
    pub null_shapes: String,
    #[tabled(rename = "Null records")]
    pub null_records: String,
}

/// Builds one overview row per entry.
///
/// Only counts are gathered; extents and projections are not resolved.
#[must_use]
pub fn summarize_layers(
    entries: &[LayerEntry<'_>],
    targets: Option<&[&Layer]>,
    options: &ReportOptions,
) -> Vec<LayerSummaryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let layer = entry.layer;
            let features = feature_count(layer);
            let null_shapes = layer.shapes.as_deref().map_or(0, count_null_shapes);
            let null_records = layer
                .data
                .as_ref()
                .map_or(features, |data| count_null_records(data));
            let marker = if is_target(layer, targets) {
                options.target_marker.trim_start()
            } else {
                ""
            };
            LayerSummaryRow {
                layer: format!("{}{marker}", i + 1),
                name: layer
                    .name
                    .clone()
                    .unwrap_or_else(|| "[unnamed]".to_string()),
                geometry_type: layer
                    .geometry_type
                    .map_or_else(|| "[none]".to_string(), |t| t.to_string()),
                records: format_count(features),
                null_shapes: format_count(null_shapes),
                null_records: format_count(null_records),
            }
        })
        .collect()
}

/// Renders the overview as a text table.
#[must_use]
pub fn render_summary_table(
    entries: &[LayerEntry<'_>],
    targets: Option<&[&Layer]>,
    options: &ReportOptions,
) -> String {
    Table::new(summarize_layers(entries, targets, options)).to_string()
}
