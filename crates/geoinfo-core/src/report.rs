//! Multi-layer text report.
//!
//! Each layer becomes one block made of a header, a geometry section and an
//! attribute section, separated by blank lines:
//!
//! ```text
//! Layer 1 *
//! Layer name: cities
//! Records: 3
//!
//! Geometry
//!   Type: point
//!   Null shapes: 1
//!   Bounds: -3 2 1 5.5
//!   Proj.4: [unknown]
//!
//! Attribute data
//!   Field  First value
//!   name   'A'
//!   pop    1000
//! ```

use geoinfo_common::{AttributeTable, Dataset, DatasetProjection, Layer, ProjectionResolver};
use log::debug;

use crate::attributes::render_attribute_table;
use crate::error::Result;
use crate::format::{format_count, format_number};
use crate::options::ReportOptions;
use crate::stats::{LayerStatistics, compute_statistics};

/// A layer together with the dataset that holds its topology.
#[derive(Debug, Clone, Copy)]
pub struct LayerEntry<'a> {
    pub layer: &'a Layer,
    pub dataset: &'a Dataset,
}

impl<'a> LayerEntry<'a> {
    #[must_use]
    pub fn new(layer: &'a Layer, dataset: &'a Dataset) -> Self {
        Self { layer, dataset }
    }

    /// One entry per layer of `dataset`, in order.
    pub fn all(dataset: &'a Dataset) -> impl Iterator<Item = LayerEntry<'a>> {
        dataset.layers.iter().map(move |layer| Self::new(layer, dataset))
    }
}

/// Returns `true` if `layer` is one of `targets`.
///
/// Membership is by identity: two equal layers at different addresses are
/// distinct.
#[must_use]
pub fn is_target(layer: &Layer, targets: Option<&[&Layer]>) -> bool {
    targets.is_some_and(|targets| targets.iter().any(|t| std::ptr::eq(*t, layer)))
}

/// Geometry section for a layer's statistics.
///
/// `Null shapes` appears only when there are some; `Bounds` and `Proj.4`
/// appear only when an extent could be computed.
#[must_use]
pub fn geometry_info(stats: &LayerStatistics) -> String {
    let Some(geometry_type) = stats.geometry_type else {
        return "Geometry: [none]".to_string();
    };
    let mut lines = vec!["Geometry".to_string(), format!("Type: {geometry_type}")];
    if stats.null_shape_count > 0 {
        lines.push(format!("Null shapes: {}", format_count(stats.null_shape_count)));
    }
    if stats.has_geometry()
        && let Some(bbox) = &stats.bbox
    {
        let bounds: Vec<String> = bbox.iter().map(|v| format_number(*v)).collect();
        lines.push(format!("Bounds: {}", bounds.join(" ")));
        if let Some(projection) = &stats.projection {
            lines.push(format!("Proj.4: {projection}"));
        }
    }
    lines.join("\n  ")
}

/// Attribute section for a layer's table.
///
/// # Errors
///
/// Returns [`crate::ReportError::RecordOutOfRange`] if `options` selects a
/// record past the end of the table.
pub fn table_info<T: AttributeTable + ?Sized>(
    table: Option<&T>,
    options: &ReportOptions,
) -> Result<String> {
    match table {
        Some(table) if !table.is_empty() && !table.fields().is_empty() => Ok(format!(
            "Attribute data\n{}",
            render_attribute_table(table, options.record_index, options.field_order)?
        )),
        _ => Ok("Attribute data: [none]".to_string()),
    }
}

fn layer_block<R: ProjectionResolver + ?Sized>(
    number: usize,
    entry: &LayerEntry<'_>,
    targets: Option<&[&Layer]>,
    options: &ReportOptions,
    resolver: &R,
) -> Result<String> {
    let stats = compute_statistics(entry.layer, entry.dataset, resolver);
    let marker = if is_target(entry.layer, targets) {
        options.target_marker.as_str()
    } else {
        ""
    };
    let header = format!(
        "Layer {number}{marker}\nLayer name: {}\nRecords: {}",
        entry.layer.name.as_deref().unwrap_or("[unnamed]"),
        format_count(stats.feature_count)
    );
    let sections = [
        header,
        geometry_info(&stats),
        table_info(entry.layer.data.as_ref(), options)?,
    ];
    Ok(sections.join("\n\n"))
}

/// Composes the report for `entries`, marking those in `targets`.
///
/// Layers are numbered from 1 in input order. Projections are described with
/// `resolver`.
///
/// # Errors
///
/// Returns an error if `options` are invalid or select a record that some
/// layer's table does not have.
pub fn compose_report_with<R: ProjectionResolver + ?Sized>(
    entries: &[LayerEntry<'_>],
    targets: Option<&[&Layer]>,
    options: &ReportOptions,
    resolver: &R,
) -> Result<String> {
    options.validate()?;
    debug!("Composing report for {} layer(s)", entries.len());
    let blocks = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| layer_block(i + 1, entry, targets, options, resolver))
        .collect::<Result<Vec<_>>>()?;
    Ok(blocks.join("\n\n"))
}

/// Composes the report using each dataset's stored spatial reference.
///
/// # Examples
///
/// ```
/// use geo_types::coord;
/// use geoinfo_common::{DataTable, Dataset, GeometryType, Layer, Record, Shape};
/// use geoinfo_core::{LayerEntry, ReportOptions, compose_report};
///
/// let dataset = Dataset::default();
/// let layer = Layer::new()
///     .with_name("cities")
///     .with_shapes(
///         GeometryType::Point,
///         vec![Some(Shape::Points(vec![coord! { x: 1.0, y: 2.0 }]))],
///     )
///     .with_data(DataTable::from_iter([Record::new().with("pop", 1000_i64)]));
///
/// let entries = [LayerEntry::new(&layer, &dataset)];
/// let report = compose_report(&entries, Some(&[&layer][..]), &ReportOptions::default())?;
/// assert!(report.starts_with("Layer 1 *\nLayer name: cities\nRecords: 1"));
/// assert!(report.contains("Bounds: 1 2 1 2"));
/// # Ok::<(), geoinfo_core::ReportError>(())
/// ```
///
/// # Errors
///
/// See [`compose_report_with`].
pub fn compose_report(
    entries: &[LayerEntry<'_>],
    targets: Option<&[&Layer]>,
    options: &ReportOptions,
) -> Result<String> {
    compose_report_with(entries, targets, options, &DatasetProjection)
}

/// Prints the composed report to standard output.
///
/// # Errors
///
/// See [`compose_report`].
pub fn print_info(
    entries: &[LayerEntry<'_>],
    targets: Option<&[&Layer]>,
    options: &ReportOptions,
) -> Result<()> {
    let report = compose_report(entries, targets, options)?;
    println!("\n{report}\n");
    Ok(())
}
