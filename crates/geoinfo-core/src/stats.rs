//! Per-layer statistics.
//!
//! [`compute_statistics`] gathers feature counts, null counts, the layer
//! extent and the projection description into one [`LayerStatistics`]
//! record. Features whose geometry cannot be resolved are still counted but
//! add nothing to the extent.

use geoinfo_common::{
    ArcCollection, AttributeTable, Bounds, Dataset, GeometryType, Layer, ProjectionResolver,
    Shape, Topology, TopologyError,
};
use log::{debug, warn};
use serde::{Serialize, Serializer};

use crate::detect::{count_null_records, count_null_shapes};

/// Derived statistics for one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStatistics {
    #[serde(serialize_with = "serialize_geometry_type")]
    pub geometry_type: Option<GeometryType>,
    pub feature_count: usize,
    pub null_shape_count: usize,
    pub null_data_count: usize,
    /// `[xmin, ymin, xmax, ymax]`, or six values with a z range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// Present whenever `bbox` is
    #[serde(rename = "proj4", skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
}

impl LayerStatistics {
    /// Returns `true` if at least one feature has non-null geometry.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        self.feature_count > self.null_shape_count
    }
}

fn serialize_geometry_type<S: Serializer>(
    value: &Option<GeometryType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(t) => serializer.serialize_str(t.as_str()),
        None => serializer.serialize_none(),
    }
}

/// Number of features in a layer.
///
/// Taken from the shape list if there is one, otherwise from the attribute
/// table, otherwise zero.
#[must_use]
pub fn feature_count(layer: &Layer) -> usize {
    match (&layer.shapes, &layer.data) {
        (Some(shapes), _) => shapes.len(),
        (None, Some(data)) => data.record_count(),
        (None, None) => 0,
    }
}

/// Extent of a single shape. Point shapes need no topology.
///
/// # Errors
///
/// Returns a [`TopologyError`] if a path shape cannot be resolved.
pub fn shape_bounds(
    shape: &Shape,
    arcs: Option<&ArcCollection>,
) -> Result<Option<Bounds>, TopologyError> {
    match (shape, arcs) {
        (Shape::Points(points), _) => Ok(Bounds::from_coords(points)),
        (Shape::Paths(_), Some(arcs)) => arcs.bounds_of(shape),
        (Shape::Paths(_), None) => Err(TopologyError::MissingTopology),
    }
}

/// Union of the extents of every non-null shape.
///
/// Shapes that fail to resolve are logged and left out. Returns `None` when
/// no shape contributes.
#[must_use]
pub fn layer_bounds(shapes: &[Option<Shape>], arcs: Option<&ArcCollection>) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    for (i, shape) in shapes.iter().enumerate() {
        let Some(shape) = shape else {
            continue;
        };
        match shape_bounds(shape, arcs) {
            Ok(Some(b)) => {
                bounds = Some(match bounds {
                    Some(acc) => acc.merge(&b),
                    None => b,
                });
            },
            Ok(None) => {},
            Err(err) => warn!("Skipping feature {i} in layer bounds: {err}"),
        }
    }
    bounds
}

/// Computes statistics for `layer`, resolving geometry through `dataset`.
///
/// A layer without an attribute table counts every feature as having null
/// data. Without shapes, `bbox` and `projection` are left out.
#[must_use]
pub fn compute_statistics<R: ProjectionResolver + ?Sized>(
    layer: &Layer,
    dataset: &Dataset,
    resolver: &R,
) -> LayerStatistics {
    let feature_count = feature_count(layer);
    let null_data_count = layer
        .data
        .as_ref()
        .map_or(feature_count, |data| count_null_records(data));

    let mut stats = LayerStatistics {
        geometry_type: layer.geometry_type,
        feature_count,
        null_shape_count: 0,
        null_data_count,
        bbox: None,
        projection: None,
    };

    if let Some(shapes) = &layer.shapes {
        stats.null_shape_count = count_null_shapes(shapes);
        if stats.has_geometry() {
            stats.bbox = layer_bounds(shapes, dataset.arcs.as_ref()).map(|b| b.to_vec());
        }
        if stats.bbox.is_some() {
            stats.projection = Some(resolver.describe(dataset));
        }
    }

    debug!(
        "Layer {}: {} features, {} null shapes, {} null records",
        layer.name.as_deref().unwrap_or("[unnamed]"),
        stats.feature_count,
        stats.null_shape_count,
        stats.null_data_count
    );
    stats
}
