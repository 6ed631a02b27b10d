//! Outer ring and hole classification by signed area.
//!
//! Rings wound counter-clockwise have positive area and count as outer rings;
//! clockwise rings have negative area and count as holes. Rings with zero
//! area count as neither.

use geo_types::Coord;
use geoinfo_common::{ArcCollection, Dataset, Layer, Shape, Topology, TopologyError};
use log::{debug, warn};
use serde::Serialize;

use crate::error::Result;

/// Outer ring and hole counts for a set of shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RingTally {
    pub rings: usize,
    pub holes: usize,
}

/// Signed planar area of a ring (shoelace formula).
///
/// The ring may be given open or closed. Fewer than three vertices yield zero.
#[must_use]
pub fn signed_area(ring: &[Coord<f64>]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    // Coordinates are taken relative to the first vertex
    let origin = ring[0];
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i] - origin;
        let b = ring[(i + 1) % n] - origin;
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Signed area of every closed path in `shapes`, in order.
///
/// Point shapes, null slots and open paths contribute nothing. Paths that
/// reference missing arcs are logged and skipped.
pub fn ring_areas<'a, T: Topology + ?Sized>(
    shapes: &'a [Option<Shape>],
    topology: &'a T,
) -> impl Iterator<Item = f64> + 'a {
    shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| match shape {
            Some(Shape::Paths(paths)) => Some((i, paths)),
            _ => None,
        })
        .flat_map(|(i, paths)| paths.iter().map(move |path| (i, path)))
        .filter_map(move |(i, path)| match topology.resolve_path(path) {
            Ok(vertices) if is_closed(&vertices) => Some(signed_area(&vertices)),
            Ok(_) => {
                debug!("Skipping open path of feature {i}");
                None
            },
            Err(err) => {
                warn!("Skipping ring of feature {i}: {err}");
                None
            },
        })
}

/// Returns `true` if the path has vertices and ends where it starts.
#[must_use]
pub fn is_closed(path: &[Coord<f64>]) -> bool {
    path.len() > 1 && path.first() == path.last()
}

/// Counts outer rings and holes over every closed path in `shapes`.
#[must_use]
pub fn count_rings<T: Topology + ?Sized>(shapes: &[Option<Shape>], topology: &T) -> RingTally {
    ring_areas(shapes, topology).fold(RingTally::default(), |mut tally, area| {
        if area > 0.0 {
            tally.rings += 1;
        } else if area < 0.0 {
            tally.holes += 1;
        }
        tally
    })
}

/// Counts outer rings and holes for a layer using its dataset's arcs.
///
/// # Errors
///
/// Returns [`TopologyError::MissingTopology`] if the layer has path shapes
/// but the dataset carries no arc collection.
pub fn count_layer_rings(layer: &Layer, dataset: &Dataset) -> Result<RingTally> {
    let Some(shapes) = &layer.shapes else {
        return Ok(RingTally::default());
    };
    match &dataset.arcs {
        Some(arcs) => Ok(count_rings(shapes, arcs)),
        None if shapes.iter().flatten().any(|s| matches!(s, Shape::Paths(_))) => {
            Err(TopologyError::MissingTopology.into())
        },
        None => Ok(count_rings(shapes, &ArcCollection::default())),
    }
}
