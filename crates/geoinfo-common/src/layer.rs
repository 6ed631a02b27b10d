//! Layers, shapes and datasets.

use std::fmt;

use geo_types::Coord;

use crate::table::DataTable;
use crate::topology::{ArcCollection, ArcId};

/// Geometry kind shared by every feature of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    Polyline,
    Polygon,
}

impl GeometryType {
    /// Returns the lowercase name used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::Polyline => "polyline",
            GeometryType::Polygon => "polygon",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry of one feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// One or more points.
    Points(Vec<Coord<f64>>),
    /// One or more paths, each a sequence of arc references.
    Paths(Vec<Vec<ArcId>>),
}

impl Shape {
    /// Number of parts (points or paths).
    #[must_use]
    pub fn part_count(&self) -> usize {
        match self {
            Shape::Points(points) => points.len(),
            Shape::Paths(paths) => paths.len(),
        }
    }
}

/// A named collection of features sharing one geometry type.
///
/// `shapes` and `data`, when both present, are index-aligned: slot `i` of each
/// describes feature `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub name: Option<String>,
    pub geometry_type: Option<GeometryType>,
    pub shapes: Option<Vec<Option<Shape>>>,
    pub data: Option<DataTable>,
}

impl Layer {
    /// Creates an empty, unnamed layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the geometry type and the per-feature shapes.
    #[must_use]
    pub fn with_shapes(mut self, geometry_type: GeometryType, shapes: Vec<Option<Shape>>) -> Self {
        self.geometry_type = Some(geometry_type);
        self.shapes = Some(shapes);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: DataTable) -> Self {
        self.data = Some(data);
        self
    }
}

/// Layers plus the topology and spatial reference they share.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub layers: Vec<Layer>,
    pub arcs: Option<ArcCollection>,
    /// Spatial reference as a Proj.4 string
    pub crs: Option<String>,
}

impl Dataset {
    /// Creates a dataset without arcs or spatial reference.
    #[must_use]
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            arcs: None,
            crs: None,
        }
    }

    #[must_use]
    pub fn with_arcs(mut self, arcs: ArcCollection) -> Self {
        self.arcs = Some(arcs);
        self
    }

    #[must_use]
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = Some(crs.into());
        self
    }
}
