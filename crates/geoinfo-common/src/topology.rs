//! Shared arc topology.
//!
//! Line and polygon shapes do not store coordinates directly. Each path is a
//! list of [`ArcId`]s that address vertex chains held once by the dataset's
//! [`ArcCollection`], so neighbouring polygons can share a boundary.

use std::fmt;

use geo_types::Coord;
use thiserror::Error;

use crate::layer::Shape;

/// Errors raised while resolving geometry through the arc topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A path referenced an arc the collection does not contain
    #[error("Arc {arc} is out of range (collection has {count} arcs)")]
    ArcOutOfRange {
        /// The offending arc id as stored in the path
        arc: ArcId,
        /// Number of arcs in the collection
        count: usize,
    },

    /// Z values were supplied for an arc with a different vertex count
    #[error("Arc {arc} has {vertices} vertices but {z_values} z values")]
    ZLengthMismatch {
        /// Index of the arc
        arc: usize,
        /// Number of xy vertices
        vertices: usize,
        /// Number of z values
        z_values: usize,
    },

    /// A path-based shape was resolved without any arc collection
    #[error("Shape references arcs but the dataset has no arc topology")]
    MissingTopology,
}

/// Reference to an arc inside a path.
///
/// A non-negative id `i` reads arc `i` forward; a negative id `!i` reads arc
/// `i` in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArcId(pub i32);

impl ArcId {
    /// Arc `index` read in stored order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn forward(index: usize) -> Self {
        Self(index as i32)
    }

    /// Arc `index` read end to start.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn reversed(index: usize) -> Self {
        Self(!(index as i32))
    }

    /// Index of the addressed arc.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn index(self) -> usize {
        if self.0 < 0 { !self.0 as usize } else { self.0 as usize }
    }

    /// Returns `true` if the arc is traversed backwards.
    #[must_use]
    pub fn is_reversed(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned extent, optionally with a z range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    /// `(zmin, zmax)` when the source carries z values
    pub z: Option<(f64, f64)>,
}

impl Bounds {
    /// Zero-size bounds at a single coordinate.
    #[must_use]
    pub fn from_coord(c: Coord<f64>) -> Self {
        Self {
            xmin: c.x,
            ymin: c.y,
            xmax: c.x,
            ymax: c.y,
            z: None,
        }
    }

    /// Smallest bounds containing every coordinate, or `None` if there are none.
    pub fn from_coords<'a>(coords: impl IntoIterator<Item = &'a Coord<f64>>) -> Option<Self> {
        let mut coords = coords.into_iter();
        let mut bounds = Self::from_coord(*coords.next()?);
        for c in coords {
            bounds.extend_coord(*c);
        }
        Some(bounds)
    }

    /// Grows the bounds to include `c`.
    pub fn extend_coord(&mut self, c: Coord<f64>) {
        self.xmin = self.xmin.min(c.x);
        self.ymin = self.ymin.min(c.y);
        self.xmax = self.xmax.max(c.x);
        self.ymax = self.ymax.max(c.y);
    }

    /// Grows the z range to include `z`.
    pub fn extend_z(&mut self, z: f64) {
        self.z = Some(match self.z {
            Some((lo, hi)) => (lo.min(z), hi.max(z)),
            None => (z, z),
        });
    }

    /// Union of two bounds. The z range is kept from whichever side has one.
    #[must_use]
    pub fn merge(mut self, other: &Bounds) -> Self {
        self.xmin = self.xmin.min(other.xmin);
        self.ymin = self.ymin.min(other.ymin);
        self.xmax = self.xmax.max(other.xmax);
        self.ymax = self.ymax.max(other.ymax);
        if let Some((lo, hi)) = other.z {
            self.extend_z(lo);
            self.extend_z(hi);
        }
        self
    }

    /// Flat array form: `[xmin, ymin, xmax, ymax]`, or
    /// `[xmin, ymin, zmin, xmax, ymax, zmax]` with a z range.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        match self.z {
            Some((zmin, zmax)) => vec![self.xmin, self.ymin, zmin, self.xmax, self.ymax, zmax],
            None => vec![self.xmin, self.ymin, self.xmax, self.ymax],
        }
    }
}

/// Read-only access to shared vertex chains.
pub trait Topology {
    /// Number of arcs.
    fn arc_count(&self) -> usize;

    /// Vertices of arc `index` in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if `index` is not a valid arc.
    fn arc_vertices(&self, index: usize) -> Result<&[Coord<f64>], TopologyError>;

    /// Z values of arc `index`, if the topology carries them.
    fn arc_z(&self, index: usize) -> Option<&[f64]>;

    /// Resolves a path to its vertex sequence, following arc direction.
    ///
    /// The first vertex of every arc after the first duplicates the previous
    /// arc's last vertex and is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if any id is invalid.
    fn resolve_path(&self, ids: &[ArcId]) -> Result<Vec<Coord<f64>>, TopologyError> {
        let mut out = Vec::new();
        for (i, id) in ids.iter().enumerate() {
            let vertices = self.arc_vertices(id.index()).map_err(|_| {
                TopologyError::ArcOutOfRange {
                    arc: *id,
                    count: self.arc_count(),
                }
            })?;
            let skip = usize::from(i > 0);
            if id.is_reversed() {
                out.extend(vertices.iter().rev().skip(skip).copied());
            } else {
                out.extend(vertices.iter().skip(skip).copied());
            }
        }
        Ok(out)
    }

    /// Bounding box of a shape.
    ///
    /// Returns `Ok(None)` for shapes with no vertices.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if a path cannot be resolved.
    fn bounds_of(&self, shape: &Shape) -> Result<Option<Bounds>, TopologyError> {
        match shape {
            Shape::Points(points) => Ok(Bounds::from_coords(points)),
            Shape::Paths(paths) => {
                let mut bounds: Option<Bounds> = None;
                for id in paths.iter().flatten() {
                    let index = id.index();
                    let vertices = self.arc_vertices(index).map_err(|_| {
                        TopologyError::ArcOutOfRange {
                            arc: *id,
                            count: self.arc_count(),
                        }
                    })?;
                    let Some(mut arc_bounds) = Bounds::from_coords(vertices) else {
                        continue;
                    };
                    if let Some(zz) = self.arc_z(index) {
                        for z in zz {
                            arc_bounds.extend_z(*z);
                        }
                    }
                    bounds = Some(match bounds {
                        Some(b) => b.merge(&arc_bounds),
                        None => arc_bounds,
                    });
                }
                Ok(bounds)
            },
        }
    }
}

/// Arc vertex chains stored in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcCollection {
    arcs: Vec<Vec<Coord<f64>>>,
    z: Option<Vec<Vec<f64>>>,
}

impl ArcCollection {
    /// Creates a collection of 2D arcs.
    #[must_use]
    pub fn new(arcs: Vec<Vec<Coord<f64>>>) -> Self {
        Self { arcs, z: None }
    }

    /// Creates a collection with one z value per vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ZLengthMismatch`] if any arc's z list does not
    /// match its vertex count, or if the number of z lists differs from the
    /// number of arcs.
    pub fn with_z(arcs: Vec<Vec<Coord<f64>>>, z: Vec<Vec<f64>>) -> Result<Self, TopologyError> {
        if z.len() != arcs.len() {
            return Err(TopologyError::ZLengthMismatch {
                arc: arcs.len().min(z.len()),
                vertices: arcs.get(z.len()).map_or(0, Vec::len),
                z_values: z.get(arcs.len()).map_or(0, Vec::len),
            });
        }
        for (i, (arc, zz)) in arcs.iter().zip(&z).enumerate() {
            if arc.len() != zz.len() {
                return Err(TopologyError::ZLengthMismatch {
                    arc: i,
                    vertices: arc.len(),
                    z_values: zz.len(),
                });
            }
        }
        Ok(Self { arcs, z: Some(z) })
    }

    /// Iterates over `(arc index, vertex count)` pairs.
    pub fn vertex_counts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.arcs.iter().map(Vec::len).enumerate()
    }
}

impl Topology for ArcCollection {
    fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    fn arc_vertices(&self, index: usize) -> Result<&[Coord<f64>], TopologyError> {
        self.arcs
            .get(index)
            .map(Vec::as_slice)
            .ok_or(TopologyError::ArcOutOfRange {
                arc: ArcId::forward(index),
                count: self.arcs.len(),
            })
    }

    fn arc_z(&self, index: usize) -> Option<&[f64]> {
        self.z.as_ref()?.get(index).map(Vec::as_slice)
    }
}
