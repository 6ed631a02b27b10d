//! Vertex and node statistics for an arc topology.

use std::collections::HashSet;

use geo_types::Coord;
use geoinfo_common::Topology;
use serde::Serialize;

/// Counts describing how much a topology could be simplified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimplificationInfo {
    /// Distinct arc endpoint positions
    pub node_count: usize,
    /// Vertices that are not arc endpoints
    pub interior_vertex_count: usize,
}

/// Number of vertices that sit strictly inside an arc.
#[must_use]
pub fn count_interior_vertices<T: Topology + ?Sized>(topology: &T) -> usize {
    (0..topology.arc_count())
        .filter_map(|i| topology.arc_vertices(i).ok())
        .map(|v| v.len().saturating_sub(2))
        .sum()
}

/// Number of distinct positions where arcs start or end.
#[must_use]
pub fn count_nodes<T: Topology + ?Sized>(topology: &T) -> usize {
    let mut nodes = HashSet::new();
    for i in 0..topology.arc_count() {
        let Ok(vertices) = topology.arc_vertices(i) else {
            continue;
        };
        if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
            nodes.insert(node_key(*first));
            nodes.insert(node_key(*last));
        }
    }
    nodes.len()
}

// Adding 0.0 folds -0.0 into 0.0 so both hash alike
fn node_key(c: Coord<f64>) -> (u64, u64) {
    ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())
}

/// Node and interior vertex counts for a topology.
#[must_use]
pub fn simplification_info<T: Topology + ?Sized>(topology: &T) -> SimplificationInfo {
    SimplificationInfo {
        node_count: count_nodes(topology),
        interior_vertex_count: count_interior_vertices(topology),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;
    use geoinfo_common::ArcCollection;

    fn sample_arcs() -> ArcCollection {
        ArcCollection::new(vec![
            // 4 vertices: 2 interior
            vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 1.0, y: 0.0 },
                coord! { x: 1.0, y: 1.0 },
                coord! { x: 2.0, y: 1.0 },
            ],
            // shares its start with the end of the first arc
            vec![coord! { x: 2.0, y: 1.0 }, coord! { x: 3.0, y: 3.0 }],
            // closed ring: one node
            vec![
                coord! { x: 5.0, y: 5.0 },
                coord! { x: 6.0, y: 5.0 },
                coord! { x: 6.0, y: 6.0 },
                coord! { x: -0.0, y: 5.0 },
                coord! { x: 5.0, y: 5.0 },
            ],
        ])
    }

    #[test]
    fn test_count_interior_vertices() {
        assert_eq!(count_interior_vertices(&sample_arcs()), 2 + 3);
        assert_eq!(count_interior_vertices(&ArcCollection::default()), 0);
    }

    #[test]
    fn test_count_nodes() {
        assert_eq!(count_nodes(&sample_arcs()), 4);
    }

    #[test]
    fn test_negative_zero_nodes_match() {
        let arcs = ArcCollection::new(vec![
            vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }],
            vec![coord! { x: -0.0, y: 0.0 }, coord! { x: 2.0, y: 2.0 }],
        ]);
        assert_eq!(count_nodes(&arcs), 3);
    }

    #[test]
    fn test_simplification_info() {
        let info = simplification_info(&sample_arcs());
        assert_eq!(
            info,
            SimplificationInfo {
                node_count: 4,
                interior_vertex_count: 5
            }
        );
    }
}
