use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{EdgeKey, TopologyError};

/// Largest number of vertices on any face.
pub const MAX_ARITY: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    Hexagon,
    Pentagon,
}

impl FaceKind {
    pub fn arity(self) -> usize {
        match self {
            FaceKind::Hexagon => 6,
            FaceKind::Pentagon => 5,
        }
    }
}

/// A polygon of the truncated solid.
///
/// The boundary is a closed walk of vertex indices; the last vertex
/// connects back to the first. `triangles` is a fan over that boundary,
/// for rendering only.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Face {
    kind: FaceKind,
    boundary: ArrayVec<usize, MAX_ARITY>,
    triangles: Vec<[usize; 3]>,
}

impl Face {
    pub fn new(kind: FaceKind, boundary: &[usize]) -> Result<Face, TopologyError> {
        if boundary.len() != kind.arity() {
            return Err(TopologyError::FaceArity {
                kind,
                expected: kind.arity(),
                actual: boundary.len(),
            });
        }
        let boundary: ArrayVec<usize, MAX_ARITY> = boundary.iter().cloned().collect();
        let triangles = fan_triangulate(&boundary);
        Ok(Face {
            kind,
            boundary,
            triangles,
        })
    }

    pub fn kind(&self) -> FaceKind {
        self.kind
    }

    pub fn boundary(&self) -> &[usize] {
        &self.boundary
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.boundary.contains(&vertex)
    }

    /// Whether both ends of `edge` are somewhere on this face's boundary.
    pub fn contains_edge(&self, edge: EdgeKey) -> bool {
        self.contains(edge.a()) && self.contains(edge.b())
    }

    /// Boundary segments, in boundary order, including the closing one.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        let n = self.boundary.len();
        (0..n).map(move |i| EdgeKey::new(self.boundary[i], self.boundary[(i + 1) % n]))
    }

    /// Rewrite every vertex index through `index_map`.
    pub fn remap(&self, index_map: &[usize]) -> Face {
        let boundary: ArrayVec<usize, MAX_ARITY> =
            self.boundary.iter().map(|&i| index_map[i]).collect();
        let triangles = fan_triangulate(&boundary);
        Face {
            kind: self.kind,
            boundary,
            triangles,
        }
    }

    /// Same face walked the other way around, still starting at
    /// the same vertex.
    pub fn reversed(&self) -> Face {
        let mut boundary = self.boundary.clone();
        boundary[1..].reverse();
        let triangles = fan_triangulate(&boundary);
        Face {
            kind: self.kind,
            boundary,
            triangles,
        }
    }
}

/// Split a polygon into triangles that all share its first vertex.
///
/// Yields `n - 2` triangles for `n >= 3`, and nothing for anything smaller.
pub fn fan_triangulate(boundary: &[usize]) -> Vec<[usize; 3]> {
    if boundary.len() < 3 {
        return Vec::new();
    }
    (1..boundary.len() - 1)
        .map(|i| [boundary[0], boundary[i], boundary[i + 1]])
        .collect()
}
