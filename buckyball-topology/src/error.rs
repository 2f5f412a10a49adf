use thiserror::Error;

use crate::{EdgeKey, FaceKind};

/// Everything that can go wrong while deriving a truncated icosahedron.
///
/// All of these are deterministic: the same input and parameters will
/// fail in the same way every time, so the only fix is to correct the
/// seed polyhedron or the tolerances in `TopologyParams`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("invalid topology parameters: {0}")]
    InvalidParams(String),
    #[error("seed polyhedron has {actual} vertices; expected {expected}")]
    SeedVertexCount { expected: usize, actual: usize },
    #[error("seed polyhedron has {actual} faces; expected {expected}")]
    SeedFaceCount { expected: usize, actual: usize },
    #[error("seed face {face} refers to vertex {vertex}, which does not exist")]
    SeedIndexOutOfRange { face: usize, vertex: usize },
    #[error("seed vertex {vertex} touches {actual} faces; expected {expected}")]
    SeedValence {
        vertex: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{kind:?} face needs {expected} vertices but was given {actual}")]
    FaceArity {
        kind: FaceKind,
        expected: usize,
        actual: usize,
    },
    #[error("bond {0:?} is not on the boundary of any hexagon")]
    OrphanBond(EdgeKey),
    #[error("bond {edge:?} is shared by {hexagons} hexagons")]
    NonManifoldBond { edge: EdgeKey, hexagons: usize },
    #[error("expected {expected} vertices after merging but found {actual}")]
    VertexCount { expected: usize, actual: usize },
    #[error("expected {expected} hexagons but found {actual}")]
    HexagonCount { expected: usize, actual: usize },
    #[error("expected {expected} pentagons but found {actual}")]
    PentagonCount { expected: usize, actual: usize },
    #[error("expected {expected} edges but found {actual}")]
    EdgeCount { expected: usize, actual: usize },
    #[error("face {face} has no edge between vertices {a} and {b}")]
    UnclosedBoundary { face: usize, a: usize, b: usize },
    #[error("vertex {vertex} touches {actual} faces; expected {expected}")]
    VertexValence {
        vertex: usize,
        expected: usize,
        actual: usize,
    },
    #[error("edge {edge:?} borders {faces} faces; expected 2")]
    EdgeFaceCount { edge: EdgeKey, faces: usize },
}
