//! The finished truncated icosahedron, and the pipeline that builds it.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use nalgebra as na;
use serde::Serialize;
use slog::{debug, info, o, Logger};

use crate::{
    derive_edges, discover_pentagons, generate_hexagons, merge_close, EdgeKey, Face, FaceKind,
    Pt3, RawPolyhedron, TopologyError, TopologyParams, Vec3,
};

pub const VERTEX_COUNT: usize = 60;
pub const HEXAGON_COUNT: usize = 20;
pub const PENTAGON_COUNT: usize = 12;
pub const FACE_COUNT: usize = HEXAGON_COUNT + PENTAGON_COUNT;
pub const EDGE_COUNT: usize = 90;
/// Faces (and edges) meeting at every vertex.
pub const VERTEX_VALENCE: usize = 3;

/// Vertices, edges and faces of a truncated icosahedron.
///
/// Faces are stored hexagons first, then pentagons, and every face
/// boundary winds counterclockwise when seen from outside the solid.
///
/// Immutable once built; share it behind an `Arc` or a plain reference.
#[derive(Clone, Debug, Serialize)]
pub struct Topology {
    params: TopologyParams,
    vertices: Vec<Pt3>,
    faces: Vec<Face>,
    edges: Vec<EdgeKey>,
    #[serde(skip)]
    edge_lookup: HashMap<EdgeKey, usize>,
    #[serde(skip)]
    vertex_faces: Vec<Vec<usize>>,
    #[serde(skip)]
    vertex_edges: Vec<Vec<usize>>,
    #[serde(skip)]
    edge_faces: Vec<Vec<usize>>,
}

impl Topology {
    /// Truncate the standard icosahedron of `params.radius`.
    pub fn from_icosahedron(
        params: TopologyParams,
        parent_log: &Logger,
    ) -> Result<Topology, TopologyError> {
        Topology::build(&RawPolyhedron::icosahedron(params.radius), params, parent_log)
    }

    /// Truncate `raw`, which must have the topology of an icosahedron.
    ///
    /// Fails rather than returning anything that doesn't have exactly the
    /// vertex, edge and face counts of a truncated icosahedron, with every
    /// face closed and every edge between exactly two faces.
    pub fn build(
        raw: &RawPolyhedron,
        params: TopologyParams,
        parent_log: &Logger,
    ) -> Result<Topology, TopologyError> {
        let log = parent_log.new(o!("builder" => "topology"));
        params.validate()?;
        raw.validate()?;

        let (points, hexagons) = generate_hexagons(raw, params.truncation_ratio)?;
        let (vertices, index_map) = merge_close(&points, params.merge_tolerance);
        debug!(log, "Merged truncation points";
            "raw" => points.len(),
            "merged" => vertices.len());
        expect_count(vertices.len(), VERTEX_COUNT, |expected, actual| {
            TopologyError::VertexCount { expected, actual }
        })?;
        let hexagons: Vec<Face> = hexagons.iter().map(|hex| hex.remap(&index_map)).collect();

        let pentagons = discover_pentagons(
            &vertices,
            &hexagons,
            params.bond_length(),
            params.edge_tolerance,
            &log,
        )?;

        let center = centroid(&vertices);
        let faces: Vec<Face> = hexagons
            .into_iter()
            .chain(pentagons)
            .map(|face| orient_outward(face, &vertices, &center))
            .collect();
        let edges = derive_edges(&vertices, params.bond_length(), params.edge_tolerance);
        expect_count(edges.len(), EDGE_COUNT, |expected, actual| {
            TopologyError::EdgeCount { expected, actual }
        })?;

        let topology = Topology::assemble(params, vertices, faces, edges)?;
        topology.validate()?;
        info!(log, "Built truncated icosahedron";
            "radius" => params.radius,
            "vertices" => topology.vertices.len(),
            "edges" => topology.edges.len(),
            "faces" => topology.faces.len());
        Ok(topology)
    }

    // Fills in adjacency tables; checks only what it needs to index safely.
    fn assemble(
        params: TopologyParams,
        vertices: Vec<Pt3>,
        faces: Vec<Face>,
        edges: Vec<EdgeKey>,
    ) -> Result<Topology, TopologyError> {
        let edge_lookup: HashMap<EdgeKey, usize> =
            edges.iter().enumerate().map(|(i, &key)| (key, i)).collect();

        let mut vertex_faces = vec![Vec::new(); vertices.len()];
        let mut edge_faces = vec![Vec::new(); edges.len()];
        for (face_index, face) in faces.iter().enumerate() {
            for &vertex in face.boundary() {
                vertex_faces[vertex].push(face_index);
            }
            for key in face.boundary_edges() {
                let edge_index =
                    edge_lookup
                        .get(&key)
                        .ok_or_else(|| TopologyError::UnclosedBoundary {
                            face: face_index,
                            a: key.a(),
                            b: key.b(),
                        })?;
                edge_faces[*edge_index].push(face_index);
            }
        }

        let mut vertex_edges = vec![Vec::new(); vertices.len()];
        for (edge_index, key) in edges.iter().enumerate() {
            vertex_edges[key.a()].push(edge_index);
            vertex_edges[key.b()].push(edge_index);
        }

        Ok(Topology {
            params,
            vertices,
            faces,
            edges,
            edge_lookup,
            vertex_faces,
            vertex_edges,
            edge_faces,
        })
    }

    /// Check every structural invariant of the finished solid.
    pub fn validate(&self) -> Result<(), TopologyError> {
        expect_count(self.vertices.len(), VERTEX_COUNT, |expected, actual| {
            TopologyError::VertexCount { expected, actual }
        })?;
        expect_count(self.hexagons().count(), HEXAGON_COUNT, |expected, actual| {
            TopologyError::HexagonCount { expected, actual }
        })?;
        expect_count(self.pentagons().count(), PENTAGON_COUNT, |expected, actual| {
            TopologyError::PentagonCount { expected, actual }
        })?;
        expect_count(self.edges.len(), EDGE_COUNT, |expected, actual| {
            TopologyError::EdgeCount { expected, actual }
        })?;
        for face in &self.faces {
            if face.boundary().len() != face.kind().arity() {
                return Err(TopologyError::FaceArity {
                    kind: face.kind(),
                    expected: face.kind().arity(),
                    actual: face.boundary().len(),
                });
            }
        }
        for (edge_index, faces) in self.edge_faces.iter().enumerate() {
            if faces.len() != 2 {
                return Err(TopologyError::EdgeFaceCount {
                    edge: self.edges[edge_index],
                    faces: faces.len(),
                });
            }
        }
        for (vertex, faces) in self.vertex_faces.iter().enumerate() {
            if faces.len() != VERTEX_VALENCE {
                return Err(TopologyError::VertexValence {
                    vertex,
                    expected: VERTEX_VALENCE,
                    actual: faces.len(),
                });
            }
        }
        Ok(())
    }

    pub fn params(&self) -> &TopologyParams {
        &self.params
    }

    pub fn vertices(&self) -> &[Pt3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn hexagons(&self) -> impl Iterator<Item = &Face> {
        self.faces_of_kind(FaceKind::Hexagon)
    }

    pub fn pentagons(&self) -> impl Iterator<Item = &Face> {
        self.faces_of_kind(FaceKind::Pentagon)
    }

    fn faces_of_kind(&self, kind: FaceKind) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(move |face| face.kind() == kind)
    }

    /// Index into `edges()` of the edge between two vertices, if there is one.
    pub fn edge_index(&self, key: EdgeKey) -> Option<usize> {
        self.edge_lookup.get(&key).cloned()
    }

    /// Indexes of the faces touching `vertex`.
    pub fn faces_around_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertex_faces[vertex]
    }

    /// Indexes of the edges touching `vertex`.
    pub fn edges_around_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertex_edges[vertex]
    }

    /// Vertices one edge away from `vertex`.
    pub fn vertex_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertex_edges[vertex]
            .iter()
            .filter_map(move |&edge_index| self.edges[edge_index].other(vertex))
    }

    /// The two faces either side of an edge.
    pub fn faces_of_edge(&self, edge_index: usize) -> &[usize] {
        &self.edge_faces[edge_index]
    }

    pub fn face_center(&self, face_index: usize) -> Pt3 {
        let boundary = self.faces[face_index].boundary();
        centroid_of(boundary.iter().map(|&vertex| self.vertices[vertex]))
    }

    /// Unit normal pointing out of the solid.
    pub fn face_normal(&self, face_index: usize) -> Vec3 {
        fan_normal(&self.faces[face_index], &self.vertices)
    }

    pub fn edge_midpoint(&self, edge_index: usize) -> Pt3 {
        let key = self.edges[edge_index];
        na::center(&self.vertices[key.a()], &self.vertices[key.b()])
    }
}

fn expect_count<F>(actual: usize, expected: usize, make_error: F) -> Result<(), TopologyError>
where
    F: FnOnce(usize, usize) -> TopologyError,
{
    if actual == expected {
        Ok(())
    } else {
        Err(make_error(expected, actual))
    }
}

fn centroid(points: &[Pt3]) -> Pt3 {
    centroid_of(points.iter().cloned())
}

fn centroid_of<I: Iterator<Item = Pt3>>(points: I) -> Pt3 {
    let mut sum = Vec3::zeros();
    let mut count = 0usize;
    for point in points {
        sum += point.coords;
        count += 1;
    }
    if count == 0 {
        return Pt3::origin();
    }
    Pt3::from(sum / count as f64)
}

// Normal of the first fan triangle; the faces are planar,
// so any of them would do.
fn fan_normal(face: &Face, vertices: &[Pt3]) -> Vec3 {
    let [a, b, c] = face.triangles()[0];
    let (a, b, c) = (vertices[a], vertices[b], vertices[c]);
    (b - a).cross(&(c - a)).normalize()
}

fn orient_outward(face: Face, vertices: &[Pt3], solid_center: &Pt3) -> Face {
    let face_center = centroid_of(face.boundary().iter().map(|&vertex| vertices[vertex]));
    let outward = face_center - solid_center;
    if fan_normal(&face, vertices).dot(&outward) < 0.0 {
        face.reversed()
    } else {
        face
    }
}
