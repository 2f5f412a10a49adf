use std::collections::HashMap;

use crate::board::{Board, Tile};
use crate::topology::{EdgeKey, FaceKind, Pt3, Vec3};

/// Stable handle for anything on the board a player can point at.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ElementId {
    Face(usize),
    Edge(usize),
    Vertex(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceData {
    pub kind: FaceKind,
    pub tile: Tile,
    pub center: Pt3,
    pub normal: Vec3,
    pub vertices: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeData {
    pub key: EdgeKey,
    pub midpoint: Pt3,
    /// The faces either side.
    pub faces: [usize; 2],
}

#[derive(Clone, Debug, PartialEq)]
pub struct VertexData {
    pub position: Pt3,
    pub faces: Vec<usize>,
    pub edges: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementData<'a> {
    Face(&'a FaceData),
    Edge(&'a EdgeData),
    Vertex(&'a VertexData),
}

/// Per-element data for a board, precomputed once so that whatever is
/// presenting the board never has to hang game data off its own objects.
#[derive(Clone, Debug)]
pub struct ElementIndex {
    faces: Vec<FaceData>,
    edges: Vec<EdgeData>,
    vertices: Vec<VertexData>,
    edge_ids: HashMap<EdgeKey, usize>,
}

impl ElementIndex {
    pub fn new(board: &Board) -> ElementIndex {
        let topology = board.topology();

        let faces = topology
            .faces()
            .iter()
            .zip(board.tiles())
            .enumerate()
            .map(|(face_index, (face, tile))| FaceData {
                kind: face.kind(),
                tile: *tile,
                center: topology.face_center(face_index),
                normal: topology.face_normal(face_index),
                vertices: face.boundary().to_vec(),
            })
            .collect();

        let edges = topology
            .edges()
            .iter()
            .enumerate()
            .map(|(edge_index, &key)| {
                let sides = topology.faces_of_edge(edge_index);
                EdgeData {
                    key,
                    midpoint: topology.edge_midpoint(edge_index),
                    // A validated topology always has exactly two.
                    faces: [sides[0], sides[1]],
                }
            })
            .collect();

        let vertices = topology
            .vertices()
            .iter()
            .enumerate()
            .map(|(vertex, &position)| VertexData {
                position,
                faces: topology.faces_around_vertex(vertex).to_vec(),
                edges: topology.edges_around_vertex(vertex).to_vec(),
            })
            .collect();

        let edge_ids = topology
            .edges()
            .iter()
            .enumerate()
            .map(|(edge_index, &key)| (key, edge_index))
            .collect();

        ElementIndex {
            faces,
            edges,
            vertices,
            edge_ids,
        }
    }

    pub fn get(&self, id: ElementId) -> Option<ElementData<'_>> {
        match id {
            ElementId::Face(index) => self.faces.get(index).map(ElementData::Face),
            ElementId::Edge(index) => self.edges.get(index).map(ElementData::Edge),
            ElementId::Vertex(index) => self.vertices.get(index).map(ElementData::Vertex),
        }
    }

    pub fn face(&self, index: usize) -> Option<&FaceData> {
        self.faces.get(index)
    }

    pub fn edge(&self, index: usize) -> Option<&EdgeData> {
        self.edges.get(index)
    }

    pub fn vertex(&self, index: usize) -> Option<&VertexData> {
        self.vertices.get(index)
    }

    pub fn edge_id(&self, key: EdgeKey) -> Option<ElementId> {
        self.edge_ids.get(&key).map(|&index| ElementId::Edge(index))
    }

    pub fn len(&self) -> usize {
        self.faces.len() + self.edges.len() + self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
