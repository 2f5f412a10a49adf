use serde::Serialize;

use crate::topology::{Pt3, Vec3};

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 3]) -> Vertex {
        Vertex {
            position,
            normal,
            color,
        }
    }

    pub fn from_pt3(position: Pt3, normal: Vec3, color: [f32; 3]) -> Vertex {
        Vertex::new(
            [position.x as f32, position.y as f32, position.z as f32],
            [normal.x as f32, normal.y as f32, normal.z as f32],
            color,
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ProtoMesh {
    vertexes: Vec<Vertex>,
    indexes: Vec<u32>,
}

impl ProtoMesh {
    /// Panics if given an empty vertex or index vector,
    /// or an index that doesn't refer to a vertex.
    pub fn new(vertexes: Vec<Vertex>, indexes: Vec<u32>) -> ProtoMesh {
        // An empty mesh almost certainly means we made a mistake upstream.
        assert!(!vertexes.is_empty());
        assert!(!indexes.is_empty());
        assert_eq!(indexes.len() % 3, 0);
        assert!(indexes.iter().all(|&i| (i as usize) < vertexes.len()));

        ProtoMesh { vertexes, indexes }
    }

    pub fn vertexes(&self) -> &[Vertex] {
        &self.vertexes
    }

    pub fn indexes(&self) -> &[u32] {
        &self.indexes
    }

    pub fn triangle_count(&self) -> usize {
        self.indexes.len() / 3
    }
}
