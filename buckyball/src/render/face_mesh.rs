use crate::board::Board;
use crate::resource::{Resource, Terrain};

use super::{ProtoMesh, Vertex};

pub const LUMBER_GREEN: [f32; 3] = [0.13, 0.4, 0.15];
pub const BRICK_RED: [f32; 3] = [0.7, 0.3, 0.2];
pub const WOOL_GREEN: [f32; 3] = [0.55, 0.8, 0.35];
pub const GRAIN_YELLOW: [f32; 3] = [0.9, 0.8, 0.3];
pub const ORE_GRAY: [f32; 3] = [0.5, 0.5, 0.55];
pub const DESERT_SAND: [f32; 3] = [0.85, 0.75, 0.55];

pub fn terrain_color(terrain: Terrain) -> [f32; 3] {
    match terrain {
        Terrain::Producing(Resource::Lumber) => LUMBER_GREEN,
        Terrain::Producing(Resource::Brick) => BRICK_RED,
        Terrain::Producing(Resource::Wool) => WOOL_GREEN,
        Terrain::Producing(Resource::Grain) => GRAIN_YELLOW,
        Terrain::Producing(Resource::Ore) => ORE_GRAY,
        Terrain::Desert => DESERT_SAND,
    }
}

/// Flat-shaded mesh for a single face, colored by its terrain.
///
/// Vertexes are in boundary order, so the face's fan triangles can be
/// re-indexed locally.
///
/// Returns `None` if `face_index` isn't a face of the board, or if any
/// of its triangles reaches off the face's boundary.
pub fn make_face_mesh(board: &Board, face_index: usize) -> Option<ProtoMesh> {
    let topology = board.topology();
    let face = topology.faces().get(face_index)?;
    let tile = board.tile(face_index)?;
    let normal = topology.face_normal(face_index);
    let color = terrain_color(tile.terrain);

    let vertex_data: Vec<Vertex> = face
        .boundary()
        .iter()
        .map(|&vertex| Vertex::from_pt3(topology.vertices()[vertex], normal, color))
        .collect();

    let index_data = local_indexes(face.boundary(), face.triangles())?;

    Some(ProtoMesh::new(vertex_data, index_data))
}

// Re-index triangles from vertex pool indexes to positions on `boundary`.
fn local_indexes(boundary: &[usize], triangles: &[[usize; 3]]) -> Option<Vec<u32>> {
    triangles
        .iter()
        .flat_map(|triangle| triangle.iter())
        .map(|&vertex| {
            boundary
                .iter()
                .position(|&v| v == vertex)
                .map(|local| local as u32)
        })
        .collect()
}

/// One mesh per face, in face order.
pub fn make_board_meshes(board: &Board) -> Vec<ProtoMesh> {
    (0..board.topology().faces().len())
        .filter_map(|face_index| make_face_mesh(board, face_index))
        .collect()
}
