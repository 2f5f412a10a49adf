//! Geometry handed off to whatever draws the board.
//!
//! Nothing in here knows about a graphics API; it just lays out
//! vertex and index buffers ready to be uploaded.

mod face_mesh;
mod proto_mesh;

pub use self::face_mesh::{make_board_meshes, make_face_mesh, terrain_color};
pub use self::proto_mesh::{ProtoMesh, Vertex};
