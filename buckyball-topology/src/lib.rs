/*!
# Truncated icosahedron topology

Derives the vertices, edges and faces of a truncated icosahedron (a
"soccer ball") from an icosahedron, for use as a game board:

1. Cut every corner off every triangular face, making 20 hexagons.
2. Merge the cut points that neighbouring hexagons share.
3. Find the 12 pentagons left in the gaps, by walking the 5-cycles
   of edges that only one hexagon owns.
4. Re-derive the full edge set purely from vertex distances.

The result is a [`Topology`]: an immutable, fully-checked mesh graph
with adjacency queries, that knows nothing about rendering or game
rules.
*/

#[cfg(test)]
#[macro_use]
extern crate approx;

mod edge;
mod error;
mod face;
mod hexagons;
mod icosahedron;
mod merge;
mod params;
mod pentagons;
mod topology;
mod types;

pub use self::edge::{derive_edges, EdgeKey};
pub use self::error::TopologyError;
pub use self::face::{fan_triangulate, Face, FaceKind, MAX_ARITY};
pub use self::hexagons::generate_hexagons;
pub use self::icosahedron::{
    RawPolyhedron, FACES as ICOSAHEDRON_FACES, VERTICES as ICOSAHEDRON_VERTICES,
};
pub use self::merge::merge_close;
pub use self::params::TopologyParams;
pub use self::pentagons::discover_pentagons;
pub use self::topology::{
    Topology, EDGE_COUNT, FACE_COUNT, HEXAGON_COUNT, PENTAGON_COUNT, VERTEX_COUNT, VERTEX_VALENCE,
};
pub use self::types::{Pt3, Real, Vec3};
