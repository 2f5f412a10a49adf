use crate::{Pt3, Real, TopologyError};

// Golden ratio
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const PHI: f64 = 1.61803398874989484820458683436563811772030917980576286213544862270526046281890244970720720418939113748475;

// Scale factor to get icosahedron with circumscribed sphere of radius 1
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const SF: f64 = 0.525731112119133606025669084847876607285497932243341781528935523241211146403214018371632628831552570956698521400021;

// Vertices of an icosahedron with circumscribed sphere of radius 1;
// the cyclic permutations of (0, ±1, ±φ), scaled down by `SF`.
const A: f64 = SF;
const B: f64 = PHI * SF;
#[rustfmt::skip]
pub const VERTICES: [[f64; 3]; 12] = [
    [ 0.0,  A,    B  ],
    [ 0.0, -A,    B  ],
    [ 0.0, -A,   -B  ],
    [ 0.0,  A,   -B  ],
    [ A,    B,    0.0],
    [-A,    B,    0.0],
    [-A,   -B,    0.0],
    [ A,   -B,    0.0],
    [ B,    0.0,  A  ],
    [-B,    0.0,  A  ],
    [-B,    0.0, -A  ],
    [ B,    0.0, -A  ],
];

// Five bands of four faces each, walking around the solid
// from vertex 0 to its antipode, vertex 2.
#[rustfmt::skip]
pub const FACES: [[usize; 3]; 20] = [
    [ 0,  1,  8  ],
    [ 7,  8,  1  ],
    [ 8,  7,  11 ],
    [ 2,  11, 7  ],

    [ 0,  8,  4  ],
    [ 11, 4,  8  ],
    [ 4,  11, 3  ],
    [ 2,  3,  11 ],

    [ 0,  4,  5  ],
    [ 3,  5,  4  ],
    [ 5,  3,  10 ],
    [ 2,  10, 3  ],

    [ 0,  5,  9  ],
    [ 10, 9,  5  ],
    [ 9,  10, 6  ],
    [ 2,  6,  10 ],

    [ 0,  9,  1  ],
    [ 6,  1,  9  ],
    [ 1,  6,  7  ],
    [ 2,  7,  6  ],
];

pub const SEED_VERTEX_COUNT: usize = 12;
pub const SEED_FACE_COUNT: usize = 20;
pub const SEED_VALENCE: usize = 5;

/// The seed solid: an icosahedron's vertices, and its triangular
/// faces as indices into those vertices.
///
/// Only consumed by `Topology::build`; nothing holds on to it afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPolyhedron {
    pub vertices: Vec<Pt3>,
    pub faces: Vec<[usize; 3]>,
}

impl RawPolyhedron {
    pub fn new(vertices: Vec<Pt3>, faces: Vec<[usize; 3]>) -> RawPolyhedron {
        RawPolyhedron { vertices, faces }
    }

    /// Regular icosahedron with circumscribed sphere of radius `radius`.
    pub fn icosahedron(radius: Real) -> RawPolyhedron {
        let vertices = VERTICES
            .iter()
            .map(|v| Pt3::new(v[0] * radius, v[1] * radius, v[2] * radius))
            .collect();
        RawPolyhedron::new(vertices, FACES.to_vec())
    }

    /// Checks that this has the topology of a regular icosahedron:
    /// 12 vertices, 20 faces, and every vertex touched by exactly 5 faces.
    ///
    /// Doesn't look at positions; irregular spacing shows up later,
    /// when the distance filters fail to find the right number of bonds.
    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.vertices.len() != SEED_VERTEX_COUNT {
            return Err(TopologyError::SeedVertexCount {
                expected: SEED_VERTEX_COUNT,
                actual: self.vertices.len(),
            });
        }
        if self.faces.len() != SEED_FACE_COUNT {
            return Err(TopologyError::SeedFaceCount {
                expected: SEED_FACE_COUNT,
                actual: self.faces.len(),
            });
        }
        let mut valence = [0usize; SEED_VERTEX_COUNT];
        for (face_index, face) in self.faces.iter().enumerate() {
            for &vertex in face {
                if vertex >= SEED_VERTEX_COUNT {
                    return Err(TopologyError::SeedIndexOutOfRange {
                        face: face_index,
                        vertex,
                    });
                }
                valence[vertex] += 1;
            }
        }
        if let Some((vertex, &actual)) = valence
            .iter()
            .enumerate()
            .find(|&(_, &count)| count != SEED_VALENCE)
        {
            return Err(TopologyError::SeedValence {
                vertex,
                expected: SEED_VALENCE,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra as na;

    #[test]
    fn icosahedron_is_valid() {
        assert_eq!(RawPolyhedron::icosahedron(1.0).validate(), Ok(()));
    }

    #[test]
    fn vertices_lie_on_sphere() {
        let raw = RawPolyhedron::icosahedron(5.0);
        for vertex in &raw.vertices {
            assert_relative_eq!(vertex.coords.norm(), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn face_edges_are_all_the_same_length() {
        let raw = RawPolyhedron::icosahedron(1.0);
        let expected = na::distance(&raw.vertices[0], &raw.vertices[1]);
        for face in &raw.faces {
            for i in 0..3 {
                let a = raw.vertices[face[i]];
                let b = raw.vertices[face[(i + 1) % 3]];
                assert_relative_eq!(na::distance(&a, &b), expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn rejects_missing_face() {
        let mut raw = RawPolyhedron::icosahedron(1.0);
        raw.faces.pop();
        assert_eq!(
            raw.validate(),
            Err(TopologyError::SeedFaceCount {
                expected: 20,
                actual: 19,
            })
        );
    }

    #[test]
    fn rejects_bad_valence() {
        let mut raw = RawPolyhedron::icosahedron(1.0);
        // Vertex 0 now touches six faces, and vertex 9 only four.
        raw.faces[13] = [10, 0, 5];
        assert!(matches!(
            raw.validate(),
            Err(TopologyError::SeedValence { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut raw = RawPolyhedron::icosahedron(1.0);
        raw.faces[3] = [2, 11, 12];
        assert_eq!(
            raw.validate(),
            Err(TopologyError::SeedIndexOutOfRange { face: 3, vertex: 12 })
        );
    }
}
