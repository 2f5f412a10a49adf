use crate::{Face, FaceKind, Pt3, RawPolyhedron, Real, TopologyError};

// Ordered (from, toward) corner pairs, walking once around the
// triangle's perimeter so the six cut points form a simple hexagon:
// near v1, near v2, near v2, near v3, near v3, near v1.
const CUTS: [(usize, usize); 6] = [(0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (0, 2)];

/// Truncate every corner of every seed face, turning each triangle
/// into a hexagon.
///
/// Returns the cut points without any deduplication (each shared
/// point appears once per face that produced it), and one hexagon per
/// seed face indexing into those points.
pub fn generate_hexagons(
    raw: &RawPolyhedron,
    truncation_ratio: Real,
) -> Result<(Vec<Pt3>, Vec<Face>), TopologyError> {
    let mut points = Vec::with_capacity(raw.faces.len() * CUTS.len());
    let mut hexagons = Vec::with_capacity(raw.faces.len());
    for triangle in &raw.faces {
        let mut boundary = [0usize; 6];
        for (slot, &(from, toward)) in boundary.iter_mut().zip(CUTS.iter()) {
            let a = raw.vertices[triangle[from]];
            let b = raw.vertices[triangle[toward]];
            *slot = points.len();
            points.push(cut_point(a, b, truncation_ratio));
        }
        hexagons.push(Face::new(FaceKind::Hexagon, &boundary)?);
    }
    Ok((points, hexagons))
}

/// Point `ratio` of the way from `a` toward `b`.
fn cut_point(a: Pt3, b: Pt3, ratio: Real) -> Pt3 {
    let along = b - a;
    let length = along.norm();
    a + along.normalize() * (length * ratio)
}
