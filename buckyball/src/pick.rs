//! Turning a ray from the camera into whatever board element it points at.
//!
//! Faces are hit-tested directly. Edges and vertices are hit-tested
//! against proxies lifted slightly off the surface, so they're still
//! reachable when they'd otherwise be flush with the faces around them:
//! a capsule around each edge, and a sphere around each vertex.

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::element::ElementId;
use crate::topology::{Pt3, Real, Topology, Vec3};

const EPSILON: Real = 1e-9;
/// Slack on barycentric coordinates, so points on a triangle's edge
/// (like the diagonals shared by a face's fan triangles) still count.
const BARYCENTRIC_SLACK: Real = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickParams {
    pub vertex_radius: Real,
    pub edge_radius: Real,
    /// How far edge and vertex proxies are lifted off the surface.
    pub elevation: Real,
    /// How much nearer a lower-priority hit must be to win.
    pub margin: Real,
}

impl Default for PickParams {
    fn default() -> PickParams {
        PickParams {
            vertex_radius: 0.25,
            edge_radius: 0.05,
            elevation: 0.1,
            margin: 0.1,
        }
    }
}

impl PickParams {
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("vertex_radius", self.vertex_radius),
            ("edge_radius", self.edge_radius),
            ("elevation", self.elevation),
            ("margin", self.margin),
        ];
        for &(name, value) in &fields {
            if !(value >= 0.0) {
                return Err(format!("{} must not be negative; got {}", name, value));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Pt3,
    direction: Vec3,
}

impl Ray {
    /// `direction` needn't be normalized, but mustn't be zero.
    pub fn new(origin: Pt3, direction: Vec3) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray from `origin` through `target`.
    pub fn towards(origin: Pt3, target: Pt3) -> Ray {
        Ray::new(origin, target - origin)
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, distance: Real) -> Pt3 {
        self.origin + self.direction * distance
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub element: ElementId,
    /// Distance along the ray to where it enters the element (or its proxy).
    pub distance: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickResult {
    Miss,
    Hit(Hit),
}

impl PickResult {
    pub fn element(&self) -> Option<ElementId> {
        match self {
            PickResult::Miss => None,
            PickResult::Hit(hit) => Some(hit.element),
        }
    }
}

/// Pick the board element `ray` points at.
///
/// Priority is face, then edge, then vertex: the nearest face hit is
/// preferred, and a lower-priority hit only takes over when it is
/// nearer than the current choice by more than `params.margin`.
pub fn resolve_pick(ray: &Ray, board: &Board, params: &PickParams) -> PickResult {
    let topology = board.topology();
    let candidates = [
        nearest_face_hit(ray, topology),
        nearest_edge_hit(ray, topology, params),
        nearest_vertex_hit(ray, topology, params),
    ];
    let mut best: Option<Hit> = None;
    for candidate in candidates.iter().flatten() {
        best = match best {
            Some(current) if candidate.distance + params.margin >= current.distance => {
                Some(current)
            }
            _ => Some(*candidate),
        };
    }
    match best {
        Some(hit) => PickResult::Hit(hit),
        None => PickResult::Miss,
    }
}

fn nearest(hits: impl Iterator<Item = Hit>) -> Option<Hit> {
    hits.min_by(|a, b| a.distance.total_cmp(&b.distance))
}

fn nearest_face_hit(ray: &Ray, topology: &Topology) -> Option<Hit> {
    let vertices = topology.vertices();
    nearest(
        topology
            .faces()
            .iter()
            .enumerate()
            .filter_map(|(face_index, face)| {
                face.triangles()
                    .iter()
                    .filter_map(|&[a, b, c]| {
                        ray_triangle(ray, vertices[a], vertices[b], vertices[c])
                    })
                    .min_by(|a, b| a.total_cmp(b))
                    .map(|distance| Hit {
                        element: ElementId::Face(face_index),
                        distance,
                    })
            }),
    )
}

fn nearest_edge_hit(ray: &Ray, topology: &Topology, params: &PickParams) -> Option<Hit> {
    let vertices = topology.vertices();
    nearest(
        topology
            .edges()
            .iter()
            .enumerate()
            .filter_map(|(edge_index, key)| {
                let a = lift(vertices[key.a()], params.elevation);
                let b = lift(vertices[key.b()], params.elevation);
                ray_capsule(ray, a, b, params.edge_radius).map(|distance| Hit {
                    element: ElementId::Edge(edge_index),
                    distance,
                })
            }),
    )
}

fn nearest_vertex_hit(ray: &Ray, topology: &Topology, params: &PickParams) -> Option<Hit> {
    nearest(
        topology
            .vertices()
            .iter()
            .enumerate()
            .filter_map(|(vertex, &position)| {
                let center = lift(position, params.elevation);
                ray_sphere(ray, center, params.vertex_radius).map(|distance| Hit {
                    element: ElementId::Vertex(vertex),
                    distance,
                })
            }),
    )
}

// Push a point on the board further out from the board's center.
fn lift(point: Pt3, elevation: Real) -> Pt3 {
    let radial = point.coords;
    let length = radial.norm();
    if length < EPSILON {
        return point;
    }
    point + radial * (elevation / length)
}

// Möller–Trumbore; hits from either side count.
fn ray_triangle(ray: &Ray, a: Pt3, b: Pt3, c: Pt3) -> Option<Real> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(&edge2);
    let det = edge1.dot(&p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(&p) * inv_det;
    if u < -BARYCENTRIC_SLACK || u > 1.0 + BARYCENTRIC_SLACK {
        return None;
    }
    let q = s.cross(&edge1);
    let v = ray.direction.dot(&q) * inv_det;
    if v < -BARYCENTRIC_SLACK || u + v > 1.0 + BARYCENTRIC_SLACK {
        return None;
    }
    let t = edge2.dot(&q) * inv_det;
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

fn ray_sphere(ray: &Ray, center: Pt3, radius: Real) -> Option<Real> {
    let offset = ray.origin - center;
    let b = offset.dot(&ray.direction);
    let c = offset.norm_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    // Starting inside the sphere.
    let far = -b + root;
    if far >= 0.0 {
        Some(0.0)
    } else {
        None
    }
}

// Capsule of `radius` around segment `a`-`b`. Where the ray enters is
// estimated from its closest approach to the segment.
fn ray_capsule(ray: &Ray, a: Pt3, b: Pt3, radius: Real) -> Option<Real> {
    let axis = b - a;
    let axis_length_squared = axis.norm_squared();
    if axis_length_squared < EPSILON {
        return ray_sphere(ray, a, radius);
    }
    let w = ray.origin - a;
    let along = ray.direction.dot(&axis);
    let d = ray.direction.dot(&w);
    let e = axis.dot(&w);
    let denom = axis_length_squared - along * along;

    // Closest approach of the two infinite lines, then clamp onto
    // the segment and re-project onto the ray.
    let mut s = if denom > EPSILON {
        ((along * e - axis_length_squared * d) / denom).max(0.0)
    } else {
        0.0
    };
    let mut t = ((e + s * along) / axis_length_squared).clamp(0.0, 1.0);
    s = (a + axis * t - ray.origin).dot(&ray.direction);
    if s < 0.0 {
        s = 0.0;
        t = (e / axis_length_squared).clamp(0.0, 1.0);
    }

    let on_ray = ray.at(s);
    let on_axis = a + axis * t;
    let miss_distance = na::distance(&on_ray, &on_axis);
    if miss_distance > radius {
        return None;
    }
    let half_chord = (radius * radius - miss_distance * miss_distance).sqrt();
    Some((s - half_chord).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::logging::discard_logger;

    fn example_board() -> Board {
        Board::from_config(&BoardConfig::default(), &discard_logger()).unwrap()
    }

    // Looking straight down at `target` from well outside the board.
    fn ray_down_onto(target: Pt3) -> Ray {
        let origin = Pt3::from(target.coords.normalize() * 20.0);
        Ray::towards(origin, Pt3::origin())
    }

    #[test]
    fn picks_face_under_its_center() {
        let board = example_board();
        let params = PickParams::default();
        for face_index in 0..board.topology().faces().len() {
            let ray = ray_down_onto(board.topology().face_center(face_index));
            assert_eq!(
                resolve_pick(&ray, &board, &params).element(),
                Some(ElementId::Face(face_index))
            );
        }
    }

    #[test]
    fn picks_face_along_its_fan_diagonals() {
        let board = example_board();
        let topology = board.topology();
        let params = PickParams::default();
        for (face_index, face) in topology.faces().iter().enumerate() {
            let boundary = face.boundary();
            let first = topology.vertices()[boundary[0]];
            for &other in &boundary[2..boundary.len() - 1] {
                let other = topology.vertices()[other];
                for &along in &[0.25, 0.5, 0.75] {
                    let target = Pt3::from(first.coords.lerp(&other.coords, along));
                    assert_eq!(
                        resolve_pick(&ray_down_onto(target), &board, &params).element(),
                        Some(ElementId::Face(face_index)),
                        "Missed face {} at {:?}",
                        face_index,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn picks_vertex_over_the_faces_around_it() {
        let board = example_board();
        let params = PickParams::default();
        for vertex in 0..board.topology().vertices().len() {
            let ray = ray_down_onto(board.topology().vertices()[vertex]);
            assert_eq!(
                resolve_pick(&ray, &board, &params).element(),
                Some(ElementId::Vertex(vertex))
            );
        }
    }

    #[test]
    fn picks_edge_at_its_midpoint() {
        let board = example_board();
        let params = PickParams::default();
        for edge_index in 0..board.topology().edges().len() {
            let ray = ray_down_onto(board.topology().edge_midpoint(edge_index));
            assert_eq!(
                resolve_pick(&ray, &board, &params).element(),
                Some(ElementId::Edge(edge_index))
            );
        }
    }

    #[test]
    fn face_wins_when_proxies_are_not_lifted_clear() {
        let board = example_board();
        let params = PickParams {
            elevation: 0.0,
            edge_radius: 0.02,
            ..PickParams::default()
        };
        let topology = board.topology();
        let face_index = topology.faces_of_edge(0)[0];
        // Just inside one of the edge's faces, but well within the capsule.
        let target = topology
            .edge_midpoint(0)
            .coords
            .lerp(&topology.face_center(face_index).coords, 0.01);
        let ray = ray_down_onto(Pt3::from(target));
        assert_eq!(
            resolve_pick(&ray, &board, &params).element(),
            Some(ElementId::Face(face_index))
        );
    }

    #[test]
    fn ray_pointing_away_misses() {
        let board = example_board();
        let ray = Ray::new(Pt3::new(0.0, 0.0, 20.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(
            resolve_pick(&ray, &board, &PickParams::default()),
            PickResult::Miss
        );
    }

    #[test]
    fn triangle_hit_distance() {
        let ray = Ray::new(Pt3::new(0.25, 0.25, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = ray_triangle(
            &ray,
            Pt3::new(0.0, 0.0, 1.0),
            Pt3::new(1.0, 0.0, 1.0),
            Pt3::new(0.0, 1.0, 1.0),
        );
        assert_relative_eq!(hit.unwrap(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn shared_triangle_edge_hits_both_sides() {
        let a = Pt3::new(0.0, 0.0, 1.0);
        let b = Pt3::new(1.0, 0.0, 1.0);
        let c = Pt3::new(1.0, 1.0, 1.0);
        let d = Pt3::new(0.0, 1.0, 1.0);
        // On the diagonal a-c, which neither triangle owns exclusively.
        let on_diagonal = Pt3::new(1.0 / 3.0, 1.0 / 3.0, 1.0);
        let ray = Ray::towards(Pt3::new(0.1, 0.7, 9.0), on_diagonal);
        assert!(ray_triangle(&ray, a, b, c).is_some());
        assert!(ray_triangle(&ray, a, c, d).is_some());
    }

    #[test]
    fn sphere_hit_distance() {
        let ray = Ray::new(Pt3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = ray_sphere(&ray, Pt3::origin(), 2.0);
        assert_relative_eq!(hit.unwrap(), 8.0, epsilon = 1e-9);
        let ray = Ray::new(Pt3::new(3.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_sphere(&ray, Pt3::origin(), 2.0), None);
    }

    #[test]
    fn capsule_hit_distance() {
        let ray = Ray::new(Pt3::new(0.5, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = ray_capsule(&ray, Pt3::origin(), Pt3::new(1.0, 0.0, 0.0), 0.1);
        assert_relative_eq!(hit.unwrap(), 9.9, epsilon = 1e-9);
        let ray = Ray::new(Pt3::new(0.5, 0.5, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            ray_capsule(&ray, Pt3::origin(), Pt3::new(1.0, 0.0, 0.0), 0.1),
            None
        );
    }

    #[test]
    fn lift_moves_outward() {
        let lifted = lift(Pt3::new(0.0, 3.0, 4.0), 0.5);
        assert_relative_eq!(lifted.coords.norm(), 5.5, epsilon = 1e-9);
    }

    #[test]
    fn negative_params_are_invalid() {
        let params = PickParams {
            margin: -0.1,
            ..PickParams::default()
        };
        assert!(params.validate().is_err());
        assert!(PickParams::default().validate().is_ok());
    }
}
