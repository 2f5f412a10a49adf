use nalgebra as na;

// Common types for all of the topology crate.
//
// Geometry here is non-realtime and built once, so everything
// is `f64`; the render hand-off narrows to `f32` on its own.
pub type Real = f64;

pub type Vec3 = na::Vector3<Real>;
pub type Pt3 = na::Point3<Real>;
