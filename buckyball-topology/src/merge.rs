use nalgebra as na;

use crate::{Pt3, Real};

/// Collapse points that are within `tolerance` of each other.
///
/// Points are taken in order; each one either maps onto the first
/// already-kept point within tolerance, or is kept as a new point.
/// So the earliest of a cluster of near-duplicates is the one that
/// survives, at exactly its original position.
///
/// Returns the kept points, and for each input index, the index of
/// the kept point it maps to.
pub fn merge_close(points: &[Pt3], tolerance: Real) -> (Vec<Pt3>, Vec<usize>) {
    let mut merged: Vec<Pt3> = Vec::new();
    let mut index_map = Vec::with_capacity(points.len());
    for point in points {
        let existing = merged
            .iter()
            .position(|kept| na::distance(kept, point) < tolerance);
        let index = match existing {
            Some(index) => index,
            None => {
                merged.push(*point);
                merged.len() - 1
            }
        };
        index_map.push(index);
    }
    (merged, index_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: Real = 1e-3;

    #[test]
    fn exact_duplicates_collapse() {
        let points = [
            Pt3::new(1.0, 2.0, 3.0),
            Pt3::new(4.0, 5.0, 6.0),
            Pt3::new(1.0, 2.0, 3.0),
        ];
        let (merged, index_map) = merge_close(&points, TOLERANCE);
        assert_eq!(merged.len(), 2);
        assert_eq!(index_map, vec![0, 1, 0]);
    }

    #[test]
    fn perturbation_under_half_tolerance_is_absorbed() {
        let points = [Pt3::new(1.0, 0.0, 0.0), Pt3::new(1.0004, 0.0, 0.0)];
        let (merged, index_map) = merge_close(&points, TOLERANCE);
        assert_eq!(merged.len(), 1);
        assert_eq!(index_map, vec![0, 0]);
    }

    #[test]
    fn perturbation_over_twice_tolerance_is_a_new_vertex() {
        let points = [Pt3::new(1.0, 0.0, 0.0), Pt3::new(1.0, 0.0025, 0.0)];
        let (merged, index_map) = merge_close(&points, TOLERANCE);
        assert_eq!(merged.len(), 2);
        assert_eq!(index_map, vec![0, 1]);
    }

    #[test]
    fn first_point_survives() {
        let points = [
            Pt3::new(0.0, 0.0, 0.0),
            Pt3::new(0.0, 0.0, 0.0009),
            Pt3::new(0.0, 0.0, 0.0005),
        ];
        let (merged, index_map) = merge_close(&points, TOLERANCE);
        assert_eq!(merged, vec![Pt3::new(0.0, 0.0, 0.0)]);
        assert_eq!(index_map, vec![0, 0, 0]);
    }
}
