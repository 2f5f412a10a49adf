use itertools::Itertools;
use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::{Pt3, Real};

/// An unordered pair of vertex indices, always stored smallest first
/// so that the same edge seen from either end compares equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    a: usize,
    b: usize,
}

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> EdgeKey {
        if a <= b {
            EdgeKey { a, b }
        } else {
            EdgeKey { a: b, b: a }
        }
    }

    /// Smaller vertex index.
    pub fn a(self) -> usize {
        self.a
    }

    /// Larger vertex index.
    pub fn b(self) -> usize {
        self.b
    }

    pub fn touches(self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The end that isn't `vertex`, if `vertex` is an end at all.
    pub fn other(self, vertex: usize) -> Option<usize> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Every pair of vertices whose distance is within `tolerance` of `length`.
///
/// This is purely geometric: it doesn't know or care which faces
/// the pairs belong to. Pairs come out in lexicographic order of
/// their keys, and never more than once.
pub fn derive_edges(vertices: &[Pt3], length: Real, tolerance: Real) -> Vec<EdgeKey> {
    (0..vertices.len())
        .tuple_combinations::<(usize, usize)>()
        .filter(|&(i, j)| (na::distance(&vertices[i], &vertices[j]) - length).abs() < tolerance)
        .map(|(i, j)| EdgeKey::new(i, j))
        .collect()
}
