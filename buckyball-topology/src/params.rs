use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{Real, TopologyError};

/// Everything needed to deterministically derive a truncated
/// icosahedron from the standard icosahedron.
///
/// The tolerances are the most likely thing to need tuning
/// if you change the radius by orders of magnitude, so they
/// live here rather than being baked into the builder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyParams {
    /// Circumradius of the seed icosahedron.
    pub radius: Real,
    /// How far along each seed edge to cut off each corner.
    pub truncation_ratio: Real,
    /// Points closer than this are the same vertex.
    pub merge_tolerance: Real,
    /// Allowed deviation from `bond_length` when looking for edges.
    pub edge_tolerance: Real,
}

impl Default for TopologyParams {
    fn default() -> TopologyParams {
        TopologyParams {
            radius: 5.0,
            truncation_ratio: 1.0 / 3.0,
            merge_tolerance: 1e-3,
            edge_tolerance: 1e-2,
        }
    }
}

impl TopologyParams {
    pub fn with_radius(radius: Real) -> TopologyParams {
        TopologyParams {
            radius,
            ..TopologyParams::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), TopologyError> {
        if !(self.radius > 0.0) {
            return Err(TopologyError::InvalidParams(format!(
                "radius must be positive; got {}",
                self.radius
            )));
        }
        // A ratio of one half or more would make neighbouring cuts meet
        // or cross in the middle of a seed edge.
        if !(self.truncation_ratio > 0.0 && self.truncation_ratio < 0.5) {
            return Err(TopologyError::InvalidParams(format!(
                "truncation ratio must be in (0, 0.5); got {}",
                self.truncation_ratio
            )));
        }
        if !(self.merge_tolerance > 0.0) || !(self.edge_tolerance > 0.0) {
            return Err(TopologyError::InvalidParams(format!(
                "tolerances must be positive; got merge {} and edge {}",
                self.merge_tolerance, self.edge_tolerance
            )));
        }
        // Merging must never swallow a real edge.
        if self.merge_tolerance >= self.bond_length() {
            return Err(TopologyError::InvalidParams(format!(
                "merge tolerance {} is not smaller than the bond length {}",
                self.merge_tolerance,
                self.bond_length()
            )));
        }
        Ok(())
    }

    /// Edge length of a regular icosahedron with circumradius `radius`.
    pub fn icosahedron_edge_length(&self) -> Real {
        self.radius / (2.0 * PI / 5.0).sin()
    }

    /// Length of every pentagon edge in the truncated solid.
    ///
    /// At the default ratio of one third this is also the length
    /// of every hexagon edge.
    pub fn bond_length(&self) -> Real {
        self.icosahedron_edge_length() * self.truncation_ratio
    }
}
