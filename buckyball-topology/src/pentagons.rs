use slog::{debug, trace, Logger};

use crate::{derive_edges, EdgeKey, Face, FaceKind, Pt3, Real, TopologyError};

/// Find the pentagons left over between the hexagons.
///
/// Every bond in the finished solid is either shared by two hexagons,
/// or lies between a hexagon and a pentagon. So once the hexagons are
/// known, the pentagons are exactly the 5-cycles in the graph of bonds
/// that only one hexagon claims.
///
/// `hexagons` must already refer to merged vertex indices.
pub fn discover_pentagons(
    vertices: &[Pt3],
    hexagons: &[Face],
    bond_length: Real,
    tolerance: Real,
    log: &Logger,
) -> Result<Vec<Face>, TopologyError> {
    let bonds = derive_edges(vertices, bond_length, tolerance);
    let boundary = pentagon_boundary_bonds(&bonds, hexagons)?;
    debug!(log, "Classified bonds";
        "candidates" => bonds.len(),
        "pentagon_boundary" => boundary.len());

    // Bonds touching each vertex, in the order they were found.
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
    for (bond_index, bond) in boundary.iter().enumerate() {
        incident[bond.a()].push(bond_index);
        incident[bond.b()].push(bond_index);
    }

    let arity = FaceKind::Pentagon.arity();
    let mut processed = vec![false; boundary.len()];
    let mut pentagons = Vec::new();
    for start_bond in 0..boundary.len() {
        if processed[start_bond] {
            continue;
        }
        match close_cycle(start_bond, &boundary, &incident, &processed, arity) {
            Some((walk, used)) => {
                for bond_index in used {
                    processed[bond_index] = true;
                }
                pentagons.push(Face::new(FaceKind::Pentagon, &walk)?);
            }
            None => {
                // Leave it unprocessed; a walk starting from one of
                // its neighbours may still pick it up.
                trace!(log, "Abandoned walk"; "start" => ?boundary[start_bond]);
            }
        }
    }
    debug!(log, "Discovered pentagons"; "count" => pentagons.len());
    Ok(pentagons)
}

/// Keep the bonds that exactly one hexagon contains.
///
/// A bond in no hexagon at all can't be on the boundary of anything
/// we know how to build, and one in more than two means the hexagons
/// overlap; both mean the input wasn't an icosahedron.
fn pentagon_boundary_bonds(
    bonds: &[EdgeKey],
    hexagons: &[Face],
) -> Result<Vec<EdgeKey>, TopologyError> {
    let mut retained = Vec::new();
    for &bond in bonds {
        let sharing = hexagons.iter().filter(|hex| hex.contains_edge(bond)).count();
        match sharing {
            0 => return Err(TopologyError::OrphanBond(bond)),
            1 => retained.push(bond),
            2 => {}
            count => {
                return Err(TopologyError::NonManifoldBond {
                    edge: bond,
                    hexagons: count,
                })
            }
        }
    }
    Ok(retained)
}

/// Walk from `start_bond` along unprocessed bonds, trying to get back
/// to where we started after exactly `length` bonds.
///
/// Returns the vertices in walk order and the bonds used, or `None`
/// if the walk dead-ends, closes early, or runs too long.
fn close_cycle(
    start_bond: usize,
    bonds: &[EdgeKey],
    incident: &[Vec<usize>],
    processed: &[bool],
    length: usize,
) -> Option<(Vec<usize>, Vec<usize>)> {
    let start = bonds[start_bond].a();
    let mut frontier = bonds[start_bond].b();
    let mut walk = vec![start, frontier];
    let mut used = vec![start_bond];
    loop {
        // First match wins; on a valid solid there is only ever one.
        let next_bond = incident[frontier]
            .iter()
            .cloned()
            .find(|&bond_index| !processed[bond_index] && !used.contains(&bond_index))?;
        let next = bonds[next_bond].other(frontier)?;
        used.push(next_bond);
        if next == start {
            return if used.len() == length {
                Some((walk, used))
            } else {
                None
            };
        }
        if used.len() == length {
            return None;
        }
        walk.push(next);
        frontier = next;
    }
}
