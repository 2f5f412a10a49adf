use super::*;

use std::collections::HashSet;

use itertools::Itertools;

fn discard_log() -> Logger {
    Logger::root(slog::Discard, o!())
}

fn radius_five() -> Topology {
    Topology::from_icosahedron(TopologyParams::with_radius(5.0), &discard_log())
        .expect("Standard icosahedron should always truncate cleanly")
}

#[test]
fn counts_hold_for_any_radius() {
    for &radius in &[0.5, 1.0, 5.0, 100.0] {
        let topology =
            Topology::from_icosahedron(TopologyParams::with_radius(radius), &discard_log())
                .unwrap();
        assert_eq!(topology.vertices().len(), 60);
        assert_eq!(topology.hexagons().count(), 20);
        assert_eq!(topology.pentagons().count(), 12);
        assert_eq!(topology.faces().len(), 32);
        assert_eq!(topology.edges().len(), 90);
    }
}

#[test]
fn euler_characteristic_is_two() {
    let topology = radius_five();
    let v = topology.vertices().len() as i64;
    let e = topology.edges().len() as i64;
    let f = topology.faces().len() as i64;
    assert_eq!(v - e + f, 2);
}

#[test]
fn hexagons_come_before_pentagons() {
    let topology = radius_five();
    let kinds: Vec<FaceKind> = topology.faces().iter().map(|face| face.kind()).collect();
    assert!(kinds[..HEXAGON_COUNT].iter().all(|&kind| kind == FaceKind::Hexagon));
    assert!(kinds[HEXAGON_COUNT..].iter().all(|&kind| kind == FaceKind::Pentagon));
}

#[test]
fn every_face_boundary_follows_edges() {
    let topology = radius_five();
    let edges: HashSet<EdgeKey> = topology.edges().iter().cloned().collect();
    for face in topology.faces() {
        assert_eq!(face.boundary().len(), face.kind().arity());
        for key in face.boundary_edges() {
            assert!(edges.contains(&key), "{:?} is not an edge", key);
        }
    }
}

#[test]
fn every_edge_borders_two_faces() {
    let topology = radius_five();
    for edge_index in 0..topology.edges().len() {
        let faces = topology.faces_of_edge(edge_index);
        assert_eq!(faces.len(), 2);
        assert_ne!(faces[0], faces[1]);
    }
}

#[test]
fn every_edge_is_a_bond_length_long() {
    let topology = radius_five();
    let bond_length = topology.params().bond_length();
    for &key in topology.edges() {
        let length = na::distance(&topology.vertices()[key.a()], &topology.vertices()[key.b()]);
        assert_relative_eq!(length, bond_length, epsilon = 1e-6);
    }
}

#[test]
fn no_two_vertices_within_merge_tolerance() {
    let topology = radius_five();
    let tolerance = topology.params().merge_tolerance;
    for (a, b) in topology.vertices().iter().tuple_combinations() {
        assert!(na::distance(a, b) >= tolerance);
    }
}

#[test]
fn pentagons_are_regular() {
    let topology = radius_five();
    let bond_length = topology.params().bond_length();
    for pentagon in topology.pentagons() {
        let boundary = pentagon.boundary();
        for i in 0..5 {
            let a = topology.vertices()[boundary[i]];
            let b = topology.vertices()[boundary[(i + 1) % 5]];
            assert!((na::distance(&a, &b) - bond_length).abs() < 0.02);
        }
    }
}

#[test]
fn faces_are_wound_outward() {
    let topology = radius_five();
    for face_index in 0..topology.faces().len() {
        let normal = topology.face_normal(face_index);
        let center = topology.face_center(face_index);
        assert!(normal.dot(&center.coords) > 0.0);
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn fan_triangles_stay_on_their_face() {
    let topology = radius_five();
    for face in topology.faces() {
        let triangles = face.triangles();
        assert_eq!(triangles.len(), face.boundary().len() - 2);
        for triangle in triangles {
            assert!(triangle.iter().all(|vertex| face.contains(*vertex)));
        }
    }
}

#[test]
fn every_vertex_has_three_neighbours() {
    let topology = radius_five();
    for vertex in 0..topology.vertices().len() {
        assert_eq!(topology.faces_around_vertex(vertex).len(), 3);
        assert_eq!(topology.edges_around_vertex(vertex).len(), 3);
        let neighbors: HashSet<usize> = topology.vertex_neighbors(vertex).collect();
        assert_eq!(neighbors.len(), 3);
        assert!(!neighbors.contains(&vertex));
        // One pentagon and two hexagons at every corner.
        let pentagons = topology
            .faces_around_vertex(vertex)
            .iter()
            .filter(|&&face| topology.faces()[face].kind() == FaceKind::Pentagon)
            .count();
        assert_eq!(pentagons, 1);
    }
}

#[test]
fn edge_index_round_trips_keys() {
    let topology = radius_five();
    for (edge_index, &key) in topology.edges().iter().enumerate() {
        assert_eq!(topology.edge_index(key), Some(edge_index));
        assert_eq!(
            topology.edge_index(EdgeKey::new(key.b(), key.a())),
            Some(edge_index)
        );
    }
    // Opposite corners of a hexagon are never joined.
    let hex = &topology.faces()[0];
    let across = EdgeKey::new(hex.boundary()[0], hex.boundary()[3]);
    assert_eq!(topology.edge_index(across), None);
}

#[test]
fn edge_midpoint_is_between_its_ends() {
    let topology = radius_five();
    let key = topology.edges()[0];
    let midpoint = topology.edge_midpoint(0);
    let half = topology.params().bond_length() / 2.0;
    assert_relative_eq!(
        na::distance(&midpoint, &topology.vertices()[key.a()]),
        half,
        epsilon = 1e-9
    );
}

#[test]
fn tiny_perturbation_of_seed_is_absorbed() {
    let params = TopologyParams::with_radius(5.0);
    let mut raw = RawPolyhedron::icosahedron(params.radius);
    // Less than half the merge tolerance.
    raw.vertices[0].x += 0.0004;
    let topology = Topology::build(&raw, params, &discard_log()).unwrap();
    assert_eq!(topology.vertices().len(), 60);
    assert_eq!(topology.edges().len(), 90);
}

#[test]
fn large_perturbation_of_seed_is_rejected() {
    let params = TopologyParams::with_radius(5.0);
    let mut raw = RawPolyhedron::icosahedron(params.radius);
    raw.vertices[0].z += 0.5;
    // The pentagon around the moved corner is no longer regular, so
    // some of its sides aren't at bond length any more.
    assert_eq!(
        Topology::build(&raw, params, &discard_log()).unwrap_err(),
        TopologyError::EdgeCount {
            expected: 90,
            actual: 78,
        }
    );
}

#[test]
fn validate_catches_missing_vertex() {
    let mut topology = radius_five();
    topology.vertices.pop();
    assert_eq!(
        topology.validate(),
        Err(TopologyError::VertexCount {
            expected: 60,
            actual: 59,
        })
    );
}

#[test]
fn validate_catches_missing_pentagon() {
    let mut topology = radius_five();
    // Pentagons come last.
    let dropped = topology.faces.pop().unwrap();
    assert_eq!(dropped.kind(), FaceKind::Pentagon);
    assert_eq!(
        topology.validate(),
        Err(TopologyError::PentagonCount {
            expected: 12,
            actual: 11,
        })
    );
}

#[test]
fn validate_catches_edge_with_one_face() {
    let mut topology = radius_five();
    topology.edge_faces[0].pop();
    assert_eq!(
        topology.validate(),
        Err(TopologyError::EdgeFaceCount {
            edge: topology.edges[0],
            faces: 1,
        })
    );
}

#[test]
fn face_off_the_edge_set_does_not_close() {
    let topology = radius_five();
    let missing = topology.edges[0];
    let first_face = topology.faces_of_edge(0)[0];
    let edges: Vec<EdgeKey> = topology.edges[1..].to_vec();
    let result = Topology::assemble(
        topology.params,
        topology.vertices.clone(),
        topology.faces.clone(),
        edges,
    );
    assert_eq!(
        result.unwrap_err(),
        TopologyError::UnclosedBoundary {
            face: first_face,
            a: missing.a(),
            b: missing.b(),
        }
    );
}

#[test]
fn non_uniform_truncation_fails_edge_count() {
    // At a quarter, hexagon edges along the old seed edges are twice
    // as long as the pentagon edges, so the distance filter misses them.
    let mut params = TopologyParams::with_radius(5.0);
    params.truncation_ratio = 0.25;
    assert_eq!(
        Topology::from_icosahedron(params, &discard_log()).unwrap_err(),
        TopologyError::EdgeCount {
            expected: 90,
            actual: 60,
        }
    );
}

#[test]
fn invalid_params_are_rejected_before_building() {
    let params = TopologyParams::with_radius(-1.0);
    assert!(matches!(
        Topology::from_icosahedron(params, &discard_log()),
        Err(TopologyError::InvalidParams(_))
    ));
}

#[test]
fn malformed_seed_is_rejected() {
    let mut raw = RawPolyhedron::icosahedron(5.0);
    raw.vertices.pop();
    assert_eq!(
        Topology::build(&raw, TopologyParams::default(), &discard_log()).unwrap_err(),
        TopologyError::SeedVertexCount {
            expected: 12,
            actual: 11,
        }
    );
}

#[test]
fn topology_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Topology>();
}
