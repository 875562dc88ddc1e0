//! Integration tests for the bundled 120-cell table
//!
//! These tests check the shipped data against the known structure of the
//! 120-cell and run it through the stereographic projection:
//! 1. Counts of vertices, edges and faces
//! 2. Metric properties (circumradius, edge length)
//! 3. Incidence (vertex degree, faces bounded by edges)
//! 4. Projection at the default pole

use std::collections::{HashMap, HashSet};

use penrose_core::{Polytope, PolytopeValidator, StereographicProjection, Vec4};

const EPSILON: f64 = 1e-9;

fn cell120() -> Polytope {
    Polytope::cell120().expect("bundled 120-cell should load")
}

fn distance(a: Vec4, b: Vec4) -> f64 {
    (a - b).length()
}

// ==================== Table Shape Tests ====================

#[test]
fn test_cell120_counts() {
    let polytope = cell120();
    assert_eq!(polytope.name, "120-cell");
    assert_eq!(polytope.vertex_count(), 600);
    assert_eq!(polytope.edge_count(), 1200);
    assert_eq!(polytope.face_count(), 720);
}

#[test]
fn test_cell120_passes_validation() {
    let errors = PolytopeValidator::validate(&cell120());
    assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
}

// ==================== Metric Tests ====================

#[test]
fn test_vertices_lie_on_common_sphere() {
    let radius = 2.0 * 2f64.sqrt();
    for (i, v) in cell120().vertices.iter().enumerate() {
        assert!((v.length() - radius).abs() < EPSILON, "vertex {} off sphere", i);
    }
}

#[test]
fn test_all_edges_have_equal_length() {
    let polytope = cell120();
    let edge_length = 3.0 - 5f64.sqrt();
    for &[a, b] in &polytope.edges {
        let d = distance(polytope.vertices[a], polytope.vertices[b]);
        assert!((d - edge_length).abs() < EPSILON, "edge ({}, {}) has length {}", a, b, d);
    }
}

// ==================== Incidence Tests ====================

#[test]
fn test_every_vertex_has_degree_four() {
    let polytope = cell120();
    let mut degree = vec![0usize; polytope.vertex_count()];
    for &[a, b] in &polytope.edges {
        degree[a] += 1;
        degree[b] += 1;
    }
    assert!(degree.iter().all(|&d| d == 4));
}

#[test]
fn test_faces_are_bounded_by_edges() {
    let polytope = cell120();
    let edges: HashSet<(usize, usize)> = polytope
        .edges
        .iter()
        .map(|&[a, b]| (a.min(b), a.max(b)))
        .collect();

    let mut faces_per_edge: HashMap<(usize, usize), usize> = HashMap::new();
    for face in &polytope.faces {
        for i in 0..5 {
            let (a, b) = (face[i], face[(i + 1) % 5]);
            let key = (a.min(b), a.max(b));
            assert!(edges.contains(&key), "face side ({}, {}) is not an edge", a, b);
            *faces_per_edge.entry(key).or_default() += 1;
        }
    }

    // Three pentagons meet at every edge of the 120-cell
    assert_eq!(faces_per_edge.len(), polytope.edge_count());
    assert!(faces_per_edge.values().all(|&n| n == 3));
}

// ==================== Projection Tests ====================

#[test]
fn test_default_pole_projects_without_singularity() {
    let polytope = cell120();
    let projection = StereographicProjection::new(2.0).unwrap();
    let projected = polytope.project(&projection).unwrap();

    assert_eq!(projected.vertices().len(), 600);
    assert_eq!(projected.edge_segments().count(), 1200);
    assert_eq!(projected.face_polygons().count(), 720);
    assert!(projected.vertices().iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
}

#[test]
fn test_projected_bottom_is_lowest_point() {
    let polytope = cell120();
    let projection = StereographicProjection::new(2.0).unwrap();
    let projected = polytope.project(&projection).unwrap();

    let bottom = projected.bottom().unwrap();
    assert!(bottom < 0.0);
    assert!(projected.vertices().iter().all(|p| p.z >= bottom));
    assert!(projected.vertices().iter().any(|p| p.z == bottom));
}

#[test]
fn test_pole_on_vertex_hyperplane_is_rejected() {
    // The largest w coordinate of the 120-cell is the golden ratio squared
    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let polytope = cell120();
    let projection = StereographicProjection::new(phi * phi / 2.0).unwrap();
    assert!(polytope.project(&projection).is_err());
}
