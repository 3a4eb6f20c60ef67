// Host-side tests for the scene geometry generators.

use glam::Vec3;
use knot_core::mesh::*;
use knot_core::*;

fn assert_well_formed(mesh: &Mesh) {
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert_eq!(mesh.positions.len(), mesh.colors.len());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
    for normal in &mesh.normals {
        let len = Vec3::from_array(*normal).length();
        assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
    }
}

#[test]
fn icosahedron_triangle_counts_follow_detail() {
    for (detail, tris) in [(0, 20), (1, 80), (4, 500), (8, 1620)] {
        let mesh = icosahedron(1.0, detail, ColorRamp::Solid(Rgb::WHITE));
        assert_eq!(mesh.triangle_count(), tris, "detail {detail}");
        assert_well_formed(&mesh);
    }
}

#[test]
fn icosahedron_vertices_lie_on_sphere_with_outward_normals() {
    let mesh = icosahedron(SPHERE_RADIUS, 2, ColorRamp::HueSweep);
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        let p = Vec3::from_array(*p);
        assert!((p.length() - SPHERE_RADIUS).abs() < 1e-2);
        assert!(Vec3::from_array(*n).dot(p) > 0.0);
    }
}

#[test]
fn color_ramps_vary_with_height() {
    let mesh = icosahedron(1.0, 1, ColorRamp::RedSaturation);
    let top = ColorRamp::RedSaturation.at(1.0);
    let bottom = ColorRamp::RedSaturation.at(0.0);
    assert_eq!(bottom, Rgb::new(0.5, 0.5, 0.5));
    assert!((top.r - 1.0).abs() < 1e-5 && top.g.abs() < 1e-5);
    assert!(mesh.colors.iter().any(|c| c != &mesh.colors[0]));

    let m = ColorRamp::Magenta.at(1.0);
    assert_eq!(m, Rgb::new(1.0, 0.0, 1.0));
}

#[test]
fn torus_knot_counts_and_extent() {
    let mesh = torus_knot(
        KNOT_RADIUS,
        KNOT_TUBE,
        KNOT_TUBULAR_SEGMENTS,
        KNOT_RADIAL_SEGMENTS,
        KNOT_P,
        KNOT_Q,
    );
    let rings = KNOT_TUBULAR_SEGMENTS as usize + 1;
    let ring_len = KNOT_RADIAL_SEGMENTS as usize + 1;
    assert_eq!(mesh.vertex_count(), rings * ring_len);
    assert_eq!(
        mesh.triangle_count(),
        (KNOT_TUBULAR_SEGMENTS * KNOT_RADIAL_SEGMENTS * 2) as usize
    );
    assert_well_formed(&mesh);

    let max_extent = KNOT_RADIUS * 1.5 + KNOT_TUBE + 1e-2;
    assert!(mesh
        .positions
        .iter()
        .all(|p| Vec3::from_array(*p).length() <= max_extent));
}

#[test]
fn gradient_quad_is_grey_in_center_and_white_at_corners() {
    let mesh = gradient_quad(SHADOW_SIZE, 4);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.triangle_count(), 32);

    let center = mesh
        .positions
        .iter()
        .position(|p| p[0] == 0.0 && p[2] == 0.0)
        .expect("center vertex");
    assert!((mesh.colors[center][0] - 210.0 / 255.0).abs() < 1e-5);
    assert!(mesh.colors[0].iter().all(|c| (c - 1.0).abs() < 1e-5));
    assert!(mesh.positions.iter().all(|p| p[1] == 0.0));
    assert!(mesh.normals.iter().all(|n| *n == [0.0, 1.0, 0.0]));
}

#[test]
fn edge_indices_list_each_shared_edge_once() {
    let quad = gradient_quad(1.0, 1);
    let lines = quad.edge_indices();
    assert_eq!(lines.len(), 10);
    let n = quad.vertex_count() as u32;
    assert!(lines.iter().all(|&i| i < n));
    assert!(lines.chunks_exact(2).all(|e| e[0] != e[1]));
}

#[test]
fn flat_shaded_sphere_wireframe_outlines_every_triangle() {
    let mesh = icosahedron(1.0, 0, ColorRamp::Solid(Rgb::WHITE));
    assert_eq!(mesh.edge_indices().len(), mesh.triangle_count() * 6);
}
