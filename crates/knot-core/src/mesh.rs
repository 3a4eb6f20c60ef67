//! CPU-side geometry for the demo scene.
//!
//! Every generator returns an indexed triangle list with per-vertex normals and
//! colors. The web renderer uploads these buffers as-is.

use crate::color::Rgb;
use glam::Vec3;
use std::collections::HashSet;
use std::f32::consts::TAU;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Line-list indices covering every triangle edge once, in first-seen order.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut seen = HashSet::with_capacity(self.indices.len());
        let mut lines = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                if seen.insert((a.min(b), a.max(b))) {
                    lines.extend_from_slice(&[a, b]);
                }
            }
        }
        lines
    }

    fn push(&mut self, p: Vec3, n: Vec3, c: Rgb) -> u32 {
        let i = self.positions.len() as u32;
        self.positions.push(p.to_array());
        self.normals.push(n.to_array());
        self.colors.push(c.to_array());
        i
    }
}

/// Per-vertex color as a function of normalized height (0 at the bottom, 1 at the top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRamp {
    HueSweep,
    RedSaturation,
    Magenta,
    Solid(Rgb),
}

impl ColorRamp {
    pub fn at(&self, height01: f32) -> Rgb {
        let h = height01.clamp(0.0, 1.0);
        match *self {
            ColorRamp::HueSweep => Rgb::from_hsl(h, 1.0, 0.5),
            ColorRamp::RedSaturation => Rgb::from_hsl(0.0, h, 0.5),
            ColorRamp::Magenta => Rgb::new(1.0, (0.8 - h).max(0.0), 1.0),
            ColorRamp::Solid(c) => c,
        }
    }
}

const ICO_T: f32 = 1.618_034;

const ICO_VERTICES: [[f32; 3]; 12] = [
    [-1.0, ICO_T, 0.0],
    [1.0, ICO_T, 0.0],
    [-1.0, -ICO_T, 0.0],
    [1.0, -ICO_T, 0.0],
    [0.0, -1.0, ICO_T],
    [0.0, 1.0, ICO_T],
    [0.0, -1.0, -ICO_T],
    [0.0, 1.0, -ICO_T],
    [ICO_T, 0.0, -1.0],
    [ICO_T, 0.0, 1.0],
    [-ICO_T, 0.0, -1.0],
    [-ICO_T, 0.0, 1.0],
];

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Flat-shaded icosphere. Each base face is split into `(detail + 1)^2` triangles.
pub fn icosahedron(radius: f32, detail: u32, ramp: ColorRamp) -> Mesh {
    let mut mesh = Mesh::default();
    for face in ICO_FACES {
        let [a, b, c] = face.map(|i| Vec3::from_array(ICO_VERTICES[i]));
        for tri in subdivide_face(a, b, c, detail) {
            let [p0, p1, p2] = tri.map(|v| v.normalize() * radius);
            let mut n = (p1 - p0).cross(p2 - p0).normalize_or_zero();
            if n.dot(p0 + p1 + p2) < 0.0 {
                n = -n;
            }
            for p in [p0, p1, p2] {
                let color = ramp.at((p.y / radius + 1.0) * 0.5);
                let i = mesh.push(p, n, color);
                mesh.indices.push(i);
            }
        }
    }
    mesh
}

fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, detail: u32) -> Vec<[Vec3; 3]> {
    let cols = detail as usize + 1;
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let f = i as f32 / cols as f32;
        let aj = a.lerp(c, f);
        let bj = b.lerp(c, f);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| {
                if rows == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                }
            })
            .collect();
        grid.push(row);
    }

    let mut tris = Vec::with_capacity(cols * cols);
    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                tris.push([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                tris.push([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
    tris
}

fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// (p, q) torus knot swept with a circular tube, smooth normals, white vertices.
pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let (pf, qf) = (p.max(1) as f32, q as f32);
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * pf * TAU;
        let p1 = knot_curve(u, pf, qf, radius);
        let p2 = knot_curve(u + 0.01, pf, qf, radius);
        let t = p2 - p1;
        let n = p2 + p1;
        let binormal = t.cross(n);
        let normal = binormal.cross(t).normalize_or_zero();
        let binormal = binormal.normalize_or_zero();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + normal * cx + binormal * cy;
            mesh.push(pos, (pos - p1).normalize_or_zero(), Rgb::WHITE);
        }
    }

    let stride = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

const SHADOW_INNER_STOP: f32 = 0.1;
const SHADOW_INNER_GREY: f32 = 210.0 / 255.0;

/// Horizontal `size` x `size` grid facing +Y, shaded with a radial grey-to-white gradient.
pub fn gradient_quad(size: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let segs = segments.max(1);
    let half = size * 0.5;
    let step = size / segs as f32;

    for j in 0..=segs {
        for i in 0..=segs {
            let x = -half + i as f32 * step;
            let z = -half + j as f32 * step;
            let r = (x * x + z * z).sqrt() / half;
            let t = ((r - SHADOW_INNER_STOP) / (1.0 - SHADOW_INNER_STOP)).clamp(0.0, 1.0);
            let grey = SHADOW_INNER_GREY + (1.0 - SHADOW_INNER_GREY) * t;
            mesh.push(Vec3::new(x, 0.0, z), Vec3::Y, Rgb::new(grey, grey, grey));
        }
    }

    let stride = segs + 1;
    for j in 0..segs {
        for i in 0..segs {
            let a = j * stride + i;
            let b = a + 1;
            let d = a + stride;
            let c = d + 1;
            mesh.indices.extend_from_slice(&[a, d, b, b, d, c]);
        }
    }
    mesh
}
