// =============================================================================
// Aarohan Web - Procedural Meshes
// =============================================================================
// Table of Contents:
// 1. Mesh
// 2. Cube
// 3. Torus
// 4. Lemniscate
// 5. Easing
// =============================================================================
//
// Vertices are interleaved `[x, y, z, r, g, b]`.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

/// Floats per vertex.
pub const VERTEX_STRIDE: usize = 6;

pub type Rgb = [f32; 3];

// -----------------------------------------------------------------------------
// 1. Mesh
// -----------------------------------------------------------------------------

/// CPU-side vertex data ready for upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<f32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn push_vertex(&mut self, position: Vec3, color: Rgb) {
        self.vertices.extend_from_slice(&[position.x, position.y, position.z]);
        self.vertices.extend_from_slice(&color);
    }

    fn push_quad(&mut self, corners: [Vec3; 4], color: Rgb) {
        let [a, b, c, d] = corners;
        for p in [a, b, c, a, c, d] {
            self.push_vertex(p, color);
        }
    }

    /// Append another mesh's vertices.
    pub fn extend(&mut self, other: &Mesh) {
        self.vertices.extend_from_slice(&other.vertices);
    }

    /// Positions only, for bounds checks and tests.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(VERTEX_STRIDE)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
    }
}

// -----------------------------------------------------------------------------
// 2. Cube
// -----------------------------------------------------------------------------

/// Face order used by `cube`: +X, -X, +Y, -Y, +Z, -Z.
pub const FACE_NORMALS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Axis-aligned cube centred on `center`, one colour per face.
pub fn cube(center: Vec3, size: f32, face_colors: [Rgb; 6]) -> Mesh {
    let h = size * 0.5;
    let mut mesh = Mesh::default();

    for (normal, color) in FACE_NORMALS.iter().zip(face_colors) {
        // Two axes spanning the face
        let (u, v) = face_axes(*normal);
        let c = center + *normal * h;
        mesh.push_quad(
            [
                c - u * h - v * h,
                c + u * h - v * h,
                c + u * h + v * h,
                c - u * h + v * h,
            ],
            color,
        );
    }
    mesh
}

fn face_axes(normal: Vec3) -> (Vec3, Vec3) {
    let u = if normal.x.abs() > 0.5 { Vec3::Z } else { Vec3::X };
    let v = normal.cross(u);
    (u, v)
}

// -----------------------------------------------------------------------------
// 3. Torus
// -----------------------------------------------------------------------------

/// Torus in the XY plane. `shade` maps the tube angle to a colour.
pub fn torus(
    major_radius: f32,
    minor_radius: f32,
    radial_segments: u32,
    tubular_segments: u32,
    shade: impl Fn(f32) -> Rgb,
) -> Mesh {
    let point = |i: u32, j: u32| -> Vec3 {
        let u = i as f32 / tubular_segments as f32 * TAU;
        let v = j as f32 / radial_segments as f32 * TAU;
        let ring = major_radius + minor_radius * v.cos();
        Vec3::new(ring * u.cos(), ring * u.sin(), minor_radius * v.sin())
    };

    let mut mesh = Mesh::default();
    for i in 0..tubular_segments {
        for j in 0..radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let color = shade(v);
            mesh.push_quad(
                [point(i, j), point(i + 1, j), point(i + 1, j + 1), point(i, j + 1)],
                color,
            );
        }
    }
    mesh
}

// -----------------------------------------------------------------------------
// 4. Lemniscate
// -----------------------------------------------------------------------------

/// Point on a lemniscate of Bernoulli with half-width `a` at parameter `t`.
pub fn lemniscate(a: f32, t: f32) -> Vec2 {
    let s = t.sin();
    let c = t.cos();
    let d = 1.0 + s * s;
    Vec2::new(a * c / d, a * s * c / d)
}

/// Closed line strip tracing the infinity symbol.
pub fn lemniscate_strip(a: f32, segments: u32, color: Rgb) -> Mesh {
    let mut mesh = Mesh::default();
    for i in 0..=segments {
        let t = i as f32 / segments as f32 * TAU;
        let p = lemniscate(a, t);
        mesh.push_vertex(p.extend(0.0), color);
    }
    mesh
}

// -----------------------------------------------------------------------------
// 5. Easing
// -----------------------------------------------------------------------------

/// Smooth ease-in-out over `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (PI * t).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = [1.0, 1.0, 1.0];

    #[test]
    fn cube_has_36_vertices_within_bounds() {
        let mesh = cube(Vec3::ZERO, 2.0, [WHITE; 6]);
        assert_eq!(mesh.vertex_count(), 36);
        assert!(mesh.positions().all(|p| p.abs().max_element() <= 1.0 + 1e-6));
    }

    #[test]
    fn cube_faces_sit_on_their_normals() {
        let colors = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
        ];
        let mesh = cube(Vec3::new(3.0, 0.0, 0.0), 1.0, colors);
        // First face is +X: every vertex at x = 3.5 and coloured red
        for v in mesh.vertices.chunks_exact(VERTEX_STRIDE).take(6) {
            assert!((v[0] - 3.5).abs() < 1e-6);
            assert_eq!(&v[3..], &[1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn torus_vertex_count_and_radius() {
        let mesh = torus(1.0, 0.25, 8, 16, |_| WHITE);
        assert_eq!(mesh.vertex_count(), 8 * 16 * 6);
        for p in mesh.positions() {
            let ring = p.truncate().length();
            assert!(ring >= 0.75 - 1e-5 && ring <= 1.25 + 1e-5);
        }
    }

    #[test]
    fn lemniscate_passes_through_origin_and_tips() {
        assert!((lemniscate(2.0, 0.0) - Vec2::new(2.0, 0.0)).length() < 1e-6);
        assert!(lemniscate(2.0, PI / 2.0).length() < 1e-6);
        assert!((lemniscate(2.0, PI) - Vec2::new(-2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn lemniscate_strip_is_closed() {
        let mesh = lemniscate_strip(1.0, 64, WHITE);
        let points: Vec<_> = mesh.positions().collect();
        assert_eq!(points.len(), 65);
        assert!((points[0] - points[64]).length() < 1e-5);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-3.0), 0.0);
    }
}
