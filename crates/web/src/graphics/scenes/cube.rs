// =============================================================================
// Aarohan Web - Rotating Cube Scene
// =============================================================================

use glam::{Mat4, Vec3};
use web_sys::WebGlRenderingContext as GL;

use super::{camera, parallax, CLEAR};
use crate::error::GraphicsError;
use crate::graphics::animation::FrameClock;
use crate::graphics::mesh::{cube, Rgb};
use crate::graphics::program::{projection, GpuMesh, MeshProgram};
use crate::graphics::resources::GpuResources;
use crate::graphics::surface::Scene;

/// Brand palette, one colour per face.
const FACE_COLORS: [Rgb; 6] = [
    [0.96, 0.62, 0.04],
    [0.85, 0.33, 0.10],
    [0.98, 0.80, 0.30],
    [0.55, 0.20, 0.05],
    [0.99, 0.70, 0.18],
    [0.72, 0.26, 0.08],
];

pub struct CubeScene {
    program: MeshProgram,
    solid: GpuMesh,
    projection: Mat4,
}

impl CubeScene {
    pub fn build(resources: &mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError> {
        let program = MeshProgram::new(resources)?;
        let solid = GpuMesh::upload(resources, &cube(Vec3::ZERO, 1.6, FACE_COLORS), GL::TRIANGLES)?;
        Ok(Box::new(Self {
            program,
            solid,
            projection: Mat4::IDENTITY,
        }))
    }
}

impl Scene for CubeScene {
    fn resize(&mut self, _gl: &GL, width: u32, height: u32) {
        self.projection = projection(width, height);
    }

    fn frame(&mut self, gl: &GL, clock: &FrameClock) {
        let t = clock.time.elapsed as f32;
        let model = parallax(clock.pointer, 0.35)
            * Mat4::from_rotation_y(t * 0.6)
            * Mat4::from_rotation_x(t * 0.4);
        let mvp = self.projection * camera(5.0) * model;

        self.program.begin_frame(gl, CLEAR);
        self.program.draw(gl, &self.solid, &mvp, 0.95);
    }
}
