// =============================================================================
// Aarohan Web - Logo Ring Scene
// =============================================================================
// The group mark: a gold ring around a small core cube, spinning slowly and
// bobbing on a sine wave.
// =============================================================================

use glam::{Mat4, Vec3};
use web_sys::WebGlRenderingContext as GL;

use super::{camera, parallax, CLEAR};
use crate::error::GraphicsError;
use crate::graphics::animation::FrameClock;
use crate::graphics::mesh::{cube, torus};
use crate::graphics::program::{projection, GpuMesh, MeshProgram};
use crate::graphics::resources::GpuResources;
use crate::graphics::surface::Scene;

const BOB_HEIGHT: f32 = 0.15;

pub struct LogoScene {
    program: MeshProgram,
    ring: GpuMesh,
    core: GpuMesh,
    projection: Mat4,
}

impl LogoScene {
    pub fn build(resources: &mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError> {
        let program = MeshProgram::new(resources)?;

        // Lighter on the outside of the tube, darker inside
        let ring = torus(1.3, 0.22, 16, 64, |v| {
            let light = 0.7 + 0.3 * v.cos();
            [0.98 * light, 0.72 * light, 0.20 * light]
        });
        let ring = GpuMesh::upload(resources, &ring, GL::TRIANGLES)?;
        let core = GpuMesh::upload(resources, &cube(Vec3::ZERO, 0.7, [[0.95, 0.95, 0.97]; 6]), GL::TRIANGLES)?;

        Ok(Box::new(Self {
            program,
            ring,
            core,
            projection: Mat4::IDENTITY,
        }))
    }
}

impl Scene for LogoScene {
    fn resize(&mut self, _gl: &GL, width: u32, height: u32) {
        self.projection = projection(width, height);
    }

    fn frame(&mut self, gl: &GL, clock: &FrameClock) {
        let t = clock.time.elapsed as f32;
        let bob = Mat4::from_translation(Vec3::new(0.0, (t * 1.2).sin() * BOB_HEIGHT, 0.0));
        let view_proj = self.projection * camera(5.5) * parallax(clock.pointer, 0.25) * bob;

        let ring = view_proj * Mat4::from_rotation_y(t * 0.5) * Mat4::from_rotation_x(0.35);
        let core = view_proj * Mat4::from_rotation_y(-t * 0.9) * Mat4::from_rotation_z(t * 0.4);

        self.program.begin_frame(gl, CLEAR);
        self.program.draw(gl, &self.ring, &ring, 1.0);
        self.program.draw(gl, &self.core, &core, 0.9);
    }
}
