// =============================================================================
// Aarohan Web - Infinity Scene
// =============================================================================
// A lemniscate traced as a line with glowing points travelling along it.
// =============================================================================

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use web_sys::WebGlRenderingContext as GL;

use super::{camera, parallax, CLEAR};
use crate::error::GraphicsError;
use crate::graphics::animation::FrameClock;
use crate::graphics::mesh::{lemniscate, lemniscate_strip, Mesh};
use crate::graphics::program::{projection, GpuMesh, MeshProgram};
use crate::graphics::resources::GpuResources;
use crate::graphics::surface::Scene;

const HALF_WIDTH: f32 = 2.0;
const TRAVELLERS: u32 = 12;
/// Radians of curve parameter per second.
const TRAVEL_SPEED: f32 = 0.8;

pub struct InfinityScene {
    program: MeshProgram,
    curve: GpuMesh,
    glow: GpuMesh,
    projection: Mat4,
}

impl InfinityScene {
    pub fn build(resources: &mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError> {
        let program = MeshProgram::new(resources)?;
        let curve = lemniscate_strip(HALF_WIDTH, 256, [0.98, 0.66, 0.12]);
        let curve = GpuMesh::upload(resources, &curve, GL::LINE_STRIP)?;

        let mut point = Mesh::default();
        point.push_vertex(Vec3::ZERO, [1.0, 0.92, 0.7]);
        let glow = GpuMesh::upload(resources, &point, GL::POINTS)?;

        Ok(Box::new(Self {
            program,
            curve,
            glow,
            projection: Mat4::IDENTITY,
        }))
    }
}

/// Curve parameter of traveller `index` at time `t`.
pub fn traveller_phase(index: u32, t: f32) -> f32 {
    (t * TRAVEL_SPEED + index as f32 / TRAVELLERS as f32 * TAU) % TAU
}

impl Scene for InfinityScene {
    fn resize(&mut self, _gl: &GL, width: u32, height: u32) {
        self.projection = projection(width, height);
    }

    fn frame(&mut self, gl: &GL, clock: &FrameClock) {
        let t = clock.time.elapsed as f32;
        let view_proj = self.projection
            * camera(6.0)
            * parallax(clock.pointer, 0.3)
            * Mat4::from_rotation_y((t * 0.3).sin() * 0.5);

        self.program.begin_frame(gl, CLEAR);
        self.program.draw(gl, &self.curve, &view_proj, 0.8);

        self.program.set_point_size(gl, 6.0);
        for i in 0..TRAVELLERS {
            let p = lemniscate(HALF_WIDTH, traveller_phase(i, t));
            let mvp = view_proj * Mat4::from_translation(p.extend(0.0));
            // Fade travellers by their spacing so the trail reads as a comet
            let alpha = 0.35 + 0.65 * (i as f32 / TRAVELLERS as f32);
            self.program.draw(gl, &self.glow, &mvp, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travellers_are_evenly_spaced() {
        let a = traveller_phase(0, 0.0);
        let b = traveller_phase(1, 0.0);
        assert!((b - a - TAU / TRAVELLERS as f32).abs() < 1e-6);
    }

    #[test]
    fn phase_wraps() {
        for i in 0..TRAVELLERS {
            let phase = traveller_phase(i, 1234.5);
            assert!((0.0..TAU).contains(&phase));
        }
    }
}
