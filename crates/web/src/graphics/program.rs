// =============================================================================
// Aarohan Web - Vertex-Colour Program
// =============================================================================
// The one shader pair all decorative scenes draw with: per-vertex colour,
// a model-view-projection matrix and a global alpha.
// =============================================================================

use glam::Mat4;
use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlUniformLocation};

use super::mesh::{Mesh, VERTEX_STRIDE};
use super::resources::GpuResources;
use crate::error::GraphicsError;

const VERTEX_SHADER: &str = r#"
attribute vec3 a_position;
attribute vec3 a_color;
uniform mat4 u_mvp;
uniform float u_point_size;
varying vec3 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    gl_PointSize = u_point_size;
    v_color = a_color;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform float u_alpha;
varying vec3 v_color;

void main() {
    gl_FragColor = vec4(v_color, u_alpha);
}
"#;

const FLOAT_BYTES: i32 = 4;

/// A mesh uploaded to the GPU.
pub struct GpuMesh {
    buffer: WebGlBuffer,
    count: i32,
    mode: u32,
}

impl GpuMesh {
    /// Upload `mesh`, drawn with primitive `mode` (e.g. `GL::TRIANGLES`).
    pub fn upload(resources: &mut GpuResources, mesh: &Mesh, mode: u32) -> Result<Self, GraphicsError> {
        let buffer = resources.create_buffer(&mesh.vertices)?;
        Ok(Self {
            buffer,
            count: mesh.vertex_count() as i32,
            mode,
        })
    }
}

/// Linked vertex-colour program with its attribute and uniform locations.
pub struct MeshProgram {
    program: WebGlProgram,
    a_position: u32,
    a_color: u32,
    u_mvp: WebGlUniformLocation,
    u_alpha: WebGlUniformLocation,
    u_point_size: WebGlUniformLocation,
}

impl MeshProgram {
    pub fn new(resources: &mut GpuResources) -> Result<Self, GraphicsError> {
        let program = resources.create_program(VERTEX_SHADER, FRAGMENT_SHADER)?;
        let gl = resources.gl();

        let attribute = |name: &str| -> Result<u32, GraphicsError> {
            let location = gl.get_attrib_location(&program, name);
            u32::try_from(location).map_err(|_| GraphicsError::ProgramLink(format!("missing attribute {}", name)))
        };
        let uniform = |name: &str| -> Result<WebGlUniformLocation, GraphicsError> {
            gl.get_uniform_location(&program, name)
                .ok_or_else(|| GraphicsError::ProgramLink(format!("missing uniform {}", name)))
        };

        Ok(Self {
            a_position: attribute("a_position")?,
            a_color: attribute("a_color")?,
            u_mvp: uniform("u_mvp")?,
            u_alpha: uniform("u_alpha")?,
            u_point_size: uniform("u_point_size")?,
            program,
        })
    }

    /// Common state for a frame: clear, depth test, blending.
    pub fn begin_frame(&self, gl: &GL, clear: [f32; 4]) {
        gl.use_program(Some(&self.program));
        gl.clear_color(clear[0], clear[1], clear[2], clear[3]);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.uniform1f(Some(&self.u_point_size), 1.0);
    }

    pub fn set_point_size(&self, gl: &GL, size: f32) {
        gl.uniform1f(Some(&self.u_point_size), size);
    }

    /// Draw a whole mesh.
    pub fn draw(&self, gl: &GL, mesh: &GpuMesh, mvp: &Mat4, alpha: f32) {
        self.draw_range(gl, mesh, mvp, alpha, 0, mesh.count);
    }

    /// Draw `count` vertices starting at `first`.
    pub fn draw_range(&self, gl: &GL, mesh: &GpuMesh, mvp: &Mat4, alpha: f32, first: i32, count: i32) {
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&mesh.buffer));

        let stride = VERTEX_STRIDE as i32 * FLOAT_BYTES;
        gl.vertex_attrib_pointer_with_i32(self.a_position, 3, GL::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(self.a_position);
        gl.vertex_attrib_pointer_with_i32(self.a_color, 3, GL::FLOAT, false, stride, 3 * FLOAT_BYTES);
        gl.enable_vertex_attrib_array(self.a_color);

        gl.uniform_matrix4fv_with_f32_array(Some(&self.u_mvp), false, &mvp.to_cols_array());
        gl.uniform1f(Some(&self.u_alpha), alpha);
        gl.draw_arrays(mesh.mode, first, count.min(mesh.count - first).max(0));
    }
}

/// Perspective projection for a surface of the given size.
pub fn projection(width: u32, height: u32) -> Mat4 {
    let aspect = if height == 0 { 1.0 } else { width as f32 / height as f32 };
    Mat4::perspective_rh_gl(45f32.to_radians(), aspect, 0.1, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn projection_tolerates_zero_height() {
        let m = projection(300, 0);
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn projection_keeps_center_on_axis() {
        let clip = projection(800, 400) * Vec4::new(0.0, 0.0, -5.0, 1.0);
        assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
        assert!(clip.w > 0.0);
    }
}
