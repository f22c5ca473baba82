// =============================================================================
// Aarohan Web - GPU Resource Ledger
// =============================================================================
// Table of Contents:
// 1. GpuResources
// 2. Context Helpers
// =============================================================================
//
// Every shader, program and buffer a scene creates goes through
// `GpuResources`, which deletes all of them on `release()` or on drop. A
// scene that fails half-way through setup therefore leaks nothing.

use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebglLoseContext,
};

use crate::error::GraphicsError;

// -----------------------------------------------------------------------------
// 1. GpuResources
// -----------------------------------------------------------------------------

/// Owner of every GPU object created for one surface.
pub struct GpuResources {
    gl: GL,
    shaders: Vec<WebGlShader>,
    programs: Vec<WebGlProgram>,
    buffers: Vec<WebGlBuffer>,
}

impl GpuResources {
    pub fn new(gl: GL) -> Self {
        Self {
            gl,
            shaders: Vec::new(),
            programs: Vec::new(),
            buffers: Vec::new(),
        }
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// Number of GPU objects currently owned.
    pub fn live_count(&self) -> usize {
        self.shaders.len() + self.programs.len() + self.buffers.len()
    }

    /// Upload `data` into a new static array buffer.
    pub fn create_buffer(&mut self, data: &[f32]) -> Result<WebGlBuffer, GraphicsError> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(GraphicsError::Allocation("vertex buffer"))?;
        self.buffers.push(buffer.clone());

        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let array = Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Ok(buffer)
    }

    /// Compile and link a program from vertex and fragment sources.
    pub fn create_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<WebGlProgram, GraphicsError> {
        let vertex = self.compile_shader(GL::VERTEX_SHADER, vertex_src)?;
        let fragment = self.compile_shader(GL::FRAGMENT_SHADER, fragment_src)?;

        let program = self
            .gl
            .create_program()
            .ok_or(GraphicsError::Allocation("program"))?;
        self.programs.push(program.clone());

        self.gl.attach_shader(&program, &vertex);
        self.gl.attach_shader(&program, &fragment);
        self.gl.link_program(&program);

        let linked = self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let info = self.gl.get_program_info_log(&program).unwrap_or_default();
            return Err(GraphicsError::ProgramLink(info));
        }
        Ok(program)
    }

    fn compile_shader(&mut self, kind: u32, source: &str) -> Result<WebGlShader, GraphicsError> {
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or(GraphicsError::Allocation("shader"))?;
        self.shaders.push(shader.clone());

        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        let compiled = self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !compiled {
            let info = self.gl.get_shader_info_log(&shader).unwrap_or_default();
            return Err(GraphicsError::ShaderCompile(info));
        }
        Ok(shader)
    }

    /// Delete every owned object. Safe to call more than once.
    pub fn release(&mut self) {
        let count = self.live_count();
        for buffer in self.buffers.drain(..) {
            self.gl.delete_buffer(Some(&buffer));
        }
        for program in self.programs.drain(..) {
            self.gl.delete_program(Some(&program));
        }
        for shader in self.shaders.drain(..) {
            self.gl.delete_shader(Some(&shader));
        }
        if count > 0 {
            log::debug!("Released {} GPU object(s)", count);
        }
    }
}

impl Drop for GpuResources {
    fn drop(&mut self) {
        self.release();
    }
}

// -----------------------------------------------------------------------------
// 2. Context Helpers
// -----------------------------------------------------------------------------

/// Get a WebGL context from `canvas`, or report that none is available.
pub fn webgl_context(canvas: &HtmlCanvasElement) -> Result<GL, GraphicsError> {
    canvas
        .get_context("webgl")?
        .ok_or(GraphicsError::ContextUnavailable)?
        .dyn_into::<GL>()
        .map_err(|_| GraphicsError::ContextUnavailable)
}

/// Ask the browser to drop the context now instead of at garbage collection.
pub fn lose_context(gl: &GL) {
    if let Ok(Some(ext)) = gl.get_extension("WEBGL_lose_context") {
        ext.unchecked_into::<WebglLoseContext>().lose_context();
    }
}
