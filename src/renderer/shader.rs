use gl::types::*;
use glam::Mat4;
use std::ffi::CString;
use std::ptr;

use lander::components::AtlasCell;

use super::RenderError;

const VERT_SRC: &str = include_str!("../../shaders/sprite.vert");
const FRAG_SRC: &str = include_str!("../../shaders/sprite.frag");

/// The sprite program with its uniform locations resolved once after linking.
/// A location of -1 (uniform optimised out) makes GL ignore the upload.
pub struct SpriteShader {
    program: GLuint,
    u_model: GLint,
    u_view: GLint,
    u_projection: GLint,
    u_cell: GLint,
    u_texture: GLint,
}

impl SpriteShader {
    pub fn new() -> Result<Self, RenderError> {
        let vert = Stage::compile(gl::VERTEX_SHADER, VERT_SRC)?;
        let frag = Stage::compile(gl::FRAGMENT_SHADER, FRAG_SRC)?;
        let program = link(&[&vert, &frag])?;

        Ok(Self {
            program,
            u_model: uniform_location(program, "u_model"),
            u_view: uniform_location(program, "u_view"),
            u_projection: uniform_location(program, "u_projection"),
            u_cell: uniform_location(program, "u_cell"),
            u_texture: uniform_location(program, "u_texture"),
        })
    }

    /// Bind the program and upload what stays fixed for a whole frame.
    pub fn begin(&self, projection: &Mat4, texture_unit: u32) {
        unsafe {
            gl::UseProgram(self.program);
            gl::UniformMatrix4fv(self.u_projection, 1, gl::FALSE, projection.as_ref().as_ptr());
            gl::UniformMatrix4fv(self.u_view, 1, gl::FALSE, Mat4::IDENTITY.as_ref().as_ptr());
            gl::Uniform1i(self.u_texture, texture_unit as GLint);
        }
    }

    /// Per-sprite uniforms: where the quad goes and which atlas cell it shows.
    pub fn set_sprite(&self, model: &Mat4, cell: AtlasCell) {
        unsafe {
            gl::UniformMatrix4fv(self.u_model, 1, gl::FALSE, model.as_ref().as_ptr());
            gl::Uniform4f(self.u_cell, cell.u, cell.v, cell.width, cell.height);
        }
    }
}

impl Drop for SpriteShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.program);
        }
    }
}

/// A compiled shader object, deleted once the program is linked (or not).
struct Stage(GLuint);

impl Stage {
    fn compile(kind: GLenum, src: &str) -> Result<Self, RenderError> {
        let label = if kind == gl::VERTEX_SHADER {
            "vertex"
        } else {
            "fragment"
        };
        let src = CString::new(src).map_err(|_| RenderError::ShaderCompile {
            kind: label,
            log: "source contains a nul byte".to_string(),
        })?;

        let stage = unsafe {
            let id = gl::CreateShader(kind);
            gl::ShaderSource(id, 1, &src.as_ptr(), ptr::null());
            gl::CompileShader(id);
            Self(id)
        };

        let mut ok = 0;
        unsafe { gl::GetShaderiv(stage.0, gl::COMPILE_STATUS, &mut ok) };
        if ok == 0 {
            let log = info_log(stage.0, gl::GetShaderiv, gl::GetShaderInfoLog);
            return Err(RenderError::ShaderCompile { kind: label, log });
        }
        Ok(stage)
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.0) };
    }
}

fn link(stages: &[&Stage]) -> Result<GLuint, RenderError> {
    let program = unsafe {
        let program = gl::CreateProgram();
        for stage in stages {
            gl::AttachShader(program, stage.0);
        }
        gl::LinkProgram(program);
        for stage in stages {
            gl::DetachShader(program, stage.0);
        }
        program
    };

    let mut ok = 0;
    unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut ok) };
    if ok == 0 {
        let log = info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog);
        unsafe { gl::DeleteProgram(program) };
        return Err(RenderError::ShaderLink(log));
    }
    Ok(program)
}

type GetIv = unsafe fn(GLuint, GLenum, *mut GLint);
type GetInfoLog = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

/// Read a shader or program info log through the matching GL getters.
fn info_log(id: GLuint, get_iv: GetIv, get_log: GetInfoLog) -> String {
    let mut len = 0;
    unsafe { get_iv(id, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written = 0;
    unsafe { get_log(id, len, &mut written, buf.as_mut_ptr().cast()) };
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

fn uniform_location(program: GLuint, name: &str) -> GLint {
    match CString::new(name) {
        Ok(name) => unsafe { gl::GetUniformLocation(program, name.as_ptr()) },
        Err(_) => -1,
    }
}
