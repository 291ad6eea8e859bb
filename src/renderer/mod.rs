pub mod mesh;
pub mod shader;
pub mod texture;

use std::path::{Path, PathBuf};

use glam::{Mat4, Vec3};
use mesh::SpriteQuad;
use shader::SpriteShader;
use texture::{Texture, TextureStore};
use thiserror::Error;

use lander::components::{AtlasCell, TextureHandle};
use lander::consts::WORLD_BOUNDS;
use lander::systems::SpriteRenderer;

const CLEAR_COLOR: Vec3 = Vec3::new(0.1, 0.2, 0.4);
const SPRITE_TEXTURE_UNIT: u32 = 0;

/// Failures while bringing up the window, GL state or assets.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{kind} shader compile error: {log}")]
    ShaderCompile { kind: &'static str, log: String },
    #[error("shader link error: {0}")]
    ShaderLink(String),
    #[error("window setup failed: {0}")]
    Window(String),
}

/// Draws textured quads for the game's sprites.
pub struct Renderer {
    shader: SpriteShader,
    quad: SpriteQuad,
    textures: TextureStore,
    projection: Mat4,
}

impl Renderer {
    pub fn init() -> Result<Self, RenderError> {
        unsafe {
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
        }

        let shader = SpriteShader::new()?;
        let [left, right, bottom, top, near, far] = WORLD_BOUNDS;
        let projection = Mat4::orthographic_rh_gl(left, right, bottom, top, near, far);

        Ok(Self {
            shader,
            quad: SpriteQuad::new(),
            textures: TextureStore::new(),
            projection,
        })
    }

    pub fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, RenderError> {
        let texture = Texture::from_path(path)?;
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(self.textures.add(texture))
    }

    /// Clear the frame and set the per-frame uniforms.
    pub fn begin_frame(&mut self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
        self.shader.begin(&self.projection, SPRITE_TEXTURE_UNIT);
    }
}

impl SpriteRenderer for Renderer {
    fn draw_sprite(&mut self, texture: TextureHandle, cell: AtlasCell, model: Mat4) {
        let Some(tex) = self.textures.get(texture) else {
            log::warn!("Skipping sprite with unknown texture {}", texture.0);
            return;
        };
        tex.bind(SPRITE_TEXTURE_UNIT);
        self.shader.set_sprite(&model, cell);
        self.quad.draw();
    }
}
