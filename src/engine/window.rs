use sdl2::video::{GLContext, GLProfile, Window};
use sdl2::Sdl;

use crate::renderer::RenderError;

pub struct GameWindow {
    _gl_context: GLContext,
    window: Window,
}

impl GameWindow {
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32) -> Result<Self, RenderError> {
        let video = sdl.video().map_err(RenderError::Window)?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video
            .window(title, width, height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| RenderError::Window(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(RenderError::Window)?;

        gl::load_with(|s| video.gl_get_proc_address(s) as *const _);
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }

        log::info!("Opened {width}x{height} window with a GL 3.3 core context");

        Ok(Self {
            _gl_context: gl_context,
            window,
        })
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}
