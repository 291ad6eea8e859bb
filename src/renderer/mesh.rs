use gl::types::*;
use std::mem::size_of;
use std::ptr;

/// Interleaved corner data: x, y, z then u, v. Image rows run top to bottom,
/// so the top edge samples v = 0.
#[rustfmt::skip]
const CORNERS: [[f32; 5]; 4] = [
    [-0.5, -0.5, 0.0,  0.0, 1.0],
    [ 0.5, -0.5, 0.0,  1.0, 1.0],
    [ 0.5,  0.5, 0.0,  1.0, 0.0],
    [-0.5,  0.5, 0.0,  0.0, 0.0],
];
const TRIANGLES: [u32; 6] = [0, 1, 2, 0, 2, 3];

const POSITION_LOCATION: GLuint = 0;
const TEX_COORD_LOCATION: GLuint = 1;

/// The unit quad every sprite is drawn with, scaled and placed by `u_model`.
pub struct SpriteQuad {
    vao: GLuint,
    buffers: [GLuint; 2],
}

impl SpriteQuad {
    pub fn new() -> Self {
        let mut vao = 0;
        let mut buffers = [0; 2];
        let [vertex_buffer, index_buffer] = &mut buffers;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, vertex_buffer);
            gl::BindBuffer(gl::ARRAY_BUFFER, *vertex_buffer);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                size_of::<[[f32; 5]; 4]>() as GLsizeiptr,
                CORNERS.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            gl::GenBuffers(1, index_buffer);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, *index_buffer);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                size_of::<[u32; 6]>() as GLsizeiptr,
                TRIANGLES.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            let corner_size = size_of::<[f32; 5]>() as GLsizei;
            gl::VertexAttribPointer(POSITION_LOCATION, 3, gl::FLOAT, gl::FALSE, corner_size, ptr::null());
            gl::EnableVertexAttribArray(POSITION_LOCATION);
            gl::VertexAttribPointer(
                TEX_COORD_LOCATION,
                2,
                gl::FLOAT,
                gl::FALSE,
                corner_size,
                size_of::<[f32; 3]>() as *const _,
            );
            gl::EnableVertexAttribArray(TEX_COORD_LOCATION);

            gl::BindVertexArray(0);
        }

        Self { vao, buffers }
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                TRIANGLES.len() as GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for SpriteQuad {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(self.buffers.len() as GLsizei, self.buffers.as_ptr());
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_maps_image_top_to_v_zero() {
        for [x, y, _, u, v] in CORNERS {
            assert_eq!(u, x + 0.5);
            assert_eq!(v, 0.5 - y);
        }
    }

    #[test]
    fn test_triangles_cover_all_corners() {
        let mut used = [false; 4];
        for i in TRIANGLES {
            used[i as usize] = true;
        }
        assert!(used.iter().all(|&u| u));
    }
}
