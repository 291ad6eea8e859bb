use glam::Mat4;

use crate::components::{AtlasCell, Entity, TextureHandle};

/// Draw collaborator the core submits sprites to. The binary implements it
/// with OpenGL; tests record the calls.
pub trait SpriteRenderer {
    /// Draw the `cell` region of `texture` on a unit quad transformed by `model`.
    fn draw_sprite(&mut self, texture: TextureHandle, cell: AtlasCell, model: Mat4);
}

impl Entity {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.scale())
    }

    /// Submit the current animation frame. Inactive entities draw nothing.
    pub fn render<R: SpriteRenderer + ?Sized>(&self, renderer: &mut R) {
        if !self.is_active() {
            return;
        }
        let cell = self.sheet.cell(self.animation.current_cell());
        renderer.draw_sprite(self.sheet.texture, cell, self.model_matrix());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use glam::Vec3;

    use super::*;
    use crate::components::{Animation, AnimationSet, EntityKind, Facing, SpriteSheet};

    /// Keeps every draw call for inspection.
    #[derive(Default)]
    pub(crate) struct RecordingRenderer {
        pub(crate) draws: Vec<(TextureHandle, AtlasCell, Mat4)>,
    }

    impl SpriteRenderer for RecordingRenderer {
        fn draw_sprite(&mut self, texture: TextureHandle, cell: AtlasCell, model: Mat4) {
            self.draws.push((texture, cell, model));
        }
    }

    #[test]
    fn test_render_submits_current_cell() {
        let set = AnimationSet::new().with(Facing::Right, [3, 4, 5]);
        let mut witch = Entity::new(EntityKind::Player, SpriteSheet::new(TextureHandle(7), 3, 4))
            .with_position(Vec3::new(1.0, 2.0, 0.0))
            .with_animation(Animation::new(set, Facing::Right));
        witch.animation.frame = 2;

        let mut renderer = RecordingRenderer::default();
        witch.render(&mut renderer);

        assert_eq!(renderer.draws.len(), 1);
        let (texture, cell, model) = renderer.draws[0];
        assert_eq!(texture, TextureHandle(7));
        // Cell 5: column 2, row 1 of a 3×4 sheet
        assert_eq!(cell, SpriteSheet::new(TextureHandle(7), 3, 4).cell(5));
        assert_eq!(model.w_axis.truncate(), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_model_matrix_applies_scale() {
        let banner = Entity::new(EntityKind::Message, SpriteSheet::single(TextureHandle(0)))
            .with_scale(Vec3::new(5.0, 1.0, 1.0));
        let corner = banner.model_matrix().transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(corner, Vec3::new(2.5, 0.5, 0.0));
    }

    #[test]
    fn test_inactive_entity_draws_nothing() {
        let mut platform = Entity::new(EntityKind::TrapPlatform, SpriteSheet::single(TextureHandle(1)));
        platform.deactivate();
        let mut renderer = RecordingRenderer::default();
        platform.render(&mut renderer);
        assert!(renderer.draws.is_empty());
    }
}
