use glam::Vec3;

use crate::components::Entity;
use crate::consts::THRUST;

/// Held direction keys for one frame, already decoded from the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Turn held keys into player movement and engine thrust.
///
/// Movement is rebuilt from scratch every frame so that releasing every key
/// stops the lander drifting sideways. Left beats right when both are held;
/// up is independent. The combined direction is clamped to unit length
/// before speed is applied, and its vertical part drives the thruster.
pub fn player_control_system(player: &mut Entity, controls: &ControlInput) {
    player.movement = Vec3::ZERO;

    if controls.left {
        player.move_left();
    } else if controls.right {
        player.move_right();
    }

    if controls.up {
        player.move_up();
    }

    player.clamp_movement();
    player.acceleration = Vec3::new(0.0, player.movement.y * THRUST, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{EntityKind, Facing, SpriteSheet, TextureHandle};
    use proptest::prelude::*;

    fn player() -> Entity {
        Entity::new(EntityKind::Player, SpriteSheet::single(TextureHandle(0))).with_speed(1.0)
    }

    #[test]
    fn test_no_input_stops_movement() {
        let mut p = player();
        player_control_system(&mut p, &ControlInput { right: true, up: true, ..Default::default() });
        player_control_system(&mut p, &ControlInput::default());
        assert_eq!(p.movement, Vec3::ZERO);
        assert_eq!(p.acceleration, Vec3::ZERO);
        // Keeps its last facing
        assert_eq!(p.animation.facing, Facing::Up);
    }

    #[test]
    fn test_left_beats_right() {
        let mut p = player();
        let both = ControlInput {
            left: true,
            right: true,
            up: false,
        };
        player_control_system(&mut p, &both);
        assert_eq!(p.movement.x, -1.0);
        assert_eq!(p.animation.facing, Facing::Left);
    }

    #[test]
    fn test_up_fires_thruster() {
        let mut p = player();
        player_control_system(&mut p, &ControlInput { up: true, ..Default::default() });
        assert_eq!(p.movement.y, 1.0);
        assert_eq!(p.acceleration.y, THRUST);
    }

    proptest! {
        #[test]
        fn test_movement_is_clamped(left: bool, right: bool, up: bool) {
            let mut p = player();
            player_control_system(&mut p, &ControlInput { left, right, up });
            prop_assert!(p.movement.length() <= 1.0 + 1e-6);
            prop_assert!(p.acceleration.y <= THRUST + 1e-4);
        }
    }
}
