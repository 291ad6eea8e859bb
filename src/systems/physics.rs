use crate::components::{CollisionEvent, Entity};
use crate::consts::GRAVITY;

use super::collision::Collidables;

impl Entity {
    /// Advance this entity by exactly `delta_time` seconds, then resolve
    /// collisions against `collidables`.
    ///
    /// Order matters: gravity and acceleration feed velocity, the Y axis is
    /// integrated and resolved first, then horizontal input moves X directly
    /// and X is resolved. Returns one event per contact so the caller can mark
    /// the entities that were hit.
    ///
    /// Inactive entities and zero-length steps are no-ops.
    pub fn update(&mut self, delta_time: f32, collidables: Collidables<'_>) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        if !self.is_active() || delta_time <= 0.0 {
            return events;
        }

        self.collisions.clear();

        // Static entities skip integration and collision
        if self.kind.is_dynamic() {
            // Semi-implicit Euler: velocity first, then position
            self.velocity.y += GRAVITY * delta_time;
            self.velocity += self.acceleration * delta_time;

            self.position.y += self.velocity.y * delta_time;
            self.check_collision_y(collidables, &mut events);

            // Horizontal control is a direct kinematic override, not a force
            self.position.x += self.movement.x * self.speed * delta_time;
            self.check_collision_x(collidables, &mut events);
        }

        self.animation.advance(delta_time);
        events
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use super::*;
    use crate::components::{
        Animation, AnimationSet, EntityKind, Facing, SpriteSheet, TextureHandle,
    };
    use crate::consts::FIXED_TIMESTEP;

    fn entity(kind: EntityKind, x: f32, y: f32) -> Entity {
        Entity::new(kind, SpriteSheet::single(TextureHandle(0))).with_position(Vec3::new(x, y, 0.0))
    }

    fn dt() -> f32 {
        FIXED_TIMESTEP.as_secs_f32()
    }

    #[test]
    fn test_stationary_entity_never_moves() {
        let mut block = entity(EntityKind::TrapPlatform, 1.0, -2.0);
        let others = vec![entity(EntityKind::Player, 1.0, -1.5)];
        for _ in 0..600 {
            let events = block.update(dt(), Collidables::from_slice(&others));
            assert!(events.is_empty());
        }
        assert_eq!(block.position, Vec3::new(1.0, -2.0, 0.0));
        assert_eq!(block.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_gravity_accelerates_player() {
        let mut player = entity(EntityKind::Player, 0.0, 2.0);
        player.update(0.5, Collidables::empty());
        assert_relative_eq!(player.velocity.y, GRAVITY * 0.5);
        // Position uses the freshly updated velocity
        assert_relative_eq!(player.position.y, 2.0 + GRAVITY * 0.25);
    }

    #[test]
    fn test_acceleration_integrates_into_velocity() {
        let mut player = entity(EntityKind::Player, 0.0, 0.0);
        player.acceleration = Vec3::new(0.0, 20.0, 0.0);
        player.update(0.1, Collidables::empty());
        assert_relative_eq!(player.velocity.y, (GRAVITY + 20.0) * 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_horizontal_movement_is_direct() {
        let mut player = entity(EntityKind::Player, 0.0, 0.0).with_speed(2.0);
        player.move_right();
        player.update(0.25, Collidables::empty());
        assert_relative_eq!(player.position.x, 0.5);
        // Movement never builds up horizontal velocity
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_falling_player_comes_to_rest_on_platform() {
        let platforms = vec![entity(EntityKind::TrapPlatform, 0.0, -3.5)];
        let mut player = entity(EntityKind::Player, 0.0, 0.0);
        let rest_y = -3.5 + 0.5 + 0.5;

        let mut landed_on = None;
        for step in 0..600 {
            let events = player.update(dt(), Collidables::from_slice(&platforms));
            if !events.is_empty() {
                landed_on = Some(step);
                break;
            }
        }
        assert!(landed_on.is_some(), "player never reached the platform");
        assert_eq!(player.position.y, rest_y);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.collisions.bottom);

        // Keeps resting there on later steps
        for _ in 0..120 {
            player.update(dt(), Collidables::from_slice(&platforms));
            assert_eq!(player.position.y, rest_y);
            assert!(player.collisions.bottom);
        }
    }

    #[test]
    fn test_zero_step_is_idempotent() {
        let platforms = vec![entity(EntityKind::TrapPlatform, 0.0, -3.5)];
        let mut player = entity(EntityKind::Player, 0.0, -2.5);
        player.update(dt(), Collidables::from_slice(&platforms));
        assert!(player.collisions.bottom);
        let (position, velocity, flags) = (player.position, player.velocity, player.collisions);

        let events = player.update(0.0, Collidables::from_slice(&platforms));
        assert!(events.is_empty());
        assert_eq!(player.position, position);
        assert_eq!(player.velocity, velocity);
        assert_eq!(player.collisions, flags);
    }

    #[test]
    fn test_inactive_entity_keeps_state() {
        let mut player = entity(EntityKind::Player, 0.0, 2.0);
        player.velocity.y = -3.0;
        player.deactivate();
        player.update(dt(), Collidables::empty());
        assert_eq!(player.position.y, 2.0);
        assert_eq!(player.velocity.y, -3.0);
    }

    #[test]
    fn test_flags_reset_each_update() {
        let platforms = vec![entity(EntityKind::TrapPlatform, 0.0, -3.5)];
        let mut player = entity(EntityKind::Player, 0.0, -2.5);
        player.update(dt(), Collidables::from_slice(&platforms));
        assert!(player.collisions.bottom);

        // Lift off: nothing below any more
        player.position.y = 1.0;
        player.update(dt(), Collidables::from_slice(&platforms));
        assert!(!player.collisions.bottom && !player.collisions.collided);
    }

    #[test]
    fn test_update_advances_animation() {
        let set = AnimationSet::new().with(Facing::Down, [6, 7, 8]);
        let mut player = entity(EntityKind::Player, 0.0, 0.0)
            .with_animation(Animation::new(set, Facing::Down));
        player.update(0.3, Collidables::empty());
        assert_eq!(player.animation.current_cell(), 7);
    }
}
