//! Lunar Lander - a small 2D arcade game
//!
//! Core modules:
//! - `components`: entity data (kinematics, collision flags, sprite animation)
//! - `systems`: entity update, AABB collision, animation, controls, sprite submission
//! - `time`: frame timer and fixed-timestep driver
//! - `game`: simulation context and win/lose outcome
//! - `scene`: level layout and entity prefabs
//!
//! Nothing in the library touches SDL or OpenGL; the binary supplies the
//! window, input and a [`systems::SpriteRenderer`] implementation.

pub mod components;
pub mod game;
pub mod scene;
pub mod systems;
pub mod time;

pub use components::{Entity, EntityId, EntityKind};
pub use game::{Game, Outcome};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz)
    pub const FIXED_TIMESTEP: Duration = Duration::from_nanos(16_666_667);

    /// Downward acceleration applied to player entities (units/s²)
    pub const GRAVITY: f32 = -9.8;
    /// Upward acceleration produced by the engine at full vertical input (units/s²)
    pub const THRUST: f32 = 12.0;

    /// Sprite animation rate
    pub const FRAMES_PER_SECOND: f32 = 4.0;

    /// Boxes must interpenetrate by more than this to count as overlapping.
    /// Keeps an entity that was just snapped onto a surface from re-colliding on the other axis.
    pub const CONTACT_EPSILON: f32 = 1e-5;

    /// Orthographic world bounds: left, right, bottom, top, near, far
    pub const WORLD_BOUNDS: [f32; 6] = [-5.0, 5.0, -3.75, 3.75, -1.0, 1.0];

    /// Where the lander starts, and where it is pinned once the match is over
    pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);
    /// Height of the landing strip
    pub const PLATFORM_Y: f32 = -3.5;
    /// Horizontal position of the goal platform
    pub const GOAL_X: f32 = -1.0;
    /// Number of trap platforms around the goal
    pub const TRAP_COUNT: usize = 10;
}
