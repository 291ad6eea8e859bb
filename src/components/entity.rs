use glam::{Vec2, Vec3};

use super::physics::{Aabb, CollisionFlags};
use super::render::{Animation, Facing, SpriteSheet};

/// Stable handle into the game's entity arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

/// Closed set of things that live in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    GoalPlatform,
    TrapPlatform,
    /// Win/lose overlay. Drawn only, never collides.
    Message,
}

impl EntityKind {
    /// Only players are integrated; everything else is a static obstacle.
    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::Player)
    }

    pub fn is_collidable(self) -> bool {
        !matches!(self, Self::Message)
    }
}

/// A sprite with a bounding box and kinematic state.
#[derive(Clone, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Normalised input direction. Only `x` moves the entity directly;
    /// `y` is turned into thrust by the control system.
    pub movement: Vec3,
    pub speed: f32,
    pub collisions: CollisionFlags,
    pub sheet: SpriteSheet,
    pub animation: Animation,
    scale: Vec3,
    width: f32,
    height: f32,
    active: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, sheet: SpriteSheet) -> Self {
        Self {
            kind,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            movement: Vec3::ZERO,
            speed: 0.0,
            collisions: CollisionFlags::default(),
            sheet,
            animation: Animation::still(),
            scale: Vec3::ONE,
            width: 1.0,
            height: 1.0,
            active: true,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        debug_assert!(scale.x > 0.0 && scale.y > 0.0, "scale must be positive");
        self.scale = scale;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        debug_assert!(width > 0.0 && height > 0.0, "size must be positive");
        self.width = width;
        self.height = height;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(
            self.width * self.scale.x * 0.5,
            self.height * self.scale.y * 0.5,
        )
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position.truncate(), self.half_extents())
    }

    /// True when both entities are active and their boxes interpenetrate.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.active && other.active && self.aabb().overlaps(&other.aabb())
    }

    pub fn face(&mut self, facing: Facing) {
        self.animation.face(facing);
    }

    pub fn move_left(&mut self) {
        self.movement.x = -1.0;
        self.face(Facing::Left);
    }

    pub fn move_right(&mut self) {
        self.movement.x = 1.0;
        self.face(Facing::Right);
    }

    pub fn move_up(&mut self) {
        self.movement.y = 1.0;
        self.face(Facing::Up);
    }

    pub fn move_down(&mut self) {
        self.movement.y = -1.0;
        self.face(Facing::Down);
    }

    /// Normalise `movement` if its length exceeds 1 (e.g. left + up).
    pub fn clamp_movement(&mut self) {
        if self.movement.length() > 1.0 {
            self.movement = self.movement.normalize();
        }
    }
}
