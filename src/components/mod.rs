mod entity;
pub mod physics;
pub mod render;

pub use entity::{Entity, EntityId, EntityKind};
pub use physics::{Aabb, CollisionEvent, CollisionFlags, CollisionSide};
pub use render::{Animation, AnimationSet, AtlasCell, Facing, SpriteSheet, TextureHandle};
