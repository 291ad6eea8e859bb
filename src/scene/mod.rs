pub mod lunar_level;
pub mod prefabs;

pub use lunar_level::{load_lunar_level, LevelTextures};

use crate::components::{Entity, EntityId};

/// A built level: the entity arena plus the handles the game needs to judge
/// the match.
pub struct Level {
    pub entities: Vec<Entity>,
    pub player: EntityId,
    pub goal: EntityId,
    pub win_message: Option<EntityId>,
    pub lose_message: Option<EntityId>,
}
