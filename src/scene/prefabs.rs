use glam::Vec3;

use crate::components::{
    Animation, AnimationSet, Entity, EntityId, EntityKind, Facing, SpriteSheet, TextureHandle,
};

// ---------------------------------------------------------------------------
// Witch sprite sheet: 3 columns x 4 rows, one row per facing
// ---------------------------------------------------------------------------

const WITCH_COLS: u32 = 3;
const WITCH_ROWS: u32 = 4;
const PLAYER_SPEED: f32 = 1.0;

fn witch_flying() -> AnimationSet {
    AnimationSet::new()
        .with(Facing::Left, [9, 10, 11])
        .with(Facing::Right, [3, 4, 5])
        .with(Facing::Up, [0, 1, 2])
        .with(Facing::Down, [6, 7, 8])
}

/// Push `entity` into the arena and return its handle.
fn spawn(arena: &mut Vec<Entity>, entity: Entity) -> EntityId {
    let id = EntityId(arena.len());
    arena.push(entity);
    id
}

/// The lander: an animated witch that starts facing down.
pub fn spawn_player(arena: &mut Vec<Entity>, texture: TextureHandle, position: Vec3) -> EntityId {
    let sheet = SpriteSheet::new(texture, WITCH_COLS, WITCH_ROWS);
    let player = Entity::new(EntityKind::Player, sheet)
        .with_position(position)
        .with_speed(PLAYER_SPEED)
        .with_animation(Animation::new(witch_flying(), Facing::Down));
    spawn(arena, player)
}

/// A unit-sized static platform. `kind` decides whether landing on it wins or loses.
pub fn spawn_platform(
    arena: &mut Vec<Entity>,
    kind: EntityKind,
    texture: TextureHandle,
    position: Vec3,
) -> EntityId {
    debug_assert!(matches!(kind, EntityKind::GoalPlatform | EntityKind::TrapPlatform));
    let platform = Entity::new(kind, SpriteSheet::single(texture)).with_position(position);
    spawn(arena, platform)
}

/// A full-width banner, hidden until the game activates it.
pub fn spawn_message(arena: &mut Vec<Entity>, texture: TextureHandle) -> EntityId {
    let mut message = Entity::new(EntityKind::Message, SpriteSheet::single(texture))
        .with_scale(Vec3::new(5.0, 1.0, 1.0));
    message.deactivate();
    spawn(arena, message)
}
