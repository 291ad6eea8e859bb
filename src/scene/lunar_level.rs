use glam::Vec3;

use super::prefabs::{spawn_message, spawn_platform, spawn_player};
use super::Level;
use crate::components::{EntityKind, TextureHandle};
use crate::consts::{GOAL_X, PLATFORM_Y, SPAWN_POSITION, TRAP_COUNT};

/// Textures the level needs, loaded by the caller.
#[derive(Clone, Copy, Debug)]
pub struct LevelTextures {
    pub player: TextureHandle,
    pub trap: TextureHandle,
    pub goal: TextureHandle,
    pub win_message: TextureHandle,
    pub lose_message: TextureHandle,
}

/// Horizontal slots of the trap platforms: a unit-spaced strip from x = -5
/// that skips the goal's slot.
fn trap_slots() -> impl Iterator<Item = f32> {
    (0..=TRAP_COUNT)
        .map(|i| i as f32 - 5.0)
        .filter(|&x| x != GOAL_X)
        .take(TRAP_COUNT)
}

/// Build the lunar lander level.
///
/// Arena order is also draw order: player, traps, goal, then the two
/// (initially hidden) messages.
pub fn load_lunar_level(textures: &LevelTextures) -> Level {
    let mut entities = Vec::new();

    let player = spawn_player(&mut entities, textures.player, SPAWN_POSITION);

    for x in trap_slots() {
        spawn_platform(
            &mut entities,
            EntityKind::TrapPlatform,
            textures.trap,
            Vec3::new(x, PLATFORM_Y, 0.0),
        );
    }

    let goal = spawn_platform(
        &mut entities,
        EntityKind::GoalPlatform,
        textures.goal,
        Vec3::new(GOAL_X, PLATFORM_Y, 0.0),
    );

    let win_message = spawn_message(&mut entities, textures.win_message);
    let lose_message = spawn_message(&mut entities, textures.lose_message);

    log::debug!("Lunar level built with {} entities", entities.len());

    Level {
        entities,
        player,
        goal,
        win_message: Some(win_message),
        lose_message: Some(lose_message),
    }
}
