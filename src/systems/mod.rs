mod animation;
mod collision;
mod physics;
mod player;
mod render;

pub use collision::Collidables;
pub use player::{player_control_system, ControlInput};
pub use render::SpriteRenderer;

#[cfg(test)]
pub(crate) use render::tests::RecordingRenderer;
