//! Simulation context: the entity arena, the fixed-timestep clock and the
//! match outcome.

use std::time::Duration;

use glam::Vec3;

use crate::components::{CollisionEvent, Entity, EntityId, EntityKind};
use crate::scene::Level;
use crate::systems::{player_control_system, Collidables, ControlInput, SpriteRenderer};
use crate::time::FixedTimestep;

/// How the match stands. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

pub struct Game {
    entities: Vec<Entity>,
    player: EntityId,
    goal: EntityId,
    win_message: Option<EntityId>,
    lose_message: Option<EntityId>,
    spawn: Vec3,
    outcome: Outcome,
    clock: FixedTimestep,
}

impl Game {
    pub fn new(level: Level) -> Self {
        Self::with_clock(level, FixedTimestep::default())
    }

    pub fn with_clock(level: Level, clock: FixedTimestep) -> Self {
        let spawn = level
            .entities
            .get(level.player.0)
            .map(|p| p.position)
            .unwrap_or(Vec3::ZERO);
        Self {
            entities: level.entities,
            player: level.player,
            goal: level.goal,
            win_message: level.win_message,
            lose_message: level.lose_message,
            spawn,
            outcome: Outcome::Playing,
            clock,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entity(self.player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities.get_mut(self.player.0)
    }

    /// Feed this frame's held keys to the player. Ignored once the match is over.
    pub fn apply_controls(&mut self, controls: &ControlInput) {
        if self.outcome.is_over() {
            return;
        }
        if let Some(player) = self.player_mut() {
            player_control_system(player, controls);
        }
    }

    /// Add a frame's wall-clock time and run every whole fixed step it covers.
    pub fn advance(&mut self, elapsed: Duration) -> Outcome {
        let steps = self.clock.advance(elapsed);
        let dt = self.clock.step_seconds();
        for _ in 0..steps {
            self.step(dt);
        }
        self.outcome
    }

    /// One fixed simulation step: update dynamic entities, mark whatever they
    /// hit, then judge the match.
    pub fn step(&mut self, dt: f32) -> Outcome {
        if self.outcome.is_over() {
            self.pin_player();
            return self.outcome;
        }

        // Hits from the previous step no longer count
        for entity in self.entities.iter_mut().filter(|e| !e.kind.is_dynamic()) {
            entity.collisions.collided = false;
        }

        let mut events: Vec<CollisionEvent> = Vec::new();
        for index in 0..self.entities.len() {
            if let Some((entity, others)) = Collidables::split(&mut self.entities, EntityId(index)) {
                if entity.kind.is_dynamic() {
                    events.extend(entity.update(dt, others));
                }
            }
        }

        for event in &events {
            if let Some(target) = self.entities.get_mut(event.target.0) {
                target.collisions.collided = true;
            }
        }

        self.outcome = self.judge();
        if self.outcome.is_over() {
            self.finish();
        }
        self.outcome
    }

    /// Touching or overlapping the goal wins; any trap that was hit loses.
    /// A win takes precedence when both happen in the same step.
    fn judge(&self) -> Outcome {
        let Some(player) = self.player() else {
            return Outcome::Playing;
        };
        let reached_goal = self
            .entity(self.goal)
            .is_some_and(|goal| goal.collisions.collided || player.overlaps(goal));
        if reached_goal {
            return Outcome::Won;
        }
        let hit_trap = self
            .entities
            .iter()
            .any(|e| e.kind == EntityKind::TrapPlatform && e.collisions.collided);
        if hit_trap {
            Outcome::Lost
        } else {
            Outcome::Playing
        }
    }

    fn finish(&mut self) {
        let (message, label) = match self.outcome {
            Outcome::Won => (self.win_message, "mission passed"),
            Outcome::Lost => (self.lose_message, "mission failed"),
            Outcome::Playing => return,
        };
        log::info!("Game over: {label}");
        if let Some(entity) = message.and_then(|id| self.entity_mut(id)) {
            entity.activate();
        }
        self.pin_player();
    }

    /// Freeze the lander back at its spawn point.
    fn pin_player(&mut self) {
        let spawn = self.spawn;
        if let Some(player) = self.player_mut() {
            player.movement = Vec3::ZERO;
            player.velocity = Vec3::ZERO;
            player.acceleration = Vec3::ZERO;
            player.position = spawn;
        }
    }

    /// Draw every active entity in arena order.
    pub fn render<R: SpriteRenderer + ?Sized>(&self, renderer: &mut R) {
        for entity in &self.entities {
            entity.render(renderer);
        }
    }
}
