use std::path::Path;

use anyhow::Context;
use lander::scene::{load_lunar_level, LevelTextures};
use lander::time::FrameTimer;
use lander::{Game, Outcome};
use sdl2::Sdl;

use crate::engine::input::InputState;
use crate::engine::window::GameWindow;
use crate::renderer::Renderer;

const PLAYER_TEXTURE: &str = "witch.png";
const TRAP_TEXTURE: &str = "lava.jpg";
const GOAL_TEXTURE: &str = "rocky.png";
const WIN_MESSAGE_TEXTURE: &str = "mission_passed.png";
const LOSE_MESSAGE_TEXTURE: &str = "mission_failed.png";

pub struct LanderApp {
    game: Game,
    renderer: Renderer,
}

impl LanderApp {
    /// Set up GL state, load every sprite from `assets` and build the level.
    /// Needs a current GL context.
    pub fn new(assets: &Path) -> anyhow::Result<Self> {
        let mut renderer = Renderer::init().context("failed to initialise renderer")?;

        let mut load = |file: &str| {
            let path = assets.join(file);
            renderer
                .load_texture(&path)
                .with_context(|| format!("failed to load texture {}", path.display()))
        };
        let textures = LevelTextures {
            player: load(PLAYER_TEXTURE)?,
            trap: load(TRAP_TEXTURE)?,
            goal: load(GOAL_TEXTURE)?,
            win_message: load(WIN_MESSAGE_TEXTURE)?,
            lose_message: load(LOSE_MESSAGE_TEXTURE)?,
        };
        log::info!("Loaded sprites from {}", assets.display());

        let game = Game::new(load_lunar_level(&textures));
        Ok(Self { game, renderer })
    }

    pub fn run(&mut self, sdl: &Sdl, window: &GameWindow) -> anyhow::Result<()> {
        let mut event_pump = sdl
            .event_pump()
            .map_err(anyhow::Error::msg)
            .context("failed to get event pump")?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();
        let mut outcome = self.game.outcome();

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.should_quit() {
                log::info!("Quit requested");
                break;
            }

            self.game.apply_controls(&input.controls());
            let now = self.game.advance(timer.dt);
            if now != outcome {
                log::debug!("Outcome changed: {outcome:?} -> {now:?}");
                outcome = now;
            }

            self.renderer.begin_frame();
            self.game.render(&mut self.renderer);
            window.swap();
        }

        if outcome == Outcome::Playing {
            log::info!("Left mid-flight");
        }
        Ok(())
    }
}
