use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

use lander::systems::ControlInput;

/// Keyboard state gathered once per frame.
pub struct InputState {
    pub keys: HashSet<Scancode>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            quit: false,
        }
    }

    /// Drain pending events for quit requests, then snapshot the keys SDL
    /// reports as held right now.
    pub fn update(&mut self, event_pump: &mut EventPump) {
        for event in event_pump.poll_iter() {
            self.handle_event(&event);
        }
        self.set_held(event_pump.keyboard_state().pressed_scancodes());
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Quit { .. }
        | Event::KeyDown {
            scancode: Some(Scancode::Escape | Scancode::Q),
            ..
        } = event
        {
            self.quit = true;
        }
    }

    fn set_held(&mut self, pressed: impl IntoIterator<Item = Scancode>) {
        self.keys.clear();
        self.keys.extend(pressed);
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The arrow keys the lander responds to.
    pub fn controls(&self) -> ControlInput {
        ControlInput {
            left: self.is_key_held(Scancode::Left),
            right: self.is_key_held(Scancode::Right),
            up: self.is_key_held(Scancode::Up),
        }
    }
}
