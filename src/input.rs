use std::collections::HashSet;

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

const EXIT_KEY: KeyCode = KeyCode::Escape;
const WIREFRAME_KEY: KeyCode = KeyCode::KeyF;

/// Keys currently held down.
#[derive(Default, Debug)]
pub struct KeyState(HashSet<KeyCode>);

impl KeyState {
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.0.contains(&key)
    }

    /// Returns whether the key was already down.
    pub fn set(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            !self.0.insert(key)
        } else {
            self.0.remove(&key)
        }
    }
}

/// Input gathered between two frames.
#[derive(Default, Debug)]
pub struct InputState {
    keys: KeyState,
    mouse_delta: (f32, f32),
    wireframe: bool,
    exit_requested: bool,
}

impl InputState {
    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn process_input(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_key(key, event.state == ElementState::Pressed);
        }
    }

    pub fn process_key(&mut self, key: KeyCode, pressed: bool) {
        let was_down = self.keys.set(key, pressed);
        if !pressed || was_down {
            return;
        }

        match key {
            EXIT_KEY => self.exit_requested = true,
            WIREFRAME_KEY => {
                self.wireframe = !self.wireframe;
                log::info!("wireframe {}", if self.wireframe { "on" } else { "off" });
            }
            _ => (),
        }
    }

    /// Raw device motion; screen y grows downwards so it is flipped to make up positive.
    #[allow(clippy::cast_possible_truncation)]
    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse_delta.0 += dx as f32;
        self.mouse_delta.1 -= dy as f32;
    }

    /// Motion accumulated since the last call.
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_held_keys() {
        let mut input = InputState::default();
        input.process_key(KeyCode::KeyW, true);
        assert!(input.keys().is_pressed(KeyCode::KeyW));

        input.process_key(KeyCode::KeyW, false);
        assert!(!input.keys().is_pressed(KeyCode::KeyW));
    }

    #[test]
    fn wireframe_toggles_once_per_press() {
        let mut input = InputState::default();
        input.process_key(WIREFRAME_KEY, true);
        // key repeat while held
        input.process_key(WIREFRAME_KEY, true);
        assert!(input.wireframe());

        input.process_key(WIREFRAME_KEY, false);
        input.process_key(WIREFRAME_KEY, true);
        assert!(!input.wireframe());
    }

    #[test]
    fn escape_requests_exit() {
        let mut input = InputState::default();
        input.process_key(KeyCode::KeyW, true);
        assert!(!input.exit_requested());

        input.process_key(EXIT_KEY, true);
        assert!(input.exit_requested());
    }

    #[test]
    fn mouse_delta_accumulates_and_resets() {
        let mut input = InputState::default();
        input.process_mouse_motion(3.0, 2.0);
        input.process_mouse_motion(1.0, -5.0);

        assert_eq!(input.take_mouse_delta(), (4.0, 3.0));
        assert_eq!(input.take_mouse_delta(), (0.0, 0.0));
    }
}
