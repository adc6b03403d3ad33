//! Input bindings
//!
//! Host callbacks turn DOM/OS events into [`InputEvent`]s. Each event is a
//! synchronous, immediate write to the world or the held-key flags; the host
//! queues them as they arrive and applies the queue before the next step.

use super::state::{Mode, World};

/// Logical right-paddle buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a keyboard `code`; everything but the arrow keys is ignored
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Held-key flags for the right paddle (used in `Mode::Player`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn on_key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
        }
    }
}

/// One input occurrence, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer vertical coordinate relative to the surface top
    PointerMove { y: f32 },
    KeyDown(Key),
    KeyUp(Key),
    ModeChange(Mode),
}

impl World {
    /// Center the left paddle on the pointer, then clamp
    pub fn on_pointer_move(&mut self, y: f32) {
        self.left.y = y - self.geometry.paddle_height / 2.0;
        self.left.clamp(&self.geometry);
    }

    /// Switch who controls the right paddle and start over
    pub fn on_mode_change(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset_ball();
        self.score.reset();
        self.recenter_paddles();
        log::info!("Mode changed to {}", mode);
    }
}

/// Apply a single event
pub fn apply_event(world: &mut World, input: &mut InputState, event: InputEvent) {
    match event {
        InputEvent::PointerMove { y } => world.on_pointer_move(y),
        InputEvent::KeyDown(key) => input.on_key_down(key),
        InputEvent::KeyUp(key) => input.on_key_up(key),
        InputEvent::ModeChange(mode) => world.on_mode_change(mode),
    }
}

/// Apply queued events in arrival order, leaving the queue empty
pub fn drain_events(world: &mut World, input: &mut InputState, pending: &mut Vec<InputEvent>) {
    for event in pending.drain(..) {
        apply_event(world, input, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Geometry, Score};

    fn world() -> World {
        World::new(Geometry::default(), Mode::Ai, 3).unwrap()
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_code("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_code("KeyW"), None);
        assert_eq!(Key::from_code("ArrowLeft"), None);
    }

    #[test]
    fn test_key_flags() {
        let mut input = InputState::default();
        input.on_key_down(Key::Up);
        input.on_key_down(Key::Down);
        assert!(input.up && input.down);

        input.on_key_up(Key::Up);
        assert!(!input.up && input.down);
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let mut world = world();
        world.on_pointer_move(300.0);
        assert_eq!(world.left.y, 250.0);
    }

    #[test]
    fn test_pointer_clamps() {
        let mut world = world();
        world.on_pointer_move(10.0);
        assert_eq!(world.left.y, 0.0);

        world.on_pointer_move(495.0);
        assert_eq!(world.left.y, 400.0);
    }

    #[test]
    fn test_mode_change_resets() {
        let mut world = world();
        world.score = Score { left: 4, right: 9 };
        world.left.y = 12.0;
        world.right.y = 377.0;
        world.ball.pos.x = 5.0;

        world.on_mode_change(Mode::Player);

        assert_eq!(world.mode, Mode::Player);
        assert_eq!(world.score, Score::default());
        assert_eq!(world.left.y, 200.0);
        assert_eq!(world.right.y, 200.0);
        assert_eq!(world.ball.pos, world.geometry.centered_ball_pos());
    }

    #[test]
    fn test_drain_preserves_order() {
        let mut world = world();
        let mut input = InputState::default();
        let mut pending = vec![
            InputEvent::KeyDown(Key::Down),
            InputEvent::PointerMove { y: 100.0 },
            InputEvent::KeyUp(Key::Down),
            InputEvent::PointerMove { y: 150.0 },
        ];

        drain_events(&mut world, &mut input, &mut pending);

        assert!(pending.is_empty());
        assert!(!input.down);
        assert_eq!(world.left.y, 100.0);
    }
}
