//! Right paddle control policies

use super::input::InputState;
use super::state::{Geometry, Mode, World};
use crate::consts::{AI_DEAD_ZONE, AI_SPEED_FACTOR};

/// Reactive AI: chase the ball's current height, with a dead-zone so the
/// paddle doesn't jitter once it's lined up. Never predicts trajectory.
pub fn ai_offset(paddle_y: f32, target_y: f32, geometry: &Geometry) -> f32 {
    let ai_center = paddle_y + geometry.paddle_height / 2.0;
    let step = geometry.paddle_speed * AI_SPEED_FACTOR;

    if ai_center < target_y - AI_DEAD_ZONE {
        step
    } else if ai_center > target_y + AI_DEAD_ZONE {
        -step
    } else {
        0.0
    }
}

/// Second player on the arrow keys; holding both cancels out
pub fn keys_offset(input: &InputState, geometry: &Geometry) -> f32 {
    let mut offset = 0.0;
    if input.up {
        offset -= geometry.paddle_speed;
    }
    if input.down {
        offset += geometry.paddle_speed;
    }
    offset
}

/// Move the right paddle according to the current mode (unclamped)
pub fn drive_right_paddle(world: &mut World, input: &InputState) {
    let offset = match world.mode {
        Mode::Ai => {
            let target = world.ball.center(&world.geometry).y;
            ai_offset(world.right.y, target, &world.geometry)
        }
        Mode::Player => keys_offset(input, &world.geometry),
    };
    world.right.y += offset;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_dead_zone() {
        let g = Geometry::default();
        // Paddle center at 250
        assert_eq!(ai_offset(200.0, 250.0, &g), 0.0);
        assert_eq!(ai_offset(200.0, 260.0, &g), 0.0);
        assert_eq!(ai_offset(200.0, 240.0, &g), 0.0);
    }

    #[test]
    fn test_ai_chases() {
        let g = Geometry::default();
        let step = 7.0 * 0.7;
        assert_eq!(ai_offset(200.0, 261.0, &g), step);
        assert_eq!(ai_offset(200.0, 239.0, &g), -step);
    }

    #[test]
    fn test_keys() {
        let g = Geometry::default();
        let mut input = InputState::default();
        assert_eq!(keys_offset(&input, &g), 0.0);

        input.up = true;
        assert_eq!(keys_offset(&input, &g), -7.0);

        input.down = true;
        assert_eq!(keys_offset(&input, &g), 0.0);

        input.up = false;
        assert_eq!(keys_offset(&input, &g), 7.0);
    }
}
