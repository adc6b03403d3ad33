//! Scene drawing: net, paddles, ball, scores
//!
//! Read-only over the world; a skipped or failed frame leaves the game
//! untouched.

use super::vertex::colors;
use super::{Surface, TextAlign};
use crate::sim::{Side, World};

/// Net dash width, height and vertical period
const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 18.0;
const NET_PERIOD: f32 = 30.0;

const SCORE_SIZE: f32 = 40.0;
/// Score baseline from the top of the surface
const SCORE_Y: f32 = 60.0;

/// Draw one frame of the world
pub fn draw_frame(world: &World, surface: &mut impl Surface) {
    let g = &world.geometry;
    surface.clear();

    let net_x = g.width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < g.height {
        surface.fill_rect(net_x, y, NET_WIDTH, NET_DASH, colors::CENTER_LINE);
        y += NET_PERIOD;
    }

    for side in [Side::Left, Side::Right] {
        surface.fill_rect(
            world.paddle_x(side),
            world.paddle(side).y,
            g.paddle_width,
            g.paddle_height,
            colors::PADDLE,
        );
    }

    let center = world.ball.center(g);
    surface.fill_circle(center.x, center.y, g.ball_size / 2.0, colors::BALL);

    surface.draw_text(
        &world.score.left.to_string(),
        g.width / 4.0,
        SCORE_Y,
        SCORE_SIZE,
        colors::SCORE,
        TextAlign::Center,
    );
    surface.draw_text(
        &world.score.right.to_string(),
        g.width * 3.0 / 4.0,
        SCORE_Y,
        SCORE_SIZE,
        colors::SCORE,
        TextAlign::Center,
    );
}
