//! Per-frame simulation step
//!
//! Advances the world by exactly one frame. The rule order is fixed: move,
//! walls, left paddle, right paddle, scoring, opponent, clamp.

use super::collision::{PaddleHit, bounce_off_paddle};
use super::input::InputState;
use super::opponent::drive_right_paddle;
use super::state::{Side, World};

/// What happened during one step (for logging and effects)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub wall_bounce: bool,
    pub left_hit: Option<PaddleHit>,
    pub right_hit: Option<PaddleHit>,
    /// Side credited with a point this step
    pub scored: Option<Side>,
}

/// Advance the game by one frame
pub fn step(world: &mut World, input: &InputState) -> StepReport {
    let mut report = StepReport::default();
    let geometry = world.geometry;
    world.frame += 1;

    world.ball.pos += world.ball.vel;

    // Top & bottom walls: flip only, the ball may overlap the wall for a frame
    if world.ball.top() <= 0.0 || world.ball.bottom(&geometry) >= geometry.height {
        world.ball.vel.y = -world.ball.vel.y;
        report.wall_bounce = true;
    }

    report.left_hit = bounce_off_paddle(
        &mut world.ball,
        &world.left,
        geometry.left_paddle_x(),
        Side::Left,
        &geometry,
    );
    report.right_hit = bounce_off_paddle(
        &mut world.ball,
        &world.right,
        geometry.right_paddle_x(),
        Side::Right,
        &geometry,
    );
    for hit in report.left_hit.iter().chain(report.right_hit.iter()) {
        log::debug!("{:?} paddle hit at {:.2}", hit.side, hit.collide_point);
    }

    // Scoring: both checks run, a ball can't be past both edges at once
    if world.ball.right(&geometry) < 0.0 {
        world.award_point(Side::Right);
        world.reset_ball();
        report.scored = Some(Side::Right);
    }
    if world.ball.left() > geometry.width {
        world.award_point(Side::Left);
        world.reset_ball();
        report.scored = Some(Side::Left);
    }

    drive_right_paddle(world, input);
    world.clamp_paddles();

    report
}
