//! Ball-vs-paddle collision and spin deflection
//!
//! A hit snaps the ball flush against the paddle face and sends it back at an
//! angle that depends on where it struck: dead center returns it flat, the
//! ends send it off at up to 45 degrees.

use glam::Vec2;

use super::state::{Ball, Geometry, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Result of a paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    pub side: Side,
    /// Normalized offset of the ball center from the paddle center; about -1..1,
    /// a little past that on corner hits
    pub collide_point: f32,
}

/// Does the ball's leading edge sit inside the paddle's span?
///
/// The left paddle tests the ball's left edge, the right paddle its right
/// edge. Vertical spans must overlap (touching counts).
pub fn touches_paddle(ball: &Ball, paddle: &Paddle, paddle_x: f32, side: Side, geometry: &Geometry) -> bool {
    let edge = match side {
        Side::Left => ball.left(),
        Side::Right => ball.right(geometry),
    };
    let within_x = edge >= paddle_x && edge <= paddle_x + geometry.paddle_width;
    let within_y =
        ball.bottom(geometry) >= paddle.y && ball.top() <= paddle.y + geometry.paddle_height;
    within_x && within_y
}

/// Where on the paddle the ball struck: -1 top end, 0 center, 1 bottom end
///
/// Not clamped. A ball overlapping a paddle corner reaches about ±1.14 and
/// leaves a little steeper than 45 degrees.
pub fn collide_point(ball: &Ball, paddle: &Paddle, geometry: &Geometry) -> f32 {
    let offset = ball.center(geometry).y - paddle.center_y(geometry);
    offset / (geometry.paddle_height / 2.0)
}

/// Outgoing velocity for a hit at `collide_point`, always heading away from `side`
pub fn deflect(collide_point: f32, side: Side, speed: f32) -> Vec2 {
    let angle = collide_point * MAX_BOUNCE_ANGLE;
    let dir_x = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    Vec2::new(dir_x * speed * angle.cos(), speed * angle.sin())
}

/// Test the ball against one paddle and bounce it if they touch
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    paddle_x: f32,
    side: Side,
    geometry: &Geometry,
) -> Option<PaddleHit> {
    if !touches_paddle(ball, paddle, paddle_x, side, geometry) {
        return None;
    }

    ball.pos.x = match side {
        Side::Left => paddle_x + geometry.paddle_width,
        Side::Right => paddle_x - geometry.ball_size,
    };
    let collide_point = collide_point(ball, paddle, geometry);
    ball.vel = deflect(collide_point, side, geometry.ball_speed);

    Some(PaddleHit { side, collide_point })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn geometry() -> Geometry {
        Geometry::default()
    }

    #[test]
    fn test_center_hit_is_flat() {
        let vel = deflect(0.0, Side::Left, 6.0);
        assert_eq!(vel, Vec2::new(6.0, 0.0));

        let vel = deflect(0.0, Side::Right, 6.0);
        assert_eq!(vel, Vec2::new(-6.0, 0.0));
    }

    #[test]
    fn test_edge_hit_is_45_degrees() {
        let vel = deflect(1.0, Side::Left, 6.0);
        assert!(vel.x > 0.0);
        assert!((vel.x - vel.y).abs() < EPS);
        assert!((vel.length() - 6.0).abs() < EPS);

        let vel = deflect(-1.0, Side::Right, 6.0);
        assert!(vel.x < 0.0);
        assert!(vel.y < 0.0);
        assert!((vel.x - vel.y).abs() < EPS);
    }

    #[test]
    fn test_collide_point_at_corners() {
        let g = geometry();
        let paddle = Paddle::new(200.0);
        // Bottom edge grazing the paddle top: center 57 above paddle center
        let ball = Ball {
            pos: Vec2::new(30.0, 186.0),
            vel: Vec2::ZERO,
        };
        assert!((collide_point(&ball, &paddle, &g) + 1.14).abs() < EPS);

        // Top edge grazing the paddle bottom
        let ball = Ball {
            pos: Vec2::new(30.0, 300.0),
            vel: Vec2::ZERO,
        };
        assert!((collide_point(&ball, &paddle, &g) - 1.14).abs() < EPS);

        let ball = Ball {
            pos: Vec2::new(30.0, 243.0),
            vel: Vec2::ZERO,
        };
        assert_eq!(collide_point(&ball, &paddle, &g), 0.0);
    }

    #[test]
    fn test_corner_hit_is_steeper_than_45() {
        let g = geometry();
        let paddle = Paddle::new(200.0);
        let mut ball = Ball {
            pos: Vec2::new(25.0, 186.0),
            vel: Vec2::new(-6.0, 3.0),
        };
        let hit = bounce_off_paddle(&mut ball, &paddle, 20.0, Side::Left, &g);

        assert!(hit.is_some());
        let expected = -6.0 * (1.14 * MAX_BOUNCE_ANGLE).sin();
        assert!((ball.vel.y - expected).abs() < EPS);
        assert!((ball.vel.y + 4.6826).abs() < 1e-3);
        assert!(ball.vel.x > 0.0);
        assert!((ball.vel.length() - 6.0).abs() < EPS);
    }

    #[test]
    fn test_left_paddle_span() {
        let g = geometry();
        let paddle = Paddle::new(200.0);
        let mut ball = Ball {
            pos: Vec2::new(32.0, 243.0),
            vel: Vec2::new(-6.0, 0.0),
        };
        assert!(touches_paddle(&ball, &paddle, 20.0, Side::Left, &g));

        // Past the paddle's back face
        ball.pos.x = 19.0;
        assert!(!touches_paddle(&ball, &paddle, 20.0, Side::Left, &g));

        // Vertically clear of the paddle
        ball.pos = Vec2::new(25.0, 100.0);
        assert!(!touches_paddle(&ball, &paddle, 20.0, Side::Left, &g));

        // Bottom edge just grazing the paddle top
        ball.pos.y = 186.0;
        assert!(touches_paddle(&ball, &paddle, 20.0, Side::Left, &g));
    }

    #[test]
    fn test_bounce_snaps_to_face() {
        let g = geometry();
        let paddle = Paddle::new(200.0);
        let mut ball = Ball {
            pos: Vec2::new(760.0, 243.0),
            vel: Vec2::new(6.0, 2.0),
        };
        let hit = bounce_off_paddle(&mut ball, &paddle, g.right_paddle_x(), Side::Right, &g);

        let hit = hit.expect("ball overlaps right paddle");
        assert_eq!(hit.side, Side::Right);
        assert_eq!(ball.pos.x, 754.0);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_miss_leaves_ball_alone() {
        let g = geometry();
        let paddle = Paddle::new(0.0);
        let mut ball = Ball {
            pos: Vec2::new(26.0, 400.0),
            vel: Vec2::new(-6.0, 1.0),
        };
        let before = ball;
        assert!(bounce_off_paddle(&mut ball, &paddle, 20.0, Side::Left, &g).is_none());
        assert_eq!(ball, before);
    }
}
