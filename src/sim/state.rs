//! World state and core simulation types
//!
//! Everything the step and render functions read lives in [`World`].

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Reactive computer opponent
    #[default]
    Ai,
    /// Second human on the arrow keys
    Player,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ai => "ai",
            Mode::Player => "player",
        }
    }

    /// Do the arrow keys steer a paddle in this mode?
    pub fn uses_arrow_keys(&self) -> bool {
        matches!(self, Mode::Player)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(Mode::Ai),
            "player" => Ok(Mode::Player),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Surface size plus the fixed paddle/ball dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::standard(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl Geometry {
    /// Standard paddle and ball sizes on a surface of the given size (unvalidated)
    pub fn standard(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
        }
    }

    /// Standard geometry for a surface, rejecting sizes the game can't be played on
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let geometry = Self::standard(width, height);
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paddle_height.is_nan() || self.paddle_height <= 0.0 {
            return Err(ConfigError::PaddleHeight(self.paddle_height));
        }
        let min_width = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        let fits = self.width.is_finite()
            && self.height.is_finite()
            && self.width > min_width
            && self.height >= self.paddle_height
            && self.height > self.ball_size;
        if !fits {
            return Err(ConfigError::SurfaceTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// X of the left paddle's left edge
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// X of the right paddle's left edge
    pub fn right_paddle_x(&self) -> f32 {
        self.width - self.paddle_width - self.paddle_margin
    }

    /// Largest legal paddle offset
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Paddle offset that centers it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        (self.height - self.paddle_height) / 2.0
    }

    /// Top-left of a ball centered on the surface
    pub fn centered_ball_pos(&self) -> Vec2 {
        Vec2::new(
            (self.width - self.ball_size) / 2.0,
            (self.height - self.ball_size) / 2.0,
        )
    }
}

/// A vertical paddle; its x is fixed by side and geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge offset from the top of the surface
    pub y: f32,
}

impl Paddle {
    pub fn new(y: f32) -> Self {
        Self { y }
    }

    pub fn center_y(&self, geometry: &Geometry) -> f32 {
        self.y + geometry.paddle_height / 2.0
    }

    /// Keep the paddle fully on the surface
    pub fn clamp(&mut self, geometry: &Geometry) {
        self.y = self.y.clamp(0.0, geometry.max_paddle_y());
    }
}

/// The ball, tracked by the top-left of its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
}

impl Ball {
    pub fn center(&self, geometry: &Geometry) -> Vec2 {
        self.pos + Vec2::splat(geometry.ball_size / 2.0)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self, geometry: &Geometry) -> f32 {
        self.pos.x + geometry.ball_size
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self, geometry: &Geometry) -> f32 {
        self.pos.y + geometry.ball_size
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    pub geometry: Geometry,
    pub mode: Mode,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Frames simulated since startup
    pub frame: u64,
    /// Serve RNG (the only source of nondeterminism)
    rng: Pcg32,
}

impl World {
    /// Fresh world: paddles centered, ball served from center, scores zero
    ///
    /// Fails if `geometry` can't be played on.
    pub fn new(geometry: Geometry, mode: Mode, seed: u64) -> Result<Self, ConfigError> {
        geometry.validate()?;
        let mut world = Self {
            geometry,
            mode,
            left: Paddle::new(geometry.centered_paddle_y()),
            right: Paddle::new(geometry.centered_paddle_y()),
            ball: Ball {
                pos: geometry.centered_ball_pos(),
                vel: Vec2::ZERO,
            },
            score: Score::default(),
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        world.reset_ball();
        Ok(world)
    }

    /// Re-center the ball and serve it with a fresh random velocity
    pub fn reset_ball(&mut self) {
        let speed = self.geometry.ball_speed;
        let dir_x = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let u: f32 = self.rng.random_range(-1.0..=1.0);

        self.ball.pos = self.geometry.centered_ball_pos();
        self.ball.vel = Vec2::new(speed * dir_x, speed * u);
        log::debug!("Ball served with velocity ({:.2}, {:.2})", self.ball.vel.x, self.ball.vel.y);
    }

    pub fn recenter_paddles(&mut self) {
        let y = self.geometry.centered_paddle_y();
        self.left.y = y;
        self.right.y = y;
    }

    pub fn clamp_paddles(&mut self) {
        self.left.clamp(&self.geometry);
        self.right.clamp(&self.geometry);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.geometry.left_paddle_x(),
            Side::Right => self.geometry.right_paddle_x(),
        }
    }

    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.score.left += 1,
            Side::Right => self.score.right += 1,
        }
        log::info!("Point {:?}: {} - {}", side, self.score.left, self.score.right);
    }
}
