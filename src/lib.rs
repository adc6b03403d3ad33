//! Canvas Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Frame-coupled simulation (ball, paddles, scoring, opponent)
//! - `renderer`: Drawing surfaces (canvas 2D, WebGPU, recorded commands)
//! - `settings`: Startup configuration loaded from JSON
//! - `error`: Configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Pacing, RenderBackend, Settings};

/// Game configuration constants
pub mod consts {
    /// Default drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal gap between each paddle and its side of the surface
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// Paddle travel per frame (units)
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball bounding box edge length
    pub const BALL_SIZE: f32 = 14.0;
    /// Ball base speed per frame (units)
    pub const BALL_SPEED: f32 = 6.0;

    /// AI paddle moves at this fraction of PADDLE_SPEED
    pub const AI_SPEED_FACTOR: f32 = 0.7;
    /// AI holds still while within this distance of the ball center
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Largest deflection off a paddle edge (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Frame dt cap for fixed pacing (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
