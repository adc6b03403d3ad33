//! Simulation module
//!
//! All gameplay logic lives here:
//! - One step per call, no wall-clock time inside the step
//! - Seeded RNG only (ball serves)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod opponent;
pub mod pacing;
pub mod state;
pub mod tick;

pub use collision::{PaddleHit, bounce_off_paddle, collide_point, deflect};
pub use input::{InputEvent, InputState, Key, apply_event, drain_events};
pub use pacing::FrameDriver;
pub use state::{Ball, Geometry, Mode, Paddle, Score, Side, World};
pub use tick::{StepReport, step};
