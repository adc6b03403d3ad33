//! Frame pacing
//!
//! Decides how many simulation steps each animation frame runs. The step
//! itself never sees time; speeds are in units per step.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::settings::Pacing;

#[derive(Debug, Clone)]
pub struct FrameDriver {
    pacing: Pacing,
    accumulator: f32,
}

impl FrameDriver {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            accumulator: 0.0,
        }
    }

    /// Number of steps to run for a frame that took `dt` seconds
    pub fn steps_for(&mut self, dt: f32) -> u32 {
        match self.pacing {
            Pacing::PerFrame => 1,
            Pacing::Fixed { hz } => {
                let step_dt = 1.0 / hz as f32;
                self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

                let mut steps = 0;
                while self.accumulator >= step_dt && steps < MAX_SUBSTEPS {
                    self.accumulator -= step_dt;
                    steps += 1;
                }
                // Drop whatever the substep cap left behind
                if steps == MAX_SUBSTEPS {
                    self.accumulator = 0.0;
                }
                steps
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_frame_always_one() {
        let mut driver = FrameDriver::new(Pacing::PerFrame);
        assert_eq!(driver.steps_for(0.0), 1);
        assert_eq!(driver.steps_for(0.5), 1);
    }

    #[test]
    fn test_fixed_accumulates() {
        let mut driver = FrameDriver::new(Pacing::Fixed { hz: 60 });
        // Half a step, then another half
        assert_eq!(driver.steps_for(1.0 / 120.0), 0);
        assert_eq!(driver.steps_for(1.0 / 120.0 + 1e-6), 1);
        // A 144 Hz display still averages out near 60 steps per second
        let total: u32 = (0..144).map(|_| driver.steps_for(1.0 / 144.0)).sum();
        assert!((59..=61).contains(&total));
    }

    #[test]
    fn test_fixed_caps_substeps() {
        let mut driver = FrameDriver::new(Pacing::Fixed { hz: 240 });
        assert_eq!(driver.steps_for(5.0), MAX_SUBSTEPS);
        assert_eq!(driver.steps_for(0.0), 0);
    }
}
