//! Startup settings
//!
//! Read once at startup from JSON (a `data-settings` attribute on the canvas
//! in the browser, an optional file natively). Every field has a default, so
//! `{}` is a valid settings document.

use serde::{Deserialize, Serialize};

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::error::ConfigError;
use crate::sim::{Geometry, Mode};

/// Drawing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderBackend {
    /// HTML canvas 2D context
    #[default]
    Canvas2d,
    /// wgpu triangles on a WebGPU canvas
    WebGpu,
}

impl RenderBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderBackend::Canvas2d => "canvas2d",
            RenderBackend::WebGpu => "webgpu",
        }
    }
}

/// How simulation steps line up with animation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Pacing {
    /// One step per animation frame; game speed follows the display rate
    #[default]
    PerFrame,
    /// Fixed number of steps per second regardless of display rate
    Fixed { hz: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Surface width in game units (canvas pixels)
    pub width: f32,
    /// Surface height in game units (canvas pixels)
    pub height: f32,
    /// Right paddle control at startup
    pub mode: Mode,
    /// Serve RNG seed; random when absent
    pub seed: Option<u64>,
    pub renderer: RenderBackend,
    pub pacing: Pacing,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            mode: Mode::Ai,
            seed: None,
            renderer: RenderBackend::Canvas2d,
            pacing: Pacing::PerFrame,
        }
    }
}

impl Settings {
    /// Parse and validate a settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Geometry for these settings, rejecting unplayable surfaces
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pacing == (Pacing::Fixed { hz: 0 }) {
            return Err(ConfigError::ZeroStepRate);
        }
        self.geometry().map(|_| ())
    }
}
