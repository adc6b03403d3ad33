//! Configuration errors
//!
//! The simulation has no failure modes of its own; everything that can go
//! wrong is caught while building the world from settings.

use std::fmt;

pub enum ConfigError {
    /// Settings JSON could not be parsed
    Parse(serde_json::Error),
    /// Paddle height must be positive (collide point divides by it)
    PaddleHeight(f32),
    /// Surface cannot fit both paddles and the ball
    SurfaceTooSmall { width: f32, height: f32 },
    /// Mode string other than "ai" or "player"
    UnknownMode(String),
    /// Fixed pacing needs at least one step per second
    ZeroStepRate,
}

impl ConfigError {
    fn message(&self) -> String {
        match self {
            ConfigError::Parse(e) => format!("Failed to parse settings: {}", e),
            ConfigError::PaddleHeight(h) => {
                format!("Paddle height must be positive, got {}", h)
            }
            ConfigError::SurfaceTooSmall { width, height } => {
                format!("Surface {}x{} is too small for the paddles and ball", width, height)
            }
            ConfigError::UnknownMode(mode) => {
                format!("Unknown mode \"{}\" (expected \"ai\" or \"player\")", mode)
            }
            ConfigError::ZeroStepRate => "Fixed pacing rate must be at least 1 step per second".to_string(),
        }
    }
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::PaddleHeight(0.0);
        assert_eq!(err.to_string(), "Paddle height must be positive, got 0");

        let err = ConfigError::UnknownMode("bot".to_string());
        assert!(err.to_string().contains("\"bot\""));
    }

    #[test]
    fn test_parse_error_has_source() {
        use std::error::Error;

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to parse settings"));
    }
}
