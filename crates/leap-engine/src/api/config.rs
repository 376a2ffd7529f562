use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;

/// How the grounded flag is derived at the end of each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundingPolicy {
    /// Grounded only when this frame's vertical pass snapped the entity down
    /// onto a structure top.
    #[default]
    ActiveLanding,
    /// Also grounded when the entity's bottom edge rests exactly on a
    /// structure top, whatever the sign of its vertical velocity.
    RestingContact,
}

/// World setup, supplied once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in world units.
    pub world_width: f32,
    /// World height in world units.
    pub world_height: f32,
    /// Visible width of the camera.
    pub viewport_width: f32,
    /// Visible height of the camera.
    pub viewport_height: f32,
    /// Host seconds per simulation frame (default: 1/60).
    pub fixed_dt: f32,
    /// Most frames simulated for one host tick before the clock drops time.
    pub max_catch_up_steps: u32,
    pub grounding: GroundingPolicy,
    /// Keep entities inside the world rectangle after each frame.
    pub confine_to_world: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: 2400.0,
            world_height: 600.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            fixed_dt: 1.0 / 60.0,
            max_catch_up_steps: 10,
            grounding: GroundingPolicy::ActiveLanding,
            confine_to_world: false,
        }
    }
}

impl WorldConfig {
    /// Reject sizes and timings the world cannot run with.
    /// A world smaller than the viewport is allowed; the camera pins to 0 on that axis.
    pub fn validate(&self) -> Result<(), LevelError> {
        let dims = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("fixed_dt", self.fixed_dt),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(LevelError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.max_catch_up_steps == 0 {
            return Err(LevelError::InvalidConfig(
                "max_catch_up_steps must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
