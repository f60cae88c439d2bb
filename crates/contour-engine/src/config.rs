//! Engine configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use contour_field::FieldConfig;
use contour_types::{constants, ContourError, ContourResult};

/// Configuration for one engine session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Recording loop period in whole seconds.
    pub loop_secs: u32,

    /// Scale applied to normalized landmark coordinates before they
    /// drive the deformation field. Pose models report positions in a
    /// unit-ish space; the field lives in host canvas space.
    pub landmark_scale: f32,

    /// Offset added after scaling (typically the canvas center).
    pub landmark_offset: Vec2,

    /// Deformation field parameters.
    pub field: FieldConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            loop_secs: constants::DEFAULT_RECORD_LOOP_SECS,
            landmark_scale: 2000.0,
            landmark_offset: Vec2::ZERO,
            field: FieldConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a config for tests: one-second loop, tiny field,
    /// identity landmark mapping.
    pub fn minimal() -> Self {
        Self {
            loop_secs: 1,
            landmark_scale: 1.0,
            field: FieldConfig::minimal(),
            ..Self::default()
        }
    }

    /// Validates the config, including the nested field config.
    pub fn validate(&self) -> ContourResult<()> {
        if self.loop_secs == 0 {
            return Err(ContourError::InvalidConfig(
                "recording loop period must be at least one second".to_string(),
            ));
        }
        self.field.validate()
    }
}
