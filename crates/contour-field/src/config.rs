//! Field simulation configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use contour_types::{constants, ContourError, ContourResult};

/// Configuration for the deformation field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Distance between neighboring grid points.
    pub spacing: f32,

    /// Position of the grid's top-left point.
    pub origin: Vec2,

    /// Number of force sources (one per tracked landmark).
    pub source_count: usize,

    /// Influence diameter of each force source. A source deforms a grid
    /// point when their squared distance is below `(radius / 2)²`.
    pub source_radius: f32,

    /// Loop period of every sample ring, in whole seconds.
    pub loop_secs: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rows: constants::DEFAULT_GRID_ROWS,
            cols: constants::DEFAULT_GRID_COLS,
            spacing: constants::DEFAULT_GRID_SPACING,
            origin: Vec2::ZERO,
            source_count: constants::LANDMARKS_PER_HAND,
            source_radius: constants::DEFAULT_SOURCE_RADIUS,
            loop_secs: constants::DEFAULT_FIELD_LOOP_SECS,
        }
    }
}

impl FieldConfig {
    /// Creates a small config for tests: a 2×2 grid, one source,
    /// one-second loop.
    pub fn minimal() -> Self {
        Self {
            rows: 2,
            cols: 2,
            spacing: 10.0,
            source_count: 1,
            loop_secs: 1,
            ..Self::default()
        }
    }

    /// Validates dimensional invariants.
    pub fn validate(&self) -> ContourResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ContourError::InvalidConfig(format!(
                "grid must be non-empty ({}×{})",
                self.rows, self.cols
            )));
        }
        if self.loop_secs == 0 {
            return Err(ContourError::InvalidConfig(
                "loop period must be at least one second".to_string(),
            ));
        }
        if !(self.source_radius > 0.0) {
            return Err(ContourError::InvalidConfig(format!(
                "source radius must be positive, got {}",
                self.source_radius
            )));
        }
        Ok(())
    }
}
