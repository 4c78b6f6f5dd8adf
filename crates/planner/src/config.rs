//! Configuration for coverage planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_coverage_core::{Error, Result};

/// Configuration parameters for coverage planning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverageConfig {
    /// Side length of one grid cell, in the same units as the geometry.
    pub cell_size: f64,

    /// Robot travel speed (units/s). Used only to convert distance into time.
    pub speed: f64,

    /// Position every partition's path starts from.
    /// Default is (0.0, 0.0).
    pub start_position: (f64, f64),

    /// Requested number of vertical partitions.
    /// Snapping to the cell grid may yield fewer.
    pub partition_count: usize,

    /// Plan partitions on the rayon thread pool.
    /// Results are identical to a sequential run.
    pub parallel: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            cell_size: 2.0,
            speed: 4.0,
            start_position: (0.0, 0.0),
            partition_count: 1,
            parallel: false,
        }
    }
}

impl CoverageConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell size.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the travel speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the start position.
    pub fn with_start_position(mut self, x: f64, y: f64) -> Self {
        self.start_position = (x, y);
        self
    }

    /// Sets the requested partition count.
    pub fn with_partition_count(mut self, count: usize) -> Self {
        self.partition_count = count;
        self
    }

    /// Enables or disables parallel partition planning.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks every scalar parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a non-positive or non-finite
    /// cell size or speed, a zero partition count, or a non-finite start.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cell_size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        if self.partition_count == 0 {
            return Err(Error::InvalidConfig(
                "partition_count must be at least 1".into(),
            ));
        }
        let (x, y) = self.start_position;
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "start_position must be finite, got ({}, {})",
                x, y
            )));
        }
        Ok(())
    }
}
