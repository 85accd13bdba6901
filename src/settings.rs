//! Options for a map generation cycle

use crate::constants::*;
use crate::error::MapError;
use crate::grid::Location;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to generate one map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Where both paths begin
    pub start: Location,
    /// Where both paths end
    pub end: Location,
    /// Chance that a generation step only proposes moves toward the goal, in `[0, 1]`
    pub bias_probability: f64,
    /// Chance that an unprotected cell becomes a wall, in `[0, 1]`
    pub wall_probability: f64,
    /// Path generation gives up after this many steps per cell
    pub step_budget_multiplier: usize,
    /// Fixed random seed; fresh entropy is used when `None`
    pub seed: Option<u64>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: DEFAULT_START,
            end: DEFAULT_END,
            bias_probability: DEFAULT_BIAS_PROBABILITY,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            step_budget_multiplier: DEFAULT_STEP_BUDGET_MULTIPLIER,
            seed: None,
        }
    }
}

impl MapSettings {
    /// Settings for a `width` x `height` grid from `start` to `end`, other options at defaults
    pub fn new(width: usize, height: usize, start: Location, end: Location) -> Self {
        Self {
            width,
            height,
            start,
            end,
            ..Default::default()
        }
    }

    /// Use a fixed random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every option, returning [`MapError::InvalidConfiguration`] for the first bad one.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::settings::MapSettings;
    ///
    /// assert!(MapSettings::default().validate().is_ok());
    ///
    /// let settings = MapSettings {
    ///     wall_probability: 1.5,
    ///     ..Default::default()
    /// };
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MapError> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, p) in [("start", self.start), ("end", self.end)] {
            if p.x >= self.width || p.y >= self.height {
                return Err(MapError::InvalidConfiguration(format!(
                    "{} {} is outside the {}x{} grid",
                    name, p, self.width, self.height
                )));
            }
        }
        check_probability("bias_probability", self.bias_probability)?;
        check_probability("wall_probability", self.wall_probability)?;
        if self.step_budget_multiplier == 0 {
            return Err(MapError::InvalidConfiguration(
                "step_budget_multiplier must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Maximum number of steps path generation may take
    pub fn step_budget(&self) -> usize {
        self.step_budget_multiplier
            .saturating_mul(self.width)
            .saturating_mul(self.height)
    }

    /// Parses settings from JSON; missing fields take their default values.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let settings: Self = serde_json::from_str(json).context("Malformed map settings")?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

/// Fails with [`MapError::InvalidConfiguration`] if `value` is NaN or outside `[0, 1]`.
pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), MapError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MapError::InvalidConfiguration(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
