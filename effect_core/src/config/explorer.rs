//! Explorer defaults: parameters of both views and the surface camera

use super::ConfigError;
use crate::types::constants::{
    DEFAULT_BASE_EFFECT, DEFAULT_HR_START, DEFAULT_HR_STOP, DEFAULT_MAX_ENEMY_RES,
    DEFAULT_MIN_ENEMY_RES, DEFAULT_SAMPLES,
};
use crate::types::{GridParams, HitRateRange, SweepParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level explorer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl ExplorerConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no sweep can be drawn from.
    ///
    /// Formula inputs themselves are not range-checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line.samples == 0 {
            return Err(ConfigError::ValidationError(
                "line.samples must be at least 1".to_string(),
            ));
        }

        let bounds = [
            ("line.hr_start", self.line.hr_start),
            ("line.hr_stop", self.line.hr_stop),
            ("surface.min_enemy_res", self.surface.min_enemy_res),
            ("surface.max_enemy_res", self.surface.max_enemy_res),
            ("view.elevation", self.view.elevation),
            ("view.azimuth", self.view.azimuth),
            ("view.param_step", self.view.param_step),
        ];
        for (name, value) in bounds {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Defaults for the line view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    #[serde(default = "default_base_effect")]
    pub base_effect: f64,
    #[serde(default)]
    pub enemy_resistance: f64,
    #[serde(default)]
    pub debuff_resistance: f64,
    #[serde(default = "default_hr_start")]
    pub hr_start: f64,
    #[serde(default = "default_hr_stop")]
    pub hr_stop: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl Default for LineConfig {
    fn default() -> Self {
        LineConfig {
            base_effect: DEFAULT_BASE_EFFECT,
            enemy_resistance: 0.0,
            debuff_resistance: 0.0,
            hr_start: DEFAULT_HR_START,
            hr_stop: DEFAULT_HR_STOP,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl LineConfig {
    pub fn sweep_params(&self) -> SweepParams {
        SweepParams {
            base_effect: self.base_effect,
            enemy_resistance: self.enemy_resistance,
            debuff_resistance: self.debuff_resistance,
            range: HitRateRange::new(self.hr_start, self.hr_stop),
            samples: self.samples,
        }
    }
}

/// Defaults for the surface view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_base_effect")]
    pub base_effect: f64,
    #[serde(default = "default_min_enemy_res")]
    pub min_enemy_res: f64,
    #[serde(default = "default_max_enemy_res")]
    pub max_enemy_res: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            base_effect: DEFAULT_BASE_EFFECT,
            min_enemy_res: DEFAULT_MIN_ENEMY_RES,
            max_enemy_res: DEFAULT_MAX_ENEMY_RES,
        }
    }
}

impl SurfaceConfig {
    pub fn grid_params(&self) -> GridParams {
        GridParams {
            base_effect: self.base_effect,
            min_enemy_res: self.min_enemy_res,
            max_enemy_res: self.max_enemy_res,
        }
    }
}

/// Surface camera and interactive step size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Camera elevation in degrees
    #[serde(default = "default_elevation")]
    pub elevation: f64,
    /// Camera azimuth in degrees
    #[serde(default = "default_azimuth")]
    pub azimuth: f64,
    /// Increment used when adjusting a parameter interactively
    #[serde(default = "default_param_step")]
    pub param_step: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            elevation: default_elevation(),
            azimuth: default_azimuth(),
            param_step: default_param_step(),
        }
    }
}

fn default_base_effect() -> f64 {
    DEFAULT_BASE_EFFECT
}
fn default_hr_start() -> f64 {
    DEFAULT_HR_START
}
fn default_hr_stop() -> f64 {
    DEFAULT_HR_STOP
}
fn default_samples() -> usize {
    DEFAULT_SAMPLES
}
fn default_min_enemy_res() -> f64 {
    DEFAULT_MIN_ENEMY_RES
}
fn default_max_enemy_res() -> f64 {
    DEFAULT_MAX_ENEMY_RES
}
fn default_elevation() -> f64 {
    25.0
}
fn default_azimuth() -> f64 {
    -160.0
}
fn default_param_step() -> f64 {
    0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert!((config.line.hr_stop - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.line.samples, 50);
        assert!((config.surface.max_enemy_res - 0.4).abs() < f64::EPSILON);
        assert!((config.view.elevation - 25.0).abs() < f64::EPSILON);
        assert!((config.view.azimuth + 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = ExplorerConfig::parse("").unwrap();
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let toml = r#"
[line]
base_effect = 0.5
enemy_resistance = 0.2

[view]
azimuth = 30.0
"#;

        let config = ExplorerConfig::parse(toml).unwrap();
        assert!((config.line.base_effect - 0.5).abs() < f64::EPSILON);
        assert!((config.line.enemy_resistance - 0.2).abs() < f64::EPSILON);
        assert!((config.line.hr_stop - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.line.samples, 50);
        assert!((config.view.azimuth - 30.0).abs() < f64::EPSILON);
        assert!((config.view.elevation - 25.0).abs() < f64::EPSILON);
        assert_eq!(config.surface, SurfaceConfig::default());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = ExplorerConfig::parse("[line]\nsamples = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let err = ExplorerConfig::parse("[surface]\nmax_enemy_res = nan\n").unwrap_err();
        assert!(err.to_string().contains("surface.max_enemy_res"));
    }

    #[test]
    fn test_bad_toml() {
        let err = ExplorerConfig::parse("[line\nbase_effect = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_to_params() {
        let config = ExplorerConfig::default();
        let sweep = config.line.sweep_params();
        assert_eq!(sweep, SweepParams::default());
        let grid = config.surface.grid_params();
        assert_eq!(grid, GridParams::default());
    }
}
