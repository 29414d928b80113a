//! Tunable animation constants.
//!
//! Defaults reproduce the reference scene. Files are JSON and may override
//! any subset of fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::animation::AnimationError;

pub const LID_SPEED: f32 = 0.6;
pub const KEY_SPEED: f32 = 16.0;
pub const LAMP_SPEED: f32 = 42.0;
pub const LID_ANGLE_MAX: f32 = 31.0;
pub const STICK_ANGLE_MAX: f32 = 42.0;
pub const KEY_ANGLE_MAX: f32 = 5.5;
pub const LAMP_AMPLITUDE: [f32; 3] = [7.0, 0.0, 0.0];
pub const LAMP_COUNT: usize = 3;
pub const MAX_LAMP_COUNT: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Lid travel per second, in percentage units
    pub lid_speed: f32,
    /// Key travel per second, in percentage units
    pub key_speed: f32,
    /// Lamp clock speed in degrees per second
    pub lamp_speed: f32,
    pub lid_angle_max: f32,
    pub stick_angle_max: f32,
    pub key_angle_max: f32,
    /// Peak lamp displacement per axis, scene units
    pub lamp_amplitude: [f32; 3],
    pub lamp_count: usize,
    /// Lid openness at startup, clamped into [0, 1]
    pub initial_lid_percentage: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            lid_speed: LID_SPEED,
            key_speed: KEY_SPEED,
            lamp_speed: LAMP_SPEED,
            lid_angle_max: LID_ANGLE_MAX,
            stick_angle_max: STICK_ANGLE_MAX,
            key_angle_max: KEY_ANGLE_MAX,
            lamp_amplitude: LAMP_AMPLITUDE,
            lamp_count: LAMP_COUNT,
            initial_lid_percentage: 1.0,
        }
    }
}

impl AnimationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse animation config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded animation config from {:?}", path);
        Ok(config)
    }

    /// Reject values that would break the clamping or wrap invariants.
    /// Speeds and angle maxima must be finite and non-negative.
    pub fn validate(&self) -> std::result::Result<(), AnimationError> {
        let non_negative = [
            ("lid_speed", self.lid_speed),
            ("key_speed", self.key_speed),
            ("lamp_speed", self.lamp_speed),
            ("lid_angle_max", self.lid_angle_max),
            ("stick_angle_max", self.stick_angle_max),
            ("key_angle_max", self.key_angle_max),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(invalid(field, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(invalid(field, value, "must not be negative"));
            }
        }

        if let Some(&value) = self.lamp_amplitude.iter().find(|v| !v.is_finite()) {
            return Err(invalid("lamp_amplitude", value, "must be finite"));
        }
        if !self.initial_lid_percentage.is_finite() {
            return Err(invalid(
                "initial_lid_percentage",
                self.initial_lid_percentage,
                "must be finite",
            ));
        }

        if self.lamp_count < 2 {
            return Err(AnimationError::Configuration {
                field: "lamp_count",
                value: self.lamp_count as f64,
                reason: "need at least 2 lamps",
            });
        }
        if self.lamp_count > MAX_LAMP_COUNT {
            return Err(AnimationError::Configuration {
                field: "lamp_count",
                value: self.lamp_count as f64,
                reason: "too many lamps",
            });
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: f32, reason: &'static str) -> AnimationError {
    AnimationError::Configuration {
        field,
        value: value as f64,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scene() {
        let config = AnimationConfig::default();
        assert_eq!(config.lid_speed, 0.6);
        assert_eq!(config.key_speed, 16.0);
        assert_eq!(config.lamp_speed, 42.0);
        assert_eq!(config.lid_angle_max, 31.0);
        assert_eq!(config.stick_angle_max, 42.0);
        assert_eq!(config.key_angle_max, 5.5);
        assert_eq!(config.lamp_amplitude, [7.0, 0.0, 0.0]);
        assert_eq!(config.lamp_count, 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnimationConfig::from_json(r#"{ "lamp_count": 5, "key_speed": 8.0 }"#).unwrap();
        assert_eq!(config.lamp_count, 5);
        assert_eq!(config.key_speed, 8.0);
        assert_eq!(config.lid_speed, LID_SPEED);
        assert_eq!(config.lamp_amplitude, LAMP_AMPLITUDE);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AnimationConfig::from_json("{}").unwrap(), AnimationConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AnimationConfig::from_json("{ lamp_count: }").unwrap_err();
        assert!(err.to_string().contains("animation config"));
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AnimationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_speeds_are_rejected() {
        for field in ["lid_speed", "key_speed", "lamp_speed"] {
            let json = format!(r#"{{ "{}": -1.0 }}"#, field);
            let config = AnimationConfig::from_json(&json).unwrap();
            assert_eq!(
                config.validate(),
                Err(AnimationError::Configuration {
                    field,
                    value: -1.0,
                    reason: "must not be negative",
                }),
                "{} was accepted",
                field
            );
        }
    }

    #[test]
    fn negative_angle_maxima_are_rejected() {
        for field in ["lid_angle_max", "stick_angle_max", "key_angle_max"] {
            let json = format!(r#"{{ "{}": -5.0 }}"#, field);
            let config = AnimationConfig::from_json(&json).unwrap();
            assert!(
                matches!(config.validate(), Err(AnimationError::Configuration { field: f, .. }) if f == field),
                "{} was accepted",
                field
            );
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let config = AnimationConfig {
            key_speed: f32::INFINITY,
            ..AnimationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnimationError::Configuration { field: "key_speed", reason: "must be finite", .. })
        ));

        let config = AnimationConfig {
            lid_angle_max: f32::NAN,
            ..AnimationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnimationError::Configuration { field: "lid_angle_max", .. })
        ));

        let config = AnimationConfig {
            lamp_amplitude: [7.0, f32::NAN, 0.0],
            ..AnimationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnimationError::Configuration { field: "lamp_amplitude", .. })
        ));

        let config = AnimationConfig {
            initial_lid_percentage: f32::NEG_INFINITY,
            ..AnimationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnimationError::Configuration { field: "initial_lid_percentage", .. })
        ));
    }

    #[test]
    fn lamp_count_bounds() {
        for lamp_count in [0, 1, MAX_LAMP_COUNT + 1] {
            let config = AnimationConfig {
                lamp_count,
                ..AnimationConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(AnimationError::Configuration { field: "lamp_count", .. })
            ));
        }
        for lamp_count in [2, MAX_LAMP_COUNT] {
            let config = AnimationConfig {
                lamp_count,
                ..AnimationConfig::default()
            };
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn zero_speed_is_allowed() {
        let config = AnimationConfig {
            lamp_speed: 0.0,
            key_speed: 0.0,
            ..AnimationConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AnimationConfig::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("exist.json"));
    }
}
