//! Session configuration parameters
//!
//! All tunable parameters for the PetFeeder dashboard core.
//! Values can be overridden from a JSON file through the
//! [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeederConfig {
    // --- Level simulator ---
    /// Simulator tick interval (milliseconds)
    pub sim_interval_ms: u32,
    /// Food reservoir fill at session start (%)
    pub initial_food_percent: f64,
    /// Water reservoir fill at session start (%)
    pub initial_water_percent: f64,
    /// Hard floor for both simulated levels (%)
    pub level_floor_percent: f64,
    /// Hard ceiling for both simulated levels (%)
    pub level_ceiling_percent: f64,
    /// Food drift offset subtracted from each random sample
    pub food_drift_offset: f64,
    /// Food drift amplitude (% per tick)
    pub food_drift_scale: f64,
    /// Water drift offset subtracted from each random sample
    pub water_drift_offset: f64,
    /// Water drift amplitude (% per tick)
    pub water_drift_scale: f64,

    // --- Recommendations ---
    /// Minimum recommended daily water (mL)
    pub min_daily_water_ml: u32,

    // --- Demo runner ---
    /// How long the demo binary keeps the session alive (seconds)
    pub session_secs: u32,
}

impl Default for FeederConfig {
    fn default() -> Self {
        Self {
            // Simulator
            sim_interval_ms: 6000,
            initial_food_percent: 78.0,
            initial_water_percent: 72.0,
            level_floor_percent: 10.0,
            level_ceiling_percent: 100.0,
            food_drift_offset: 0.55,
            food_drift_scale: 6.0,
            water_drift_offset: 0.45,
            water_drift_scale: 5.0,

            // Recommendations
            min_daily_water_ml: 450,

            // Demo
            session_secs: 30,
        }
    }
}

impl FeederConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sim_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("sim_interval_ms must be > 0"));
        }
        let floor = self.level_floor_percent;
        let ceiling = self.level_ceiling_percent;
        if !(0.0..=100.0).contains(&floor) || !(0.0..=100.0).contains(&ceiling) {
            return Err(ConfigError::ValidationFailed("level bounds must be within 0..=100"));
        }
        if floor >= ceiling {
            return Err(ConfigError::ValidationFailed("level floor must be below ceiling"));
        }
        for initial in [self.initial_food_percent, self.initial_water_percent] {
            if !(floor..=ceiling).contains(&initial) {
                return Err(ConfigError::ValidationFailed(
                    "initial levels must lie within the level bounds",
                ));
            }
        }
        for v in [
            self.food_drift_offset,
            self.food_drift_scale,
            self.water_drift_offset,
            self.water_drift_scale,
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::ValidationFailed("drift parameters must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = FeederConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.sim_interval_ms, 6000);
        assert!(c.level_floor_percent < c.level_ceiling_percent);
        assert!(c.food_drift_offset > 0.5, "food drift should bias downward");
        assert!(c.water_drift_offset < 0.5, "water drift should bias upward");
    }

    #[test]
    fn serde_roundtrip() {
        let c = FeederConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: FeederConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: FeederConfig = serde_json::from_str(r#"{"sim_interval_ms": 250}"#).unwrap();
        assert_eq!(c.sim_interval_ms, 250);
        assert_eq!(c.min_daily_water_ml, 450);
    }

    #[test]
    fn zero_interval_rejected() {
        let c = FeederConfig {
            sim_interval_ms: 0,
            ..FeederConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let c = FeederConfig {
            level_floor_percent: 90.0,
            level_ceiling_percent: 20.0,
            ..FeederConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn initial_level_outside_bounds_rejected() {
        let c = FeederConfig {
            initial_food_percent: 5.0,
            ..FeederConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
