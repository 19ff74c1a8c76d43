//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over an optional file path.  With no path the
//! adapter yields [`FeederConfig::default()`]; with a path the file must
//! exist, parse, and pass validation.

use std::path::PathBuf;

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::FeederConfig;

pub struct JsonConfigAdapter {
    path: Option<PathBuf>,
}

impl JsonConfigAdapter {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn parse(text: &str) -> Result<FeederConfig, ConfigError> {
        let cfg: FeederConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Corrupted(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl ConfigPort for JsonConfigAdapter {
    fn load(&self) -> Result<FeederConfig, ConfigError> {
        let Some(path) = &self.path else {
            info!("JsonConfig: no config file given, using defaults");
            return Ok(FeederConfig::default());
        };
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError(e),
        })?;
        let cfg = Self::parse(&text)?;
        info!("JsonConfig: loaded {}", path.display());
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_yields_defaults() {
        let cfg = JsonConfigAdapter::new(None).load().unwrap();
        assert_eq!(cfg, FeederConfig::default());
    }

    #[test]
    fn missing_file_is_not_found() {
        let adapter = JsonConfigAdapter::new(Some("/nonexistent/petfeeder.json".into()));
        assert!(matches!(adapter.load(), Err(ConfigError::NotFound)));
    }

    #[test]
    fn malformed_json_is_corrupted() {
        assert!(matches!(
            JsonConfigAdapter::parse("{ sim_interval_ms: "),
            Err(ConfigError::Corrupted(_))
        ));
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            JsonConfigAdapter::parse(r#"{"sim_interval_ms": 0}"#),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn overrides_applied() {
        let cfg = JsonConfigAdapter::parse(r#"{"initial_food_percent": 40.0, "session_secs": 5}"#).unwrap();
        assert!((cfg.initial_food_percent - 40.0).abs() < f64::EPSILON);
        assert_eq!(cfg.session_secs, 5);
    }
}
