//! Engine configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Devices compared by default, in tie-break order
pub const DEFAULT_ROSTER: [&str; 24] = [
    "quick_ball",
    "ultra_ball",
    "timer_ball",
    "dusk_ball",
    "net_ball",
    "dive_ball",
    "nest_ball",
    "repeat_ball",
    "great_ball",
    "level_ball",
    "love_ball",
    "heavy_ball",
    "fast_ball",
    "moon_ball",
    "dream_ball",
    "lure_ball",
    "friend_ball",
    "luxury_ball",
    "heal_ball",
    "premier_ball",
    "poke_ball",
    "safari_ball",
    "sport_ball",
    "beast_ball",
];

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Emit a debug record for every evaluation
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default = "default_roster")]
    pub comparison_roster: Vec<String>,
    /// Extra always-capture device ids
    #[serde(default)]
    pub guaranteed_devices: Vec<String>,
    #[serde(default)]
    pub custom_devices: Vec<CustomDevice>,
    #[serde(default)]
    pub species: SpeciesConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            debug_logging: false,
            comparison_roster: default_roster(),
            guaranteed_devices: Vec::new(),
            custom_devices: Vec::new(),
            species: SpeciesConfig::default(),
        }
    }
}

fn default_roster() -> Vec<String> {
    DEFAULT_ROSTER.iter().map(|id| id.to_string()).collect()
}

/// Data-driven fixed multiplier device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDevice {
    pub id: String,
    pub multiplier: f32,
    #[serde(default)]
    pub reason: String,
}

/// Species base-rate settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Placeholder rate the host reports for unsynced species
    #[serde(default = "default_rate")]
    pub default_rate: u8,
    /// Species id -> base catch rate
    #[serde(default)]
    pub overrides: HashMap<String, u32>,
}

impl Default for SpeciesConfig {
    fn default() -> Self {
        SpeciesConfig {
            default_rate: default_rate(),
            overrides: HashMap::new(),
        }
    }
}

fn default_rate() -> u8 {
    45
}

impl EngineConfig {
    /// Check for values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.species.default_rate == 0 {
            return Err(ConfigError::ValidationError(
                "species.default_rate must be at least 1".to_string(),
            ));
        }
        let empty_id = self
            .comparison_roster
            .iter()
            .chain(&self.guaranteed_devices)
            .chain(self.custom_devices.iter().map(|d| &d.id))
            .any(|id| id.trim().is_empty());
        if empty_id {
            return Err(ConfigError::ValidationError("device ids must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Load and validate an engine configuration file
pub fn load_engine_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = super::load_toml(path)?;
    config.validate()?;
    log::info!(
        "loaded engine config from {} ({} roster devices, {} custom)",
        path.display(),
        config.comparison_roster.len(),
        config.custom_devices.len()
    );
    Ok(config)
}

/// Parse and validate an engine configuration string
pub fn parse_engine_config(content: &str) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Bundled engine configuration
pub fn default_engine_config() -> EngineConfig {
    let toml = include_str!("../../config/engine.toml");
    parse_engine_config(toml).unwrap_or_else(|err| {
        log::warn!("bundled engine config is invalid ({}), using built-in defaults", err);
        EngineConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_matches_defaults() {
        let bundled = default_engine_config();
        assert_eq!(bundled, EngineConfig::default());
        assert_eq!(bundled.comparison_roster.len(), 24);
        assert_eq!(bundled.comparison_roster[0], "quick_ball");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
debug_logging = true

[[custom_devices]]
id = "festival_ball"
multiplier = 2.5
reason = "Festival bonus"

[species.overrides]
mewtwo = 3
"#;
        let config = parse_engine_config(toml).unwrap();
        assert!(config.debug_logging);
        assert_eq!(config.comparison_roster.len(), 24);
        assert!(config.guaranteed_devices.is_empty());
        assert_eq!(config.custom_devices[0].id, "festival_ball");
        assert_eq!(config.species.default_rate, 45);
        assert_eq!(config.species.overrides.get("mewtwo"), Some(&3));
    }

    #[test]
    fn test_validation_rejects_zero_default_rate() {
        let err = parse_engine_config("[species]\ndefault_rate = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validation_rejects_empty_ids() {
        let err = parse_engine_config("guaranteed_devices = [\"\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = parse_engine_config("debug_logging = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
