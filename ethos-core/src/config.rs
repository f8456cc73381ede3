//! Configuration for the ETHOS engine.
//!
//! Maps directly to `ethos.toml`. Everything defaults to the shipped
//! behavior; the file only needs the keys being overridden.

use serde::{Deserialize, Serialize};

/// Top-level ETHOS configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EthosConfig {
    /// General switches.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Emotion store tuning.
    #[serde(default)]
    pub emotion: EmotionConfig,
    /// Group dynamics switches.
    #[serde(default)]
    pub group: GroupConfig,
    /// Diagnostic trace switches.
    #[serde(default)]
    pub trace: TraceConfig,
}

impl EthosConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `EthosError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::EthosError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Whether the moral subsystem is enabled at all. Disabled, every
    /// query returns its neutral default.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
        }
    }
}

/// Emotion store tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Per-tick fraction by which emotions relax toward their rest state.
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f32,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self { decay_rate: 0.02 }
    }
}

/// Group dynamics switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Whether cost evaluation folds group dynamics in by default.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Diagnostic trace switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Emit a `debug!` state trace for every 4D query.
    #[serde(default = "default_true")]
    pub state_traces: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { state_traces: true }
    }
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_decay_rate() -> f32 {
    0.02
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_enabled() {
        let config = EthosConfig::default();
        assert!(config.general.enabled);
        assert!(config.group.enabled);
        assert!(config.trace.state_traces);
        assert!((config.emotion.decay_rate - 0.02).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = EthosConfig::from_toml(
            r#"
            [group]
            enabled = false

            [emotion]
            decay_rate = 0.1
            "#,
        )
        .expect("valid toml");

        assert!(config.general.enabled);
        assert!(!config.group.enabled);
        assert!((config.emotion.decay_rate - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_toml_is_valid() {
        let config = EthosConfig::from_toml("").expect("empty toml");
        assert!(config.general.enabled);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = EthosConfig::from_toml("group = 3").expect_err("should fail");
        assert!(matches!(err, crate::EthosError::Config(_)));
    }
}
