//! Configuration Management

use crate::coords::DomainRange;
use crate::quiz::DEFAULT_VARIABLES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Number line geometry
    pub line: LineConfig,
    /// Quiz generation settings
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// Number line geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Smallest tick (inclusive)
    pub min: i64,
    /// Largest tick (inclusive)
    pub max: i64,
    /// Pixel width of the click track
    pub track_width_px: f64,
}

/// Quiz generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Display variable alphabet
    pub variables: Vec<char>,
    /// Fixed RNG seed for reproducible quiz sequences (none = entropy)
    pub seed: Option<u64>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            min: -6,
            max: 6,
            track_width_px: 500.0,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            variables: DEFAULT_VARIABLES.to_vec(),
            seed: None,
        }
    }
}

impl Config {
    /// Validate config values.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.line.min >= self.line.max {
            return Err(crate::Error::Config(format!(
                "line range must satisfy min < max, got [{}, {}]",
                self.line.min, self.line.max
            )));
        }
        if !self.line.track_width_px.is_finite() || self.line.track_width_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "track_width_px must be positive and finite, got {}",
                self.line.track_width_px
            )));
        }
        if self.quiz.variables.is_empty() {
            return Err(crate::Error::Config(
                "quiz.variables must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured domain range
    pub fn range(&self) -> crate::Result<DomainRange> {
        DomainRange::new(self.line.min, self.line.max)
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".numberline").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.line.min, -6);
        assert_eq!(config.line.max, 6);
        assert_eq!(config.line.track_width_px, 500.0);
        assert!(config.quiz.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[line]"));
        assert!(toml.contains("[quiz]"));
        assert!(toml.contains("track_width_px"));
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_validate_inverted_range() {
        let mut config = Config::default();
        config.line.min = 6;
        config.line.max = -6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_degenerate_range() {
        let mut config = Config::default();
        config.line.min = 3;
        config.line.max = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_width() {
        let mut config = Config::default();
        config.line.track_width_px = 0.0;
        assert!(config.validate().is_err());
        config.line.track_width_px = -5.0;
        assert!(config.validate().is_err());
        config.line.track_width_px = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_variables() {
        let mut config = Config::default();
        config.quiz.variables.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_range_helper() {
        let config = Config::default();
        let range = config.range().unwrap();
        assert_eq!(range.min, -6);
        assert_eq!(range.max, 6);
    }

    #[test]
    fn test_config_roundtrip_serialization() {
        let original = Config::default();
        let toml_str = original.to_toml().unwrap();
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(original.line.min, deserialized.line.min);
        assert_eq!(original.line.track_width_px, deserialized.line.track_width_px);
        assert_eq!(original.quiz.variables, deserialized.quiz.variables);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.line.min = 0;
        original.line.max = 20;
        original.line.track_width_px = 800.0;
        original.quiz.seed = Some(99);

        original.save(&config_path).expect("Failed to save config");
        assert!(config_path.exists());

        let loaded = Config::load(&config_path).expect("Failed to load config");
        assert_eq!(loaded.line.min, 0);
        assert_eq!(loaded.line.max, 20);
        assert_eq!(loaded.line.track_width_px, 800.0);
        assert_eq!(loaded.quiz.seed, Some(99));
    }

    #[test]
    fn test_config_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested_path = temp_dir.path().join("nested").join("path").join("config.toml");

        let config = Config::default();
        config.save(&nested_path).expect("Failed to save config");
        assert!(nested_path.exists());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("bad_config.toml");
        std::fs::write(
            &config_path,
            r#"
[line]
min = 6
max = -6
track_width_px = 500.0

[quiz]
variables = ["x"]
"#,
        )
        .expect("Failed to write config");
        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = PathBuf::from("/tmp/nonexistent_numberline_config.toml");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_config_without_quiz_section_deserializes() {
        // [quiz] carries #[serde(default)], so older minimal files still load
        let toml_str = r#"
[line]
min = -10
max = 10
track_width_px = 640.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.line.min, -10);
        assert_eq!(config.quiz.variables, DEFAULT_VARIABLES.to_vec());
        assert!(config.quiz.seed.is_none());
    }
}
