//! Configuration loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Competition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionConfig {
    /// Competition name, for display only.
    #[serde(default = "default_competition_name")]
    pub name: String,

    /// Teams entered in the competition; feeds the roster-backed validator.
    #[serde(default)]
    pub teams: Vec<String>,
}

fn default_competition_name() -> String {
    "Friendly".to_string()
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            name: default_competition_name(),
            teams: Vec::new(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub competition: CompetitionConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            competition: CompetitionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path, falling back to defaults when the file
    /// does not exist.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<&String> = Vec::new();
        for team in &self.competition.teams {
            if team.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Team names must not be blank".to_string(),
                ));
            }
            if seen.contains(&team) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate team in roster: {}",
                    team
                )));
            }
            seen.push(team);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.competition.name, "Friendly");
        assert!(config.competition.teams.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[competition]
name = "World Cup 2026"
teams = ["Mexico", "Canada"]
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.competition.name, "World Cup 2026");
        assert_eq!(config.competition.teams, vec!["Mexico", "Canada"]);
    }

    #[test]
    fn test_from_file_applies_field_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[competition]\nteams = [\"Mexico\"]").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.competition.teams, vec!["Mexico"]);
    }

    #[test]
    fn test_from_file_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [not toml").unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = AppConfig::from_file(Path::new("/nonexistent/pitchside.toml"));

        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_from_file_or_default_missing_file() {
        let config =
            AppConfig::from_file_or_default(Path::new("/nonexistent/pitchside.toml")).unwrap();

        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validation_rejects_blank_team() {
        let mut config = AppConfig::default();
        config.competition.teams = vec!["Mexico".to_string(), "  ".to_string()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_team() {
        let mut config = AppConfig::default();
        config.competition.teams = vec!["Mexico".to_string(), "Mexico".to_string()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = AppConfig::default();
        config.competition.teams = vec!["Mexico".to_string()];

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.competition.teams, parsed.competition.teams);
    }
}
