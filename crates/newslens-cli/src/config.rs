use anyhow::{Context, Result, bail};
use newslens_engine::{DEFAULT_SPIKE_SIGMAS, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. NEWSLENS_CONFIG environment variable (with tilde expansion)
/// 3. <user config dir>/newslens/config.toml
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("NEWSLENS_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("newslens").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Publishers shown by `publishers` and the publisher chart of `stats`
    pub top_publishers: usize,
    /// Spike rule multiplier: mean + spike_sigmas * std
    pub spike_sigmas: f64,
    /// Headline length histogram bins
    pub length_bins: usize,
    /// Publication date histogram bins
    pub date_bins: usize,
    /// Longest list or chart printed in plain output before it is condensed
    pub max_rows: usize,
    /// Chart width in columns; the terminal width is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_publishers: DEFAULT_TOP_N,
            spike_sigmas: DEFAULT_SPIKE_SIGMAS,
            length_bins: 30,
            date_bins: 50,
            max_rows: 60,
            chart_width: None,
        }
    }
}

impl Config {
    /// Load the config for this invocation.
    ///
    /// An explicitly requested file must exist; the implicit locations fall
    /// back to defaults when nothing is there.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = resolve_config_path(explicit_path) else {
            return Ok(Self::default());
        };

        if explicit_path.is_some() && !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_publishers == 0 {
            bail!("top_publishers must be at least 1");
        }
        if !self.spike_sigmas.is_finite() || self.spike_sigmas <= 0.0 {
            bail!("spike_sigmas must be a positive number");
        }
        if self.length_bins == 0 || self.date_bins == 0 {
            bail!("histogram bins must be at least 1");
        }
        if self.max_rows == 0 {
            bail!("max_rows must be at least 1");
        }
        if self.chart_width == Some(0) {
            bail!("chart_width must be at least 1");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.top_publishers, 10);
        assert_eq!(config.spike_sigmas, 2.0);
        assert_eq!(config.length_bins, 30);
        assert_eq!(config.date_bins, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "top_publishers = 5\nchart_width = 40\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.top_publishers, 5);
        assert_eq!(config.chart_width, Some(40));
        assert_eq!(config.spike_sigmas, 2.0);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(config_path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "spike_sigmas = -1.0\n")?;
        assert!(Config::load_from(&config_path).is_err());

        std::fs::write(&config_path, "top_publishers = 0\n")?;
        assert!(Config::load_from(&config_path).is_err());

        std::fs::write(&config_path, "top_publishers = \"ten\"\n")?;
        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_toml_roundtrip() -> Result<()> {
        let config = Config {
            top_publishers: 3,
            ..Config::default()
        };
        let parsed: Config = toml::from_str(&config.to_toml()?)?;
        assert_eq!(parsed, config);
        Ok(())
    }
}
