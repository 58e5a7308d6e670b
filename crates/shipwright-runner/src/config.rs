//! Runner configuration.
//!
//! Loaded from `shipwright.yaml` (or the path in `SHIPWRIGHT_CONFIG`).
//! Every section and field has a default, so a missing file or a partial
//! file is fine. `SHIPWRIGHT_SCENE` and `SHIPWRIGHT_OUTPUT` override the
//! scene and snapshot paths after the file is read.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse the YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    /// Scene document to bake.
    #[serde(default = "default_scene")]
    pub scene: PathBuf,

    /// Baking options.
    #[serde(default)]
    pub bake: BakeConfig,

    /// Snapshot output options.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging options.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            scene: default_scene(),
            bake: BakeConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `SHIPWRIGHT_SCENE` and `SHIPWRIGHT_OUTPUT`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SHIPWRIGHT_SCENE") {
            self.scene = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("SHIPWRIGHT_OUTPUT") {
            self.output.path = PathBuf::from(val);
        }
    }
}

/// Baking options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BakeConfig {
    /// Worker threads. Zero or one bakes on the main thread.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Exit with an error when any bake warning was raised.
    #[serde(default)]
    pub fail_on_warnings: bool,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            fail_on_warnings: false,
        }
    }
}

/// Snapshot output options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Where the JSON snapshot is written.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Pretty-print the snapshot.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: default_pretty(),
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when
    /// set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_scene() -> PathBuf {
    PathBuf::from("scene.yaml")
}

const fn default_workers() -> usize {
    4
}

fn default_output_path() -> PathBuf {
    PathBuf::from("baked.json")
}

const fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = RunnerConfig::parse("{}").ok();
        assert_eq!(config, Some(RunnerConfig::default()));
    }

    #[test]
    fn partial_sections_fill_in() {
        let yaml = "scene: demos/scene.yaml\nbake:\n  fail_on_warnings: true\nlogging:\n  json: true\n";
        let config = RunnerConfig::parse(yaml).ok();
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.scene, PathBuf::from("demos/scene.yaml"));
            assert!(config.bake.fail_on_warnings);
            assert_eq!(config.bake.workers, 4);
            assert!(config.logging.json);
            assert_eq!(config.logging.level, "info");
            assert!(config.output.pretty);
        }
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(matches!(
            RunnerConfig::parse("bake: [unterminated"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            RunnerConfig::from_file(Path::new("does/not/exist.yaml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
