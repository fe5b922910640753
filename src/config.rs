//! Configuration file handling for vconsole.
//!
//! Loads configuration from `<config dir>/vconsole/config.toml` or a custom path.
//! Command-line flags are applied on top of whatever the file provides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::SCALE_FACTOR;
use crate::error::ConfigError;
use crate::presenter::{Backend, DEFAULT_FPS};

/// Configuration file structure for vconsole.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConsoleConfig {
    /// One of "window", "terminal", "export"
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// Side of the pixel block averaged into one terminal character
    #[serde(default = "default_scale")]
    pub scale: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TerminalConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            fps: default_fps(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    /// error, warn, info, debug or trace
    #[serde(default)]
    pub level: Option<String>,
}

fn default_backend() -> String {
    Backend::Terminal.name().to_string()
}

fn default_width() -> usize {
    800
}

fn default_height() -> usize {
    600
}

fn default_scale() -> usize {
    SCALE_FACTOR
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_title() -> String {
    "Virtual Console".to_string()
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// The configured backend.
    pub fn backend(&self) -> Result<Backend, ConfigError> {
        Backend::from_name(&self.console.backend).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "unknown backend '{}' (expected window, terminal or export)",
                self.console.backend
            ))
        })
    }

    /// Check the values a frame loop depends on.
    ///
    /// Canvas sizes that the terminal backend cannot downsample are rejected
    /// here with a readable message rather than at the first frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let backend = self.backend()?;
        let console = &self.console;

        if console.scale == 0 {
            return Err(ConfigError::Invalid("scale must be at least 1".to_string()));
        }
        if self.terminal.fps == 0 || self.window.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".to_string()));
        }
        if backend == Backend::Terminal
            && (console.width % console.scale != 0 || console.height % console.scale != 0)
        {
            return Err(ConfigError::Invalid(format!(
                "canvas {}x{} is not divisible by scale {}",
                console.width, console.height, console.scale
            )));
        }
        Ok(())
    }
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# vconsole configuration

[console]
# Backend: window, terminal, export
backend = "terminal"
# Canvas size in pixels
width = 800
height = 600
# Pixel block averaged into one terminal character
# (width and height must be divisible by it)
scale = 20

[terminal]
# Frames per second; also the fixed time step handed to the renderer
fps = 60

[window]
title = "Virtual Console"
fps = 60

[log]
# error, warn, info, debug, trace
level = "warn"
"#;

/// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("vconsole").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/vconsole/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.backend().unwrap(), Backend::Terminal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_text_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let mut expected = Config::default();
        expected.log.level = Some("warn".to_string());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[console]\nscale = 10\n").unwrap();
        assert_eq!(config.console.scale, 10);
        assert_eq!(config.console.width, 800);
        assert_eq!(config.terminal.fps, 60);
    }

    #[test]
    fn test_validate_rejects_indivisible_canvas() {
        let mut config = Config::default();
        config.console.scale = 7;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not divisible by scale 7"));
    }

    #[test]
    fn test_validate_allows_indivisible_canvas_for_window() {
        let mut config = Config::default();
        config.console.backend = "window".to_string();
        config.console.scale = 7;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_scale_and_fps() {
        let mut config = Config::default();
        config.console.scale = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.terminal.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_backend() {
        let mut config = Config::default();
        config.console.backend = "sdl".to_string();
        assert!(config.backend().is_err());
    }
}
