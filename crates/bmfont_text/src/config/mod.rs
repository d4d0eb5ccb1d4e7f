//! Configuration system
//!
//! File-backed settings (TOML or RON, chosen by extension) and the
//! per-font layout configuration.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// On-disk formats a [`Config`] can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            ConfigFormat::Ron => {
                ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => {
                ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                    .map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// # Font Configuration
///
/// Layout settings applied on top of a font description. Every field can
/// also be changed on the built [`FontMetrics`](crate::font::FontMetrics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Extra horizontal pixels added after every glyph advance
    pub spacing: f32,
    /// Glyph substituted for characters the font does not contain
    pub default_character: Option<char>,
    /// Overrides the description's line height when set
    pub line_spacing: Option<i32>,
}

impl FontConfig {
    /// Create a configuration with the standard defaults
    pub fn new() -> Self {
        Self {
            spacing: 0.0,
            default_character: Some(' '),
            line_spacing: None,
        }
    }

    /// Set character spacing
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set or clear the fallback character
    pub fn with_default_character(mut self, character: Option<char>) -> Self {
        self.default_character = character;
        self
    }

    /// Override the line spacing from the font description
    pub fn with_line_spacing(mut self, line_spacing: i32) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    /// Validate the configuration
    ///
    /// Spacing is truncated to whole pixels, so it must be finite and fit in
    /// an `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(i32::MIN as f32..=i32::MAX as f32).contains(&self.spacing) {
            return Err(ConfigError::Invalid(format!(
                "spacing must be a finite pixel count, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for FontConfig {}
