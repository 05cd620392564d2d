use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the meme engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output persistence settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Composition settings
    #[serde(default)]
    pub compose: ComposeConfig,

    /// Font resolution settings
    #[serde(default)]
    pub font: FontConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;
        self.compose.validate()?;
        Ok(())
    }
}

/// Output persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory artifacts are written to
    pub directory: PathBuf,

    /// Filename prefix for allocated slots
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            prefix: "meme".to_string(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output.prefix".to_string(),
                value: String::new(),
            }
            .into());
        }
        Ok(())
    }
}

/// Composition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Longest edge a source image is rescaled down to
    pub max_dimension: u32,

    /// Spacing of the background grid in pixels
    pub grid_spacing: u32,

    /// Number of decoration dots scattered over text memes
    pub decoration_count: u32,

    /// Bottom margin for caption overlays in pixels
    pub text_margin: u32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1200,
            grid_spacing: 50,
            decoration_count: 20,
            text_margin: 30,
        }
    }
}

impl ComposeConfig {
    fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(ConfigError::InvalidValue {
                key: "compose.max_dimension".to_string(),
                value: self.max_dimension.to_string(),
            }
            .into());
        }
        if self.grid_spacing == 0 {
            return Err(ConfigError::InvalidValue {
                key: "compose.grid_spacing".to_string(),
                value: self.grid_spacing.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Font resolution settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FontConfig {
    /// Extra font files to try before the built-in search paths.
    /// Resolution failure is always non-fatal.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}
