//! Parser of `keyboard.toml`, the build-time configuration of the gib keymap.
//!
//! The keymap crate reads this file from its `build.rs` and turns it into
//! constants: matrix dimensions, the identification string and lighting defaults.

use std::path::Path;

use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod error;
pub mod validation;

pub use error::{ConfigError, ConfigResult};

/// Configurations for the gib keymap.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    /// Basic keyboard info
    pub keyboard: KeyboardInfo,
    /// Keymap info
    pub keymap: KeymapInfo,
    /// Matrix shape and number of layers
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Light config
    #[serde(default)]
    pub light: LightConfig,
}

/// Configurations for keyboard info
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardInfo {
    /// Keyboard name, such as `ergodox_infinity`
    pub name: String,
}

/// Configurations for keymap info
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymapInfo {
    /// Keymap name
    pub name: String,
    /// Firmware version reported by the version key. If not set, the crate version is used
    pub version: Option<String>,
}

/// Configurations for keyboard layout
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde_inline_default(6)]
    pub rows: usize,
    #[serde_inline_default(14)]
    pub cols: usize,
    #[serde_inline_default(3)]
    pub layers: usize,
}

/// This separate Default impl is needed when `[layout]` section is not set in keyboard.toml
impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 14,
            layers: 3,
        }
    }
}

/// Configurations for RGB lighting
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LightConfig {
    /// The rgblight mode set by the solid color key, `1` is static light
    #[serde_inline_default(1)]
    pub rgb_solid_mode: u8,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self { rgb_solid_mode: 1 }
    }
}

impl KeyboardTomlConfig {
    /// Read, parse and validate the config file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate config content. `origin` is only used in error messages
    pub fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: KeyboardTomlConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Version string of the firmware, `fallback` is used when it's not set in `[keymap]`
    pub fn version<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.keymap.version.as_deref().unwrap_or(fallback)
    }

    /// The string typed by the version key: `<keyboard>/<keymap> @ <version>`
    pub fn identification(&self, fallback_version: &str) -> String {
        format!(
            "{}/{} @ {}",
            self.keyboard.name,
            self.keymap.name,
            self.version(fallback_version)
        )
    }
}
