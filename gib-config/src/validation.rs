//! Validation of a parsed `keyboard.toml`

use crate::KeyboardTomlConfig;
use crate::error::{ConfigError, ConfigResult};

/// Layers are tracked as bits of a `u32`
pub const MAX_LAYERS: usize = 32;

/// Valid range of rgblight effect modes
pub const RGB_MODE_RANGE: core::ops::RangeInclusive<u8> = 1..=35;

/// Validates the entire keyboard configuration
pub fn validate_config(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    validate_name("keyboard.name", &config.keyboard.name)?;
    validate_name("keymap.name", &config.keymap.name)?;
    if let Some(version) = &config.keymap.version {
        validate_name("keymap.version", version)?;
    }
    validate_layout_section(config)?;
    validate_light_section(config)?;
    Ok(())
}

/// Names end up in the identification string, they must be a single word
fn validate_name(field: &str, name: &str) -> ConfigResult<()> {
    if name.is_empty() {
        return Err(ConfigError::Validation {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation {
            field: field.to_string(),
            message: format!("'{name}' must not contain whitespace"),
        });
    }
    Ok(())
}

/// Validates the [layout] section
fn validate_layout_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    let layout = &config.layout;
    if layout.rows == 0 || layout.cols == 0 {
        return Err(ConfigError::Validation {
            field: "layout.rows/cols".to_string(),
            message: format!("matrix must not be empty, got {}x{}", layout.rows, layout.cols),
        });
    }
    if layout.layers == 0 || layout.layers > MAX_LAYERS {
        return Err(ConfigError::Validation {
            field: "layout.layers".to_string(),
            message: format!("expected 1 to {MAX_LAYERS}, got {}", layout.layers),
        });
    }
    Ok(())
}

/// Validates the [light] section
fn validate_light_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    let mode = config.light.rgb_solid_mode;
    if !RGB_MODE_RANGE.contains(&mode) {
        return Err(ConfigError::Validation {
            field: "light.rgb_solid_mode".to_string(),
            message: format!(
                "expected {} to {}, got {mode}",
                RGB_MODE_RANGE.start(),
                RGB_MODE_RANGE.end()
            ),
        });
    }
    Ok(())
}
