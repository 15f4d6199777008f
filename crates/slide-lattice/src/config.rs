//! Title strip configuration.
//!
//! A [`TitleStripConfig`] captures the settings a host usually keeps in a
//! settings file: slide axis, shift mode, spacing and animation behaviour.
//! Every field has a default, so a partial (or empty) TOML table is valid.
//!
//! # Example
//!
//! ```
//! use slide_lattice::config::TitleStripConfig;
//! use slide_lattice::title::ShiftMode;
//!
//! let config = TitleStripConfig::from_toml_str(r#"
//! shift_mode = "centered"
//! item_spacing = 8.0
//!
//! [scroll_animation]
//! duration_ms = 180
//! easing = "ease_out_cubic"
//! "#)?;
//!
//! assert_eq!(config.shift_mode, ShiftMode::Centered);
//! assert_eq!(config.item_spacing, 8.0);
//! # Ok::<(), slide_lattice::ConfigError>(())
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use slide_lattice_core::SlideDirection;
use slide_lattice_core::logging::targets;

use crate::animation::Easing;
use crate::error::{ConfigError, ConfigResult};
use crate::title::ShiftMode;

/// Longest scroll animation accepted by [`TitleStripConfig::validate`].
pub const MAX_SCROLL_DURATION_MS: u64 = 10_000;

/// Animated scroll settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollAnimationConfig {
    /// Duration of an animated settle in milliseconds. Zero disables animation.
    pub duration_ms: u64,
    /// Easing curve of an animated settle.
    pub easing: Easing,
}

impl Default for ScrollAnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            easing: Easing::EaseInOut,
        }
    }
}

impl ScrollAnimationConfig {
    /// Duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Settings for a title strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStripConfig {
    /// Axis titles are laid out and scrolled along.
    pub slide_direction: SlideDirection,
    /// How a selected title is scrolled into view.
    pub shift_mode: ShiftMode,
    /// Gap between adjacent titles.
    pub item_spacing: f32,
    /// Whether selections animate the indicator.
    pub animate_indicator: bool,
    /// Animated scroll settings.
    pub scroll_animation: ScrollAnimationConfig,
}

impl Default for TitleStripConfig {
    fn default() -> Self {
        Self {
            slide_direction: SlideDirection::Horizontal,
            shift_mode: ShiftMode::Paged,
            item_spacing: 0.0,
            animate_indicator: true,
            scroll_animation: ScrollAnimationConfig::default(),
        }
    }
}

impl TitleStripConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded strip configuration");
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(ConfigError::Invalid {
                field: "item_spacing",
                reason: format!("must be a finite, non-negative length, got {}", self.item_spacing),
            });
        }
        if self.scroll_animation.duration_ms > MAX_SCROLL_DURATION_MS {
            return Err(ConfigError::Invalid {
                field: "scroll_animation.duration_ms",
                reason: format!(
                    "must be at most {MAX_SCROLL_DURATION_MS} ms, got {}",
                    self.scroll_animation.duration_ms
                ),
            });
        }
        Ok(())
    }
}
