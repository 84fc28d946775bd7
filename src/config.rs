//! Showcase configuration module.
//!
//! Handles loading, merging, and validating `config.toml` from the content
//! root. User values are merged over stock defaults, so a config file only
//! needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Projects"          # <title> of the rendered page
//! heading = "My Projects"     # Heading above the carousel
//!
//! [carousel]
//! auto_advance_ms = 10000     # Featured slide interval
//! restart_on_navigate = false # Restart the interval after next/prev/jump
//!
//! [grid]
//! max_card_technologies = 4   # Badges per card before "+N"
//! empty_message = "No projects in this category yet."
//!
//! [colors]
//! background = "#0a0a0a"
//! surface = "#0f172a"
//! text = "#f5f5f5"
//! text_muted = "#a3a3a3"
//! border = "#1e293b"
//! accent = "#0ea5e9"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Showcase configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub site: SiteConfig,
    pub carousel: CarouselConfig,
    pub grid: GridConfig,
    pub colors: ColorScheme,
}

impl ShowcaseConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.auto_advance_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.auto_advance_ms must be greater than 0".into(),
            ));
        }
        if self.grid.max_card_technologies == 0 {
            return Err(ConfigError::Validation(
                "grid.max_card_technologies must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub heading: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Projects".to_string(),
            heading: "My Projects".to_string(),
        }
    }
}

/// Featured carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances.
    pub auto_advance_ms: u64,
    /// When true, manual next/prev/jump start the interval over.
    pub restart_on_navigate: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 10_000,
            restart_on_navigate: false,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

/// Project grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Technology badges shown on a card before collapsing into "+N".
    pub max_card_technologies: usize,
    /// Shown when the active filter matches nothing.
    pub empty_message: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_card_technologies: 4,
            empty_message: "No projects in this category yet.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and modal background.
    pub surface: String,
    pub text: String,
    /// Descriptions, captions, inactive filter tabs.
    pub text_muted: String,
    pub border: String,
    /// Badges, active dot, active filter tab, buttons.
    pub accent: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            surface: "#0f172a".to_string(),
            text: "#f5f5f5".to_string(),
            text_muted: "#a3a3a3".to_string(),
            border: "#1e293b".to_string(),
            accent: "#0ea5e9".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ShowcaseConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value, `None` if absent.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ShowcaseConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ShowcaseConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<ShowcaseConfig, ConfigError> {
    resolve_config(load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[site]
# <title> of the rendered page.
title = "Projects"
# Heading above the featured carousel.
heading = "My Projects"

# ---------------------------------------------------------------------------
# Featured carousel
# ---------------------------------------------------------------------------
[carousel]
# Milliseconds between automatic advances to the next project.
auto_advance_ms = 10000
# Start the interval over whenever the visitor uses next/prev or a dot.
# Off by default: manual navigation leaves the timer schedule alone.
restart_on_navigate = false

# ---------------------------------------------------------------------------
# Project grid
# ---------------------------------------------------------------------------
[grid]
# Technology badges shown on a card; the rest collapse into "+N".
max_card_technologies = 4
# Shown when the selected category has no projects.
empty_message = "No projects in this category yet."

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#0a0a0a"
surface = "#0f172a"       # Cards, modal
text = "#f5f5f5"
text_muted = "#a3a3a3"    # Descriptions, captions
border = "#1e293b"
accent = "#0ea5e9"        # Badges, active dot, buttons
"##
}

/// Generate CSS custom properties from the color scheme.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-accent: {accent};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        accent = colors.accent,
    )
}
