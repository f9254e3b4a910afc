use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::models::Section;

/// Root configuration structure, deserialized from `.orcid-rendr/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display rules.
    pub display: DisplayConfig,
}

/// Defines what gets rendered and how.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Markdown heading level used for section headings (1–6).
    pub heading_level: u8,
    /// Per-section overrides keyed by section id (e.g. `"educations"`).
    pub sections: HashMap<String, SectionConfig>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            heading_level: 2,
            sections: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Whether the section is rendered at all.
    pub show: bool,
    /// Record paths hidden from display, matched against the normalized `path`.
    pub exclude: Vec<String>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        SectionConfig {
            show: true,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    pub fn is_shown(&self, section: Section) -> bool {
        self.display
            .sections
            .get(section.id())
            .map_or(true, |s| s.show)
    }

    /// Whether a record is hidden from display. Only sections whose registry
    /// entry allows exclusion honor the configured list.
    pub fn is_excluded(&self, section: Section, path: &str) -> bool {
        if !section.spec().can_exclude {
            return false;
        }
        self.display
            .sections
            .get(section.id())
            .map_or(false, |s| s.exclude.iter().any(|p| p == path))
    }

    pub fn heading_level(&self) -> u8 {
        self.display.heading_level.clamp(1, 6)
    }
}

/// Load the display configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.orcid-rendr/config.toml`
/// 3. `~/.config/orcid-rendr/config.toml`
/// 4. Built-in [`Config::default`] (everything shown, nothing excluded)
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local = Path::new(".orcid-rendr").join("config.toml");
    if local.exists() {
        let content = std::fs::read_to_string(&local)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("orcid-rendr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
