//! Global weekcal configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{WeekcalError, WeekcalResult};
use crate::palette::Palette;

/// Configuration at ~/.config/weekcal/config.toml
///
/// Only card colors are configurable; events themselves are never written
/// to disk.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct WeekcalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral_color: Option<String>,

    /// Category name → `#rrggbb`, merged over the built-in colors
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub colors: HashMap<String, String>,
}

impl WeekcalConfig {
    pub fn config_path() -> WeekcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WeekcalError::Config("Could not determine config directory".into()))?
            .join("weekcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config at `path`, or at the default location when `None`.
    ///
    /// A commented-out default file is written to the default location the
    /// first time it is missing. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> WeekcalResult<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => {
                let p = Self::config_path()?;
                if !p.exists() {
                    Self::create_default_config(&p)?;
                }
                (p, false)
            }
        };

        tracing::debug!(path = %config_path.display(), "loading config");

        let config: WeekcalConfig = Config::builder()
            .add_source(File::from(config_path).required(required))
            .build()
            .map_err(|e| WeekcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WeekcalError::Config(e.to_string()))?;

        config.check_colors()?;
        Ok(config)
    }

    fn check_colors(&self) -> WeekcalResult<()> {
        let all = self.colors.values().chain(self.neutral_color.iter());
        for color in all {
            if crate::palette::hex_to_rgb(color).is_none() {
                return Err(WeekcalError::Config(format!(
                    "Invalid color \"{}\" (expected #rrggbb)",
                    color
                )));
            }
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::with_overrides(&self.colors, self.neutral_color.as_deref())
    }

    /// The effective config (built-in colors included) as TOML.
    pub fn to_effective_toml(&self) -> WeekcalResult<String> {
        let palette = self.palette();
        let effective = WeekcalConfig {
            neutral_color: Some(palette.neutral().to_string()),
            colors: palette
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };

        toml::to_string_pretty(&effective).map_err(|e| WeekcalError::Serialization(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> WeekcalResult<()> {
        let contents = "\
# weekcal configuration

# Card background per category (#rrggbb):
# [colors]
# academic = \"#e3f2fd\"
# work = \"#f3e5f5\"
# personal = \"#fce4ec\"
# social = \"#e8f5e9\"

# Background for categories without a color:
# neutral_color = \"#f0f0f0\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
