use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use sweeper_core::{CellCount, Coord, GameConfig};

/// Contents of the optional TOML settings file, every key is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub seed: Option<u64>,
    pub mute: bool,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("Could not parse settings in {}", path.display()))?;
        log::debug!("Loaded settings from {}: {settings:?}", path.display());
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.width, self.height, self.mines)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let GameConfig {
            width,
            height,
            mines,
        } = GameConfig::default();
        Self {
            width,
            height,
            mines,
            seed: None,
            mute: false,
        }
    }
}
