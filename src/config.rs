use std::path::PathBuf;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::{DEFAULT_FIELD_SIZE, LEVEL_CAP};
use crate::error::{GameError, GameResult};
use crate::field::PlayField;

/// Prefix shared by every environment variable the game reads.
pub const ENV_PREFIX: &str = "CAREER_QUEST_";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Play field width in pixels
    #[serde(default = "default_width")]
    pub width: f32,
    /// Play field height in pixels
    #[serde(default = "default_height")]
    pub height: f32,
    /// Clearing this many levels ends the campaign
    #[serde(default = "default_level_cap")]
    pub level_cap: u32,
    /// Fixed RNG seed. Random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Directory probed for sprite images
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    /// Ticks the headless runner simulates before giving up
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
    /// Start with audio muted
    #[serde(default)]
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            level_cap: default_level_cap(),
            seed: None,
            asset_root: default_asset_root(),
            max_ticks: default_max_ticks(),
            muted: false,
        }
    }
}

impl GameConfig {
    /// Loads the configuration from `CAREER_QUEST_*` environment variables, falling back to defaults.
    pub fn load() -> GameResult<Self> {
        Self::from_figment(Figment::new().merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> GameResult<Self> {
        let config: GameConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        self.field()?;

        if self.level_cap == 0 {
            return Err(GameError::Config("level_cap must be at least 1".into()));
        }

        Ok(())
    }

    /// The play field described by this configuration.
    pub fn field(&self) -> GameResult<PlayField> {
        Ok(PlayField::new(self.width, self.height)?)
    }
}

fn default_width() -> f32 {
    DEFAULT_FIELD_SIZE.x
}

fn default_height() -> f32 {
    DEFAULT_FIELD_SIZE.y
}

fn default_level_cap() -> u32 {
    LEVEL_CAP
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_max_ticks() -> u64 {
    3600
}
