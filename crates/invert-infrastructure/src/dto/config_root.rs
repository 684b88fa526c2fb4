//! ConfigRoot DTO for `config.toml`.

use invert_core::config::{DEFAULT_DRAW_COUNT, DrawSettings, RootConfig};
use invert_core::rules::{DEFAULT_GAMES, PICK_SIZE, UNIVERSE_MAX};
use invert_core::{InvertError, LotteryRules};
use serde::{Deserialize, Serialize};

/// Current schema version written to new files.
pub const CONFIG_VERSION: &str = "1.0.0";

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_universe_max() -> u8 {
    UNIVERSE_MAX
}

fn default_games() -> usize {
    DEFAULT_GAMES
}

fn default_capacity() -> usize {
    PICK_SIZE
}

fn default_count() -> usize {
    DEFAULT_DRAW_COUNT
}

/// `[rules]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesDTO {
    #[serde(default = "default_universe_max")]
    pub universe_max: u8,
    #[serde(default = "default_games")]
    pub games: usize,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// `[draw]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawDTO {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRootDTO {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesDTO,
    #[serde(default)]
    pub draw: DrawDTO,
}

impl Default for RulesDTO {
    fn default() -> Self {
        LotteryRules::default().into()
    }
}

impl Default for DrawDTO {
    fn default() -> Self {
        DrawSettings::default().into()
    }
}

impl Default for ConfigRootDTO {
    fn default() -> Self {
        RootConfig::default().into()
    }
}

// ============================================================================
// Domain conversions
// ============================================================================

impl From<LotteryRules> for RulesDTO {
    fn from(rules: LotteryRules) -> Self {
        Self {
            universe_max: rules.universe_max,
            games: rules.games,
            capacity: rules.capacity,
        }
    }
}

impl From<DrawSettings> for DrawDTO {
    fn from(draw: DrawSettings) -> Self {
        Self {
            count: draw.count,
            seed: draw.seed,
        }
    }
}

impl From<RootConfig> for ConfigRootDTO {
    fn from(config: RootConfig) -> Self {
        Self {
            version: default_version(),
            rules: config.rules.into(),
            draw: config.draw.into(),
        }
    }
}

impl TryFrom<ConfigRootDTO> for RootConfig {
    type Error = InvertError;

    fn try_from(dto: ConfigRootDTO) -> Result<Self, Self::Error> {
        if dto.version != CONFIG_VERSION {
            return Err(InvertError::config(format!(
                "unsupported config version '{}' (expected {})",
                dto.version, CONFIG_VERSION
            )));
        }

        let config = RootConfig {
            rules: LotteryRules {
                universe_max: dto.rules.universe_max,
                games: dto.rules.games,
                capacity: dto.rules.capacity,
            },
            draw: DrawSettings {
                count: dto.draw.count,
                seed: dto.draw.seed,
            },
        };
        config.validate()?;
        Ok(config)
    }
}
