use crate::error::{InvertError, Result};
use crate::rules::LotteryRules;
use serde::{Deserialize, Serialize};

/// Number of recommended games produced per draw request.
pub const DEFAULT_DRAW_COUNT: usize = 5;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSettings {
    #[serde(default = "default_count")]
    pub count: usize,
    /// Fixed seed for reproducible draws. Entropy is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_count() -> usize {
    DEFAULT_DRAW_COUNT
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_DRAW_COUNT,
            seed: None,
        }
    }
}

/// Root configuration of the application (domain model).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub rules: LotteryRules,
    #[serde(default)]
    pub draw: DrawSettings,
}

impl RootConfig {
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.draw.count == 0 {
            return Err(InvertError::config("draw.count must be at least 1"));
        }
        Ok(())
    }
}
