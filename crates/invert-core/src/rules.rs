//! Board rules: the number universe, the number of games and the pick size.

use crate::error::{InvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest number on the board. The universe is `1..=UNIVERSE_MAX`.
pub const UNIVERSE_MAX: u8 = 45;

/// Number of independent games on one board.
pub const DEFAULT_GAMES: usize = 5;

/// Numbers per game, both for marked selections and for drawn picks.
pub const PICK_SIZE: usize = 6;

/// Shape of a board.
///
/// The defaults describe the classic 6/45 board with five games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryRules {
    /// Highest number in the universe (lowest is always 1).
    #[serde(default = "default_universe_max")]
    pub universe_max: u8,
    /// Number of games on the board.
    #[serde(default = "default_games")]
    pub games: usize,
    /// Maximum selection size per game, and size of every drawn pick.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
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

impl Default for LotteryRules {
    fn default() -> Self {
        Self {
            universe_max: UNIVERSE_MAX,
            games: DEFAULT_GAMES,
            capacity: PICK_SIZE,
        }
    }
}

impl LotteryRules {
    /// Checks the rules describe a playable board.
    pub fn validate(&self) -> Result<()> {
        if self.universe_max == 0 {
            return Err(InvertError::config("universe_max must be at least 1"));
        }
        if self.games == 0 || self.games > self.universe_max as usize {
            return Err(InvertError::config(format!(
                "games must be between 1 and {}, got {}",
                self.universe_max, self.games
            )));
        }
        if self.capacity == 0 || self.capacity > self.universe_max as usize {
            return Err(InvertError::config(format!(
                "capacity must be between 1 and {}, got {}",
                self.universe_max, self.capacity
            )));
        }
        Ok(())
    }

    /// Every number on the board, ascending.
    pub fn universe(&self) -> BTreeSet<u8> {
        (1..=self.universe_max).collect()
    }

    /// Returns true if `number` is on the board.
    pub fn contains(&self, number: u8) -> bool {
        (1..=self.universe_max).contains(&number)
    }

    /// Rejects a game index outside `[0, games)`.
    pub fn check_game(&self, game_index: usize) -> Result<()> {
        if game_index < self.games {
            Ok(())
        } else {
            Err(InvertError::invalid_argument(format!(
                "game index {} out of range 0..{}",
                game_index, self.games
            )))
        }
    }

    /// Rejects a number outside `[1, universe_max]`.
    pub fn check_number(&self, number: u8) -> Result<()> {
        if self.contains(number) {
            Ok(())
        } else {
            Err(InvertError::invalid_argument(format!(
                "number {} out of range 1..={}",
                number, self.universe_max
            )))
        }
    }
}

/// Display label of a game: `A` for index 0, `B` for 1, and so on.
///
/// Indices past `Z` fall back to a 1-based number.
pub fn game_label(game_index: usize) -> String {
    if game_index < 26 {
        char::from(b'A' + game_index as u8).to_string()
    } else {
        (game_index + 1).to_string()
    }
}
