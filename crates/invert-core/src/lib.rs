//! Selection and inverse-draw engine.
//!
//! A board has several games. The user marks up to six numbers per game in a
//! [`SelectionPool`]; an [`InverseDrawer`] then draws recommended games only
//! from the numbers no game has marked.

pub mod config;
pub mod draw;
pub mod error;
pub mod rules;
pub mod selection;

// Re-export common types
pub use draw::{InverseDrawer, Recommendation};
pub use error::{InvertError, Result};
pub use rules::{LotteryRules, game_label};
pub use selection::{SelectionPool, ToggleOutcome};
