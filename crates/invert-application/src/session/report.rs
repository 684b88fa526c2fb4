use invert_core::Recommendation;
use serde::{Deserialize, Serialize};

/// Outcome of a successful inverse draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// How many numbers were left to draw from.
    pub remaining: usize,
    /// Recommended games, each ascending.
    pub recommendations: Vec<Recommendation>,
}
