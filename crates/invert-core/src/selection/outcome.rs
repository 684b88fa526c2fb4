use serde::{Deserialize, Serialize};

/// Result of toggling a number in a game's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The number was not marked and has been added.
    Added,
    /// The number was marked and has been removed.
    Removed,
    /// The selection is full; nothing changed.
    ///
    /// This is an advisory for the user, not an error.
    CapacityReached { capacity: usize },
}

impl ToggleOutcome {
    /// Returns true if the selection changed.
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::CapacityReached { .. })
    }
}
