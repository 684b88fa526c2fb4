//! Per-game number selections.

pub mod outcome;
pub mod pool;

pub use outcome::ToggleOutcome;
pub use pool::SelectionPool;
