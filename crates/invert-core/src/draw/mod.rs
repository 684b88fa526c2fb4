//! Inverse draws: random picks from the numbers nobody marked.

pub mod drawer;
pub mod recommendation;

pub use drawer::InverseDrawer;
pub use recommendation::Recommendation;
