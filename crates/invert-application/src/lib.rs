//! Application layer for invert.
//!
//! Use cases that a presentation layer drives: one [`InvertSession`] per
//! user, built by a [`SessionFactory`] from the loaded configuration.

pub mod session;

pub use session::{DrawReport, InvertSession, SessionFactory};
