pub mod config;
pub mod draw;
pub mod utils;
