//! Data Transfer Objects for persisted configuration.
//!
//! DTOs mirror the on-disk layout and carry a schema version. The domain
//! types in `invert_core` never see file-format concerns.

pub mod config_root;

pub use config_root::{CONFIG_VERSION, ConfigRootDTO, DrawDTO, RulesDTO};
