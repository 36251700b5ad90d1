//! Editor configuration
//!
//! Provides types and loading for the optional `pxs.toml` file.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, find_xdg_config, load_config, ConfigError, CONFIG_FILE};
pub use schema::*;
