//! Configuration: TOML file on disk, defaults for everything.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{CardSpec, Config, DeckConfig, UiConfig};
