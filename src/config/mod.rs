//! Settings sources and the shared key-map parser.

mod builder;
mod context;
mod env;
mod error;
mod file;
pub mod keys;
mod parse;
mod source;

use std::collections::HashMap;

/// Raw string-keyed configuration as supplied by a host or the environment.
pub type ConfigMap = HashMap<String, String>;

pub use builder::SettingsResolver;
pub use context::ContextSource;
pub use env::{read_env_map, EnvSource};
pub use error::ConfigError;
pub use file::FileSource;
pub use parse::parse_settings;
pub use source::SettingsSource;
