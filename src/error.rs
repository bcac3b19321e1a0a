use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the azsettings library.
///
/// Reading from a request context or the environment never fails; only
/// additional sources such as settings files can produce an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("settings source error: {0}")]
    Config(#[from] ConfigError),
}
