use super::{ConfigError, ConfigMap};

/// A place settings can be read from.
///
/// `Ok(None)` means the source has nothing to offer and the next source in
/// the chain should be consulted. `Ok(Some(map))` ends the search, even if
/// `map` carries none of the recognized keys.
pub trait SettingsSource: Send + Sync + std::fmt::Debug {
    fn fetch(&self) -> Result<Option<ConfigMap>, ConfigError>;

    /// Short label used in log events.
    fn name(&self) -> &'static str;
}
