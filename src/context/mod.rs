//! Request-scoped context carrying host-supplied configuration.

use std::fmt;
use std::sync::Arc;

use crate::config::ConfigMap;

/// Something that can hand out a snapshot of host configuration.
///
/// `None` means no configuration map is attached at all.
pub trait ConfigProvider: Send + Sync + fmt::Debug {
    fn lookup(&self) -> Option<ConfigMap>;
}

/// Configuration snapshot a host attaches to a single logical operation.
///
/// `HostConfig::default()` carries no map, which readers treat the same as an
/// empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    config: Option<ConfigMap>,
}

impl HostConfig {
    pub fn new(config: Option<ConfigMap>) -> Self {
        Self { config }
    }

    /// Returns the raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.as_ref()?.get(key).map(String::as_str)
    }
}

impl From<ConfigMap> for HostConfig {
    fn from(config: ConfigMap) -> Self {
        Self::new(Some(config))
    }
}

impl ConfigProvider for HostConfig {
    fn lookup(&self) -> Option<ConfigMap> {
        self.config.clone()
    }
}

/// Context value threaded through a call chain.
///
/// Cheap to clone; the attached provider is shared.
///
/// ## Example
///
/// ```
/// use azsettings::{keys, read_from_context, HostConfig, RequestContext};
///
/// let config = HostConfig::from(
///     [(keys::AZURE_AUTH_ENABLED.to_string(), "true".to_string())]
///         .into_iter()
///         .collect::<azsettings::ConfigMap>(),
/// );
/// let ctx = RequestContext::new().with_config(config);
///
/// let (settings, found) = read_from_context(&ctx);
/// assert!(found);
/// assert!(settings.azure_auth_enabled);
/// ```
#[derive(Clone, Default)]
pub struct RequestContext {
    config: Option<Arc<dyn ConfigProvider>>,
}

impl RequestContext {
    /// Creates a context with no configuration attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a configuration provider, replacing any previous one.
    #[must_use]
    pub fn with_config(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.config = Some(Arc::new(provider));
        self
    }

    /// Returns the attached configuration provider, if any.
    pub fn config(&self) -> Option<&Arc<dyn ConfigProvider>> {
        self.config.as_ref()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("has_config", &self.config.is_some())
            .finish()
    }
}
