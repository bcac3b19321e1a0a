//! Settings source backed by a request context.

use std::sync::Arc;

use super::source::SettingsSource;
use super::{ConfigError, ConfigMap};
use crate::context::{ConfigProvider, RequestContext};

/// Reads the configuration snapshot attached to a [`RequestContext`].
///
/// Reports "found" only when a provider is attached and its map has at least
/// one entry. Which keys the map holds does not matter.
#[derive(Debug, Clone, Default)]
pub struct ContextSource {
    provider: Option<Arc<dyn ConfigProvider>>,
}

impl ContextSource {
    pub fn new(ctx: &RequestContext) -> Self {
        Self {
            provider: ctx.config().cloned(),
        }
    }

    /// Returns the attached map when it is present and non-empty.
    pub fn snapshot(&self) -> Option<ConfigMap> {
        self.provider
            .as_ref()?
            .lookup()
            .filter(|map| !map.is_empty())
    }
}

impl SettingsSource for ContextSource {
    fn fetch(&self) -> Result<Option<ConfigMap>, ConfigError> {
        Ok(self.snapshot())
    }

    fn name(&self) -> &'static str {
        "context"
    }
}
