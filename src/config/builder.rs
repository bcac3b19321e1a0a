use std::path::Path;

use super::context::ContextSource;
use super::env::EnvSource;
use super::file::FileSource;
use super::parse::parse_settings;
use super::source::SettingsSource;
use super::ConfigError;
use crate::context::RequestContext;
use crate::settings::AzureSettings;

/// Resolves [`AzureSettings`] from an ordered list of sources.
///
/// Sources are consulted in registration order. The first one that reports
/// a configuration map wins outright; later sources are not read and values
/// are never merged across sources. When no source reports anything the
/// result is `AzureSettings::default()`.
///
/// ## Example
///
/// ```no_run
/// use azsettings::{RequestContext, SettingsResolver};
///
/// let ctx = RequestContext::new();
///
/// // host configuration -> local file -> process environment
/// let settings = SettingsResolver::builder()
///     .with_context(&ctx)
///     .with_file("/etc/grafana/azure.toml", false)
///     .with_env()
///     .resolve()?;
/// # Ok::<(), azsettings::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .resolve() is called"]
pub struct SettingsResolver {
    sources: Vec<Box<dyn SettingsSource>>,
}

impl SettingsResolver {
    /// Creates a resolver with no sources.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds the configuration attached to `ctx`.
    pub fn with_context(self, ctx: &RequestContext) -> Self {
        self.with_source(ContextSource::new(ctx))
    }

    /// Adds the process environment.
    ///
    /// The environment always reports a map, so sources registered after it
    /// are never reached.
    pub fn with_env(self) -> Self {
        self.with_source(EnvSource::new())
    }

    /// Adds a TOML settings file.
    ///
    /// If `required` is `true`, resolution fails if the file doesn't exist.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds a custom source.
    pub fn with_source(mut self, source: impl SettingsSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Consults the sources in order and parses the first map found.
    pub fn resolve(self) -> Result<AzureSettings, ConfigError> {
        for source in &self.sources {
            tracing::trace!(source = source.name(), "consulting settings source");
            if let Some(map) = source.fetch()? {
                tracing::debug!(
                    source = source.name(),
                    entries = map.len(),
                    "resolved azure settings"
                );
                return Ok(parse_settings(&map));
            }
        }

        tracing::debug!("no settings source reported configuration, using defaults");
        Ok(AzureSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{keys, ConfigMap};
    use crate::context::HostConfig;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct CountingSource {
        calls: Arc<AtomicUsize>,
        map: Option<ConfigMap>,
    }

    impl SettingsSource for CountingSource {
        fn fetch(&self) -> Result<Option<ConfigMap>, ConfigError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.map.clone())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn single(key: &str, value: &str) -> ConfigMap {
        let mut map = ConfigMap::new();
        map.insert(key.to_string(), value.to_string());
        map
    }

    #[test]
    fn test_no_sources_yields_defaults() {
        let settings = SettingsResolver::builder().resolve().unwrap();
        assert_eq!(settings, AzureSettings::default());
    }

    #[test]
    fn test_first_found_source_wins() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let settings = SettingsResolver::builder()
            .with_source(CountingSource::default())
            .with_source(CountingSource {
                map: Some(single(keys::AZURE_CLOUD, "first")),
                ..Default::default()
            })
            .with_source(CountingSource {
                calls: later_calls.clone(),
                map: Some(single(keys::AZURE_CLOUD, "second")),
            })
            .resolve()
            .unwrap();

        assert_eq!(settings.cloud, "first");
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_context_falls_through_to_custom_source() {
        let ctx = RequestContext::new().with_config(HostConfig::new(Some(ConfigMap::new())));
        let settings = SettingsResolver::builder()
            .with_context(&ctx)
            .with_source(CountingSource {
                map: Some(single(keys::WORKLOAD_IDENTITY_TENANT_ID, "ten")),
                ..Default::default()
            })
            .resolve()
            .unwrap();

        assert_eq!(
            settings.workload_identity_settings.unwrap().tenant_id,
            "ten"
        );
    }

    #[test]
    fn test_file_source_in_chain() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GFAZPL_USER_IDENTITY_ASSERTION = \"username\"").unwrap();

        let settings = SettingsResolver::builder()
            .with_context(&RequestContext::new())
            .with_file(file.path(), true)
            .resolve()
            .unwrap();

        assert!(settings.user_identity_token_endpoint.unwrap().username_assertion);
    }

    #[test]
    fn test_required_file_error_propagates() {
        let result = SettingsResolver::builder()
            .with_file("/nonexistent/azure.toml", true)
            .resolve();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
