//! Azure authentication settings resolution.
//!
//! Settings come from the configuration a host attaches to a
//! [`RequestContext`] when there is any, and from process environment
//! variables otherwise. Both are parsed by the same rules, see
//! [`parse_settings`].

pub mod config;
pub mod context;
mod error;
pub mod settings;

#[cfg(test)]
mod test_util;

pub use config::{
    keys, parse_settings, read_env_map, ConfigError, ConfigMap, SettingsResolver, SettingsSource,
};
pub use context::{ConfigProvider, HostConfig, RequestContext};
pub use error::Error;
pub use settings::{
    AzureSettings, TokenEndpointSettings, WorkloadIdentitySettings, AZURE_CHINA, AZURE_CUSTOMIZED,
    AZURE_PUBLIC, AZURE_US_GOVERNMENT,
};

use config::ContextSource;

/// Reads settings from the configuration attached to `ctx`.
///
/// Returns `(AzureSettings::default(), false)` when no configuration is
/// attached or the attached map is empty. Any non-empty map is parsed and
/// reported as found, whether or not it holds Azure keys.
pub fn read_from_context(ctx: &RequestContext) -> (AzureSettings, bool) {
    match ContextSource::new(ctx).snapshot() {
        Some(map) => (parse_settings(&map), true),
        None => (AzureSettings::default(), false),
    }
}

/// Reads settings from process environment variables.
pub fn read_from_env() -> AzureSettings {
    parse_settings(&read_env_map())
}

/// Reads settings from `ctx`, falling back to the environment.
///
/// Never fails today; the error is kept so richer sources can be added
/// without changing the signature.
pub fn read_settings(ctx: &RequestContext) -> Result<AzureSettings, Error> {
    let settings = SettingsResolver::builder()
        .with_context(ctx)
        .with_env()
        .resolve()?;
    Ok(settings)
}
