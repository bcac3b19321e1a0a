use super::keys::ALL_KEYS;
use super::source::SettingsSource;
use super::{ConfigError, ConfigMap};

/// Reads the recognized keys from process environment variables.
///
/// Always reports "found", so it is normally the last source in a chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for EnvSource {
    fn fetch(&self) -> Result<Option<ConfigMap>, ConfigError> {
        Ok(Some(read_env_map()))
    }

    fn name(&self) -> &'static str {
        "env"
    }
}

/// Collects every recognized key that is set in the environment.
///
/// Unset variables are left out of the map. Values that are not valid
/// UTF-8 are treated as unset.
pub fn read_env_map() -> ConfigMap {
    ALL_KEYS
        .iter()
        .filter_map(|key| {
            std::env::var(key)
                .ok()
                .map(|value| (key.to_string(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys;
    use crate::test_util::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_only_set_keys_are_collected() {
        let _env = EnvGuard::clear_all()
            .set(keys::AZURE_CLOUD, "AzureChinaCloud")
            .set(keys::USER_IDENTITY_CLIENT_SECRET, "");

        let map = read_env_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map[keys::AZURE_CLOUD], "AzureChinaCloud");
        assert_eq!(map[keys::USER_IDENTITY_CLIENT_SECRET], "");
        assert!(!map.contains_key(keys::AZURE_AUTH_ENABLED));
    }

    #[test]
    #[serial]
    fn test_unrelated_variables_ignored() {
        let _env = EnvGuard::clear_all().set("GFAZPL_NOT_A_KEY", "true");

        assert!(read_env_map().is_empty());
        assert_eq!(EnvSource::new().fetch().unwrap(), Some(ConfigMap::new()));
    }
}
