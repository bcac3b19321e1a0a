//! Mapping from a raw key map to [`AzureSettings`].
//!
//! Every source funnels through [`parse_settings`], so a value means the same
//! thing whether it came from a host configuration, the environment or a file.

use super::keys;
use super::ConfigMap;
use crate::settings::{AzureSettings, TokenEndpointSettings, WorkloadIdentitySettings};

/// Builds settings from a key map.
///
/// Unknown keys are ignored and missing keys fall back to empty strings or
/// `false`. A boolean is `true` only for the exact text `"true"`. The nested
/// sections are created when at least one of their keys is present.
pub fn parse_settings(map: &ConfigMap) -> AzureSettings {
    let string = |key: &str| map.get(key).cloned().unwrap_or_default();
    let flag = |key: &str| map.get(key).is_some_and(|v| v == "true");
    let any_present = |group: &[&str]| group.iter().any(|key| map.contains_key(*key));

    let user_identity_token_endpoint = any_present(&keys::USER_IDENTITY_ENDPOINT_KEYS[..]).then(|| {
        TokenEndpointSettings {
            client_id: string(keys::USER_IDENTITY_CLIENT_ID),
            client_secret: string(keys::USER_IDENTITY_CLIENT_SECRET),
            token_url: string(keys::USER_IDENTITY_TOKEN_URL),
            username_assertion: map
                .get(keys::USER_IDENTITY_ASSERTION)
                .is_some_and(|v| v == keys::USERNAME_ASSERTION),
        }
    });

    let workload_identity_settings =
        any_present(&keys::WORKLOAD_IDENTITY_KEYS[..]).then(|| WorkloadIdentitySettings {
            client_id: string(keys::WORKLOAD_IDENTITY_CLIENT_ID),
            tenant_id: string(keys::WORKLOAD_IDENTITY_TENANT_ID),
            token_file: string(keys::WORKLOAD_IDENTITY_TOKEN_FILE),
        });

    AzureSettings {
        cloud: string(keys::AZURE_CLOUD),
        azure_auth_enabled: flag(keys::AZURE_AUTH_ENABLED),
        managed_identity_enabled: flag(keys::MANAGED_IDENTITY_ENABLED),
        managed_identity_client_id: string(keys::MANAGED_IDENTITY_CLIENT_ID),
        user_identity_enabled: flag(keys::USER_IDENTITY_ENABLED),
        user_identity_token_endpoint,
        workload_identity_enabled: flag(keys::WORKLOAD_IDENTITY_ENABLED),
        workload_identity_settings,
    }
}
