//! Normalized Azure authentication settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::keys;
use crate::config::ConfigMap;

/// Azure public cloud.
pub const AZURE_PUBLIC: &str = "AzureCloud";
/// Azure China (21Vianet).
pub const AZURE_CHINA: &str = "AzureChinaCloud";
/// Azure US Government.
pub const AZURE_US_GOVERNMENT: &str = "AzureUSGovernment";
/// Customized cloud with host-provided endpoints.
pub const AZURE_CUSTOMIZED: &str = "AzureCustomizedCloud";

/// Authentication settings resolved from a host configuration or the environment.
///
/// Always built fresh by the readers in this crate. Fields missing from the
/// source are left at their zero values; the nested sections are `None` when
/// none of their keys were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AzureSettings {
    pub cloud: String,
    pub azure_auth_enabled: bool,

    pub managed_identity_enabled: bool,
    pub managed_identity_client_id: String,

    pub user_identity_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_identity_token_endpoint: Option<TokenEndpointSettings>,

    pub workload_identity_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_identity_settings: Option<WorkloadIdentitySettings>,
}

/// Token endpoint used by the user identity flow.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenEndpointSettings {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub username_assertion: bool,
}

impl fmt::Debug for TokenEndpointSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.client_secret.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("TokenEndpointSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &secret)
            .field("token_url", &self.token_url)
            .field("username_assertion", &self.username_assertion)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadIdentitySettings {
    pub client_id: String,
    pub tenant_id: String,
    pub token_file: String,
}

impl AzureSettings {
    /// Returns the configured cloud, or [`AZURE_PUBLIC`] when none is set.
    pub fn default_cloud(&self) -> &str {
        if self.cloud.is_empty() {
            AZURE_PUBLIC
        } else {
            &self.cloud
        }
    }

    /// Renders the settings back into the key map they are parsed from.
    ///
    /// Empty top-level strings are omitted. A present nested section always
    /// emits its string keys so that it survives a re-parse.
    pub fn to_config_map(&self) -> ConfigMap {
        let mut map = ConfigMap::new();
        let mut put = |key: &str, value: &str| {
            map.insert(key.to_string(), value.to_string());
        };

        if !self.cloud.is_empty() {
            put(keys::AZURE_CLOUD, self.cloud.as_str());
        }
        put(keys::AZURE_AUTH_ENABLED, bool_str(self.azure_auth_enabled));
        put(
            keys::MANAGED_IDENTITY_ENABLED,
            bool_str(self.managed_identity_enabled),
        );
        if !self.managed_identity_client_id.is_empty() {
            put(
                keys::MANAGED_IDENTITY_CLIENT_ID,
                self.managed_identity_client_id.as_str(),
            );
        }

        put(
            keys::USER_IDENTITY_ENABLED,
            bool_str(self.user_identity_enabled),
        );
        if let Some(endpoint) = &self.user_identity_token_endpoint {
            put(keys::USER_IDENTITY_CLIENT_ID, endpoint.client_id.as_str());
            put(keys::USER_IDENTITY_CLIENT_SECRET, endpoint.client_secret.as_str());
            put(keys::USER_IDENTITY_TOKEN_URL, endpoint.token_url.as_str());
            if endpoint.username_assertion {
                put(keys::USER_IDENTITY_ASSERTION, keys::USERNAME_ASSERTION);
            }
        }

        put(
            keys::WORKLOAD_IDENTITY_ENABLED,
            bool_str(self.workload_identity_enabled),
        );
        if let Some(workload) = &self.workload_identity_settings {
            put(keys::WORKLOAD_IDENTITY_CLIENT_ID, workload.client_id.as_str());
            put(keys::WORKLOAD_IDENTITY_TENANT_ID, workload.tenant_id.as_str());
            put(keys::WORKLOAD_IDENTITY_TOKEN_FILE, workload.token_file.as_str());
        }

        map
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
