//! Recognized configuration keys.
//!
//! The same names are used as keys of a host-supplied configuration map and
//! as process environment variable names.

/// Cloud the plugin is running in (see [`crate::settings::AZURE_PUBLIC`]).
pub const AZURE_CLOUD: &str = "GFAZPL_AZURE_CLOUD";
/// Master switch for Azure authentication.
pub const AZURE_AUTH_ENABLED: &str = "GFAZPL_AZURE_AUTH_ENABLED";

pub const MANAGED_IDENTITY_ENABLED: &str = "GFAZPL_MANAGED_IDENTITY_ENABLED";
pub const MANAGED_IDENTITY_CLIENT_ID: &str = "GFAZPL_MANAGED_IDENTITY_CLIENT_ID";

pub const USER_IDENTITY_ENABLED: &str = "GFAZPL_USER_IDENTITY_ENABLED";
pub const USER_IDENTITY_CLIENT_ID: &str = "GFAZPL_USER_IDENTITY_CLIENT_ID";
pub const USER_IDENTITY_CLIENT_SECRET: &str = "GFAZPL_USER_IDENTITY_CLIENT_SECRET";
pub const USER_IDENTITY_TOKEN_URL: &str = "GFAZPL_USER_IDENTITY_TOKEN_URL";
/// Assertion type; only the literal `"username"` is recognized.
pub const USER_IDENTITY_ASSERTION: &str = "GFAZPL_USER_IDENTITY_ASSERTION";

pub const WORKLOAD_IDENTITY_ENABLED: &str = "GFAZPL_WORKLOAD_IDENTITY_ENABLED";
pub const WORKLOAD_IDENTITY_CLIENT_ID: &str = "GFAZPL_WORKLOAD_IDENTITY_CLIENT_ID";
pub const WORKLOAD_IDENTITY_TENANT_ID: &str = "GFAZPL_WORKLOAD_IDENTITY_TENANT_ID";
pub const WORKLOAD_IDENTITY_TOKEN_FILE: &str = "GFAZPL_WORKLOAD_IDENTITY_TOKEN_FILE";

/// Value of [`USER_IDENTITY_ASSERTION`] that enables username assertion.
pub const USERNAME_ASSERTION: &str = "username";

/// Keys whose presence creates the user identity token endpoint section.
pub const USER_IDENTITY_ENDPOINT_KEYS: [&str; 4] = [
    USER_IDENTITY_CLIENT_ID,
    USER_IDENTITY_CLIENT_SECRET,
    USER_IDENTITY_TOKEN_URL,
    USER_IDENTITY_ASSERTION,
];

/// Keys whose presence creates the workload identity section.
pub const WORKLOAD_IDENTITY_KEYS: [&str; 3] = [
    WORKLOAD_IDENTITY_CLIENT_ID,
    WORKLOAD_IDENTITY_TENANT_ID,
    WORKLOAD_IDENTITY_TOKEN_FILE,
];

/// Every recognized key, in declaration order.
pub const ALL_KEYS: [&str; 13] = [
    AZURE_CLOUD,
    AZURE_AUTH_ENABLED,
    MANAGED_IDENTITY_ENABLED,
    MANAGED_IDENTITY_CLIENT_ID,
    USER_IDENTITY_ENABLED,
    USER_IDENTITY_CLIENT_ID,
    USER_IDENTITY_CLIENT_SECRET,
    USER_IDENTITY_TOKEN_URL,
    USER_IDENTITY_ASSERTION,
    WORKLOAD_IDENTITY_ENABLED,
    WORKLOAD_IDENTITY_CLIENT_ID,
    WORKLOAD_IDENTITY_TENANT_ID,
    WORKLOAD_IDENTITY_TOKEN_FILE,
];
