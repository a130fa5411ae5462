//! Application configuration: backend endpoint, credential and dashboard policy.
//!
//! Values come from an optional TOML file, then the `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY` environment variables, then inert placeholders.
//! Nothing here fails because a value is missing; an unreachable placeholder
//! endpoint simply routes every call into the fallback paths.

use std::{fs, path::Path, time::Duration};

use secrecy::SecretString;
use serde::Deserialize;
use shared_utils::env::get_env_var;

use crate::{errors::Error, models::demand::CategoryScheme};

pub const ENDPOINT_ENV: &str = "SUPABASE_URL";
pub const ACCESS_KEY_ENV: &str = "SUPABASE_ANON_KEY";

pub const PLACEHOLDER_ENDPOINT: &str = "https://placeholder.supabase.co";
pub const PLACEHOLDER_ACCESS_KEY: &str = "placeholder-key";
pub const DEFAULT_TABLE: &str = "vpp_customers";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the persistence backend.
#[derive(Debug)]
pub struct BackendConfig {
    /// Base URL of the hosted project, e.g. `https://xyz.supabase.co`.
    pub endpoint_url: String,
    /// Anonymous access key sent with every request.
    pub access_key: SecretString,
    /// Name of the customer table.
    pub table: String,
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint_url: PLACEHOLDER_ENDPOINT.to_string(),
            access_key: SecretString::from(PLACEHOLDER_ACCESS_KEY),
            table: DEFAULT_TABLE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    /// Placeholder defaults overridden by whatever the environment provides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Whether the endpoint is still the inert placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.endpoint_url == PLACEHOLDER_ENDPOINT
    }

    fn apply_env(&mut self) {
        if let Ok(url) = get_env_var(ENDPOINT_ENV) {
            self.endpoint_url = url;
        }
        if let Ok(key) = get_env_var(ACCESS_KEY_ENV) {
            self.access_key = SecretString::from(key);
        }
    }
}

/// How a successful fetch combines with the demo dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Fetched rows replace whatever the store held.
    #[default]
    Replace,
    /// Fetched rows first, followed by the demo customers.
    MergeWithDemo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardSettings {
    pub fetch_policy: FetchPolicy,
    pub category_scheme: CategoryScheme,
}

/// Fully resolved configuration.
#[derive(Debug, Default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAppConfig {
    backend: RawBackendConfig,
    dashboard: DashboardSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawBackendConfig {
    endpoint_url: Option<String>,
    access_key: Option<String>,
    table: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl From<RawAppConfig> for AppConfig {
    fn from(raw: RawAppConfig) -> Self {
        let defaults = BackendConfig::default();
        let b = raw.backend;
        AppConfig {
            backend: BackendConfig {
                endpoint_url: b.endpoint_url.unwrap_or(defaults.endpoint_url),
                access_key: b
                    .access_key
                    .map(SecretString::from)
                    .unwrap_or(defaults.access_key),
                table: b.table.unwrap_or(defaults.table),
                request_timeout: b
                    .request_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.request_timeout),
            },
            dashboard: raw.dashboard,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document. Environment variables are not consulted.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawAppConfig = toml::from_str(content)?;
        Ok(raw.into())
    }

    /// Loads configuration from `path` (if given) and applies environment overrides.
    ///
    /// Without a path the result is placeholders plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&content).map_err(|source| Error::ConfigParse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => Self::default(),
        };
        config.backend.apply_env();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn empty_document_gives_placeholders() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(config.backend.is_placeholder());
        assert_eq!(config.backend.access_key.expose_secret(), PLACEHOLDER_ACCESS_KEY);
        assert_eq!(config.backend.table, DEFAULT_TABLE);
        assert_eq!(config.dashboard, DashboardSettings::default());
    }

    #[test]
    fn full_document_parses() {
        let config = AppConfig::from_toml_str(
            r#"
            [backend]
            endpoint_url = "https://demo.supabase.co"
            access_key = "anon"
            table = "customers"
            request_timeout_secs = 3

            [dashboard]
            fetch_policy = "merge_with_demo"
            category_scheme = "with_load"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.endpoint_url, "https://demo.supabase.co");
        assert_eq!(config.backend.access_key.expose_secret(), "anon");
        assert_eq!(config.backend.table, "customers");
        assert_eq!(config.backend.request_timeout, Duration::from_secs(3));
        assert_eq!(config.dashboard.fetch_policy, FetchPolicy::MergeWithDemo);
        assert_eq!(config.dashboard.category_scheme, CategoryScheme::WithLoad);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml_str("[backend]\nurl = \"x\"").is_err());
        assert!(AppConfig::from_toml_str("[dashboard]\nfetch_policy = \"append\"").is_err());
    }

    #[test]
    fn debug_output_hides_access_key() {
        let config = AppConfig::from_toml_str("[backend]\naccess_key = \"super-secret\"").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
