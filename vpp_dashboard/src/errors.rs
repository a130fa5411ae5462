use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for the `vpp_dashboard` crate outside the provider layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::AppConfig`].
    #[error("Failed to parse config file {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Serialising dashboard output failed.
    #[error("JSON serialisation failed")]
    Json(#[from] serde_json::Error),
}
