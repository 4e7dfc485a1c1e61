//! Client configuration loaded with Figment.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `riq.toml` in the working directory (or an explicit path)
//! 3. Environment variables prefixed with `RIQ_`

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Default configuration file name
pub const CONFIG_FILE: &str = "riq.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RIQ_";

/// Settings for talking to the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the REST API; record nodes are appended to it.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.relateiq.com/v2".to_string(),
            timeout_secs: 30,
            user_agent: format!("riq-lists/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load from defaults, `riq.toml` and `RIQ_*` variables.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load using an explicit configuration file. A missing file is skipped.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading client configuration");
        let config: ClientConfig = Self::figment(path).extract()?;
        debug!(base_url = %config.base_url, "client configuration loaded");
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ClientConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
