use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{AnalysisKind, Endpoints};
use crate::consts::{LOCAL_ORIGIN, PRODUCTION_ORIGIN};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub local_origin: String,
    pub production_origin: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            local_origin: LOCAL_ORIGIN.to_string(),
            production_origin: PRODUCTION_ORIGIN.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host the client considers itself served from. Picks the origin.
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default)]
    pub analysis: AnalysisKind,
    /// Per-request timeout. Unset means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

fn default_hostname() -> String {
    "localhost".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            analysis: AnalysisKind::default(),
            request_timeout_secs: None,
            endpoints: EndpointConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// URLs for the origin selected by `hostname`.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::for_hostname(&self.hostname, &self.endpoints)
    }
}
