use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EndpointConfig;
use crate::consts::{FEEDBACK_PATH, FOLLOW_UP_PATH, LOCAL_HOSTNAMES, SERVER_VERSION_PATH};

/// Which analysis route to submit to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Returns raw HTML and accepts conversation history.
    #[default]
    Verbal,
    /// Returns JSON `{"answer": ...}`.
    Quant,
    /// Returns JSON `{"answer": ...}`.
    Writing,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 3] = [AnalysisKind::Verbal, AnalysisKind::Quant, AnalysisKind::Writing];

    pub fn path(self) -> &'static str {
        match self {
            AnalysisKind::Verbal => "/analyze-gre-verbal",
            AnalysisKind::Quant => "/analyze-gre-quant",
            AnalysisKind::Writing => "/analyze-gre-writing",
        }
    }

    /// Whether a successful response body is HTML (as opposed to JSON).
    pub fn returns_markup(self) -> bool {
        matches!(self, AnalysisKind::Verbal)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisKind::Verbal => write!(f, "Verbal"),
            AnalysisKind::Quant => write!(f, "Quant"),
            AnalysisKind::Writing => write!(f, "Writing"),
        }
    }
}

/// Hostnames compare case-insensitively; one trailing `.` (fully qualified
/// form) is ignored.
pub fn is_local_hostname(hostname: &str) -> bool {
    let host = hostname.strip_suffix('.').unwrap_or(hostname);
    LOCAL_HOSTNAMES
        .iter()
        .any(|local| local.eq_ignore_ascii_case(host))
}

/// `localhost`/`127.0.0.1` select the local origin; anything else the
/// production origin.
pub fn select_origin<'a>(hostname: &str, endpoints: &'a EndpointConfig) -> &'a str {
    if is_local_hostname(hostname) {
        &endpoints.local_origin
    } else {
        &endpoints.production_origin
    }
}

/// Fully resolved URLs for one origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    origin: String,
}

impl Endpoints {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn for_hostname(hostname: &str, endpoints: &EndpointConfig) -> Self {
        Self::new(select_origin(hostname, endpoints))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn analyze(&self, kind: AnalysisKind) -> String {
        format!("{}{}", self.origin, kind.path())
    }

    pub fn follow_up(&self) -> String {
        format!("{}{FOLLOW_UP_PATH}", self.origin)
    }

    pub fn feedback(&self) -> String {
        format!("{}{FEEDBACK_PATH}", self.origin)
    }

    pub fn server_version(&self) -> String {
        format!("{}{SERVER_VERSION_PATH}", self.origin)
    }
}
