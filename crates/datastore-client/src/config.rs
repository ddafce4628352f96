//! Client configuration.

use std::time::Duration;

/// Public Datastore REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://datastore.googleapis.com";

/// Where requests are sent and how they are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Local emulator, e.g. `localhost:8081`. Requests are unauthenticated.
    Emulator { host: String },
    /// Managed service at `endpoint`, authenticated with an OAuth2 bearer token.
    Cloud {
        endpoint: String,
        access_token: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub project_id: String,
    pub target: Target,
    /// Per-request deadline. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Target {
    /// Base URL without trailing slash. A bare emulator `host:port` is
    /// addressed over plain HTTP.
    pub fn base_url(&self) -> String {
        let url = match self {
            Target::Emulator { host } => {
                if host.starts_with("http://") || host.starts_with("https://") {
                    host.clone()
                } else {
                    format!("http://{host}")
                }
            }
            Target::Cloud { endpoint, .. } => endpoint.clone(),
        };
        url.trim_end_matches('/').to_string()
    }
}
