/// Application configuration module
use std::env;

/// Default catalog endpoint. Note the trailing `?`: compiled queries append
/// their first parameter without a separator.
pub const DEFAULT_SEARCH_URL: &str = "https://api.daac.asf.alaska.edu/services/search/param?";

/// Platform filter sent with every Sentinel-1 query.
pub const SENTINEL1_PLATFORMS: &str = "Sentinel-1A,Sentinel-1B";

#[derive(Clone, Debug)]
pub struct AsfConfig {
    /// Base search endpoint, must end in `?`.
    pub search_url: String,
    /// Outbound request timeout in seconds.
    pub http_timeout_seconds: u64,
    /// Optional HTTP Basic credentials. The catalog no longer requires
    /// them; kept for forward compatibility and left unset by default.
    pub basic_auth: Option<BasicAuth>,
}

#[derive(Clone, Debug)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl AsfConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let search_url =
            env::var("ASF_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());

        let http_timeout_seconds = env_u64("ASF_HTTP_TIMEOUT_SECONDS", 30);

        let basic_auth = match (env::var("ASF_USERNAME"), env::var("ASF_PASSWORD")) {
            (Ok(username), Ok(password)) => Some(BasicAuth { username, password }),
            _ => None,
        };

        Ok(Self {
            search_url,
            http_timeout_seconds,
            basic_auth,
        })
    }
}

impl Default for AsfConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            http_timeout_seconds: 30,
            basic_auth: None,
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_ends_with_question_mark() {
        let config = AsfConfig::default();
        assert!(config.search_url.ends_with('?'));
        assert!(config.basic_auth.is_none());
    }

    #[test]
    fn env_u64_falls_back() {
        assert_eq!(env_u64("ASF_TEST_UNSET_KEY", 42), 42);
    }
}
