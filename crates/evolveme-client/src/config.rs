//! Client configuration.

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "EVOLVEME_API_URL";

/// Environment variable overriding the request timeout.
pub const TIMEOUT_ENV: &str = "EVOLVEME_TIMEOUT_SECS";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, including the `/api` prefix.
    pub base_url: String,

    /// Request timeout in seconds. AI replies can take a while.
    /// Not enforced on wasm32, where the browser owns the timeout.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `EVOLVEME_API_URL` and `EVOLVEME_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        if let Some(secs) = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            config.timeout_secs = secs;
        }
        config
    }

    /// Builder-style base URL override.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.timeout_secs, 60);
    }

    /// Sets environment variables and restores the previous values on drop.
    struct EnvGuard(Vec<(&'static str, Option<String>)>);

    impl EnvGuard {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            let saved = vars
                .iter()
                .map(|(key, value)| {
                    let previous = std::env::var(key).ok();
                    std::env::set_var(key, value);
                    (*key, previous)
                })
                .collect();
            Self(saved)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, previous) in &self.0 {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    // One test owns both variables so parallel tests never race on them.
    #[test]
    fn test_from_env_overlay() {
        {
            let _env = EnvGuard::set(&[(API_URL_ENV, "http://coach.local/api"), (TIMEOUT_ENV, " 5 ")]);
            let config = ClientConfig::from_env();
            assert_eq!(config.base_url, "http://coach.local/api");
            assert_eq!(config.timeout_secs, 5);
        }
        {
            let _env = EnvGuard::set(&[(API_URL_ENV, "   "), (TIMEOUT_ENV, "soon")]);
            assert_eq!(ClientConfig::from_env(), ClientConfig::default());
        }
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::default().with_base_url("http://coach.local/api/");
        assert_eq!(config.base_url, "http://coach.local/api/");
    }
}
