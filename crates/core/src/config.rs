use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const ENDPOINT_ENV_VAR: &str = "ECHOSUMMARIZE_ENDPOINT";
pub const REVEAL_SPEED_ENV_VAR: &str = "ECHOSUMMARIZE_REVEAL_SPEED_MS";

/// Delay between revealed chars on the summary page.
pub const DEFAULT_REVEAL_SPEED: Duration = Duration::from_millis(2);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {env_var}: {value:?}")]
    InvalidValue { env_var: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the summarization service, without the `/summarize` path.
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(ENDPOINT_ENV_VAR) {
            Some(endpoint) if !endpoint.trim().is_empty() => Self { endpoint },
            _ => Self::default(),
        }
    }

    pub fn summarize_url(&self) -> String {
        format!("{}/summarize", self.endpoint.trim_end_matches('/'))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    /// Off means the summary appears in full as soon as it arrives.
    pub enabled: bool,
    pub speed: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: DEFAULT_REVEAL_SPEED,
        }
    }
}

impl RevealConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(REVEAL_SPEED_ENV_VAR) {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    env_var: REVEAL_SPEED_ENV_VAR,
                    value,
                })?;
            config.speed = Duration::from_millis(millis);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_point_at_local_service() {
        let config = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.summarize_url(), "http://localhost:8000/summarize");
    }

    #[test]
    fn endpoint_override_trims_trailing_slash() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[(ENDPOINT_ENV_VAR, "http://10.0.0.2:9000/")]));
        assert_eq!(config.summarize_url(), "http://10.0.0.2:9000/summarize");
    }

    #[test]
    fn blank_endpoint_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[(ENDPOINT_ENV_VAR, "  ")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn reveal_defaults_to_page_speed() {
        let config = RevealConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RevealConfig::default());
        assert_eq!(config.speed, DEFAULT_REVEAL_SPEED);
        assert!(config.enabled);
    }

    #[test]
    fn reveal_speed_from_env() {
        let config = RevealConfig::from_lookup(lookup_from(&[(REVEAL_SPEED_ENV_VAR, "40")])).unwrap();
        assert_eq!(config.speed, Duration::from_millis(40));
        assert!(config.enabled);
    }

    #[test]
    fn reveal_speed_rejects_garbage() {
        let err = RevealConfig::from_lookup(lookup_from(&[(REVEAL_SPEED_ENV_VAR, "fast")]))
            .unwrap_err();
        assert!(err.to_string().contains(REVEAL_SPEED_ENV_VAR));
    }
}
