use crate::shared::api_utils::api_base;
use crate::shared::retry::RetryPolicy;
use std::time::Duration;

pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Настройки приложения, передаются через context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub health_poll_interval: Duration,
    pub retry: RetryPolicy,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            health_poll_interval: HEALTH_POLL_INTERVAL,
            retry: RetryPolicy::default(),
        }
    }

    /// Build-time override or the page location
    pub fn from_environment() -> Self {
        Self::new(api_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new("http://localhost:3000");
        assert_eq!(config.health_poll_interval, Duration::from_secs(30));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay, Duration::from_secs(1));
    }
}
