use serde::{Deserialize, Serialize};

pub const HEALTH_CONNECTION_PATH: &str = "/Health/connection";

/// Ответ `/Health/connection`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub is_healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl HealthStatus {
    /// Status recorded locally when the health endpoint itself could not be reached
    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            is_healthy: false,
            error: Some(error.into()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"isHealthy": true, "timestamp": "2024-03-15T14:02:26Z"}"#;
        let status: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_healthy);
        assert_eq!(status.error, None);
        assert_eq!(status.timestamp, "2024-03-15T14:02:26Z");
    }

    #[test]
    fn test_unreachable_carries_error() {
        let status = HealthStatus::unreachable("timeout");
        assert!(!status.is_healthy);
        assert_eq!(status.error.as_deref(), Some("timeout"));
        assert!(!status.timestamp.is_empty());
    }
}
