use serde::{Deserialize, Serialize};

/// Параметры подключения к серверу БД.
///
/// Отправляется как JSON-тело в `connect-sqlserver` / `connect-postgres`.
/// Never persisted: the frontend keeps it only in form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl ConnectionRequest {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host is required".into());
        }
        if self.port == 0 {
            return Err("Port must be between 1 and 65535".into());
        }
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if self.database.trim().is_empty() {
            return Err("Database name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ConnectionRequest {
        ConnectionRequest {
            host: "db.local".into(),
            port: 5432,
            username: "reader".into(),
            password: String::new(),
            database: "sales".into(),
        }
    }

    #[test]
    fn test_validate_accepts_empty_password() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut r = request();
        r.host = "  ".into();
        r.database = String::new();
        assert_eq!(r.validate(), Err("Host is required".to_string()));
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["host"], "db.local");
        assert_eq!(json["port"], 5432);
        assert_eq!(json["username"], "reader");
        assert_eq!(json["database"], "sales");
    }
}
