use contracts::domain::data_source::ConnectionRequest;
use contracts::enums::DatabaseKind;

/// Состояние формы подключения. Порт хранится строкой, как его ввёл пользователь.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionForm {
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl ConnectionForm {
    pub fn for_kind(kind: DatabaseKind) -> Self {
        Self {
            host: "localhost".to_string(),
            port: kind.default_port().to_string(),
            ..Self::default()
        }
    }

    /// Switching kind replaces the port only if the user has not typed their own
    pub fn apply_kind(&mut self, kind: DatabaseKind) {
        let port = self.port.trim();
        let is_default = port.is_empty()
            || DatabaseKind::all()
                .iter()
                .any(|k| port == k.default_port().to_string());
        if is_default {
            self.port = kind.default_port().to_string();
        }
    }

    pub fn validate(&self) -> Result<ConnectionRequest, String> {
        let port = self
            .port
            .trim()
            .parse::<u16>()
            .map_err(|_| "Port must be between 1 and 65535".to_string())?;

        let request = ConnectionRequest {
            host: self.host.trim().to_string(),
            port,
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            database: self.database.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConnectionForm {
        ConnectionForm {
            host: " db.local ".into(),
            port: "5432".into(),
            username: "reader".into(),
            password: " secret ".into(),
            database: "sales".into(),
        }
    }

    #[test]
    fn test_validate_trims_but_keeps_password() {
        let request = filled().validate().unwrap();
        assert_eq!(request.host, "db.local");
        assert_eq!(request.port, 5432);
        assert_eq!(request.password, " secret ");
    }

    #[test]
    fn test_invalid_port() {
        let mut form = filled();
        form.port = "70000".into();
        assert!(form.validate().is_err());
        form.port = "abc".into();
        assert!(form.validate().is_err());
        form.port = "0".into();
        assert_eq!(
            form.validate(),
            Err("Port must be between 1 and 65535".to_string())
        );
    }

    #[test]
    fn test_missing_username() {
        let mut form = filled();
        form.username = "   ".into();
        assert_eq!(form.validate(), Err("Username is required".to_string()));
    }

    #[test]
    fn test_apply_kind_keeps_custom_port() {
        let mut form = ConnectionForm::for_kind(DatabaseKind::SqlServer);
        form.apply_kind(DatabaseKind::Postgres);
        assert_eq!(form.port, "5432");

        form.port = "15432".into();
        form.apply_kind(DatabaseKind::SqlServer);
        assert_eq!(form.port, "15432");
    }
}
