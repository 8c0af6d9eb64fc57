use serde::{Deserialize, Serialize};

/// Тип сервера БД, к которому подключается пользователь
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseKind {
    #[default]
    SqlServer,
    Postgres,
}

impl DatabaseKind {
    /// Код для select/URL
    pub fn code(&self) -> &'static str {
        match self {
            DatabaseKind::SqlServer => "sqlserver",
            DatabaseKind::Postgres => "postgres",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DatabaseKind::SqlServer => "SQL Server",
            DatabaseKind::Postgres => "PostgreSQL",
        }
    }

    /// Backend endpoint that accepts the connection form for this kind
    pub fn connect_path(&self) -> &'static str {
        match self {
            DatabaseKind::SqlServer => "/DataSource/connect-sqlserver",
            DatabaseKind::Postgres => "/DataSource/connect-postgres",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            DatabaseKind::SqlServer => 1433,
            DatabaseKind::Postgres => 5432,
        }
    }

    pub fn all() -> Vec<DatabaseKind> {
        vec![DatabaseKind::SqlServer, DatabaseKind::Postgres]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(DatabaseKind::default(), DatabaseKind::SqlServer);
        assert_eq!(DatabaseKind::SqlServer.default_port(), 1433);
        assert_eq!(DatabaseKind::Postgres.default_port(), 5432);
    }

    #[test]
    fn test_connect_paths() {
        assert_eq!(
            DatabaseKind::SqlServer.connect_path(),
            "/DataSource/connect-sqlserver"
        );
        assert_eq!(
            DatabaseKind::Postgres.connect_path(),
            "/DataSource/connect-postgres"
        );
    }
}
