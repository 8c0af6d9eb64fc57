use serde::{Deserialize, Deserializer, Serialize};

/// Описание колонки таблицы, как его отдаёт `/MetaData/columns/{table}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    #[serde(default)]
    pub character_maximum_length: Option<i64>,
    #[serde(deserialize_with = "deserialize_nullable_flag")]
    pub is_nullable: bool,
}

impl ColumnInfo {
    /// Type as shown in the columns grid, e.g. `varchar(50)`.
    /// `-1` is how SQL Server reports `max`.
    pub fn type_label(&self) -> String {
        match self.character_maximum_length {
            Some(-1) => format!("{}(max)", self.data_type),
            Some(len) => format!("{}({})", self.data_type, len),
            None => self.data_type.clone(),
        }
    }
}

/// information_schema отдаёт "YES"/"NO", некоторые бэкенды - bool
fn deserialize_nullable_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "y" | "1" => Ok(true),
            "no" | "false" | "n" | "0" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "unexpected is_nullable value: {}",
                other
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_information_schema_row() {
        let json = r#"{
            "column_name": "email",
            "data_type": "varchar",
            "character_maximum_length": 255,
            "is_nullable": "YES"
        }"#;
        let column: ColumnInfo = serde_json::from_str(json).unwrap();
        assert_eq!(column.column_name, "email");
        assert!(column.is_nullable);
        assert_eq!(column.type_label(), "varchar(255)");
    }

    #[test]
    fn test_deserialize_bool_flag_and_missing_length() {
        let json = r#"{"column_name": "id", "data_type": "int", "is_nullable": false}"#;
        let column: ColumnInfo = serde_json::from_str(json).unwrap();
        assert!(!column.is_nullable);
        assert_eq!(column.character_maximum_length, None);
        assert_eq!(column.type_label(), "int");
    }

    #[test]
    fn test_max_length_label() {
        let json = r#"{"column_name": "body", "data_type": "nvarchar", "character_maximum_length": -1, "is_nullable": "no"}"#;
        let column: ColumnInfo = serde_json::from_str(json).unwrap();
        assert_eq!(column.type_label(), "nvarchar(max)");
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let json = r#"{"column_name": "id", "data_type": "int", "is_nullable": "maybe"}"#;
        assert!(serde_json::from_str::<ColumnInfo>(json).is_err());
    }
}
