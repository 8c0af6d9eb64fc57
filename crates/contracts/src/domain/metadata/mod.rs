//! Метаданные источника: таблицы, колонки, строки, произвольные запросы

pub mod column;

pub use column::ColumnInfo;

/// Untyped row as returned by the data and run-query endpoints.
/// Column order follows the backend's JSON object order.
pub type TableRow = serde_json::Map<String, serde_json::Value>;

pub const TABLES_PATH: &str = "/MetaData/tables";
pub const COLUMNS_PATH: &str = "/MetaData/columns";
pub const DATA_PATH: &str = "/MetaData/data";
pub const RUN_QUERY_PATH: &str = "/MetaData/run-query";
