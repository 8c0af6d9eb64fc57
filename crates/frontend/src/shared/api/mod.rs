//! API client for the data source / metadata / health backend.
//!
//! Каждая операция - ровно один HTTP-запрос. Повторы (retry) делает
//! вызывающая сторона, см. `shared::retry`.

pub mod client;
pub mod errors;
pub mod health;

use async_trait::async_trait;
use contracts::domain::data_source::ConnectionRequest;
use contracts::domain::metadata::{ColumnInfo, TableRow};
use contracts::enums::DatabaseKind;
use contracts::system::HealthStatus;

pub use client::HttpDatabaseApi;
pub use health::{HealthMonitor, HealthSubscription};

/// Backend operations used by the explorer.
///
/// Errors are already normalized to a display message.
#[async_trait(?Send)]
pub trait DatabaseApi {
    /// Connect to a server; returns the backend's status sentence
    async fn connect(
        &self,
        kind: DatabaseKind,
        request: &ConnectionRequest,
    ) -> Result<String, String>;

    /// Upload an Excel workbook as the data source; returns the status sentence
    async fn upload_excel(&self, file: &web_sys::File) -> Result<String, String>;

    async fn download_template(&self) -> Result<Vec<u8>, String>;

    async fn list_tables(&self) -> Result<Vec<String>, String>;

    async fn get_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, String>;

    async fn get_table_data(&self, table: &str) -> Result<Vec<TableRow>, String>;

    /// Sends `query` verbatim as a JSON string body
    async fn run_query(&self, query: &str) -> Result<Vec<TableRow>, String>;

    async fn check_health(&self) -> Result<HealthStatus, String>;
}
