use super::errors::normalize_error;
use super::DatabaseApi;
use async_trait::async_trait;
use contracts::domain::data_source::{
    ConnectionRequest, TEMPLATE_EXCEL_PATH, UPLOAD_EXCEL_PATH, UPLOAD_FIELD_NAME,
};
use contracts::domain::metadata::{
    ColumnInfo, TableRow, COLUMNS_PATH, DATA_PATH, RUN_QUERY_PATH, TABLES_PATH,
};
use contracts::enums::DatabaseKind;
use contracts::system::health::HEALTH_CONNECTION_PATH;
use contracts::system::HealthStatus;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// `DatabaseApi` over `fetch` (gloo-net)
#[derive(Debug, Clone)]
pub struct HttpDatabaseApi {
    base_url: String,
}

impl HttpDatabaseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn table_url(&self, prefix: &str, table: &str) -> String {
        self.url(&table_path(prefix, table))
    }
}

/// `/MetaData/columns/{table}` with the table name percent-encoded
pub fn table_path(prefix: &str, table: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(table))
}

/// Turns transport failures and non-2xx responses into a display message
async fn ensure_ok(result: Result<Response, gloo_net::Error>) -> Result<Response, String> {
    let response = result.map_err(|e| {
        log::warn!("Request failed before a response arrived: {}", e);
        normalize_error(0, "")
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::debug!("HTTP {} from {}: {}", status, response.url(), body);
    Err(normalize_error(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn read_text(response: Response) -> Result<String, String> {
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[async_trait(?Send)]
impl DatabaseApi for HttpDatabaseApi {
    async fn connect(
        &self,
        kind: DatabaseKind,
        request: &ConnectionRequest,
    ) -> Result<String, String> {
        let http_request = Request::post(&self.url(kind.connect_path()))
            .json(request)
            .map_err(|e| e.to_string())?;
        let response = ensure_ok(http_request.send().await).await?;
        read_text(response).await
    }

    async fn upload_excel(&self, file: &web_sys::File) -> Result<String, String> {
        let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
        form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
            .map_err(|e| format!("{e:?}"))?;

        let http_request = Request::post(&self.url(UPLOAD_EXCEL_PATH))
            .body(form)
            .map_err(|e| e.to_string())?;
        let response = ensure_ok(http_request.send().await).await?;
        read_text(response).await
    }

    async fn download_template(&self) -> Result<Vec<u8>, String> {
        let request = Request::get(&self.url(TEMPLATE_EXCEL_PATH));
        let response = ensure_ok(request.send().await).await?;
        response
            .binary()
            .await
            .map_err(|e| format!("Failed to read file: {}", e))
    }

    async fn list_tables(&self) -> Result<Vec<String>, String> {
        let response = ensure_ok(Request::get(&self.url(TABLES_PATH)).send().await).await?;
        read_json(response).await
    }

    async fn get_columns(&self, table: &str) -> Result<Vec<ColumnInfo>, String> {
        let url = self.table_url(COLUMNS_PATH, table);
        let response = ensure_ok(Request::get(&url).send().await).await?;
        read_json(response).await
    }

    async fn get_table_data(&self, table: &str) -> Result<Vec<TableRow>, String> {
        let url = self.table_url(DATA_PATH, table);
        let response = ensure_ok(Request::get(&url).send().await).await?;
        read_json(response).await
    }

    async fn run_query(&self, query: &str) -> Result<Vec<TableRow>, String> {
        let http_request = Request::post(&self.url(RUN_QUERY_PATH))
            .json(&query)
            .map_err(|e| e.to_string())?;
        let response = ensure_ok(http_request.send().await).await?;
        read_json(response).await
    }

    async fn check_health(&self) -> Result<HealthStatus, String> {
        let request = Request::get(&self.url(HEALTH_CONNECTION_PATH));
        let response = ensure_ok(request.send().await).await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_path_encodes_name() {
        assert_eq!(table_path(COLUMNS_PATH, "Orders"), "/MetaData/columns/Orders");
        assert_eq!(
            table_path(DATA_PATH, "order items/2024"),
            "/MetaData/data/order%20items%2F2024"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let api = HttpDatabaseApi::new("http://localhost:3000/");
        assert_eq!(api.url(TABLES_PATH), "http://localhost:3000/MetaData/tables");
    }
}
