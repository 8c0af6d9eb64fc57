use super::form::ConnectionForm;
use super::state::{ConnectionEvent, ConnectionStatus};
use crate::shared::api::{DatabaseApi, HealthMonitor, HealthSubscription};
use crate::shared::export;
use crate::shared::response_classifier::classify_response;
use crate::shared::retry::{with_retry, RetryPolicy, Sleeper};
use contracts::domain::data_source::is_excel_file_name;
use contracts::domain::metadata::{ColumnInfo, TableRow};
use contracts::enums::DatabaseKind;
use contracts::system::HealthStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Non-reactive collaborators of the view model
#[derive(Clone)]
struct Services {
    api: Rc<dyn DatabaseApi>,
    sleeper: Rc<dyn Sleeper>,
    retry: RetryPolicy,
}

/// ViewModel for the database explorer screen
///
/// - All UI state lives in signals, so the struct is `Copy` and can be moved
///   into any view closure.
/// - `async fn` operations do the work and are what tests drive;
///   `*_command` wrappers spawn them from event handlers.
/// - Every network call goes through the retry policy.
#[derive(Clone, Copy)]
pub struct ExplorerViewModel {
    services: StoredValue<Services, LocalStorage>,

    // Подключение
    pub database_kind: RwSignal<DatabaseKind>,
    pub form: RwSignal<ConnectionForm>,
    pub is_modal_open: RwSignal<bool>,
    pub status: RwSignal<ConnectionStatus>,
    /// Written by connect results and health polls alike; last write wins
    pub is_connected: RwSignal<bool>,
    pub last_health: RwSignal<Option<HealthStatus>>,
    pub status_message: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,

    // Таблицы
    pub tables: RwSignal<Vec<String>>,
    pub tables_error: RwSignal<Option<String>>,
    pub is_loading_tables: RwSignal<bool>,
    pub selected_table: RwSignal<Option<String>>,
    pub columns: RwSignal<Vec<ColumnInfo>>,
    pub columns_error: RwSignal<Option<String>>,
    pub rows: RwSignal<Vec<TableRow>>,
    pub rows_error: RwSignal<Option<String>>,

    // Запросы
    pub query_text: RwSignal<String>,
    pub query_results: RwSignal<Vec<TableRow>>,
    pub query_error: RwSignal<Option<String>>,
    pub is_running_query: RwSignal<bool>,
}

impl ExplorerViewModel {
    pub fn new(api: Rc<dyn DatabaseApi>, sleeper: Rc<dyn Sleeper>, retry: RetryPolicy) -> Self {
        let kind = DatabaseKind::default();
        Self {
            services: StoredValue::new_local(Services {
                api,
                sleeper,
                retry,
            }),
            database_kind: RwSignal::new(kind),
            form: RwSignal::new(ConnectionForm::for_kind(kind)),
            is_modal_open: RwSignal::new(false),
            status: RwSignal::new(ConnectionStatus::Disconnected),
            is_connected: RwSignal::new(false),
            last_health: RwSignal::new(None),
            status_message: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            tables: RwSignal::new(Vec::new()),
            tables_error: RwSignal::new(None),
            is_loading_tables: RwSignal::new(false),
            selected_table: RwSignal::new(None),
            columns: RwSignal::new(Vec::new()),
            columns_error: RwSignal::new(None),
            rows: RwSignal::new(Vec::new()),
            rows_error: RwSignal::new(None),
            query_text: RwSignal::new(String::new()),
            query_results: RwSignal::new(Vec::new()),
            query_error: RwSignal::new(None),
            is_running_query: RwSignal::new(false),
        }
    }

    fn services(&self) -> Services {
        self.services.get_value()
    }

    fn transition(&self, event: ConnectionEvent) -> (ConnectionStatus, ConnectionStatus) {
        let before = self.status.get_untracked();
        let after = before.on(event);
        if before != after {
            log::info!("Connection status: {:?} -> {:?} ({:?})", before, after, event);
            self.status.set(after);
        }
        (before, after)
    }

    // ------------------------------------------------------------------
    // Connection form
    // ------------------------------------------------------------------

    pub fn open_connect_modal(&self, kind: DatabaseKind) {
        self.select_kind(kind);
        self.status_message.set(None);
        self.is_modal_open.set(true);
    }

    pub fn close_connect_modal(&self) {
        self.is_modal_open.set(false);
    }

    pub fn select_kind(&self, kind: DatabaseKind) {
        self.database_kind.set(kind);
        self.form.update(|f| f.apply_kind(kind));
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Validates the form and connects with retries.
    pub async fn connect(self) -> Result<(), String> {
        let request = match self.form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                self.status_message.set(Some(e.clone()));
                return Err(e);
            }
        };
        let kind = self.database_kind.get_untracked();

        self.transition(ConnectionEvent::Submitted);
        self.is_loading.set(true);
        self.status_message.set(None);

        let services = self.services();
        let result = with_retry(&services.retry, services.sleeper.as_ref(), "connect", || {
            services.api.connect(kind, &request)
        })
        .await;

        self.is_loading.set(false);
        self.finish_data_source_reply(result).await
    }

    pub fn connect_command(&self) {
        let vm = *self;
        spawn_local(async move {
            let _ = vm.connect().await;
        });
    }

    // ------------------------------------------------------------------
    // Excel data source
    // ------------------------------------------------------------------

    pub fn check_upload_name(name: &str) -> Result<(), String> {
        if is_excel_file_name(name) {
            Ok(())
        } else {
            Err("Please choose an Excel file (.xlsx or .xls)".to_string())
        }
    }

    pub async fn upload(self, file: web_sys::File) -> Result<(), String> {
        let services = self.services();
        self.submit_upload(&file.name(), || services.api.upload_excel(&file)).await
    }

    /// Upload flow for a file called `file_name`; `send` performs one attempt.
    async fn submit_upload<F, Fut>(self, file_name: &str, send: F) -> Result<(), String>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, String>>,
    {
        if let Err(e) = Self::check_upload_name(file_name) {
            self.status_message.set(Some(e.clone()));
            return Err(e);
        }

        self.transition(ConnectionEvent::Submitted);
        self.is_loading.set(true);
        self.status_message.set(None);

        let services = self.services();
        let result =
            with_retry(&services.retry, services.sleeper.as_ref(), "upload excel", send).await;

        self.is_loading.set(false);
        self.finish_data_source_reply(result).await
    }

    pub fn upload_command(&self, file: web_sys::File) {
        let vm = *self;
        spawn_local(async move {
            let _ = vm.upload(file).await;
        });
    }

    pub async fn download_template(self) -> Result<Vec<u8>, String> {
        let services = self.services();
        let result = with_retry(
            &services.retry,
            services.sleeper.as_ref(),
            "download template",
            || services.api.download_template(),
        )
        .await;
        if let Err(e) = &result {
            self.status_message.set(Some(e.clone()));
        }
        result
    }

    pub fn download_template_command(&self) {
        let vm = *self;
        spawn_local(async move {
            if let Ok(bytes) = vm.download_template().await {
                if let Err(e) = export::download_bytes(&bytes, "template.xlsx", export::XLSX_MIME) {
                    vm.status_message.set(Some(e));
                }
            }
        });
    }

    /// Shared tail of connect and upload: classify the status sentence
    async fn finish_data_source_reply(self, result: Result<String, String>) -> Result<(), String> {
        match result {
            Ok(text) if classify_response(&text) => {
                self.status_message.set(Some(text));
                self.enter_connected().await;
                Ok(())
            }
            Ok(text) => {
                log::warn!("Data source rejected: {}", text);
                self.enter_failed();
                self.status_message.set(Some(text.clone()));
                Err(text)
            }
            Err(e) => {
                self.enter_failed();
                self.status_message.set(Some(e.clone()));
                Err(e)
            }
        }
    }

    fn enter_failed(&self) {
        self.transition(ConnectionEvent::Failed);
        self.is_connected.set(false);
    }

    async fn enter_connected(self) {
        self.transition(ConnectionEvent::Succeeded);
        self.is_connected.set(true);
        self.is_modal_open.set(false);
        let _ = self.load_tables_if_empty().await;
    }

    // ------------------------------------------------------------------
    // Health
    // ------------------------------------------------------------------

    /// Applies one health report. Returns `true` when it moved the view back
    /// into `Connected`, in which case the caller should load tables.
    pub fn apply_health(&self, status: &HealthStatus) -> bool {
        self.last_health.set(Some(status.clone()));
        self.is_connected.set(status.is_healthy);
        let (before, after) = self.transition(ConnectionEvent::HealthReported(status.is_healthy));
        before != ConnectionStatus::Connected && after == ConnectionStatus::Connected
    }

    /// Monitor polling through the same API as the view model
    pub fn create_health_monitor(&self, interval: Duration) -> HealthMonitor {
        let services = self.services();
        HealthMonitor::new(services.api, services.sleeper, interval)
    }

    /// Applies health reports until the monitor stops, reloading tables after
    /// a recovery.
    pub async fn follow_health(self, mut subscription: HealthSubscription) {
        while let Some(status) = subscription.next().await {
            if self.apply_health(&status) {
                let _ = self.load_tables_if_empty().await;
            }
        }
        log::debug!("Health subscription closed");
    }

    pub fn attach_health(&self, subscription: HealthSubscription) {
        let vm = *self;
        spawn_local(async move {
            vm.follow_health(subscription).await;
        });
    }

    // ------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------

    pub async fn load_tables(self) -> Result<(), String> {
        self.is_loading_tables.set(true);
        self.tables_error.set(None);

        let services = self.services();
        let result = with_retry(&services.retry, services.sleeper.as_ref(), "list tables", || {
            services.api.list_tables()
        })
        .await;

        self.is_loading_tables.set(false);
        match result {
            Ok(tables) => {
                self.tables.set(tables);
                Ok(())
            }
            Err(e) => {
                self.tables.set(Vec::new());
                self.tables_error.set(Some(e.clone()));
                Err(e)
            }
        }
    }

    pub async fn load_tables_if_empty(self) -> Result<(), String> {
        if self.tables.with_untracked(|t| t.is_empty()) {
            self.load_tables().await
        } else {
            Ok(())
        }
    }

    pub fn load_tables_command(&self) {
        let vm = *self;
        spawn_local(async move {
            let _ = vm.load_tables().await;
        });
    }

    /// Columns and rows are fetched concurrently; neither waits for the other.
    pub async fn select_table(self, table: String) {
        self.selected_table.set(Some(table.clone()));
        futures::future::join(self.load_columns(table.clone()), self.load_rows(table)).await;
    }

    pub fn select_table_command(&self, table: String) {
        let vm = *self;
        spawn_local(async move {
            vm.select_table(table).await;
        });
    }

    async fn load_columns(self, table: String) {
        self.columns_error.set(None);
        let services = self.services();
        let result = with_retry(&services.retry, services.sleeper.as_ref(), "get columns", || {
            services.api.get_columns(&table)
        })
        .await;

        match result {
            Ok(columns) => self.columns.set(columns),
            Err(e) => {
                self.columns.set(Vec::new());
                self.columns_error.set(Some(e));
            }
        }
    }

    async fn load_rows(self, table: String) {
        self.rows_error.set(None);
        let services = self.services();
        let result = with_retry(
            &services.retry,
            services.sleeper.as_ref(),
            "get table data",
            || services.api.get_table_data(&table),
        )
        .await;

        match result {
            Ok(rows) => self.rows.set(rows),
            Err(e) => {
                self.rows.set(Vec::new());
                self.rows_error.set(Some(e));
            }
        }
    }

    // ------------------------------------------------------------------
    // Ad-hoc queries
    // ------------------------------------------------------------------

    /// Sends the query text exactly as typed; blank text does nothing.
    pub async fn run_query(self) -> Result<(), String> {
        let query = self.query_text.get_untracked();
        if query.trim().is_empty() {
            return Ok(());
        }

        self.is_running_query.set(true);
        self.query_error.set(None);

        let services = self.services();
        let result = with_retry(&services.retry, services.sleeper.as_ref(), "run query", || {
            services.api.run_query(&query)
        })
        .await;

        self.is_running_query.set(false);
        match result {
            Ok(rows) => {
                self.query_results.set(rows);
                Ok(())
            }
            Err(e) => {
                self.query_results.set(Vec::new());
                self.query_error.set(Some(e.clone()));
                Err(e)
            }
        }
    }

    pub fn run_query_command(&self) {
        let vm = *self;
        spawn_local(async move {
            let _ = vm.run_query().await;
        });
    }

    pub fn export_query_results(&self) {
        let result = self
            .query_results
            .with_untracked(|rows| export::export_rows_to_csv(rows, "query_results.csv"));
        if let Err(e) = result {
            self.query_error.set(Some(e));
        }
    }

    pub fn export_table_rows(&self) {
        let filename = format!(
            "{}.csv",
            self.selected_table
                .get_untracked()
                .unwrap_or_else(|| "table".to_string())
        );
        let result = self
            .rows
            .with_untracked(|rows| export::export_rows_to_csv(rows, &filename));
        if let Err(e) = result {
            self.rows_error.set(Some(e));
        }
    }
}
