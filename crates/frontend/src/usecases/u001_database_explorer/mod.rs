//! Database explorer: connect to SQL Server / PostgreSQL or upload an Excel
//! workbook, then browse tables and run ad-hoc queries.
//!
//! - state.rs: connection lifecycle (pure)
//! - form.rs: connection form state and validation
//! - view_model.rs: signals, commands, retry and health handling
//! - *_panel.rs / table_browser.rs / view.rs: Leptos components

pub mod connect_panel;
pub mod form;
pub mod query_panel;
pub mod state;
pub mod table_browser;
pub mod upload_panel;
pub mod view;
pub mod view_model;

pub use view::DatabaseExplorer;
pub use view_model::ExplorerViewModel;
