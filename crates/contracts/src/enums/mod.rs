pub mod database_kind;

pub use database_kind::DatabaseKind;
