//! Источники данных: подключение к серверу БД или загрузка Excel

pub mod connection;

pub use connection::ConnectionRequest;

pub const UPLOAD_EXCEL_PATH: &str = "/DataSource/upload-excel";
pub const TEMPLATE_EXCEL_PATH: &str = "/DataSource/template-excel";

/// Multipart field name the upload endpoint reads the workbook from
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Расширения файлов, которые принимает upload-excel
pub const EXCEL_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

pub fn is_excel_file_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    EXCEL_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_excel_file_name() {
        assert!(is_excel_file_name("report.xlsx"));
        assert!(is_excel_file_name("LEGACY.XLS"));
        assert!(!is_excel_file_name("report.csv"));
        assert!(!is_excel_file_name("xlsx"));
    }
}
