//! Client-side file downloads: CSV export of result grids and saving
//! binary responses (the Excel template).

use contracts::domain::metadata::TableRow;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column headers in first-seen order across all rows
pub fn collect_headers(rows: &[TableRow]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    headers
}

/// Display text of a JSON cell; NULL becomes an empty string
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Renders rows as `;`-separated CSV with a UTF-8 BOM (Excel opens it as UTF-8)
pub fn rows_to_csv(rows: &[TableRow]) -> Result<String, String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let headers = collect_headers(rows);
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let header_line: Vec<String> = headers.iter().map(|h| escape_csv_cell(h)).collect();
    csv_content.push_str(&header_line.join(";"));
    csv_content.push('\n');

    for row in rows {
        let line: Vec<String> = headers
            .iter()
            .map(|h| escape_csv_cell(&cell_text(row.get(h))))
            .collect();
        csv_content.push_str(&line.join(";"));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Экспортирует строки в CSV и инициирует скачивание
pub fn export_rows_to_csv(rows: &[TableRow], filename: &str) -> Result<(), String> {
    let csv_content = rows_to_csv(rows)?;

    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(&csv_content));
    let blob = create_blob(&array, "text/csv;charset=utf-8;")?;

    download_blob(&blob, filename)
}

/// Saves raw bytes under `filename`
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let blob = create_blob(&array, mime)?;

    download_blob(&blob, filename)
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(parts: &js_sys::Array, mime: &str) -> Result<Blob, String> {
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> TableRow {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_headers_union_in_first_seen_order() {
        let rows = vec![
            row(json!({"id": 1, "name": "a"})),
            row(json!({"id": 2, "email": "b@x"})),
        ];
        assert_eq!(collect_headers(&rows), vec!["id", "name", "email"]);
    }

    #[test]
    fn test_rows_to_csv() {
        let rows = vec![
            row(json!({"id": 1, "note": "a;b", "deleted": null})),
            row(json!({"id": 2, "note": "say \"hi\"", "deleted": true})),
        ];
        let csv = rows_to_csv(&rows).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}id;note;deleted\n1;\"a;b\";\n2;\"say \"\"hi\"\"\";true\n"
        );
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert!(rows_to_csv(&[]).is_err());
    }
}
