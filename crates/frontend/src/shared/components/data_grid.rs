//! Generic grid for untyped rows (table data, query results).

use crate::shared::export::{cell_text, collect_headers};
use contracts::domain::metadata::TableRow as RowData;
use serde_json::Value;
use leptos::prelude::*;
use thaw::*;

/// Renders rows with columns taken from the union of row keys.
/// NULL cells are shown greyed out.
#[component]
pub fn DataGrid(
    #[prop(into)] rows: Signal<Vec<RowData>>,
    /// Text shown when there are no rows
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or_else(|| "No rows".to_string());

    view! {
        {move || {
            let rows = rows.get();
            if rows.is_empty() {
                return view! {
                    <div class="data-grid__empty" style="padding: 24px; text-align: center; color: var(--colorNeutralForeground3);">
                        {empty_text.clone()}
                    </div>
                }.into_any();
            }

            let headers = collect_headers(&rows);
            let header_cells = headers
                .clone()
                .into_iter()
                .map(|h| view! { <TableHeaderCell min_width=100.0>{h}</TableHeaderCell> })
                .collect_view();

            let body = rows
                .iter()
                .map(|row| {
                    let cells = headers
                        .iter()
                        .map(|h| {
                            let (text, is_null) = display_cell(row.get(h));
                            view! {
                                <TableCell>
                                    <span class:data-grid__null=is_null>{text}</span>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    view! { <TableRow>{cells}</TableRow> }
                })
                .collect_view();

            view! {
                <div class="data-grid" style="overflow: auto;">
                    <div class="data-grid__count" style="margin-bottom: 8px; color: var(--colorNeutralForeground2);">
                        {format!("{} row(s)", rows.len())}
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>{header_cells}</TableRow>
                        </TableHeader>
                        <TableBody>{body}</TableBody>
                    </Table>
                </div>
            }.into_any()
        }}
    }
}

/// Cell text plus whether it is a SQL NULL (missing keys count as NULL)
fn display_cell(value: Option<&Value>) -> (String, bool) {
    match value {
        None | Some(Value::Null) => ("NULL".to_string(), true),
        other => (cell_text(other), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_cell() {
        assert_eq!(display_cell(None), ("NULL".to_string(), true));
        assert_eq!(display_cell(Some(&Value::Null)), ("NULL".to_string(), true));
        assert_eq!(display_cell(Some(&json!("Oslo"))), ("Oslo".to_string(), false));
        assert_eq!(display_cell(Some(&json!(42))), ("42".to_string(), false));
        assert_eq!(display_cell(Some(&json!(false))), ("false".to_string(), false));
    }
}
