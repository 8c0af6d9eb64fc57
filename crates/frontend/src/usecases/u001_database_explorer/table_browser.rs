use super::view_model::ExplorerViewModel;
use crate::shared::components::data_grid::DataGrid;
use crate::shared::icons::icon;
use contracts::domain::metadata::ColumnInfo;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableBrowser() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    view! {
        <div class="table-browser" style="padding: 20px; display: flex; gap: 20px;">
            <div class="table-browser__list" style="width: 260px; flex-shrink: 0;">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 12px;">
                    <h3 style="margin: 0;">"Tables"</h3>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load_tables_command()
                        disabled=vm.is_loading_tables
                    >
                        {icon("refresh")}
                    </Button>
                </Flex>
                <TableList />
            </div>

            <div class="table-browser__details" style="flex: 1; min-width: 0;">
                {move || match vm.selected_table.get() {
                    None => view! {
                        <div style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                            "Select a table to see its columns and data"
                        </div>
                    }.into_any(),
                    Some(table) => view! {
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 12px;">
                            <h3 style="margin: 0;">{table}</h3>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.export_table_rows()
                                disabled=Signal::derive(move || vm.rows.with(|r| r.is_empty()))
                            >
                                {icon("download")}
                                " CSV"
                            </Button>
                        </Flex>
                        <ColumnsTable />
                        <h4>"Data"</h4>
                        {move || vm.rows_error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}
                        <DataGrid rows=vm.rows empty_text="Table is empty" />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TableList() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    move || {
        if vm.is_loading_tables.get() {
            return view! {
                <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner />
                    "Loading..."
                </Flex>
            }
            .into_any();
        }
        if let Some(err) = vm.tables_error.get() {
            return view! { <div class="warning-box text-error">{err}</div> }.into_any();
        }

        let tables = vm.tables.get();
        if tables.is_empty() {
            return view! {
                <div style="color: var(--colorNeutralForeground3);">"No tables loaded"</div>
            }
            .into_any();
        }

        let selected = vm.selected_table.get();
        tables
            .into_iter()
            .map(|table| {
                let is_selected = selected.as_deref() == Some(table.as_str());
                let table_for_click = table.clone();
                view! {
                    <div
                        class="table-browser__item"
                        class:table-browser__item--active=is_selected
                        style="cursor: pointer; padding: 6px 8px; display: flex; align-items: center; gap: 6px;"
                        on:click=move |_| vm.select_table_command(table_for_click.clone())
                    >
                        {icon("table")}
                        <span>{table}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    }
}

#[component]
fn ColumnsTable() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    view! {
        <h4>"Columns"</h4>
        {move || vm.columns_error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                    <TableHeaderCell resizable=true min_width=160.0>"Type"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 100px;">"Nullable"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    vm.columns
                        .get()
                        .into_iter()
                        .map(|column: ColumnInfo| {
                            let type_label = column.type_label();
                            let nullable = if column.is_nullable {
                                view! { <Badge appearance=BadgeAppearance::Tint>"NULL"</Badge> }.into_any()
                            } else {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"NOT NULL"</Badge> }.into_any()
                            };
                            view! {
                                <TableRow>
                                    <TableCell>{column.column_name}</TableCell>
                                    <TableCell>
                                        <code>{type_label}</code>
                                    </TableCell>
                                    <TableCell>{nullable}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
    }
}
