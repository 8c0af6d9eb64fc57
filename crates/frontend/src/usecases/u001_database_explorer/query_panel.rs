use super::view_model::ExplorerViewModel;
use crate::shared::components::data_grid::DataGrid;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QueryPanel() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    let is_blank = Signal::derive(move || vm.query_text.with(|q| q.trim().is_empty()));

    view! {
        <div class="query-panel" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 12px;">
                <h2 style="margin: 0;">"Query"</h2>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.run_query_command()
                        disabled=Signal::derive(move || is_blank.get() || vm.is_running_query.get())
                    >
                        {icon("play")}
                        {move || if vm.is_running_query.get() { " Running..." } else { " Run" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.export_query_results()
                        disabled=Signal::derive(move || vm.query_results.with(|r| r.is_empty()))
                    >
                        {icon("download")}
                        " CSV"
                    </Button>
                </Space>
            </Flex>

            <Textarea
                value=vm.query_text
                placeholder="SELECT * FROM ..."
                class="monospace-textarea"
                attr:rows=8
                attr:style="width: 100%;"
            />

            {move || vm.query_error.get().map(|err| view! {
                <div class="warning-box text-error" style="margin-top: 12px;">{err}</div>
            })}

            <div style="margin-top: 16px;">
                {move || {
                    if vm.is_running_query.get() {
                        view! {
                            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                <Spinner />
                                "Running query..."
                            </Flex>
                        }.into_any()
                    } else {
                        view! { <DataGrid rows=vm.query_results empty_text="No results" /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
