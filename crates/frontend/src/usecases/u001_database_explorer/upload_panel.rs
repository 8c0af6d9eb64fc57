use super::connect_panel::StatusMessage;
use super::view_model::ExplorerViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadPanel() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);
    // web_sys::File не Send, поэтому храним локально
    let selected_file = StoredValue::new_local(Option::<web_sys::File>::None);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        let file = input.and_then(|i| i.files()).and_then(|files| files.get(0));
        match file {
            Some(file) => {
                if let Err(e) = ExplorerViewModel::check_upload_name(&file.name()) {
                    vm.status_message.set(Some(e));
                    set_selected_file_name.set(None);
                    selected_file.set_value(None);
                    return;
                }
                vm.status_message.set(None);
                set_selected_file_name.set(Some(file.name()));
                selected_file.set_value(Some(file));
            }
            None => {
                set_selected_file_name.set(None);
                selected_file.set_value(None);
            }
        }
    };

    let on_upload = move |_| {
        if let Some(file) = selected_file.get_value() {
            vm.upload_command(file);
        }
    };

    view! {
        <div class="upload-panel" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2 style="margin: 0;">"Excel data source"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.download_template_command()
                >
                    {icon("download")}
                    " Download template"
                </Button>
            </Flex>

            <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                <input
                    type="file"
                    accept=".xlsx,.xls"
                    on:change=handle_file_select
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=Signal::derive(move || selected_file_name.get().is_none() || vm.is_loading.get())
                >
                    {icon("upload")}
                    {move || if vm.is_loading.get() { " Uploading..." } else { " Upload" }}
                </Button>
                {move || vm.is_loading.get().then(|| view! { <Spinner /> })}
            </Flex>

            {move || selected_file_name.get().map(|name| view! {
                <div style="margin-top: 8px; color: var(--colorNeutralForeground2);">{format!("Selected: {}", name)}</div>
            })}

            <StatusMessage />
        </div>
    }
}
