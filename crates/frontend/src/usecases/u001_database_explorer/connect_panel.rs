use super::state::ConnectionStatus;
use super::view_model::ExplorerViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::enums::DatabaseKind;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ConnectPanel() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    let kind_cards = DatabaseKind::all()
        .into_iter()
        .map(|kind| {
            view! {
                <Card attr:style="width: 280px; margin: 0px;">
                    <Flex vertical=true gap=FlexGap::Medium>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            {icon("database")}
                            <h3 style="margin: 0;">{kind.display_name()}</h3>
                        </Flex>
                        <span style="color: var(--colorNeutralForeground2);">
                            {format!("Default port {}", kind.default_port())}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.open_connect_modal(kind)
                        >
                            "Connect"
                        </Button>
                    </Flex>
                </Card>
            }
        })
        .collect_view();

    view! {
        <div class="connect-panel" style="padding: 20px;">
            <h2 style="margin: 0 0 16px 0;">"Connect to a database"</h2>
            <Flex gap=FlexGap::Large>{kind_cards}</Flex>

            <StatusMessage />

            <Show when=move || vm.is_modal_open.get()>
                <ConnectionModal />
            </Show>
        </div>
    }
}

/// Last connect/upload message, green once connected
#[component]
pub fn StatusMessage() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    move || {
        let status = vm.status.get();
        vm.status_message.get().map(|message| {
            let class = if status == ConnectionStatus::Connected {
                "info-box text-success"
            } else {
                "warning-box text-error"
            };
            view! { <div class=class style="margin-top: 16px;">{message}</div> }
        })
    }
}

#[component]
fn ConnectionModal() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    let title =
        Signal::derive(move || format!("Connect to {}", vm.database_kind.get().display_name()));
    let on_close = Callback::new(move |_| vm.close_connect_modal());

    view! {
        <Modal title=title on_close=on_close>
            <div class="modal-actions-top">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.connect_command()
                    disabled=Signal::derive(move || vm.is_loading.get() || !vm.is_form_valid())
                >
                    {move || if vm.is_loading.get() { "Connecting..." } else { "Connect" }}
                </Button>
            </div>

            {move || {
                if vm.status.get() == ConnectionStatus::Connecting {
                    None
                } else {
                    vm.status_message.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })
                }
            }}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="host">{"Host"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="host"
                        prop:value=move || vm.form.get().host
                        on:input=move |ev| {
                            vm.form.update(|f| f.host = event_target_value(&ev));
                        }
                        placeholder="localhost"
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="port">{"Port"}</label>
                    <input
                        class="form__input"
                        type="number"
                        id="port"
                        min="1"
                        max="65535"
                        prop:value=move || vm.form.get().port
                        on:input=move |ev| {
                            vm.form.update(|f| f.port = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="username">{"Username"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="username"
                        prop:value=move || vm.form.get().username
                        on:input=move |ev| {
                            vm.form.update(|f| f.username = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="password">{"Password"}</label>
                    <input
                        class="form__input"
                        type="password"
                        id="password"
                        prop:value=move || vm.form.get().password
                        on:input=move |ev| {
                            vm.form.update(|f| f.password = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="database">{"Database"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="database"
                        prop:value=move || vm.form.get().database
                        on:input=move |ev| {
                            vm.form.update(|f| f.database = event_target_value(&ev));
                        }
                    />
                </div>
            </div>
        </Modal>
    }
}
