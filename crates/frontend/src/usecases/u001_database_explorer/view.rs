use super::connect_panel::ConnectPanel;
use super::query_panel::QueryPanel;
use super::state::ConnectionStatus;
use super::table_browser::TableBrowser;
use super::upload_panel::UploadPanel;
use super::view_model::ExplorerViewModel;
use crate::layout::global_context::{AppGlobalContext, ExplorerTab};
use crate::shared::config::AppConfig;
use leptos::logging::log;
use leptos::prelude::*;

/// Main screen: tab bar plus one panel per tab.
///
/// Owns the health monitor: polling starts on mount; on destroy the monitor
/// stops and the view model's health subscription ends with it.
#[component]
pub fn DatabaseExplorer() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let monitor = vm.create_health_monitor(config.health_poll_interval);
    if let Some(subscription) = monitor.subscribe() {
        vm.attach_health(subscription);
    }
    monitor.start();
    log!("Health monitor started, interval {:?}", config.health_poll_interval);

    let monitor = StoredValue::new_local(monitor);
    on_cleanup(move || {
        log!("Health monitor stopped");
        let _ = monitor.try_with_value(|m| m.stop());
    });

    // После успешного подключения переходим к списку таблиц
    Effect::new(move |prev: Option<ConnectionStatus>| {
        let status = vm.status.get();
        if prev == Some(ConnectionStatus::Connecting) && status == ConnectionStatus::Connected {
            tabs_store.activate_tab(ExplorerTab::Tables);
        }
        status
    });

    let tab_buttons = ExplorerTab::all()
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tabs_store.active_tab.get() == tab
                    on:click=move |_| tabs_store.activate_tab(tab)
                >
                    {tab.title()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="explorer">
            <nav class="tabs__bar">{tab_buttons}</nav>
            {move || match tabs_store.active_tab.get() {
                ExplorerTab::Connection => view! { <ConnectPanel /> }.into_any(),
                ExplorerTab::Upload => view! { <UploadPanel /> }.into_any(),
                ExplorerTab::Tables => view! { <TableBrowser /> }.into_any(),
                ExplorerTab::Query => view! { <QueryPanel /> }.into_any(),
            }}
        </div>
    }
}
