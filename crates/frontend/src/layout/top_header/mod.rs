//! TopHeader component - application top bar.
//!
//! Contains:
//! - Application title
//! - Connection status badge (state machine + last health poll)

use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use crate::usecases::u001_database_explorer::state::ConnectionStatus;
use crate::usecases::u001_database_explorer::ExplorerViewModel;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let vm = use_context::<ExplorerViewModel>().expect("ExplorerViewModel not provided in context");

    let status_badge = move || {
        let status = vm.status.get();
        let color = match status {
            ConnectionStatus::Connected => BadgeColor::Success,
            ConnectionStatus::Connecting => BadgeColor::Brand,
            ConnectionStatus::ConnectionLost => BadgeColor::Danger,
            ConnectionStatus::Disconnected => BadgeColor::Informative,
        };
        view! { <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge> }
    };

    // Подсказка: когда был последний health-check и что он вернул
    let health_title = move || match vm.last_health.get() {
        Some(h) => {
            let checked = format_time(&h.timestamp);
            match h.error {
                Some(e) => format!("Backend unhealthy at {}: {}", checked, e),
                None if h.is_healthy => format!("Backend healthy at {}", checked),
                None => format!("Backend unhealthy at {}", checked),
            }
        }
        None => "Health not checked yet".to_string(),
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("database")}
                <span class="top-header__title">"Database Explorer"</span>
            </div>

            <div class="top-header__actions" title=health_title>
                <span
                    class="top-header__health-dot"
                    class:top-header__health-dot--ok=move || vm.is_connected.get()
                ></span>
                {status_badge}
            </div>
        </div>
    }
}
