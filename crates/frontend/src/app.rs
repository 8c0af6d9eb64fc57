use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::api::{DatabaseApi, HttpDatabaseApi};
use crate::shared::config::AppConfig;
use crate::shared::retry::{Sleeper, TimeoutSleeper};
use crate::usecases::u001_database_explorer::{DatabaseExplorer, ExplorerViewModel};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_environment();
    log::info!("API base URL: '{}'", config.api_base_url);

    let api: Rc<dyn DatabaseApi> = Rc::new(HttpDatabaseApi::new(config.api_base_url.clone()));
    let sleeper: Rc<dyn Sleeper> = Rc::new(TimeoutSleeper);
    let vm = ExplorerViewModel::new(api, sleeper, config.retry);

    // Tab state is restored from the URL before the first render
    let tabs_store = AppGlobalContext::new();
    tabs_store.init_router_integration();

    provide_context(tabs_store);
    provide_context(config);
    provide_context(vm);

    view! {
        <Shell>
            <DatabaseExplorer />
        </Shell>
    }
}
