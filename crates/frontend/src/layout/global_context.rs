use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const TAB_QUERY_KEY: &str = "tab";

/// Вкладки главного экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExplorerTab {
    #[default]
    Connection,
    Upload,
    Tables,
    Query,
}

impl ExplorerTab {
    pub fn all() -> [ExplorerTab; 4] {
        [
            ExplorerTab::Connection,
            ExplorerTab::Upload,
            ExplorerTab::Tables,
            ExplorerTab::Query,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ExplorerTab::Connection => "connection",
            ExplorerTab::Upload => "upload",
            ExplorerTab::Tables => "tables",
            ExplorerTab::Query => "query",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ExplorerTab::Connection => "Connect",
            ExplorerTab::Upload => "Excel",
            ExplorerTab::Tables => "Tables",
            ExplorerTab::Query => "Query",
        }
    }
}

/// Parses `?tab=...` from a location search string
pub fn tab_from_search(search: &str) -> Option<ExplorerTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(TAB_QUERY_KEY).and_then(|k| ExplorerTab::from_key(k))
}

pub fn search_for_tab(tab: ExplorerTab) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        TAB_QUERY_KEY.to_string(),
        tab.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<ExplorerTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(ExplorerTab::default()),
        }
    }

    pub fn activate_tab(&self, tab: ExplorerTab) {
        leptos::logging::log!("activate_tab: '{}'", tab.key());
        self.active_tab.set(tab);
    }

    /// Restores the active tab from the URL and keeps the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_search(&search) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_tab(this.active_tab.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_url_round_trip() {
        for tab in ExplorerTab::all() {
            assert_eq!(tab_from_search(&search_for_tab(tab)), Some(tab));
        }
    }

    #[test]
    fn test_unknown_or_missing_tab() {
        assert_eq!(tab_from_search(""), None);
        assert_eq!(tab_from_search("?tab=admin"), None);
        assert_eq!(tab_from_search("?other=1"), None);
        assert_eq!(tab_from_search("?tab=query"), Some(ExplorerTab::Query));
    }
}
