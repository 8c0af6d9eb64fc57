pub mod global_context;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
