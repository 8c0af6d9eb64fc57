use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close (Escape, overlay click, close button)
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Клик внутри окна не должен закрывать его
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
