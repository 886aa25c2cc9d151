//! Toast notifications

use crate::submit::Notifier;
use crate::types::NotificationKind;
use gloo_timers::callback::Timeout;
use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::HtmlElement;

/// Mounts one toast per notification into `container`. Toasts stack freely
/// and each one unmounts itself after `ttl_ms`.
pub struct ToastNotifier {
    container: HtmlElement,
    ttl_ms: u32,
}

impl ToastNotifier {
    pub fn new(container: HtmlElement, ttl_ms: u32) -> Self {
        Self { container, ttl_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let message = message.to_string();
        let handle = mount_to(self.container.clone(), move || {
            view! { <Toast message=message kind=kind /> }
        });

        // Dropping the handle unmounts the toast
        Timeout::new(self.ttl_ms, move || drop(handle)).forget();
    }
}

/// A single dismissible notification
#[component]
fn Toast(message: String, kind: NotificationKind) -> impl IntoView {
    let visible = RwSignal::new(true);

    view! {
        <Show when=move || visible.get()>
            <div class=kind.class_name() role="alert">
                <span>{message.clone()}</span>
                <button
                    type="button"
                    class="ml-4 font-bold opacity-75 hover:opacity-100"
                    aria-label="Fermer"
                    on:click=move |_| visible.set(false)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
