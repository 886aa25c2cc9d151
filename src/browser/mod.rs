//! Browser bindings: fetch, toasts, navigation and form listeners

mod forms;
mod navigation;
mod notification;
mod transport;

pub use forms::{attach_interceptor, attach_registration_interceptor, read_payload};
pub use navigation::{TimeoutDelay, WindowNavigator};
pub use notification::ToastNotifier;
pub use transport::FetchTransport;

use crate::config::{FormsConfig, CONFIG_ELEMENT_ID};
use crate::cookie::read_cookie;
use crate::error::{FormError, Result};
use crate::submit::FormClient;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlFormElement};

pub type BrowserClient = FormClient<FetchTransport, ToastNotifier, WindowNavigator, TimeoutDelay>;

pub(crate) fn js_error(value: JsValue) -> FormError {
    FormError::Dom(format!("{:?}", value))
}

/// Wire the login and registration forms once the DOM is parsed
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        tracing::error!("No document available, forms left untouched");
        return;
    };

    if document.ready_state() != "loading" {
        run(&document);
        return;
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(move || run(&ready_document));
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        tracing::error!("Failed to wait for DOMContentLoaded: {}", js_error(e));
        return;
    }
    on_ready.forget();
}

fn run(document: &Document) {
    if let Err(e) = init(document) {
        tracing::error!("Form initialization failed: {}", e);
    }
}

/// Build the client and attach listeners to whichever forms the page has
pub fn init(document: &Document) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| FormError::Dom("no window".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| FormError::Dom("document has no body".to_string()))?;

    let config = load_config(document);
    let login_url = config.login_url.clone();
    let register_url = config.register_url.clone();
    let login_form = find_form(document, &config.login_form_id);
    let register_form = find_form(document, &config.register_form_id);

    let client = Rc::new(FormClient::new(
        config.clone(),
        FetchTransport,
        ToastNotifier::new(body, config.notification_ttl_ms),
        WindowNavigator::new(window.location()),
        TimeoutDelay,
    ));

    if let Some(form) = login_form {
        attach_interceptor(document, &form, &login_url, client.clone())?;
    }

    if let Some(form) = register_form {
        attach_registration_interceptor(document, &form, &register_url, client)?;
    }

    Ok(())
}

/// Configuration from the page's JSON block, or the defaults
pub fn load_config(document: &Document) -> FormsConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    FormsConfig::from_json_or_default(raw.as_deref())
}

fn find_form(document: &Document, id: &str) -> Option<HtmlFormElement> {
    let form = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
    if form.is_none() {
        tracing::debug!("No form #{} on this page", id);
    }
    form
}

/// Token from the live `document.cookie`
pub fn csrf_token(document: &Document, cookie_name: &str) -> Option<String> {
    let cookies = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
    read_cookie(&cookies, cookie_name)
}
