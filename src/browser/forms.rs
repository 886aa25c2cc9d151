//! Submit listeners for server-rendered forms

use super::{csrf_token, js_error, BrowserClient};
use crate::error::{FormError, Result};
use crate::submit::FormRequest;
use crate::types::FormPayload;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlFormElement};

/// Text fields of `form`, in document order.
///
/// Only string entries are kept: file inputs are dropped, so a form that
/// uploads files cannot go through this path. The login and registration
/// forms have none.
pub fn read_payload(form: &HtmlFormElement) -> Result<FormPayload> {
    let data = FormData::new_with_form(form).map_err(js_error)?;
    let entries = js_sys::try_iter(&data)
        .map_err(js_error)?
        .ok_or_else(|| FormError::Dom("form data is not iterable".to_string()))?;

    let mut payload = FormPayload::new();
    for entry in entries {
        let entry: js_sys::Array = entry.map_err(js_error)?.unchecked_into();
        let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string())
        else {
            continue;
        };
        payload.push(name, value);
    }
    Ok(payload)
}

/// Replace native submission of `form` with an asynchronous POST to `url`
pub fn attach_interceptor(
    document: &Document,
    form: &HtmlFormElement,
    url: &str,
    client: Rc<BrowserClient>,
) -> Result<()> {
    intercept(document, form, url, client, false)
}

/// Same as [`attach_interceptor`], but the POST only goes out when the
/// password confirmation matches
pub fn attach_registration_interceptor(
    document: &Document,
    form: &HtmlFormElement,
    url: &str,
    client: Rc<BrowserClient>,
) -> Result<()> {
    intercept(document, form, url, client, true)
}

fn intercept(
    document: &Document,
    form: &HtmlFormElement,
    url: &str,
    client: Rc<BrowserClient>,
    registration: bool,
) -> Result<()> {
    let document = document.clone();
    let target = form.clone();
    let url = url.to_string();

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let payload = match read_payload(&target) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Could not read form fields: {}", e);
                client.notify_failure();
                return;
            }
        };
        let token = csrf_token(&document, &client.config().csrf_cookie_name);
        if token.is_none() {
            tracing::warn!("No CSRF cookie, sending {} without token", url);
        }

        let request = FormRequest::new(url.clone(), payload, token);
        let client = client.clone();
        spawn_local(async move {
            let outcome = if registration {
                client.submit_registration(request).await
            } else {
                Some(client.submit(request).await)
            };
            tracing::debug!("Submission finished: {:?}", outcome);
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_submit.forget();

    tracing::debug!("Intercepting submissions of #{}", form.id());
    Ok(())
}
