//! Asynchronous form submission
//!
//! [`FormClient`] owns the whole lifecycle of one submission: the POST, the
//! notifications that report its outcome and the delayed navigation that
//! follows a success. The browser pieces sit behind small traits so the flow
//! runs unchanged against test doubles:
//! - [`Transport`] sends the request and decodes the JSON body
//! - [`Notifier`] shows a notification
//! - [`Navigator`] moves the page
//! - [`Delay`] waits before navigating

use crate::config::FormsConfig;
use crate::error::Result;
use crate::guard::passwords_match;
use crate::types::{FormPayload, FormResponse, NotificationKind, SubmitOutcome};
use async_trait::async_trait;
use tracing::{error, info};

/// Marks the request as AJAX so the server answers with JSON
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
/// Carries the token read from the CSRF cookie
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// A form POST ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub url: String,
    pub payload: FormPayload,
    pub headers: Vec<(&'static str, String)>,
}

impl FormRequest {
    pub fn new(url: impl Into<String>, payload: FormPayload, csrf_token: Option<String>) -> Self {
        let mut headers = vec![(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE.to_string())];
        if let Some(token) = csrf_token {
            headers.push((CSRF_HEADER, token));
        }

        Self {
            url: url.into(),
            payload,
            headers,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a form and decodes the server's JSON answer.
///
/// A non-2xx status must come back as an error without reading the body.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_form(&self, request: FormRequest) -> Result<FormResponse>;
}

pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

pub trait Navigator {
    fn navigate(&self, url: &str);
    fn reload(&self);
}

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, millis: u32);
}

pub struct FormClient<T, N, V, D> {
    config: FormsConfig,
    transport: T,
    notifier: N,
    navigator: V,
    delay: D,
}

impl<T, N, V, D> FormClient<T, N, V, D>
where
    T: Transport,
    N: Notifier,
    V: Navigator,
    D: Delay,
{
    pub fn new(config: FormsConfig, transport: T, notifier: N, navigator: V, delay: D) -> Self {
        Self {
            config,
            transport,
            notifier,
            navigator,
            delay,
        }
    }

    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    /// Report a failure that happened before any request could be built
    pub fn notify_failure(&self) {
        self.notifier
            .notify(&self.config.generic_error_message, NotificationKind::Error);
    }

    /// Password confirmation check run ahead of a registration submit.
    /// Shows the mismatch notification and returns `false` when the two
    /// fields differ.
    pub fn check_passwords(&self, payload: &FormPayload) -> bool {
        if passwords_match(payload, &self.config) {
            return true;
        }

        info!("Registration blocked: password confirmation differs");
        self.notifier.notify(
            &self.config.password_mismatch_message,
            NotificationKind::Error,
        );
        false
    }

    /// Registration submit: the password check runs first and a mismatch
    /// returns `None` without sending anything.
    pub async fn submit_registration(&self, request: FormRequest) -> Option<SubmitOutcome> {
        if !self.check_passwords(&request.payload) {
            return None;
        }
        Some(self.submit(request).await)
    }

    /// Send one form and present the result. Never fails: every error ends
    /// in a notification.
    pub async fn submit(&self, request: FormRequest) -> SubmitOutcome {
        let url = request.url.clone();

        match self.transport.post_form(request).await {
            Ok(response) => self.present(response).await,
            Err(e) => {
                error!("Form submission to {} failed: {}", url, e);
                self.notify_failure();
                SubmitOutcome::Failed
            }
        }
    }

    async fn present(&self, response: FormResponse) -> SubmitOutcome {
        if !response.success {
            info!(
                "Form rejected by server with {} error(s)",
                response.errors().len()
            );
            self.notifier
                .notify(&response.message, NotificationKind::Error);
            for message in response.errors() {
                self.notifier.notify(message, NotificationKind::Error);
            }
            return SubmitOutcome::Rejected {
                errors: response.errors().to_vec(),
            };
        }

        self.notifier
            .notify(&response.message, NotificationKind::Success);
        self.delay.sleep(self.config.redirect_delay_ms).await;

        match response.redirect_target() {
            Some(url) => {
                info!("Form accepted, redirecting to {}", url);
                self.navigator.navigate(url);
                SubmitOutcome::Redirected(url.to_string())
            }
            None => {
                info!("Form accepted, reloading page");
                self.navigator.reload();
                SubmitOutcome::Reloaded
            }
        }
    }
}
