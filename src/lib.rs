//! # campus-forms
//!
//! AJAX handling for the campus portal's login and registration forms,
//! compiled to WebAssembly.
//!
//! ## Overview
//!
//! The portal renders its forms on the server. This crate takes over their
//! submission:
//!
//! 1. **Interception** - native submits are cancelled and the fields are
//!    POSTed with the CSRF token from the `csrftoken` cookie
//! 2. **Presentation** - the JSON answer becomes toast notifications, then a
//!    redirect or reload on success
//! 3. **Password check** - registration is blocked locally when the password
//!    confirmation differs
//!
//! ## Usage
//!
//! In the browser, the binary calls `start` and everything is wired from the
//! page's DOM. The submission flow itself is plain Rust behind the traits in
//! [`submit`], so it can be driven without a browser:
//!
//! ```rust,ignore
//! use campus_forms::{FormClient, FormRequest, FormsConfig};
//!
//! let client = FormClient::new(FormsConfig::default(), transport, notifier, navigator, delay);
//! let request = FormRequest::new("/login/", payload, Some(token));
//! let outcome = client.submit(request).await;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Page-level settings with defaults
//! - [`cookie`] - `document.cookie` parsing
//! - [`guard`] - Password confirmation check
//! - [`submit`] - Submission lifecycle and its browser seams
//! - [`types`] - Payloads, server responses and notification kinds
//! - `browser` - Fetch, toasts and listeners (`wasm32` only)

pub mod config;
pub mod cookie;
pub mod error;
pub mod guard;
pub mod submit;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use config::FormsConfig;
pub use cookie::read_cookie;
pub use error::{FormError, Result};
pub use submit::{Delay, FormClient, FormRequest, Navigator, Notifier, Transport};
pub use types::{FormPayload, FormResponse, NotificationKind, SubmitOutcome};

#[cfg(target_arch = "wasm32")]
pub use browser::start;
