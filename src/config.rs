//! Page-level configuration
//!
//! Every setting has a default matching the portal's templates. A page can
//! override any of them with a JSON block:
//!
//! ```html
//! <script type="application/json" id="campus-forms-config">
//!   { "redirect_delay_ms": 800 }
//! </script>
//! ```

use crate::error::{FormError, Result};
use serde::Deserialize;

/// Id of the optional configuration script element
pub const CONFIG_ELEMENT_ID: &str = "campus-forms-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_login_form_id")]
    pub login_form_id: String,

    #[serde(default = "default_register_form_id")]
    pub register_form_id: String,

    #[serde(default = "default_login_url")]
    pub login_url: String,

    #[serde(default = "default_register_url")]
    pub register_url: String,

    /// Cookie holding the CSRF token
    #[serde(default = "default_csrf_cookie_name")]
    pub csrf_cookie_name: String,

    #[serde(default = "default_password_field")]
    pub password_field: String,

    #[serde(default = "default_password_confirm_field")]
    pub password_confirm_field: String,

    /// Pause between the success notification and navigation
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u32,

    /// Lifetime of a notification
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u32,

    #[serde(default = "default_generic_error_message")]
    pub generic_error_message: String,

    #[serde(default = "default_password_mismatch_message")]
    pub password_mismatch_message: String,
}

fn default_login_form_id() -> String {
    "loginForm".to_string()
}

fn default_register_form_id() -> String {
    "registerForm".to_string()
}

fn default_login_url() -> String {
    "/login/".to_string()
}

fn default_register_url() -> String {
    "/register/".to_string()
}

fn default_csrf_cookie_name() -> String {
    "csrftoken".to_string()
}

fn default_password_field() -> String {
    "mdp".to_string()
}

fn default_password_confirm_field() -> String {
    "mdp_confirm".to_string()
}

fn default_redirect_delay_ms() -> u32 {
    1500
}

fn default_notification_ttl_ms() -> u32 {
    5000
}

fn default_generic_error_message() -> String {
    "Une erreur s'est produite. Veuillez réessayer.".to_string()
}

fn default_password_mismatch_message() -> String {
    "Les mots de passe ne correspondent pas.".to_string()
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            login_form_id: default_login_form_id(),
            register_form_id: default_register_form_id(),
            login_url: default_login_url(),
            register_url: default_register_url(),
            csrf_cookie_name: default_csrf_cookie_name(),
            password_field: default_password_field(),
            password_confirm_field: default_password_confirm_field(),
            redirect_delay_ms: default_redirect_delay_ms(),
            notification_ttl_ms: default_notification_ttl_ms(),
            generic_error_message: default_generic_error_message(),
            password_mismatch_message: default_password_mismatch_message(),
        }
    }
}

impl FormsConfig {
    /// Parse a configuration block; absent keys keep their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Like [`FormsConfig::from_json`], falling back to the defaults on error
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid form configuration: {}", e);
                Self::default()
            }
        }
    }
}
