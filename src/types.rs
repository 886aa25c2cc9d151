//! Form payloads and the JSON contract of the login/register endpoints

use serde::Deserialize;

/// Classes shared by every notification
const NOTIFICATION_BASE_CLASS: &str = "fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50";

/// Field values of a submitted form, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Body returned by `/login/` and `/register/`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    /// Per-field validation errors, only sent on failure
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl FormResponse {
    /// Where to go after a successful submission; `None` means reload
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Full class list applied to the notification element
    pub fn class_name(self) -> String {
        let tone = match self {
            NotificationKind::Success => "bg-success-green text-white",
            NotificationKind::Error => "bg-red-500 text-white",
        };
        format!("{} {}", NOTIFICATION_BASE_CLASS, tone)
    }
}

/// How a single submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted, browser sent to the server-provided URL
    Redirected(String),
    /// Accepted without a redirect URL, page reloaded
    Reloaded,
    /// Server answered `success: false`
    Rejected { errors: Vec<String> },
    /// Transport, status or body failure
    Failed,
}
