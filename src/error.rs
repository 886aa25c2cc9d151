// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
