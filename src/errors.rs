use thiserror::Error;

/// Why a request to the chat or feedback endpoint did not produce a usable reply.
/// Each variant carries a human-readable reason for logging; none is ever shown
/// to the user verbatim.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Parse error: {0}")]
    Parse(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

impl TransportError {
    pub fn status(status: u16, detail: Option<String>) -> Self {
        TransportError::Status { status, detail }
    }

    /// The endpoint answered, just not with a success status.
    pub fn is_status(&self) -> bool {
        matches!(self, TransportError::Status { .. })
    }
}
