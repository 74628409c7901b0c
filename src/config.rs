/// Base address used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const CHAT_PATH: &str = "/api/chat";
pub const FEEDBACK_PATH: &str = "/api/feedback";

/// Where the chat and feedback endpoints live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        let trimmed = api_base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { api_base: trimmed.to_string() }
    }

    /// Uses `CHAT_API_BASE` as captured at build time, falling back to
    /// [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        option_env!("CHAT_API_BASE").map(Self::new).unwrap_or_default()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn chat_url(&self) -> String {
        format!("{}{CHAT_PATH}", self.api_base)
    }

    pub fn feedback_url(&self) -> String {
        format!("{}{FEEDBACK_PATH}", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.chat_url(), "http://localhost:8000/api/chat");
        assert_eq!(config.feedback_url(), "http://localhost:8000/api/feedback");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("https://chat.example.org/widget//");
        assert_eq!(config.api_base(), "https://chat.example.org/widget");
        assert_eq!(config.chat_url(), "https://chat.example.org/widget/api/chat");
    }

    #[test]
    fn blank_base_falls_back_to_default() {
        assert_eq!(ClientConfig::new("   "), ClientConfig::default());
    }
}
