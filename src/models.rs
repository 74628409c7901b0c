use serde::{Deserialize, Serialize};

/// Who authored a transcript entry. Serialized as `"user"` / `"bot"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Client-side key of a rateable bot reply.
///
/// Only unique within one [`Transcript`](crate::Transcript); the endpoints
/// never assign or interpret it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the transcript, as displayed and as sent in `conversation_history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MessageId>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User, id: None }
    }

    pub fn bot(text: impl Into<String>, id: Option<MessageId>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, id }
    }

    /// The id feedback controls should report, if this message can be rated.
    pub fn feedback_target(&self) -> Option<MessageId> {
        match self.sender {
            Sender::Bot => self.id,
            Sender::User => None,
        }
    }
}

/// Request body of `POST /api/chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<Message>,
}

/// Response body of `POST /api/chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// A transcript entry with its client-side id stripped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub text: String,
    pub sender: Sender,
}

impl From<&Message> for FeedbackEntry {
    fn from(m: &Message) -> Self {
        Self { text: m.text.clone(), sender: m.sender }
    }
}

/// Request body of `POST /api/feedback`.
#[derive(Clone, Debug, Serialize)]
pub struct FeedbackRequest {
    pub conversation: Vec<FeedbackEntry>,
    pub rating: bool,
}

/// Error body the chat service sends alongside non-success statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bot_messages_with_an_id_are_rateable() {
        assert_eq!(Message::bot("hi", Some(MessageId(4))).feedback_target(), Some(MessageId(4)));
        assert_eq!(Message::bot("hi", None).feedback_target(), None);

        let mut forged = Message::user("hi");
        forged.id = Some(MessageId(9));
        assert_eq!(forged.feedback_target(), None);
    }

    #[test]
    fn message_json_omits_missing_id() {
        let json = serde_json::to_value(Message::user("Hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Hi", "sender": "user" }));

        let json = serde_json::to_value(Message::bot("Yo", Some(MessageId(7)))).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Yo", "sender": "bot", "id": 7 }));
    }

    #[test]
    fn chat_response_ignores_extra_fields() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"answer":"42","sources":["a"]}"#).unwrap();
        assert_eq!(resp.answer, "42");
    }
}
