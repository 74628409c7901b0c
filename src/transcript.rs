use crate::errors::TransportError;
use crate::models::{ChatRequest, FeedbackEntry, FeedbackRequest, Message, MessageId};

pub const GREETING: &str = "Bonjour! Comment puis-je vous aider aujourd'hui?";

/// Shown in place of an answer whenever the chat exchange fails.
pub const APOLOGY: &str =
    "Sorry, I'm having trouble connecting to my brain. Please try again later.";

/// The ordered conversation shown to the user, plus the pending flag that
/// gates new sends.
///
/// Append-only: entries are never reordered or removed, so an entry's index
/// is a stable key for the lifetime of the session.
#[derive(Clone, Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: bool,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::bot(greeting, None)],
            pending: false,
            next_id: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether `input` would be accepted as a new user message right now.
    pub fn accepts(&self, input: &str) -> bool {
        !self.pending && !is_blank(input)
    }

    /// Appends a user message. Blank input, or input while a request is
    /// pending, is dropped and `false` returned.
    pub fn append_user_message(&mut self, text: &str) -> bool {
        if !self.accepts(text) {
            return false;
        }
        self.messages.push(Message::user(text));
        true
    }

    /// Appends a rateable bot reply under a fresh id.
    pub fn append_bot_message(&mut self, text: impl Into<String>) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message::bot(text, Some(id)));
        id
    }

    /// Appends the fixed apology. It carries no id and can't be rated.
    pub fn append_system_error_message(&mut self) {
        self.messages.push(Message::bot(APOLOGY, None));
    }

    /// Starts a chat exchange: records the user message, raises the pending
    /// flag and returns the request to send.
    ///
    /// The history is the transcript as it stood before `input` was added.
    pub fn begin_send(&mut self, input: &str) -> Option<ChatRequest> {
        if !self.accepts(input) {
            return None;
        }
        let conversation_history = self.messages.clone();
        self.append_user_message(input);
        self.pending = true;
        Some(ChatRequest { message: input.to_string(), conversation_history })
    }

    /// Ends the exchange started by [`begin_send`](Self::begin_send). The pending
    /// flag is cleared whatever the result.
    pub fn finish_send(&mut self, answer: Result<String, TransportError>) -> Option<MessageId> {
        self.pending = false;
        match answer {
            Ok(text) => Some(self.append_bot_message(text)),
            Err(_) => {
                self.append_system_error_message();
                None
            }
        }
    }

    /// The whole conversation, ids stripped, paired with `rating`.
    pub fn feedback_snapshot(&self, rating: bool) -> FeedbackRequest {
        FeedbackRequest {
            conversation: self.messages.iter().map(FeedbackEntry::from).collect(),
            rating,
        }
    }

    /// Like [`feedback_snapshot`](Self::feedback_snapshot), but only when `id`
    /// names a rateable message of this transcript.
    pub fn feedback_for(&self, id: MessageId, rating: bool) -> Option<FeedbackRequest> {
        self.messages
            .iter()
            .any(|m| m.feedback_target() == Some(id))
            .then(|| self.feedback_snapshot(rating))
    }
}

/// Blank as browsers see it: `char::is_whitespace` plus the byte-order mark,
/// which JavaScript's `trim()` also strips.
fn is_blank(input: &str) -> bool {
    input.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;

    #[test]
    fn starts_with_greeting_and_idle() {
        let t = Transcript::new();
        assert_eq!(t.messages(), &[Message::bot(GREETING, None)]);
        assert!(!t.is_pending());
    }

    #[test]
    fn blank_user_input_is_dropped() {
        let mut t = Transcript::new();
        assert!(!t.append_user_message(""));
        assert!(!t.append_user_message("  \t\n"));
        assert!(!t.append_user_message("\u{feff}"));
        assert!(!t.append_user_message(" \u{feff}\u{a0}"));
        assert_eq!(t.len(), 1);
        assert!(t.begin_send("   ").is_none());
        assert!(!t.is_pending());
    }

    #[test]
    fn byte_order_mark_inside_text_is_kept() {
        let mut t = Transcript::new();
        assert!(t.append_user_message("\u{feff}Hi"));
        assert_eq!(t.last(), Some(&Message::user("\u{feff}Hi")));
    }

    #[test]
    fn bot_ids_are_distinct() {
        let mut t = Transcript::new();
        let a = t.append_bot_message("one");
        let b = t.append_bot_message("two");
        assert_ne!(a, b);
        assert_eq!(t.last().and_then(|m| m.id), Some(b));
    }

    #[test]
    fn begin_send_captures_history_before_the_new_message() {
        let mut t = Transcript::new();
        let req = t.begin_send(" Hi ").unwrap();

        assert_eq!(req.message, " Hi ");
        assert_eq!(req.conversation_history, vec![Message::bot(GREETING, None)]);
        assert_eq!(t.last(), Some(&Message::user(" Hi ")));
        assert!(t.is_pending());
    }

    #[test]
    fn pending_blocks_further_input() {
        let mut t = Transcript::new();
        t.begin_send("first").unwrap();
        assert!(t.begin_send("second").is_none());
        assert!(!t.append_user_message("third"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn failed_exchange_appends_apology_and_clears_pending() {
        let mut t = Transcript::new();
        t.begin_send("Hi").unwrap();
        let id = t.finish_send(Err(TransportError::status(500, None)));

        assert!(id.is_none());
        assert!(!t.is_pending());
        let last = t.last().unwrap();
        assert_eq!(last.text, APOLOGY);
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.feedback_target(), None);
    }

    #[test]
    fn feedback_only_for_known_ids() {
        let mut t = Transcript::new();
        t.begin_send("Hi").unwrap();
        let id = t.finish_send(Ok("Hello".into())).unwrap();

        let req = t.feedback_for(id, false).unwrap();
        assert!(!req.rating);
        assert_eq!(req.conversation.len(), 3);
        assert_eq!(req.conversation[2], FeedbackEntry { text: "Hello".into(), sender: Sender::Bot });

        assert!(t.feedback_for(MessageId(999), true).is_none());
    }
}
