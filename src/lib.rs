//! Core of the chat widget: the transcript, the wire contracts of the chat and
//! feedback endpoints, and the send/feedback flows that tie them together.
//!
//! Nothing in here touches the DOM, so the same code drives the Leptos
//! frontend in the browser and the native tests.

pub mod config;
pub mod errors;
pub mod models;
pub mod notice;
pub mod render;
pub mod session;
pub mod transcript;

pub use config::ClientConfig;
pub use errors::TransportError;
pub use models::{ChatRequest, ChatResponse, FeedbackEntry, FeedbackRequest, Message, MessageId, Sender};
pub use session::{ChatTransport, FeedbackOutcome, SendOutcome, TranscriptStore};
pub use transcript::Transcript;
