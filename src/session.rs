use std::cell::RefCell;

use futures_util::future::LocalBoxFuture;
use tracing::{debug, error, warn};

use crate::errors::TransportError;
use crate::models::{ChatRequest, ChatResponse, FeedbackRequest, MessageId};
use crate::transcript::Transcript;

/// The two HTTP exchanges the widget performs.
///
/// Futures are `!Send`: everything runs on the browser's single event loop.
pub trait ChatTransport {
    fn send_chat<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> LocalBoxFuture<'a, Result<ChatResponse, TransportError>>;

    /// Resolves once the endpoint has answered; the body is not read.
    fn send_feedback<'a>(
        &'a self,
        request: &'a FeedbackRequest,
    ) -> LocalBoxFuture<'a, Result<(), TransportError>>;
}

/// Somewhere a [`Transcript`] lives between event-loop turns.
///
/// Both methods return `None` once the store is gone, e.g. after the view
/// owning it was disposed.
pub trait TranscriptStore {
    fn read<R>(&self, f: impl FnOnce(&Transcript) -> R) -> Option<R>;
    fn update<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R>;
}

impl TranscriptStore for RefCell<Transcript> {
    fn read<R>(&self, f: impl FnOnce(&Transcript) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or a request already in flight. Nothing changed.
    Ignored,
    Answered(MessageId),
    /// The apology was appended instead of an answer.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The endpoint answered, whatever its status.
    Delivered,
    Undelivered,
    UnknownMessage,
}

/// Runs one chat exchange for `input`.
///
/// The user message is appended before the request goes out. Afterwards
/// exactly one bot message follows: the answer, or the apology on any
/// failure. Errors end here; they are logged, not returned.
pub async fn send_message<S, T>(store: &S, transport: &T, input: &str) -> SendOutcome
where
    S: TranscriptStore,
    T: ChatTransport + ?Sized,
{
    let Some(request) = store.update(|t| t.begin_send(input)).flatten() else {
        return SendOutcome::Ignored;
    };
    debug!(history = request.conversation_history.len(), "sending chat message");

    let answer = match transport.send_chat(&request).await {
        Ok(response) => Ok(response.answer),
        Err(err) => {
            error!(error = %err, "failed to fetch chat response");
            Err(err)
        }
    };

    match store.update(|t| t.finish_send(answer)) {
        Some(Some(id)) => SendOutcome::Answered(id),
        Some(None) => SendOutcome::Failed,
        None => {
            warn!("transcript dropped before the chat exchange finished");
            SendOutcome::Failed
        }
    }
}

/// Reports `rating` for the reply `id` along with the current conversation.
///
/// Independent of the chat pending flag; the transcript is only read.
pub async fn submit_feedback<S, T>(
    store: &S,
    transport: &T,
    id: MessageId,
    rating: bool,
) -> FeedbackOutcome
where
    S: TranscriptStore,
    T: ChatTransport + ?Sized,
{
    let Some(request) = store.read(|t| t.feedback_for(id, rating)).flatten() else {
        warn!(%id, "feedback for a message that is not in the transcript");
        return FeedbackOutcome::UnknownMessage;
    };
    debug!(%id, rating, entries = request.conversation.len(), "sending feedback");

    match transport.send_feedback(&request).await {
        Ok(()) => FeedbackOutcome::Delivered,
        Err(err) if err.is_status() => {
            warn!(%id, error = %err, "feedback endpoint answered with an error status");
            FeedbackOutcome::Delivered
        }
        Err(err) => {
            error!(%id, error = %err, "failed to send feedback");
            FeedbackOutcome::Undelivered
        }
    }
}
