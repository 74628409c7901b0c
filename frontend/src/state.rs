use chat_widget::notice::{NOTICE_TIMEOUT_MS, Notice, should_clear};
use chat_widget::session::{self, FeedbackOutcome, TranscriptStore};
use chat_widget::{MessageId, Transcript};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, HttpTransport};

const FEEDBACK_THANKS: &str = "Thank you for your feedback!";

/// Lets the core flows read and mutate the transcript signal.
#[derive(Clone, Copy)]
struct SignalTranscript(RwSignal<Transcript>);

impl TranscriptStore for SignalTranscript {
    fn read<R>(&self, f: impl FnOnce(&Transcript) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Widget state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub transcript: RwSignal<Transcript>,
    pub notice: RwSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
    transport: StoredValue<HttpTransport>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let config = api::resolve_config();
        log::info!("Chat backend: {}", config.api_base());

        let state = Self {
            transcript: RwSignal::new(Transcript::new()),
            notice: RwSignal::new(None),
            notice_seq: StoredValue::new(0),
            transport: StoredValue::new(HttpTransport::new(config)),
        };

        provide_context(state);
        state
    }

    pub fn is_pending(&self) -> bool {
        self.transcript.with(Transcript::is_pending)
    }

    /// Whether `text` would start a chat exchange right now.
    pub fn accepts(&self, text: &str) -> bool {
        self.transcript.with_untracked(|t| t.accepts(text))
    }

    /// Send `text` to the chat endpoint. The user message shows up at once;
    /// the answer, or an apology, follows when the request completes.
    pub fn send_message(&self, text: String) {
        let store = SignalTranscript(self.transcript);
        let transport = self.transport.get_value();

        spawn_local(async move {
            let outcome = session::send_message(&store, &transport, &text).await;
            log::debug!("Chat exchange finished: {outcome:?}");
        });
    }

    /// Rate the reply `id`. A confirmation is shown once the feedback
    /// endpoint has answered; anything else is only logged.
    pub fn rate_message(&self, id: MessageId, rating: bool) {
        let state = *self;
        let store = SignalTranscript(self.transcript);
        let transport = self.transport.get_value();

        spawn_local(async move {
            if session::submit_feedback(&store, &transport, id, rating).await
                == FeedbackOutcome::Delivered
            {
                state.show_notice(FEEDBACK_THANKS);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    fn show_notice(&self, text: &str) {
        let Some(seq) = self.notice_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) else {
            return;
        };
        if self.notice.try_set(Some(Notice { seq, text: text.to_string() })).is_some() {
            // Disposed: nobody left to show it to.
            return;
        }

        let notice = self.notice;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            let current = notice.try_with_untracked(|n| n.as_ref().map(|n| n.seq)).flatten();
            if should_clear(current, seq) {
                notice.try_set(None);
            }
        })
        .forget();
    }
}
