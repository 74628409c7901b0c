use chat_widget::render::{self, MessageView, Segment};
use chat_widget::{Message, MessageId};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::notice::NoticeBanner;
use crate::state::AppState;

/// Transcript, typing indicator and input row.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let end_of_messages = NodeRef::<Div>::new();

    // Keep the newest entry in view whenever the transcript or the typing
    // indicator changes.
    Effect::new(move |_| {
        state.transcript.track();
        if let Some(anchor) = end_of_messages.get() {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            anchor.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });

    view! {
        <div class="chat-container">
            <div class="chat-box">
                <For
                    each=move || {
                        state
                            .transcript
                            .with(|t| t.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                    }
                    key=|(index, _)| *index
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>
                <Show when=move || state.is_pending()>
                    <div class="message bot typing">
                        <p><i>"Typing..."</i></p>
                    </div>
                </Show>
                <div class="scroll-anchor" node_ref=end_of_messages></div>
            </div>
            <NoticeBanner />
            <ChatInput />
        </div>
    }
}

/// A single transcript entry, with feedback controls on rateable replies.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let bubble = MessageView::from(&message);

    let body = render::segments(&bubble.text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.to_string().into_any(),
            Segment::LineBreak => view! { <br /> }.into_any(),
        })
        .collect_view();

    view! {
        <div class=bubble.css_class>
            <p>{body}</p>
            {bubble.feedback_target.map(|id| view! { <FeedbackButtons id=id /> })}
        </div>
    }
}

#[component]
fn FeedbackButtons(id: MessageId) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="feedback-buttons">
            <button title="Good answer" on:click=move |_| state.rate_message(id, true)>
                "👍"
            </button>
            <button title="Bad answer" on:click=move |_| state.rate_message(id, false)>
                "👎"
            </button>
        </div>
    }
}

/// Single-line input with a send button. Both are disabled while a reply is
/// pending.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let send = move || {
        let text = input.get_untracked();
        if !state.accepts(&text) {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="input-area">
            <input
                type="text"
                placeholder="Ask me anything..."
                prop:value=input
                on:input=move |ev| {
                    set_input.set(event_target_value(&ev));
                }
                on:keydown=on_keydown
                disabled=move || state.is_pending()
            />
            <button on:click=move |_| send() disabled=move || state.is_pending()>
                "Send"
            </button>
        </div>
    }
}
