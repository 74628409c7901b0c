use leptos::prelude::*;

use crate::state::AppState;

/// Confirmation banner; dismissed by click or after a few seconds.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        state.notice.get().map(|notice| {
            view! {
                <div class="notice" role="status" on:click=move |_| state.dismiss_notice()>
                    {notice.text}
                </div>
            }
        })
    }
}
