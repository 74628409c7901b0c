mod api;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! { <ChatArea /> }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
