use crate::config::ClientConfig;
use crate::conversation::ConversationPage;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Provide the client configuration to the whole app via context.
    provide_context(config);

    view! {
        <ConversationPage />
    }
}
