//! Conversation - View Component

use super::browser::BrowserPlatform;
use super::error::ChatError;
use super::model::HttpChatApi;
use super::ports::RenderTarget;
use super::view_model::Conversation;
use crate::config::ClientConfig;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::conversation::Message;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

type BrowserConversation = Conversation<HttpChatApi, SignalTarget, BrowserPlatform>;

/// `RenderTarget` backed by signals and node refs of `ConversationPage`
#[derive(Clone, Copy)]
pub struct SignalTarget {
    pub rows: RwSignal<Vec<Message>>,
    /// Bumped on every `clear` so a re-render replaces rows with the same index.
    pub generation: RwSignal<u64>,
    pub busy: RwSignal<bool>,
    pub draft: RwSignal<String>,
    pub container: NodeRef<leptos::html::Div>,
    pub input: NodeRef<leptos::html::Input>,
}

impl Default for SignalTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalTarget {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            generation: RwSignal::new(0),
            busy: RwSignal::new(false),
            draft: RwSignal::new(String::new()),
            container: NodeRef::new(),
            input: NodeRef::new(),
        }
    }

    fn keyed_rows(&self) -> Vec<(u64, usize, Message)> {
        let generation = self.generation.get();
        self.rows
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, message)| (generation, index, message))
            .collect()
    }
}

impl RenderTarget for SignalTarget {
    fn clear(&self) {
        self.generation.update(|g| *g += 1);
        self.rows.set(Vec::new());
    }

    fn append(&self, message: &Message) {
        let message = message.clone();
        self.rows.update(|rows| rows.push(message));
    }

    fn scroll_to_latest(&self) {
        if let Some(container) = self.container.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn clear_input(&self) {
        self.draft.set(String::new());
    }

    fn focus_input(&self) {
        if let Some(input) = self.input.get_untracked() {
            let _ = input.focus();
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn MessageRow(message: Message) -> impl IntoView {
    let meta = message.ts.as_deref().map(format_datetime);
    view! {
        <div class=message.role.css_class()>
            <div class="bubble">{message.content}</div>
            {meta.map(|ts| view! { <div class="meta">{ts}</div> })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ConversationPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let target = SignalTarget::new();
    let notice = RwSignal::new(Option::<String>::None);

    let conversation: Rc<BrowserConversation> = Rc::new(Conversation::new(
        HttpChatApi::new(config),
        target,
        BrowserPlatform,
    ));
    // Rc is !Send; keep it local so the handlers below stay Send + Sync.
    let conversation = StoredValue::new_local(conversation);

    let report = move |result: Result<(), ChatError>| match result {
        Ok(()) => notice.set(None),
        Err(ChatError::Busy) => {}
        Err(e) => notice.set(Some(e.to_string())),
    };

    // Initial load
    Effect::new(move |_| {
        let conv = conversation.get_value();
        spawn_local(async move {
            report(conv.load_history().await.map(|_| ()));
            conv.target().focus_input();
        });
    });

    let handle_send = move || {
        let text = target.draft.get_untracked();
        let conv = conversation.get_value();
        spawn_local(async move {
            if conv.send(&text).await.reached_server() {
                notice.set(None);
            }
        });
    };

    let handle_reset = move || {
        let conv = conversation.get_value();
        spawn_local(async move {
            report(conv.reset().await.map(|_| ()));
        });
    };

    let handle_export = move || {
        let conv = conversation.get_value();
        spawn_local(async move {
            report(conv.export().await.map(|_| ()));
        });
    };

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; padding: 20px;">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <h2 style="font-size: 18px; font-weight: bold;">"KindWords"</h2>
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=target.busy
                        on_click=move |_| handle_export()
                    >
                        {icon("download")}
                        " Export"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=target.busy
                        on_click=move |_| handle_reset()
                    >
                        {icon("trash")}
                        " Reset"
                    </Button>
                </Flex>
            </Flex>

            {move || {
                notice
                    .get()
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}

            <div node_ref=target.container class="chat">
                <For
                    each=move || target.keyed_rows()
                    key=|(generation, index, _)| (*generation, *index)
                    children=move |(_, _, message): (u64, usize, Message)| {
                        view! { <MessageRow message=message /> }
                    }
                />
            </div>

            <Flex style="gap: 8px; align-items: center; margin-top: 16px;">
                <input
                    node_ref=target.input
                    type="text"
                    placeholder="Type a message..."
                    autocomplete="off"
                    style="flex: 1; padding: 8px 12px;"
                    bind:value=target.draft
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            handle_send();
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=target.busy
                    on_click=move |_| handle_send()
                >
                    {icon("send")}
                    {move || if target.busy.get() { " Sending..." } else { " Send" }}
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_starts_empty() {
        let target = SignalTarget::default();
        assert!(target.rows.get_untracked().is_empty());
        assert_eq!(target.generation.get_untracked(), 0);
        assert!(!target.busy.get_untracked());
        assert!(target.draft.get_untracked().is_empty());
    }

    #[test]
    fn test_clear_starts_new_generation() {
        let target = SignalTarget::default();
        target.append(&Message::user("a"));
        target.set_busy(true);
        target.draft.set("typed".to_string());

        target.clear();
        target.clear_input();
        target.append(&Message::assistant("b"));

        assert_eq!(target.generation.get_untracked(), 1);
        assert_eq!(target.rows.get_untracked(), vec![Message::assistant("b")]);
        assert!(target.busy.get_untracked());
        assert!(target.draft.get_untracked().is_empty());
    }
}
