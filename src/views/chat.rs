use crate::chat::{ChatSession, deliver_after};
use crate::config;
use crate::types::Origin;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn origin_class(origin: Origin) -> &'static str {
    match origin {
        Origin::User => "user",
        Origin::Bot => "bot",
    }
}

fn format_clock(datetime: OffsetDateTime) -> Option<String> {
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    format_clock(datetime)
}

/// Floating chat launcher and panel.
#[component]
pub fn ChatWidget(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    let reply_delay = config::current().reply_delay;

    let mut send = move || {
        let pending = session.write().submit();
        if let Some(pending) = pending {
            let mut session = session;
            spawn(deliver_after(reply_delay, pending, move |pending| {
                session.write().deliver(pending);
            }));
        }
    };

    let (open, typing, can_submit) = {
        let state = session.read();
        (state.is_open(), state.is_typing(), state.can_submit())
    };
    let input = session.read().input().to_string();
    let transcript = session.read().transcript().to_vec();
    let dock_class = if open { "chat-dock open" } else { "chat-dock" };

    rsx! {
        div { class: dock_class,
            if open {
                div { class: "card chat-panel",
                    div { class: "chat-header",
                        h3 { "Chat with me" }
                        button {
                            class: "btn btn-ghost btn-icon",
                            r#type: "button",
                            aria_label: "Close chat",
                            onclick: move |_| session.write().close(),
                            span { dangerous_inner_html: "&#10005;" }
                        }
                    }
                    div { class: "chat-list",
                        for (i, msg) in transcript.iter().enumerate() {
                            div { key: "{i}", class: format_args!("message-row {}", origin_class(msg.origin())),
                                div { class: format_args!("bubble {}", origin_class(msg.origin())), "{msg.text()}" }
                                if let Some(ts) = format_message_timestamp(msg.created_at()) {
                                    span { class: "message-timestamp", "{ts}" }
                                }
                            }
                        }
                        if typing {
                            div { class: "message-row bot",
                                div { class: "bubble bot",
                                    span { class: "typing", "Typing..." }
                                }
                            }
                        }
                    }
                    form {
                        class: "chat-composer",
                        onsubmit: move |ev: FormEvent| {
                            ev.prevent_default();
                            send();
                        },
                        input {
                            r#type: "text",
                            placeholder: "Ask about my experience...",
                            value: "{input}",
                            disabled: typing,
                            oninput: move |ev| session.write().set_input(ev.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: !can_submit,
                            "Send"
                        }
                    }
                }
            } else {
                button {
                    class: "btn btn-primary chat-launcher",
                    r#type: "button",
                    aria_label: "Open chat",
                    onclick: move |_| session.write().open(),
                    span { dangerous_inner_html: "&#128172;" }
                }
            }
        }
    }
}
