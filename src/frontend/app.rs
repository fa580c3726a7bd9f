use dioxus::prelude::*;

use super::components::*;
use crate::widget_core::{BotClient, Controller, WidgetConfig};

/// Root of one embedded widget. Each liveview connection gets its own.
pub fn app(cx: Scope<WidgetConfig>) -> Element {
    let config = cx.props;
    let client = use_ref(cx, || BotClient::new(config));
    let controller = use_ref(cx, Controller::new);
    let clean = use_state(cx, || false);

    let send = move || {
        let Some(request) = controller.write().begin_send() else {
            return;
        };
        clean.set(true);

        cx.spawn({
            to_owned![controller, client];

            async move {
                let bot = client.read().clone();
                let outcome = bot.ask(&request).await;
                controller.write().settle(outcome);
            }
        });
    };

    let (window_class, loading, messages) = {
        let ctl = controller.read();
        (
            if ctl.is_open() { "open" } else { "" },
            ctl.is_loading(),
            ctl.transcript().to_vec(),
        )
    };

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "talkateeve-widget",
            class: "talkateeve-widget {config.position}",
            style: "--talkateeve-accent: {config.color};",
            button {
                id: "talkateeve-chat-button",
                "aria-label": "Open chat",
                onclick: move |_| controller.write().toggle(),
                ChatIcon {}
            }
            div {
                id: "talkateeve-chat-window",
                class: "{window_class}",
                div {
                    id: "talkateeve-chat-header",
                    h3 { "🤖 Chat Assistant" }
                    button {
                        id: "talkateeve-close-button",
                        "aria-label": "Close chat",
                        onclick: move |_| controller.write().close(),
                        CloseIcon {}
                    }
                }
                div {
                    id: "talkateeve-messages",
                    for (i, msg) in messages.iter().enumerate() {
                        MessageBubble {
                            key: "{i}",
                            content: msg.content.clone(),
                            from_user: msg.is_user(),
                        }
                    }
                    if loading {
                        rsx!(TypingIndicator {})
                    }
                }
                div {
                    id: "talkateeve-input-container",
                    UserInput {
                        controller: controller,
                        clean: clean,
                        onsend: move |_| send(),
                    }
                    button {
                        id: "talkateeve-send-button",
                        "aria-label": "Send message",
                        disabled: "{loading}",
                        onclick: move |_| send(),
                        SendIcon {}
                    }
                }
                div {
                    class: "talkateeve-powered",
                    "Powered by "
                    a { href: "https://talkateeve.com", target: "_blank", "Talkateeve" }
                }
            }
        }
    ))
}
