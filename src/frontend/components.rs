#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::{Key, Modifiers};
use dioxus::prelude::*;

use crate::widget_core::Controller;

#[derive(PartialEq, Props)]
pub struct BubbleProps {
    content: String,
    from_user: bool,
}

/// Message text goes into a text node, never into markup.
pub fn MessageBubble(cx: Scope<BubbleProps>) -> Element {
    let (side, avatar) = if cx.props.from_user {
        ("user", "👤")
    } else {
        ("bot", "🤖")
    };
    cx.render(rsx!(
        div {
            class: "talkateeve-message {side}",
            div { class: "talkateeve-avatar", "{avatar}" }
            div {
                class: "talkateeve-message-content",
                "{cx.props.content}"
            }
        }
    ))
}

pub fn TypingIndicator(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            id: "talkateeve-typing-indicator",
            class: "talkateeve-message bot",
            div { class: "talkateeve-avatar", "🤖" }
            div {
                class: "talkateeve-typing",
                span {}
                span {}
                span {}
            }
        }
    ))
}

#[derive(Props)]
pub struct InputProps<'a> {
    controller: &'a UseRef<Controller>,
    clean: &'a UseState<bool>,
    onsend: EventHandler<'a>,
}

/// The text field is left uncontrolled so keystrokes racing a server round
/// trip are never overwritten; `value` is only written to clear it.
pub fn UserInput<'a>(cx: Scope<'a, InputProps<'a>>) -> Element<'a> {
    let controller = cx.props.controller;
    let clean = cx.props.clean;
    let (loading, focus_seq) = {
        let ctl = controller.read();
        (ctl.is_loading(), ctl.focus_seq())
    };

    let oninput = move |e: Event<FormData>| {
        controller.write_silent().set_draft(e.value.clone());
    };
    let onkeydown = move |e: Event<KeyboardData>| {
        if let Key::Enter = e.data.key() {
            if !e.data.modifiers().contains(Modifiers::SHIFT) {
                cx.props.onsend.call(());
            }
        }
    };

    if **clean {
        clean.set(false);
        cx.render(rsx!(input {
            r#type: "text",
            id: "talkateeve-input",
            placeholder: "Type your message...",
            "aria-label": "Chat message",
            "data-focus-seq": "{focus_seq}",
            value: "",
            disabled: "{loading}",
            oninput: oninput,
            onkeydown: onkeydown,
        }))
    } else {
        cx.render(rsx!(input {
            r#type: "text",
            id: "talkateeve-input",
            placeholder: "Type your message...",
            "aria-label": "Chat message",
            "data-focus-seq": "{focus_seq}",
            disabled: "{loading}",
            oninput: oninput,
            onkeydown: onkeydown,
        }))
    }
}

pub fn ChatIcon(cx: Scope) -> Element {
    cx.render(rsx!(
        svg {
            "viewBox": "0 0 24 24",
            path { "d": "M20 2H4c-1.1 0-2 .9-2 2v18l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2z" }
        }
    ))
}

pub fn CloseIcon(cx: Scope) -> Element {
    cx.render(rsx!(
        svg {
            "width": "20",
            "height": "20",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            line { "x1": "18", "y1": "6", "x2": "6", "y2": "18" }
            line { "x1": "6", "y1": "6", "x2": "18", "y2": "18" }
        }
    ))
}

pub fn SendIcon(cx: Scope) -> Element {
    cx.render(rsx!(
        svg {
            "viewBox": "0 0 24 24",
            path { "d": "M2.01 21L23 12 2.01 3 2 10l15 2-15 2z" }
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::Mutations;

    const MARKUP: &str = "<script>alert(1)</script>";

    fn edits(mutations: &Mutations) -> Vec<String> {
        mutations.edits.iter().map(|edit| format!("{edit:?}")).collect()
    }

    #[test]
    fn test_bubble_text_is_a_text_node() {
        let mut dom = VirtualDom::new_with_props(
            MessageBubble,
            BubbleProps {
                content: MARKUP.to_string(),
                from_user: false,
            },
        );
        let mutations = dom.rebuild();

        let edits = edits(&mutations);
        assert!(edits.iter().any(|edit| {
            (edit.starts_with("HydrateText") || edit.starts_with("CreateTextNode"))
                && edit.contains(MARKUP)
        }));

        let templates = format!("{:?}", mutations.templates);
        assert!(!templates.contains("\"script\""));
        assert!(templates.contains("talkateeve-message-content"));
    }

    #[test]
    fn test_typing_indicator_dots() {
        let mut dom = VirtualDom::new(TypingIndicator);
        let mutations = dom.rebuild();

        let templates = format!("{:?}", mutations.templates);
        assert!(templates.contains("talkateeve-typing-indicator"));
        assert_eq!(templates.matches("\"span\"").count(), 3);
    }

    fn SendingInput(cx: Scope<bool>) -> Element {
        let sending = *cx.props;
        let controller = use_ref(cx, || {
            let mut controller = Controller::new();
            if sending {
                controller.set_draft("hi".into());
                controller.begin_send();
            }
            controller
        });
        let clean = use_state(cx, || false);

        cx.render(rsx!(UserInput {
            controller: controller,
            clean: clean,
            onsend: move |_| {},
        }))
    }

    fn disabled_value(sending: bool) -> String {
        let mut dom = VirtualDom::new_with_props(SendingInput, sending);
        let mutations = dom.rebuild();
        edits(&mutations)
            .into_iter()
            .find(|edit| edit.starts_with("SetAttribute") && edit.contains("\"disabled\""))
            .unwrap()
    }

    #[test]
    fn test_input_disabled_while_sending() {
        assert!(disabled_value(true).contains("true"));
        assert!(disabled_value(false).contains("false"));
    }

    #[test]
    fn test_input_value_not_echoed() {
        let mut dom = VirtualDom::new_with_props(SendingInput, false);
        let mutations = dom.rebuild();

        let edits = edits(&mutations);
        assert!(!edits.iter().any(|edit| edit.contains("\"value\"")));
        assert!(!format!("{:?}", mutations.templates).contains("\"value\""));
    }
}
