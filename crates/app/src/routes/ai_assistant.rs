use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBot, LdSend};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle};

use crate::data::{CAPABILITIES, CHAT_SEED};

/// A chat turn once the conversation leaves the seeded transcript.
#[derive(Clone, PartialEq)]
struct Turn {
    from_user: bool,
    content: String,
}

const CANNED_REPLY: &str = "I can only answer from the seeded demo data right now. Try asking \
about attendance trends, fee collection, or the exam schedule.";

const QUICK_PROMPTS: &[&str] = &[
    "Summarize this week's attendance",
    "Which fees are overdue?",
    "Any timetable clashes next week?",
];

/// Shared assistant page. The transcript starts from a seeded exchange and
/// every new question gets the same canned reply; there is no model behind
/// this screen.
#[component]
pub fn AiAssistant() -> Element {
    let mut turns = use_signal(|| {
        CHAT_SEED
            .iter()
            .map(|m| Turn { from_user: m.from_user, content: m.content.to_string() })
            .collect::<Vec<_>>()
    });
    let mut draft = use_signal(String::new);

    let mut ask = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        turns.write().push(Turn { from_user: true, content: text });
        turns.write().push(Turn { from_user: false, content: CANNED_REPLY.to_string() });
        draft.set(String::new());
    };
    let mut send = move || {
        let text = draft.read().clone();
        ask(text);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./ai_assistant.css") }
        div { class: "assistant-page",
            div { class: "assistant-chat",
                Card {
                    CardHeader {
                        div { class: "assistant-title",
                            Icon::<LdBot> { icon: LdBot, width: 20, height: 20 }
                            CardTitle { "AI Assistant" }
                            Badge { variant: BadgeVariant::Ai, "Beta" }
                        }
                    }
                    CardContent {
                        div { class: "assistant-transcript",
                            for (i, turn) in turns.read().iter().enumerate() {
                                div {
                                    key: "{i}",
                                    class: if turn.from_user { "assistant-turn user" } else { "assistant-turn bot" },
                                    p { "{turn.content}" }
                                }
                            }
                        }
                        div { class: "assistant-prompts",
                            for prompt in QUICK_PROMPTS {
                                button {
                                    class: "assistant-prompt",
                                    onclick: move |_| ask(prompt.to_string()),
                                    "{prompt}"
                                }
                            }
                        }
                        div { class: "assistant-composer",
                            input {
                                r#type: "text",
                                placeholder: "Ask about your school data...",
                                value: "{draft.read()}",
                                oninput: move |evt| draft.set(evt.value()),
                                onkeydown: move |evt| {
                                    if evt.key() == Key::Enter {
                                        send();
                                    }
                                },
                            }
                            Button {
                                onclick: move |_| send(),
                                Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                                "Send"
                            }
                        }
                    }
                }
            }
            aside { class: "assistant-capabilities",
                Card {
                    CardHeader {
                        CardTitle { "What I can help with" }
                    }
                    CardContent {
                        div { class: "capability-list",
                            for cap in CAPABILITIES {
                                div { class: "capability",
                                    span { class: "capability-name", {cap.name} }
                                    span { class: "capability-body", {cap.description} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
