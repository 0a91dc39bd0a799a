use super::navbar::CONTACT_ANCHOR;
use super::shared::SectionTitle;
use dioxus::prelude::*;

/// Contact form. Nothing is sent anywhere yet; submitting only logs.
#[component]
pub fn ContactSection() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    rsx! {
        section { id: CONTACT_ANCHOR, class: "section section-muted",
            div { class: "container",
                SectionTitle { title: "Contact Me" }
                div { class: "card padded contact-card",
                    form {
                        class: "stack",
                        onsubmit: move |ev: FormEvent| {
                            ev.prevent_default();
                            tracing::debug!(
                                has_name = !name.read().trim().is_empty(),
                                has_email = !email.read().trim().is_empty(),
                                message_len = message.read().len(),
                                "contact form submitted, no delivery configured"
                            );
                        },
                        input {
                            r#type: "text",
                            placeholder: "Your Name",
                            value: "{name}",
                            oninput: move |ev| name.set(ev.value()),
                        }
                        input {
                            r#type: "email",
                            placeholder: "Your Email",
                            value: "{email}",
                            oninput: move |ev| email.set(ev.value()),
                        }
                        textarea {
                            class: "contact-message",
                            placeholder: "Your Message",
                            value: "{message}",
                            oninput: move |ev| message.set(ev.value()),
                        }
                        button { class: "btn btn-primary btn-block", r#type: "submit",
                            span { class: "icon", dangerous_inner_html: "&#9993;" }
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
