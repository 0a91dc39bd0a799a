use super::navbar::CONTACT_ANCHOR;
use crate::content;
use dioxus::prelude::*;

const GRID_LINES: usize = 20;

#[component]
pub fn HeroSection() -> Element {
    let profile = content::profile();
    rsx! {
        section { class: "hero",
            div { class: "hero-grid", aria_hidden: "true",
                for i in 0..GRID_LINES {
                    div { key: "{i}", class: "hero-grid-line" }
                }
            }
            div { class: "container hero-content",
                div { class: "hero-text",
                    h1 { class: "hero-title", "{profile.name}" }
                    p { class: "hero-headline", "{profile.headline}" }
                    div { class: "hero-actions",
                        a { class: "btn btn-primary", href: "{profile.resume_href()}",
                            span { class: "icon", dangerous_inner_html: "&#8681;" }
                            "Download Resume"
                        }
                        a { class: "btn btn-outline", href: "#{CONTACT_ANCHOR}", "Contact Me" }
                    }
                }
                div { class: "hero-avatar",
                    div { class: "hero-avatar-glow" }
                    img { class: "hero-avatar-img", src: "{profile.avatar}", alt: "Profile" }
                }
            }
        }
    }
}
