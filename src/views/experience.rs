use super::navbar::EXPERIENCE_ANCHOR;
use super::shared::SectionTitle;
use crate::content;
use dioxus::prelude::*;

#[component]
pub fn ExperienceSection() -> Element {
    let profile = content::profile();
    rsx! {
        section { id: EXPERIENCE_ANCHOR, class: "section section-muted",
            div { class: "container",
                SectionTitle { title: "Experience" }
                div { class: "stack-lg",
                    for (index, job) in profile.experience.iter().enumerate() {
                        div { key: "{index}", class: "card padded",
                            h3 { class: "card-title", "{job.position}" }
                            p { class: "text-primary", "{job.company}" }
                            p { class: "text-small text-muted", "{job.period}" }
                            p { class: "card-copy", "{job.description}" }
                        }
                    }
                }
            }
        }
    }
}
