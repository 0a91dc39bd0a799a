use super::shared::SectionTitle;
use crate::content;
use crate::reveal::{Entrance, Region};
use dioxus::prelude::*;

#[component]
pub fn SkillsSection(revealed: bool) -> Element {
    let profile = content::profile();
    rsx! {
        section { id: Region::Skills.id(), class: "section section-muted",
            div { class: "container",
                SectionTitle { title: "Skills" }
                div { class: "skills-grid",
                    for (index, skill) in profile.skills.iter().enumerate() {
                        div {
                            key: "{skill}",
                            class: "card skill-card",
                            style: Entrance::SKILLS.style(revealed, index),
                            "{skill}"
                        }
                    }
                }
            }
        }
    }
}
