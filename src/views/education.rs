use super::shared::SectionTitle;
use crate::content;
use crate::reveal::{Entrance, Region};
use dioxus::prelude::*;

/// Degrees and certifications side by side. Both lists animate when the
/// education region is revealed.
#[component]
pub fn EducationSection(revealed: bool) -> Element {
    let profile = content::profile();
    rsx! {
        section { id: Region::Education.id(), class: "section",
            div { class: "container two-column",
                div {
                    SectionTitle { title: "Education" }
                    div { class: "stack",
                        for (index, edu) in profile.education.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "card padded",
                                style: Entrance::EDUCATION.style(revealed, index),
                                h3 { class: "card-title", "{edu.degree}" }
                                p { class: "text-primary", "{edu.school}" }
                                p { class: "text-small text-muted", "{edu.period}" }
                            }
                        }
                    }
                }
                div {
                    SectionTitle { title: "Certifications" }
                    div { class: "stack",
                        for (index, cert) in profile.certifications.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "card padded",
                                style: Entrance::CERTIFICATIONS.style(revealed, index),
                                h3 { class: "card-title", "{cert.name}" }
                                p { class: "text-small text-muted", "{cert.year}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
