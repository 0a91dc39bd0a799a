use super::shared::{Badge, IconLink, SectionTitle};
use crate::content::{self, Project};
use dioxus::prelude::*;

#[component]
pub fn ProjectsSection() -> Element {
    let profile = content::profile();
    rsx! {
        section { class: "section",
            div { class: "container",
                SectionTitle { title: "Featured Projects" }
                div { class: "projects-grid",
                    for project in profile.projects.iter() {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div { class: "card project-card",
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}" }
            }
            div { class: "project-body",
                h3 { class: "card-title", "{project.title}" }
                p { class: "text-muted", "{project.description}" }
                div { class: "badge-row",
                    for tag in project.tags.iter() {
                        Badge { key: "{tag}", label: tag.clone() }
                    }
                }
                div { class: "project-links",
                    IconLink { href: project.demo_href().to_string(), icon: "&#8599;", label: "Demo" }
                    IconLink { href: project.code_href().to_string(), icon: "&#60;/&#62;", label: "Code" }
                }
            }
        }
    }
}
