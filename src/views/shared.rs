use dioxus::prelude::*;

#[component]
pub fn Badge(label: String) -> Element {
    rsx! {
        span { class: "badge", "{label}" }
    }
}

/// Outline button that links somewhere, usually a placeholder.
#[component]
pub fn IconLink(href: String, icon: &'static str, label: &'static str) -> Element {
    rsx! {
        a { class: "btn btn-outline btn-sm", href: "{href}",
            span { class: "icon", dangerous_inner_html: icon }
            "{label}"
        }
    }
}

#[component]
pub fn SectionTitle(title: &'static str) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
    }
}
