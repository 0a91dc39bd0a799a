use crate::reveal::Region;
use dioxus::prelude::*;

pub const EXPERIENCE_ANCHOR: &str = "experience";
pub const CONTACT_ANCHOR: &str = "contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub fn nav_items() -> [NavItem; 4] {
    [
        NavItem { anchor: EXPERIENCE_ANCHOR, label: "Experience" },
        NavItem { anchor: Region::Skills.id(), label: "Skills" },
        NavItem { anchor: Region::Education.id(), label: "Education" },
        NavItem { anchor: CONTACT_ANCHOR, label: "Contact Me" },
    ]
}

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "container navbar-inner",
                a { class: "navbar-brand", href: "#", "Portfolio" }
                div { class: "navbar-links",
                    for item in nav_items() {
                        a { key: "{item.anchor}", href: "#{item.anchor}", "{item.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_every_section() {
        let anchors: Vec<_> = nav_items().iter().map(|item| item.anchor).collect();
        assert_eq!(anchors, ["experience", "skills", "education", "contact"]);
    }
}
