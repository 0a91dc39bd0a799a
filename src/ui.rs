use crate::chat::ChatSession;
use crate::config;
use crate::reveal::{
    IntersectionReport, Region, RevealFlags, Watch, apply_report, disconnect_script, watch_script,
};
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{
    ChatWidget, ContactSection, EducationSection, ExperienceSection, HeroSection, Navbar,
    ProjectsSection, SkillsSection,
};
use dioxus::prelude::*;

const PORTFOLIO_CSS: Asset = asset!("/assets/portfolio.css");

/// The whole page. Owns the theme, the reveal flags and the chat session.
#[component]
pub fn App() -> Element {
    let theme = use_signal(|| config::current().theme);
    let reveal = use_signal(RevealFlags::default);
    let chat = use_signal(ChatSession::new);

    use_reveal_trigger(reveal);

    let flags = reveal();

    rsx! {
        ThemeStyles { theme }
        Navbar {}
        ThemeToggle { theme }
        main { class: "page",
            HeroSection {}
            SkillsSection { revealed: flags.is_revealed(Region::Skills) }
            ProjectsSection {}
            ExperienceSection {}
            EducationSection { revealed: flags.is_revealed(Region::Education) }
            ContactSection {}
        }
        ChatWidget { session: chat }
    }
}

/// Watches the reveal regions from first mount until unmount.
fn use_reveal_trigger(flags: Signal<RevealFlags>) {
    use_effect(move || {
        let mut flags = flags;
        let threshold = config::current().reveal_threshold;
        let Some(script) = watch_script(&flags.peek(), threshold) else {
            return;
        };

        spawn(async move {
            let mut observer = document::eval(&script);
            loop {
                let report = match observer.recv::<IntersectionReport>().await {
                    Ok(report) => report,
                    Err(err) => {
                        tracing::warn!(?err, "reveal observer stopped");
                        break;
                    }
                };
                let current = *flags.peek();
                let mut next = current;
                let watch = apply_report(&mut next, &report, threshold);
                if next != current {
                    flags.set(next);
                }
                if watch == Watch::Done {
                    break;
                }
            }
        });
    });

    use_drop(|| {
        let _ = document::eval(&disconnect_script());
    });
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: PORTFOLIO_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let definition = theme_definition(theme());
    rsx! {
        button {
            class: "btn btn-outline btn-icon theme-toggle",
            r#type: "button",
            title: definition.toggle_label,
            aria_label: definition.toggle_label,
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            span { dangerous_inner_html: definition.toggle_icon }
        }
    }
}
