use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    /// Shown on the toggle button; names the mode it switches to.
    pub toggle_label: &'static str,
    pub toggle_icon: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Switch to dark theme",
            toggle_icon: "&#9790;",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Switch to light theme",
            toggle_icon: "&#9728;",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg: #ffffff;
    --color-bg-muted: #f4f4f5;
    --color-bg-overlay: rgba(255, 255, 255, 0.9);
    --color-text: #09090b;
    --color-text-muted: #71717a;
    --color-primary: #18181b;
    --color-primary-soft: rgba(24, 24, 27, 0.06);
    --color-primary-text: #fafafa;
    --color-border: #e4e4e7;
    --color-card: #ffffff;
    --color-badge-bg: #f4f4f5;
    --color-chat-user-bg: #18181b;
    --color-chat-user-text: #fafafa;
    --color-chat-bot-bg: #f4f4f5;
    --color-chat-bot-text: #09090b;
    --color-timestamp: #a1a1aa;
}
body { background: var(--color-bg); color: var(--color-text); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg: #09090b;
    --color-bg-muted: #18181b;
    --color-bg-overlay: rgba(9, 9, 11, 0.9);
    --color-text: #fafafa;
    --color-text-muted: #a1a1aa;
    --color-primary: #fafafa;
    --color-primary-soft: rgba(250, 250, 250, 0.06);
    --color-primary-text: #18181b;
    --color-border: #27272a;
    --color-card: #0c0c0e;
    --color-badge-bg: #27272a;
    --color-chat-user-bg: #fafafa;
    --color-chat-user-text: #18181b;
    --color-chat-bot-bg: #27272a;
    --color-chat-bot-text: #fafafa;
    --color-timestamp: #71717a;
}
body { background: var(--color-bg); color: var(--color-text); }
.hero-grid { opacity: 0.1; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert!(theme_definition(ThemeMode::Light).toggle_label.contains("dark"));
        assert!(theme_definition(ThemeMode::Dark).toggle_label.contains("light"));
    }

    #[test]
    fn test_themes_define_same_variables() {
        let vars = |css: &str| -> Vec<String> {
            css.lines()
                .filter_map(|line| line.trim().split_once(':'))
                .filter(|(name, _)| name.starts_with("--"))
                .map(|(name, _)| name.to_string())
                .collect()
        };
        assert_eq!(vars(LIGHT_THEME), vars(DARK_THEME));
    }

    #[test]
    fn test_mode_toggles_back_and_forth() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(" DARK "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("octane"), None);
    }
}
