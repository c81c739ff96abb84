//! Theme color tokens and fallback resolution.
//!
//! The host passes a `Theme` explicitly; nothing here reads ambient state.
//! Tokens that are missing or do not look like a CSS color resolve to a
//! visible fallback instead of failing the render.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Fallback for the de-emphasized text color (60% opacity body text).
pub const FALLBACK_FADED_TEXT_60: &str = "rgba(49, 51, 63, 0.6)";

/// Fallback for the primary accent color.
pub const FALLBACK_PRIMARY: &str = "#ff4b4b";

/// Which theme token a skin reads its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// De-emphasized ("faded") text color
    FadedText,
    /// Primary accent color
    Primary,
}

impl ColorRole {
    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::FadedText => "faded_text_60",
            ColorRole::Primary => "primary",
        }
    }
}

/// Color tokens supplied by the host theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Secondary text color used by most skins
    #[serde(default)]
    pub faded_text_60: Option<String>,

    /// Accent color used by the pulse skin
    #[serde(default)]
    pub primary: Option<String>,
}

impl Theme {
    /// Merge another theme on top of this one. Tokens set in `other` win.
    pub fn merge(self, other: Theme) -> Theme {
        Theme {
            faded_text_60: other.faded_text_60.or(self.faded_text_60),
            primary: other.primary.or(self.primary),
        }
    }

    /// Resolve the color for a role, falling back when the token is unusable.
    pub fn resolve(&self, role: ColorRole) -> ThemeColor {
        let (token, fallback) = match role {
            ColorRole::FadedText => (self.faded_text_60.as_deref(), FALLBACK_FADED_TEXT_60),
            ColorRole::Primary => (self.primary.as_deref(), FALLBACK_PRIMARY),
        };

        match token.map(str::trim) {
            None | Some("") => {
                debug!(role = role.label(), fallback, "theme:token missing, using fallback");
                ThemeColor(fallback.to_string())
            }
            Some(value) if is_css_color(value) => ThemeColor(value.to_string()),
            Some(value) => {
                warn!(role = role.label(), value, fallback, "theme:token rejected, using fallback");
                ThemeColor(fallback.to_string())
            }
        }
    }
}

/// A resolved color, safe to interpolate into a CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn css_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(?:rgb|rgba|hsl|hsla)\([0-9.,%\s/a-z]*\)|[a-zA-Z]+)$",
        )
        .expect("static color pattern is valid")
    })
}

/// Check whether a token looks like a CSS color.
///
/// Accepts hex colors, rgb/hsl functions and bare named colors. Anything that
/// could break out of a declaration (`;`, `{`, `<`, quotes) is rejected.
pub fn is_css_color(value: &str) -> bool {
    css_color_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_configured_token() {
        let theme = Theme {
            faded_text_60: Some("rgba(250, 250, 250, 0.6)".to_string()),
            primary: Some("#1f77b4".to_string()),
        };
        assert_eq!(
            theme.resolve(ColorRole::FadedText).as_str(),
            "rgba(250, 250, 250, 0.6)"
        );
        assert_eq!(theme.resolve(ColorRole::Primary).as_str(), "#1f77b4");
    }

    #[test]
    fn resolve_missing_token_falls_back() {
        let theme = Theme::default();
        assert_eq!(
            theme.resolve(ColorRole::FadedText).as_str(),
            FALLBACK_FADED_TEXT_60
        );
        assert_eq!(theme.resolve(ColorRole::Primary).as_str(), FALLBACK_PRIMARY);
    }

    #[test]
    fn resolve_blank_token_falls_back() {
        let theme = Theme {
            faded_text_60: Some("   ".to_string()),
            primary: None,
        };
        assert_eq!(
            theme.resolve(ColorRole::FadedText).as_str(),
            FALLBACK_FADED_TEXT_60
        );
    }

    #[test]
    fn resolve_trims_whitespace() {
        let theme = Theme {
            faded_text_60: None,
            primary: Some("  teal ".to_string()),
        };
        assert_eq!(theme.resolve(ColorRole::Primary).as_str(), "teal");
    }

    #[test]
    fn resolve_rejects_injection() {
        let theme = Theme {
            faded_text_60: Some("red; background: url(x)".to_string()),
            primary: Some("</style><script>".to_string()),
        };
        assert_eq!(
            theme.resolve(ColorRole::FadedText).as_str(),
            FALLBACK_FADED_TEXT_60
        );
        assert_eq!(theme.resolve(ColorRole::Primary).as_str(), FALLBACK_PRIMARY);
    }

    #[test]
    fn is_css_color_accepts_common_forms() {
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#ff4b4b"));
        assert!(is_css_color("#ff4b4b80"));
        assert!(is_css_color("rgb(0, 0, 0)"));
        assert!(is_css_color("rgba(49, 51, 63, 0.6)"));
        assert!(is_css_color("hsl(210 40% 50% / 0.5)"));
        assert!(is_css_color("currentColor"));
    }

    #[test]
    fn is_css_color_rejects_garbage() {
        assert!(!is_css_color("#ggg"));
        assert!(!is_css_color("#12345"));
        assert!(!is_css_color("red;"));
        assert!(!is_css_color("rgb(0,0,0)}"));
        assert!(!is_css_color("\"red\""));
    }

    #[test]
    fn merge_prefers_other() {
        let global = Theme {
            faded_text_60: Some("gray".to_string()),
            primary: Some("red".to_string()),
        };
        let project = Theme {
            faded_text_60: None,
            primary: Some("blue".to_string()),
        };
        let merged = global.merge(project);
        assert_eq!(merged.faded_text_60.as_deref(), Some("gray"));
        assert_eq!(merged.primary.as_deref(), Some("blue"));
    }
}
