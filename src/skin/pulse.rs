use std::time::Duration;

use maud::html;

use super::{Glyph, Rendered, Skin, TerminalFrames, status_span};
use crate::css::{Keyframes, StyleSheet, decl};
use crate::theme::{ColorRole, ThemeColor};

const PULSE_FRAMES: &[&str] = &["·", "•", "●", "•"];

/// Single dot breathing in opacity and scale, in the accent color.
pub struct Pulse;

impl Glyph for Pulse {
    fn skin(&self) -> Skin {
        Skin::Pulse
    }

    fn color_role(&self) -> ColorRole {
        ColorRole::Primary
    }

    fn mechanism(&self) -> &'static str {
        "opacity/scale oscillation"
    }

    fn timing(&self) -> &'static str {
        "1.2s ease-in-out, infinite"
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: PULSE_FRAMES,
            interval: Duration::from_millis(300),
        }
    }

    fn render(&self, color: &ThemeColor, _phase: usize) -> Rendered {
        let style = StyleSheet::new()
            .root(vec![
                decl("width", "8px"),
                decl("height", "8px"),
                decl("border-radius", "50%"),
                decl("background-color", color.as_str()),
                decl("display", "inline-block"),
                decl(
                    "animation",
                    format!(
                        "{} 1.2s ease-in-out infinite",
                        StyleSheet::animation_ref("pulse")
                    ),
                ),
            ])
            .keyframes(Keyframes {
                name: "pulse",
                stops: vec![
                    (
                        "0%, 100%",
                        vec![decl("opacity", "0.4"), decl("transform", "scale(0.8)")],
                    ),
                    (
                        "50%",
                        vec![decl("opacity", "1"), decl("transform", "scale(1)")],
                    ),
                ],
            })
            .seal();

        let markup = status_span(&style, Skin::Pulse, html! {});
        Rendered { markup, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FALLBACK_PRIMARY, Theme};

    #[test]
    fn pulse_uses_primary_fallback_when_theme_empty() {
        let color = Theme::default().resolve(Pulse.color_role());
        let rendered = Pulse.render(&color, 0);
        assert!(
            rendered
                .style
                .css
                .contains(&format!("background-color: {};", FALLBACK_PRIMARY))
        );
        assert!(
            rendered
                .style
                .css
                .contains("0%, 100% { opacity: 0.4; transform: scale(0.8); }")
        );
        assert!(rendered.markup_html().ends_with(r#"data-skin="pulse"></span>"#));
    }
}
