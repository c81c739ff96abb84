use std::time::Duration;

use maud::html;

use super::{Glyph, Rendered, Skin, TerminalFrames, status_span};
use crate::css::{Keyframes, StyleSheet, decl};
use crate::theme::ThemeColor;

/// Start offsets of the three dots, in seconds.
const DOT_DELAYS: [&str; 3] = ["0s", "0.16s", "0.32s"];

const DOTS_FRAMES: &[&str] = &["∙∙∙", "●∙∙", "∙●∙", "∙∙●", "∙∙∙"];

/// Three dots bouncing one after another.
pub struct ThreeDots;

impl Glyph for ThreeDots {
    fn skin(&self) -> Skin {
        Skin::Dots
    }

    fn mechanism(&self) -> &'static str {
        "staggered vertical bounce"
    }

    fn timing(&self) -> &'static str {
        "1.4s each, offsets 0/0.16/0.32s"
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: DOTS_FRAMES,
            interval: Duration::from_millis(280),
        }
    }

    fn render(&self, color: &ThemeColor, _phase: usize) -> Rendered {
        let mut sheet = StyleSheet::new()
            .root(vec![
                decl("display", "inline-flex"),
                decl("gap", "3px"),
                decl("align-items", "center"),
            ])
            .part(
                "dot",
                vec![
                    decl("width", "4px"),
                    decl("height", "4px"),
                    decl("border-radius", "50%"),
                    decl("background-color", color.as_str()),
                    decl(
                        "animation",
                        format!(
                            "{} 1.4s ease-in-out infinite",
                            StyleSheet::animation_ref("bounce")
                        ),
                    ),
                ],
            );
        for (i, delay) in DOT_DELAYS.iter().enumerate() {
            sheet = sheet.part_modifier(
                "dot",
                i.to_string(),
                vec![decl("animation-delay", *delay)],
            );
        }
        let style = sheet
            .keyframes(Keyframes {
                name: "bounce",
                stops: vec![
                    (
                        "0%, 80%, 100%",
                        vec![decl("transform", "translateY(0)"), decl("opacity", "0.4")],
                    ),
                    (
                        "40%",
                        vec![decl("transform", "translateY(-4px)"), decl("opacity", "1")],
                    ),
                ],
            })
            .seal();

        let dots = html! {
            @for i in 0..DOT_DELAYS.len() {
                span class={ (style.part_class("dot")) " " (style.modifier_class("dot", &i.to_string())) } {}
            }
        };
        let markup = status_span(&style, Skin::Dots, dots);
        Rendered { markup, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorRole, Theme};

    #[test]
    fn dots_render_three_staggered_children() {
        let color = Theme::default().resolve(ColorRole::FadedText);
        let rendered = ThreeDots.render(&color, 0);
        let dot_class = format!("{} ", rendered.style.part_class("dot"));
        assert_eq!(rendered.markup_html().matches(&dot_class).count(), 3);
        for delay in ["0s", "0.16s", "0.32s"] {
            assert!(
                rendered
                    .style
                    .css
                    .contains(&format!("animation-delay: {};", delay))
            );
        }
        assert!(
            rendered
                .markup_html()
                .contains(&rendered.style.modifier_class("dot", "2"))
        );
    }
}
