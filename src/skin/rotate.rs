//! Rotating icon glyphs: the spinning sync icon and the slower gear.

use std::time::Duration;

use maud::html;

use super::{Glyph, ICON_FONT_FAMILY, Rendered, Skin, TerminalFrames, status_span};
use crate::css::{Keyframes, StyleSheet, decl};
use crate::theme::ThemeColor;

const SPIN_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const GEAR_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Render an icon ligature rotating once per `period`.
fn render_rotating(skin: Skin, icon: &str, period: &str, color: &ThemeColor) -> Rendered {
    let style = StyleSheet::new()
        .root(vec![
            decl("font-family", ICON_FONT_FAMILY),
            decl("font-size", "16px"),
            decl("color", color.as_str()),
            decl(
                "animation",
                format!(
                    "{} {} linear infinite",
                    StyleSheet::animation_ref("rotate"),
                    period
                ),
            ),
            decl("display", "inline-block"),
        ])
        .keyframes(Keyframes {
            name: "rotate",
            stops: vec![
                ("from", vec![decl("transform", "rotate(0deg)")]),
                ("to", vec![decl("transform", "rotate(360deg)")]),
            ],
        })
        .seal();

    let markup = status_span(&style, skin, html! { (icon) });
    Rendered { markup, style }
}

/// Sync icon, one turn per second.
pub struct Spin;

impl Glyph for Spin {
    fn skin(&self) -> Skin {
        Skin::Spin
    }

    fn mechanism(&self) -> &'static str {
        "rotate 0→360°"
    }

    fn timing(&self) -> &'static str {
        "1s linear, infinite"
    }

    fn icon_names(&self) -> &'static [&'static str] {
        &["sync"]
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: SPIN_FRAMES,
            interval: Duration::from_millis(100),
        }
    }

    fn render(&self, color: &ThemeColor, _phase: usize) -> Rendered {
        render_rotating(Skin::Spin, "sync", "1s", color)
    }
}

/// Settings gear, one turn every two seconds.
pub struct Gear;

impl Glyph for Gear {
    fn skin(&self) -> Skin {
        Skin::Gear
    }

    fn mechanism(&self) -> &'static str {
        "rotate 0→360°"
    }

    fn timing(&self) -> &'static str {
        "2s linear, infinite"
    }

    fn icon_names(&self) -> &'static [&'static str] {
        &["settings"]
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: GEAR_FRAMES,
            interval: Duration::from_millis(500),
        }
    }

    fn render(&self, color: &ThemeColor, _phase: usize) -> Rendered {
        render_rotating(Skin::Gear, "settings", "2s", color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorRole, Theme};

    #[test]
    fn spin_renders_sync_icon_at_one_second() {
        let color = Theme::default().resolve(ColorRole::FadedText);
        let rendered = Spin.render(&color, 0);
        assert!(rendered.markup_html().ends_with(">sync</span>"));
        assert!(rendered.style.css.contains(&format!(
            "animation: {}-rotate 1s linear infinite;",
            rendered.class()
        )));
        assert!(rendered.style.css.contains("to { transform: rotate(360deg); }"));
        assert!(rendered.style.css.contains("font-size: 16px;"));
    }

    #[test]
    fn gear_renders_settings_icon_at_two_seconds() {
        let color = Theme::default().resolve(ColorRole::FadedText);
        let rendered = Gear.render(&color, 0);
        assert!(rendered.markup_html().ends_with(">settings</span>"));
        assert!(rendered.style.css.contains("2s linear infinite;"));
    }
}
