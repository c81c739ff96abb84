//! Hourglass glyph, the one skin animated by a timer rather than CSS.

use std::time::Duration;

use maud::html;

use super::{
    Glyph, ICON_FONT_FAMILY, Rendered, Skin, StepSchedule, TerminalFrames, status_span,
};
use crate::css::{StyleSheet, decl};
use crate::theme::ThemeColor;

/// Icon ligatures cycled by the hourglass, in order.
pub const HOURGLASS_GLYPHS: [&str; 2] = ["hourglass_top", "hourglass_bottom"];

/// Time between glyph swaps.
pub const HOURGLASS_INTERVAL: Duration = Duration::from_millis(600);

/// Unicode stand-ins for the two hourglass states
const HOURGLASS_FRAMES: &[&str] = &["⏳", "⌛"];

pub struct Hourglass;

impl Glyph for Hourglass {
    fn skin(&self) -> Skin {
        Skin::Hourglass
    }

    fn mechanism(&self) -> &'static str {
        "discrete glyph swap via timer"
    }

    fn timing(&self) -> &'static str {
        "600ms interval, 2-entry cycle"
    }

    fn schedule(&self) -> Option<StepSchedule> {
        Some(StepSchedule {
            interval: HOURGLASS_INTERVAL,
            len: HOURGLASS_GLYPHS.len(),
        })
    }

    fn icon_names(&self) -> &'static [&'static str] {
        &HOURGLASS_GLYPHS
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: HOURGLASS_FRAMES,
            interval: HOURGLASS_INTERVAL,
        }
    }

    /// Out-of-range phases wrap, so the index can never escape the cycle.
    fn render(&self, color: &ThemeColor, phase: usize) -> Rendered {
        let style = StyleSheet::new()
            .root(vec![
                decl("font-family", ICON_FONT_FAMILY),
                decl("font-size", "16px"),
                decl("color", color.as_str()),
                decl("display", "inline-block"),
            ])
            .seal();

        let glyph = HOURGLASS_GLYPHS[phase % HOURGLASS_GLYPHS.len()];
        let markup = status_span(&style, Skin::Hourglass, html! { (glyph) });
        Rendered { markup, style }
    }
}
