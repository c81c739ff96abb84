use std::time::Duration;

use maud::html;

use super::{Glyph, Rendered, Skin, TerminalFrames, status_span};
use crate::css::{Keyframes, StyleSheet, decl};
use crate::theme::ThemeColor;

/// Start offsets of the four bars, in seconds.
const BAR_DELAYS: [&str; 4] = ["0s", "0.15s", "0.3s", "0.45s"];

const BARS_FRAMES: &[&str] = &[
    "▁▁▁▁", "▃▁▁▁", "▆▃▁▁", "█▆▃▁", "▆█▆▃", "▃▆█▆", "▁▃▆█", "▁▁▃▆", "▁▁▁▃",
];

/// Four bars rising and falling in sequence, like a tiny bar chart.
pub struct Bars;

impl Glyph for Bars {
    fn skin(&self) -> Skin {
        Skin::Bars
    }

    fn mechanism(&self) -> &'static str {
        "staggered height oscillation"
    }

    fn timing(&self) -> &'static str {
        "1s each, offsets 0/0.15/0.3/0.45s"
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: BARS_FRAMES,
            interval: Duration::from_millis(110),
        }
    }

    fn render(&self, color: &ThemeColor, _phase: usize) -> Rendered {
        let mut sheet = StyleSheet::new()
            .root(vec![
                decl("display", "inline-flex"),
                decl("gap", "2px"),
                decl("align-items", "flex-end"),
                decl("height", "14px"),
            ])
            .part(
                "bar",
                vec![
                    decl("width", "3px"),
                    decl("background-color", color.as_str()),
                    decl("border-radius", "1px"),
                    decl(
                        "animation",
                        format!(
                            "{} 1s ease-in-out infinite",
                            StyleSheet::animation_ref("bar-pulse")
                        ),
                    ),
                ],
            );
        for (i, delay) in BAR_DELAYS.iter().enumerate() {
            sheet = sheet.part_modifier(
                "bar",
                i.to_string(),
                vec![decl("animation-delay", *delay)],
            );
        }
        let style = sheet
            .keyframes(Keyframes {
                name: "bar-pulse",
                stops: vec![
                    ("0%, 100%", vec![decl("height", "4px")]),
                    ("50%", vec![decl("height", "14px")]),
                ],
            })
            .seal();

        let bars = html! {
            @for i in 0..BAR_DELAYS.len() {
                span class={ (style.part_class("bar")) " " (style.modifier_class("bar", &i.to_string())) } {}
            }
        };
        let markup = status_span(&style, Skin::Bars, bars);
        Rendered { markup, style }
    }
}
