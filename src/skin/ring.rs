use std::time::Duration;

use maud::html;

use super::{Glyph, Rendered, Skin, TerminalFrames};
use crate::css::{Keyframes, StyleSheet, decl};
use crate::theme::ThemeColor;

const RING_FRAMES: &[&str] = &["◜", "◝", "◞", "◟"];

/// Partially stroked SVG circle rotating continuously.
pub struct Ring;

impl Glyph for Ring {
    fn skin(&self) -> Skin {
        Skin::Ring
    }

    fn mechanism(&self) -> &'static str {
        "SVG stroke-dash rotation"
    }

    fn timing(&self) -> &'static str {
        "1.4s linear, infinite"
    }

    fn terminal_frames(&self) -> TerminalFrames {
        TerminalFrames {
            frames: RING_FRAMES,
            interval: Duration::from_millis(350),
        }
    }

    fn render(&self, color: &ThemeColor, _phase: usize) -> Rendered {
        let style = StyleSheet::new()
            .root(vec![
                decl("width", "14px"),
                decl("height", "14px"),
                decl(
                    "animation",
                    format!(
                        "{} 1.4s linear infinite",
                        StyleSheet::animation_ref("rotate")
                    ),
                ),
            ])
            .part(
                "circle",
                vec![
                    decl("fill", "none"),
                    decl("stroke", color.as_str()),
                    decl("stroke-width", "2"),
                    decl("stroke-dasharray", "28"),
                    decl("stroke-dashoffset", "20"),
                    decl("stroke-linecap", "round"),
                ],
            )
            .keyframes(Keyframes {
                name: "rotate",
                stops: vec![("100%", vec![decl("transform", "rotate(360deg)")])],
            })
            .seal();

        let markup = html! {
            svg class=(style.class) role="status" aria-label="Running" data-skin=(Skin::Ring.as_str()) viewBox="0 0 14 14" {
                circle class=(style.part_class("circle")) cx="7" cy="7" r="5" {}
            }
        };
        Rendered { markup, style }
    }
}
