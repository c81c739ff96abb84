//! Skins: interchangeable renderings of the running indicator.
//!
//! Every skin implements [`Glyph`]. The [`Skin`] enum is the configuration
//! surface; it is turned into a boxed glyph once, when the indicator is
//! built, and never consulted again while rendering.

mod bars;
mod dots;
mod hourglass;
mod pulse;
mod ring;
mod rotate;

use clap::ValueEnum;
use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::css::ScopedStyle;
use crate::theme::{ColorRole, ThemeColor};

pub use bars::Bars;
pub use dots::ThreeDots;
pub use hourglass::{HOURGLASS_GLYPHS, HOURGLASS_INTERVAL, Hourglass};
pub use pulse::Pulse;
pub use ring::Ring;
pub use rotate::{Gear, Spin};

/// Font family of the icon ligature glyphs.
pub const ICON_FONT_FAMILY: &str = "\"Material Symbols Rounded\"";

/// Available indicator skins
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Skin {
    /// Spinning sync icon
    Spin,
    /// Pulsing dot in the accent color
    Pulse,
    /// Three bouncing dots
    Dots,
    /// Four animated bars
    Bars,
    /// Slowly rotating gear
    Gear,
    /// Hourglass flipping on a timer
    Hourglass,
    /// Rotating SVG progress ring
    Ring,
}

impl Skin {
    pub const ALL: [Skin; 7] = [
        Skin::Spin,
        Skin::Pulse,
        Skin::Dots,
        Skin::Bars,
        Skin::Gear,
        Skin::Hourglass,
        Skin::Ring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Spin => "spin",
            Skin::Pulse => "pulse",
            Skin::Dots => "dots",
            Skin::Bars => "bars",
            Skin::Gear => "gear",
            Skin::Hourglass => "hourglass",
            Skin::Ring => "ring",
        }
    }

    /// Build the glyph implementation for this skin.
    pub fn glyph(self) -> Box<dyn Glyph> {
        match self {
            Skin::Spin => Box::new(Spin),
            Skin::Pulse => Box::new(Pulse),
            Skin::Dots => Box::new(ThreeDots),
            Skin::Bars => Box::new(Bars),
            Skin::Gear => Box::new(Gear),
            Skin::Hourglass => Box::new(Hourglass),
            Skin::Ring => Box::new(Ring),
        }
    }

    /// Comma-separated list of skin names, for error messages.
    pub fn names() -> String {
        Skin::ALL
            .iter()
            .map(Skin::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete glyph stepping driven by a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSchedule {
    /// Time between steps
    pub interval: Duration,
    /// Number of distinct phases in the cycle
    pub len: usize,
}

impl StepSchedule {
    /// Phase after `ticks` steps from phase 0.
    pub fn phase_after(&self, ticks: u64) -> usize {
        (ticks % self.len as u64) as usize
    }

    /// Phase following `phase`.
    pub fn next(&self, phase: usize) -> usize {
        (phase + 1) % self.len
    }
}

/// Frames used to approximate a skin in a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalFrames {
    pub frames: &'static [&'static str],
    pub interval: Duration,
}

/// Result of rendering a glyph: markup plus the stylesheet it is scoped to.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub markup: Markup,
    pub style: ScopedStyle,
}

impl PartialEq for Rendered {
    fn eq(&self, other: &Self) -> bool {
        self.markup.0 == other.markup.0 && self.style == other.style
    }
}

impl Eq for Rendered {}

impl Rendered {
    /// Root class shared by the markup and stylesheet.
    pub fn class(&self) -> &str {
        &self.style.class
    }

    /// The glyph markup alone, without its stylesheet.
    pub fn markup_html(&self) -> &str {
        &self.markup.0
    }

    /// HTML fragment: a `<style>` element followed by the markup.
    pub fn to_html(&self) -> String {
        html! {
            style { "\n" (PreEscaped(&self.style.css)) }
            "\n"
            (self.markup)
        }
        .into_string()
    }
}

/// Renders an animated "operation in progress" glyph.
///
/// Rendering is pure: the output depends only on the color and, for
/// stepped glyphs, the phase.
pub trait Glyph: Send + Sync {
    fn skin(&self) -> Skin;

    /// Theme token this glyph is colored with.
    fn color_role(&self) -> ColorRole {
        ColorRole::FadedText
    }

    /// Short description of the animation mechanism.
    fn mechanism(&self) -> &'static str;

    /// Human-readable timing, e.g. "1s linear, infinite".
    fn timing(&self) -> &'static str;

    /// Timer-driven stepping, for glyphs whose animation is not pure CSS.
    fn schedule(&self) -> Option<StepSchedule> {
        None
    }

    /// Icon ligature names, for glyphs drawn from the icon font.
    /// Stepped glyphs return one name per phase.
    fn icon_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn terminal_frames(&self) -> TerminalFrames;

    fn render(&self, color: &ThemeColor, phase: usize) -> Rendered;
}

/// Wrap content in the root `span` shared by the HTML skins.
pub(crate) fn status_span(style: &ScopedStyle, skin: Skin, content: Markup) -> Markup {
    html! {
        span class=(style.class) role="status" aria-label="Running" data-skin=(skin.as_str()) {
            (content)
        }
    }
}
