//! Animated "operation in progress" glyphs for status widgets.
//!
//! Build a [`RunningIndicator`] from a [`Skin`] and a [`Theme`], render it to
//! scoped HTML and CSS, and mount it while work is in progress. Stepped
//! skins own a repeating timer that is cancelled on unmount.

pub mod cli;
pub mod command;
pub mod config;
pub mod css;
pub mod icons;
pub mod indicator;
pub mod logger;
pub mod skin;
pub mod theme;
pub mod timer;

pub use indicator::{IndicatorError, MountedIndicator, RunningIndicator};
pub use skin::{Glyph, Rendered, Skin};
pub use theme::{Theme, ThemeColor};
