//! Terminal icon helpers.
//!
//! Maps the icon-font ligature names used in the HTML output to nerdfont
//! codepoints, or to plain Unicode fallbacks for terminals without a
//! nerdfont installed.

use std::sync::OnceLock;

/// Cached nerdfont setting to avoid repeated config lookups.
static NERDFONT_ENABLED: OnceLock<bool> = OnceLock::new();

const NERDFONT_ICONS: &[(&str, &str)] = &[
    ("sync", "\u{f04e6}"),             // nf-md-sync
    ("settings", "\u{f0493}"),         // nf-md-cog
    ("hourglass_top", "\u{f251}"),     // nf-fa-hourglass_start
    ("hourglass_bottom", "\u{f253}"),  // nf-fa-hourglass_end
];

const FALLBACK_ICONS: &[(&str, &str)] = &[
    ("sync", "↻"),
    ("settings", "⚙"),
    ("hourglass_top", "⏳"),
    ("hourglass_bottom", "⌛"),
];

/// Initialize the nerdfont setting from config.
/// Should be called early in the CLI flow.
pub fn init(config_nerdfont: Option<bool>) {
    let _ = NERDFONT_ENABLED.set(config_nerdfont.unwrap_or(false));
}

/// Check if nerdfonts are enabled.
pub fn is_enabled() -> bool {
    *NERDFONT_ENABLED.get().unwrap_or(&false)
}

/// Terminal glyph for an icon ligature name, honoring the nerdfont setting.
pub fn terminal_icon(name: &str) -> Option<&'static str> {
    lookup(name, is_enabled())
}

fn lookup(name: &str, nerdfont: bool) -> Option<&'static str> {
    let table = if nerdfont {
        NERDFONT_ICONS
    } else {
        FALLBACK_ICONS
    };
    table.iter().find(|(n, _)| *n == name).map(|(_, icon)| *icon)
}
