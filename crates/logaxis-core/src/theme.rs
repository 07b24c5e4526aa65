// File: crates/logaxis-core/src/theme.rs
// Summary: Renderer palette and CSS color parsing for configuration color strings.

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub subtitle: skia::Color,
    pub data_label: skia::Color,
    pub marker_outline: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 230),
            axis_line: skia::Color::from_argb(255, 204, 214, 235),
            axis_label: skia::Color::from_argb(255, 102, 102, 102),
            title: skia::Color::from_argb(255, 51, 51, 51),
            subtitle: skia::Color::from_argb(255, 102, 102, 102),
            data_label: skia::Color::from_argb(255, 0, 0, 0),
            marker_outline: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            subtitle: skia::Color::from_argb(255, 180, 180, 190),
            data_label: skia::Color::from_argb(255, 235, 235, 245),
            marker_outline: skia::Color::from_argb(255, 18, 18, 20),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

// CSS named colors that appear in chart configurations.
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("orange", (255, 165, 0)),
    ("brown", (165, 42, 42)),
    ("violet", (238, 130, 238)),
    ("goldenrod", (218, 165, 32)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("purple", (128, 0, 128)),
    ("yellow", (255, 255, 0)),
];

/// Parse `#rgb`, `#rrggbb`, or a CSS color name (case-insensitive).
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ChartError::InvalidColor(s.to_string()));
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(t))
        .map(|&(_, (r, g, b))| skia::Color::from_argb(255, r, g, b))
        .ok_or_else(|| ChartError::InvalidColor(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).ok();
    match hex.len() {
        3 => {
            let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
            Some(skia::Color::from_argb(255, r * 17, g * 17, b * 17))
        }
        6 => Some(skia::Color::from_argb(255, channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_light_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("neon").name, "light");
    }

    #[test]
    fn configuration_colors_all_parse() {
        for c in ["red", "violet", "goldenrod", "black", "orange", "brown", "#f7a35c", "#7cb5ec", "#90ed7d"] {
            assert!(parse_color(c).is_ok(), "{c}");
        }
    }
}
