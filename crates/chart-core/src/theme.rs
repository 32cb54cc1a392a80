// File: crates/chart-core/src/theme.rs
// Summary: Chart colors: hex RGBA parsing, default palette, presets and per-field overrides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 8-bit straight-alpha color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse CSS hex notation: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            3 => (digit(0), digit(1), digit(2), Ok(255)),
            4 => (digit(0), digit(1), digit(2), digit(3)),
            6 => (pair(0), pair(2), pair(4), Ok(255)),
            8 => (pair(0), pair(2), pair(4), pair(6)),
            _ => return Err(bad()),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self { r, g, b, a }),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::str::FromStr for Rgba {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::parse(&s) }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self { c.to_string() }
}

/// The four colors a chart paints with besides its bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub title: Rgba,
    pub label: Rgba,
    pub axis: Rgba,
}

impl Theme {
    /// Default palette: white background, black title, grey labels, translucent black axes.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xff, 0xff, 0xff),
            title: Rgba::rgb(0x00, 0x00, 0x00),
            label: Rgba::rgb(0x5c, 0x5c, 0x5c),
            axis: Rgba::new(0x00, 0x00, 0x00, 0x50),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            title: Rgba::rgb(235, 235, 245),
            label: Rgba::rgb(150, 150, 160),
            axis: Rgba::new(0xff, 0xff, 0xff, 0x40),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            title: Rgba::rgb(0x00, 0x2b, 0x36),      // base03
            label: Rgba::rgb(0x58, 0x6e, 0x75),      // base01
            axis: Rgba::new(0x65, 0x7b, 0x83, 0x60), // base00
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            title: Rgba::rgb(0xee, 0xe8, 0xd5),      // base2
            label: Rgba::rgb(0x83, 0x94, 0x96),      // base0
            axis: Rgba::new(0x93, 0xa1, 0xa1, 0x50), // base1
        }
    }

    /// Copy of this theme with every `Some` field of `overrides` applied.
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> Self {
        if let Some(c) = overrides.background { self.background = c; }
        if let Some(c) = overrides.title { self.title = c; }
        if let Some(c) = overrides.label { self.label = c; }
        if let Some(c) = overrides.axis { self.axis = c; }
        self
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Per-field color overrides; unset fields keep the base theme's color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub background: Option<Rgba>,
    pub title: Option<Rgba>,
    pub label: Option<Rgba>,
    pub axis: Option<Rgba>,
}

impl From<Theme> for ColorOverrides {
    fn from(t: Theme) -> Self {
        Self {
            background: Some(t.background),
            title: Some(t.title),
            label: Some(t.label),
            axis: Some(t.axis),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Rgba::parse("#f00").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::parse("#0f08").unwrap(), Rgba::new(0, 255, 0, 0x88));
        assert_eq!(Rgba::parse("#5c5c5c").unwrap(), Rgba::rgb(0x5c, 0x5c, 0x5c));
        assert_eq!(Rgba::parse("#00000050").unwrap(), Rgba::new(0, 0, 0, 0x50));
    }

    #[test]
    fn rejects_malformed_colors() {
        for s in ["", "red", "#", "#12", "#12345", "#gggggg", "00ff00"] {
            assert!(Rgba::parse(s).is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn display_round_trips() {
        for s in ["#5c5c5c", "#00000050"] {
            assert_eq!(Rgba::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn overrides_apply_per_field() {
        let o = ColorOverrides { title: Some(Rgba::rgb(1, 2, 3)), ..Default::default() };
        let t = Theme::light().with_overrides(&o);
        assert_eq!(t.title, Rgba::rgb(1, 2, 3));
        assert_eq!(t.background, Theme::light().background);
        assert_eq!(t.axis, Theme::light().axis);
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }

    #[test]
    fn preset_as_overrides_replaces_every_color() {
        let dark = Theme::dark();
        let t = Theme::light().with_overrides(&ColorOverrides::from(dark));
        assert_eq!((t.background, t.title, t.label, t.axis), (dark.background, dark.title, dark.label, dark.axis));
    }
}
