//! Campfire color palette used for the MOTD banner

use std::fmt;

/// A named color a user can pick for the MOTD banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampfireColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// The signature Campfire colors, in display order
pub const CAMPFIRE_COLORS: &[CampfireColor] = &[
    CampfireColor { name: "Cello", hex: "#607a97" },
    CampfireColor { name: "Terracotta", hex: "#b87b6a" },
    CampfireColor { name: "Black Rock", hex: "#747b8a" },
    CampfireColor { name: "Sage", hex: "#8fb14b" },
    CampfireColor { name: "Golden Amber", hex: "#f9c574" },
    CampfireColor { name: "Flamingo", hex: "#e75351" },
    CampfireColor { name: "Blue Calx", hex: "#b8c5d9" },
];

pub const DEFAULT_CAMPFIRE_COLOR: &str = "Cello";

/// UI chrome colors (CLI output, not the MOTD)
pub const UI_ERROR_COLOR: Rgb = Rgb(0xbf, 0x61, 0x6a);
pub const UI_SUCCESS_COLOR: Rgb = Rgb(0xa3, 0xbe, 0x8c);
pub const UI_INFO_COLOR: Rgb = Rgb(0x88, 0xc0, 0xd0);
pub const UI_WARNING_COLOR: Rgb = Rgb(0xeb, 0xcb, 0x8b);

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Look up a Campfire color by name, ignoring case
pub fn find_color(name: &str) -> Option<&'static CampfireColor> {
    let name = name.trim();
    CAMPFIRE_COLORS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// The default banner color
pub fn default_color() -> &'static CampfireColor {
    find_color(DEFAULT_CAMPFIRE_COLOR).unwrap_or(&CAMPFIRE_COLORS[0])
}

/// Resolve user input (a palette name or `#rrggbb`) to a normalized hex string
pub fn resolve_color(input: &str) -> Option<String> {
    if let Some(color) = find_color(input) {
        return Some(color.hex.to_string());
    }
    Rgb::from_hex(input.trim()).map(|rgb| rgb.to_string())
}

/// Names of every palette color, comma separated
pub fn color_names() -> String {
    CAMPFIRE_COLORS
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_hex_parses() {
        for color in CAMPFIRE_COLORS {
            assert!(Rgb::from_hex(color.hex).is_some(), "{} did not parse", color.name);
        }
    }

    #[test]
    fn test_default_color_is_cello() {
        assert_eq!(default_color().hex, "#607a97");
    }

    #[test]
    fn test_resolve_color_by_name() {
        assert_eq!(resolve_color("Sage").as_deref(), Some("#8fb14b"));
        assert_eq!(resolve_color("golden amber").as_deref(), Some("#f9c574"));
    }

    #[test]
    fn test_resolve_color_hex_is_normalized() {
        assert_eq!(resolve_color("#ABCDEF").as_deref(), Some("#abcdef"));
    }

    #[test]
    fn test_resolve_color_rejects_garbage() {
        assert!(resolve_color("mauve").is_none());
        assert!(resolve_color("#12345").is_none());
        assert!(resolve_color("#12345g").is_none());
        assert!(resolve_color("607a97").is_none());
    }

    #[test]
    fn test_rgb_round_trip_display() {
        assert_eq!(Rgb::from_hex("#e75351"), Some(Rgb(0xe7, 0x53, 0x51)));
        assert_eq!(Rgb(0xe7, 0x53, 0x51).to_string(), "#e75351");
    }
}
