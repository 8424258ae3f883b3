//! Color Constants for the Keep-Style Notes Theme
//!
//! Light surface colors with warm gray chrome, matching the classic Keep
//! look. Note backgrounds themselves come from the per-note CSS color token
//! via [`parse_css_color`].

use eframe::egui::Color32;

/// Main canvas background - Off-white
pub const CANVAS_BG: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);

/// Top bar background - White
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Light gray
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Card border while pending confirmation - Muted blue
pub const CARD_BORDER_PENDING: Color32 = Color32::from_rgb(0x90, 0xCA, 0xF9);

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x20, 0x21, 0x24);

/// Secondary text (timestamps, placeholders)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x5F, 0x63, 0x68);

/// Icon tint
pub const ICONS: Color32 = Color32::from_rgb(0x5F, 0x63, 0x68);

/// Accent for interactive highlights - Keep yellow
pub const ACCENT: Color32 = Color32::from_rgb(0xFB, 0xBC, 0x04);

/// Form background - White
pub const FORM_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Selected swatch ring
pub const SWATCH_RING: Color32 = Color32::from_rgb(0x20, 0x21, 0x24);

/// Live connection indicator - Green
pub const STATUS_LIVE: Color32 = Color32::from_rgb(0x34, 0xA8, 0x53);

/// Reconnecting indicator - Orange
pub const STATUS_RETRYING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Offline/error indicator - Red
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0xEA, 0x43, 0x35);

/// Error text color
pub const ERROR: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);

/// Parse a CSS color token as used in note payloads.
///
/// Supports `#rrggbb` and `rgba(r, g, b, a)` (a in 0.0..=1.0). Anything else
/// yields `None`; callers fall back to a plain card background.
pub fn parse_css_color(token: &str) -> Option<Color32> {
    let token = token.trim();

    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color32::from_rgb(r, g, b));
    }

    if let Some(inner) = token
        .strip_prefix("rgba(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let r: u8 = parts[0].parse().ok()?;
        let g: u8 = parts[1].parse().ok()?;
        let b: u8 = parts[2].parse().ok()?;
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        return Some(Color32::from_rgba_unmultiplied(
            r,
            g,
            b,
            (a * 255.0).round() as u8,
        ));
    }

    None
}

/// Background color for a note card, falling back to the form background
pub fn note_background(token: &str) -> Color32 {
    parse_css_color(token).unwrap_or(FORM_BG)
}
