//! Palette tokens consumed by the overlay.
//!
//! The overlay never computes colors of its own: everything it draws is
//! taken from a [`Theme`] supplied by the host, either field-by-field or
//! loaded from a JSON palette file of hex color strings.

use egui::Color32;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Style tokens for the dialog chrome and category badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Gradient start for `success` badges.
    pub success: Color32,
    /// Gradient start for `error` badges.
    pub danger: Color32,
    /// Gradient start for `warning` badges and the confirm chrome.
    pub warning: Color32,
    /// Gradient start for `info` badges.
    pub info: Color32,
    /// Message body text.
    pub gray_600: Color32,

    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub fg_primary: Color32,
    pub border: Color32,
    /// Primary action buttons (OK, Confirmar).
    pub accent: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        // Dark palette, zinc/tailwind tones
        Self {
            success: Color32::from_rgb(34, 197, 94),    // green-500
            danger: Color32::from_rgb(239, 68, 68),     // red-500
            warning: Color32::from_rgb(245, 158, 11),   // amber-500
            info: Color32::from_rgb(59, 130, 246),      // blue-500
            gray_600: Color32::from_rgb(161, 161, 170), // zinc-400

            bg_primary: Color32::from_rgb(24, 24, 27),   // zinc-900
            bg_secondary: Color32::from_rgb(39, 39, 42), // zinc-800
            fg_primary: Color32::from_rgb(250, 250, 250), // zinc-50
            border: Color32::from_rgb(63, 63, 70),       // zinc-700
            accent: Color32::from_rgb(59, 130, 246),     // blue-500
        }
    }
}

/// Errors produced while loading a palette file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse palette file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color {0:?}")]
    Color(String),
}

/// On-disk palette. Every field is optional; missing entries keep the
/// default value.
#[derive(Debug, Default, Deserialize)]
struct PaletteFile {
    success: Option<String>,
    danger: Option<String>,
    warning: Option<String>,
    info: Option<String>,
    gray_600: Option<String>,
    bg_primary: Option<String>,
    bg_secondary: Option<String>,
    fg_primary: Option<String>,
    border: Option<String>,
    accent: Option<String>,
}

impl Theme {
    /// Load a palette from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a palette from JSON content, overriding defaults field by field.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let palette: PaletteFile = serde_json::from_str(json)?;
        let mut theme = Self::default();
        apply(&mut theme.success, palette.success)?;
        apply(&mut theme.danger, palette.danger)?;
        apply(&mut theme.warning, palette.warning)?;
        apply(&mut theme.info, palette.info)?;
        apply(&mut theme.gray_600, palette.gray_600)?;
        apply(&mut theme.bg_primary, palette.bg_primary)?;
        apply(&mut theme.bg_secondary, palette.bg_secondary)?;
        apply(&mut theme.fg_primary, palette.fg_primary)?;
        apply(&mut theme.border, palette.border)?;
        apply(&mut theme.accent, palette.accent)?;
        Ok(theme)
    }
}

fn apply(slot: &mut Color32, value: Option<String>) -> Result<(), ThemeError> {
    if let Some(s) = value {
        *slot = parse_color(&s).ok_or(ThemeError::Color(s))?;
    }
    Ok(())
}

/// Parse "#rrggbb" or "#rrggbbaa".
fn parse_color(color_str: &str) -> Option<Color32> {
    let hex = color_str.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color32::from_rgb(r, g, b))
    } else if hex.len() == 8 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    } else {
        None
    }
}
