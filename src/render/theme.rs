//! Visual constants for the disclosure panel.

use serde::{Deserialize, Serialize};

/// RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with its alpha scaled by `factor`.
    pub fn faded(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }
}

/// Panel look: colors, padding, gap, font size.
///
/// Hosts may deserialize one to restyle the panel; [`Default`] is the
/// stock look. The 300 ms reveal transition is fixed and deliberately not
/// part of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub padding: f32,
    pub border_width: f32,
    pub font_size: f32,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            background: Color::new(0.08, 0.08, 0.1, 0.95),
            border: Color::rgb(0.35, 0.35, 0.4),
            text: Color::rgb(0.92, 0.92, 0.92),
            padding: 8.0,
            border_width: 1.0,
            font_size: 12.0,
        }
    }
}
