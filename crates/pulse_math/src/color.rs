//! RGB color value type with CSS-string serialization

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color with optional alpha.
///
/// Channels are `0..=255`; alpha, when present, is a fraction in
/// `[0.0, 1.0]`. `Display` renders the CSS text form (`rgb(r,g,b)` or
/// `rgba(r,g,b,a)`) that downstream consumers expect verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<f32>,
}

impl Color {
    /// Opaque color without an alpha channel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Color with an explicit alpha fraction.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// CSS text form, same as `Display`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({},{},{})", self.r, self.g, self.b),
        }
    }
}
