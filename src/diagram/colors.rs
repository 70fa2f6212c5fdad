//! Display colors for band swatches and the resistor body

use std::fmt;

use crate::decoder::Color;

/// Simple RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

pub const COLOR_BODY: Rgb = Rgb::new(0xD8, 0xC0, 0x90); // Beige epoxy
pub const COLOR_LEAD: Rgb = Rgb::new(0xA0, 0xA0, 0xA0); // Tinned wire

impl Color {
    /// Swatch used when painting this color on a diagram
    pub fn swatch(self) -> Rgb {
        match self {
            Color::Black => Rgb::new(0x00, 0x00, 0x00),
            Color::Brown => Rgb::new(0x8B, 0x45, 0x13),
            Color::Red => Rgb::new(0xE0, 0x10, 0x10),
            Color::Orange => Rgb::new(0xFF, 0x8C, 0x00),
            Color::Yellow => Rgb::new(0xFF, 0xE0, 0x00),
            Color::Green => Rgb::new(0x10, 0xA0, 0x30),
            Color::Blue => Rgb::new(0x10, 0x50, 0xE0),
            Color::Violet => Rgb::new(0x90, 0x30, 0xD0),
            Color::Grey => Rgb::new(0x80, 0x80, 0x80),
            Color::White => Rgb::new(0xFF, 0xFF, 0xFF),
            Color::Gold => Rgb::new(0xCF, 0xB5, 0x3B),
            Color::Silver => Rgb::new(0xC0, 0xC0, 0xC0),
        }
    }
}
