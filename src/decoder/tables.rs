//! Color definitions and the four band value tables

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ResistorError, Result};

/// Band color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl Color {
    pub const ALL: [Color; 12] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
        Color::Gold,
        Color::Silver,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Violet => "violet",
            Color::Grey => "grey",
            Color::White => "white",
            Color::Gold => "gold",
            Color::Silver => "silver",
        }
    }
}

impl Color {
    /// Two-letter code, for drawing stripes without color
    pub fn code(self) -> &'static str {
        match self {
            Color::Black => "Bk",
            Color::Brown => "Br",
            Color::Red => "Rd",
            Color::Orange => "Or",
            Color::Yellow => "Ye",
            Color::Green => "Gn",
            Color::Blue => "Bu",
            Color::Violet => "Vi",
            Color::Grey => "Gy",
            Color::White => "Wh",
            Color::Gold => "Gd",
            Color::Silver => "Sv",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let alias = match lower.as_str() {
            "gray" => "grey",
            "purple" => "violet",
            other => other,
        };
        Color::ALL
            .into_iter()
            .find(|c| c.name() == alias)
            .ok_or_else(|| ResistorError::InvalidColor {
                color: s.to_string(),
                table: "band",
            })
    }
}

/// Ordered color -> value mapping for one kind of band
pub struct ColorTable<T: 'static> {
    pub name: &'static str,
    entries: &'static [(Color, T)],
}

impl<T: Copy + 'static> ColorTable<T> {
    pub fn lookup(&self, color: Color) -> Option<T> {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map(|&(_, value)| value)
    }

    /// Like `lookup`, but a missing color is an `InvalidColor` error
    pub fn get(&self, color: Color) -> Result<T> {
        self.lookup(color).ok_or_else(|| ResistorError::InvalidColor {
            color: color.to_string(),
            table: self.name,
        })
    }

    pub fn entries(&self) -> &'static [(Color, T)] {
        self.entries
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|&(c, _)| c)
    }
}

/// Significant digit bands
pub const DIGITS: ColorTable<u8> = ColorTable {
    name: "digit",
    entries: &[
        (Color::Black, 0),
        (Color::Brown, 1),
        (Color::Red, 2),
        (Color::Orange, 3),
        (Color::Yellow, 4),
        (Color::Green, 5),
        (Color::Blue, 6),
        (Color::Violet, 7),
        (Color::Grey, 8),
        (Color::White, 9),
    ],
};

/// Multiplier band, stored as a power-of-ten exponent
pub const MULTIPLIERS: ColorTable<i32> = ColorTable {
    name: "multiplier",
    entries: &[
        (Color::Black, 0),
        (Color::Brown, 1),
        (Color::Red, 2),
        (Color::Orange, 3),
        (Color::Yellow, 4),
        (Color::Green, 5),
        (Color::Blue, 6),
        (Color::Violet, 7),
        (Color::Grey, 8),
        (Color::White, 9),
        (Color::Gold, -1),
        (Color::Silver, -2),
    ],
};

/// Tolerance band (percent)
pub const TOLERANCES: ColorTable<f64> = ColorTable {
    name: "tolerance",
    entries: &[
        (Color::Brown, 1.0),
        (Color::Red, 2.0),
        (Color::Green, 0.5),
        (Color::Blue, 0.25),
        (Color::Violet, 0.1),
        (Color::Grey, 0.05),
        (Color::Gold, 5.0),
        (Color::Silver, 10.0),
    ],
};

/// Temperature coefficient band (ppm/K), 6-band parts only
pub const PPMS: ColorTable<u32> = ColorTable {
    name: "ppm",
    entries: &[
        (Color::Black, 250),
        (Color::Brown, 100),
        (Color::Red, 50),
        (Color::Orange, 15),
        (Color::Yellow, 25),
        (Color::Green, 20),
        (Color::Blue, 10),
        (Color::Violet, 5),
        (Color::Grey, 1),
    ],
};

/// Scale factor for a multiplier exponent (gold -> 0.1, red -> 100)
pub fn multiplier_factor(exponent: i32) -> f64 {
    apply_exponent(1.0, exponent)
}

/// `value * 10^exponent`, dividing for sub-unit multipliers so 10 x gold is exactly 1.0
pub(crate) fn apply_exponent(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}
