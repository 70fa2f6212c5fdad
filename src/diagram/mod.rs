//! Resistor diagram layout and rendering
//!
//! Selections are always in logical order (digits, multiplier, tolerance,
//! ppm). The diagram paints 6-band parts with the ppm stripe fifth and the
//! tolerance stripe last, so painted positions 5 and 6 are swapped relative
//! to the selection. Everything here maps painted positions back to slots
//! before touching a selection.

mod colors;
mod svg;

pub use colors::{COLOR_BODY, COLOR_LEAD, Rgb};
pub use svg::{render_svg, write_svg};

use crate::decoder::{BandMode, BandRole, Color};

const FOUR_BAND_PAINT_ORDER: [BandRole; 4] = [
    BandRole::Digit(0),
    BandRole::Digit(1),
    BandRole::Multiplier,
    BandRole::Tolerance,
];

const FIVE_BAND_PAINT_ORDER: [BandRole; 5] = [
    BandRole::Digit(0),
    BandRole::Digit(1),
    BandRole::Digit(2),
    BandRole::Multiplier,
    BandRole::Tolerance,
];

const SIX_BAND_PAINT_ORDER: [BandRole; 6] = [
    BandRole::Digit(0),
    BandRole::Digit(1),
    BandRole::Digit(2),
    BandRole::Multiplier,
    BandRole::Ppm,
    BandRole::Tolerance,
];

/// Roles in painted order, left to right
pub fn visual_roles(mode: BandMode) -> &'static [BandRole] {
    match mode {
        BandMode::Four => &FOUR_BAND_PAINT_ORDER,
        BandMode::Five => &FIVE_BAND_PAINT_ORDER,
        BandMode::Six => &SIX_BAND_PAINT_ORDER,
    }
}

/// Selection slot painted at `visual_index`, or None past the last band
pub fn logical_index(mode: BandMode, visual_index: usize) -> Option<usize> {
    let role = visual_roles(mode).get(visual_index)?;
    mode.roles().iter().position(|r| r == role)
}

/// One painted stripe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintedBand {
    pub role: BandRole,
    pub color: Option<Color>,
}

impl PaintedBand {
    /// Fill color, falling back to the body for unset bands
    pub fn fill(&self) -> Rgb {
        self.color.map(Color::swatch).unwrap_or(COLOR_BODY)
    }
}

/// Selection reordered for painting. `selection` must already match `mode`.
pub fn painted_bands(mode: BandMode, selection: &[Option<Color>]) -> Vec<PaintedBand> {
    (0..visual_roles(mode).len())
        .filter_map(|visual| {
            let slot = logical_index(mode, visual)?;
            Some(PaintedBand {
                role: visual_roles(mode)[visual],
                color: selection.get(slot).copied().flatten(),
            })
        })
        .collect()
}
