//! Resistor band decoding

mod tables;

pub use tables::{
    Color, ColorTable, DIGITS, MULTIPLIERS, PPMS, TOLERANCES, multiplier_factor,
};

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{ResistorError, Result};
use tables::apply_exponent;

/// Band count of a resistor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BandMode {
    #[default]
    Four,
    Five,
    Six,
}

/// Logical meaning of a selection slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandRole {
    /// Significant digit, 0-based from the left
    Digit(u8),
    Multiplier,
    Tolerance,
    Ppm,
}

/// One entry per band in logical order; `None` is an unset band
pub type Selection = Vec<Option<Color>>;

/// Decoded resistor value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reading {
    pub ohms: f64,
    pub tolerance_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppm: Option<u32>,
}

const FOUR_BAND_ROLES: [BandRole; 4] = [
    BandRole::Digit(0),
    BandRole::Digit(1),
    BandRole::Multiplier,
    BandRole::Tolerance,
];

const FIVE_BAND_ROLES: [BandRole; 5] = [
    BandRole::Digit(0),
    BandRole::Digit(1),
    BandRole::Digit(2),
    BandRole::Multiplier,
    BandRole::Tolerance,
];

const SIX_BAND_ROLES: [BandRole; 6] = [
    BandRole::Digit(0),
    BandRole::Digit(1),
    BandRole::Digit(2),
    BandRole::Multiplier,
    BandRole::Tolerance,
    BandRole::Ppm,
];

impl BandMode {
    pub const ALL: [BandMode; 3] = [BandMode::Four, BandMode::Five, BandMode::Six];

    pub fn count(self) -> u8 {
        match self {
            BandMode::Four => 4,
            BandMode::Five => 5,
            BandMode::Six => 6,
        }
    }

    pub fn digit_count(self) -> usize {
        match self {
            BandMode::Four => 2,
            BandMode::Five | BandMode::Six => 3,
        }
    }

    pub fn has_ppm(self) -> bool {
        self == BandMode::Six
    }

    /// Selection slots in logical order
    pub fn roles(self) -> &'static [BandRole] {
        match self {
            BandMode::Four => &FOUR_BAND_ROLES,
            BandMode::Five => &FIVE_BAND_ROLES,
            BandMode::Six => &SIX_BAND_ROLES,
        }
    }

    /// Number of entries a selection must have
    pub fn selection_len(self) -> usize {
        self.digit_count() + 2 + usize::from(self.has_ppm())
    }
}

impl TryFrom<u8> for BandMode {
    type Error = ResistorError;

    fn try_from(count: u8) -> Result<Self> {
        match count {
            4 => Ok(BandMode::Four),
            5 => Ok(BandMode::Five),
            6 => Ok(BandMode::Six),
            other => Err(ResistorError::InvalidBandMode(other)),
        }
    }
}

impl fmt::Display for BandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-band", self.count())
    }
}

impl Serialize for BandMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.count())
    }
}

impl BandRole {
    /// Name of the table this slot reads from
    pub fn table_name(self) -> &'static str {
        match self {
            BandRole::Digit(_) => DIGITS.name,
            BandRole::Multiplier => MULTIPLIERS.name,
            BandRole::Tolerance => TOLERANCES.name,
            BandRole::Ppm => PPMS.name,
        }
    }

    /// Colors valid for this slot, in table order
    pub fn colors(self) -> Vec<Color> {
        match self {
            BandRole::Digit(_) => DIGITS.colors().collect(),
            BandRole::Multiplier => MULTIPLIERS.colors().collect(),
            BandRole::Tolerance => TOLERANCES.colors().collect(),
            BandRole::Ppm => PPMS.colors().collect(),
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandRole::Digit(n) => write!(f, "digit-{}", n + 1),
            other => f.write_str(other.table_name()),
        }
    }
}

pub(crate) fn check_length(mode: BandMode, selection: &[Option<Color>]) -> Result<()> {
    let expected = mode.selection_len();
    if selection.len() != expected {
        return Err(ResistorError::WrongSelectionLength {
            mode: mode.count(),
            expected,
            actual: selection.len(),
        });
    }
    Ok(())
}

fn value_of<T: Copy + 'static>(table: &ColorTable<T>, entry: Option<Color>) -> Result<Option<T>> {
    entry.map(|color| table.get(color)).transpose()
}

/// Decode a band selection into resistance, tolerance and (6-band only) ppm.
///
/// Unset digit bands count as digit 0, an unset multiplier as x1, and unset
/// tolerance/ppm bands as 0.
pub fn decode(mode: BandMode, selection: &[Option<Color>]) -> Result<Reading> {
    check_length(mode, selection)?;

    let mut base: u64 = 0;
    let mut exponent = 0;
    let mut tolerance_percent = 0.0;
    let mut ppm = 0;

    for (role, &entry) in mode.roles().iter().zip(selection) {
        match role {
            BandRole::Digit(_) => {
                let digit = value_of(&DIGITS, entry)?.unwrap_or(0);
                base = base * 10 + u64::from(digit);
            }
            BandRole::Multiplier => exponent = value_of(&MULTIPLIERS, entry)?.unwrap_or(0),
            BandRole::Tolerance => {
                tolerance_percent = value_of(&TOLERANCES, entry)?.unwrap_or(0.0)
            }
            BandRole::Ppm => ppm = value_of(&PPMS, entry)?.unwrap_or(0),
        }
    }

    let reading = Reading {
        ohms: apply_exponent(base as f64, exponent),
        tolerance_percent,
        ppm: mode.has_ppm().then_some(ppm),
    };
    debug!(%mode, base, exponent, ?reading, "decoded selection");
    Ok(reading)
}

/// Carry a selection over to another band count.
///
/// Entries keep their role (digit n, multiplier, tolerance, ppm); roles the
/// new mode lacks are dropped and roles it adds start unset.
pub fn retarget(selection: &[Option<Color>], from: BandMode, to: BandMode) -> Result<Selection> {
    check_length(from, selection)?;

    let from_roles = from.roles();
    let retargeted: Selection = to
        .roles()
        .iter()
        .map(|role| {
            from_roles
                .iter()
                .position(|r| r == role)
                .and_then(|i| selection[i])
        })
        .collect();

    debug!(%from, %to, ?retargeted, "retargeted selection");
    Ok(retargeted)
}
