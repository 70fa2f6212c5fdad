//! Text formatting for decoded readings

use crate::decoder::Reading;
use crate::error::{ResistorError, Result};

pub const OHM_SYMBOL: &str = "Ω";

/// Metric suffixes indexed by power of 1000
const SUFFIXES: [&str; 4] = ["", "k", "M", "G"];

fn trim_decimal(formatted: String) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Format a resistance with a metric suffix (e.g. 1500000 -> "1.5MΩ").
///
/// Values below 1Ω are printed as-is. Values of 1000GΩ and up stay in G.
pub fn format_ohms(ohms: f64) -> Result<String> {
    if !ohms.is_finite() || ohms < 0.0 {
        return Err(ResistorError::InvalidValue(ohms));
    }
    if ohms == 0.0 {
        return Ok(format!("0{}", OHM_SYMBOL));
    }
    if ohms < 1.0 {
        return Ok(format!("{}{}", ohms, OHM_SYMBOL));
    }

    let mut scaled = ohms;
    let mut index = 0;
    while scaled >= 1000.0 && index < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        index += 1;
    }

    Ok(format!(
        "{}{}{}",
        trim_decimal(format!("{:.2}", scaled)),
        SUFFIXES[index],
        OHM_SYMBOL
    ))
}

/// Readout line: resistance, tolerance and (6-band only) temperature coefficient
pub fn format_reading(reading: &Reading) -> Result<String> {
    let mut line = format!(
        "{} ±{}%",
        format_ohms(reading.ohms)?,
        reading.tolerance_percent
    );
    if let Some(ppm) = reading.ppm {
        line.push_str(&format!(" {}ppm", ppm));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_ohm_values() {
        assert_eq!(format_ohms(0.5).unwrap(), "0.5Ω");
        assert_eq!(format_ohms(0.1).unwrap(), "0.1Ω");
        assert_eq!(format_ohms(0.01).unwrap(), "0.01Ω");
        assert_eq!(format_ohms(0.0).unwrap(), "0Ω");
    }

    #[test]
    fn test_plain_ohms() {
        assert_eq!(format_ohms(1.0).unwrap(), "1Ω");
        assert_eq!(format_ohms(10.0).unwrap(), "10Ω");
        assert_eq!(format_ohms(999.0).unwrap(), "999Ω");
    }

    #[test]
    fn test_suffix_boundaries() {
        assert_eq!(format_ohms(1000.0).unwrap(), "1kΩ");
        assert_eq!(format_ohms(4700.0).unwrap(), "4.7kΩ");
        assert_eq!(format_ohms(1_500_000.0).unwrap(), "1.5MΩ");
        assert_eq!(format_ohms(1e9).unwrap(), "1GΩ");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(format_ohms(12_346.0).unwrap(), "12.35kΩ");
        assert_eq!(format_ohms(1.234).unwrap(), "1.23Ω");
        assert_eq!(format_ohms(2_200_000.0).unwrap(), "2.2MΩ");
    }

    #[test]
    fn test_suffix_chosen_before_rounding() {
        // Rounding may carry to 1000 without moving to the next suffix
        assert_eq!(format_ohms(999_999.0).unwrap(), "1000kΩ");
        assert_eq!(format_ohms(999.999).unwrap(), "1000Ω");
    }

    #[test]
    fn test_clamps_to_giga() {
        // No suffix beyond G
        assert_eq!(format_ohms(1e12).unwrap(), "1000GΩ");
        assert_eq!(format_ohms(4.7e13).unwrap(), "47000GΩ");
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        for value in [-1.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(format_ohms(value), Err(ResistorError::InvalidValue(_))),
                "{} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_reading_without_ppm() {
        let reading = Reading {
            ohms: 1000.0,
            tolerance_percent: 2.0,
            ppm: None,
        };
        assert_eq!(format_reading(&reading).unwrap(), "1kΩ ±2%");
    }

    #[test]
    fn test_reading_with_ppm() {
        let reading = Reading {
            ohms: 1000.0,
            tolerance_percent: 5.0,
            ppm: Some(100),
        };
        assert_eq!(format_reading(&reading).unwrap(), "1kΩ ±5% 100ppm");
    }

    #[test]
    fn test_reading_fractional_tolerance() {
        let reading = Reading {
            ohms: 0.47,
            tolerance_percent: 0.25,
            ppm: None,
        };
        assert_eq!(format_reading(&reading).unwrap(), "0.47Ω ±0.25%");
    }
}
