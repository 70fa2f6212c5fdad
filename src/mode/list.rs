//! Color table listing mode

use resistorcalc::decoder::{DIGITS, MULTIPLIERS, PPMS, TOLERANCES, multiplier_factor};
use resistorcalc::format::{OHM_SYMBOL, format_ohms};

use crate::output::{print_legend, print_table};

/// Print the four color tables in band order
pub fn run_list(quiet: bool) {
    print_table("Digit", &DIGITS, |d| d.to_string());
    print_table("Multiplier", &MULTIPLIERS, |exp| {
        let factor = format_ohms(multiplier_factor(exp)).unwrap_or_default();
        format!("x{}", factor.trim_end_matches(OHM_SYMBOL))
    });
    print_table("Tolerance", &TOLERANCES, |pct| format!("±{}%", pct));
    print_table("Temp. coeff.", &PPMS, |ppm| format!("{}ppm", ppm));

    if !quiet {
        print_legend();
    }
}
