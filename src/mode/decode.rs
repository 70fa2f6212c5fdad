//! Band decoding mode

use std::path::Path;

use serde::Serialize;

use resistorcalc::decoder::{BandMode, BandRole, Color, Reading, decode};
use resistorcalc::diagram::write_svg;
use resistorcalc::error::Result;
use resistorcalc::format::format_reading;

use crate::output::{
    print_diagram, print_legend, print_reading, print_selection, print_warning,
};

use super::parse_selection;

/// Settings for a decode run, taken from the command line
pub struct DecodeOptions<'a> {
    pub bands: u8,
    pub colors: &'a [String],
    pub svg_path: Option<&'a Path>,
    pub show_diagram: bool,
    pub json: bool,
    pub quiet: bool,
}

/// JSON output of a decode run
#[derive(Serialize)]
struct DecodeReport<'a> {
    bands: BandMode,
    selection: &'a [Option<Color>],
    reading: Reading,
    display: String,
}

fn warn_unset_bands(mode: BandMode, selection: &[Option<Color>]) {
    for (i, (role, color)) in mode.roles().iter().zip(selection).enumerate() {
        if color.is_some() {
            continue;
        }
        let effect = match role {
            BandRole::Digit(_) => "counts as digit 0",
            BandRole::Multiplier => "counts as x1",
            BandRole::Tolerance | BandRole::Ppm => "counts as 0",
        };
        print_warning(&format!("band {} ({}) is unset, {}", i + 1, role, effect));
    }
}

/// Decode the selected bands and print the reading
pub fn run_decode(opts: &DecodeOptions) -> Result<()> {
    let mode = BandMode::try_from(opts.bands)?;
    let selection = parse_selection(opts.colors)?;
    let reading = decode(mode, &selection)?;
    let readout = format_reading(&reading)?;

    if !opts.quiet {
        warn_unset_bands(mode, &selection);
    }

    if opts.json {
        let report = DecodeReport {
            bands: mode,
            selection: &selection,
            reading,
            display: readout,
        };
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
    } else {
        if !opts.quiet {
            print_selection(mode, &selection);
        }
        if opts.show_diagram {
            print_diagram(mode, &selection);
            println!();
        }
        print_reading(&readout);
        if !opts.quiet {
            println!();
            print_legend();
        }
    }

    if let Some(path) = opts.svg_path {
        write_svg(path, mode, &selection)?;
        eprintln!("Diagram saved to: {}", path.display());
    }

    Ok(())
}
