//! Standalone SVG rendering of a resistor

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use super::{COLOR_BODY, COLOR_LEAD, painted_bands};
use crate::decoder::{BandMode, Color, check_length};
use crate::error::Result;

const SVG_WIDTH: u32 = 300;
const SVG_HEIGHT: u32 = 100;

const BODY_X: u32 = 40;
const BODY_Y: u32 = 20;
const BODY_WIDTH: u32 = 220;
const BODY_HEIGHT: u32 = 60;

const BAND_WIDTH: u32 = 12;
const BAND_START_X: u32 = 70;
const BAND_STEP: u32 = 24;
/// The last stripe sits apart from the others, towards the right lead
const LAST_BAND_X: u32 = 226;

fn band_x(visual_index: usize, band_count: usize) -> u32 {
    if visual_index + 1 == band_count {
        LAST_BAND_X
    } else {
        BAND_START_X + visual_index as u32 * BAND_STEP
    }
}

/// Render the resistor for `selection` as an SVG document
pub fn render_svg(mode: BandMode, selection: &[Option<Color>]) -> Result<String> {
    check_length(mode, selection)?;

    let bands = painted_bands(mode, selection);
    let mut svg = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-bands="{count}">"#,
        w = SVG_WIDTH,
        h = SVG_HEIGHT,
        count = mode.count(),
    );
    let _ = writeln!(
        svg,
        r#"  <line x1="0" y1="{y}" x2="{w}" y2="{y}" stroke="{lead}" stroke-width="4"/>"#,
        y = SVG_HEIGHT / 2,
        w = SVG_WIDTH,
        lead = COLOR_LEAD,
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="{BODY_X}" y="{BODY_Y}" width="{BODY_WIDTH}" height="{BODY_HEIGHT}" rx="18" fill="{COLOR_BODY}"/>"#,
    );

    for (i, band) in bands.iter().enumerate() {
        let color_name = band.color.map_or("none", Color::name);
        let _ = writeln!(
            svg,
            r#"  <rect data-role="{role}" data-color="{color_name}" x="{x}" y="{BODY_Y}" width="{BAND_WIDTH}" height="{BODY_HEIGHT}" fill="{fill}"/>"#,
            role = band.role,
            x = band_x(i, bands.len()),
            fill = band.fill(),
        );
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and write the SVG diagram to `path`
pub fn write_svg(path: &Path, mode: BandMode, selection: &[Option<Color>]) -> Result<()> {
    let svg = render_svg(mode, selection)?;
    std::fs::write(path, svg)?;
    debug!(path = %path.display(), %mode, "wrote svg diagram");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Color::*;
    use crate::error::ResistorError;

    #[test]
    fn test_one_rect_per_band() {
        for mode in BandMode::ALL {
            let selection = vec![None; mode.selection_len()];
            let svg = render_svg(mode, &selection).unwrap();
            // Body plus one stripe per band
            assert_eq!(svg.matches("<rect").count(), mode.selection_len() + 1);
            assert!(svg.starts_with("<svg"));
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn test_fills_follow_selection() {
        let svg = render_svg(BandMode::Four, &[Some(Brown), Some(Black), Some(Red), Some(Gold)])
            .unwrap();
        assert!(svg.contains(r#"data-role="digit-1" data-color="brown" x="70""#));
        assert!(svg.contains(&format!("fill=\"{}\"", Brown.swatch())));
        assert!(svg.contains(r#"data-role="tolerance" data-color="gold" x="226""#));
    }

    #[test]
    fn test_six_band_paints_tolerance_last() {
        let selection = [
            Some(Brown),
            Some(Black),
            Some(Black),
            Some(Brown),
            Some(Gold),
            Some(Red),
        ];
        let svg = render_svg(BandMode::Six, &selection).unwrap();
        let ppm = svg.find(r#"data-role="ppm" data-color="red""#).unwrap();
        let tolerance = svg.find(r#"data-role="tolerance" data-color="gold""#).unwrap();
        assert!(ppm < tolerance);
        assert!(svg.contains(r#"data-role="tolerance" data-color="gold" x="226""#));
    }

    #[test]
    fn test_unset_band_uses_body_color() {
        let svg = render_svg(BandMode::Four, &[None, None, None, None]).unwrap();
        assert!(svg.contains(r#"data-color="none""#));
        assert_eq!(svg.matches(&format!("fill=\"{}\"", COLOR_BODY)).count(), 5);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = render_svg(BandMode::Five, &[Some(Red)]).unwrap_err();
        assert!(matches!(err, ResistorError::WrongSelectionLength { .. }));
    }

    #[test]
    fn test_write_svg() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resistor.svg");

        write_svg(&path, BandMode::Four, &[Some(Red), Some(Red), Some(Red), Some(Gold)]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#"data-bands="4""#));
    }
}
