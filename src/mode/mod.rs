//! CLI mode implementations

mod decode;
mod list;

pub use decode::{DecodeOptions, run_decode};
pub use list::run_list;

use resistorcalc::decoder::{BandMode, Color, Selection};
use resistorcalc::error::{ResistorError, Result};

/// Words accepted for an unset band
const UNSET_WORDS: [&str; 3] = ["-", "none", "unset"];

/// Parse command line band colors into a selection
pub fn parse_selection(args: &[String]) -> Result<Selection> {
    args.iter()
        .map(|arg| {
            if UNSET_WORDS.contains(&arg.trim().to_ascii_lowercase().as_str()) {
                Ok(None)
            } else {
                arg.parse::<Color>().map(Some)
            }
        })
        .collect()
}

/// Colors that would have been accepted, for an `InvalidColor` on a known band
pub fn valid_colors_hint(err: &ResistorError) -> Option<String> {
    let ResistorError::InvalidColor { table, .. } = err else {
        return None;
    };
    let role = BandMode::Six
        .roles()
        .iter()
        .find(|role| role.table_name() == *table)?;
    let names: Vec<&str> = role.colors().into_iter().map(Color::name).collect();
    Some(format!("valid {} colors: {}", table, names.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resistorcalc::error::ResistorError;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_selection() {
        let selection = parse_selection(&args(&["brown", "-", "Red", "none"])).unwrap();
        assert_eq!(
            selection,
            vec![Some(Color::Brown), None, Some(Color::Red), None]
        );
    }

    #[test]
    fn test_parse_selection_unknown_color() {
        let err = parse_selection(&args(&["brown", "pink"])).unwrap_err();
        assert!(matches!(err, ResistorError::InvalidColor { ref color, .. } if color == "pink"));
        // Unknown names are not tied to a band, so there is nothing to suggest
        assert_eq!(valid_colors_hint(&err), None);
    }

    #[test]
    fn test_valid_colors_hint() {
        let err = ResistorError::InvalidColor {
            color: "black".to_string(),
            table: "tolerance",
        };
        assert_eq!(
            valid_colors_hint(&err).unwrap(),
            "valid tolerance colors: brown, red, green, blue, violet, grey, gold, silver"
        );
        assert_eq!(valid_colors_hint(&ResistorError::InvalidBandMode(7)), None);
    }
}
