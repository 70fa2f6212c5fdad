//! Resistor color band decoding.
//!
//! The core is two pure functions: [`decode`] turns a band selection into a
//! [`Reading`], and [`format_ohms`] renders a resistance with a metric suffix.
//! [`diagram`] holds the rendering side (visual band order, SVG output).

pub mod decoder;
pub mod diagram;
pub mod error;
pub mod format;

pub use crate::decoder::{BandMode, BandRole, Color, Reading, Selection, decode, retarget};
pub use crate::error::{ResistorError, Result};
pub use crate::format::{format_ohms, format_reading};
