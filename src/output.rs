use colored::*;
use resistorcalc::decoder::{BandMode, BandRole, Color, ColorTable};
use resistorcalc::diagram::{COLOR_BODY, COLOR_LEAD, PaintedBand, Rgb, painted_bands};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

fn paint(text: &str, rgb: Rgb) -> ColoredString {
    text.on_truecolor(rgb.r, rgb.g, rgb.b)
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Name of a band color, tinted with its own swatch
fn color_name(color: Option<Color>) -> ColoredString {
    match color {
        Some(c) => {
            let rgb = c.swatch();
            format!("{:<7}", c.name()).truecolor(rgb.r, rgb.g, rgb.b)
        }
        None => format!("{:<7}", "-").dimmed(),
    }
}

fn role_label(role: BandRole) -> String {
    match role {
        BandRole::Digit(n) => format!("Digit {}", n + 1),
        BandRole::Multiplier => "Multiplier".to_string(),
        BandRole::Tolerance => "Tolerance".to_string(),
        BandRole::Ppm => "Temp. coeff.".to_string(),
    }
}

/// Stripe text: blank when painted, a color code when colors are off
fn stripe_text(band: &PaintedBand, plain: bool) -> &'static str {
    match (plain, band.color) {
        (false, _) => "  ",
        (true, Some(color)) => color.code(),
        (true, None) => "--",
    }
}

/// Draw the resistor body with one stripe per band, in painted order
pub(crate) fn print_diagram(mode: BandMode, selection: &[Option<Color>]) {
    let bands = painted_bands(mode, selection);
    let plain = !colored::control::SHOULD_COLORIZE.should_colorize();
    let lead = paint(if plain { "----" } else { "    " }, COLOR_LEAD);
    let body = |w: usize| paint(&" ".repeat(w), COLOR_BODY);

    print!("{}{}", lead, body(2));
    for (i, band) in bands.iter().enumerate() {
        if i + 1 == bands.len() {
            // Last stripe stands apart
            print!("{}", body(3));
        }
        print!("{}{}", paint(stripe_text(band, plain), band.fill()), body(1));
    }
    println!("{}{}", body(1), lead);

    // Stripe legend, same order as painted
    print!("      ");
    for (i, band) in bands.iter().enumerate() {
        if i + 1 == bands.len() {
            print!("   ");
        }
        print!("{} ", stripe_mark(band));
    }
    println!();
}

fn stripe_mark(band: &PaintedBand) -> String {
    match band.role {
        BandRole::Digit(n) => format!("{:<2}", n + 1),
        BandRole::Multiplier => "M ".to_string(),
        BandRole::Tolerance => "T ".to_string(),
        BandRole::Ppm => "P ".to_string(),
    }
}

pub(crate) fn print_selection(mode: BandMode, selection: &[Option<Color>]) {
    println!("Bands ({}):", mode);
    for (role, color) in mode.roles().iter().zip(selection) {
        println!("  {:>12}: {}", role_label(*role), color_name(*color));
    }
    println!();
}

pub(crate) fn print_reading(readout: &str) {
    println!("{} {}", style_label("Resistance:"), readout);
}

pub(crate) fn print_table<T: Copy + 'static>(
    title: &str,
    table: &ColorTable<T>,
    show: impl Fn(T) -> String,
) {
    println!("[{}]", title);
    print_separator(20);
    for &(color, value) in table.entries() {
        println!("  {} {:>10}", color_name(Some(color)), show(value));
    }
    println!();
}

pub(crate) fn print_legend() {
    println!("Digits: significant figures, read left to right");
    println!("M: multiplier (power of ten; gold x0.1, silver x0.01)");
    println!("T: tolerance in percent");
    println!("P: temperature coefficient in ppm/K (6-band only)");
    println!("Unset digits count as 0 and an unset multiplier as x1.");
}
