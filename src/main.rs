mod mode;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mode::DecodeOptions;
use output::print_error;

#[derive(Parser)]
#[command(
    name = "resistorcalc",
    version,
    about = "Resistor color band decoder with terminal and SVG diagrams",
    after_help = "Examples:
  resistorcalc brown black red gold                       4-band, 1kΩ ±5%
  resistorcalc -b 5 yellow violet black brown brown       5-band, 4.7kΩ ±1%
  resistorcalc -b 6 brown black black brown gold brown    6-band with temp. coefficient
  resistorcalc brown black - gold                         Unset multiplier (x1)
  resistorcalc --svg r.svg red red red gold               Also write an SVG diagram
  resistorcalc --list                                     Show the color tables"
)]
struct Args {
    /// Band colors in order: digits, multiplier, tolerance, then ppm (6 bands).
    /// Use "-" for an unset band.
    colors: Vec<String>,

    /// Number of bands on the resistor (4, 5 or 6)
    #[arg(short, long, default_value = "4", value_name = "COUNT")]
    bands: u8,

    /// Print the color tables and exit
    #[arg(short, long)]
    list: bool,

    /// Write the resistor diagram as an SVG file
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Hide the terminal diagram
    #[arg(long)]
    no_diagram: bool,

    /// Print the reading as JSON
    #[arg(long)]
    json: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool, ansi: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    init_tracing(args.verbose, !args.no_color);

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    if args.list && !args.colors.is_empty() {
        print_error("--list cannot be used with band colors");
        std::process::exit(1);
    }

    if args.list && args.svg.is_some() {
        print_error("--svg cannot be used with --list");
        std::process::exit(1);
    }

    if !args.list && args.colors.is_empty() {
        print_error("no band colors given (use --list to see the color tables)");
        std::process::exit(1);
    }

    // Validate SVG output path
    if let Some(ref path) = args.svg
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }

    if args.list {
        mode::run_list(args.quiet);
        return;
    }

    let options = DecodeOptions {
        bands: args.bands,
        colors: &args.colors,
        svg_path: args.svg.as_deref(),
        show_diagram: !args.no_diagram && !args.json,
        json: args.json,
        quiet: args.quiet,
    };

    if let Err(e) = mode::run_decode(&options) {
        print_error(&e.to_string());
        if let Some(hint) = mode::valid_colors_hint(&e) {
            eprintln!("  {}", hint);
        }
        std::process::exit(1);
    }
}
