use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use spectrum::{
    strip::{DEFAULT_STRIP_HEIGHT, DEFAULT_STRIP_WIDTH},
    Color, Format, Formats, Mode, DEFAULT_COUNT,
};

/// Divide the gradient between two colors into equal steps and show every
/// step as RGB, HEX, HSV, HSL and CMYK.
#[derive(Debug, Parser)]
#[command(name = "spectrum-gradient", version)]
pub struct Args {
    /// Start color, as `#rrggbb`, `#rgb`, `r, g, b` or `rgb(r, g, b)`.
    #[arg(long, default_value = "#ff0000")]
    pub start: Color,

    /// End color, in the same notations as the start color.
    #[arg(long, default_value = "#7f00ff")]
    pub end: Color,

    /// Number of colors to generate.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_COUNT.to_string(),
        allow_hyphen_values = true
    )]
    pub count: String,

    /// How the hue travels: `linear` or `circular` (shortest way around the
    /// color wheel).
    #[arg(short, long, default_value_t = Mode::Linear)]
    pub mode: Mode,

    /// Comma separated formats shown in the table.
    #[arg(long, default_value = "rgb,hex,hsv,hsl,cmyk")]
    pub columns: Formats,

    /// Print the value of the color with this number (starting at 1) instead
    /// of the table.
    #[arg(long, value_name = "NUMBER")]
    pub copy: Option<usize>,

    /// The format printed by `--copy`.
    #[arg(long, default_value = "hex")]
    pub format: Format,

    /// Print every color in every format instead of the table.
    #[arg(long, conflicts_with = "copy")]
    pub copy_all: bool,

    /// Also write the spectrum strip to this PNG file.
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Width of the PNG strip in pixels.
    #[arg(
        long,
        default_value_t = DEFAULT_STRIP_WIDTH as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Height of the PNG strip in pixels.
    #[arg(
        long,
        default_value_t = DEFAULT_STRIP_HEIGHT as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: u32,

    /// Maximum level of log messages written to stderr.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}
