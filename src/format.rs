//! Text representations of generated colors.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::{record::ColorRecord, Error};

/// One of the notations a [`ColorRecord`] can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// `R, G, B` with 8-bit channels.
    Rgb,
    /// `#rrggbb`.
    Hex,
    /// Hue in degrees, saturation and value in percent.
    Hsv,
    /// Hue in degrees, saturation and lightness in percent.
    Hsl,
    /// Cyan, magenta, yellow and key in percent.
    Cmyk,
}

impl Format {
    /// All formats, in table column order.
    pub const ALL: [Format; 5] = [
        Format::Rgb,
        Format::Hex,
        Format::Hsv,
        Format::Hsl,
        Format::Cmyk,
    ];

    /// The title of the format, used as table heading and label.
    pub fn heading(self) -> &'static str {
        match self {
            Format::Rgb => "RGB",
            Format::Hex => "HEX",
            Format::Hsv => "HSV",
            Format::Hsl => "HSL",
            Format::Cmyk => "CMYK",
        }
    }

    /// The flag of this format in a [`Formats`] set.
    pub fn flag(self) -> Formats {
        match self {
            Format::Rgb => Formats::RGB,
            Format::Hex => Formats::HEX,
            Format::Hsv => Formats::HSV,
            Format::Hsl => Formats::HSL,
            Format::Cmyk => Formats::CMYK,
        }
    }

    /// The value of `record` as shown in a table cell.
    pub fn cell(self, record: &ColorRecord) -> String {
        match self {
            Format::Rgb => record.rgb.to_string(),
            Format::Hex => record.hex(),
            Format::Hsv => record.hsv.to_string(),
            Format::Hsl => record.hsl.to_string(),
            Format::Cmyk => record.cmyk.to_string(),
        }
    }

    /// The value of `record` as copied on its own, in functional notation
    /// (`rgb(...)`, `hsv(...)`, ...) except for hex.
    pub fn copy_text(self, record: &ColorRecord) -> String {
        match self {
            Format::Hex => record.hex(),
            _ => format!(
                "{}({})",
                self.heading().to_lowercase(),
                self.cell(record)
            ),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.heading().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidFormat(s.to_string()))
    }
}

bitflags! {
    /// A set of [`Format`]s, e.g. the columns of a table.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Formats : u8 {
        /// Include [`Format::Rgb`].
        const RGB = 1 << 0;
        /// Include [`Format::Hex`].
        const HEX = 1 << 1;
        /// Include [`Format::Hsv`].
        const HSV = 1 << 2;
        /// Include [`Format::Hsl`].
        const HSL = 1 << 3;
        /// Include [`Format::Cmyk`].
        const CMYK = 1 << 4;
    }
}

impl Default for Formats {
    fn default() -> Self {
        Formats::all()
    }
}

impl Formats {
    /// The formats in the set, in column order.
    pub fn formats(self) -> impl Iterator<Item = Format> {
        Format::ALL
            .into_iter()
            .filter(move |format| self.contains(format.flag()))
    }

    /// The table headings of the formats in the set.
    pub fn headings(self) -> Vec<&'static str> {
        self.formats().map(Format::heading).collect()
    }

    /// The table cells of `record` for the formats in the set.
    pub fn cells(self, record: &ColorRecord) -> Vec<String> {
        self.formats().map(|format| format.cell(record)).collect()
    }
}

impl FromIterator<Format> for Formats {
    fn from_iter<T: IntoIterator<Item = Format>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Formats::empty(), |formats, format| formats | format.flag())
    }
}

impl FromStr for Formats {
    type Err = Error;

    /// Parse a comma separated list of formats, e.g. `rgb,hex`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Format>)
            .collect()
    }
}

/// Write one paragraph with every notation of the record at `index`
/// (zero based).
fn paragraph(index: usize, record: &ColorRecord) -> String {
    let mut text = format!("Color {}:", index + 1);
    for format in Format::ALL {
        text.push('\n');
        text.push_str(format.heading());
        text.push_str(": ");
        text.push_str(&format.cell(record));
    }
    text
}

/// Write all records in every notation, one paragraph per record separated
/// by a blank line.
///
/// Fails with [`Error::NothingGenerated`] if there are no records.
pub fn copy_all(records: &[ColorRecord]) -> Result<String, Error> {
    if records.is_empty() {
        return Err(Error::NothingGenerated);
    }

    let paragraphs = records
        .iter()
        .enumerate()
        .map(|(index, record)| paragraph(index, record))
        .collect::<Vec<_>>();

    Ok(paragraphs.join("\n\n"))
}
