//! Terminal output: the spectrum strip and the color table, painted with
//! 24-bit ANSI colors.

use spectrum::{strip, Color, ColorRecord, Component, Formats};

const COLUMN_WIDTH: usize = 24;
const RESET: &str = "\x1B[0m";

fn background(color: Color) -> String {
    format!("\x1B[48;2;{};{};{}m", color.red, color.green, color.blue)
}

fn foreground(color: Color) -> String {
    format!("\x1B[38;2;{};{};{}m", color.red, color.green, color.blue)
}

fn row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("{cell:<COLUMN_WIDTH$}"))
        .collect()
}

/// The width in characters of a table with the given columns.
pub fn table_width(formats: Formats) -> usize {
    formats.formats().count().max(1) * COLUMN_WIDTH
}

/// One line of `columns` characters, split into a colored block per record.
pub fn render_strip(records: &[ColorRecord], columns: usize) -> String {
    let mut line = String::new();

    for (record, segment) in records
        .iter()
        .zip(strip::segments(records.len(), columns as Component, 1.0))
    {
        let width = segment.max.x.round() as usize - segment.min.x.round() as usize;
        if width == 0 {
            continue;
        }
        line.push_str(&background(record.rgb));
        line.push_str(&" ".repeat(width));
    }

    line.push_str(RESET);
    line
}

/// A heading line followed by one line per record, each painted in the
/// record's color with legible text.
pub fn render_table(records: &[ColorRecord], formats: Formats) -> String {
    let headings = formats
        .headings()
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let mut lines = vec![row(&headings)];

    lines.extend(records.iter().map(|record| {
        let text = record.rgb.contrasting_text_color().to_color();
        format!(
            "{}{}{}{RESET}",
            background(record.rgb),
            foreground(text),
            row(&formats.cells(record))
        )
    }));

    lines.join("\n")
}
