//! The [`Spectrum`] holds the user's choices and the most recently generated
//! colors.

use log::{debug, warn};

use crate::{
    color::Color,
    format::{self, Format},
    gradient::{generate, parse_count, GradientRequest},
    interpolate::Mode,
    record::ColorRecord,
    Error,
};

/// The start color used when none was chosen.
pub const DEFAULT_START: Color = Color::new(255, 0, 0);

/// The end color used when none was chosen.
pub const DEFAULT_END: Color = Color::new(127, 0, 255);

/// The number of colors offered before the user enters one.
pub const DEFAULT_COUNT: usize = 22;

/// Generates gradients between two colors and keeps the last result around
/// for inspection and copying.
///
/// Every successful generation replaces the previous colors. A failed one
/// leaves them untouched.
#[derive(Clone, Debug)]
pub struct Spectrum {
    start: Color,
    end: Color,
    mode: Mode,
    colors: Vec<ColorRecord>,
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END, Mode::default())
    }
}

impl Spectrum {
    /// Create a spectrum between two colors. Nothing is generated yet.
    pub fn new(start: Color, end: Color, mode: Mode) -> Self {
        Self {
            start,
            end,
            mode,
            colors: Vec::new(),
        }
    }

    /// The start color of the next gradient.
    pub fn start(&self) -> Color {
        self.start
    }

    /// The end color of the next gradient.
    pub fn end(&self) -> Color {
        self.end
    }

    /// The interpolation mode of the next gradient.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Choose the start color of the next gradient.
    pub fn set_start(&mut self, color: Color) {
        self.start = color;
    }

    /// Choose the end color of the next gradient.
    pub fn set_end(&mut self, color: Color) {
        self.end = color;
    }

    /// Choose the interpolation mode of the next gradient.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The request the current choices make for `count` colors.
    pub fn request(&self, count: usize) -> GradientRequest {
        GradientRequest::new(self.start, self.end, count, self.mode)
    }

    /// Generate `count` colors, replacing the previously generated ones.
    pub fn generate(&mut self, count: usize) -> Result<&[ColorRecord], Error> {
        let colors = generate(&self.request(count)).inspect_err(|err| warn!("{err}"))?;
        debug!("replacing {} colors with {}", self.colors.len(), colors.len());
        self.colors = colors;
        Ok(&self.colors)
    }

    /// Generate colors for a count entered by the user.
    pub fn generate_from_input(&mut self, input: &str) -> Result<&[ColorRecord], Error> {
        let count = parse_count(input).inspect_err(|err| warn!("{err}"))?;
        self.generate(count)
    }

    /// Returns `true` once colors were generated.
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// The generated colors.
    pub fn colors(&self) -> Result<&[ColorRecord], Error> {
        if self.colors.is_empty() {
            Err(Error::NothingGenerated)
        } else {
            Ok(&self.colors)
        }
    }

    /// The generated color at `index` (zero based).
    pub fn get(&self, index: usize) -> Result<&ColorRecord, Error> {
        let colors = self.colors()?;
        colors.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: colors.len(),
        })
    }

    /// The text to copy for the color at `index` in the given format.
    pub fn copy(&self, index: usize, format: Format) -> Result<String, Error> {
        self.get(index).map(|record| format.copy_text(record))
    }

    /// The text to copy for all the colors in all formats.
    pub fn copy_all(&self) -> Result<String, Error> {
        format::copy_all(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let spectrum = Spectrum::default();
        assert_eq!(spectrum.start(), Color::new(255, 0, 0));
        assert_eq!(spectrum.end(), Color::new(127, 0, 255));
        assert_eq!(spectrum.mode(), Mode::Linear);
        assert!(!spectrum.has_colors());
    }

    #[test]
    fn nothing_generated_yet() {
        let spectrum = Spectrum::default();
        assert_eq!(spectrum.colors(), Err(Error::NothingGenerated));
        assert_eq!(spectrum.copy(0, Format::Hex), Err(Error::NothingGenerated));
        assert_eq!(spectrum.copy_all(), Err(Error::NothingGenerated));
    }

    #[test]
    fn generate_replaces_colors() {
        let mut spectrum = Spectrum::default();
        assert_eq!(spectrum.generate(DEFAULT_COUNT).unwrap().len(), 22);
        assert_eq!(spectrum.generate_from_input("3").unwrap().len(), 3);
        assert_eq!(spectrum.colors().unwrap().len(), 3);
    }

    #[test]
    fn invalid_input_keeps_previous_colors() {
        let mut spectrum = Spectrum::default();
        spectrum.generate(5).unwrap();
        let before = spectrum.colors().unwrap().to_vec();

        for input in ["0", "-5", "abc"] {
            assert!(matches!(
                spectrum.generate_from_input(input),
                Err(Error::InvalidInput { .. })
            ));
        }
        assert!(matches!(
            spectrum.generate(0),
            Err(Error::InvalidInput { .. })
        ));

        assert_eq!(spectrum.colors().unwrap(), before.as_slice());
    }

    #[test]
    fn invalid_input_before_generating() {
        let mut spectrum = Spectrum::default();
        assert!(spectrum.generate_from_input("abc").is_err());
        assert_eq!(spectrum.colors(), Err(Error::NothingGenerated));
    }

    #[test]
    fn choices_apply_to_the_next_generation() {
        let mut spectrum = Spectrum::default();
        spectrum.set_start(Color::new(0, 0, 0));
        spectrum.set_end(Color::new(255, 255, 255));
        spectrum.set_mode(Mode::Circular);
        spectrum.generate(2).unwrap();

        assert_eq!(spectrum.copy(0, Format::Hex).unwrap(), "#000000");
        assert_eq!(spectrum.copy(1, Format::Rgb).unwrap(), "rgb(255, 255, 255)");
        assert_eq!(
            spectrum.copy(0, Format::Cmyk).unwrap(),
            "cmyk(0%, 0%, 0%, 100%)"
        );
    }

    #[test]
    fn copy_out_of_range() {
        let mut spectrum = Spectrum::default();
        spectrum.generate(2).unwrap();
        assert_eq!(
            spectrum.copy(2, Format::Hex),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn copy_all_starts_at_color_one() {
        let mut spectrum = Spectrum::default();
        spectrum.generate(1).unwrap();
        let text = spectrum.copy_all().unwrap();
        assert!(text.starts_with("Color 1:\nRGB: 255, 0, 0\nHEX: #ff0000\n"));
        assert!(!text.contains("Color 2:"));
    }
}
