use thiserror::Error;

/// Errors returned by gradient generation and by operations on the generated
/// colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested number of colors is missing, not an integer or less than
    /// one.
    #[error("Invalid input: {value:?} {reason}")]
    InvalidInput {
        /// The offending input, as the user entered it.
        value: String,
        /// Why the input was rejected.
        reason: &'static str,
    },

    /// An operation needs generated colors but nothing was generated yet.
    #[error("Generate colors first")]
    NothingGenerated,

    /// A color index outside of the generated sequence.
    #[error("Color index {index} is out of range, {len} colors were generated")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of generated colors.
        len: usize,
    },

    /// A string that does not name an interpolation mode.
    #[error("Invalid mode: {0:?}, expected \"linear\" or \"circular\"")]
    InvalidMode(String),

    /// A string that does not name a color format.
    #[error("Invalid format: {0:?}, expected one of RGB, HEX, HSV, HSL, CMYK")]
    InvalidFormat(String),

    /// A string that could not be parsed as a color.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}
