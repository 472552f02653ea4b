//! spectrum generates gradients between two colors and writes every stop in
//! the RGB, hex, HSV, HSL and CMYK notations.
//!
//! ```rust
//! use spectrum::prelude::*;
//!
//! let mut spectrum = Spectrum::new(Color::new(255, 0, 0), Color::new(0, 0, 255), Mode::Circular);
//! spectrum.generate(5).unwrap();
//! assert_eq!(spectrum.copy(0, Format::Hex).unwrap(), "#ff0000");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod gradient;
mod interpolate;
mod models;
mod record;
mod spectrum;
pub mod strip;

pub use color::{Color, Component, Components, TextColor};
pub use error::Error;
pub use format::{copy_all, Format, Formats};
pub use gradient::{generate, parse_count, GradientRequest};
pub use interpolate::{Interpolation, Mode};
pub use models::{Cmyk, Hsl, Hsv, Model};
pub use record::{CmykReading, ColorRecord, HslReading, HsvReading, Tenths};
pub use spectrum::{Spectrum, DEFAULT_COUNT, DEFAULT_END, DEFAULT_START};

/// The types needed to generate and present a gradient.
pub mod prelude {
    pub use crate::{Color, ColorRecord, Format, Formats, GradientRequest, Mode, Spectrum};
}
