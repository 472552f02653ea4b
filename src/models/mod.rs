//! Models are structs that represent a color in one of the notations derived
//! from an 8-bit [`Color`]. All of their components are normalized.

use crate::color::Color;

mod cmyk;
mod hsl;
mod hsv;

pub use cmyk::*;
pub use hsl::*;
pub use hsv::*;

/// A trait implemented for color models that can be converted back to an
/// 8-bit [`Color`].
pub trait Model {
    /// Convert the model to an 8-bit [`Color`], truncating each channel.
    fn to_color(&self) -> Color;
}
