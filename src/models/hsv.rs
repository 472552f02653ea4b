//! Model a color with the HSV notation in the sRGB color space.

use crate::color::{Color, Component};
use crate::models::Model;

spectrum_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, as a fraction of a full turn in
        /// `[0, 1)`.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
    }
}

impl Model for Hsv {
    fn to_color(&self) -> Color {
        Color::from_components_truncated(&self.to_srgb())
    }
}
