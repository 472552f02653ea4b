//! Model a color with the HSL notation in the sRGB color space.

use crate::color::{Color, Component};
use crate::models::Model;

spectrum_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, as a fraction of a full turn in
        /// `[0, 1)`.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Model for Hsl {
    fn to_color(&self) -> Color {
        Color::from_components_truncated(&self.to_srgb())
    }
}
