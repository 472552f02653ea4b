//! Model a color with the CMYK notation.

use crate::color::{Color, Component, Components};
use crate::models::Model;

/// A color specified with cyan, magenta, yellow and key (black) components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component of the color.
    pub cyan: Component,
    /// The magenta component of the color.
    pub magenta: Component,
    /// The yellow component of the color.
    pub yellow: Component,
    /// The key (black) component of the color.
    pub key: Component,
}

impl Cmyk {
    /// Create a new color with CMYK components.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Pure black: no ink apart from the key.
    pub const BLACK: Self = Self {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        key: 1.0,
    };
}

impl Model for Cmyk {
    fn to_color(&self) -> Color {
        let white = 1.0 - self.key;
        Color::from_components_truncated(&Components(
            (1.0 - self.cyan) * white,
            (1.0 - self.magenta) * white,
            (1.0 - self.yellow) * white,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_to_color() {
        assert_eq!(Cmyk::BLACK.to_color(), Color::new(0, 0, 0));
    }

    #[test]
    fn primaries_to_color() {
        assert_eq!(Cmyk::new(0.0, 1.0, 1.0, 0.0).to_color(), Color::new(255, 0, 0));
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 0.0).to_color(), Color::new(255, 255, 255));
    }
}
