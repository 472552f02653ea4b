//! Conversions between the sRGB components of a [`Color`] and the derived
//! notations.
//!
//! Hues are fractions of a full turn in `[0, 1)`. A color without chroma
//! (any gray) gets a hue and saturation of zero.
//!
//! ```rust
//! use spectrum::{Color, Model};
//! let hsv = Color::new(255, 0, 0).to_hsv();
//! assert_eq!((hsv.hue, hsv.saturation, hsv.value), (0.0, 1.0, 1.0));
//! assert_eq!(hsv.to_color(), Color::new(255, 0, 0));
//! ```

use crate::color::{Color, Components};
use crate::models::{Cmyk, Hsl, Hsv};

impl Color {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from_srgb(&self.to_components())
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_srgb(&self.to_components())
    }

    /// Convert this color to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        if self.is_black() {
            // Avoids a division by zero below.
            return Cmyk::BLACK;
        }
        util::rgb_to_cmyk(&self.to_components())
    }
}

impl Hsv {
    /// Convert normalized sRGB components to the HSV notation.
    pub fn from_srgb(rgb: &Components) -> Self {
        util::rgb_to_hsv(rgb).into()
    }

    /// Convert this color from the HSV notation to normalized sRGB
    /// components.
    pub fn to_srgb(&self) -> Components {
        util::hsv_to_rgb(&self.to_components())
    }
}

impl Hsl {
    /// Convert normalized sRGB components to the HSL notation.
    pub fn from_srgb(rgb: &Components) -> Self {
        util::rgb_to_hsl(rgb).into()
    }

    /// Convert this color from the HSL notation to normalized sRGB
    /// components.
    pub fn to_srgb(&self) -> Components {
        util::hsl_to_rgb(&self.to_components())
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        models::Cmyk,
    };

    const ONE_THIRD: Component = 1.0 / 3.0;
    const ONE_SIXTH: Component = 1.0 / 6.0;
    const TWO_THIRD: Component = 2.0 / 3.0;

    /// Calculate the hue of the given RGB components. `None` if there is no
    /// chroma.
    fn rgb_to_hue(from: &Components, min: Component, max: Component) -> Option<Component> {
        let Components(red, green, blue) = *from;

        if min == max {
            return None;
        }

        let delta = max - min;
        let rc = (max - red) / delta;
        let gc = (max - green) / delta;
        let bc = (max - blue) / delta;

        let hue = if red == max {
            bc - gc
        } else if green == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Some((hue / 6.0).rem_euclid(1.0))
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let max = from.max();
        let min = from.min();

        match rgb_to_hue(from, min, max) {
            Some(hue) => Components(hue, (max - min) / max, max),
            None => Components(0.0, 0.0, max),
        }
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        if saturation == 0.0 {
            return Components(value, value, value);
        }

        let sector = (hue * 6.0).trunc();
        let f = hue * 6.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        match (sector as i64).rem_euclid(6) {
            0 => Components(value, t, p),
            1 => Components(q, value, p),
            2 => Components(p, value, t),
            3 => Components(p, q, value),
            4 => Components(t, p, value),
            _ => Components(value, p, q),
        }
    }

    /// Convert from RGB notation to HSL notation, with the components ordered
    /// hue, saturation, lightness.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let max = from.max();
        let min = from.min();

        let sum = max + min;
        let lightness = sum / 2.0;

        let Some(hue) = rgb_to_hue(from, min, max) else {
            return Components(0.0, 0.0, lightness);
        };

        let delta = max - min;
        let saturation = if lightness <= 0.5 {
            delta / sum
        } else {
            delta / (2.0 - max - min)
        };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;

        let channel = |hue: Component| {
            let hue = hue.rem_euclid(1.0);
            if hue < ONE_SIXTH {
                m1 + (m2 - m1) * hue * 6.0
            } else if hue < 0.5 {
                m2
            } else if hue < TWO_THIRD {
                m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
            } else {
                m1
            }
        };

        Components(
            channel(hue + ONE_THIRD),
            channel(hue),
            channel(hue - ONE_THIRD),
        )
    }

    /// Convert from RGB notation to CMYK notation. The key is computed first
    /// and the other inks are normalized by it, so pure black must be handled
    /// by the caller.
    pub fn rgb_to_cmyk(from: &Components) -> Cmyk {
        let Components(red, green, blue) = *from;

        let key = 1.0 - from.max();
        let white = 1.0 - key;

        Cmyk::new(
            (1.0 - red - key) / white,
            (1.0 - green - key) / white,
            (1.0 - blue - key) / white,
            key,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::Model;

    #[test]
    fn primaries_to_hsv() {
        #[rustfmt::skip]
        let tests = [
            (Color::new(255, 0, 0), 0.0, 1.0, 1.0),
            (Color::new(0, 255, 0), 1.0 / 3.0, 1.0, 1.0),
            (Color::new(0, 0, 255), 2.0 / 3.0, 1.0, 1.0),
            (Color::new(255, 255, 255), 0.0, 0.0, 1.0),
            (Color::new(0, 0, 0), 0.0, 0.0, 0.0),
        ];

        for (color, hue, saturation, value) in tests {
            let hsv = color.to_hsv();
            assert_component_eq!(hsv.hue, hue);
            assert_component_eq!(hsv.saturation, saturation);
            assert_component_eq!(hsv.value, value);
        }
    }

    #[test]
    fn violet_to_hsv() {
        // rgb(127, 0, 255)
        let hsv = Color::new(127, 0, 255).to_hsv();
        assert_component_eq!(hsv.hue, 0.7496732026143791);
        assert_component_eq!(hsv.saturation, 1.0);
        assert_component_eq!(hsv.value, 1.0);
    }

    #[test]
    fn hue_wraps_into_unit_range() {
        // Red is the max and blue > green, so the raw hue is negative.
        let hsv = Color::new(255, 0, 128).to_hsv();
        assert!(hsv.hue > 0.9 && hsv.hue < 1.0);
    }

    #[test]
    fn chocolate_to_hsl() {
        // rgb(210, 105, 30) is hsl(25deg 75% 47.06%).
        let hsl = Color::new(210, 105, 30).to_hsl();
        assert_component_eq!(hsl.hue * 360.0, 25.0);
        assert_component_eq!(hsl.saturation, 0.75);
        assert_component_eq!(hsl.lightness, 0.470588);
    }

    #[test]
    fn light_color_to_hsl() {
        // Lightness above one half uses the other saturation formula.
        let hsl = Color::new(255, 128, 128).to_hsl();
        assert_component_eq!(hsl.hue, 0.0);
        assert_component_eq!(hsl.saturation, 1.0);
        assert_component_eq!(hsl.lightness, 0.750980);
    }

    #[test]
    fn cmyk_of_black_is_key_only() {
        assert_eq!(Color::new(0, 0, 0).to_cmyk(), Cmyk::BLACK);
    }

    #[test]
    fn cmyk_of_colors() {
        let cmyk = Color::new(255, 0, 0).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 1.0, 1.0, 0.0));

        let cmyk = Color::new(255, 255, 255).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));

        // rgb(127, 0, 255)
        let cmyk = Color::new(127, 0, 255).to_cmyk();
        assert_component_eq!(cmyk.cyan, 0.501961);
        assert_component_eq!(cmyk.magenta, 1.0);
        assert_component_eq!(cmyk.yellow, 0.0);
        assert_component_eq!(cmyk.key, 0.0);

        // rgb(0, 0, 128)
        let cmyk = Color::new(0, 0, 128).to_cmyk();
        assert_component_eq!(cmyk.cyan, 1.0);
        assert_component_eq!(cmyk.magenta, 1.0);
        assert_component_eq!(cmyk.yellow, 0.0);
        assert_component_eq!(cmyk.key, 0.498039);
    }

    #[test]
    fn every_notation_round_trips() {
        for red in (0..=255).step_by(15) {
            for green in (0..=255).step_by(17) {
                for blue in (0..=255).step_by(51) {
                    let color = Color::new(red, green, blue);
                    for back in [
                        color.to_hsv().to_color(),
                        color.to_hsl().to_color(),
                        color.to_cmyk().to_color(),
                    ] {
                        assert!(
                            back.red.abs_diff(red) <= 1
                                && back.green.abs_diff(green) <= 1
                                && back.blue.abs_diff(blue) <= 1,
                            "{color:?} came back as {back:?}"
                        );
                    }
                }
            }
        }
    }
}
