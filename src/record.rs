//! A [`ColorRecord`] holds one gradient stop in every notation, with the
//! derived notations rounded for display.

use std::fmt;

use crate::{
    color::{Color, Component},
    models::{Cmyk, Hsl, Hsv},
};

/// A value rounded to one decimal place.
///
/// Exact readings created with [`Tenths::whole`] are displayed without the
/// decimal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Tenths {
    value: Component,
    whole: bool,
}

impl Tenths {
    /// Round `value` to the nearest tenth.
    pub fn new(value: Component) -> Self {
        // Formatting with a precision rounds the exact binary value, which
        // `(value * 10.0).round() / 10.0` does not.
        let rounded = format!("{value:.1}").parse().unwrap_or(value);
        Self {
            value: rounded,
            whole: false,
        }
    }

    /// An exact whole number, displayed without a decimal.
    pub const fn whole(value: Component) -> Self {
        Self {
            value,
            whole: true,
        }
    }

    /// The rounded value.
    pub fn value(self) -> Component {
        self.value
    }

    /// Whether the value is displayed without a decimal.
    pub fn is_whole(self) -> bool {
        self.whole
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole {
            write!(f, "{:.0}", self.value)
        } else {
            write!(f, "{:.1}", self.value)
        }
    }
}

/// HSV reading of a color: hue in degrees, saturation and value in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvReading {
    /// Hue in degrees.
    pub hue: Tenths,
    /// Saturation in percent.
    pub saturation: Tenths,
    /// Value in percent.
    pub value: Tenths,
}

impl From<Hsv> for HsvReading {
    fn from(value: Hsv) -> Self {
        Self {
            hue: Tenths::new(value.hue * 360.0),
            saturation: Tenths::new(value.saturation * 100.0),
            value: Tenths::new(value.value * 100.0),
        }
    }
}

impl fmt::Display for HsvReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.hue, self.saturation, self.value)
    }
}

/// HSL reading of a color: hue in degrees, saturation and lightness in
/// percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslReading {
    /// Hue in degrees.
    pub hue: Tenths,
    /// Saturation in percent.
    pub saturation: Tenths,
    /// Lightness in percent.
    pub lightness: Tenths,
}

impl From<Hsl> for HslReading {
    fn from(value: Hsl) -> Self {
        Self {
            hue: Tenths::new(value.hue * 360.0),
            saturation: Tenths::new(value.saturation * 100.0),
            lightness: Tenths::new(value.lightness * 100.0),
        }
    }
}

impl fmt::Display for HslReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.hue, self.saturation, self.lightness)
    }
}

/// CMYK reading of a color, every ink in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmykReading {
    /// Cyan in percent.
    pub cyan: Tenths,
    /// Magenta in percent.
    pub magenta: Tenths,
    /// Yellow in percent.
    pub yellow: Tenths,
    /// Key (black) in percent.
    pub key: Tenths,
}

impl CmykReading {
    /// The reading of pure black, which is not computed and so is not
    /// rounded: `0%, 0%, 0%, 100%`.
    pub const BLACK: Self = Self {
        cyan: Tenths::whole(0.0),
        magenta: Tenths::whole(0.0),
        yellow: Tenths::whole(0.0),
        key: Tenths::whole(100.0),
    };
}

impl From<Color> for CmykReading {
    fn from(value: Color) -> Self {
        if value.is_black() {
            Self::BLACK
        } else {
            value.to_cmyk().into()
        }
    }
}

impl From<Cmyk> for CmykReading {
    fn from(value: Cmyk) -> Self {
        Self {
            cyan: Tenths::new(value.cyan * 100.0),
            magenta: Tenths::new(value.magenta * 100.0),
            yellow: Tenths::new(value.yellow * 100.0),
            key: Tenths::new(value.key * 100.0),
        }
    }
}

impl fmt::Display for CmykReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%, {}%, {}%, {}%",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

/// One stop of a generated gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRecord {
    /// The 8-bit color of the stop. The hex notation is derived from it.
    pub rgb: Color,
    /// The interpolated HSV color the stop was created from.
    pub hsv: HsvReading,
    /// HSL of the stop, derived before the channels were truncated to 8 bits.
    pub hsl: HslReading,
    /// CMYK of the 8-bit color.
    pub cmyk: CmykReading,
}

impl ColorRecord {
    /// Create the record of a gradient stop from its interpolated HSV color.
    ///
    /// The RGB channels are truncated, while the HSV, HSL and CMYK readings
    /// are rounded to one decimal.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let srgb = hsv.to_srgb();
        let rgb = Color::from_components_truncated(&srgb);

        Self {
            rgb,
            hsv: hsv.into(),
            hsl: Hsl::from_srgb(&srgb).into(),
            cmyk: rgb.into(),
        }
    }

    /// The 8-bit color as a `#rrggbb` string.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}
