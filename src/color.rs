//! A [`Color`] is the canonical 8-bit sRGB triple every other notation is
//! derived from.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A 64-bit floating point value that all normalized components are stored
/// as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

/// A color as three 8-bit channels in the sRGB color space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

/// The text color that stays legible on top of a background [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextColor {
    /// Dark text, for light backgrounds.
    Black,
    /// Light text, for dark backgrounds.
    White,
}

impl TextColor {
    /// The 8-bit color of the text.
    pub fn to_color(self) -> Color {
        match self {
            TextColor::Black => Color::new(0, 0, 0),
            TextColor::White => Color::new(255, 255, 255),
        }
    }
}

impl Color {
    /// Create a new color from its red, green and blue channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from normalized components, truncating each scaled
    /// channel towards zero.
    ///
    /// Components outside `[0, 1]` saturate at the channel limits.
    pub fn from_components_truncated(components: &Components) -> Self {
        // `as u8` truncates and saturates.
        let channel = |c: Component| (c * 255.0) as u8;
        Self::new(
            channel(components.0),
            channel(components.1),
            channel(components.2),
        )
    }

    /// The channels normalized to `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        )
    }

    /// Returns `true` when all channels are zero.
    pub fn is_black(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// The color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Relative luminance per ITU-R BT.709.
    pub fn luminance(&self) -> Component {
        let Components(r, g, b) = self.to_components();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Pick black or white text, whichever is more legible on this color.
    pub fn contrasting_text_color(&self) -> TextColor {
        if self.luminance() > 0.4 {
            TextColor::Black
        } else {
            TextColor::White
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#rgb`, `#rrggbb` (the `#` is optional), `r, g, b` or
    /// `rgb(r, g, b)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if input.is_empty() {
            return Err(invalid());
        }

        if let Some(inner) = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_channels(inner).ok_or_else(invalid);
        }

        if input.contains(',') {
            return parse_channels(input).ok_or_else(invalid);
        }

        parse_hex(input.strip_prefix('#').unwrap_or(input)).ok_or_else(invalid)
    }
}

fn parse_channels(input: &str) -> Option<Color> {
    let mut channels = input.split(',').map(|c| c.trim().parse::<u8>());
    let red = channels.next()?.ok()?;
    let green = channels.next()?.ok()?;
    let blue = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some(Color::new(red, green, blue))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        // #RGB
        3 => {
            let nibble = |i: usize| byte(&hex[i..i + 1]).map(|n| n * 17);
            Some(Color::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        // #RRGGBB
        6 => Some(Color::new(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        _ => None,
    }
}
