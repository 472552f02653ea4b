use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::{models::Hsv, Component, Error};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// How the hue travels around the color wheel between two colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Interpolate the hue numerically. Depending on the hues this might take
    /// the long way around the wheel.
    #[default]
    Linear,
    /// Interpolate the hue along the shortest arc of the wheel.
    Circular,
}

impl Mode {
    /// All the modes, in the order they are presented to the user.
    pub const ALL: [Mode; 2] = [Mode::Linear, Mode::Circular];

    /// The lowercase name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Linear => "linear",
            Mode::Circular => "circular",
        }
    }

    /// Adjust the two hues so that interpolating numerically between them
    /// follows this mode.
    fn fix_up_hues(self, start: Component, end: Component) -> (Component, Component) {
        match self {
            Mode::Linear => (start, end),
            Mode::Circular => {
                if (end - start).abs() > 0.5 {
                    if start < end {
                        (start + 1.0, end)
                    } else {
                        (start, end + 1.0)
                    }
                } else {
                    (start, end)
                }
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

/// An interpolation between two colors in the HSV notation.
#[derive(Clone, Debug)]
pub struct Interpolation {
    left: Hsv,
    right: Hsv,
    mode: Mode,
}

impl Interpolation {
    /// The mode the hue is interpolated with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The distance the hue travels from the left to the right color, as a
    /// fraction of a full turn.
    pub fn hue_span(&self) -> Component {
        (self.right.hue - self.left.hue).abs()
    }

    /// Return the color at `t` between the two colors, where 0 is the left
    /// color and 1 the right color. The hue is wrapped into `[0, 1)`.
    pub fn at(&self, t: Component) -> Hsv {
        Hsv::new(
            lerp(self.left.hue, self.right.hue, t).rem_euclid(1.0),
            lerp(self.left.saturation, self.right.saturation, t),
            lerp(self.left.value, self.right.value, t),
        )
    }
}

impl Hsv {
    /// Set up an interpolation from this color to another, with the hue
    /// following the given mode.
    pub fn interpolate(&self, other: &Self, mode: Mode) -> Interpolation {
        let (left_hue, right_hue) = mode.fix_up_hues(self.hue, other.hue);

        Interpolation {
            left: Hsv::new(left_hue, self.saturation, self.value),
            right: Hsv::new(right_hue, other.saturation, other.value),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic() {
        let left = Hsv::new(0.1, 0.2, 0.3);
        let right = Hsv::new(0.5, 0.6, 0.7);
        let mixed = left.interpolate(&right, Mode::Linear).at(0.5);
        assert_component_eq!(mixed.hue, 0.3);
        assert_component_eq!(mixed.saturation, 0.4);
        assert_component_eq!(mixed.value, 0.5);
    }

    #[test]
    fn end_points() {
        let left = Hsv::new(0.1, 0.2, 0.3);
        let right = Hsv::new(0.9, 0.6, 0.7);
        for mode in Mode::ALL {
            let interp = left.interpolate(&right, mode);
            let start = interp.at(0.0);
            let end = interp.at(1.0);
            assert_component_eq!(start.hue, 0.1);
            assert_component_eq!(start.saturation, 0.2);
            assert_component_eq!(end.hue, 0.9);
            assert_component_eq!(end.value, 0.7);
        }
    }

    #[test]
    fn linear_takes_the_long_way() {
        let left = Hsv::new(0.1, 1.0, 1.0);
        let right = Hsv::new(0.9, 1.0, 1.0);
        let interp = left.interpolate(&right, Mode::Linear);
        assert_component_eq!(interp.hue_span(), 0.8);
        assert_component_eq!(interp.at(0.5).hue, 0.5);
    }

    #[test]
    fn circular_takes_the_short_way() {
        let left = Hsv::new(0.1, 1.0, 1.0);
        let right = Hsv::new(0.9, 1.0, 1.0);
        let interp = left.interpolate(&right, Mode::Circular);
        assert_component_eq!(interp.hue_span(), 0.2);
        // Passes through red.
        assert_component_eq!(interp.at(0.5).hue, 0.0);
        assert_component_eq!(interp.at(0.25).hue, 0.05);

        // Same in the other direction.
        let interp = right.interpolate(&left, Mode::Circular);
        assert_component_eq!(interp.hue_span(), 0.2);
        assert_component_eq!(interp.at(0.25).hue, 0.95);
    }

    #[test]
    fn circular_span_never_exceeds_half_a_turn() {
        for a in 0..20 {
            for b in 0..20 {
                let left = Hsv::new(a as Component / 20.0, 1.0, 1.0);
                let right = Hsv::new(b as Component / 20.0, 1.0, 1.0);
                let interp = left.interpolate(&right, Mode::Circular);
                assert!(interp.hue_span() <= 0.5);
            }
        }
    }

    #[test]
    fn wrapped_hues_stay_in_range() {
        let left = Hsv::new(0.8, 1.0, 1.0);
        let right = Hsv::new(0.2, 1.0, 1.0);
        let interp = left.interpolate(&right, Mode::Circular);
        for i in 0..=10 {
            let hue = interp.at(i as Component / 10.0).hue;
            assert!((0.0..1.0).contains(&hue), "hue {hue} out of range");
        }
    }

    #[test]
    fn parse_mode() {
        assert_eq!("linear".parse::<Mode>(), Ok(Mode::Linear));
        assert_eq!(" Circular ".parse::<Mode>(), Ok(Mode::Circular));
        assert_eq!(
            "spiral".parse::<Mode>(),
            Err(Error::InvalidMode("spiral".to_string()))
        );
        assert_eq!(Mode::default(), Mode::Linear);
        assert_eq!(Mode::Circular.to_string(), "circular");
    }
}
