//! Generate the stops of a gradient between two colors.
//!
//! ```rust
//! use spectrum::{generate, Color, GradientRequest, Mode};
//! let (red, violet) = (Color::new(255, 0, 0), Color::new(127, 0, 255));
//! let request = GradientRequest::new(red, violet, 3, Mode::Linear);
//! let stops = generate(&request).unwrap();
//! assert_eq!(stops.len(), 3);
//! assert_eq!(stops[0].rgb, Color::new(255, 0, 0));
//! assert_eq!(stops[2].rgb, Color::new(127, 0, 255));
//! ```

use std::num::{IntErrorKind, ParseIntError};

use log::{debug, trace};

use crate::{
    color::{Color, Component},
    interpolate::{Interpolation, Mode},
    record::ColorRecord,
    Error,
};

/// Everything needed to generate a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientRequest {
    /// The color of the first stop.
    pub start: Color,
    /// The color of the last stop.
    pub end: Color,
    /// Number of stops to generate.
    pub count: usize,
    /// How the hue travels from start to end.
    pub mode: Mode,
}

impl GradientRequest {
    /// Create a new request.
    pub fn new(start: Color, end: Color, count: usize, mode: Mode) -> Self {
        Self {
            start,
            end,
            count,
            mode,
        }
    }

    /// Check that the request can be generated.
    pub fn validate(&self) -> Result<(), Error> {
        if self.count < 1 {
            return Err(Error::InvalidInput {
                value: self.count.to_string(),
                reason: "must be a positive number",
            });
        }
        Ok(())
    }

    /// The position of stop `index` between start (0) and end (1).
    fn ratio(&self, index: usize) -> Component {
        if self.count > 1 {
            index as Component / (self.count - 1) as Component
        } else {
            0.0
        }
    }

    fn interpolation(&self) -> Interpolation {
        self.start
            .to_hsv()
            .interpolate(&self.end.to_hsv(), self.mode)
    }

    /// Iterate over the stops of the gradient, in order. An invalid request
    /// yields nothing; use [`generate`] to have it rejected.
    pub fn stops(&self) -> impl Iterator<Item = ColorRecord> + '_ {
        let interpolation = self.interpolation();
        debug!(
            "hue travels {:.1}° ({})",
            interpolation.hue_span() * 360.0,
            interpolation.mode()
        );
        (0..self.count).map(move |index| {
            let hsv = interpolation.at(self.ratio(index));
            let record = ColorRecord::from_hsv(hsv);
            trace!("stop {index}: {hsv:?} -> {}", record.rgb);
            record
        })
    }
}

/// Generate the stops of the requested gradient.
///
/// Fails with [`Error::InvalidInput`] when fewer than one stop is requested,
/// in which case nothing is generated.
pub fn generate(request: &GradientRequest) -> Result<Vec<ColorRecord>, Error> {
    request.validate()?;

    debug!(
        "generating {} colors from {} to {} ({})",
        request.count,
        request.start.to_hex(),
        request.end.to_hex(),
        request.mode
    );

    Ok(request.stops().collect())
}

/// Parse the number of colors to generate, as entered by the user.
///
/// The input must be an integer of at least one, surrounding whitespace is
/// ignored. Single underscores may separate digits, as in `1_000`.
pub fn parse_count(input: &str) -> Result<usize, Error> {
    let invalid = |reason| Error::InvalidInput {
        value: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("is missing"));
    }

    let digits = trimmed.trim_start_matches(|c: char| c == '+' || c == '-');
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(invalid("is not an integer"));
    }

    let count = trimmed
        .replace('_', "")
        .parse::<i64>()
        .map_err(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => invalid("is too large"),
            IntErrorKind::NegOverflow => invalid("must be a positive number"),
            _ => invalid("is not an integer"),
        })?;
    if count < 1 {
        return Err(invalid("must be a positive number"));
    }

    usize::try_from(count).map_err(|_| invalid("is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const VIOLET: Color = Color::new(127, 0, 255);

    fn rgb(records: &[ColorRecord]) -> Vec<Color> {
        records.iter().map(|r| r.rgb).collect()
    }

    #[test]
    fn red_to_violet() {
        let request = GradientRequest::new(RED, VIOLET, 3, Mode::Linear);
        let records = generate(&request).unwrap();
        assert_eq!(rgb(&records), vec![RED, Color::new(0, 255, 63), VIOLET]);
        assert_eq!(records[1].hsv.to_string(), "134.9°, 100.0%, 100.0%");
        assert_eq!(records[1].hsl.to_string(), "134.9°, 100.0%, 50.0%");
        assert_eq!(records[1].cmyk.to_string(), "100.0%, 0.0%, 75.3%, 0.0%");
        assert_eq!(records[2].hsv.to_string(), "269.9°, 100.0%, 100.0%");
    }

    #[test]
    fn red_to_violet_circular() {
        let request = GradientRequest::new(RED, VIOLET, 3, Mode::Circular);
        let records = generate(&request).unwrap();
        assert_eq!(rgb(&records), vec![RED, Color::new(255, 0, 191), VIOLET]);
        assert_eq!(records[1].hsv.to_string(), "314.9°, 100.0%, 100.0%");
        assert_eq!(records[1].hsl.to_string(), "314.9°, 100.0%, 50.0%");
        assert_eq!(records[1].cmyk.to_string(), "0.0%, 100.0%, 25.1%, 0.0%");
    }

    #[test]
    fn end_points_are_reproduced() {
        let colors = [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(12, 200, 99),
            Color::new(250, 3, 180),
            Color::new(1, 2, 3),
            Color::new(128, 128, 0),
        ];

        let close = |a: Color, b: Color| {
            a.red.abs_diff(b.red) <= 1
                && a.green.abs_diff(b.green) <= 1
                && a.blue.abs_diff(b.blue) <= 1
        };

        for start in colors {
            for end in colors {
                for mode in Mode::ALL {
                    for count in [2, 5, 22] {
                        let request = GradientRequest::new(start, end, count, mode);
                        let records = generate(&request).unwrap();
                        assert_eq!(records.len(), count);
                        assert!(close(records[0].rgb, start), "{request:?}");
                        assert!(close(records[count - 1].rgb, end), "{request:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn single_stop_is_the_start_color() {
        let request = GradientRequest::new(RED, VIOLET, 1, Mode::Circular);
        let records = generate(&request).unwrap();
        assert_eq!(rgb(&records), vec![RED]);
    }

    #[test]
    fn generation_is_idempotent() {
        let request = GradientRequest::new(RED, VIOLET, 22, Mode::Circular);
        assert_eq!(generate(&request).unwrap(), generate(&request).unwrap());
    }

    #[test]
    fn zero_stops_are_rejected() {
        let request = GradientRequest::new(RED, VIOLET, 0, Mode::Linear);
        assert!(matches!(
            generate(&request),
            Err(Error::InvalidInput { ref value, .. }) if value == "0"
        ));
    }

    #[test]
    fn parse_counts() {
        assert_eq!(parse_count("22"), Ok(22));
        assert_eq!(parse_count(" 1 "), Ok(1));
        assert_eq!(parse_count("+5"), Ok(5));
        assert_eq!(parse_count("1_000"), Ok(1000));
        assert_eq!(parse_count(" 1_0_0 "), Ok(100));

        let inputs = ["0", "-5", "abc", "", "  ", "2.5", "_1", "1_", "1__0", "+_1", "--1"];
        for input in inputs {
            assert!(
                matches!(
                    parse_count(input),
                    Err(Error::InvalidInput { ref value, .. }) if value == input
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn huge_counts_are_too_large() {
        let err = parse_count("99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { reason: "is too large", .. }));
    }

    #[test]
    fn error_message_names_the_value() {
        let err = parse_count("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: \"abc\" is not an integer");
    }
}
