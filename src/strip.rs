//! Layout of the spectrum strip: one equal-width segment per generated
//! color, side by side.

use euclid::default::{Box2D, Point2D};

use crate::Component;

/// The width of the strip when no usable width is known.
pub const DEFAULT_STRIP_WIDTH: Component = 800.0;

/// The height of the strip when no usable height is known.
pub const DEFAULT_STRIP_HEIGHT: Component = 40.0;

/// A segment of the strip.
pub type Segment = Box2D<Component>;

/// Split a `width` by `height` strip into `count` segments of equal width,
/// from left to right.
///
/// A width below one (e.g. a surface that is not laid out yet) falls back to
/// [`DEFAULT_STRIP_WIDTH`].
pub fn segments(count: usize, width: Component, height: Component) -> Vec<Segment> {
    if count == 0 {
        return Vec::new();
    }

    let width = if width < 1.0 {
        DEFAULT_STRIP_WIDTH
    } else {
        width
    };
    let segment_width = width / count as Component;

    (0..count)
        .map(|i| {
            Box2D::new(
                Point2D::new(i as Component * segment_width, 0.0),
                Point2D::new((i + 1) as Component * segment_width, height),
            )
        })
        .collect()
}

/// The index of the segment containing the horizontal position `x`, if any.
pub fn segment_at(count: usize, width: Component, x: Component) -> Option<usize> {
    if count == 0 || width < 1.0 || !(0.0..width).contains(&x) {
        return None;
    }
    let index = (x / width * count as Component) as usize;
    Some(index.min(count - 1))
}
