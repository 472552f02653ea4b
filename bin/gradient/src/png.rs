use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use spectrum::{strip, ColorRecord, Component};

/// Paint the spectrum strip: one equal-width band per record.
pub fn strip_image(records: &[ColorRecord], width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);

    for (x, _, pixel) in img.enumerate_pixels_mut() {
        // Sample at the center of the pixel.
        let center = Component::from(x) + 0.5;
        if let Some(index) = strip::segment_at(records.len(), Component::from(width), center) {
            *pixel = Rgb(records[index].rgb.into());
        }
    }

    img
}

/// Write the spectrum strip to a PNG file at `path`.
pub fn write_strip(records: &[ColorRecord], width: u32, height: u32, path: &Path) -> Result<()> {
    strip_image(records, width, height)
        .save(path)
        .with_context(|| format!("could not write image to {}", path.display()))
}
