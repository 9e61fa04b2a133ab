use std::io::Cursor;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, RgbImage};
use crate::error::Result;

/// Largest per channel difference still counted as page background.
const BACKGROUND_TOLERANCE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Bounding box of everything drawn over a plain `background`, which on a
/// report page is the card container.
pub fn locate_card(screenshot: &RgbImage, background: [u8; 3]) -> Option<Region> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in screenshot.enumerate_pixels() {
        let is_background = pixel.0.iter()
            .zip(background.iter())
            .all(|(channel, expected)| channel.abs_diff(*expected) <= BACKGROUND_TOLERANCE);
        if is_background {
            continue;
        }

        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((left, top, right, bottom)) => (left.min(x), top.min(y), right.max(x), bottom.max(y)),
        });
    }

    bounds.map(|(left, top, right, bottom)| Region {
        x: left,
        y: top,
        width: right - left + 1,
        height: bottom - top + 1,
    })
}

/// Whether `region` reaches any edge of a `width` x `height` screenshot, in
/// which case the card was likely cut off by the viewport.
pub fn touches_edge(region: Region, width: u32, height: u32) -> bool {
    region.x == 0 || region.y == 0 || region.x + region.width >= width || region.y + region.height >= height
}

pub fn crop(screenshot: &DynamicImage, region: Region) -> DynamicImage {
    screenshot.crop_imm(region.x, region.y, region.width, region.height)
}

pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut jpeg = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)?;

    Ok(jpeg.into_inner())
}
