//! Image encoding for finished frames.
//!
//! The output format is chosen from the file extension by the `image` crate
//! (`.png`, `.tga`, `.bmp`, ...). Alpha is dropped; frames are written as RGB.

use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use log::info;

use crate::render::{FrameBuffer, PixelSink};

/// Convert a frame to an RGB image, row 0 first.
pub fn to_rgb_image(frame: &FrameBuffer) -> RgbImage {
    let width = frame.width();
    RgbImage::from_fn(frame.width() as u32, frame.height() as u32, |x, y| {
        let c = frame.pixels()[y as usize * width + x as usize];
        Rgb([c.r, c.g, c.b])
    })
}

/// Convert a frame to an RGBA image, row 0 first.
pub fn to_rgba_image(frame: &FrameBuffer) -> RgbaImage {
    let width = frame.width();
    RgbaImage::from_fn(frame.width() as u32, frame.height() as u32, |x, y| {
        let c = frame.pixels()[y as usize * width + x as usize];
        Rgba([c.r, c.g, c.b, c.a])
    })
}

/// Write `frame` to `path` as an RGB image.
pub fn save_frame<P: AsRef<Path>>(frame: &FrameBuffer, path: P) -> Result<(), image::ImageError> {
    let path = path.as_ref();
    to_rgb_image(frame).save(path)?;
    info!(
        "wrote {}x{} image to {}",
        frame.width(),
        frame.height(),
        path.display()
    );
    Ok(())
}
