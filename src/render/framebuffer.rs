//! Color buffers the rasterizers draw into.
//!
//! [`FrameBuffer`] owns the pixels of one frame. [`FrameBand`] is a borrowed view over
//! a horizontal strip of its rows so that disjoint strips can be rasterized on
//! separate threads.

use super::depth::{DepthBand, DepthBuffer};
use super::{ClipRect, PixelSink};
use crate::colors::Color;

/// An owned RGBA image, row-major, with row 0 at the top of memory.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            pixels: vec![background; width * height],
            width,
            height,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            Some(self.pixels[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mirror the image top to bottom.
    pub fn flip_vertically(&mut self) {
        let width = self.width;
        for y in 0..self.height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((self.height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    /// Split into views of `rows` rows each; the last band may be shorter.
    pub fn bands_mut(&mut self, rows: usize) -> impl Iterator<Item = FrameBand<'_>> {
        let rows = rows.max(1);
        let width = self.width;
        let height = self.height;
        self.pixels
            .chunks_mut((rows * width).max(1))
            .enumerate()
            .map(move |(i, pixels)| FrameBand {
                pixels,
                width,
                height,
                first_row: i * rows,
            })
    }

    /// Pair up color and depth bands of `rows` rows each. Together the pairs cover
    /// the image exactly once.
    pub fn split_bands<'a>(
        &'a mut self,
        depth: &'a mut DepthBuffer,
        rows: usize,
    ) -> Vec<(FrameBand<'a>, DepthBand<'a>)> {
        debug_assert_eq!(
            (self.width, self.height),
            (depth.width(), depth.height()),
            "Depth buffer size doesn't match frame buffer"
        );
        self.bands_mut(rows).zip(depth.bands_mut(rows)).collect()
    }
}

impl PixelSink for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }
}

/// A mutable view over rows `first_row..first_row + rows()` of a frame.
///
/// Coordinates stay global: writes to rows outside the band are dropped, which is
/// what lets every band replay the whole face list independently.
pub struct FrameBand<'a> {
    pixels: &'a mut [Color],
    width: usize,
    height: usize,
    first_row: usize,
}

impl FrameBand<'_> {
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn rows(&self) -> usize {
        self.pixels.len() / self.width.max(1)
    }
}

impl PixelSink for FrameBand<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.clip_rect().contains(x, y) {
            let i = (y as usize - self.first_row) * self.width + x as usize;
            self.pixels[i] = color;
        }
    }

    fn clip_rect(&self) -> ClipRect {
        ClipRect {
            min_x: 0,
            min_y: self.first_row as i32,
            max_x: self.width as i32 - 1,
            max_y: (self.first_row + self.rows()) as i32 - 1,
        }
    }
}
