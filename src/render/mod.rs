//! Low-level rasterization: pixel targets, depth storage, lines and triangles.
//!
//! The rasterizers never own the buffers they draw into. They write through the
//! [`PixelSink`] and [`DepthStore`] traits so the same code drives the owning
//! [`FrameBuffer`]/[`DepthBuffer`] pair and the row bands used by the parallel pass.

pub mod barycentric;
pub mod depth;
pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use depth::{DepthBand, DepthBuffer};
pub use framebuffer::{FrameBand, FrameBuffer};
pub use line::{draw_line_bresenham, draw_line_wu, LineAlgorithm};
pub use rasterizer::{fill_triangle, fill_triangle_unbuffered, ScreenTriangle};

use crate::colors::Color;

/// Inclusive pixel rectangle a target accepts writes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl ClipRect {
    /// The whole `[0, width-1] x [0, height-1]` image.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width as i32 - 1,
            max_y: height as i32 - 1,
        }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Destination image for rasterized pixels.
///
/// Coordinates are global image coordinates. Writes outside [`PixelSink::clip_rect`]
/// must be silently dropped; the line rasterizers rely on this for endpoint overshoot.
pub trait PixelSink {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Region of the image this sink may write. Defaults to the full image.
    fn clip_rect(&self) -> ClipRect {
        ClipRect::full(self.width(), self.height())
    }
}

/// Per-pixel depth storage consulted by the triangle rasterizer.
///
/// Larger values are nearer to the viewer. Callers only address pixels inside the
/// clip rectangle of the [`PixelSink`] they pair the store with.
pub trait DepthStore {
    fn depth(&self, x: i32, y: i32) -> f64;

    fn set_depth(&mut self, x: i32, y: i32, depth: f64);
}
