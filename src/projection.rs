//! World-to-screen viewport mapping.
//!
//! The mesh is assumed to be normalized into the `[-1, 1]` cube already; there is
//! no camera or perspective transform. Each of x and y is mapped from `[-1, 1]`
//! onto `[0, dimension]` and depth passes through untouched, staying in the same
//! linear space as world z.

use crate::math::{Vec2f, Vec3f};

/// Target image dimensions for the viewport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Maps `v` to sub-pixel screen coordinates, keeping depth.
    pub fn to_viewport(&self, v: Vec3f) -> Vec3f {
        Vec3f::new(
            (v.x + 1.0) * self.width as f64 / 2.0,
            (v.y + 1.0) * self.height as f64 / 2.0,
            v.z,
        )
    }

    /// Maps `v` to a screen point: x and y rounded to the nearest pixel (ties
    /// round up), depth unchanged.
    pub fn to_screen(&self, v: Vec3f) -> Vec3f {
        let p = self.to_viewport(v);
        Vec3f::new((p.x + 0.5).floor(), (p.y + 0.5).floor(), p.z)
    }

    /// Sub-pixel x/y of `v`, for line endpoints.
    pub fn to_line_point(&self, v: Vec3f) -> Vec2f {
        let p = self.to_viewport(v);
        Vec2f::new(p.x, p.y)
    }
}

/// Maps a world vertex to unrounded viewport coordinates, keeping depth.
pub fn world_to_viewport(v: Vec3f, width: usize, height: usize) -> Vec3f {
    Viewport::new(width, height).to_viewport(v)
}

/// Maps a world vertex to a screen point for a `width` x `height` viewport.
pub fn world_to_screen(v: Vec3f, width: usize, height: usize) -> Vec3f {
    Viewport::new(width, height).to_screen(v)
}
