//! Bounding-box triangle fill.
//!
//! Every integer pixel in the triangle's screen-space bounding box (clamped to the
//! target's clip rectangle) is tested with [`barycentric_3d`]. Pixels with any
//! negative weight are skipped, which also rejects degenerate triangles wholesale.
//! Depth is the barycentric blend of the three vertex depths.
//!
//! # Depth convention
//!
//! Larger depth is nearer to the viewer. A pixel is replaced only when the new
//! depth is strictly greater than the stored one, so on an exact tie the first
//! triangle drawn keeps the pixel.

use super::barycentric::{barycentric_2d, barycentric_3d, is_inside};
use super::{ClipRect, DepthStore, PixelSink};
use crate::colors::Color;
use crate::math::{Vec2f, Vec2i, Vec3f};

/// A triangle ready for rasterization: pixel x/y plus world-space depth per vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec3f; 3],
}

impl ScreenTriangle {
    pub fn new(points: [Vec3f; 3]) -> Self {
        Self { points }
    }

    /// Bounding box of the three points clamped to `clip`, or None if the two
    /// do not overlap.
    pub fn bounding_box(&self, clip: ClipRect) -> Option<ClipRect> {
        let [v0, v1, v2] = self.points;
        let min_x = v0.x.min(v1.x).min(v2.x).floor();
        let max_x = v0.x.max(v1.x).max(v2.x).ceil();
        let min_y = v0.y.min(v1.y).min(v2.y).floor();
        let max_y = v0.y.max(v1.y).max(v2.y).ceil();

        // Clamp in floating point so far off-screen vertices cannot overflow the cast.
        let rect = ClipRect {
            min_x: min_x.max(f64::from(clip.min_x)) as i32,
            max_x: max_x.min(f64::from(clip.max_x)) as i32,
            min_y: min_y.max(f64::from(clip.min_y)) as i32,
            max_y: max_y.min(f64::from(clip.max_y)) as i32,
        };
        (!rect.is_empty() && !clip.is_empty()).then_some(rect)
    }

    /// Calls `visit(x, y, depth)` for every pixel of `clip` covered by the triangle.
    fn for_each_covered<F>(&self, clip: ClipRect, mut visit: F)
    where
        F: FnMut(i32, i32, f64),
    {
        let Some(bbox) = self.bounding_box(clip) else {
            return;
        };
        let [a, b, c] = self.points;
        for x in bbox.min_x..=bbox.max_x {
            for y in bbox.min_y..=bbox.max_y {
                let p = Vec3f::new(f64::from(x), f64::from(y), 0.0);
                let w = barycentric_3d(a, b, c, p);
                if !is_inside(w) {
                    continue;
                }
                let depth = a.z * w.x + b.z * w.y + c.z * w.z;
                visit(x, y, depth);
            }
        }
    }
}

/// Fill `triangle` with `color`, depth-testing every covered pixel.
///
/// Only pixels that pass the depth test are written, both to `target` and to
/// `depth`. Returns the number of pixels written.
pub fn fill_triangle<S, D>(
    triangle: &ScreenTriangle,
    depth: &mut D,
    target: &mut S,
    color: Color,
) -> usize
where
    S: PixelSink,
    D: DepthStore,
{
    let clip = target.clip_rect();
    let mut written = 0;
    triangle.for_each_covered(clip, |x, y, z| {
        if z > depth.depth(x, y) {
            depth.set_depth(x, y, z);
            target.set_pixel(x, y, color);
            written += 1;
        }
    });
    written
}

/// Fill `triangle` with `color`, overwriting every covered pixel.
///
/// Depth plays no part here, so coverage is decided by [`barycentric_2d`] on the
/// vertices rounded to whole pixels. Returns the number of pixels written.
pub fn fill_triangle_unbuffered<S: PixelSink>(
    triangle: &ScreenTriangle,
    target: &mut S,
    color: Color,
) -> usize {
    let Some(bbox) = triangle.bounding_box(target.clip_rect()) else {
        return 0;
    };
    let pts = triangle.points.map(|v| Vec2f::new(v.x, v.y).to_pixel());
    let mut written = 0;
    for x in bbox.min_x..=bbox.max_x {
        for y in bbox.min_y..=bbox.max_y {
            if is_inside(barycentric_2d(pts, Vec2i::new(x, y))) {
                target.set_pixel(x, y, color);
                written += 1;
            }
        }
    }
    written
}
