//! Barycentric coordinates of a point with respect to a triangle.
//!
//! Both forms build the weights from the cross product of
//! `(C.x - A.x, B.x - A.x, A.x - P.x)` and `(C.y - A.y, B.y - A.y, A.y - P.y)`.
//! Its z component is twice the signed screen area of the triangle; when that is
//! too small the triangle is treated as degenerate and [`DEGENERATE`] is returned.
//! Callers reject any point whose weights contain a negative component, which
//! covers both points outside the triangle and the degenerate sentinel.

use crate::math::{Vec2i, Vec3, Vec3f};

/// Returned for triangles with near-zero screen area. The negative first weight
/// makes every caller skip the point.
pub const DEGENERATE: Vec3f = Vec3f {
    x: -1.0,
    y: 1.0,
    z: 1.0,
};

/// Integer form: triangles whose doubled area magnitude is below this are degenerate.
pub const SCREEN_AREA_TOLERANCE: f64 = 1.0;

/// Floating form: triangles whose doubled area magnitude is at or below this are
/// degenerate.
pub const DEPTH_AREA_TOLERANCE: f64 = 1e-2;

/// Weights of integer pixel `p` against the integer triangle `pts`.
///
/// Exact integer arithmetic is used for the cross product, so any non-zero area
/// triangle passes the tolerance check.
pub fn barycentric_2d(pts: [Vec2i; 3], p: Vec2i) -> Vec3f {
    let [a, b, c] = pts;
    let s0 = Vec3::new(
        i64::from(c.x) - i64::from(a.x),
        i64::from(b.x) - i64::from(a.x),
        i64::from(a.x) - i64::from(p.x),
    );
    let s1 = Vec3::new(
        i64::from(c.y) - i64::from(a.y),
        i64::from(b.y) - i64::from(a.y),
        i64::from(a.y) - i64::from(p.y),
    );
    let u = s0.cross(s1);
    let (ux, uy, uz) = (u.x as f64, u.y as f64, u.z as f64);
    if uz.abs() < SCREEN_AREA_TOLERANCE {
        return DEGENERATE;
    }
    Vec3f::new(1.0 - (ux + uy) / uz, uy / uz, ux / uz)
}

/// Weights of `p` against the triangle `a`, `b`, `c`, using only x and y.
///
/// The z components are ignored; callers interpolate depth themselves from the
/// returned weights.
pub fn barycentric_3d(a: Vec3f, b: Vec3f, c: Vec3f, p: Vec3f) -> Vec3f {
    let s0 = Vec3f::new(c.x - a.x, b.x - a.x, a.x - p.x);
    let s1 = Vec3f::new(c.y - a.y, b.y - a.y, a.y - p.y);
    let u = s0.cross(s1);
    if u.z.abs() > DEPTH_AREA_TOLERANCE {
        return Vec3f::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z);
    }
    DEGENERATE
}

/// Integer screen point to the floating form used by [`barycentric_3d`].
pub fn lift(p: Vec2i, depth: f64) -> Vec3f {
    Vec3f::new(f64::from(p.x), f64::from(p.y), depth)
}

/// True when all three weights are non-negative.
#[inline]
pub fn is_inside(w: Vec3f) -> bool {
    w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0
}
