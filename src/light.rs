//! Flat directional lighting.
//!
//! The face normal is `(v2 - v0) x (v1 - v0)`, normalized. With this operand order a
//! face whose vertices run counter-clockwise when seen from +z gets a normal along
//! -z, which is lit by the default light direction `(0, 0, -1)`. Swapping any two
//! vertices flips the sign of the intensity.

use crate::math::Vec3f;

/// A directional light with a fixed unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3f,
}

impl DirectionalLight {
    /// Create a light along `direction`. The direction is normalized; a zero
    /// vector falls back to the default `(0, 0, -1)`.
    pub fn new(direction: Vec3f) -> Self {
        if direction.length() == 0.0 {
            return Self::default();
        }
        Self {
            direction: direction.normalized(),
        }
    }

    pub fn direction(&self) -> Vec3f {
        self.direction
    }

    /// Dot product of a unit `normal` with the light direction. Non-positive
    /// values mean the surface faces away from the light.
    pub fn intensity(&self, normal: Vec3f) -> f64 {
        normal.dot(self.direction)
    }

    /// Light intensity of the triangle `v0, v1, v2`; see [`face_intensity`].
    pub fn face_intensity(&self, v0: Vec3f, v1: Vec3f, v2: Vec3f) -> f64 {
        face_intensity(v0, v1, v2, self.direction)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3f::BACK,
        }
    }
}

/// Unit normal of the triangle `v0, v1, v2`, or None when it has zero area.
pub fn face_normal(v0: Vec3f, v1: Vec3f, v2: Vec3f) -> Option<Vec3f> {
    let mut n = (v2 - v0).cross(v1 - v0);
    if n.length() == 0.0 {
        return None;
    }
    n.normalize();
    Some(n)
}

/// Intensity of a face lit by the unit vector `light_direction`.
///
/// Zero-area faces get an intensity of 0 and are therefore never drawn.
pub fn face_intensity(v0: Vec3f, v1: Vec3f, v2: Vec3f, light_direction: Vec3f) -> f64 {
    face_normal(v0, v1, v2).map_or(0.0, |n| n.dot(light_direction))
}
