use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2D vector, generic over its component type.
///
/// Screen-space code uses the integer form [`Vec2i`]; sub-pixel line endpoints use
/// the floating form [`Vec2f`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2i = Vec2<i32>;
pub type Vec2f = Vec2<f64>;

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    /// Returns the vector with its components exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl<T> Vec2<T>
where
    T: Copy + Mul<Output = T> + Add<Output = T> + Sub<Output = T>,
{
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl Vec2f {
    /// Rounds both components to the nearest pixel (ties round up).
    pub fn to_pixel(&self) -> Vec2i {
        Vec2i::new((self.x + 0.5).floor() as i32, (self.y + 0.5).floor() as i32)
    }
}

impl From<Vec2i> for Vec2f {
    fn from(v: Vec2i) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ops_stay_exact() {
        let a = Vec2i::new(3, -4);
        let b = Vec2i::new(1, 2);
        assert_eq!(a + b, Vec2i::new(4, -2));
        assert_eq!(a - b, Vec2i::new(2, -6));
        assert_eq!(a * 3, Vec2i::new(9, -12));
        assert_eq!(a.dot(b), -5);
    }

    #[test]
    fn to_pixel_rounds_half_up() {
        assert_eq!(Vec2f::new(1.5, 2.49).to_pixel(), Vec2i::new(2, 2));
        assert_eq!(Vec2f::new(-0.5, -0.51).to_pixel(), Vec2i::new(0, -1));
    }

    #[test]
    fn widening_conversion_is_lossless() {
        let v: Vec2f = Vec2i::new(i32::MAX, i32::MIN).into();
        assert_eq!(v.x, i32::MAX as f64);
        assert_eq!(v.y, i32::MIN as f64);
    }
}
