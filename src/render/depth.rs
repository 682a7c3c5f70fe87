//! Per-frame depth buffer.

use super::DepthStore;

/// Dense `width * height` depth values indexed by `y * width + x`.
///
/// Every entry starts at negative infinity, meaning nothing has been drawn yet and
/// any surface is nearer. Depth is kept in the same linear space as world z.
pub struct DepthBuffer {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: vec![f64::NEG_INFINITY; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every entry to negative infinity.
    pub fn clear(&mut self) {
        self.values.fill(f64::NEG_INFINITY);
    }

    /// Depth at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|i| self.values[i])
    }

    /// Raw row-major values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Split into views of `rows` rows each; the last band may be shorter.
    pub fn bands_mut(&mut self, rows: usize) -> impl Iterator<Item = DepthBand<'_>> {
        let rows = rows.max(1);
        let width = self.width;
        self.values
            .chunks_mut((rows * width).max(1))
            .enumerate()
            .map(move |(i, values)| DepthBand {
                values,
                width,
                first_row: i * rows,
            })
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
}

impl DepthStore for DepthBuffer {
    #[inline]
    fn depth(&self, x: i32, y: i32) -> f64 {
        self.values[y as usize * self.width + x as usize]
    }

    #[inline]
    fn set_depth(&mut self, x: i32, y: i32, depth: f64) {
        self.values[y as usize * self.width + x as usize] = depth;
    }
}

/// Depth values of a horizontal strip of rows, addressed with global coordinates.
pub struct DepthBand<'a> {
    values: &'a mut [f64],
    width: usize,
    first_row: usize,
}

impl DepthStore for DepthBand<'_> {
    #[inline]
    fn depth(&self, x: i32, y: i32) -> f64 {
        self.values[(y as usize - self.first_row) * self.width + x as usize]
    }

    #[inline]
    fn set_depth(&mut self, x: i32, y: i32, depth: f64) {
        self.values[(y as usize - self.first_row) * self.width + x as usize] = depth;
    }
}
