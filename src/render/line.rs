//! Single-pixel-wide line drawing.
//!
//! Two interchangeable algorithms are provided:
//! - [`draw_line_bresenham`]: exact integer stepping, one pixel per major-axis step
//! - [`draw_line_wu`]: Xiaolin Wu's anti-aliased line, two coverage-weighted pixels
//!   per major-axis step
//!
//! Both classify the line as *steep* when its vertical extent exceeds its
//! horizontal extent, step along the transposed axis, and swap back on write.
//! Steps along the major axis are limited to the sink's clip rectangle; any
//! other out-of-range write is dropped by the [`PixelSink`].

use serde::{Deserialize, Serialize};

use super::{ClipRect, PixelSink};
use crate::colors::Color;
use crate::math::{Vec2f, Vec2i};

/// Line drawing algorithm used for wireframe rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineAlgorithm {
    /// Integer Bresenham. Endpoints are rounded to the nearest pixel first.
    #[default]
    Bresenham,
    /// Anti-aliased Wu lines on sub-pixel endpoints.
    Wu,
}

impl LineAlgorithm {
    /// Draw a line from `p0` to `p1` with this algorithm.
    pub fn draw<S: PixelSink>(self, p0: Vec2f, p1: Vec2f, target: &mut S, color: Color) {
        match self {
            LineAlgorithm::Bresenham => {
                draw_line_bresenham(p0.to_pixel(), p1.to_pixel(), target, color)
            }
            LineAlgorithm::Wu => draw_line_wu(p0, p1, target, color),
        }
    }
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
            LineAlgorithm::Wu => write!(f, "Wu"),
        }
    }
}

/// Draws a line between two pixels using Bresenham's algorithm.
///
/// The doubled error term accumulates `2*|dy|` per step and is re-centred by
/// `2*dx` whenever it passes `dx`, so stepping is exact and never drifts. The
/// endpoints are ordered before stepping, which makes the pixel set independent
/// of the direction the line is drawn in.
///
/// Stepping only covers the part of the major axis inside the target's clip
/// rectangle. The minor-axis state at the first visible step is computed in
/// closed form, so the drawn pixels match an unclipped walk.
pub fn draw_line_bresenham<S: PixelSink>(start: Vec2i, end: Vec2i, target: &mut S, color: Color) {
    let (mut x0, mut y0) = (i64::from(start.x), i64::from(start.y));
    let (mut x1, mut y1) = (i64::from(end.x), i64::from(end.y));

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let derr2 = dy.abs() * 2;
    let ystep = if dy > 0 { 1 } else { -1 };

    let (lo, hi) = major_range(target.clip_rect(), steep);
    let first = x0.max(lo);
    let last = x1.min(hi);
    if first > last {
        return;
    }

    // After k steps err2 lies in (-dx, dx], which fixes the number of minor steps.
    let skipped = i128::from(first - x0);
    let minor_steps = if skipped == 0 {
        0
    } else {
        (skipped * i128::from(derr2) + i128::from(dx) - 1) / (2 * i128::from(dx))
    };
    let mut err2 = (skipped * i128::from(derr2) - 2 * i128::from(dx) * minor_steps) as i64;
    let mut y = y0 + ystep * minor_steps as i64;

    for x in first..=last {
        plot_major(target, steep, x, y, color);
        err2 += derr2;
        if err2 > dx {
            y += ystep;
            err2 -= 2 * dx;
        }
    }
}

/// Inclusive range of the stepping axis covered by `clip`.
fn major_range(clip: ClipRect, steep: bool) -> (i64, i64) {
    if steep {
        (i64::from(clip.min_y), i64::from(clip.max_y))
    } else {
        (i64::from(clip.min_x), i64::from(clip.max_x))
    }
}

/// Writes a pixel given in stepping coordinates. Points outside the `i32`
/// range cannot be on any image and are dropped.
#[inline]
fn plot_major<S: PixelSink>(target: &mut S, steep: bool, major: i64, minor: i64, color: Color) {
    let (x, y) = if steep { (minor, major) } else { (major, minor) };
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        target.set_pixel(x, y, color);
    }
}

#[inline]
fn fpart(v: f64) -> f64 {
    v - v.floor()
}

#[inline]
fn rfpart(v: f64) -> f64 {
    1.0 - fpart(v)
}

/// Draws an anti-aliased line using Xiaolin Wu's algorithm.
///
/// Each endpoint splits its brightness between the two pixels straddling the
/// ideal line, further weighted by how much of the endpoint's pixel the line
/// covers along the major axis. Every interior step writes `floor(intery)` at
/// weight `1 - frac(intery)` and the pixel after it at `frac(intery)`.
///
/// Coverage scales the color channels directly; existing pixels are overwritten,
/// not blended.
pub fn draw_line_wu<S: PixelSink>(start: Vec2f, end: Vec2f, target: &mut S, color: Color) {
    let (mut p0, mut p1) = (start, end);

    let steep = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();
    if steep {
        p0 = p0.swapped();
        p1 = p1.swapped();
    }
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
    }

    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let (lo, hi) = major_range(target.clip_rect(), steep);
    let mut plot = |x: i64, y: i64, coverage: f64| {
        plot_major(target, steep, x, y, color * coverage);
    };

    // First endpoint.
    let xend1 = p0.x.round();
    let yend1 = p0.y + gradient * (xend1 - p0.x);
    let xgap = rfpart(p0.x + 0.5);
    let xpxl1 = xend1 as i64;
    let ypxl1 = yend1.floor() as i64;
    plot(xpxl1, ypxl1, rfpart(yend1) * xgap);
    plot(xpxl1, ypxl1.saturating_add(1), fpart(yend1) * xgap);

    // Second endpoint.
    let xend = p1.x.round();
    let yend = p1.y + gradient * (xend - p1.x);
    let xgap = fpart(p1.x + 0.5);
    let xpxl2 = xend as i64;
    let ypxl2 = yend.floor() as i64;
    plot(xpxl2, ypxl2, rfpart(yend) * xgap);
    plot(xpxl2, ypxl2.saturating_add(1), fpart(yend) * xgap);

    // Interior steps restricted to the clip rectangle. The intersection is
    // derived from the step index so every clip sees the same values.
    let first = xpxl1.saturating_add(1).max(lo);
    let last = xpxl2.saturating_sub(1).min(hi);
    for x in first..=last {
        let intery = yend1 + gradient * (x as f64 - xend1);
        let y = intery.floor() as i64;
        plot(x, y, rfpart(intery));
        plot(x, y.saturating_add(1), fpart(intery));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameBuffer;
    use std::collections::{BTreeMap, BTreeSet};

    /// Records every write in call order. Its clip rectangle extends into
    /// negative coordinates so lines are not cut at the image origin.
    struct Recorder {
        writes: Vec<(i32, i32, Color)>,
    }

    impl Recorder {
        fn new() -> Self {
            Self { writes: Vec::new() }
        }

        fn pixel_set(&self) -> BTreeSet<(i32, i32)> {
            self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
        }
    }

    impl PixelSink for Recorder {
        fn width(&self) -> usize {
            1 << 16
        }

        fn height(&self) -> usize {
            1 << 16
        }

        fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
            self.writes.push((x, y, color));
        }

        fn clip_rect(&self) -> ClipRect {
            ClipRect {
                min_x: -(1 << 16),
                min_y: -(1 << 16),
                max_x: 1 << 16,
                max_y: 1 << 16,
            }
        }
    }

    fn bresenham(p0: (i32, i32), p1: (i32, i32)) -> Recorder {
        let mut rec = Recorder::new();
        draw_line_bresenham(
            Vec2i::new(p0.0, p0.1),
            Vec2i::new(p1.0, p1.1),
            &mut rec,
            Color::WHITE,
        );
        rec
    }

    #[test]
    fn bresenham_degenerate_line_is_one_pixel() {
        for p in [(0, 0), (7, -3), (-20, 45)] {
            let rec = bresenham(p, p);
            assert_eq!(rec.writes.len(), 1);
            assert_eq!(rec.pixel_set().into_iter().next(), Some(p));
        }
    }

    #[test]
    fn bresenham_is_direction_symmetric() {
        let cases = [
            ((0, 0), (10, 3)),
            ((2, 9), (5, -7)),
            ((13, 20), (80, 41)),
            ((-4, 6), (6, -4)),
            ((0, 0), (0, 12)),
            ((3, 3), (-9, 3)),
            ((1, 1), (8, 8)),
        ];
        for (a, b) in cases {
            assert_eq!(bresenham(a, b).pixel_set(), bresenham(b, a).pixel_set(), "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn bresenham_one_pixel_per_major_step() {
        let shallow = bresenham((0, 0), (10, 3));
        assert_eq!(shallow.writes.len(), 11);
        let xs: BTreeSet<i32> = shallow.writes.iter().map(|w| w.0).collect();
        assert_eq!(xs, (0..=10).collect());

        let steep = bresenham((0, 0), (3, -10));
        assert_eq!(steep.writes.len(), 11);
        let ys: BTreeSet<i32> = steep.writes.iter().map(|w| w.1).collect();
        assert_eq!(ys, (-10..=0).collect());
    }

    #[test]
    fn bresenham_hits_both_endpoints_and_diagonals() {
        let rec = bresenham((1, 1), (6, 6));
        let expected: BTreeSet<(i32, i32)> = (1..=6).map(|i| (i, i)).collect();
        assert_eq!(rec.pixel_set(), expected);

        let rec = bresenham((12, 5), (2, 8));
        let set = rec.pixel_set();
        assert!(set.contains(&(12, 5)));
        assert!(set.contains(&(2, 8)));
    }

    #[test]
    fn bresenham_steps_minor_axis_by_one() {
        let rec = bresenham((0, 0), (9, 4));
        let mut sorted = rec.writes.clone();
        sorted.sort_by_key(|w| w.0);
        for pair in sorted.windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, 1);
            assert!((pair[1].1 - pair[0].1).abs() <= 1);
        }
    }

    fn wu(p0: (f64, f64), p1: (f64, f64)) -> Recorder {
        let mut rec = Recorder::new();
        draw_line_wu(
            Vec2f::new(p0.0, p0.1),
            Vec2f::new(p1.0, p1.1),
            &mut rec,
            Color::RED,
        );
        rec
    }

    #[test]
    fn wu_interior_columns_conserve_brightness() {
        let rec = wu((2.0, 1.0), (30.0, 12.7));
        // Endpoints land on columns 2 and 30; everything between is interior.
        let mut columns: BTreeMap<i32, Vec<Color>> = BTreeMap::new();
        for &(x, _, c) in &rec.writes {
            columns.entry(x).or_default().push(c);
        }
        for x in 3..30 {
            let column = &columns[&x];
            assert_eq!(column.len(), 2, "column {x}");
            let red: u32 = column.iter().map(|c| u32::from(c.r)).sum();
            assert!((253..=255).contains(&red), "column {x} red sum {red}");
        }
    }

    #[test]
    fn wu_steep_line_conserves_brightness_per_row() {
        let rec = wu((4.0, 0.0), (9.5, 25.0));
        let mut rows: BTreeMap<i32, Vec<Color>> = BTreeMap::new();
        for &(_, y, c) in &rec.writes {
            rows.entry(y).or_default().push(c);
        }
        for y in 1..25 {
            let row = &rows[&y];
            assert_eq!(row.len(), 2, "row {y}");
            let red: u32 = row.iter().map(|c| u32::from(c.r)).sum();
            assert!((253..=255).contains(&red), "row {y} red sum {red}");
        }
    }

    #[test]
    fn wu_axis_aligned_lines_are_solid() {
        let rec = wu((0.0, 5.0), (10.0, 5.0));
        for x in 1..10 {
            assert!(rec.writes.contains(&(x, 5, Color::RED)));
        }

        let rec = wu((5.0, 0.0), (5.0, 10.0));
        for y in 1..10 {
            assert!(rec.writes.contains(&(5, y, Color::RED)));
        }
    }

    #[test]
    fn wu_handles_coincident_endpoints() {
        let rec = wu((3.0, 3.0), (3.0, 3.0));
        assert_eq!(rec.writes.len(), 4);
        assert!(rec.writes.iter().all(|w| w.0 == 3));
    }

    #[test]
    fn algorithm_dispatch_rounds_for_bresenham() {
        let mut rec = Recorder::new();
        LineAlgorithm::Bresenham.draw(
            Vec2f::new(0.4, 0.6),
            Vec2f::new(4.6, 0.6),
            &mut rec,
            Color::WHITE,
        );
        let expected: BTreeSet<(i32, i32)> = (0..=5).map(|x| (x, 1)).collect();
        assert_eq!(rec.pixel_set(), expected);
    }

    #[test]
    fn bresenham_clipped_line_matches_full_walk() {
        let full = bresenham((-40, -7), (90, 31));
        let mut frame = FrameBuffer::new(32, 20, Color::BLACK);
        draw_line_bresenham(Vec2i::new(-40, -7), Vec2i::new(90, 31), &mut frame, Color::WHITE);
        let clip = frame.clip_rect();
        for y in 0..20 {
            for x in 0..32 {
                let on_line = full.pixel_set().contains(&(x, y));
                let lit = frame.get_pixel(x, y) == Some(Color::WHITE);
                assert_eq!(on_line && clip.contains(x, y), lit, "({x}, {y})");
            }
        }
    }

    #[test]
    fn bresenham_survives_saturated_endpoints() {
        let mut frame = FrameBuffer::new(16, 4, Color::BLACK);
        LineAlgorithm::Bresenham.draw(
            Vec2f::new(-3.0e9, 0.0),
            Vec2f::new(3.0e9, 0.0),
            &mut frame,
            Color::WHITE,
        );
        for x in 0..16 {
            assert_eq!(frame.get_pixel(x, 0), Some(Color::WHITE), "x = {x}");
            assert_eq!(frame.get_pixel(x, 1), Some(Color::BLACK), "x = {x}");
        }

        let mut rec = Recorder::new();
        draw_line_bresenham(
            Vec2i::new(i32::MIN, i32::MIN),
            Vec2i::new(i32::MAX, i32::MAX),
            &mut rec,
            Color::WHITE,
        );
        assert!(rec.writes.iter().all(|&(x, y, _)| x == y));
        assert!(rec.writes.contains(&(0, 0, Color::WHITE)));
    }

    #[test]
    fn wu_far_off_screen_line_draws_nothing() {
        let mut rec = Recorder::new();
        draw_line_wu(
            Vec2f::new(3.0e9, 0.0),
            Vec2f::new(3.0e9 + 5.0, 2.0),
            &mut rec,
            Color::RED,
        );
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn wu_line_crossing_the_image_from_far_away() {
        let mut frame = FrameBuffer::new(16, 6, Color::BLACK);
        draw_line_wu(
            Vec2f::new(-3.0e9, 2.0),
            Vec2f::new(3.0e9, 2.0),
            &mut frame,
            Color::RED,
        );
        for x in 0..16 {
            assert_eq!(frame.get_pixel(x, 2), Some(Color::RED), "x = {x}");
        }
    }
}
