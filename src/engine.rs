//! Frame driver.
//!
//! The [`Engine`] walks every face of a mesh, projects it to screen space, lights
//! it, and hands it to the line or triangle rasterizer selected by the
//! [`RenderMode`]. It owns no buffers: [`Engine::render`] creates the frame and
//! depth buffers for one pass and returns the finished frame.
//!
//! # Parallel rendering
//!
//! The depth test is a pointwise maximum, so face order does not matter for the
//! final image. [`Engine::render_parallel`] splits the frame into horizontal bands
//! of rows and rasterizes every band on its own thread, each band replaying the
//! full face list clipped to its rows. Bands never share a pixel, which makes the
//! result identical to the sequential pass.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::config::RenderConfig;
use crate::light::DirectionalLight;
use crate::math::Vec3f;
use crate::mesh::MeshSource;
use crate::projection::Viewport;
use crate::render::{
    fill_triangle, fill_triangle_unbuffered, DepthBuffer, DepthStore, FrameBuffer, LineAlgorithm,
    PixelSink, ScreenTriangle,
};

/// What a frame pass draws for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Every face edge drawn with the configured line algorithm. No culling.
    Wireframe,
    /// Lit, culled faces filled in face order without a depth test.
    Flat,
    /// Lit, culled faces filled with depth testing.
    #[default]
    Shaded,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Flat => write!(f, "Flat"),
            RenderMode::Shaded => write!(f, "Shaded"),
        }
    }
}

/// Counters collected during one frame pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Faces visited.
    pub faces: usize,
    /// Faces skipped because they face away from the light or have zero area.
    pub faces_culled: usize,
    /// Lines handed to the line rasterizer.
    pub lines: usize,
    /// Pixels written by the triangle rasterizer.
    pub pixels_written: usize,
}

impl RenderStats {
    /// Combine the stats of two bands of the same frame. Every band visits every
    /// face, so only pixel counts add up.
    fn merge_band(self, other: Self) -> Self {
        Self {
            faces: self.faces.max(other.faces),
            faces_culled: self.faces_culled.max(other.faces_culled),
            lines: self.lines.max(other.lines),
            pixels_written: self.pixels_written + other.pixels_written,
        }
    }
}

pub struct Engine {
    viewport: Viewport,
    mode: RenderMode,
    line_algorithm: LineAlgorithm,
    base_color: Color,
    background: Color,
    light: DirectionalLight,
    band_rows: usize,
}

impl Engine {
    const DEFAULT_BAND_ROWS: usize = 32;

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            mode: RenderMode::default(),
            line_algorithm: LineAlgorithm::default(),
            base_color: Color::RED,
            background: Color::BLACK,
            light: DirectionalLight::default(),
            band_rows: Self::DEFAULT_BAND_ROWS,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            viewport: Viewport::new(config.width, config.height),
            mode: config.mode,
            line_algorithm: config.line_algorithm,
            base_color: config.base_color,
            background: config.background,
            light: DirectionalLight::new(config.light_direction),
            band_rows: config.band_rows.max(1),
        }
    }

    pub fn width(&self) -> usize {
        self.viewport.width()
    }

    pub fn height(&self) -> usize {
        self.viewport.height()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn set_line_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.line_algorithm = algorithm;
    }

    pub fn line_algorithm(&self) -> LineAlgorithm {
        self.line_algorithm
    }

    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn set_band_rows(&mut self, rows: usize) {
        self.band_rows = rows.max(1);
    }

    /// Render one frame sequentially.
    pub fn render<M: MeshSource>(&self, mesh: &M) -> (FrameBuffer, RenderStats) {
        let mut frame = FrameBuffer::new(self.width(), self.height(), self.background);
        let mut depth = DepthBuffer::new(self.width(), self.height());
        debug!(
            "rendering {} faces at {}x{} ({}, {} lines)",
            mesh.face_count(),
            self.width(),
            self.height(),
            self.mode,
            self.line_algorithm
        );
        let stats = self.draw(mesh, &mut frame, &mut depth);
        self.log_summary(&stats);
        (frame, stats)
    }

    /// Render one frame across row bands in parallel. The image is identical to
    /// [`Engine::render`].
    pub fn render_parallel<M: MeshSource + Sync>(&self, mesh: &M) -> (FrameBuffer, RenderStats) {
        let mut frame = FrameBuffer::new(self.width(), self.height(), self.background);
        let mut depth = DepthBuffer::new(self.width(), self.height());
        debug!(
            "rendering {} faces at {}x{} ({}, {} lines) in bands of {} rows",
            mesh.face_count(),
            self.width(),
            self.height(),
            self.mode,
            self.line_algorithm,
            self.band_rows
        );
        let stats = frame
            .split_bands(&mut depth, self.band_rows)
            .into_par_iter()
            .map(|(mut pixels, mut depths)| self.draw(mesh, &mut pixels, &mut depths))
            .reduce(RenderStats::default, RenderStats::merge_band);
        self.log_summary(&stats);
        (frame, stats)
    }

    /// Draw every face of `mesh` into `target`, using `depth` for visibility.
    ///
    /// `target` and `depth` must cover the same pixels; writes are limited to the
    /// target's clip rectangle.
    pub fn draw<M, S, D>(&self, mesh: &M, target: &mut S, depth: &mut D) -> RenderStats
    where
        M: MeshSource,
        S: PixelSink,
        D: DepthStore,
    {
        let mut stats = RenderStats::default();
        for i in 0..mesh.face_count() {
            let [a, b, c] = mesh.face(i);
            let world = [mesh.vertex(a), mesh.vertex(b), mesh.vertex(c)];
            stats.faces += 1;
            match self.mode {
                RenderMode::Wireframe => {
                    stats.lines += self.draw_wireframe(world, target);
                }
                RenderMode::Flat | RenderMode::Shaded => {
                    let intensity = self.light.face_intensity(world[0], world[1], world[2]);
                    if intensity.is_nan() || intensity <= 0.0 {
                        stats.faces_culled += 1;
                        continue;
                    }
                    let color = self.base_color * intensity;
                    let triangle = ScreenTriangle::new(world.map(|v| self.viewport.to_screen(v)));
                    stats.pixels_written += if self.mode == RenderMode::Shaded {
                        fill_triangle(&triangle, depth, target, color)
                    } else {
                        fill_triangle_unbuffered(&triangle, target, color)
                    };
                }
            }
        }
        stats
    }

    fn draw_wireframe<S: PixelSink>(&self, world: [Vec3f; 3], target: &mut S) -> usize {
        let points = world.map(|v| self.viewport.to_line_point(v));
        for j in 0..3 {
            self.line_algorithm
                .draw(points[j], points[(j + 1) % 3], target, self.base_color);
        }
        points.len()
    }

    fn log_summary(&self, stats: &RenderStats) {
        info!(
            "rendered {} faces ({} culled, {} lines, {} pixels written)",
            stats.faces, stats.faces_culled, stats.lines, stats.pixels_written
        );
    }
}
