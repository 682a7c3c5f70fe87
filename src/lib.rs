//! A CPU-only triangle-mesh renderer.
//!
//! This crate renders a mesh into a 2D raster image with a software rasterization
//! pipeline: vertices are mapped to screen space, faces are flat-shaded by a
//! directional light, triangles are filled using barycentric coordinates, and
//! visibility is resolved with a per-pixel depth buffer. Wireframe rendering with
//! Bresenham or anti-aliased Wu lines is available as an alternative mode.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatraster::prelude::*;
//!
//! let mesh = Mesh::from_obj("obj/african_head.obj")?;
//! let engine = Engine::new(800, 800);
//! let (mut frame, _stats) = engine.render(&mesh);
//! frame.flip_vertically();
//! flatraster::output::save_frame(&frame, "output.tga")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod math;
pub mod mesh;
pub mod output;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use config::{ConfigError, RenderConfig};
pub use engine::{Engine, RenderMode, RenderStats};
pub use mesh::{Face, LoadError, Mesh, MeshSource};
pub use projection::{world_to_screen, world_to_viewport, Viewport};
pub use render::LineAlgorithm;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatraster::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{Engine, RenderMode, RenderStats};

    // Config
    pub use crate::config::RenderConfig;

    // Geometry
    pub use crate::mesh::{Face, Mesh, MeshSource};
    pub use crate::projection::{world_to_screen, Viewport};

    // Lighting
    pub use crate::light::{face_intensity, face_normal, DirectionalLight};

    // Math
    pub use crate::math::{Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i};

    // Rendering
    pub use crate::colors::Color;
    pub use crate::render::{
        draw_line_bresenham, draw_line_wu, fill_triangle, DepthBuffer, FrameBuffer,
        LineAlgorithm, PixelSink, ScreenTriangle,
    };
}
