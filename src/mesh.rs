//! Triangle meshes and Wavefront OBJ loading.
//!
//! The renderer consumes meshes through the [`MeshSource`] trait. [`Mesh`] is the
//! in-memory implementation, loaded from OBJ through `tobj`. Face indices are
//! validated at load time so the frame driver can index vertices directly.

use std::fmt;
use std::io::BufReader;
use std::path::Path;

use log::{debug, warn};

use crate::math::Vec3f;

/// A triangle defined by three indices into the mesh's vertex list.
///
/// Index order is the winding order and determines the face normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Read access to mesh geometry, as needed by the frame driver.
///
/// `vertex` and `face` may panic for indices outside `0..vertex_count()` and
/// `0..face_count()`; implementations guarantee every face index is in range.
pub trait MeshSource {
    fn vertex_count(&self) -> usize;

    fn face_count(&self) -> usize;

    fn vertex(&self, index: usize) -> Vec3f;

    fn face(&self, index: usize) -> [usize; 3];
}

/// Error type for mesh loading.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ file could not be opened or parsed.
    Obj(tobj::LoadError),
    /// A face refers to a vertex that does not exist.
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "OBJ error: {}", e),
            LoadError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {} references vertex {} but the mesh has {} vertices",
                face, index, vertex_count
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::IndexOutOfRange { .. } => None,
        }
    }
}

/// An indexed triangle mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3f>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from raw parts, checking that every face index is in range.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3f>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        let mesh = Self {
            name: name.into(),
            vertices,
            faces,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Load every object in an OBJ file into a single mesh.
    pub fn from_obj<P: AsRef<Path>>(file_path: P) -> Result<Self, LoadError> {
        let path = file_path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &Self::load_options())?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_models(name, models)
    }

    /// Load a mesh from OBJ source text. Material libraries are not resolved.
    pub fn from_obj_str(name: impl Into<String>, source: &str) -> Result<Self, LoadError> {
        let mut reader = BufReader::new(source.as_bytes());
        let (models, _materials) = tobj::load_obj_buf(&mut reader, &Self::load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(name.into(), models)
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        }
    }

    fn from_models(name: String, models: Vec<tobj::Model>) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let base = vertices.len();
            let mesh = model.mesh;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3f::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2]))),
            );
            faces.extend(mesh.indices.chunks_exact(3).map(|f| {
                Face::new(
                    base + f[0] as usize,
                    base + f[1] as usize,
                    base + f[2] as usize,
                )
            }));
        }

        if faces.is_empty() {
            warn!("mesh '{}' has no faces", name);
        }
        debug!(
            "loaded mesh '{}': {} vertices, {} faces",
            name,
            vertices.len(),
            faces.len()
        );
        Self::new(name, vertices, faces)
    }

    fn validate(&self) -> Result<(), LoadError> {
        let vertex_count = self.vertices.len();
        for (face, f) in self.faces.iter().enumerate() {
            if let Some(&index) = f.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(LoadError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3f] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Uniformly scale and translate the mesh so it is centred on the origin and
    /// its largest extent spans `[-1, 1]`. Meshes with zero extent are only
    /// centred.
    pub fn fit_to_unit_cube(&mut self) {
        let Some(&first) = self.vertices.first() else {
            return;
        };
        let (min, max) = self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (
                Vec3f::new(lo.x.min(v.x), lo.y.min(v.y), lo.z.min(v.z)),
                Vec3f::new(hi.x.max(v.x), hi.y.max(v.y), hi.z.max(v.z)),
            )
        });
        let center = (min + max) * 0.5;
        let half_extent = (max.x - min.x).max(max.y - min.y).max(max.z - min.z) / 2.0;
        let scale = if half_extent > 0.0 {
            1.0 / half_extent
        } else {
            1.0
        };
        for v in &mut self.vertices {
            *v = (*v - center) * scale;
        }
        debug!("fitted mesh '{}' to unit cube (scale {})", self.name, scale);
    }
}

impl MeshSource for Mesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Vec3f {
        self.vertices[index]
    }

    fn face(&self, index: usize) -> [usize; 3] {
        self.faces[index].indices()
    }
}
