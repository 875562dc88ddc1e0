//! Static polytope topology
//!
//! A [`Polytope`] is the fixed vertex/edge/face table of a 4D polytope, read
//! from a RON file. The 120-cell table ships inside the crate and is what the
//! scene uses unless another file is configured.
//!
//! Tables are validated as they are loaded, so every edge and face index of a
//! `Polytope` is known to be in range.

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::Path;

use penrose_math::{bounding_offset, GeometryError, StereographicProjection, Vec3, Vec4};

use crate::polytope_validator::{PolytopeValidator, ValidationError};

/// The bundled 120-cell: 600 vertices, 1200 edges, 720 pentagons
const CELL_120_RON: &str = include_str!("../assets/cell120.ron");

/// A 4D polytope given as static tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polytope {
    /// Polytope name (for display/debugging)
    pub name: String,
    /// Vertex coordinates in 4-space
    pub vertices: Vec<Vec4>,
    /// Edges as pairs of vertex indices
    pub edges: Vec<[usize; 2]>,
    /// Pentagonal faces as cyclically ordered vertex indices
    pub faces: Vec<[usize; 5]>,
}

impl Polytope {
    /// The bundled 120-cell table
    pub fn cell120() -> Result<Self, PolytopeLoadError> {
        Self::from_ron_str(CELL_120_RON)
    }

    /// Load and validate a polytope from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PolytopeLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Parse and validate a polytope from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, PolytopeLoadError> {
        let polytope: Polytope = ron::from_str(contents)?;
        PolytopeValidator::validate_or_error(&polytope).map_err(PolytopeLoadError::Invalid)?;

        log::debug!(
            "Loaded polytope '{}': {} vertices, {} edges, {} faces",
            polytope.name,
            polytope.vertex_count(),
            polytope.edge_count(),
            polytope.face_count()
        );
        Ok(polytope)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Project the vertices into 3-space, keeping this topology
    pub fn project(
        &self,
        projection: &StereographicProjection,
    ) -> Result<ProjectedPolytope<'_>, GeometryError> {
        let vertices = projection.project(&self.vertices)?;
        Ok(ProjectedPolytope {
            polytope: self,
            vertices,
        })
    }
}

/// A polytope whose vertices have been projected into 3-space
///
/// Edges and faces are the source polytope's index tables, looked up
/// against the projected vertex array.
#[derive(Debug, Clone)]
pub struct ProjectedPolytope<'a> {
    polytope: &'a Polytope,
    vertices: Vec<Vec3>,
}

impl<'a> ProjectedPolytope<'a> {
    /// The source topology
    #[inline]
    pub fn polytope(&self) -> &'a Polytope {
        self.polytope
    }

    /// Projected vertices, in the source order
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Edge endpoints in 3-space
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.polytope
            .edges
            .iter()
            .map(move |&[a, b]| (self.vertices[a], self.vertices[b]))
    }

    /// Face corners in 3-space
    pub fn face_polygons(&self) -> impl Iterator<Item = [Vec3; 5]> + '_ {
        self.polytope
            .faces
            .iter()
            .map(move |&face| face.map(|i| self.vertices[i]))
    }

    /// Lowest projected z, used to rest the polytope on the floor
    pub fn bottom(&self) -> Option<f64> {
        bounding_offset(&self.vertices)
    }
}

/// Error loading a polytope table
#[derive(Debug)]
pub enum PolytopeLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// The table parsed but failed validation
    Invalid(Vec<ValidationError>),
}

impl From<io::Error> for PolytopeLoadError {
    fn from(e: io::Error) -> Self {
        PolytopeLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for PolytopeLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        PolytopeLoadError::Parse(e)
    }
}

impl std::fmt::Display for PolytopeLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolytopeLoadError::Io(e) => write!(f, "IO error: {}", e),
            PolytopeLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            PolytopeLoadError::Invalid(errors) => {
                write!(f, "Invalid polytope ({} errors)", errors.len())?;
                for error in errors {
                    write!(f, "; {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PolytopeLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolytopeLoadError::Io(e) => Some(e),
            PolytopeLoadError::Parse(e) => Some(e),
            PolytopeLoadError::Invalid(_) => None,
        }
    }
}
