//! Core types for penrose120
//!
//! This crate provides the data the scene is built from and the typed
//! scene model it is built into:
//!
//! - [`Polytope`] - Static 4D topology (vertices, edges, pentagonal faces)
//! - [`ProjectedPolytope`] - The same topology over projected 3D vertices
//! - [`PolytopeValidator`] - Index integrity checks run at load time
//! - [`Color`], [`Texture`], [`Interior`], [`Palette`] - Surface appearance
//! - [`Transform`] - Ordered rotate/translate/scale modifiers
//! - [`Scene`], [`SceneObject`] - Camera, lights and renderable primitives

mod polytope;
mod polytope_validator;
mod material;
mod transform;
mod scene;

pub use polytope::{Polytope, ProjectedPolytope, PolytopeLoadError};
pub use polytope_validator::{PolytopeValidator, ValidationError};
pub use material::{Color, Pigment, Finish, Texture, Interior, Media, Palette};
pub use transform::{Transform, TransformStep};
pub use scene::{Scene, SceneObject, SceneStats, Camera, LightSource, Union};

// Re-export commonly used types from penrose_math for convenience
pub use penrose_math::{Vec2, Vec3, Vec4, GeometryError};
pub use penrose_math::{PenroseTiling, Rhombus, RhombusKind, ShiftVector, StereographicProjection, tile_count};
