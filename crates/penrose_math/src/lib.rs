//! Geometry library for penrose120
//!
//! This crate holds the two geometric generators behind the scene:
//! the Penrose rhombus tiling and the 4D to 3D stereographic projection.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - plane, space and 4-space vectors
//! - [`Complex`] - complex numbers used by the pentagrid construction
//!
//! ## Generators
//!
//! - [`PenroseTiling`] - de Bruijn multigrid rhombus generator
//! - [`StereographicProjection`] - maps 4D vertices into 3D

mod vec2;
mod vec3;
mod vec4;
mod complex;
mod error;
pub mod multigrid;
pub mod stereographic;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use complex::Complex;
pub use error::GeometryError;
pub use multigrid::{PenroseTiling, Rhombus, RhombusKind, ShiftVector, GRID_COUNT, direction_pairs, tile_count};
pub use stereographic::{StereographicProjection, bounding_offset};
