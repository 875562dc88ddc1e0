//! penrose120 - a 120-cell resting on Penrose-tiled walls
//!
//! Builds a POV-Ray scene from a de Bruijn pentagrid tiling and a
//! stereographic projection of the 120-cell, writes it out and optionally
//! runs the renderer.

pub mod app;
pub mod config;
pub mod error;
pub mod scene;

pub use app::{build_scene, load_polytope, run};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
