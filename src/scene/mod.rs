//! Scene construction utilities
//!
//! This module provides a declarative API for building penrose120 scenes
//! and the assembly of the full scene from configuration.

mod scene_builder;

pub use scene_builder::{PolytopeStyle, SceneBuilder, SurfaceStyle};
