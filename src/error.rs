//! Application error type

use std::fmt;

use penrose_core::{GeometryError, PolytopeLoadError};
use penrose_render::RenderError;

/// Any error that ends a penrose120 run
///
/// Configuration errors are not included: `main` falls back to the
/// built-in defaults when loading fails.
#[derive(Debug)]
pub enum AppError {
    /// The polytope table could not be loaded
    Polytope(PolytopeLoadError),
    /// Tiling or projection rejected its input
    Geometry(GeometryError),
    /// Writing the scene or running the renderer failed
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Polytope(e) => write!(f, "Failed to load polytope: {}", e),
            AppError::Geometry(e) => write!(f, "Geometry error: {}", e),
            AppError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Polytope(e) => Some(e),
            AppError::Geometry(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<PolytopeLoadError> for AppError {
    fn from(e: PolytopeLoadError) -> Self {
        AppError::Polytope(e)
    }
}

impl From<GeometryError> for AppError {
    fn from(e: GeometryError) -> Self {
        AppError::Geometry(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}
