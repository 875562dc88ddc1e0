//! Scene output for penrose120
//!
//! This crate turns a [`Scene`](penrose_core::Scene) into POV-Ray scene
//! description language and hands the file to the `povray` executable.
//!
//! ## Key Components
//!
//! - [`pov::PovWriter`] - Writes SDL text for a scene
//! - [`pov::ToPov`] - Implemented by every scene type that has an SDL form
//! - [`renderer::PovRayRenderer`] - Runs the external renderer on a scene file

pub mod pov;
pub mod renderer;
mod error;

pub use error::RenderError;
pub use pov::{PovWriter, ToPov};
pub use renderer::PovRayRenderer;
