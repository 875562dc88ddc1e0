//! Render error types

use std::fmt;
use std::io;

/// Error writing a scene file or running the renderer
#[derive(Debug)]
pub enum RenderError {
    /// IO error writing the scene file
    Io(io::Error),
    /// The renderer executable could not be started
    Spawn { binary: String, source: io::Error },
    /// The renderer ran and reported failure
    Failed { code: Option<i32>, stderr: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(err) => write!(f, "Scene IO error: {}", err),
            RenderError::Spawn { binary, source } => {
                write!(f, "Failed to start renderer '{}': {}", binary, source)
            }
            RenderError::Failed { code: Some(code), stderr } => {
                write!(f, "Renderer exited with status {}: {}", code, stderr.trim())
            }
            RenderError::Failed { code: None, stderr } => {
                write!(f, "Renderer terminated by signal: {}", stderr.trim())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            RenderError::Spawn { source, .. } => Some(source),
            RenderError::Failed { .. } => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}
