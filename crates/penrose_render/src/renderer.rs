//! External renderer invocation
//!
//! Runs `povray` on a written scene file and waits for it to finish.

use std::path::Path;
use std::process::Command;

use crate::RenderError;

/// Settings for one `povray` run
#[derive(Clone, Debug, PartialEq)]
pub struct PovRayRenderer {
    /// Executable name or path
    pub binary: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Adaptive anti-aliasing threshold, `None` disables anti-aliasing
    pub antialiasing: Option<f64>,
}

impl Default for PovRayRenderer {
    fn default() -> Self {
        Self {
            binary: "povray".to_string(),
            width: 600,
            height: 480,
            antialiasing: Some(0.001),
        }
    }
}

impl PovRayRenderer {
    /// Create a renderer for the given image size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_antialiasing(mut self, threshold: Option<f64>) -> Self {
        self.antialiasing = threshold;
        self
    }

    /// Command-line arguments for rendering `scene` into `image`
    ///
    /// The preview display is always switched off.
    pub fn arguments(&self, scene: &Path, image: &Path) -> Vec<String> {
        let mut args = vec![
            format!("+I{}", scene.display()),
            format!("+O{}", image.display()),
            format!("+W{}", self.width),
            format!("+H{}", self.height),
        ];
        if let Some(threshold) = self.antialiasing {
            args.push(format!("+A{}", threshold));
        }
        args.push("-D".to_string());
        args
    }

    /// Render a scene file to an image, blocking until the renderer exits
    pub fn render<P: AsRef<Path>, Q: AsRef<Path>>(&self, scene: P, image: Q) -> Result<(), RenderError> {
        let args = self.arguments(scene.as_ref(), image.as_ref());
        log::info!("Running {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|source| RenderError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        log::info!("Rendered {}", image.as_ref().display());
        Ok(())
    }
}
