//! POV-Ray scene description output
//!
//! Every scene type implements [`ToPov`] and writes itself through a
//! [`PovWriter`], which tracks indentation for nested blocks. Primitives are
//! written one per line; unions open an indented block so the file stays
//! readable when it holds hundreds of thousands of objects.

use std::fs;
use std::path::Path;

use penrose_core::{
    Camera, Color, Finish, Interior, LightSource, Media, Pigment, Scene, SceneObject, Texture,
    Transform, TransformStep, Union, Vec3,
};

use crate::RenderError;

const INDENT: &str = "  ";

/// Types with a POV-Ray SDL representation
pub trait ToPov {
    /// Write this value at the writer's current position
    fn write_pov(&self, w: &mut PovWriter);

    /// Render to a standalone string
    fn to_pov(&self) -> String {
        let mut w = PovWriter::new();
        self.write_pov(&mut w);
        w.finish()
    }
}

/// Accumulates SDL text
#[derive(Debug, Default)]
pub struct PovWriter {
    out: String,
    depth: usize,
    line_open: bool,
}

impl PovWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the current line, indenting if the line is new
    pub fn push(&mut self, text: &str) {
        if !self.line_open {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.line_open = true;
        }
        self.out.push_str(text);
    }

    /// Finish the current line
    pub fn newline(&mut self) {
        self.out.push('\n');
        self.line_open = false;
    }

    /// Write a complete line
    pub fn line(&mut self, text: &str) {
        self.push(text);
        self.newline();
    }

    /// Open a named block on its own line
    pub fn open(&mut self, keyword: &str) {
        self.line(&format!("{} {{", keyword));
        self.depth += 1;
    }

    /// Close the innermost block
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Take the accumulated text
    pub fn finish(self) -> String {
        self.out
    }

    /// Write a whole scene to `path`
    pub fn write_file<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let text = scene.to_pov();
        fs::write(path, &text)?;
        log::info!("Wrote scene to {} ({} bytes)", path.display(), text.len());
        Ok(())
    }
}

/// Format a number the way SDL expects it
fn num(x: f64) -> String {
    // Display never uses exponent notation; only negative zero needs normalising
    if x == 0.0 {
        "0".to_string()
    } else {
        format!("{}", x)
    }
}

fn vector(v: Vec3) -> String {
    format!("<{}, {}, {}>", num(v.x), num(v.y), num(v.z))
}

fn rgb(c: Color) -> String {
    format!("rgb <{}, {}, {}>", num(c.r), num(c.g), num(c.b))
}

impl ToPov for Pigment {
    fn write_pov(&self, w: &mut PovWriter) {
        w.push(&format!("pigment {{ color {}", rgb(self.color)));
        if self.transmit != 0.0 {
            w.push(&format!(" transmit {}", num(self.transmit)));
        }
        w.push(" }");
    }
}

impl ToPov for Finish {
    fn write_pov(&self, w: &mut PovWriter) {
        let fields = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("phong", self.phong),
            ("reflection", self.reflection),
            ("brilliance", self.brilliance),
        ];
        w.push("finish {");
        for (name, value) in fields {
            if let Some(value) = value {
                w.push(&format!(" {} {}", name, num(value)));
            }
        }
        w.push(" }");
    }
}

impl ToPov for Texture {
    fn write_pov(&self, w: &mut PovWriter) {
        w.push("texture {");
        if let Some(base) = &self.base {
            w.push(&format!(" {}", base));
        }
        if let Some(pigment) = &self.pigment {
            w.push(" ");
            pigment.write_pov(w);
        }
        if let Some(finish) = self.finish.as_ref().filter(|f| !f.is_empty()) {
            w.push(" ");
            finish.write_pov(w);
        }
        w.push(" }");
    }
}

impl ToPov for Media {
    fn write_pov(&self, w: &mut PovWriter) {
        w.push(&format!(
            "media {{ intervals {} samples {}, {} emission {} }}",
            self.intervals,
            self.samples.0,
            self.samples.1,
            num(self.emission)
        ));
    }
}

impl ToPov for Interior {
    fn write_pov(&self, w: &mut PovWriter) {
        w.push("interior {");
        if let Some(media) = &self.media {
            w.push(" ");
            media.write_pov(w);
        }
        w.push(" }");
    }
}

impl ToPov for TransformStep {
    fn write_pov(&self, w: &mut PovWriter) {
        match self {
            TransformStep::Rotate(angles) => w.push(&format!("rotate {}", vector(*angles))),
            TransformStep::Translate(offset) => w.push(&format!("translate {}", vector(*offset))),
            TransformStep::Scale(factor) => w.push(&format!("scale {}", num(*factor))),
        }
    }
}

impl ToPov for Transform {
    fn write_pov(&self, w: &mut PovWriter) {
        for step in self.steps() {
            step.write_pov(w);
            w.newline();
        }
    }
}

impl ToPov for Camera {
    fn write_pov(&self, w: &mut PovWriter) {
        w.open("camera");
        w.line(&format!("location {}", vector(self.location)));
        w.line(&format!("look_at {}", vector(self.look_at)));
        w.close();
    }
}

impl ToPov for LightSource {
    fn write_pov(&self, w: &mut PovWriter) {
        w.line(&format!(
            "light_source {{ {} color {} }}",
            vector(self.position),
            rgb(self.color)
        ));
    }
}

/// Write an optional trailing texture and close a one-line primitive
fn close_primitive(w: &mut PovWriter, texture: &Option<Texture>) {
    if let Some(texture) = texture {
        w.push(" ");
        texture.write_pov(w);
    }
    w.push(" }");
    w.newline();
}

impl ToPov for Union {
    fn write_pov(&self, w: &mut PovWriter) {
        if let Some(name) = &self.name {
            w.line(&format!("// {}", name));
        }
        w.open("union");
        for child in &self.children {
            child.write_pov(w);
        }
        if let Some(texture) = &self.texture {
            texture.write_pov(w);
            w.newline();
        }
        if let Some(interior) = &self.interior {
            interior.write_pov(w);
            w.newline();
        }
        if !self.transform.is_identity() {
            self.transform.write_pov(w);
        }
        w.close();
    }
}

impl ToPov for SceneObject {
    fn write_pov(&self, w: &mut PovWriter) {
        match self {
            SceneObject::Light(light) => light.write_pov(w),
            SceneObject::Polygon { points, texture } => {
                // SDL polygons list the closing point explicitly
                let mut outline: Vec<Vec3> = points.clone();
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    if first != last {
                        outline.push(*first);
                    }
                }
                let corners: Vec<String> = outline.iter().map(|p| vector(*p)).collect();
                w.push(&format!("polygon {{ {}, {}", outline.len(), corners.join(", ")));
                close_primitive(w, texture);
            }
            SceneObject::Cylinder { base, cap, radius, texture } => {
                w.push(&format!(
                    "cylinder {{ {}, {}, {}",
                    vector(*base),
                    vector(*cap),
                    num(*radius)
                ));
                close_primitive(w, texture);
            }
            SceneObject::Sphere { center, radius, texture } => {
                w.push(&format!("sphere {{ {}, {}", vector(*center), num(*radius)));
                close_primitive(w, texture);
            }
            SceneObject::Union(union) => union.write_pov(w),
        }
    }
}

impl ToPov for Scene {
    fn write_pov(&self, w: &mut PovWriter) {
        for include in &self.includes {
            w.line(&format!("#include \"{}\"", include));
        }
        if !self.includes.is_empty() {
            w.newline();
        }
        self.camera.write_pov(w);
        for object in &self.objects {
            w.newline();
            object.write_pov(w);
        }
    }
}
