//! Surface appearance
//!
//! Colors, pigments, finishes and textures as plain records, plus the
//! interior/media record used to give the polytope's faces a glow.

use serde::{Serialize, Deserialize};

use penrose_math::RhombusKind;

/// An RGB color, each component 0.0-1.0
///
/// Serialized as a `[r, g, b]` array so config files stay compact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f64; 3]> for Color {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Base color with optional transparency
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pigment {
    pub color: Color,
    /// Fraction of light passed through, 0.0 = opaque
    #[serde(default)]
    pub transmit: f64,
}

impl Pigment {
    pub fn new(color: Color) -> Self {
        Self { color, transmit: 0.0 }
    }

    pub fn with_transmit(mut self, transmit: f64) -> Self {
        self.transmit = transmit;
        self
    }
}

/// Lighting response; unset fields are left to the renderer's defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finish {
    pub ambient: Option<f64>,
    pub diffuse: Option<f64>,
    pub phong: Option<f64>,
    pub reflection: Option<f64>,
    pub brilliance: Option<f64>,
}

impl Finish {
    /// Matte-with-highlight finish used on the tiled surfaces
    pub const TILE: Self = Self {
        ambient: Some(0.3),
        diffuse: Some(0.7),
        phong: Some(1.0),
        reflection: None,
        brilliance: None,
    };

    /// Polished finish used on the polytope's edges
    pub const CHROME: Self = Self {
        ambient: None,
        diffuse: None,
        phong: None,
        reflection: Some(0.4),
        brilliance: Some(0.4),
    };

    /// Flat finish used on the polytope's faces
    pub const FLAT: Self = Self {
        ambient: None,
        diffuse: None,
        phong: None,
        reflection: Some(0.0),
        brilliance: Some(0.0),
    };

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Texture: optional named base texture, pigment and finish
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    /// Identifier of a texture declared in an included file, e.g. `T_Chrome_4D`
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub pigment: Option<Pigment>,
    #[serde(default)]
    pub finish: Option<Finish>,
}

impl Texture {
    pub fn new(pigment: Pigment, finish: Finish) -> Self {
        Self {
            base: None,
            pigment: Some(pigment),
            finish: Some(finish),
        }
    }

    /// Solid color with the given finish
    pub fn solid(color: Color, finish: Finish) -> Self {
        Self::new(Pigment::new(color), finish)
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

/// Participating media inside a closed object
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub intervals: u32,
    /// Minimum and maximum samples per interval
    pub samples: (u32, u32),
    pub emission: f64,
}

impl Default for Media {
    fn default() -> Self {
        Self {
            intervals: 1,
            samples: (1, 1),
            emission: 1.0,
        }
    }
}

/// Interior of an object; only media is modelled
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Interior {
    #[serde(default)]
    pub media: Option<Media>,
}

impl Interior {
    pub fn with_media(media: Media) -> Self {
        Self { media: Some(media) }
    }
}

/// Thin/fat rhombus colors for one tiled surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub thin: Color,
    pub fat: Color,
}

impl Palette {
    pub fn new(thin: Color, fat: Color) -> Self {
        Self { thin, fat }
    }

    pub fn color_for(&self, kind: RhombusKind) -> Color {
        match kind {
            RhombusKind::Thin => self.thin,
            RhombusKind::Fat => self.fat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_color_for() {
        let palette = Palette::new(Color::MAGENTA, Color::CYAN);
        assert_eq!(palette.color_for(RhombusKind::Thin), Color::MAGENTA);
        assert_eq!(palette.color_for(RhombusKind::Fat), Color::CYAN);
    }

    #[test]
    fn test_color_array_conversion() {
        let c = Color::from([0.75, 0.25, 1.0]);
        assert_eq!(c, Color::new(0.75, 0.25, 1.0));
        let a: [f64; 3] = c.into();
        assert_eq!(a, [0.75, 0.25, 1.0]);
    }

    #[test]
    fn test_color_serializes_as_array() {
        let ron = ron::to_string(&Color::new(0.5, 0.0, 1.0)).unwrap();
        assert!(!ron.contains("r:"), "expected a sequence, got {}", ron);
        let back: Color = ron::from_str(&ron).unwrap();
        assert_eq!(back, Color::new(0.5, 0.0, 1.0));
    }

    #[test]
    fn test_finish_is_empty() {
        assert!(Finish::default().is_empty());
        assert!(!Finish::TILE.is_empty());
    }

    #[test]
    fn test_texture_builders() {
        let t = Texture::solid(Color::WHITE, Finish::CHROME).with_base("T_Chrome_4D");
        assert_eq!(t.base.as_deref(), Some("T_Chrome_4D"));
        assert_eq!(t.pigment.unwrap().transmit, 0.0);
        assert_eq!(t.finish, Some(Finish::CHROME));
    }

    #[test]
    fn test_default_media() {
        let interior = Interior::with_media(Media::default());
        let media = interior.media.unwrap();
        assert_eq!(media.intervals, 1);
        assert_eq!(media.samples, (1, 1));
        assert_eq!(media.emission, 1.0);
    }
}
