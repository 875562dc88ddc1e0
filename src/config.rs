//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`P120_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env, Serialized}};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use std::path::Path;

use penrose_core::{
    Camera, Color, Finish, Interior, LightSource, Media, Palette, Pigment, ShiftVector, Texture,
    Transform, Vec3,
};

use penrose_render::PovRayRenderer;

use crate::scene::{PolytopeStyle, SurfaceStyle};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Penrose tiling configuration
    #[serde(default)]
    pub tiling: TilingConfig,
    /// Floor and wall appearance
    #[serde(default)]
    pub surfaces: SurfacesConfig,
    /// Polytope projection and appearance
    #[serde(default)]
    pub polytope: PolytopeConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Point lights
    #[serde(default = "default_lights")]
    pub lights: Vec<LightConfig>,
    /// Scene file and renderer configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tiling: TilingConfig::default(),
            surfaces: SurfacesConfig::default(),
            polytope: PolytopeConfig::default(),
            camera: CameraConfig::default(),
            lights: default_lights(),
            output: OutputConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`P120_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        // Built-in defaults fill any key the files leave out
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // P120_TILING__LINE_COUNT=5 -> tiling.line_count = 5
        figment = figment.merge(Env::prefixed("P120_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Penrose tiling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilingConfig {
    /// Grid lines per family on each side of the origin
    pub line_count: i64,
    /// Seed for the random shift vector; unseeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Explicit shift vector, takes precedence over `seed`
    #[serde(default)]
    pub shift: Option<[f64; 5]>,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            line_count: 15,
            seed: None,
            shift: None,
        }
    }
}

impl TilingConfig {
    /// The shift vector for this run
    pub fn shift_vector(&self) -> ShiftVector {
        match (self.shift, self.seed) {
            (Some(shift), _) => ShiftVector::new(shift),
            (None, Some(seed)) => ShiftVector::random(&mut StdRng::seed_from_u64(seed)),
            (None, None) => ShiftVector::random(&mut rand::thread_rng()),
        }
    }
}

/// Appearance shared by the three tiled surfaces, plus each surface's own settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfacesConfig {
    /// Color of rhombus edges and corners
    pub edge_color: Color,
    /// Radius of rhombus edge cylinders and corner spheres
    pub edge_thickness: f64,
    /// Finish applied to tiles and edges
    pub finish: Finish,
    /// Uniform scale applied after each surface's placement
    pub scale: f64,
    pub floor: SurfaceConfig,
    pub left_wall: SurfaceConfig,
    pub right_wall: SurfaceConfig,
}

impl Default for SurfacesConfig {
    fn default() -> Self {
        Self {
            edge_color: Color::WHITE,
            edge_thickness: 0.05,
            finish: Finish::TILE,
            scale: 10.0,
            floor: SurfaceConfig {
                thin_color: Color::MAGENTA,
                fat_color: Color::CYAN,
                rotate: [90.0, 0.0, 0.0],
                translate: [0.0, 0.0, 0.0],
            },
            left_wall: SurfaceConfig {
                thin_color: Color::new(0.75, 0.25, 1.0),
                fat_color: Color::new(1.0, 0.25, 0.5),
                rotate: [0.0, -60.0, 0.0],
                translate: [-10.0, 0.0, 10.0],
            },
            right_wall: SurfaceConfig {
                thin_color: Color::new(0.5, 0.0, 1.0),
                fat_color: Color::new(0.0, 0.5, 1.0),
                rotate: [0.0, 60.0, 0.0],
                translate: [10.0, 0.0, 10.0],
            },
        }
    }
}

impl SurfacesConfig {
    /// Shared appearance combined with one surface's palette and placement
    pub fn style(&self, surface: &SurfaceConfig) -> SurfaceStyle {
        SurfaceStyle {
            palette: surface.palette(),
            edge_color: self.edge_color,
            edge_thickness: self.edge_thickness,
            finish: self.finish,
            transform: surface.transform(self.scale),
        }
    }
}

/// Palette and placement of one tiled surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub thin_color: Color,
    pub fat_color: Color,
    /// Rotation in degrees about x, y, z
    pub rotate: [f64; 3],
    pub translate: [f64; 3],
}

impl SurfaceConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.thin_color, self.fat_color)
    }

    /// Rotate, translate, then scale by `scale`
    pub fn transform(&self, scale: f64) -> Transform {
        Transform::identity()
            .rotate(Vec3::from(self.rotate))
            .translate(Vec3::from(self.translate))
            .scale(scale)
    }
}

/// Polytope projection and appearance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolytopeConfig {
    /// RON table to load instead of the bundled 120-cell
    #[serde(default)]
    pub path: Option<String>,
    /// Stereographic projection pole
    pub pole: f64,
    /// Radius of edge cylinders and vertex spheres
    pub edge_thickness: f64,
    pub edge_color: Color,
    /// Texture declared in an included file, layered under the edge pigment
    pub edge_texture: String,
    pub edge_finish: Finish,
    pub face_color: Color,
    /// Face transparency, 0.0 = opaque
    pub face_transmit: f64,
    pub face_finish: Finish,
    /// Glowing media inside the faces
    pub media: Media,
    /// Offset along z after resting the polytope on the floor
    pub lift: f64,
    pub scale: f64,
}

impl Default for PolytopeConfig {
    fn default() -> Self {
        Self {
            path: None,
            pole: 2.0,
            edge_thickness: 0.05,
            edge_color: Color::WHITE,
            edge_texture: "T_Chrome_4D".to_string(),
            edge_finish: Finish::CHROME,
            face_color: Color::BLUE,
            face_transmit: 0.7,
            face_finish: Finish::FLAT,
            media: Media::default(),
            lift: 4.0,
            scale: 7.0,
        }
    }
}

impl PolytopeConfig {
    pub fn style(&self) -> PolytopeStyle {
        PolytopeStyle {
            edge_thickness: self.edge_thickness,
            edge_texture: Texture::solid(self.edge_color, self.edge_finish)
                .with_base(self.edge_texture.clone()),
            face_texture: Texture::new(
                Pigment::new(self.face_color).with_transmit(self.face_transmit),
                self.face_finish,
            ),
            face_interior: Some(Interior::with_media(self.media)),
            lift: self.lift,
            scale: self.scale,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera position [x, y, z]
    pub location: [f64; 3],
    /// Point the camera faces [x, y, z]
    pub look_at: [f64; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            location: [0.0, 60.0, -100.0],
            look_at: [0.0, 0.0, 110.0],
        }
    }
}

/// Point light configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightConfig {
    pub position: [f64; 3],
    #[serde(default)]
    pub color: Color,
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(Vec3::from(self.location), Vec3::from(self.look_at))
    }
}

impl LightConfig {
    pub fn light(&self) -> LightSource {
        LightSource::new(Vec3::from(self.position), self.color)
    }
}

fn default_lights() -> Vec<LightConfig> {
    vec![
        LightConfig {
            position: [50.0, -50.0, -50.0],
            color: Color::WHITE,
        },
        LightConfig {
            position: [-50.0, 50.0, -50.0],
            color: Color::WHITE,
        },
    ]
}

/// Scene file and renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the scene description is written
    pub scene_path: String,
    /// Where the renderer writes the image
    pub image_path: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pass `+A` to the renderer
    pub antialias: bool,
    /// Adaptive anti-aliasing threshold, used when `antialias` is set
    pub antialiasing: f64,
    /// Run the renderer after writing the scene
    pub render: bool,
    /// Renderer executable
    pub povray_binary: String,
    /// Files included at the top of the scene
    pub includes: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            scene_path: "penrose_povray.pov".to_string(),
            image_path: "penrose_povray.png".to_string(),
            width: 600,
            height: 480,
            antialias: true,
            antialiasing: 0.001,
            render: true,
            povray_binary: "povray".to_string(),
            includes: vec!["colors.inc".to_string(), "metals.inc".to_string()],
        }
    }
}

impl OutputConfig {
    /// Renderer settings for this output
    pub fn renderer(&self) -> PovRayRenderer {
        let threshold = if self.antialias { Some(self.antialiasing) } else { None };
        PovRayRenderer::new(self.width, self.height)
            .with_binary(self.povray_binary.as_str())
            .with_antialiasing(threshold)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
