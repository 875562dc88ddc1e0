//! Scene model
//!
//! A [`Scene`] is a camera, a list of include files and a tree of
//! [`SceneObject`]s. The object kinds are a closed set: point lights,
//! polygons, cylinders, spheres and unions that group other objects under a
//! shared texture, interior and transform.

use penrose_math::Vec3;

use crate::material::{Color, Interior, Texture};
use crate::transform::Transform;

/// Pinhole camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub location: Vec3,
    pub look_at: Vec3,
}

impl Camera {
    pub fn new(location: Vec3, look_at: Vec3) -> Self {
        Self { location, look_at }
    }
}

/// Point light
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vec3,
    pub color: Color,
}

impl LightSource {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// A group of objects sharing modifiers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Union {
    /// Optional name, written as a comment for readability of the output
    pub name: Option<String>,
    pub children: Vec<SceneObject>,
    pub texture: Option<Texture>,
    pub interior: Option<Interior>,
    pub transform: Transform,
}

impl Union {
    pub fn new(children: Vec<SceneObject>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_interior(mut self, interior: Interior) -> Self {
        self.interior = Some(interior);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// A renderable scene element
#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Light(LightSource),
    /// Planar polygon; the outline is closed implicitly, last point back to first
    Polygon {
        points: Vec<Vec3>,
        texture: Option<Texture>,
    },
    Cylinder {
        base: Vec3,
        cap: Vec3,
        radius: f64,
        texture: Option<Texture>,
    },
    Sphere {
        center: Vec3,
        radius: f64,
        texture: Option<Texture>,
    },
    Union(Union),
}

impl SceneObject {
    pub fn polygon(points: Vec<Vec3>, texture: Option<Texture>) -> Self {
        SceneObject::Polygon { points, texture }
    }

    pub fn cylinder(base: Vec3, cap: Vec3, radius: f64, texture: Option<Texture>) -> Self {
        SceneObject::Cylinder { base, cap, radius, texture }
    }

    pub fn sphere(center: Vec3, radius: f64, texture: Option<Texture>) -> Self {
        SceneObject::Sphere { center, radius, texture }
    }

    /// Add this object's primitives to a running tally
    fn tally(&self, stats: &mut SceneStats) {
        match self {
            SceneObject::Light(_) => stats.lights += 1,
            SceneObject::Polygon { .. } => stats.polygons += 1,
            SceneObject::Cylinder { .. } => stats.cylinders += 1,
            SceneObject::Sphere { .. } => stats.spheres += 1,
            SceneObject::Union(union) => {
                stats.unions += 1;
                for child in &union.children {
                    child.tally(stats);
                }
            }
        }
    }
}

/// Primitive counts over a whole object tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub lights: usize,
    pub polygons: usize,
    pub cylinders: usize,
    pub spheres: usize,
    pub unions: usize,
}

impl SceneStats {
    /// Count the primitives in a slice of objects, descending into unions
    pub fn of(objects: &[SceneObject]) -> Self {
        let mut stats = Self::default();
        for object in objects {
            object.tally(&mut stats);
        }
        stats
    }

    /// Number of non-union objects
    pub fn primitives(&self) -> usize {
        self.lights + self.polygons + self.cylinders + self.spheres
    }
}

/// A complete scene ready to be written out
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    /// Files to `#include` before the objects, e.g. `colors.inc`
    pub includes: Vec<String>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            includes: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add an include file
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    /// Add an object to this scene
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Primitive counts for the whole scene
    pub fn stats(&self) -> SceneStats {
        SceneStats::of(&self.objects)
    }
}
