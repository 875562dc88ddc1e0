//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling a penrose120 scene: lights, tiled
//! rhombus surfaces and a projected polytope.

use penrose_core::{
    Camera, Color, Finish, Interior, LightSource, Palette, ProjectedPolytope, Rhombus, Scene,
    SceneObject, Texture, Transform, Union, Vec3,
};

/// Appearance and placement of one tiled surface
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceStyle {
    /// Tile colors by rhombus kind
    pub palette: Palette,
    /// Color of the edge cylinders and corner spheres
    pub edge_color: Color,
    /// Radius of the edge cylinders and corner spheres
    pub edge_thickness: f64,
    /// Finish shared by tiles and edges
    pub finish: Finish,
    /// Applied to the whole surface
    pub transform: Transform,
}

/// Appearance and placement of the projected polytope
#[derive(Clone, Debug, PartialEq)]
pub struct PolytopeStyle {
    /// Radius of the edge cylinders and vertex spheres
    pub edge_thickness: f64,
    /// Texture of the edge and vertex union
    pub edge_texture: Texture,
    /// Texture of the face union
    pub face_texture: Texture,
    /// Interior of the face union
    pub face_interior: Option<Interior>,
    /// Height above the floor after resting the lowest vertex on it
    pub lift: f64,
    pub scale: f64,
}

impl PolytopeStyle {
    /// Placement for a polytope whose lowest projected z is `bottom`
    ///
    /// The lowest point is moved to y = 0, then everything is pushed back
    /// by `lift` and scaled.
    pub fn placement(&self, bottom: f64) -> Transform {
        Transform::identity()
            .translate(Vec3::new(0.0, -bottom, self.lift))
            .scale(self.scale)
    }
}

/// Builder for constructing penrose120 scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(camera)
///     .with_include("colors.inc")
///     .add_light(LightSource::new(Vec3::new(50.0, -50.0, -50.0), Color::WHITE))
///     .add_tiled_surface("floor", tiling.tiles(15)?, &floor_style)
///     .add_polytope("cell120", &projected, &polytope_style)
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create a new scene builder looking through `camera`
    pub fn new(camera: Camera) -> Self {
        Self {
            scene: Scene::new(camera),
        }
    }

    /// Add an include file to the scene header
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.scene = self.scene.with_include(include);
        self
    }

    /// Add a point light
    pub fn add_light(mut self, light: LightSource) -> Self {
        self.scene.add_object(SceneObject::Light(light));
        self
    }

    /// Add a tiled surface as a single union
    ///
    /// Every rhombus becomes a closed polygon in its kind's color, a
    /// cylinder along each side and a sphere at each corner. Tiles lie in
    /// the z = 0 plane before the style's transform is applied.
    pub fn add_tiled_surface<I>(mut self, name: &str, tiles: I, style: &SurfaceStyle) -> Self
    where
        I: IntoIterator<Item = Rhombus>,
    {
        let edge_texture = Texture::solid(style.edge_color, style.finish);
        let mut children = Vec::new();
        let mut tile_count = 0usize;

        for tile in tiles {
            let corners = tile.vertices.map(|v| v.extend(0.0));
            let tile_texture = Texture::solid(style.palette.color_for(tile.kind), style.finish);
            children.push(SceneObject::polygon(corners.to_vec(), Some(tile_texture)));

            for i in 0..corners.len() {
                let next = corners[(i + 1) % corners.len()];
                children.push(SceneObject::cylinder(
                    corners[i],
                    next,
                    style.edge_thickness,
                    Some(edge_texture.clone()),
                ));
            }
            for corner in corners {
                children.push(SceneObject::sphere(
                    corner,
                    style.edge_thickness,
                    Some(edge_texture.clone()),
                ));
            }
            tile_count += 1;
        }

        log::info!("Surface '{}': {} tiles", name, tile_count);

        let union = Union::new(children)
            .with_name(name)
            .with_transform(style.transform.clone());
        self.scene.add_object(SceneObject::Union(union));
        self
    }

    /// Add a projected polytope as a union of its skeleton and its faces
    ///
    /// Vertices become spheres and edges cylinders, grouped under the edge
    /// texture. Faces become pentagons grouped under the face texture and
    /// interior. Both groups share the placement computed from the
    /// projection's lowest point.
    pub fn add_polytope(mut self, name: &str, projected: &ProjectedPolytope<'_>, style: &PolytopeStyle) -> Self {
        let radius = style.edge_thickness;

        let skeleton: Vec<SceneObject> = projected
            .vertices()
            .iter()
            .map(|&v| SceneObject::sphere(v, radius, None))
            .chain(
                projected
                    .edge_segments()
                    .map(|(a, b)| SceneObject::cylinder(a, b, radius, None)),
            )
            .collect();

        let faces: Vec<SceneObject> = projected
            .face_polygons()
            .map(|face| SceneObject::polygon(face.to_vec(), None))
            .collect();

        let mut face_union = Union::new(faces).with_texture(style.face_texture.clone());
        if let Some(interior) = style.face_interior {
            face_union = face_union.with_interior(interior);
        }

        let bottom = projected.bottom().unwrap_or(0.0);
        log::info!(
            "Polytope '{}': {} vertices, {} edges, {} faces, bottom {:.6}",
            name,
            projected.vertices().len(),
            projected.polytope().edge_count(),
            projected.polytope().face_count(),
            bottom
        );

        let union = Union::new(vec![
            SceneObject::Union(Union::new(skeleton).with_texture(style.edge_texture.clone())),
            SceneObject::Union(face_union),
        ])
        .with_name(name)
        .with_transform(style.placement(bottom));
        self.scene.add_object(SceneObject::Union(union));
        self
    }

    /// Build the scene
    pub fn build(self) -> Scene {
        let stats = self.scene.stats();
        log::debug!(
            "Scene built: {} lights, {} polygons, {} cylinders, {} spheres",
            stats.lights,
            stats.polygons,
            stats.cylinders,
            stats.spheres
        );
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penrose_core::{
        Media, PenroseTiling, Pigment, Polytope, RhombusKind, ShiftVector, StereographicProjection,
        TransformStep,
    };

    const EPSILON: f64 = 1e-9;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 60.0, -100.0), Vec3::new(0.0, 0.0, 110.0))
    }

    fn test_tiling() -> PenroseTiling {
        PenroseTiling::new(ShiftVector::new([0.1, 0.2, 0.3, 0.4, 0.5]))
    }

    fn test_surface_style() -> SurfaceStyle {
        SurfaceStyle {
            palette: Palette::new(Color::MAGENTA, Color::CYAN),
            edge_color: Color::WHITE,
            edge_thickness: 0.05,
            finish: Finish::TILE,
            transform: Transform::identity().rotate(Vec3::new(90.0, 0.0, 0.0)).scale(10.0),
        }
    }

    fn test_polytope_style() -> PolytopeStyle {
        PolytopeStyle {
            edge_thickness: 0.05,
            edge_texture: Texture::solid(Color::WHITE, Finish::CHROME).with_base("T_Chrome_4D"),
            face_texture: Texture::new(Pigment::new(Color::BLUE).with_transmit(0.7), Finish::FLAT),
            face_interior: Some(Interior::with_media(Media::default())),
            lift: 4.0,
            scale: 7.0,
        }
    }

    fn only_union(scene: &Scene) -> &Union {
        match scene.objects.as_slice() {
            [SceneObject::Union(union)] => union,
            other => panic!("Expected a single union, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new(test_camera()).build();
        assert!(scene.objects.is_empty());
        assert!(scene.includes.is_empty());
        assert_eq!(scene.camera, test_camera());
    }

    #[test]
    fn test_scene_with_lights_and_includes() {
        let scene = SceneBuilder::new(test_camera())
            .with_include("colors.inc")
            .with_include("metals.inc")
            .add_light(LightSource::new(Vec3::new(50.0, -50.0, -50.0), Color::WHITE))
            .add_light(LightSource::new(Vec3::new(-50.0, 50.0, -50.0), Color::WHITE))
            .build();

        assert_eq!(scene.includes, vec!["colors.inc", "metals.inc"]);
        assert_eq!(scene.stats().lights, 2);
    }

    #[test]
    fn test_tiled_surface_primitive_counts() {
        let tiles = test_tiling().tiles(1).unwrap();
        let scene = SceneBuilder::new(test_camera())
            .add_tiled_surface("floor", tiles, &test_surface_style())
            .build();

        let stats = scene.stats();
        assert_eq!(stats.unions, 1);
        assert_eq!(stats.polygons, 90);
        assert_eq!(stats.cylinders, 360);
        assert_eq!(stats.spheres, 360);
        assert_eq!(stats.primitives(), 9 * 90);
    }

    #[test]
    fn test_tiled_surface_union_carries_name_and_transform() {
        let style = test_surface_style();
        let scene = SceneBuilder::new(test_camera())
            .add_tiled_surface("floor", test_tiling().tiles(0).unwrap(), &style)
            .build();

        let union = only_union(&scene);
        assert_eq!(union.name.as_deref(), Some("floor"));
        assert_eq!(union.transform, style.transform);
        assert!(union.texture.is_none());
    }

    #[test]
    fn test_tile_polygon_colored_by_kind() {
        let style = test_surface_style();
        let tile = test_tiling().rhombus(0, 1, 0, 0).unwrap();
        assert_eq!(tile.kind, RhombusKind::Thin);

        let scene = SceneBuilder::new(test_camera())
            .add_tiled_surface("floor", [tile], &style)
            .build();

        match &only_union(&scene).children[0] {
            SceneObject::Polygon { points, texture } => {
                assert_eq!(points.len(), 4);
                assert!(points.iter().all(|p| p.z == 0.0));
                let pigment = texture.as_ref().and_then(|t| t.pigment).unwrap();
                assert_eq!(pigment.color, Color::MAGENTA);
            }
            other => panic!("Expected polygon first, got {:?}", other),
        }
    }

    #[test]
    fn test_tile_edges_follow_outline() {
        let tile = test_tiling().rhombus(1, 3, -1, 2).unwrap();
        let scene = SceneBuilder::new(test_camera())
            .add_tiled_surface("wall", [tile], &test_surface_style())
            .build();

        let children = &only_union(&scene).children;
        assert_eq!(children.len(), 9);
        for (i, child) in children[1..5].iter().enumerate() {
            match child {
                SceneObject::Cylinder { base, cap, radius, .. } => {
                    assert_eq!(*base, tile.vertices[i].extend(0.0));
                    assert_eq!(*cap, tile.vertices[(i + 1) % 4].extend(0.0));
                    assert_eq!(*radius, 0.05);
                }
                other => panic!("Expected cylinder, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_polytope_union_structure() {
        let polytope = Polytope::cell120().unwrap();
        let projection = StereographicProjection::new(2.0).unwrap();
        let projected = polytope.project(&projection).unwrap();

        let scene = SceneBuilder::new(test_camera())
            .add_polytope("cell120", &projected, &test_polytope_style())
            .build();

        let stats = scene.stats();
        assert_eq!(stats.spheres, 600);
        assert_eq!(stats.cylinders, 1200);
        assert_eq!(stats.polygons, 720);
        assert_eq!(stats.unions, 3);

        let outer = only_union(&scene);
        assert_eq!(outer.name.as_deref(), Some("cell120"));
        match &outer.children[1] {
            SceneObject::Union(faces) => {
                assert!(faces.interior.is_some());
                assert_eq!(faces.texture.as_ref().and_then(|t| t.pigment).map(|p| p.transmit), Some(0.7));
            }
            other => panic!("Expected face union, got {:?}", other),
        }
    }

    #[test]
    fn test_polytope_placement_rests_on_floor() {
        let style = test_polytope_style();
        let transform = style.placement(-3.5);
        match transform.steps() {
            [TransformStep::Translate(offset), TransformStep::Scale(factor)] => {
                assert!((offset.y - 3.5).abs() < EPSILON);
                assert_eq!(offset.z, 4.0);
                assert_eq!(*factor, 7.0);
            }
            other => panic!("Unexpected steps {:?}", other),
        }
    }
}
