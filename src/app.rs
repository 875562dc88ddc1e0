//! Top-level run: configuration in, scene file (and image) out

use std::path::Path;

use penrose_core::{
    tile_count, PenroseTiling, Polytope, PolytopeLoadError, Scene, StereographicProjection,
};
use penrose_render::PovWriter;

use crate::config::{AppConfig, PolytopeConfig};
use crate::error::AppError;
use crate::scene::SceneBuilder;

/// Load the configured polytope table, or the bundled 120-cell
pub fn load_polytope(config: &PolytopeConfig) -> Result<Polytope, PolytopeLoadError> {
    match &config.path {
        Some(path) => {
            log::info!("Loading polytope from {}", path);
            Polytope::load(path)
        }
        None => Polytope::cell120(),
    }
}

/// Assemble the full scene: lights, floor, both walls and the polytope
///
/// All three surfaces are cut from the same tiling.
pub fn build_scene(config: &AppConfig, tiling: &PenroseTiling, polytope: &Polytope) -> Result<Scene, AppError> {
    let line_count = config.tiling.line_count;
    let surfaces = &config.surfaces;

    let projection = StereographicProjection::new(config.polytope.pole)?;
    let projected = polytope.project(&projection)?;

    if let Some(count) = tile_count(line_count) {
        log::debug!("Tiling {} lines per family: {} tiles per surface", line_count, count);
    }

    let mut builder = SceneBuilder::new(config.camera.camera());
    for include in &config.output.includes {
        builder = builder.with_include(include.as_str());
    }
    for light in &config.lights {
        builder = builder.add_light(light.light());
    }

    let scene = builder
        .add_tiled_surface("floor", tiling.tiles(line_count)?, &surfaces.style(&surfaces.floor))
        .add_tiled_surface("left wall", tiling.tiles(line_count)?, &surfaces.style(&surfaces.left_wall))
        .add_tiled_surface("right wall", tiling.tiles(line_count)?, &surfaces.style(&surfaces.right_wall))
        .add_polytope(&polytope.name, &projected, &config.polytope.style())
        .build();

    let stats = scene.stats();
    log::info!(
        "Scene has {} objects ({} primitives in {} unions)",
        scene.objects.len(),
        stats.primitives(),
        stats.unions
    );
    Ok(scene)
}

/// Build the scene, write it out and optionally render it
pub fn run(config: &AppConfig) -> Result<Scene, AppError> {
    let shift = config.tiling.shift_vector();
    log::info!("Shift vector: {:?}", shift.as_array());

    let tiling = PenroseTiling::new(shift);
    let polytope = load_polytope(&config.polytope)?;
    log::info!(
        "Loaded {}: {} vertices, {} edges, {} faces",
        polytope.name,
        polytope.vertex_count(),
        polytope.edge_count(),
        polytope.face_count()
    );

    let scene = build_scene(config, &tiling, &polytope)?;

    let output = &config.output;
    PovWriter::write_file(&scene, &output.scene_path)?;

    if output.render {
        output
            .renderer()
            .render(Path::new(&output.scene_path), Path::new(&output.image_path))?;
    } else {
        log::info!("Rendering disabled, scene left at {}", output.scene_path);
    }

    Ok(scene)
}
