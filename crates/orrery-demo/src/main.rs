//! Headless driver for the orrery scene.
//!
//! Loads `config.ron` (CLI flags override it), decodes the planet and moon
//! textures, and generates every sphere of one frame into counting sinks.
//! Run with `cargo run -p orrery-demo -- --depth 5 --validate`.

mod scene;
mod textures;

use std::path::Path;
use std::time::Instant;

use clap::Parser;
use orrery_config::{CliArgs, Config};
use orrery_mesh::{SphereMesh, triangle_count};
use orrery_texture::{LoadedTexture, TextureLoader};
use tracing::{error, info, warn};

use crate::scene::{TextureSlot, draw_shape, reference_scene};
use crate::textures::{export_png, load_or_placeholder, placeholder_slots};

fn main() {
    let args = CliArgs::parse();

    let Some(config_dir) = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("orrery")))
    else {
        eprintln!("Failed to resolve config directory; pass --config");
        std::process::exit(1);
    };

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    let loader = TextureLoader::with_fallback_size(config.texture.fallback_size).unwrap_or_default();
    let limits = config.texture.max_dimension;
    let (planet, planet_err) =
        load_or_placeholder(&loader, "planet", &config.texture.planet, &limits);
    let (moon, moon_err) = load_or_placeholder(&loader, "moon", &config.texture.moon, &limits);
    let placeholders =
        placeholder_slots([(TextureSlot::Planet, planet_err), (TextureSlot::Moon, moon_err)]);

    if let Some(dir) = &args.export_textures {
        export_textures(dir, &[("planet", &planet), ("moon", &moon)]);
    }

    render_frame(&config, &planet, &moon, &placeholders);
}

/// Generate every shape of one frame and report what a renderer would draw.
fn render_frame(
    config: &Config,
    planet: &LoadedTexture,
    moon: &LoadedTexture,
    placeholders: &[TextureSlot],
) {
    let depth = config.scene.depth;
    let validate = config.debug.validate_mesh;
    info!(
        "Frame at depth {depth}: {} triangles per sphere",
        triangle_count(depth).unwrap_or(u64::MAX)
    );

    for shape in reference_scene(&config.scene) {
        let started = Instant::now();
        let stats = draw_shape(&shape, depth, validate);
        let texture = shape.texture.map(|slot| match slot {
            TextureSlot::Planet => planet,
            TextureSlot::Moon => moon,
        });
        let placeholder = shape.texture.is_some_and(|slot| placeholders.contains(&slot));

        info!(
            "{:>6}: {:?}, scale {}, {} triangles, {} normals, texture {} in {:.1?}",
            shape.name,
            shape.mode,
            shape.scale,
            stats.triangles,
            stats.normals,
            texture.map_or("none".to_string(), |t| format!(
                "{}x{}{}",
                t.width,
                t.height,
                if placeholder { " placeholder" } else { "" }
            )),
            started.elapsed()
        );

        if validate {
            if stats.inward > 0 {
                error!("{}: {} triangles wind inward", shape.name, stats.inward);
            } else {
                info!(
                    "{}: winding ok, max radius error {:.2e}",
                    shape.name, stats.max_radius_error
                );
            }
        }

        if texture.is_some() {
            let mesh = SphereMesh::build(depth, shape.mode);
            info!(
                "{}: {} vertices with UVs for texture mapping",
                shape.name,
                mesh.vertex_count()
            );
        }
    }

    if !placeholders.is_empty() {
        warn!(
            "Frame drawn with {} placeholder texture(s): {placeholders:?}",
            placeholders.len()
        );
    }
}

fn export_textures(dir: &Path, textures: &[(&str, &LoadedTexture)]) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!("Cannot create {}: {e}", dir.display());
        return;
    }
    for (name, texture) in textures {
        let path = dir.join(format!("{name}.png"));
        match export_png(texture, &path) {
            Ok(()) => info!("Exported {name} texture to {}", path.display()),
            Err(e) => warn!("Failed to export {name} texture: {e}"),
        }
    }
}
