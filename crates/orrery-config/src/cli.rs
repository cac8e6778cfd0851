//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Subdivided-sphere scene with bitmap textures")]
pub struct CliArgs {
    /// Subdivision depth for every sphere.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Bitmap texture for the planet.
    #[arg(long)]
    pub planet_texture: Option<PathBuf>,

    /// Bitmap texture for the moon.
    #[arg(long)]
    pub moon_texture: Option<PathBuf>,

    /// Largest texture width or height the renderer accepts.
    #[arg(long)]
    pub max_texture_size: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Check the winding of every generated triangle.
    #[arg(long)]
    pub validate: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the decoded textures as PNG files into this directory.
    #[arg(long)]
    pub export_textures: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(depth) = args.depth {
            self.scene.depth = depth;
        }
        if let Some(ref path) = args.planet_texture {
            self.texture.planet = path.clone();
        }
        if let Some(ref path) = args.moon_texture {
            self.texture.moon = path.clone();
        }
        if let Some(max) = args.max_texture_size {
            self.texture.max_dimension = max;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.validate {
            self.debug.validate_mesh = true;
        }
    }
}
