//! Scene configuration with reference defaults and RON persistence.

use std::path::{Path, PathBuf};

use orrery_mesh::ShadingMode;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Deepest subdivision accepted; depth 12 is already ~67M triangles per sphere.
pub const MAX_DEPTH: u32 = 12;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Shapes and how they are shaded.
    pub scene: SceneConfig,
    /// Texture files and dimension limits.
    pub texture: TextureConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// The three sphere instances of the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Subdivision depth shared by every instance.
    pub depth: u32,
    /// Shading of the untextured axis sphere.
    pub axis_mode: ShadingMode,
    /// Shading of the textured planet.
    pub planet_mode: ShadingMode,
    /// Shading of the textured moon.
    pub moon_mode: ShadingMode,
}

/// Texture sources and limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Bitmap mapped onto the planet.
    pub planet: PathBuf,
    /// Bitmap mapped onto the moon.
    pub moon: PathBuf,
    /// Largest texture side the renderer accepts.
    pub max_dimension: u32,
    /// Square size non-conforming textures are resampled to.
    pub fallback_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Check the winding of every generated triangle.
    pub validate_mesh: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            depth: 7,
            axis_mode: ShadingMode::Wireframe,
            planet_mode: ShadingMode::Flat,
            moon_mode: ShadingMode::Smooth,
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            planet: PathBuf::from("earth.bmp"),
            moon: PathBuf::from("moon.bmp"),
            max_dimension: 4096,
            fallback_size: 256,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            validate_mesh: false,
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::Write)
    }

    /// Reject values the scene cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.depth > MAX_DEPTH {
            return Err(ConfigError::Invalid {
                field: "scene.depth",
                reason: format!("{} exceeds maximum of {MAX_DEPTH}", self.scene.depth),
            });
        }
        if self.texture.max_dimension == 0 {
            return Err(ConfigError::Invalid {
                field: "texture.max_dimension",
                reason: "must be positive".to_string(),
            });
        }
        if !self.texture.fallback_size.is_power_of_two() {
            return Err(ConfigError::Invalid {
                field: "texture.fallback_size",
                reason: format!("{} is not a power of two", self.texture.fallback_size),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_scene() {
        let config = Config::default();
        assert_eq!(config.scene.depth, 7);
        assert_eq!(config.scene.axis_mode, ShadingMode::Wireframe);
        assert_eq!(config.scene.planet_mode, ShadingMode::Flat);
        assert_eq!(config.scene.moon_mode, ShadingMode::Smooth);
        assert_eq!(config.texture.fallback_size, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_serializes() {
        let ron_str =
            ron::ser::to_string_pretty(&Config::default(), ron::ser::PrettyConfig::new()).unwrap();
        assert!(ron_str.contains("depth: 7"));
        assert!(ron_str.contains("moon_mode: Smooth"));
        assert!(ron_str.contains("\"earth.bmp\""));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(scene: (depth: 3))").unwrap();
        assert_eq!(config.scene.depth, 3);
        assert_eq!(config.scene.planet_mode, ShadingMode::Flat);
        assert_eq!(config.texture, TextureConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.scene.depth = 4;
        config.scene.planet_mode = ShadingMode::Smooth;
        config.texture.moon = PathBuf::from("textures/moon.bmp");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.scene.depth = MAX_DEPTH + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "scene.depth", .. })
        ));

        let mut config = Config::default();
        config.texture.fallback_size = 100;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "texture.fallback_size", .. })
        ));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "(texture: (max_dimension: 0))").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }), "got {err:?}");
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
