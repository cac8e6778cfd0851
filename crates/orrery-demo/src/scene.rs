//! The reference scene: an axis sphere, a textured planet, and a textured moon.

use glam::Vec3;
use orrery_config::SceneConfig;
use orrery_mesh::{
    EmittedTriangle, Primitive, ShadingMode, TriangleSink, generate, triangle_winds_outward,
};

/// Which loaded texture a shape samples, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    Planet,
    Moon,
}

/// One sphere drawn per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeInstance {
    pub name: &'static str,
    pub mode: ShadingMode,
    pub texture: Option<TextureSlot>,
    /// Uniform scale applied by the renderer's transform.
    pub scale: f32,
}

/// The three shapes of the scene, in draw order.
pub fn reference_scene(config: &SceneConfig) -> [ShapeInstance; 3] {
    [
        ShapeInstance {
            name: "axis",
            mode: config.axis_mode,
            texture: None,
            scale: 1.0,
        },
        ShapeInstance {
            name: "planet",
            mode: config.planet_mode,
            texture: Some(TextureSlot::Planet),
            scale: 0.4,
        },
        ShapeInstance {
            name: "moon",
            mode: config.moon_mode,
            texture: Some(TextureSlot::Moon),
            scale: 0.04,
        },
    ]
}

/// Counting sink standing in for the draw calls of one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawStats {
    pub triangles: u64,
    pub normals: u64,
    pub line_loops: u64,
    pub polygons: u64,
    /// Triangles whose winding faces the sphere center. Only counted when
    /// validation is enabled.
    pub inward: u64,
    /// Largest deviation of a corner from the unit sphere.
    pub max_radius_error: f32,
    validate: bool,
}

impl DrawStats {
    pub fn new(validate: bool) -> Self {
        Self {
            validate,
            ..Default::default()
        }
    }
}

impl TriangleSink for DrawStats {
    fn emit(&mut self, triangle: &EmittedTriangle) {
        self.triangles += 1;
        self.normals += triangle.normal_count() as u64;
        match triangle.primitive() {
            Primitive::LineLoop => self.line_loops += 1,
            Primitive::Polygon => self.polygons += 1,
        }
        if self.validate {
            let [a, b, c] = triangle.positions;
            if !triangle_winds_outward(a, b, c) {
                self.inward += 1;
            }
            self.max_radius_error = triangle
                .positions
                .iter()
                .map(|p: &Vec3| (p.length() - 1.0).abs())
                .fold(self.max_radius_error, f32::max);
        }
    }
}

/// Generate one shape at `depth` into a fresh [`DrawStats`].
pub fn draw_shape(shape: &ShapeInstance, depth: u32, validate: bool) -> DrawStats {
    let mut stats = DrawStats::new(validate);
    generate(depth, shape.mode, &mut stats);
    stats
}
