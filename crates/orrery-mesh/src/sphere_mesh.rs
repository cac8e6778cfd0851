//! Collected, non-indexed vertex streams for GPU upload.

use glam::Vec3;

use crate::emit::{EmittedTriangle, Normals, ShadingMode, TriangleSink};
use crate::subdivide::{generate, triangle_count};

/// A subdivided sphere flattened into per-vertex attribute arrays.
///
/// Every three consecutive vertices form one triangle. Flat shading repeats
/// the face normal on all three corners; wireframe meshes carry no normals.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    /// Shading mode the mesh was generated with.
    pub mode: ShadingMode,
    /// Vertex positions on the unit sphere.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, empty for [`ShadingMode::Wireframe`].
    pub normals: Vec<Vec3>,
    /// Equirectangular UV coordinates per vertex.
    pub uvs: Vec<[f32; 2]>,
}

impl SphereMesh {
    /// An empty mesh that accepts triangles emitted in `mode`.
    pub fn new(mode: ShadingMode) -> Self {
        Self {
            mode,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
        }
    }

    /// Generate a sphere at `depth` and collect it.
    pub fn build(depth: u32, mode: ShadingMode) -> Self {
        let mut mesh = Self::new(mode);
        if let Some(vertices) = triangle_count(depth)
            .and_then(|n| n.checked_mul(3))
            .and_then(|n| usize::try_from(n).ok())
        {
            mesh.reserve(vertices);
        }
        generate(depth, mode, &mut mesh);
        mesh
    }

    fn reserve(&mut self, vertices: usize) {
        self.positions.reserve_exact(vertices);
        self.uvs.reserve_exact(vertices);
        if self.mode != ShadingMode::Wireframe {
            self.normals.reserve_exact(vertices);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

impl TriangleSink for SphereMesh {
    fn emit(&mut self, triangle: &EmittedTriangle) {
        self.positions.extend_from_slice(&triangle.positions);
        self.uvs
            .extend(triangle.positions.iter().map(|&p| sphere_uv(p)));
        match triangle.normals {
            Normals::None => {}
            Normals::Flat(n) => self.normals.extend_from_slice(&[n; 3]),
            Normals::Smooth(ns) => self.normals.extend_from_slice(&ns),
        }
    }
}

/// Equirectangular texture coordinate of a point on the unit sphere.
///
/// `u` wraps once around the Y axis, `v` runs from the north pole (0) to the
/// south pole (1).
pub fn sphere_uv(p: Vec3) -> [f32; 2] {
    let u = 0.5 + p.z.atan2(p.x) / std::f32::consts::TAU;
    let v = 0.5 - p.y.clamp(-1.0, 1.0).asin() / std::f32::consts::PI;
    [u, v]
}
