//! Shading modes and the terminal-triangle output contract.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How a terminal triangle is presented to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadingMode {
    /// Closed line loop through the three corners, no normals.
    Wireframe,
    /// One normal shared by all three corners.
    Flat,
    /// One normal per corner, interpolated across the face.
    Smooth,
}

impl ShadingMode {
    /// All shading modes, in declaration order.
    pub const ALL: [ShadingMode; 3] = [Self::Wireframe, Self::Flat, Self::Smooth];

    /// Number of normals emitted per triangle in this mode.
    pub fn normals_per_triangle(self) -> usize {
        match self {
            Self::Wireframe => 0,
            Self::Flat => 1,
            Self::Smooth => 3,
        }
    }

    /// Primitive the renderer should draw the corners as.
    pub fn primitive(self) -> Primitive {
        match self {
            Self::Wireframe => Primitive::LineLoop,
            Self::Flat | Self::Smooth => Primitive::Polygon,
        }
    }
}

/// Drawing primitive for one emitted triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Outline only; the last corner connects back to the first.
    LineLoop,
    /// Filled triangle.
    Polygon,
}

/// Normals attached to an emitted triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normals {
    None,
    /// Shared face normal.
    Flat(Vec3),
    /// Per-corner normals, same order as the positions.
    Smooth([Vec3; 3]),
}

/// A terminal triangle handed to the renderer.
///
/// Positions lie on the unit sphere and are ordered counter-clockwise when
/// viewed from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmittedTriangle {
    pub positions: [Vec3; 3],
    pub normals: Normals,
}

impl EmittedTriangle {
    /// Build the triangle `(a, b, c)` with the normals `mode` calls for.
    ///
    /// On the unit sphere each position is its own outward normal, so flat
    /// shading reuses corner `a` and smooth shading reuses every corner.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, mode: ShadingMode) -> Self {
        let normals = match mode {
            ShadingMode::Wireframe => Normals::None,
            ShadingMode::Flat => Normals::Flat(a),
            ShadingMode::Smooth => Normals::Smooth([a, b, c]),
        };
        Self {
            positions: [a, b, c],
            normals,
        }
    }

    pub fn primitive(&self) -> Primitive {
        match self.normals {
            Normals::None => Primitive::LineLoop,
            Normals::Flat(_) | Normals::Smooth(_) => Primitive::Polygon,
        }
    }

    /// Number of normals carried (0, 1 or 3).
    pub fn normal_count(&self) -> usize {
        match self.normals {
            Normals::None => 0,
            Normals::Flat(_) => 1,
            Normals::Smooth(_) => 3,
        }
    }

    /// The normal active while corner `corner` is emitted, if any.
    pub fn normal_at(&self, corner: usize) -> Option<Vec3> {
        match self.normals {
            Normals::None => None,
            Normals::Flat(n) => (corner < 3).then_some(n),
            Normals::Smooth(ns) => ns.get(corner).copied(),
        }
    }
}

/// Consumer of emitted triangles, one call per terminal triangle.
pub trait TriangleSink {
    fn emit(&mut self, triangle: &EmittedTriangle);
}

impl<F> TriangleSink for F
where
    F: FnMut(&EmittedTriangle),
{
    fn emit(&mut self, triangle: &EmittedTriangle) {
        self(triangle)
    }
}
