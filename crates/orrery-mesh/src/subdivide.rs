//! Recursive subdivision of the base tetrahedron onto the unit sphere.
//!
//! Each triangle `(a, b, c)` above depth 0 is replaced by four children built
//! from its edge midpoints re-projected onto the sphere:
//!
//! ```text
//!              a
//!             /\
//!            /  \
//!       ab  /____\  ac
//!          /\    /\
//!         /  \  /  \
//!        /____\/____\
//!       b     bc     c
//! ```
//!
//! Children are `(a, ab, ac)`, `(c, ac, bc)`, `(b, bc, ab)` and
//! `(ab, bc, ac)`, which keeps the parent's winding.

use glam::Vec3;

use crate::emit::{EmittedTriangle, ShadingMode, TriangleSink};
use crate::tetrahedron::{BASE_FACES, base_face};

/// Normalize `v`, leaving a zero-length vector unchanged.
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 { v / len } else { v }
}

/// Midpoint of the chord `a`-`b` pushed out onto the unit sphere.
pub fn midpoint_on_sphere(a: Vec3, b: Vec3) -> Vec3 {
    normalize_or_keep(a + b)
}

/// Number of terminal triangles for `depth`: `4 * 4^depth`.
///
/// Returns `None` if the count does not fit in a `u64`.
pub fn triangle_count(depth: u32) -> Option<u64> {
    let exponent = depth.checked_add(1)?.checked_mul(2)?;
    1u64.checked_shl(exponent)
}

fn children(a: Vec3, b: Vec3, c: Vec3) -> [[Vec3; 3]; 4] {
    let ab = midpoint_on_sphere(a, b);
    let ac = midpoint_on_sphere(a, c);
    let bc = midpoint_on_sphere(b, c);
    [[a, ab, ac], [c, ac, bc], [b, bc, ab], [ab, bc, ac]]
}

fn divide_triangle(
    [a, b, c]: [Vec3; 3],
    depth: u32,
    mode: ShadingMode,
    sink: &mut impl TriangleSink,
) {
    if depth == 0 {
        sink.emit(&EmittedTriangle::new(a, b, c, mode));
        return;
    }
    for child in children(a, b, c) {
        divide_triangle(child, depth - 1, mode, sink);
    }
}

/// Subdivide all four base faces `depth` times and emit every terminal
/// triangle into `sink`.
///
/// Emission order is face by face, and within a face depth-first in child
/// order. Recursion depth equals `depth`; callers pick a sane bound (7 gives
/// 65,536 triangles).
pub fn generate(depth: u32, mode: ShadingMode, sink: &mut impl TriangleSink) {
    for face in 0..BASE_FACES.len() {
        divide_triangle(base_face(face), depth, mode, sink);
    }
}

/// Iterate the triangles of [`generate`] in the same order, without recursion.
pub fn triangles(depth: u32, mode: ShadingMode) -> Triangles {
    let mut stack = Vec::with_capacity(BASE_FACES.len() + 3 * depth.min(64) as usize);
    for face in (0..BASE_FACES.len()).rev() {
        stack.push((base_face(face), depth));
    }
    Triangles {
        stack,
        mode,
        remaining: triangle_count(depth),
    }
}

/// Iterator over terminal triangles, driven by an explicit work stack of
/// `(triangle, remaining depth)` pairs.
#[derive(Debug, Clone)]
pub struct Triangles {
    stack: Vec<([Vec3; 3], u32)>,
    mode: ShadingMode,
    remaining: Option<u64>,
}

impl Triangles {
    pub fn mode(&self) -> ShadingMode {
        self.mode
    }
}

impl Iterator for Triangles {
    type Item = EmittedTriangle;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(([a, b, c], depth)) = self.stack.pop() {
            if depth == 0 {
                if let Some(n) = self.remaining.as_mut() {
                    *n = n.saturating_sub(1);
                }
                return Some(EmittedTriangle::new(a, b, c, self.mode));
            }
            for child in children(a, b, c).into_iter().rev() {
                self.stack.push((child, depth - 1));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Triangles {}
