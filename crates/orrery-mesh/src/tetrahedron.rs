//! The base polyhedron every sphere is subdivided from.

use glam::Vec3;

/// Corners of a regular tetrahedron centered at the origin, all at radius 1.
pub const BASE_TETRAHEDRON: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.942809, -0.333333),
    Vec3::new(-0.816497, -0.471405, -0.333333),
    Vec3::new(0.816497, -0.471405, -0.333333),
];

/// Corner indices of the four faces, counter-clockwise seen from outside.
pub const BASE_FACES: [[usize; 3]; 4] = [[0, 1, 2], [3, 2, 1], [0, 3, 1], [0, 2, 3]];

/// Returns the corner positions of base face `face`.
///
/// # Panics
///
/// Panics if `face >= 4`.
pub fn base_face(face: usize) -> [Vec3; 3] {
    BASE_FACES[face].map(|i| BASE_TETRAHEDRON[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::winding::triangle_winds_outward;

    #[test]
    fn test_corners_on_unit_sphere() {
        for p in BASE_TETRAHEDRON {
            assert!(
                (p.length() - 1.0).abs() < 1e-5,
                "Base corner {p} not at radius 1: {}",
                p.length()
            );
        }
    }

    #[test]
    fn test_corners_equidistant() {
        let mut edges = Vec::new();
        for i in 0..4 {
            for j in (i + 1)..4 {
                edges.push(BASE_TETRAHEDRON[i].distance(BASE_TETRAHEDRON[j]));
            }
        }
        let first = edges[0];
        for e in &edges {
            assert!((e - first).abs() < 1e-4, "Edge lengths differ: {edges:?}");
        }
    }

    #[test]
    fn test_centered_at_origin() {
        let sum: Vec3 = BASE_TETRAHEDRON.iter().copied().sum();
        assert!(sum.length() < 1e-4, "Centroid off origin: {sum}");
    }

    #[test]
    fn test_faces_wind_outward() {
        for face in 0..4 {
            let [a, b, c] = base_face(face);
            assert!(triangle_winds_outward(a, b, c), "Face {face} winds inward");
        }
    }
}
