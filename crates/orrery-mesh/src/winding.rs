//! Winding order checks for sphere triangles.
//!
//! A triangle winds outward when its right-hand-rule normal points away from
//! the sphere center, which is what back-face culling with CCW front faces
//! expects.

use glam::Vec3;

/// Unnormalized right-hand-rule normal of triangle `(a, b, c)`.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the cross-product normal has a positive dot product with
/// the centroid direction from the sphere center.
pub fn triangle_winds_outward(a: Vec3, b: Vec3, c: Vec3) -> bool {
    let centroid = (a + b + c) / 3.0;
    face_normal(a, b, c).dot(centroid) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccw_triangle_facing_plus_z_winds_outward() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(0.1, 0.0, 1.0);
        let c = Vec3::new(0.0, 0.1, 1.0);
        assert!(triangle_winds_outward(a, b, c));
    }

    #[test]
    fn test_swapped_corners_wind_inward() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(0.1, 0.0, 1.0);
        let c = Vec3::new(0.0, 0.1, 1.0);
        assert!(!triangle_winds_outward(a, c, b));
    }

    #[test]
    fn test_face_normal_direction() {
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(n, Vec3::Z);
    }
}
