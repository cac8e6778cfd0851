//! Sphere mesh generation by recursive tetrahedron subdivision.
//!
//! The four faces of a regular tetrahedron inscribed in the unit sphere are
//! split into four children per level, with every new midpoint pushed back
//! onto the sphere. Terminal triangles are handed to a [`TriangleSink`] (or
//! pulled from the [`triangles`] iterator) together with the normals the
//! active [`ShadingMode`] calls for.

mod emit;
mod sphere_mesh;
mod subdivide;
mod tetrahedron;
mod winding;

pub use emit::{EmittedTriangle, Normals, Primitive, ShadingMode, TriangleSink};
pub use sphere_mesh::{SphereMesh, sphere_uv};
pub use subdivide::{
    Triangles, generate, midpoint_on_sphere, normalize_or_keep, triangle_count, triangles,
};
pub use tetrahedron::{BASE_FACES, BASE_TETRAHEDRON, base_face};
pub use winding::{face_normal, triangle_winds_outward};
