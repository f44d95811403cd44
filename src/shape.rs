//! Builders for [Meshes](crate::Mesh) of simple parametric shapes.

mod quad;
pub use quad::*;
mod sphere;
pub use sphere::*;
