//! Triangle meshes for simple parametric shapes.
//!
//! ```
//! use nalgebra::point;
//! use tessel::shape::UvSphere;
//!
//! let ball = UvSphere::new(point![0.0, 0.0, 0.0], 0.1, 16, 16)?;
//! let mesh = ball.build::<u16>()?;
//! assert_eq!(mesh.vertex_count(), 17 * 17);
//! assert_eq!(mesh.triangle_count(), 2 * 16 * 16);
//! # Ok::<(), tessel::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod bounds;
pub use bounds::*;
pub mod error;
pub use error::Error;
mod mesh;
pub use mesh::*;
pub mod shape;

pub use tessel_common::ArrayIndex;
