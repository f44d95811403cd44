use nalgebra::{Point3, Scalar, Unit, Vector3};
use simba::scalar::RealField;
use tessel_common::ArrayIndex;

use crate::{error::MeshError, Aabb, Error};

/// A list of vertices and a list of triangles referring to them by index.
///
/// # Invariants
///
/// * `indices.len()` is a multiple of 3; each run of three is one triangle.
/// * Every index lies within `0..vertices.len()`.
/// * All triangles of one mesh share a winding order.
///
/// A mesh is never modified in place; transformations consume it and return a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<R: Scalar, Idx: ArrayIndex = u32> {
    vertices: Vec<Point3<R>>,
    indices: Vec<Idx>,
}

impl<R: Scalar, Idx: ArrayIndex> Mesh<R, Idx> {
    /// Assemble a mesh from raw buffers, checking the index invariants.
    pub fn from_parts(vertices: Vec<Point3<R>>, indices: Vec<Idx>) -> Result<Self, Error> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::Truncated { len: indices.len() }.into());
        }
        if let Some((position, index)) = indices
            .iter()
            .map(|i| i.as_usize())
            .enumerate()
            .find(|&(_, i)| i >= vertices.len())
        {
            return Err(MeshError::IndexOutOfBounds {
                position,
                index,
                vertices: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices, indices })
    }

    /// Assemble a mesh from buffers which the caller has already made valid.
    pub(crate) fn from_parts_unchecked(vertices: Vec<Point3<R>>, indices: Vec<Idx>) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert!(indices.iter().all(|i| i.as_usize() < vertices.len()));
        Self { vertices, indices }
    }

    /// Vertex positions; a vertex's position in this slice is its index.
    #[inline]
    pub fn vertices(&self) -> &[Point3<R>] {
        &self.vertices
    }

    /// Triangle index list, three indices per triangle.
    #[inline]
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterator through the vertex indices of each triangle.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0].as_usize(), t[1].as_usize(), t[2].as_usize()])
    }

    /// The corner positions of triangle `n`, in winding order.
    pub fn triangle(&self, n: usize) -> Option<[Point3<R>; 3]> {
        let start = n.checked_mul(3)?;
        let t = self.indices.get(start..start.checked_add(3)?)?;
        Some([
            self.vertices[t[0].as_usize()].clone(),
            self.vertices[t[1].as_usize()].clone(),
            self.vertices[t[2].as_usize()].clone(),
        ])
    }

    /// Release the vertex and index buffers.
    #[inline]
    pub fn into_parts(self) -> (Vec<Point3<R>>, Vec<Idx>) {
        (self.vertices, self.indices)
    }
}

impl<R: RealField + Copy, Idx: ArrayIndex> Mesh<R, Idx> {
    /// The normal of each triangle, `(b - a) × (c - a)` for corners `[a, b, c]`.
    ///
    /// Zero-area triangles (such as those at the poles of a [UvSphere](crate::shape::UvSphere))
    /// have no normal and yield `None`.
    pub fn face_normals(&self) -> Vec<Option<Unit<Vector3<R>>>> {
        self.triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (&self.vertices[a], &self.vertices[b], &self.vertices[c]);
                Unit::try_new((b - a).cross(&(c - a)), R::default_epsilon())
            })
            .collect()
    }

    /// Move every vertex by `offset`.
    pub fn translated(mut self, offset: &Vector3<R>) -> Self {
        for v in &mut self.vertices {
            *v += offset;
        }
        self
    }

    /// The [Aabb] of all vertices, or `None` if there are none.
    #[inline]
    pub fn bounds(&self) -> Option<Aabb<R>> {
        Aabb::from_points(&self.vertices)
    }
}
