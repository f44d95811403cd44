use nalgebra::{Point3, Vector3};
use simba::scalar::RealField;
use tessel_common::ArrayIndex;

use crate::{
    error::{Axis, InvalidArgument},
    Error, Mesh,
};

/// A sphere tessellated along a latitude/longitude grid.
///
/// # Diagram
/// Vertex `(i, j)` of the grid sits at polar angle `θ = π·i/p` and azimuthal angle
/// `φ = 2π·j/a`, where `p` and `a` are the polar and azimuthal division counts. `Y` points
/// through the poles:
/// <pre>
///   i = 0        +Y  (θ = 0)
///    ...          |
///   i = p        -Y  (θ = π)
///
///   (sin θ · cos φ,  cos θ,  sin θ · sin φ)
/// </pre>
///
/// Each grid cell `(i, j)` becomes two triangles, `(a, b, c)` and `(c, b, d)`, where `a` is
/// vertex `(i, j)`, `b` is `(i + 1, j)`, `c` is `(i, j + 1)` and `d` is `(i + 1, j + 1)`.
///
/// Note: `(b - a) × (c - a)` points toward the center, so faces wind clockwise when viewed
/// from outside. Use [UvSphere::normals] for outward vertex normals.
///
/// The vertices of row `0` all coincide at the north pole, those of row `p` at the south pole,
/// and columns `0` and `a` coincide along the seam. These duplicates are kept, and so are the
/// zero-area triangles touching the poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvSphere<R: RealField + Copy> {
    center: Point3<R>,
    radius: R,
    polar_divisions: u32,
    azimuthal_divisions: u32,
}

impl<R: RealField + Copy> UvSphere<R> {
    /// Validate the parameters of a sphere.
    ///
    /// # Errors
    ///
    /// [InvalidArgument] if `radius` is not positive and finite, or if either division count is
    /// zero.
    pub fn new(
        center: Point3<R>,
        radius: R,
        polar_divisions: u32,
        azimuthal_divisions: u32,
    ) -> Result<Self, Error> {
        // written this way so that NaN is rejected too
        if !(radius > R::zero() && radius.is_finite()) {
            let r = nalgebra::try_convert::<R, f64>(radius).unwrap_or(f64::NAN);
            return Err(InvalidArgument::Radius(r).into());
        }
        for (axis, count) in [
            (Axis::Polar, polar_divisions),
            (Axis::Azimuthal, azimuthal_divisions),
        ] {
            if count == 0 {
                return Err(InvalidArgument::Divisions { axis, count }.into());
            }
        }
        Ok(Self {
            center,
            radius,
            polar_divisions,
            azimuthal_divisions,
        })
    }

    /// Center of the sphere.
    #[inline]
    pub fn center(&self) -> &Point3<R> {
        &self.center
    }

    /// Distance from the center to every vertex.
    #[inline]
    pub fn radius(&self) -> R {
        self.radius
    }

    /// Number of latitude bands, pole to pole.
    #[inline]
    pub fn polar_divisions(&self) -> u32 {
        self.polar_divisions
    }

    /// Number of longitude segments around the equator.
    #[inline]
    pub fn azimuthal_divisions(&self) -> u32 {
        self.azimuthal_divisions
    }

    /// `(p + 1)(a + 1)`, widened so that it can't overflow.
    #[inline]
    fn vertex_count_wide(&self) -> u128 {
        (u128::from(self.polar_divisions) + 1) * (u128::from(self.azimuthal_divisions) + 1)
    }

    /// Number of vertices [build](UvSphere::build) will emit, or `None` if that doesn't fit in a
    /// `usize`.
    #[inline]
    pub fn vertex_count(&self) -> Option<usize> {
        usize::try_from(self.vertex_count_wide()).ok()
    }

    /// Number of triangles [build](UvSphere::build) will emit: `2 · p · a`.
    #[inline]
    pub fn triangle_count(&self) -> u128 {
        2 * u128::from(self.polar_divisions) * u128::from(self.azimuthal_divisions)
    }

    /// Index of grid vertex `(i, j)` within the vertex list: `i · (a + 1) + j`.
    ///
    /// `None` if `i > p`, `j > a`, or the index doesn't fit in a `usize`.
    pub fn grid_index(&self, i: u32, j: u32) -> Option<usize> {
        if i > self.polar_divisions || j > self.azimuthal_divisions {
            return None;
        }
        let n = u128::from(i) * (u128::from(self.azimuthal_divisions) + 1) + u128::from(j);
        usize::try_from(n).ok()
    }

    /// [grid_index](UvSphere::grid_index) for `(i, j)` on a grid whose vertex count fits in a
    /// `usize`.
    #[inline]
    fn grid_index_unchecked(&self, i: u32, j: u32) -> usize {
        i as usize * (self.azimuthal_divisions as usize + 1) + j as usize
    }

    /// Unit direction from the center to grid vertex `(i, j)`.
    fn direction(&self, i: u32, j: u32) -> Vector3<R> {
        let theta = R::pi() * nalgebra::convert::<f64, R>(f64::from(i))
            / nalgebra::convert(f64::from(self.polar_divisions));
        let phi = R::two_pi() * nalgebra::convert::<f64, R>(f64::from(j))
            / nalgebra::convert(f64::from(self.azimuthal_divisions));
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        Vector3::new(sin_t * cos_p, cos_t, sin_t * sin_p)
    }

    /// Iterator through grid coordinates `(i, j)` in vertex order.
    fn grid(&self) -> impl Iterator<Item = (u32, u32)> {
        let a = self.azimuthal_divisions;
        (0..=self.polar_divisions).flat_map(move |i| (0..=a).map(move |j| (i, j)))
    }

    /// Outward unit normal of every vertex, in the same order as the vertices of
    /// [build](UvSphere::build).
    pub fn normals(&self) -> Vec<Vector3<R>> {
        self.grid().map(|(i, j)| self.direction(i, j)).collect()
    }

    /// Tessellate the sphere.
    ///
    /// # Errors
    ///
    /// [InvalidArgument::IndexOverflow] if `Idx` can't address every vertex.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(
            polar = self.polar_divisions,
            azimuthal = self.azimuthal_divisions,
        ))
    )]
    pub fn build<Idx: ArrayIndex>(&self) -> Result<Mesh<R, Idx>, Error> {
        let overflow = || InvalidArgument::IndexOverflow {
            vertices: self.vertex_count_wide(),
        };
        let vertex_count = self.vertex_count().ok_or_else(overflow)?;
        if !tessel_common::addressable::<Idx>(vertex_count) {
            return Err(overflow().into());
        }
        let index_count = usize::try_from(self.triangle_count())
            .ok()
            .and_then(|t| t.checked_mul(3))
            .ok_or_else(overflow)?;

        let mut vertices = Vec::with_capacity(vertex_count);
        vertices.extend(
            self.grid()
                .map(|(i, j)| self.center + self.direction(i, j) * self.radius),
        );

        let idx = |n: usize| Idx::try_from_usize(n).ok_or_else(overflow);
        let mut indices = Vec::with_capacity(index_count);
        for i in 0..self.polar_divisions {
            for j in 0..self.azimuthal_divisions {
                let a = self.grid_index_unchecked(i, j);
                let b = self.grid_index_unchecked(i + 1, j);
                let (c, d) = (a + 1, b + 1);
                indices.extend_from_slice(&[idx(a)?, idx(b)?, idx(c)?, idx(c)?, idx(b)?, idx(d)?]);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            vertices = vertices.len(),
            triangles = indices.len() / 3,
            "tessellated sphere"
        );
        Ok(Mesh::from_parts_unchecked(vertices, indices))
    }
}

/// Tessellate a sphere of `radius` around `center`; see [UvSphere].
///
/// ```
/// use nalgebra::point;
///
/// let mesh = tessel::shape::uv_sphere::<f64, u32>(point![0.0, 0.0, 0.0], 1.0, 2, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 15);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
#[inline]
pub fn uv_sphere<R: RealField + Copy, Idx: ArrayIndex>(
    center: Point3<R>,
    radius: R,
    polar_divisions: u32,
    azimuthal_divisions: u32,
) -> Result<Mesh<R, Idx>, Error> {
    UvSphere::new(center, radius, polar_divisions, azimuthal_divisions)?.build()
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::UvSphere;

    #[test]
    fn grid_order() {
        let s = UvSphere::new(point![0.0f64, 0.0, 0.0], 1.0, 3, 5).unwrap();
        let grid: Vec<_> = s.grid().collect();
        assert_eq!(grid.len(), 24);
        assert_eq!(grid[0], (0, 0));
        assert_eq!(grid[5], (0, 5));
        assert_eq!(grid[6], (1, 0));
        assert_eq!(grid[23], (3, 5));
        for (n, &(i, j)) in grid.iter().enumerate() {
            assert_eq!(s.grid_index(i, j), Some(n));
            assert_eq!(s.grid_index_unchecked(i, j), n);
        }
    }

    #[test]
    fn grid_index_outside_grid() {
        let s = UvSphere::new(point![0.0f64, 0.0, 0.0], 1.0, 2, 4).unwrap();
        assert_eq!(s.grid_index(2, 4), Some(14));
        assert_eq!(s.grid_index(3, 0), None);
        assert_eq!(s.grid_index(0, 5), None);
        assert_eq!(s.grid_index(u32::MAX, u32::MAX), None);

        let wide = UvSphere::new(point![0.0f64, 0.0, 0.0], 1.0, u32::MAX, u32::MAX).unwrap();
        let last = (1u128 << 64) - 1;
        assert_eq!(
            wide.grid_index(u32::MAX, u32::MAX),
            usize::try_from(last).ok()
        );
    }

    #[test]
    fn directions_are_unit() {
        let s = UvSphere::new(point![0.0f32, 0.0, 0.0], 3.0, 7, 9).unwrap();
        for (i, j) in s.grid() {
            assert!((s.direction(i, j).norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn counts_do_not_overflow() {
        let s = UvSphere::new(point![0.0f64, 0.0, 0.0], 1.0, u32::MAX, u32::MAX).unwrap();
        assert_eq!(s.vertex_count_wide(), (1u128 << 32) * (1u128 << 32));
        assert_eq!(s.triangle_count(), 2 * u128::from(u32::MAX) * u128::from(u32::MAX));
        assert_eq!(s.vertex_count(), usize::try_from(1u128 << 64).ok());
    }
}
