use nalgebra::{Point3, Unit, Vector3};
use simba::scalar::RealField;
use tessel_common::ArrayIndex;

use crate::{error::InvalidArgument, Error, Mesh};

/// A flat four-cornered patch, split along the `0-2` diagonal into triangles `0-1-2` and `0-2-3`.
///
/// <pre>
/// 3 ---- 2
/// |    / |
/// |  /   |
/// 0 ---- 1
/// </pre>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad<R: RealField + Copy> {
    corners: [Point3<R>; 4],
}

impl<R: RealField + Copy> Quad<R> {
    /// Triangle list shared by every quad.
    pub const INDICES: [usize; 6] = [0, 1, 2, 0, 2, 3];

    /// # Errors
    ///
    /// [InvalidArgument] if a corner is not finite or if two consecutive corners coincide.
    pub fn new(corners: [Point3<R>; 4]) -> Result<Self, Error> {
        if let Some(n) = corners
            .iter()
            .position(|c| !c.iter().all(|x| x.is_finite()))
        {
            return Err(InvalidArgument::Corner(n).into());
        }
        for n in 0..4 {
            if corners[n] == corners[(n + 1) % 4] {
                return Err(InvalidArgument::DegenerateEdge(n).into());
            }
        }
        Ok(Self { corners })
    }

    /// The parallelogram spanned by `u` and `v` from `origin`.
    pub fn from_edges(origin: Point3<R>, u: Vector3<R>, v: Vector3<R>) -> Result<Self, Error> {
        Self::new([origin, origin + u, origin + u + v, origin + v])
    }

    /// Corners in winding order.
    #[inline]
    pub fn corners(&self) -> &[Point3<R>; 4] {
        &self.corners
    }

    /// `(c₁ - c₀) × (c₂ - c₀)`, or `None` if the first three corners are collinear.
    pub fn normal(&self) -> Option<Unit<Vector3<R>>> {
        let [c0, c1, c2, _] = &self.corners;
        Unit::try_new((c1 - c0).cross(&(c2 - c0)), R::default_epsilon())
    }

    /// Split the quad into two triangles sharing the `0-2` diagonal.
    pub fn build<Idx: ArrayIndex>(&self) -> Result<Mesh<R, Idx>, Error> {
        let indices = Self::INDICES
            .iter()
            .map(|&i| {
                Idx::try_from_usize(i).ok_or(InvalidArgument::IndexOverflow { vertices: 4 })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Mesh::from_parts_unchecked(self.corners.to_vec(), indices))
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use super::Quad;
    use crate::error::{Error, InvalidArgument};

    #[test]
    fn rejects_bad_corners() {
        let p = point![0.0f64, 0.0, 0.0];
        assert_eq!(
            Quad::new([p, point![1.0, 0.0, 0.0], point![1.0, 1.0, 0.0], p]),
            Err(Error::InvalidArgument(InvalidArgument::DegenerateEdge(3)))
        );
        assert_eq!(
            Quad::new([p, p, point![1.0, 1.0, 0.0], point![0.0, 1.0, 0.0]]),
            Err(Error::InvalidArgument(InvalidArgument::DegenerateEdge(0)))
        );
        assert_eq!(
            Quad::new([
                p,
                point![1.0, 0.0, 0.0],
                point![1.0, f64::INFINITY, 0.0],
                point![0.0, 1.0, 0.0]
            ]),
            Err(Error::InvalidArgument(InvalidArgument::Corner(2)))
        );
    }

    #[test]
    fn from_edges() {
        let q = Quad::from_edges(
            point![1.0f32, 0.0, 0.0],
            vector![2.0, 0.0, 0.0],
            vector![0.0, 0.0, -3.0],
        )
        .unwrap();
        assert_eq!(
            q.corners(),
            &[
                point![1.0, 0.0, 0.0],
                point![3.0, 0.0, 0.0],
                point![3.0, 0.0, -3.0],
                point![1.0, 0.0, -3.0],
            ]
        );
        // x × -z = +y
        assert_eq!(q.normal().unwrap().into_inner(), vector![0.0, 1.0, 0.0]);
    }
}
