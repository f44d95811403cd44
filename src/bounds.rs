use nalgebra::{Point3, Vector3};
use simba::scalar::RealField;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<R: RealField + Copy> {
    pub mins: Point3<R>,
    pub maxs: Point3<R>,
}

impl<R: RealField + Copy> Aabb<R> {
    /// The box spanning `mins` to `maxs`.
    #[inline]
    pub fn new(mins: Point3<R>, maxs: Point3<R>) -> Self {
        Self { mins, maxs }
    }

    /// The smallest [Aabb] containing every point in `points`, or `None` if there are none.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<R>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(Self::new(first, first), |b, p| Self {
            mins: b.mins.coords.zip_map(&p.coords, |l, r| l.min(r)).into(),
            maxs: b.maxs.coords.zip_map(&p.coords, |l, r| l.max(r)).into(),
        }))
    }

    /// Whether `p` lies within `self`, boundary included.
    #[inline]
    pub fn contains(&self, p: &Point3<R>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<R> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// Side lengths along each axis.
    #[inline]
    pub fn extents(&self) -> Vector3<R> {
        self.maxs - self.mins
    }

    /// `self` moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: &Vector3<R>) -> Self {
        Self {
            mins: self.mins + offset,
            maxs: self.maxs + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use super::Aabb;

    #[test]
    fn from_points() {
        let pts = [
            point![1.0, -2.0, 0.5],
            point![-1.0, 3.0, 0.0],
            point![0.0, 0.0, 4.0],
        ];
        let b = Aabb::from_points(&pts).unwrap();
        assert_eq!(b.mins, point![-1.0, -2.0, 0.0]);
        assert_eq!(b.maxs, point![1.0, 3.0, 4.0]);
        assert_eq!(b.center(), point![0.0, 0.5, 2.0]);
        assert_eq!(b.extents(), vector![2.0, 5.0, 4.0]);
        assert!(pts.iter().all(|p| b.contains(p)));
        assert!(!b.contains(&point![0.0, 0.0, 4.5]));
    }

    #[test]
    fn empty() {
        assert!(Aabb::<f32>::from_points(std::iter::empty()).is_none());
    }
}
