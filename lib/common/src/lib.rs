use num_traits::{AsPrimitive, NumCast, PrimInt};

// TODO :: convert to trait alias once https://github.com/rust-lang/rfcs/pull/1733 is stabilized
/// Trait for types which can act as indices within an array (or an array-like structure), such as
/// the triangle index list of a mesh.
pub trait ArrayIndex:
    PrimInt + AsPrimitive<usize> + std::fmt::Debug + Send + Sync + 'static
{
    /// Convert `n` into `Self`, or `None` if `n` is not representable.
    #[inline]
    fn try_from_usize(n: usize) -> Option<Self> {
        <Self as NumCast>::from(n)
    }

    /// Widen `self` into a `usize`.
    #[inline]
    fn as_usize(self) -> usize {
        self.as_()
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt + AsPrimitive<usize> + std::fmt::Debug + Send + Sync + 'static
{
}

/// Whether every index in `0..len` is representable as an `Idx`.
#[inline]
pub fn addressable<Idx: ArrayIndex>(len: usize) -> bool {
    match len.checked_sub(1) {
        None => true,
        Some(last) => Idx::try_from_usize(last).is_some(),
    }
}
