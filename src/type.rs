use std::fmt::Debug;
use std::ops::Index;

use geo_traits::{CoordTrait, Dimensions};
use num_traits::{Num, NumCast, ToPrimitive};
use tinyvec::TinyVec;

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Distances are computed in
/// `f64`, so every implementor must convert losslessly enough through [`ToPrimitive::to_f64`].
pub trait CoordNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Default
    + Debug
    + Send
    + Sync
{
}

impl CoordNum for i8 {}
impl CoordNum for u8 {}
impl CoordNum for i16 {}
impl CoordNum for u16 {}
impl CoordNum for i32 {}
impl CoordNum for u32 {}
impl CoordNum for i64 {}
impl CoordNum for u64 {}
impl CoordNum for f32 {}
impl CoordNum for f64 {}

/// Convert a coordinate to `f64` for distance computations.
#[inline]
pub(crate) fn to_f64<N: CoordNum>(value: N) -> f64 {
    // Every sealed implementor converts to f64 infallibly.
    value.to_f64().unwrap_or(f64::NAN)
}

/// A point with a fixed number of coordinates.
///
/// Points of up to four dimensions are stored inline; larger points spill to the heap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point<N: CoordNum>(TinyVec<[N; 4]>);

impl<N: CoordNum> Point<N> {
    /// Create a new point by copying the given coordinates.
    pub fn new(coords: &[N]) -> Self {
        Self(coords.iter().copied().collect())
    }

    /// The number of coordinates in this point.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// The coordinates of this point.
    #[inline]
    pub fn coords(&self) -> &[N] {
        &self.0
    }

    /// Overwrite the coordinates of this point with those of `other`.
    ///
    /// Both points must have the same number of dimensions.
    pub(crate) fn copy_from(&mut self, other: &Point<N>) {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        self.0.copy_from_slice(&other.0);
    }

    /// Euclidean distance between this point and `other`.
    pub fn distance(&self, other: &[N]) -> f64 {
        euclidean_distance(self.coords(), other)
    }
}

impl<N: CoordNum> AsRef<[N]> for Point<N> {
    fn as_ref(&self) -> &[N] {
        &self.0
    }
}

impl<N: CoordNum> Index<usize> for Point<N> {
    type Output = N;

    #[inline]
    fn index(&self, index: usize) -> &N {
        &self.0[index]
    }
}

impl<N: CoordNum> From<&[N]> for Point<N> {
    fn from(value: &[N]) -> Self {
        Self::new(value)
    }
}

impl<N: CoordNum, const D: usize> From<[N; D]> for Point<N> {
    fn from(value: [N; D]) -> Self {
        Self::new(&value)
    }
}

impl<N: CoordNum> From<Vec<N>> for Point<N> {
    fn from(value: Vec<N>) -> Self {
        Self::new(&value)
    }
}

impl<N: CoordNum> PartialEq<[N]> for Point<N> {
    fn eq(&self, other: &[N]) -> bool {
        self.coords() == other
    }
}

impl<N: CoordNum, const D: usize> PartialEq<[N; D]> for Point<N> {
    fn eq(&self, other: &[N; D]) -> bool {
        self.coords() == other.as_slice()
    }
}

impl<N: CoordNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> Dimensions {
        match self.dimensions() {
            2 => Dimensions::Xy,
            3 => Dimensions::Xyz,
            n => Dimensions::Unknown(n),
        }
    }

    fn x(&self) -> Self::T {
        self.nth_or_panic(0)
    }

    fn y(&self) -> Self::T {
        self.nth_or_panic(1)
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match self.0.get(n) {
            Some(value) => *value,
            None => panic!("Invalid index of coord"),
        }
    }
}

/// Euclidean distance between two points with the same number of coordinates.
#[inline]
pub(crate) fn euclidean_distance<N: CoordNum>(a: &[N], b: &[N]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&a, &b)| {
            let d = to_f64(a) - to_f64(b);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

#[cfg(test)]
mod test {
    use geo_traits::CoordTrait;

    use super::*;

    #[test]
    fn point_equality_uses_every_coordinate() {
        let a = Point::from([1.0, 2.0, 3.0]);
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_ne!(a, Point::from([1.0, 2.0, 4.0]));
        assert_eq!(a.dimensions(), 3);
    }

    #[test]
    fn points_above_four_dimensions_spill() {
        let coords: Vec<i32> = (0..9).collect();
        let point = Point::from(coords.clone());
        assert_eq!(point.coords(), coords.as_slice());
        assert_eq!(point[8], 8);
    }

    #[test]
    fn distance_does_not_underflow_unsigned() {
        let a = Point::from([0u32, 0]);
        assert_eq!(a.distance(&[3, 4]), 5.0);
    }

    #[test]
    fn point_is_a_coord() {
        let point = Point::from([3, 6, 1]);
        assert_eq!(point.dim(), Dimensions::Xyz);
        assert_eq!(point.x_y(), (3, 6));
        assert_eq!(point.nth(2), Some(1));
        assert_eq!(point.nth(3), None);
    }
}
