//! Spatial force vectors (wrenches).
//!
//! Convention: [moment; force] (Featherstone order). The moment occupies the
//! head (elements 0–2), the force the tail (elements 3–5) — the dual
//! partitioning to [`MotionVec`](crate::MotionVec), which is what makes the
//! power pairing a plain 6-element dot product.

use crate::{Vec3, Vec6};
use nalgebra::RealField;
use simba::scalar::SubsetOf;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 6D spatial force vector (wrench): [τ; f].
///
/// Same value semantics as the motion side: full copies, exact elementwise
/// equality, no operand mutation. The domain operations live on
/// [`MotionVec`](crate::MotionVec) — `cross_dual` produces this type and
/// `dot` consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceVec<T: RealField + Copy> {
    fv: Vec6<T>,
}

impl<T: RealField + Copy> ForceVec<T> {
    /// Create from moment and force parts.
    #[inline]
    pub fn new(moment: Vec3<T>, force: Vec3<T>) -> Self {
        Self {
            fv: Vec6::new(moment.x, moment.y, moment.z, force.x, force.y, force.z),
        }
    }

    /// Create from a full 6D column with the moment in the head and the
    /// force in the tail.
    #[inline]
    pub fn from_vector(fv: Vec6<T>) -> Self {
        Self { fv }
    }

    /// Zero force vector.
    #[inline]
    pub fn zero() -> Self {
        Self { fv: Vec6::zeros() }
    }

    /// Moment part (3 first parameters).
    #[inline]
    pub fn moment(&self) -> Vec3<T> {
        Vec3::new(self.fv[0], self.fv[1], self.fv[2])
    }

    /// Force part (3 last parameters).
    #[inline]
    pub fn force(&self) -> Vec3<T> {
        Vec3::new(self.fv[3], self.fv[4], self.fv[5])
    }

    /// The underlying 6D column.
    #[inline]
    pub fn vector(&self) -> &Vec6<T> {
        &self.fv
    }

    /// Mutable access to the 6D column for in-place edits.
    #[inline]
    pub fn vector_mut(&mut self) -> &mut Vec6<T> {
        &mut self.fv
    }

    /// Convert every component to the scalar type `T2`.
    #[inline]
    pub fn cast<T2>(&self) -> ForceVec<T2>
    where
        T2: RealField + Copy,
        T: SubsetOf<T2>,
    {
        ForceVec {
            fv: self.fv.cast::<T2>(),
        }
    }
}

impl<T: RealField + Copy> Default for ForceVec<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealField + Copy> From<Vec6<T>> for ForceVec<T> {
    #[inline]
    fn from(fv: Vec6<T>) -> Self {
        Self { fv }
    }
}

impl<T: RealField + Copy> Add for ForceVec<T> {
    type Output = ForceVec<T>;
    #[inline]
    fn add(self, rhs: ForceVec<T>) -> ForceVec<T> {
        ForceVec {
            fv: self.fv + rhs.fv,
        }
    }
}

impl<T: RealField + Copy> Sub for ForceVec<T> {
    type Output = ForceVec<T>;
    #[inline]
    fn sub(self, rhs: ForceVec<T>) -> ForceVec<T> {
        ForceVec {
            fv: self.fv - rhs.fv,
        }
    }
}

impl<T: RealField + Copy> Neg for ForceVec<T> {
    type Output = ForceVec<T>;
    #[inline]
    fn neg(self) -> ForceVec<T> {
        ForceVec { fv: -self.fv }
    }
}

impl<T: RealField + Copy> Mul<T> for ForceVec<T> {
    type Output = ForceVec<T>;
    #[inline]
    fn mul(self, rhs: T) -> ForceVec<T> {
        ForceVec { fv: self.fv * rhs }
    }
}

// Left-scalar multiplication for the primitive scalar types.
macro_rules! left_scalar_mul_impl {
    ($($T:ty),* $(,)*) => {$(
        impl Mul<ForceVec<$T>> for $T {
            type Output = ForceVec<$T>;
            #[inline]
            fn mul(self, rhs: ForceVec<$T>) -> ForceVec<$T> {
                rhs * self
            }
        }
    )*}
}

left_scalar_mul_impl!(f32, f64);

impl<T: RealField + Copy + fmt::Display> fmt::Display for ForceVec<T> {
    /// Single row, moment then force, space separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.fv[0], self.fv[1], self.fv[2], self.fv[3], self.fv[4], self.fv[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accessor_roundtrip() {
        let m = Vec3::new(1.0, 2.0, 3.0);
        let f = Vec3::new(4.0, 5.0, 6.0);
        let fv = ForceVec::new(m, f);
        assert_eq!(fv.moment(), m);
        assert_eq!(fv.force(), f);
        assert_eq!(*fv.vector(), Vec6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn test_zero_and_default() {
        let z = ForceVec::<f64>::zero();
        assert_eq!(z.moment(), Vec3::zeros());
        assert_eq!(z.force(), Vec3::zeros());
        assert_eq!(z, ForceVec::default());
    }

    #[test]
    fn test_from_vector() {
        let v6 = Vec6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(ForceVec::from_vector(v6), ForceVec::from(v6));
        assert_eq!(ForceVec::from_vector(v6).moment(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vector_mut() {
        let mut fv = ForceVec::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        fv.vector_mut()[0] = -1.0;
        assert_eq!(fv.moment(), Vec3::new(-1.0, 2.0, 3.0));
        assert_eq!(fv.force(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = ForceVec::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let b = ForceVec::new(Vec3::new(-0.5, 1.0, 0.0), Vec3::new(2.0, -3.0, 1.5));
        assert_eq!(a + ForceVec::zero(), a);
        assert_eq!(a + (-a), ForceVec::zero());
        assert_eq!((a - b) + b, a);
    }

    #[test]
    fn test_scalar_mul_both_orders() {
        let f = ForceVec::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(0.5, 0.0, -4.0));
        let expected = ForceVec::new(Vec3::new(2.0, -4.0, 6.0), Vec3::new(1.0, 0.0, -8.0));
        assert_eq!(f * 2.0, expected);
        assert_eq!(2.0 * f, expected);
    }

    #[test]
    fn test_cast_roundtrip() {
        let f = ForceVec::new(Vec3::new(0.75, -1.5, 2.0), Vec3::new(3.0, -0.125, 6.0));
        assert_eq!(f.cast::<f32>().cast::<f64>(), f);
    }

    #[test]
    fn test_equality() {
        let a = ForceVec::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let b = ForceVec::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let c = ForceVec::new(Vec3::new(0.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(a, b);
        assert!(a != c);
    }

    #[test]
    fn test_display_single_row() {
        let f = ForceVec::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(format!("{}", f), "1 2 3 4 5 6");
    }
}
