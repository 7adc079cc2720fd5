//! Spatial motion vectors (twists).
//!
//! Convention: [angular; linear] (Featherstone order). Angular velocity
//! occupies the head (elements 0–2), linear velocity the tail (elements 3–5),
//! and every constructor, accessor and operator preserves that partition.

use crate::{ForceVec, Vec3, Vec6};
use nalgebra::RealField;
use simba::scalar::SubsetOf;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 6D spatial motion vector (twist): [ω; v].
///
/// A plain value type: copies are full copies, equality is exact elementwise
/// equality under `T`, and no operation mutates its operands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionVec<T: RealField + Copy> {
    mv: Vec6<T>,
}

impl<T: RealField + Copy> MotionVec<T> {
    /// Create from angular and linear parts.
    #[inline]
    pub fn new(angular: Vec3<T>, linear: Vec3<T>) -> Self {
        Self {
            mv: Vec6::new(
                angular.x, angular.y, angular.z, linear.x, linear.y, linear.z,
            ),
        }
    }

    /// Create from a full 6D column with angular motion in the head and
    /// linear motion in the tail.
    #[inline]
    pub fn from_vector(mv: Vec6<T>) -> Self {
        Self { mv }
    }

    /// Zero motion vector.
    #[inline]
    pub fn zero() -> Self {
        Self { mv: Vec6::zeros() }
    }

    /// Angular motion part (3 first parameters).
    #[inline]
    pub fn angular(&self) -> Vec3<T> {
        Vec3::new(self.mv[0], self.mv[1], self.mv[2])
    }

    /// Linear motion part (3 last parameters).
    #[inline]
    pub fn linear(&self) -> Vec3<T> {
        Vec3::new(self.mv[3], self.mv[4], self.mv[5])
    }

    /// The underlying 6D column.
    #[inline]
    pub fn vector(&self) -> &Vec6<T> {
        &self.mv
    }

    /// Mutable access to the 6D column for in-place edits.
    #[inline]
    pub fn vector_mut(&mut self) -> &mut Vec6<T> {
        &mut self.mv
    }

    /// Convert every component to the scalar type `T2`.
    #[inline]
    pub fn cast<T2>(&self) -> MotionVec<T2>
    where
        T2: RealField + Copy,
        T: SubsetOf<T2>,
    {
        MotionVec {
            mv: self.mv.cast::<T2>(),
        }
    }

    /// Spatial cross product v × v₂ of two motion vectors.
    ///
    /// Angular part: ω × ω₂. Linear part: ω × v₂ + v × ω₂.
    /// Bilinear and antisymmetric: `a.cross(&a)` is zero for every `a`.
    pub fn cross(&self, mv2: &MotionVec<T>) -> MotionVec<T> {
        let w = self.angular();
        let v = self.linear();
        let w2 = mv2.angular();
        let v2 = mv2.linear();
        MotionVec::new(w.cross(&w2), w.cross(&v2) + v.cross(&w2))
    }

    /// Dual spatial cross product v ×* f, transporting a force vector under
    /// this motion.
    ///
    /// Moment part: ω × τ + v × f. Force part: ω × f. This is the negative
    /// transpose-adjoint of [`cross`](Self::cross):
    /// `(a.cross(&b)).dot(&f) == -(b.dot(&a.cross_dual(&f)))`.
    pub fn cross_dual(&self, fv2: &ForceVec<T>) -> ForceVec<T> {
        let w = self.angular();
        let v = self.linear();
        let m = fv2.moment();
        let f = fv2.force();
        ForceVec::new(w.cross(&m) + v.cross(&f), w.cross(&f))
    }

    /// Power pairing v · f between a motion and a force vector:
    /// ω · τ + v · f.
    ///
    /// Equals the plain 6-element dot product because the angular/moment and
    /// linear/force partitions are aligned.
    #[inline]
    pub fn dot(&self, fv2: &ForceVec<T>) -> T {
        self.mv.dot(fv2.vector())
    }
}

impl<T: RealField + Copy> Default for MotionVec<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealField + Copy> From<Vec6<T>> for MotionVec<T> {
    #[inline]
    fn from(mv: Vec6<T>) -> Self {
        Self { mv }
    }
}

impl<T: RealField + Copy> Add for MotionVec<T> {
    type Output = MotionVec<T>;
    #[inline]
    fn add(self, rhs: MotionVec<T>) -> MotionVec<T> {
        MotionVec {
            mv: self.mv + rhs.mv,
        }
    }
}

impl<T: RealField + Copy> Sub for MotionVec<T> {
    type Output = MotionVec<T>;
    #[inline]
    fn sub(self, rhs: MotionVec<T>) -> MotionVec<T> {
        MotionVec {
            mv: self.mv - rhs.mv,
        }
    }
}

impl<T: RealField + Copy> Neg for MotionVec<T> {
    type Output = MotionVec<T>;
    #[inline]
    fn neg(self) -> MotionVec<T> {
        MotionVec { mv: -self.mv }
    }
}

impl<T: RealField + Copy> Mul<T> for MotionVec<T> {
    type Output = MotionVec<T>;
    #[inline]
    fn mul(self, rhs: T) -> MotionVec<T> {
        MotionVec { mv: self.mv * rhs }
    }
}

// Left-scalar multiplication for the primitive scalar types.
macro_rules! left_scalar_mul_impl {
    ($($T:ty),* $(,)*) => {$(
        impl Mul<MotionVec<$T>> for $T {
            type Output = MotionVec<$T>;
            #[inline]
            fn mul(self, rhs: MotionVec<$T>) -> MotionVec<$T> {
                rhs * self
            }
        }
    )*}
}

left_scalar_mul_impl!(f32, f64);

impl<T: RealField + Copy + fmt::Display> fmt::Display for MotionVec<T> {
    /// Single row, angular then linear, space separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.mv[0], self.mv[1], self.mv[2], self.mv[3], self.mv[4], self.mv[5]
        )
    }
}
