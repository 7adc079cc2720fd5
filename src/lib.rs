//! 6D spatial vector algebra following Featherstone's "Rigid Body Dynamics
//! Algorithms".
//!
//! Convention: spatial vectors are [angular; linear] (Featherstone order).
//! A spatial motion vector (twist): [ω; v]
//! A spatial force vector (wrench): [τ; f]
//!
//! [`MotionVec`] and [`ForceVec`] are dual to each other: the power pairing
//! [`MotionVec::dot`] and the dual cross product [`MotionVec::cross_dual`]
//! connect the two spaces. Both types are generic over the scalar, so the
//! same algebra runs at `f64` and `f32` and converts between them with
//! [`MotionVec::cast`] / [`ForceVec::cast`].

pub mod force;
pub mod motion;

pub use force::ForceVec;
pub use motion::MotionVec;

use nalgebra as na;

/// 3D vector alias.
pub type Vec3<T> = na::Vector3<T>;
/// 6D vector alias.
pub type Vec6<T> = na::Vector6<T>;

/// Double-precision motion vector.
pub type MotionVecd = MotionVec<f64>;
/// Single-precision motion vector.
pub type MotionVecf = MotionVec<f32>;
/// Double-precision force vector.
pub type ForceVecd = ForceVec<f64>;
/// Single-precision force vector.
pub type ForceVecf = ForceVec<f32>;
