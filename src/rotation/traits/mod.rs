//! Rotation algorithm traits.
//!
//! This module defines the algorithmic contracts for rotation operations.
//! Each trait represents a logical group of related algorithms.

pub mod convention;
pub mod conversion;
pub mod quaternion;
pub mod random;

pub use convention::{Axis, EulerConvention};
pub use conversion::{AxisAngleMethod, AxisAngleOptions, RotationConversions};
pub use quaternion::QuaternionAlgorithms;
pub use random::RandomRotationAlgorithms;
