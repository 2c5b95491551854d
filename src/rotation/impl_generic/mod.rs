//! Generic rotation algorithm implementations.
//!
//! This module provides runtime-generic implementations of the rotation
//! algorithms. All functions work with any numr client implementing
//! `TensorOps + ScalarOps + CompareOps`.
//!
//! # Architecture
//!
//! Every conversion is fully tensor-based: batched over leading dimensions,
//! no per-element loops and no host round trips. Numerically delicate cases
//! (angles near 0 and π, negative real parts) are resolved by computing every
//! branch and selecting with `where_cond`, never by mutating tensors in place.
//!
//! Runtimes implement the traits in [`traits`](super::traits) by delegating
//! to these functions.

mod axis_angle;
mod euler;
mod helpers;
mod matrix;
mod quaternion;
mod random;
mod rotation_6d;

// Re-export only what runtimes need
pub use axis_angle::{
    axis_angle_to_matrix_impl, axis_angle_to_quaternion_impl, matrix_to_axis_angle_impl,
    quaternion_to_axis_angle_impl,
};
pub use euler::{euler_angles_to_matrix_impl, matrix_to_euler_angles_impl};
pub use matrix::{matrix_to_quaternion_impl, quaternion_to_matrix_impl};
pub use quaternion::{
    quaternion_apply_impl, quaternion_identity_impl, quaternion_invert_impl,
    quaternion_magnitude_impl, quaternion_multiply_impl, quaternion_raw_multiply_impl,
    standardize_quaternion_impl,
};
pub use random::{random_quaternions_impl, random_rotation_impl, random_rotations_impl};
pub use rotation_6d::{matrix_to_rotation_6d_impl, rotation_6d_to_matrix_impl};
