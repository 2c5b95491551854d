//! Rotation representations and conversions.
//!
//! This module provides:
//! - Quaternion ↔ rotation matrix conversion
//! - Euler angles ↔ rotation matrix conversion for all 12 axis conventions
//! - Axis-angle ↔ quaternion / rotation matrix conversion (quaternion and Rodrigues paths)
//! - 6D continuous representation ↔ rotation matrix conversion
//! - Quaternion algebra (product, conjugate, point rotation, standardization)
//! - Uniform random rotations over SO(3)
//!
//! # Runtime-Generic Architecture
//!
//! All operations are implemented once, generically over numr's
//! [`Runtime`](numr::runtime::Runtime) and its client op traits. Runtimes
//! wire the algorithm traits to those implementations by pure delegation.
//!
//! ```text
//! rotation/
//! ├── mod.rs                # Exports only
//! ├── validation.rs         # Input validation helpers
//! ├── traits/               # Algorithm trait definitions
//! │   ├── convention.rs     # Axis, EulerConvention
//! │   ├── conversion.rs     # RotationConversions, AxisAngleOptions
//! │   ├── quaternion.rs     # QuaternionAlgorithms
//! │   └── random.rs         # RandomRotationAlgorithms
//! ├── impl_generic/         # Generic implementations (written once)
//! │   ├── matrix.rs
//! │   ├── euler.rs
//! │   ├── axis_angle.rs
//! │   ├── quaternion.rs
//! │   ├── rotation_6d.rs
//! │   └── random.rs
//! └── cpu/                  # CpuClient trait impls (pure delegation)
//!     └── ...
//! ```
//!
//! # Conventions
//!
//! - Quaternions are `[..., 4]` with the real part first: `(w, x, y, z)`.
//! - Rotation matrices act on column vectors: `v' = R v`.
//! - Every function broadcasts over arbitrary leading (batch) dimensions.
//! - Outputs keep the dtype of their input; sampling takes it explicitly.
//!
//! # Backend Support
//!
//! - CPU (F32, F64)

mod cpu;
pub mod impl_generic;
pub mod traits;
mod validation;

// Re-export validation helpers
pub use validation::{
    validate_6d_shape, validate_batch_size, validate_matrix_shape, validate_quaternion_shape,
    validate_vector3_shape,
};

// Re-export traits and types
pub use traits::convention::{Axis, EulerConvention};
pub use traits::conversion::{AxisAngleMethod, AxisAngleOptions, RotationConversions};
pub use traits::quaternion::QuaternionAlgorithms;
pub use traits::random::RandomRotationAlgorithms;
