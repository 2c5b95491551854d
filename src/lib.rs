//! rotr - Rotation Representation Conversions
//!
//! rotr converts between the common representations of 3D rotations: unit
//! quaternions, rotation matrices, Euler angles (all 12 axis conventions),
//! axis-angle vectors and the 6D continuous representation. It also provides
//! quaternion algebra and uniform random rotations over SO(3).
//!
//! Every operation is batched over arbitrary leading dimensions and written
//! once against numr's tensor op traits, so the same code runs on any numr
//! runtime whose client implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     rotation                            │
//! │  (quaternion, matrix, Euler, axis-angle, 6D, sampling)  │
//! └──────────────┬───────────────────────────┬──────────────┘
//!                │ uses                      │ uses
//! ┌──────────────▼──────────────┐ ┌──────────▼──────────────┐
//! │            numr             │ │          rng            │
//! │ (tensors, ops, CPU runtime) │ │ (seeded normal samples) │
//! └─────────────────────────────┘ └─────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`rotation`] - Conversion algorithms, quaternion algebra, random rotations
//! - [`rng`] - Value-threaded generator that fills numr tensors
//! - [`error`] - Error type shared by all operations
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `serde` | Serialize conventions and options | serde |
//!
//! # Example
//!
//! ```
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//! use numr::tensor::Tensor;
//! use rotr::rotation::{EulerConvention, RotationConversions};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let angles = Tensor::<CpuRuntime>::from_slice(&[0.1, 0.2, 0.3], &[1, 3], &device);
//! let zyx: EulerConvention = "ZYX".parse().unwrap();
//!
//! let matrix = client.euler_angles_to_matrix(&angles, zyx).unwrap();
//! let quaternion = client.matrix_to_quaternion(&matrix).unwrap();
//! assert_eq!(quaternion.shape(), &[1, 4]);
//! ```

pub mod error;
pub mod rng;
pub mod rotation;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use rng::TensorRng;
pub use rotation::{
    // Conventions and options
    Axis,
    AxisAngleMethod,
    AxisAngleOptions,
    EulerConvention,
    // Algorithm traits
    QuaternionAlgorithms,
    RandomRotationAlgorithms,
    RotationConversions,
};
