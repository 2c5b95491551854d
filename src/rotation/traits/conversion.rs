//! Rotation representation conversions trait.
//!
//! Converts between unit quaternions, rotation matrices, Euler angles,
//! axis-angle vectors and the 6D continuous representation. Every function is
//! batched over arbitrary leading dimensions.

use super::convention::EulerConvention;
use crate::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// How axis-angle vectors are converted to and from rotation matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisAngleMethod {
    /// Go through quaternions. Accurate everywhere.
    #[default]
    Quaternion,
    /// Closed-form Rodrigues formulas. Faster, with special handling near
    /// angles 0 and π.
    Rodrigues,
}

/// Options for axis-angle ↔ matrix conversions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngleOptions {
    /// Conversion method.
    /// Default: Quaternion
    pub method: AxisAngleMethod,

    /// Relative tolerance used to detect angles near 0 and π.
    /// Only used by the Rodrigues method.
    /// Default: 1e-5
    pub rtol: f64,

    /// Absolute tolerance used to detect angles near 0 and π.
    /// Only used by the Rodrigues method.
    /// Default: 1e-8
    pub atol: f64,
}

impl Default for AxisAngleOptions {
    fn default() -> Self {
        Self {
            method: AxisAngleMethod::Quaternion,
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl AxisAngleOptions {
    /// Rodrigues method with default tolerances.
    pub fn fast() -> Self {
        Self {
            method: AxisAngleMethod::Rodrigues,
            ..Self::default()
        }
    }
}

/// Algorithmic contract for rotation representation conversions.
///
/// All backends implementing rotation conversions MUST implement this trait.
///
/// Quaternions are `[..., 4]` with the real part first, rotation matrices are
/// `[..., 3, 3]`, axis-angle vectors and Euler angles are `[..., 3]` in radians,
/// 6D representations are `[..., 6]`.
pub trait RotationConversions<R: Runtime> {
    /// Convert unit quaternions to rotation matrices.
    ///
    /// # Arguments
    ///
    /// * `quaternions` - Quaternions with shape [..., 4]; need not be normalized
    ///
    /// # Returns
    ///
    /// Rotation matrices with shape [..., 3, 3].
    fn quaternion_to_matrix(&self, quaternions: &Tensor<R>) -> Result<Tensor<R>>;

    /// Convert rotation matrices to quaternions.
    ///
    /// Picks, per matrix, the best conditioned of four candidate formulas.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Rotation matrices with shape [..., 3, 3]
    ///
    /// # Returns
    ///
    /// Quaternions with shape [..., 4] and non-negative real part.
    fn matrix_to_quaternion(&self, matrix: &Tensor<R>) -> Result<Tensor<R>>;

    /// Convert Euler angles to rotation matrices.
    ///
    /// # Arguments
    ///
    /// * `angles` - Euler angles with shape [..., 3], in radians
    /// * `convention` - Axis sequence, e.g. `"XYZ"`
    ///
    /// # Returns
    ///
    /// Rotation matrices with shape [..., 3, 3].
    fn euler_angles_to_matrix(
        &self,
        angles: &Tensor<R>,
        convention: EulerConvention,
    ) -> Result<Tensor<R>>;

    /// Convert rotation matrices to Euler angles.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Rotation matrices with shape [..., 3, 3]
    /// * `convention` - Axis sequence, e.g. `"XYZ"`
    ///
    /// # Returns
    ///
    /// Euler angles with shape [..., 3]. The middle angle lies in [-π/2, π/2]
    /// for Tait-Bryan conventions and in [0, π] for proper Euler conventions.
    ///
    /// Exact gimbal lock (a proper Euler central angle of exactly 0 or π, a
    /// Tait-Bryan one of exactly ±π/2) is not disambiguated. The outer angles
    /// there come from `atan2` of zero entries, so the returned angles are
    /// finite but need not reproduce the input matrix.
    fn matrix_to_euler_angles(
        &self,
        matrix: &Tensor<R>,
        convention: EulerConvention,
    ) -> Result<Tensor<R>>;

    /// Convert axis-angle vectors to quaternions.
    ///
    /// # Arguments
    ///
    /// * `axis_angle` - Vectors with shape [..., 3]; direction is the axis,
    ///   magnitude the angle in radians
    ///
    /// # Returns
    ///
    /// Unit quaternions with shape [..., 4].
    fn axis_angle_to_quaternion(&self, axis_angle: &Tensor<R>) -> Result<Tensor<R>>;

    /// Convert quaternions to axis-angle vectors.
    ///
    /// # Arguments
    ///
    /// * `quaternions` - Unit quaternions with shape [..., 4]
    ///
    /// # Returns
    ///
    /// Axis-angle vectors with shape [..., 3].
    fn quaternion_to_axis_angle(&self, quaternions: &Tensor<R>) -> Result<Tensor<R>>;

    /// Convert axis-angle vectors to rotation matrices.
    ///
    /// # Arguments
    ///
    /// * `axis_angle` - Vectors with shape [..., 3]
    /// * `options` - Conversion method and tolerances
    ///
    /// # Returns
    ///
    /// Rotation matrices with shape [..., 3, 3].
    fn axis_angle_to_matrix(
        &self,
        axis_angle: &Tensor<R>,
        options: &AxisAngleOptions,
    ) -> Result<Tensor<R>>;

    /// Convert rotation matrices to axis-angle vectors.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Rotation matrices with shape [..., 3, 3]
    /// * `options` - Conversion method and tolerances
    ///
    /// # Returns
    ///
    /// Axis-angle vectors with shape [..., 3]. For rotations by π the axis
    /// sign is arbitrary.
    fn matrix_to_axis_angle(
        &self,
        matrix: &Tensor<R>,
        options: &AxisAngleOptions,
    ) -> Result<Tensor<R>>;

    /// Convert 6D representations to rotation matrices via Gram-Schmidt.
    ///
    /// The two 3-vectors must be linearly independent; degenerate input
    /// produces non-finite output.
    ///
    /// # Arguments
    ///
    /// * `d6` - 6D representations with shape [..., 6]
    ///
    /// # Returns
    ///
    /// Rotation matrices with shape [..., 3, 3].
    fn rotation_6d_to_matrix(&self, d6: &Tensor<R>) -> Result<Tensor<R>>;

    /// Convert rotation matrices to 6D representations (first two rows).
    ///
    /// # Arguments
    ///
    /// * `matrix` - Rotation matrices with shape [..., 3, 3]
    ///
    /// # Returns
    ///
    /// 6D representations with shape [..., 6].
    fn matrix_to_rotation_6d(&self, matrix: &Tensor<R>) -> Result<Tensor<R>>;
}
