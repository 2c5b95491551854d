//! Quaternion algebra trait.
//!
//! Quaternions are `[..., 4]` tensors `(w, x, y, z)` with the real part first.
//! `q` and `-q` represent the same rotation; the standard form has `w >= 0`.

use crate::error::Result;
use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Algorithmic contract for quaternion algebra.
///
/// All backends implementing quaternion algebra MUST implement this trait.
pub trait QuaternionAlgorithms<R: Runtime> {
    /// Hamilton product `a ⊗ b`, broadcasting the leading dimensions.
    ///
    /// The result is not standardized.
    fn quaternion_raw_multiply(&self, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>;

    /// Hamilton product followed by standardization.
    ///
    /// The result represents the rotation `a` applied after `b`.
    fn quaternion_multiply(&self, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>;

    /// Conjugate: negates the imaginary part. Equals the inverse for unit
    /// quaternions; no renormalization is done.
    fn quaternion_invert(&self, quaternions: &Tensor<R>) -> Result<Tensor<R>>;

    /// Rotate 3D points by quaternions.
    ///
    /// # Arguments
    ///
    /// * `quaternions` - Unit quaternions with shape [..., 4]
    /// * `points` - Points with shape [..., 3]; leading dims broadcast
    ///
    /// # Returns
    ///
    /// Rotated points with shape [..., 3].
    fn quaternion_apply(&self, quaternions: &Tensor<R>, points: &Tensor<R>) -> Result<Tensor<R>>;

    /// Flip quaternions with negative real part. Idempotent.
    fn standardize_quaternion(&self, quaternions: &Tensor<R>) -> Result<Tensor<R>>;

    /// `n` identity quaternions `(1, 0, 0, 0)` with shape [n, 4].
    fn quaternion_identity(&self, n: usize, dtype: DType) -> Result<Tensor<R>>;

    /// Rotation angle of each quaternion, in [0, π], with shape [...].
    fn quaternion_magnitude(&self, quaternions: &Tensor<R>) -> Result<Tensor<R>>;
}
