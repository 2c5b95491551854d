//! Uniform random rotation sampling trait.

use crate::error::Result;
use crate::rng::TensorRng;
use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Algorithmic contract for sampling rotations uniformly over SO(3).
///
/// The generator is passed by value and the advanced generator is returned
/// with the samples, so sampling never mutates hidden state.
pub trait RandomRotationAlgorithms<R: Runtime> {
    /// Sample `n` uniformly distributed unit quaternions.
    ///
    /// # Arguments
    ///
    /// * `rng` - Generator state
    /// * `n` - Number of quaternions (> 0)
    /// * `dtype` - `F32` or `F64`
    ///
    /// # Returns
    ///
    /// The advanced generator and quaternions with shape [n, 4] and
    /// non-negative real part.
    fn random_quaternions(
        &self,
        rng: TensorRng,
        n: usize,
        dtype: DType,
    ) -> Result<(TensorRng, Tensor<R>)>;

    /// Sample `n` uniformly distributed rotation matrices with shape [n, 3, 3].
    fn random_rotations(
        &self,
        rng: TensorRng,
        n: usize,
        dtype: DType,
    ) -> Result<(TensorRng, Tensor<R>)>;

    /// Sample one uniformly distributed rotation matrix with shape [3, 3].
    fn random_rotation(&self, rng: TensorRng, dtype: DType) -> Result<(TensorRng, Tensor<R>)>;
}
