//! Generic uniform rotation sampling.

use super::helpers::{norm_last, scalar_like, select};
use super::matrix::quaternion_to_matrix_impl;
use crate::error::Result;
use crate::rng::TensorRng;
use crate::rotation::validation::validate_batch_size;
use numr::dtype::DType;
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// `|a|` with the sign of `b`, assuming `a >= 0`; `b = 0` counts as positive.
fn copysign<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let negative = client.lt(b, &scalar_like(b, 0.0))?;
    // 1 - 2·[b < 0]
    let sign = client.rsub_scalar(&client.mul_scalar(&negative, 2.0)?, 1.0)?;
    Ok(client.mul(a, &sign)?)
}

/// Sample `n` unit quaternions uniformly over SO(3).
///
/// Normalized 4D Gaussian samples are uniform on S³; dividing by the norm with
/// the sign of the real part folds them onto the `w >= 0` half.
pub fn random_quaternions_impl<R, C>(
    client: &C,
    rng: TensorRng,
    n: usize,
    dtype: DType,
) -> Result<(TensorRng, Tensor<R>)>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_batch_size(n, "random_quaternions")?;
    tracing::trace!(n, ?dtype, "sampling random quaternions");

    let (rng, samples) = rng.random_normal::<R>(&[n, 4], 0.0, 1.0, dtype, client.device())?;
    let norms = norm_last(client, &samples, true)?;
    let real = samples.narrow(-1, 0, 1)?.contiguous();
    let scale = copysign(client, &norms, &real)?;

    Ok((rng, client.div(&samples, &scale)?))
}

/// Sample `n` rotation matrices uniformly over SO(3).
pub fn random_rotations_impl<R, C>(
    client: &C,
    rng: TensorRng,
    n: usize,
    dtype: DType,
) -> Result<(TensorRng, Tensor<R>)>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let (rng, quaternions) = random_quaternions_impl(client, rng, n, dtype)?;
    Ok((rng, quaternion_to_matrix_impl(client, &quaternions)?))
}

/// Sample one rotation matrix uniformly over SO(3).
pub fn random_rotation_impl<R, C>(
    client: &C,
    rng: TensorRng,
    dtype: DType,
) -> Result<(TensorRng, Tensor<R>)>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let (rng, matrices) = random_rotations_impl(client, rng, 1, dtype)?;
    Ok((rng, select(&matrices, 0, 0)?.contiguous()))
}
