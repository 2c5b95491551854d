//! Generic axis-angle ↔ quaternion / rotation matrix conversion.

use super::helpers::{
    batch_shape, full_like, isclose_scalar, matrix_entries, nonzero, norm_last, reshape,
    scalar_like, select, sinc, sum_last, unbind, with_tail,
};
use super::matrix::{matrix_to_quaternion_impl, quaternion_to_matrix_impl};
use crate::error::Result;
use crate::rotation::traits::conversion::{AxisAngleMethod, AxisAngleOptions};
use crate::rotation::validation::{
    validate_matrix_shape, validate_quaternion_shape, validate_vector3_shape,
};
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;
use std::f64::consts::PI;

/// Convert axis-angle vectors to quaternions.
pub fn axis_angle_to_quaternion_impl<R, C>(client: &C, axis_angle: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_vector3_shape(axis_angle.shape(), "axis_angle", "axis_angle_to_quaternion")?;

    let angles = norm_last(client, axis_angle, true)?;
    // sin(θ/2) / θ, finite at θ = 0
    let sin_half_over_angle =
        client.mul_scalar(&sinc(client, &client.mul_scalar(&angles, 0.5 / PI)?)?, 0.5)?;
    let real = client.cos(&client.mul_scalar(&angles, 0.5)?)?;
    let imaginary = client.mul(axis_angle, &sin_half_over_angle)?;
    Ok(client.cat(&[&real, &imaginary], -1)?)
}

/// Convert quaternions to axis-angle vectors.
pub fn quaternion_to_axis_angle_impl<R, C>(client: &C, quaternions: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(quaternions.shape(), "quaternion_to_axis_angle")?;

    let imaginary = quaternions.narrow(-1, 1, 3)?;
    let norms = norm_last(client, &imaginary, true)?;
    let half_angles = client.atan2(&norms, &quaternions.narrow(-1, 0, 1)?)?;
    // sin(θ/2) / θ; zero only at θ = 2π, where the imaginary part is zero too
    let sin_half_over_angle =
        client.mul_scalar(&sinc(client, &client.mul_scalar(&half_angles, 1.0 / PI)?)?, 0.5)?;
    Ok(client.div(&imaginary, &nonzero(client, &sin_half_over_angle)?)?)
}

/// Convert axis-angle vectors to rotation matrices.
pub fn axis_angle_to_matrix_impl<R, C>(
    client: &C,
    axis_angle: &Tensor<R>,
    options: &AxisAngleOptions,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    if options.method == AxisAngleMethod::Quaternion {
        let quaternions = axis_angle_to_quaternion_impl(client, axis_angle)?;
        return quaternion_to_matrix_impl(client, &quaternions);
    }

    validate_vector3_shape(axis_angle.shape(), "axis_angle", "axis_angle_to_matrix")?;
    let batch = batch_shape(axis_angle, 1);
    let scalar_shape = with_tail(&batch, &[1, 1]);

    // Cross-product matrix K of the axis-angle vector.
    let [x, y, z] = unbind::<R, 3>(axis_angle, -1)?;
    let (nx, ny, nz) = (client.neg(&x)?, client.neg(&y)?, client.neg(&z)?);
    let zero = full_like(axis_angle, &batch, 0.0);
    let k = client.stack(&[&zero, &nz, &y, &z, &zero, &nx, &ny, &x, &zero], -1)?;
    let k = reshape(&k, &with_tail(&batch, &[3, 3]))?;
    let k_sq = client.matmul(&k, &k)?;

    let angles_sq = sum_last(client, &client.mul(axis_angle, axis_angle)?, false)?;
    let angles = client.sqrt(&angles_sq)?;

    // sin(θ)/θ and (1 - cos θ)/θ², both finite at θ = 0
    let sin_coef = sinc(client, &client.mul_scalar(&angles, 1.0 / PI)?)?;
    let cos_coef = client.div(
        &client.rsub_scalar(&client.cos(&angles)?, 1.0)?,
        &nonzero(client, &angles_sq)?,
    )?;
    let sin_coef = reshape(&sin_coef, &scalar_shape)?;
    let cos_coef = reshape(&cos_coef, &scalar_shape)?;

    let eye = client.eye(3, None, axis_angle.dtype())?;
    let linear = client.mul(&sin_coef, &k)?;
    let quadratic = client.mul(&cos_coef, &k_sq)?;
    Ok(client.add(&client.add(&eye, &linear)?, &quadratic)?)
}

/// Convert rotation matrices to axis-angle vectors.
pub fn matrix_to_axis_angle_impl<R, C>(
    client: &C,
    matrix: &Tensor<R>,
    options: &AxisAngleOptions,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    if options.method == AxisAngleMethod::Quaternion {
        let quaternions = matrix_to_quaternion_impl(client, matrix)?;
        return quaternion_to_axis_angle_impl(client, &quaternions);
    }

    validate_matrix_shape(matrix.shape(), "matrix_to_axis_angle")?;
    let batch = batch_shape(matrix, 2);
    let AxisAngleOptions { rtol, atol, .. } = *options;

    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = matrix_entries(matrix)?;
    let omegas = client.stack(
        &[
            &client.sub(&m21, &m12)?,
            &client.sub(&m02, &m20)?,
            &client.sub(&m10, &m01)?,
        ],
        -1,
    )?;
    let norms = norm_last(client, &omegas, true)?;
    let traces = client.add(&client.add(&m00, &m11)?, &m22)?.unsqueeze(-1)?;
    let angles = client.atan2(&norms, &client.sub_scalar(&traces, 1.0)?)?;

    let near_zero = isclose_scalar(client, &angles, 0.0, rtol, atol)?;
    let near_pi = isclose_scalar(client, &angles, PI, rtol, atol)?;
    let omegas = client.where_cond(&near_zero, &scalar_like(&omegas, 0.0), &omegas)?;

    // Generic case: ω = 2 sin(θ) n, so n θ = ω / (2 sinc(θ/π)).
    let sin_ratio = sinc(client, &client.mul_scalar(&angles, 1.0 / PI)?)?;
    let sin_ratio = client.where_cond(&near_pi, &scalar_like(&sin_ratio, 1.0), &sin_ratio)?;
    let generic = client.div(&client.mul_scalar(&omegas, 0.5)?, &nonzero(client, &sin_ratio)?)?;

    // Near π, ω vanishes. (R + I) / 2 = n nᵀ there, and its row with the
    // largest diagonal entry is the best conditioned multiple of n.
    let eye = client.eye(3, None, matrix.dtype())?;
    let outer = client.mul_scalar(&client.add(matrix, &eye)?, 0.5)?;
    let [[o00, _, _], [_, o11, _], [_, _, o22]] = matrix_entries(&outer)?;
    let diagonal = client.stack(&[&o00, &o11, &o22], -1)?;
    let dominant = client.argmax(&diagonal, diagonal.ndim() - 1, true)?;
    let dominant = reshape(&dominant, &with_tail(&batch, &[1, 1]))?
        .broadcast_to(&with_tail(&batch, &[1, 3]))?
        .contiguous();
    let row = client.gather(&outer, outer.ndim() - 2, &dominant)?;
    let row = select(&row, -2, 0)?;
    let row_norm = norm_last(client, &row, true)?;
    let axes = client.div(&row, &nonzero(client, &row_norm)?)?;
    let flipped = client.mul(&axes, &angles)?;

    Ok(client.where_cond(&near_pi, &flipped, &generic)?)
}
