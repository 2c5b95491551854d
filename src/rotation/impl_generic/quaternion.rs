//! Generic quaternion algebra.

use super::helpers::{
    batch_shape, full_like, norm_last, scalar_like, select, signed_products, unbind, with_tail,
};
use crate::error::Result;
use crate::rotation::validation::{
    validate_batch_size, validate_quaternion_shape, validate_vector3_shape,
};
use numr::dtype::DType;
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Flip quaternions whose real part is negative.
pub fn standardize_quaternion_impl<R, C>(client: &C, quaternions: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(quaternions.shape(), "standardize_quaternion")?;

    let real = quaternions.narrow(-1, 0, 1)?;
    let negative = client.lt(&real, &scalar_like(quaternions, 0.0))?;
    Ok(client.where_cond(&negative, &client.neg(quaternions)?, quaternions)?)
}

/// Hamilton product of two quaternion batches.
pub fn quaternion_raw_multiply_impl<R, C>(
    client: &C,
    a: &Tensor<R>,
    b: &Tensor<R>,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(a.shape(), "quaternion_raw_multiply")?;
    validate_quaternion_shape(b.shape(), "quaternion_raw_multiply")?;

    let [aw, ax, ay, az] = unbind::<R, 4>(a, -1)?;
    let [bw, bx, by, bz] = unbind::<R, 4>(b, -1)?;

    let ow = signed_products(
        client,
        &[(1.0, &aw, &bw), (-1.0, &ax, &bx), (-1.0, &ay, &by), (-1.0, &az, &bz)],
    )?;
    let ox = signed_products(
        client,
        &[(1.0, &aw, &bx), (1.0, &ax, &bw), (1.0, &ay, &bz), (-1.0, &az, &by)],
    )?;
    let oy = signed_products(
        client,
        &[(1.0, &aw, &by), (-1.0, &ax, &bz), (1.0, &ay, &bw), (1.0, &az, &bx)],
    )?;
    let oz = signed_products(
        client,
        &[(1.0, &aw, &bz), (1.0, &ax, &by), (-1.0, &ay, &bx), (1.0, &az, &bw)],
    )?;

    Ok(client.stack(&[&ow, &ox, &oy, &oz], -1)?)
}

/// Hamilton product in standard form.
pub fn quaternion_multiply_impl<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let product = quaternion_raw_multiply_impl(client, a, b)?;
    standardize_quaternion_impl(client, &product)
}

/// Quaternion conjugate.
pub fn quaternion_invert_impl<R, C>(client: &C, quaternions: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(quaternions.shape(), "quaternion_invert")?;

    let real = quaternions.narrow(-1, 0, 1)?;
    let imaginary = client.neg(&quaternions.narrow(-1, 1, 3)?)?;
    Ok(client.cat(&[&real, &imaginary], -1)?)
}

/// Rotate points: `q ⊗ (0, p) ⊗ q⁻¹`, keeping the imaginary part.
pub fn quaternion_apply_impl<R, C>(
    client: &C,
    quaternions: &Tensor<R>,
    points: &Tensor<R>,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(quaternions.shape(), "quaternion_apply")?;
    validate_vector3_shape(points.shape(), "point", "quaternion_apply")?;

    let real = full_like(points, &with_tail(&batch_shape(points, 1), &[1]), 0.0);
    let pure = client.cat(&[&real, points], -1)?;

    let left = quaternion_raw_multiply_impl(client, quaternions, &pure)?;
    let inverse = quaternion_invert_impl(client, quaternions)?;
    let rotated = quaternion_raw_multiply_impl(client, &left, &inverse)?;
    Ok(rotated.narrow(-1, 1, 3)?.contiguous())
}

/// `n` identity quaternions.
pub fn quaternion_identity_impl<R, C>(client: &C, n: usize, dtype: DType) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_batch_size(n, "quaternion_identity")?;

    let device = client.device();
    let real = Tensor::<R>::ones(&[n, 1], dtype, device);
    let imaginary = Tensor::<R>::zeros(&[n, 3], dtype, device);
    Ok(client.cat(&[&real, &imaginary], -1)?)
}

/// Rotation angle `2·atan2(|v|, |w|)`.
pub fn quaternion_magnitude_impl<R, C>(client: &C, quaternions: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(quaternions.shape(), "quaternion_magnitude")?;

    let imaginary = quaternions.narrow(-1, 1, 3)?;
    let sin_half = norm_last(client, &imaginary, false)?;
    let cos_half = client.abs(&select(quaternions, -1, 0)?)?;
    Ok(client.mul_scalar(&client.atan2(&sin_half, &cos_half)?, 2.0)?)
}
