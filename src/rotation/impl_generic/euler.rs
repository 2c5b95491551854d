//! Generic Euler angle ↔ rotation matrix conversion.

use super::helpers::{full_like, reshape, select, unbind, with_tail};
use crate::error::Result;
use crate::rotation::traits::convention::{Axis, EulerConvention};
use crate::rotation::validation::{validate_matrix_shape, validate_vector3_shape};
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Elementary rotation matrices about `axis`, shape `angle.shape ++ [3, 3]`.
fn axis_rotation<R, C>(client: &C, axis: Axis, angle: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let batch = angle.shape().to_vec();
    let cos = client.cos(angle)?;
    let sin = client.sin(angle)?;
    let neg_sin = client.neg(&sin)?;
    let one = full_like(angle, &batch, 1.0);
    let zero = full_like(angle, &batch, 0.0);

    let entries: [&Tensor<R>; 9] = match axis {
        Axis::X => [&one, &zero, &zero, &zero, &cos, &neg_sin, &zero, &sin, &cos],
        Axis::Y => [&cos, &zero, &sin, &zero, &one, &zero, &neg_sin, &zero, &cos],
        Axis::Z => [&cos, &neg_sin, &zero, &sin, &cos, &zero, &zero, &zero, &one],
    };
    let flat = client.stack(&entries, -1)?;
    reshape(&flat, &with_tail(&batch, &[3, 3]))
}

/// Angle about `axis` from the two entries of `data` that `axis` and `other`
/// leave in a single 2D rotation block.
///
/// `data` is a row (`horizontal`) or a column of the matrix, shape `[..., 3]`.
fn angle_from_tan<R, C>(
    client: &C,
    axis: Axis,
    other: Axis,
    data: &Tensor<R>,
    horizontal: bool,
    tait_bryan: bool,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let (mut i1, mut i2) = match axis {
        Axis::X => (2, 1),
        Axis::Y => (0, 2),
        Axis::Z => (1, 0),
    };
    if horizontal {
        std::mem::swap(&mut i1, &mut i2);
    }
    let even = axis.precedes(other);

    let d1 = select(data, -1, i1)?;
    let d2 = select(data, -1, i2)?;
    let angle = if horizontal == even {
        client.atan2(&d1, &d2)?
    } else if tait_bryan {
        client.atan2(&client.neg(&d2)?, &d1)?
    } else {
        client.atan2(&d2, &client.neg(&d1)?)?
    };
    Ok(angle)
}

/// Convert Euler angles to rotation matrices: `R0 · R1 · R2`.
pub fn euler_angles_to_matrix_impl<R, C>(
    client: &C,
    angles: &Tensor<R>,
    convention: EulerConvention,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_vector3_shape(angles.shape(), "angles", "euler_angles_to_matrix")?;

    let thetas = unbind::<R, 3>(angles, -1)?;
    let [r0, r1, r2] = [0, 1, 2].map(|k| axis_rotation(client, convention.axes()[k], &thetas[k]));
    Ok(client.matmul(&client.matmul(&r0?, &r1?)?, &r2?)?)
}

/// Convert rotation matrices to Euler angles.
///
/// Exact gimbal lock is not disambiguated: the outer angles come from `atan2`
/// of zero entries and need not reproduce the matrix.
pub fn matrix_to_euler_angles_impl<R, C>(
    client: &C,
    matrix: &Tensor<R>,
    convention: EulerConvention,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_matrix_shape(matrix.shape(), "matrix_to_euler_angles")?;

    let [a0, a1, a2] = convention.axes();
    let (i0, i2) = (a0.index(), a2.index());
    let tait_bryan = convention.is_tait_bryan();

    let row_i0 = select(matrix, -2, i0)?;
    let central = if tait_bryan {
        let sign = if matches!(i0 as isize - i2 as isize, -1 | 2) { -1.0 } else { 1.0 };
        let entry = client.clamp(&select(&row_i0, -1, i2)?, -1.0, 1.0)?;
        client.asin(&client.mul_scalar(&entry, sign)?)?
    } else {
        let entry = client.clamp(&select(&row_i0, -1, i0)?, -1.0, 1.0)?;
        client.acos(&entry)?
    };

    let column_i2 = select(matrix, -1, i2)?;
    let first = angle_from_tan(client, a0, a1, &column_i2, false, tait_bryan)?;
    let third = angle_from_tan(client, a2, a1, &row_i0, true, tait_bryan)?;

    Ok(client.stack(&[&first, &central, &third], -1)?)
}
