//! Generic 6D representation ↔ rotation matrix conversion.
//!
//! The 6D representation is the first two rows of a rotation matrix,
//! flattened. It is continuous over SO(3), unlike quaternions or Euler angles.

use super::helpers::{batch_shape, cross, norm_last, reshape, sum_last, with_tail};
use crate::error::Result;
use crate::rotation::validation::{validate_6d_shape, validate_matrix_shape};
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Convert 6D representations to rotation matrices with Gram-Schmidt.
pub fn rotation_6d_to_matrix_impl<R, C>(client: &C, d6: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_6d_shape(d6.shape(), "rotation_6d_to_matrix")?;

    let a1 = d6.narrow(-1, 0, 3)?;
    let a2 = d6.narrow(-1, 3, 3)?;

    let b1 = client.div(&a1, &norm_last(client, &a1, true)?)?;
    let along_b1 = sum_last(client, &client.mul(&b1, &a2)?, true)?;
    let b2 = client.sub(&a2, &client.mul(&along_b1, &b1)?)?;
    let b2 = client.div(&b2, &norm_last(client, &b2, true)?)?;
    let b3 = cross(client, &b1, &b2)?;

    Ok(client.stack(&[&b1, &b2, &b3], -2)?)
}

/// Convert rotation matrices to 6D representations.
pub fn matrix_to_rotation_6d_impl<R, C>(_client: &C, matrix: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_matrix_shape(matrix.shape(), "matrix_to_rotation_6d")?;

    let batch = batch_shape(matrix, 2);
    let rows = matrix.narrow(-2, 0, 2)?;
    reshape(&rows, &with_tail(&batch, &[6]))
}
