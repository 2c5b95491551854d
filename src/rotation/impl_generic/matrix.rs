//! Generic quaternion ↔ rotation matrix conversion.

use super::helpers::{
    batch_shape, matrix_entries, reshape, scalar_like, sum_last, unbind, with_tail,
};
use super::quaternion::standardize_quaternion_impl;
use crate::error::Result;
use crate::rotation::validation::{validate_matrix_shape, validate_quaternion_shape};
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Lower bound on `|q_k|` in the candidate denominators.
const CANDIDATE_FLOOR: f64 = 0.1;

/// Convert quaternions to rotation matrices.
pub fn quaternion_to_matrix_impl<R, C>(client: &C, quaternions: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_quaternion_shape(quaternions.shape(), "quaternion_to_matrix")?;
    let batch = batch_shape(quaternions, 1);

    let [r, i, j, k] = unbind::<R, 4>(quaternions, -1)?;
    let norm_sq = sum_last(client, &client.mul(quaternions, quaternions)?, false)?;
    let two_s = client.mul_scalar(&client.recip(&norm_sq)?, 2.0)?;

    let prod = |a: &Tensor<R>, b: &Tensor<R>| client.mul(a, b);
    let (ii, jj, kk) = (prod(&i, &i)?, prod(&j, &j)?, prod(&k, &k)?);
    let (ij, ik, jk) = (prod(&i, &j)?, prod(&i, &k)?, prod(&j, &k)?);
    let (ir, jr, kr) = (prod(&i, &r)?, prod(&j, &r)?, prod(&k, &r)?);

    // 1 - two_s * (x + y)
    let diag = |x: &Tensor<R>, y: &Tensor<R>| -> Result<Tensor<R>> {
        Ok(client.rsub_scalar(&client.mul(&two_s, &client.add(x, y)?)?, 1.0)?)
    };
    // two_s * (x ± y)
    let plus = |x: &Tensor<R>, y: &Tensor<R>| -> Result<Tensor<R>> {
        Ok(client.mul(&two_s, &client.add(x, y)?)?)
    };
    let minus = |x: &Tensor<R>, y: &Tensor<R>| -> Result<Tensor<R>> {
        Ok(client.mul(&two_s, &client.sub(x, y)?)?)
    };

    let entries = [
        diag(&jj, &kk)?,
        minus(&ij, &kr)?,
        plus(&ik, &jr)?,
        plus(&ij, &kr)?,
        diag(&ii, &kk)?,
        minus(&jk, &ir)?,
        minus(&ik, &jr)?,
        plus(&jk, &ir)?,
        diag(&ii, &jj)?,
    ];
    let flat = client.stack(&entries.iter().collect::<Vec<_>>(), -1)?;
    reshape(&flat, &with_tail(&batch, &[3, 3]))
}

/// Convert rotation matrices to quaternions.
///
/// Builds all four quaternion candidates, each exact up to scale but divided
/// by a different `2|q_k|`, and keeps the one with the largest `|q_k|`.
pub fn matrix_to_quaternion_impl<R, C>(client: &C, matrix: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    validate_matrix_shape(matrix.shape(), "matrix_to_quaternion")?;
    let batch = batch_shape(matrix, 2);

    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = matrix_entries(matrix)?;

    let plus = |a: &Tensor<R>, b: &Tensor<R>| client.add(a, b);
    let minus = |a: &Tensor<R>, b: &Tensor<R>| client.sub(a, b);

    // 1 ± m00 ± m11 ± m22
    let q_abs_sq = [
        client.add_scalar(&plus(&plus(&m00, &m11)?, &m22)?, 1.0)?,
        client.add_scalar(&minus(&minus(&m00, &m11)?, &m22)?, 1.0)?,
        client.add_scalar(&minus(&minus(&m11, &m00)?, &m22)?, 1.0)?,
        client.add_scalar(&minus(&minus(&m22, &m00)?, &m11)?, 1.0)?,
    ];
    let stacked = client.stack(&q_abs_sq.iter().collect::<Vec<_>>(), -1)?;
    let q_abs = client.sqrt(&client.maximum(&stacked, &scalar_like(&stacked, 0.0))?)?;
    let [a0, a1, a2, a3] = unbind::<R, 4>(&q_abs, -1)?;

    let (d21, s21) = (minus(&m21, &m12)?, plus(&m21, &m12)?);
    let (d02, s02) = (minus(&m02, &m20)?, plus(&m02, &m20)?);
    let (d10, s10) = (minus(&m10, &m01)?, plus(&m10, &m01)?);

    let rows = [
        client.stack(&[&client.mul(&a0, &a0)?, &d21, &d02, &d10], -1)?,
        client.stack(&[&d21, &client.mul(&a1, &a1)?, &s10, &s02], -1)?,
        client.stack(&[&d02, &s10, &client.mul(&a2, &a2)?, &s21], -1)?,
        client.stack(&[&d10, &s02, &s21, &client.mul(&a3, &a3)?], -1)?,
    ];
    let by_rijk = client.stack(&rows.iter().collect::<Vec<_>>(), -2)?;

    let floor = scalar_like(&q_abs, CANDIDATE_FLOOR);
    let denom = client.mul_scalar(&client.maximum(&q_abs, &floor)?, 2.0)?;
    let denom = reshape(&denom, &with_tail(&batch, &[4, 1]))?;
    let candidates = client.div(&by_rijk, &denom)?;

    // Row index of the best candidate, spread over the row so gather sees
    // an index with the candidates' rank.
    let best = client.argmax(&q_abs, q_abs.ndim() - 1, true)?;
    let best = reshape(&best, &with_tail(&batch, &[1, 1]))?
        .broadcast_to(&with_tail(&batch, &[1, 4]))?
        .contiguous();
    let chosen = client.gather(&candidates, candidates.ndim() - 2, &best)?;
    let chosen = reshape(&chosen, &with_tail(&batch, &[4]))?;

    standardize_quaternion_impl(client, &chosen)
}
