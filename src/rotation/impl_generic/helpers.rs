//! Small tensor helpers shared by the rotation implementations.
//!
//! numr covers the element-wise, reduction and shape primitives; the few
//! composites the rotation formulas need (`select`, `sinc`, norms, `isclose`)
//! are built here from those primitives.

use crate::error::{Error, Result};
use numr::ops::{CompareOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;
use std::f64::consts::PI;

/// Entry `index` of `a` along `dim`, dropping that dimension.
pub(crate) fn select<R: Runtime>(a: &Tensor<R>, dim: isize, index: usize) -> Result<Tensor<R>> {
    Ok(a.narrow(dim, index, 1)?.squeeze(Some(dim)))
}

/// Split `a` into its `N` entries along `dim`, dropping that dimension.
pub(crate) fn unbind<R: Runtime, const N: usize>(
    a: &Tensor<R>,
    dim: isize,
) -> Result<[Tensor<R>; N]> {
    let parts = (0..N)
        .map(|i| select(a, dim, i))
        .collect::<Result<Vec<_>>>()?;
    parts.try_into().map_err(|parts: Vec<Tensor<R>>| {
        Error::Backend(format!("expected {N} slices, got {}", parts.len()))
    })
}

/// Entries `m[i][j]` of a batch of 3x3 matrices, each with the batch shape.
pub(crate) fn matrix_entries<R: Runtime>(m: &Tensor<R>) -> Result<[[Tensor<R>; 3]; 3]> {
    let [r0, r1, r2] = unbind::<R, 3>(m, -2)?;
    Ok([
        unbind::<R, 3>(&r0, -1)?,
        unbind::<R, 3>(&r1, -1)?,
        unbind::<R, 3>(&r2, -1)?,
    ])
}

/// Leading (batch) dimensions of `a`, i.e. all but the last `trailing`.
pub(crate) fn batch_shape<R: Runtime>(a: &Tensor<R>, trailing: usize) -> Vec<usize> {
    let shape = a.shape();
    shape[..shape.len() - trailing].to_vec()
}

/// `batch ++ tail`.
pub(crate) fn with_tail(batch: &[usize], tail: &[usize]) -> Vec<usize> {
    [batch, tail].concat()
}

/// Tensor of `shape` filled with `value`, matching the dtype and device of `like`.
pub(crate) fn full_like<R: Runtime>(like: &Tensor<R>, shape: &[usize], value: f64) -> Tensor<R> {
    Tensor::<R>::full_scalar(shape, like.dtype(), value, like.device())
}

/// Zero-dimensional `value` that broadcasts against anything shaped like `like`.
pub(crate) fn scalar_like<R: Runtime>(like: &Tensor<R>, value: f64) -> Tensor<R> {
    full_like(like, &[], value)
}

/// Reshape `a`, copying it first when it is a strided view.
pub(crate) fn reshape<R: Runtime>(a: &Tensor<R>, shape: &[usize]) -> Result<Tensor<R>> {
    Ok(a.contiguous().reshape(shape)?)
}

/// Sum over the last dimension.
pub(crate) fn sum_last<R, C>(client: &C, a: &Tensor<R>, keepdim: bool) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    Ok(client.sum(a, &[a.ndim() - 1], keepdim)?)
}

/// Euclidean norm over the last dimension.
pub(crate) fn norm_last<R, C>(client: &C, a: &Tensor<R>, keepdim: bool) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let squares = client.mul(a, a)?;
    Ok(client.sqrt(&sum_last(client, &squares, keepdim)?)?)
}

/// Replace exact zeros of `a` with ones, for use as a denominator.
pub(crate) fn nonzero<R, C>(client: &C, a: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let zero = client.eq(a, &scalar_like(a, 0.0))?;
    Ok(client.where_cond(&zero, &scalar_like(a, 1.0), a)?)
}

/// Normalized sinc: `sin(πx) / (πx)`, with `sinc(0) = 1`.
pub(crate) fn sinc<R, C>(client: &C, x: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let one = scalar_like(x, 1.0);
    let at_zero = client.eq(x, &scalar_like(x, 0.0))?;
    let scaled = client.mul_scalar(x, PI)?;
    let denom = client.where_cond(&at_zero, &one, &scaled)?;
    let ratio = client.div(&client.sin(&scaled)?, &denom)?;
    Ok(client.where_cond(&at_zero, &one, &ratio)?)
}

/// Mask of `|a - value| <= atol + rtol * |value|`.
pub(crate) fn isclose_scalar<R, C>(
    client: &C,
    a: &Tensor<R>,
    value: f64,
    rtol: f64,
    atol: f64,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + CompareOps<R> + RuntimeClient<R>,
{
    let distance = client.abs(&client.sub_scalar(a, value)?)?;
    let threshold = scalar_like(a, atol + rtol * value.abs());
    Ok(client.le(&distance, &threshold)?)
}

/// `Σ sign_k · x_k · y_k` over `terms`; a negative sign subtracts.
pub(crate) fn signed_products<R, C>(
    client: &C,
    terms: &[(f64, &Tensor<R>, &Tensor<R>)],
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let mut acc: Option<Tensor<R>> = None;
    for &(sign, x, y) in terms {
        let p = client.mul(x, y)?;
        acc = Some(match acc {
            None if sign < 0.0 => client.neg(&p)?,
            None => p,
            Some(s) if sign < 0.0 => client.sub(&s, &p)?,
            Some(s) => client.add(&s, &p)?,
        });
    }
    acc.ok_or_else(|| Error::InvalidArgument {
        arg: "terms",
        reason: "empty product sum".to_string(),
    })
}

/// Cross product over the last dimension of two `[..., 3]` tensors.
pub(crate) fn cross<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let [ax, ay, az] = unbind::<R, 3>(a, -1)?;
    let [bx, by, bz] = unbind::<R, 3>(b, -1)?;

    let x = signed_products(client, &[(1.0, &ay, &bz), (-1.0, &az, &by)])?;
    let y = signed_products(client, &[(1.0, &az, &bx), (-1.0, &ax, &bz)])?;
    let z = signed_products(client, &[(1.0, &ax, &by), (-1.0, &ay, &bx)])?;
    Ok(client.stack(&[&x, &y, &z], -1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_select_drops_dimension() {
        let (_client, device) = setup();

        let a = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], &device);
        let column = select(&a, -1, 1).unwrap();
        assert_eq!(column.shape(), &[2]);
        assert_eq!(column.contiguous().to_vec::<f64>(), vec![2.0, 5.0]);

        let row = select(&a, 0, 1).unwrap();
        assert_eq!(row.contiguous().to_vec::<f64>(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_sinc() {
        let (client, device) = setup();

        let x = Tensor::<CpuRuntime>::from_slice(&[0.0, 0.5, 1.0, -0.5], &[4], &device);
        let data: Vec<f64> = sinc(&client, &x).unwrap().to_vec();
        let expected = [1.0, 2.0 / PI, 0.0, 2.0 / PI];
        for (got, want) in data.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cross_and_norm() {
        let (client, device) = setup();

        let a = Tensor::<CpuRuntime>::from_slice(&[1.0, 0.0, 0.0, 0.0, 2.0, 0.0], &[2, 3], &device);
        let b = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 0.0], &[3], &device);

        let c = cross(&client, &a, &b).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.to_vec::<f64>(), vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);

        let norms: Vec<f64> = norm_last(&client, &a, false).unwrap().to_vec();
        assert_eq!(norms, vec![1.0, 2.0]);
    }

    #[test]
    fn test_isclose_and_nonzero() {
        let (client, device) = setup();

        let a = Tensor::<CpuRuntime>::from_slice(&[PI, PI + 1e-9, 3.0, 0.0], &[4], &device);
        let close: Vec<f64> = isclose_scalar(&client, &a, PI, 1e-5, 1e-8)
            .unwrap()
            .to_vec();
        assert_eq!(close, vec![1.0, 1.0, 0.0, 0.0]);

        let guarded: Vec<f64> = nonzero(&client, &a).unwrap().to_vec();
        assert_eq!(guarded[3], 1.0);
        assert_eq!(guarded[2], 3.0);
    }
}
