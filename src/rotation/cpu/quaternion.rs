//! CPU implementation of quaternion algebra.

use crate::error::Result;
use crate::rotation::impl_generic::{
    quaternion_apply_impl, quaternion_identity_impl, quaternion_invert_impl,
    quaternion_magnitude_impl, quaternion_multiply_impl, quaternion_raw_multiply_impl,
    standardize_quaternion_impl,
};
use crate::rotation::traits::quaternion::QuaternionAlgorithms;
use numr::dtype::DType;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl QuaternionAlgorithms<CpuRuntime> for CpuClient {
    fn quaternion_raw_multiply(
        &self,
        a: &Tensor<CpuRuntime>,
        b: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        quaternion_raw_multiply_impl(self, a, b)
    }

    fn quaternion_multiply(
        &self,
        a: &Tensor<CpuRuntime>,
        b: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        quaternion_multiply_impl(self, a, b)
    }

    fn quaternion_invert(&self, quaternions: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        quaternion_invert_impl(self, quaternions)
    }

    fn quaternion_apply(
        &self,
        quaternions: &Tensor<CpuRuntime>,
        points: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        quaternion_apply_impl(self, quaternions, points)
    }

    fn standardize_quaternion(
        &self,
        quaternions: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        standardize_quaternion_impl(self, quaternions)
    }

    fn quaternion_identity(&self, n: usize, dtype: DType) -> Result<Tensor<CpuRuntime>> {
        quaternion_identity_impl(self, n, dtype)
    }

    fn quaternion_magnitude(
        &self,
        quaternions: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        quaternion_magnitude_impl(self, quaternions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use numr::runtime::cpu::CpuDevice;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_raw_multiply_basis() {
        let (client, device) = setup();

        let i = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 0.0, 0.0], &[4], &device);
        let j = Tensor::<CpuRuntime>::from_slice(&[0.0, 0.0, 1.0, 0.0], &[4], &device);

        // i * j = k, j * i = -k
        let ij: Vec<f64> = client.quaternion_raw_multiply(&i, &j).unwrap().to_vec();
        let ji: Vec<f64> = client.quaternion_raw_multiply(&j, &i).unwrap().to_vec();
        assert_eq!(ij, vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(ji, vec![0.0, 0.0, 0.0, -1.0]);

        // i * i = -1, standardized to +1
        let ii: Vec<f64> = client.quaternion_multiply(&i, &i).unwrap().to_vec();
        assert_eq!(ii, vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_raw_multiply_broadcasts() {
        let (client, device) = setup();

        let identity = client.quaternion_identity(1, DType::F64).unwrap();
        let batch = Tensor::<CpuRuntime>::from_slice(
            &[0.5, 0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 0.0],
            &[2, 4],
            &device,
        );

        let product = client.quaternion_raw_multiply(&identity, &batch).unwrap();
        assert_eq!(product.shape(), &[2, 4]);
        let got: Vec<f64> = product.to_vec();
        let want: Vec<f64> = batch.to_vec();
        assert_eq!(got, want);
    }

    #[test]
    fn test_standardize_is_idempotent() {
        let (client, device) = setup();

        let q = Tensor::<CpuRuntime>::from_slice(
            &[-0.5, 0.5, -0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
            &[2, 4],
            &device,
        );
        let once = client.standardize_quaternion(&q).unwrap();
        let twice = client.standardize_quaternion(&once).unwrap();

        let once_data: Vec<f64> = once.to_vec();
        let twice_data: Vec<f64> = twice.to_vec();
        assert_eq!(once_data, vec![0.5, -0.5, 0.5, -0.5, 0.5, 0.5, 0.5, 0.5]);
        assert_eq!(once_data, twice_data);
    }

    #[test]
    fn test_invert() {
        let (client, device) = setup();

        let q = Tensor::<CpuRuntime>::from_slice(&[0.5, 0.5, -0.5, 0.5], &[4], &device);
        let inv = client.quaternion_invert(&q).unwrap();
        let inv_data: Vec<f64> = inv.to_vec();
        assert_eq!(inv_data, vec![0.5, -0.5, 0.5, -0.5]);

        let data: Vec<f64> = client.quaternion_multiply(&q, &inv).unwrap().to_vec();
        assert!((data[0] - 1.0).abs() < 1e-12);
        assert!(data[1..].iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_apply_rotates_points() {
        let (client, device) = setup();

        // 90 degrees about Z
        let q = Tensor::<CpuRuntime>::from_slice(
            &[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2],
            &[4],
            &device,
        );
        let points =
            Tensor::<CpuRuntime>::from_slice(&[1.0, 0.0, 0.0, 0.0, 0.0, 2.0], &[2, 3], &device);

        let rotated = client.quaternion_apply(&q, &points).unwrap();
        assert_eq!(rotated.shape(), &[2, 3]);

        let data: Vec<f64> = rotated.to_vec();
        let expected = [0.0, 1.0, 0.0, 0.0, 0.0, 2.0];
        for (got, want) in data.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apply_rejects_bad_points() {
        let (client, device) = setup();

        let q = client.quaternion_identity(1, DType::F64).unwrap();
        let points = Tensor::<CpuRuntime>::zeros(&[2, 4], DType::F64, &device);
        assert!(matches!(
            client.quaternion_apply(&q, &points),
            Err(Error::InvalidShape { arg: "point", .. })
        ));
    }

    #[test]
    fn test_identity_and_magnitude() {
        let (client, device) = setup();

        let identity = client.quaternion_identity(3, DType::F64).unwrap();
        assert_eq!(identity.shape(), &[3, 4]);
        let magnitude: Vec<f64> = client.quaternion_magnitude(&identity).unwrap().to_vec();
        assert_eq!(magnitude, vec![0.0; 3]);

        // q and -q have the same angle
        let q = Tensor::<CpuRuntime>::from_slice(
            &[0.0, 1.0, 0.0, 0.0, -FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2, 0.0],
            &[2, 4],
            &device,
        );
        let data: Vec<f64> = client.quaternion_magnitude(&q).unwrap().to_vec();
        assert!((data[0] - PI).abs() < 1e-12);
        assert!((data[1] - PI / 2.0).abs() < 1e-12);

        assert!(client.quaternion_identity(0, DType::F64).is_err());
    }

    #[test]
    fn test_identity_follows_dtype() {
        let (client, _device) = setup();

        let identity = client.quaternion_identity(2, DType::F32).unwrap();
        assert_eq!(identity.dtype(), DType::F32);
        let data: Vec<f32> = identity.to_vec();
        assert_eq!(data, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    }
}
