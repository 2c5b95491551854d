//! CPU implementation of random rotation sampling.

use crate::error::Result;
use crate::rng::TensorRng;
use crate::rotation::impl_generic::{
    random_quaternions_impl, random_rotation_impl, random_rotations_impl,
};
use crate::rotation::traits::random::RandomRotationAlgorithms;
use numr::dtype::DType;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl RandomRotationAlgorithms<CpuRuntime> for CpuClient {
    fn random_quaternions(
        &self,
        rng: TensorRng,
        n: usize,
        dtype: DType,
    ) -> Result<(TensorRng, Tensor<CpuRuntime>)> {
        random_quaternions_impl(self, rng, n, dtype)
    }

    fn random_rotations(
        &self,
        rng: TensorRng,
        n: usize,
        dtype: DType,
    ) -> Result<(TensorRng, Tensor<CpuRuntime>)> {
        random_rotations_impl(self, rng, n, dtype)
    }

    fn random_rotation(
        &self,
        rng: TensorRng,
        dtype: DType,
    ) -> Result<(TensorRng, Tensor<CpuRuntime>)> {
        random_rotation_impl(self, rng, dtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_random_quaternions_are_unit_and_standard() {
        let (client, _device) = setup();

        let (_, q) = client
            .random_quaternions(TensorRng::seed_from_u64(42), 64, DType::F64)
            .unwrap();
        assert_eq!(q.shape(), &[64, 4]);

        let data: Vec<f64> = q.to_vec();
        for row in data.chunks(4) {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
            assert!(row[0] >= 0.0);
        }
    }

    #[test]
    fn test_rng_is_threaded() {
        let (client, _device) = setup();

        let rng = TensorRng::seed_from_u64(3);
        let (next, a) = client.random_quaternions(rng.clone(), 2, DType::F64).unwrap();
        let (_, again) = client.random_quaternions(rng, 2, DType::F64).unwrap();
        let (_, b) = client.random_quaternions(next, 2, DType::F64).unwrap();

        let a: Vec<f64> = a.to_vec();
        let again: Vec<f64> = again.to_vec();
        let b: Vec<f64> = b.to_vec();
        assert_eq!(a, again);
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_rotation_shapes() {
        let (client, _device) = setup();

        let rng = TensorRng::seed_from_u64(5);
        let (rng, batch) = client.random_rotations(rng, 3, DType::F64).unwrap();
        assert_eq!(batch.shape(), &[3, 3, 3]);

        let (_, single) = client.random_rotation(rng, DType::F32).unwrap();
        assert_eq!(single.shape(), &[3, 3]);
        assert_eq!(single.dtype(), DType::F32);
    }

    #[test]
    fn test_invalid_requests_rejected() {
        let (client, _device) = setup();

        assert!(matches!(
            client.random_quaternions(TensorRng::seed_from_u64(0), 0, DType::F64),
            Err(Error::InvalidArgument { arg: "n", .. })
        ));
        assert!(matches!(
            client.random_rotations(TensorRng::seed_from_u64(0), 4, DType::I64),
            Err(Error::InvalidArgument { arg: "dtype", .. })
        ));
    }
}
