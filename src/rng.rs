//! Value-threaded random number generation for numr tensors.
//!
//! numr's own samplers draw from hidden per-client state. Rotation sampling
//! instead takes the generator by value and hands back the advanced
//! generator, so identical inputs always give identical draws.

use crate::error::{Error, Result};
use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand_distr::Normal;

/// Generator state threaded through random rotation sampling.
///
/// A plain value: cloning it forks the stream.
#[derive(Debug, Clone)]
pub struct TensorRng(StdRng);

impl TensorRng {
    /// Deterministic generator for reproducible sampling.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Draw a tensor of i.i.d. normal samples.
    ///
    /// # Arguments
    ///
    /// * `shape` - Output shape
    /// * `mean`, `std` - Distribution parameters; `std` must be finite and non-negative
    /// * `dtype` - `F32` or `F64`
    /// * `device` - Device the tensor is created on
    ///
    /// # Returns
    ///
    /// The advanced generator and the sampled tensor.
    pub fn random_normal<R: Runtime>(
        mut self,
        shape: &[usize],
        mean: f64,
        std: f64,
        dtype: DType,
        device: &R::Device,
    ) -> Result<(Self, Tensor<R>)> {
        let dist = Normal::new(mean, std).map_err(|e| Error::InvalidArgument {
            arg: "std",
            reason: format!("invalid normal distribution (mean={mean}, std={std}): {e}"),
        })?;

        let numel: usize = shape.iter().product();
        tracing::trace!(?shape, numel, ?dtype, "sampling normal tensor");
        let samples = (0..numel).map(|_| dist.sample(&mut self.0));

        let tensor = match dtype {
            DType::F64 => {
                let data: Vec<f64> = samples.collect();
                Tensor::<R>::try_from_slice(&data, shape, device)?
            }
            DType::F32 => {
                let data: Vec<f32> = samples.map(|v| v as f32).collect();
                Tensor::<R>::try_from_slice(&data, shape, device)?
            }
            other => {
                return Err(Error::InvalidArgument {
                    arg: "dtype",
                    reason: format!("random sampling supports F32 and F64, got {other:?}"),
                });
            }
        };
        Ok((self, tensor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let device = CpuDevice::new();

        let (_, a) = TensorRng::seed_from_u64(7)
            .random_normal::<CpuRuntime>(&[8], 0.0, 1.0, DType::F64, &device)
            .unwrap();
        let (_, b) = TensorRng::seed_from_u64(7)
            .random_normal::<CpuRuntime>(&[8], 0.0, 1.0, DType::F64, &device)
            .unwrap();
        assert_eq!(a.to_vec::<f64>(), b.to_vec::<f64>());
    }

    #[test]
    fn test_returned_rng_advances() {
        let device = CpuDevice::new();

        let (rng, a) = TensorRng::seed_from_u64(1)
            .random_normal::<CpuRuntime>(&[4], 0.0, 1.0, DType::F64, &device)
            .unwrap();
        let (_, b) = rng
            .random_normal::<CpuRuntime>(&[4], 0.0, 1.0, DType::F64, &device)
            .unwrap();
        assert_ne!(a.to_vec::<f64>(), b.to_vec::<f64>());
    }

    #[test]
    fn test_f32_samples() {
        let device = CpuDevice::new();

        let (_, a) = TensorRng::seed_from_u64(2)
            .random_normal::<CpuRuntime>(&[2, 3], 0.0, 1.0, DType::F32, &device)
            .unwrap();
        assert_eq!(a.dtype(), DType::F32);
        assert_eq!(a.shape(), &[2, 3]);
        assert!(a.to_vec::<f32>().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_invalid_parameters() {
        let device = CpuDevice::new();

        let rng = TensorRng::seed_from_u64(0);
        assert!(
            rng.clone()
                .random_normal::<CpuRuntime>(&[2], 0.0, -1.0, DType::F64, &device)
                .is_err()
        );
        assert!(matches!(
            rng.random_normal::<CpuRuntime>(&[2], 0.0, 1.0, DType::I64, &device),
            Err(Error::InvalidArgument { arg: "dtype", .. })
        ));
    }
}
