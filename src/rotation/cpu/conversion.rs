//! CPU implementation of rotation representation conversions.

use crate::error::Result;
use crate::rotation::impl_generic::{
    axis_angle_to_matrix_impl, axis_angle_to_quaternion_impl, euler_angles_to_matrix_impl,
    matrix_to_axis_angle_impl, matrix_to_euler_angles_impl, matrix_to_quaternion_impl,
    matrix_to_rotation_6d_impl, quaternion_to_axis_angle_impl, quaternion_to_matrix_impl,
    rotation_6d_to_matrix_impl,
};
use crate::rotation::traits::convention::EulerConvention;
use crate::rotation::traits::conversion::{AxisAngleOptions, RotationConversions};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl RotationConversions<CpuRuntime> for CpuClient {
    fn quaternion_to_matrix(&self, quaternions: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        quaternion_to_matrix_impl(self, quaternions)
    }

    fn matrix_to_quaternion(&self, matrix: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        matrix_to_quaternion_impl(self, matrix)
    }

    fn euler_angles_to_matrix(
        &self,
        angles: &Tensor<CpuRuntime>,
        convention: EulerConvention,
    ) -> Result<Tensor<CpuRuntime>> {
        euler_angles_to_matrix_impl(self, angles, convention)
    }

    fn matrix_to_euler_angles(
        &self,
        matrix: &Tensor<CpuRuntime>,
        convention: EulerConvention,
    ) -> Result<Tensor<CpuRuntime>> {
        matrix_to_euler_angles_impl(self, matrix, convention)
    }

    fn axis_angle_to_quaternion(
        &self,
        axis_angle: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        axis_angle_to_quaternion_impl(self, axis_angle)
    }

    fn quaternion_to_axis_angle(
        &self,
        quaternions: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        quaternion_to_axis_angle_impl(self, quaternions)
    }

    fn axis_angle_to_matrix(
        &self,
        axis_angle: &Tensor<CpuRuntime>,
        options: &AxisAngleOptions,
    ) -> Result<Tensor<CpuRuntime>> {
        axis_angle_to_matrix_impl(self, axis_angle, options)
    }

    fn matrix_to_axis_angle(
        &self,
        matrix: &Tensor<CpuRuntime>,
        options: &AxisAngleOptions,
    ) -> Result<Tensor<CpuRuntime>> {
        matrix_to_axis_angle_impl(self, matrix, options)
    }

    fn rotation_6d_to_matrix(&self, d6: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        rotation_6d_to_matrix_impl(self, d6)
    }

    fn matrix_to_rotation_6d(&self, matrix: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        matrix_to_rotation_6d_impl(self, matrix)
    }
}
