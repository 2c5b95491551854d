//! CPU implementation of rotation algorithms.
//!
//! This module implements the rotation algorithm traits for the CPU client
//! by delegating to the generic implementations in `impl_generic/`.

mod conversion;
mod quaternion;
mod random;
