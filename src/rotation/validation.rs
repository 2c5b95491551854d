//! Validation helpers for rotation algorithms.

use crate::error::{Error, Result};

fn validate_trailing(
    shape: &[usize],
    trailing: &[usize],
    arg: &'static str,
    expected: &'static str,
    op: &'static str,
) -> Result<()> {
    if shape.len() < trailing.len() || !shape.ends_with(trailing) {
        tracing::debug!(op, arg, ?shape, expected, "rejecting input shape");
        return Err(Error::InvalidShape {
            arg,
            expected,
            got: shape.to_vec(),
        });
    }
    Ok(())
}

/// Validate quaternions are [..., 4].
pub fn validate_quaternion_shape(shape: &[usize], op: &'static str) -> Result<()> {
    validate_trailing(shape, &[4], "quaternion", "(..., 4)", op)
}

/// Validate rotation matrices are [..., 3, 3].
pub fn validate_matrix_shape(shape: &[usize], op: &'static str) -> Result<()> {
    validate_trailing(shape, &[3, 3], "matrix", "(..., 3, 3)", op)
}

/// Validate 3-vectors (points, axis-angle vectors, Euler angles) are [..., 3].
pub fn validate_vector3_shape(shape: &[usize], arg: &'static str, op: &'static str) -> Result<()> {
    validate_trailing(shape, &[3], arg, "(..., 3)", op)
}

/// Validate 6D representations are [..., 6].
pub fn validate_6d_shape(shape: &[usize], op: &'static str) -> Result<()> {
    validate_trailing(shape, &[6], "d6", "(..., 6)", op)
}

/// Validate a requested batch size.
pub fn validate_batch_size(n: usize, op: &'static str) -> Result<()> {
    if n == 0 {
        tracing::debug!(op, "rejecting empty batch");
        return Err(Error::InvalidArgument {
            arg: "n",
            reason: format!("{op} requires n > 0"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_shapes() {
        assert!(validate_quaternion_shape(&[4], "op").is_ok());
        assert!(validate_quaternion_shape(&[2, 5, 4], "op").is_ok());
        assert!(validate_quaternion_shape(&[4, 3], "op").is_err());
        assert!(validate_quaternion_shape(&[], "op").is_err());

        assert!(validate_matrix_shape(&[7, 3, 3], "op").is_ok());
        assert!(validate_matrix_shape(&[3], "op").is_err());
        assert!(validate_matrix_shape(&[3, 4], "op").is_err());

        assert!(validate_6d_shape(&[10, 6], "op").is_ok());
        assert!(validate_vector3_shape(&[2, 3], "point", "op").is_ok());
    }

    #[test]
    fn test_error_reports_shape() {
        let err = validate_matrix_shape(&[2, 3, 4], "matrix_to_quaternion").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidShape {
                arg: "matrix",
                expected: "(..., 3, 3)",
                got: vec![2, 3, 4],
            }
        );
    }

    #[test]
    fn test_batch_size() {
        assert!(validate_batch_size(1, "op").is_ok());
        assert!(matches!(
            validate_batch_size(0, "op"),
            Err(Error::InvalidArgument { arg: "n", .. })
        ));
    }
}
