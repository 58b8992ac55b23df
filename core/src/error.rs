//! Geometry error types.

use thiserror::Error;

use crate::mesh::Decomposition;

/// Errors reported while generating a shape.
///
/// All variants are detected before any vertex, index or attribute array is
/// produced. Generation is deterministic, so retrying with the same
/// parameters fails the same way.
///
/// An index that points past the vertex array is not represented here: that
/// is a generator defect and panics in [`validate_indices`](crate::mesh::validate_indices).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension, angle or count is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The shape has no index generator for the requested decomposition.
    #[error("{shape} does not support {decomposition:?} decomposition")]
    UnsupportedDecomposition {
        /// Name of the shape.
        shape: &'static str,
        /// The requested decomposition.
        decomposition: Decomposition,
    },
}

impl GeometryError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::invalid("radius must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "invalid parameter: radius must be positive, got -1"
        );

        let err = GeometryError::UnsupportedDecomposition {
            shape: "sphere",
            decomposition: Decomposition::Lines,
        };
        assert_eq!(err.to_string(), "sphere does not support Lines decomposition");
    }
}
