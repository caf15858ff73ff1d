use http::StatusCode;
use thiserror::Error;

/// Failures raised by the strict area path and by JSON input.
///
/// The plain [`calculate_shape_area`](crate::calculator::calculate_shape_area)
/// never produces one of these.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A dimension is below zero.
    #[error("{dimension} must be non-negative, got {value}")]
    NegativeDimension { dimension: &'static str, value: f64 },
    /// A dimension is NaN or infinite.
    #[error("{dimension} must be a finite number, got {value}")]
    NonFiniteDimension { dimension: &'static str, value: f64 },
    /// The input is not a circle (`radius`) or rectangle (`height` + `width`).
    #[error("malformed shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ShapeError {
    /// HTTP status the area endpoint answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShapeError::Malformed(_) => StatusCode::BAD_REQUEST,
            ShapeError::NegativeDimension { .. } | ShapeError::NonFiniteDimension { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    /// Short machine-readable error code used in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::Malformed(_) => "malformed_shape",
            ShapeError::NegativeDimension { .. } => "negative_dimension",
            ShapeError::NonFiniteDimension { .. } => "non_finite_dimension",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let negative = ShapeError::NegativeDimension {
            dimension: "radius",
            value: -1.0,
        };
        assert_eq!(negative.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(negative.code(), "negative_dimension");

        let malformed: ShapeError = serde_json::from_str::<f64>("nope").unwrap_err().into();
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(malformed.code(), "malformed_shape");
    }

    #[test]
    fn test_message_names_the_dimension() {
        let err = ShapeError::NonFiniteDimension {
            dimension: "width",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "width must be a finite number, got inf");
    }
}
