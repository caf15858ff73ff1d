/// Dimension checks for the strict area path.
use crate::error::ShapeError;

/// Returns the first offending dimension as an error.
///
/// Non-finite values are reported before sign, so `-inf` is a
/// `NonFiniteDimension` rather than a `NegativeDimension`.
pub fn validate_dimensions(dimensions: &[(&'static str, f64)]) -> Result<(), ShapeError> {
    for &(dimension, value) in dimensions {
        if !value.is_finite() {
            return Err(ShapeError::NonFiniteDimension { dimension, value });
        }
        if value < 0.0 {
            return Err(ShapeError::NegativeDimension { dimension, value });
        }
    }
    Ok(())
}
