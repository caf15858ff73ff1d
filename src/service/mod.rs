/// Request evaluation for the area endpoint.
///
/// Kept out of the handler so the HTTP binary stays thin and the logic can be
/// tested without a runtime.

use crate::calculator::{calculate_shape_area, try_calculate_shape_area};
use crate::config::{AreaConfig, ValidationMode};
use crate::error::ShapeError;
use crate::models::area::{AreaResponse, ErrorResponse};
use crate::models::shape::Shape;
use log::warn;

/// Parse a JSON request body and compute its area under `config`.
pub fn evaluate(body: &[u8], config: &AreaConfig) -> Result<AreaResponse, ShapeError> {
    let shape = Shape::from_json(body).inspect_err(|e| warn!("rejected body: {e}"))?;

    let area = match config.validation {
        ValidationMode::Permissive => calculate_shape_area(&shape),
        ValidationMode::Strict => {
            try_calculate_shape_area(&shape).inspect_err(|e| warn!("rejected shape: {e}"))?
        }
    };

    Ok(AreaResponse {
        shape: shape.label().to_string(),
        kind: shape.kind(),
        area,
    })
}

impl From<&ShapeError> for ErrorResponse {
    fn from(err: &ShapeError) -> Self {
        ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shape::ShapeKind;
    use http::StatusCode;

    fn init_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn strict() -> AreaConfig {
        AreaConfig {
            validation: ValidationMode::Strict,
        }
    }

    #[test]
    fn test_rectangle_request() {
        let response = evaluate(
            br#"{"shape":"rectangle","height":3,"width":4}"#,
            &AreaConfig::default(),
        )
        .unwrap();
        assert_eq!(
            response,
            AreaResponse {
                shape: "rectangle".to_string(),
                kind: ShapeKind::Rectangle,
                area: 12.0,
            }
        );
    }

    #[test]
    fn test_mislabelled_circle_echoes_label() {
        let response =
            evaluate(br#"{"shape":"rectangle","radius":2}"#, &AreaConfig::default()).unwrap();
        assert_eq!(response.shape, "rectangle");
        assert_eq!(response.kind, ShapeKind::Circle);
        assert!((response.area - std::f64::consts::PI * 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_permissive_accepts_negative() {
        let response = evaluate(
            br#"{"shape":"rectangle","height":-3,"width":4}"#,
            &AreaConfig::default(),
        )
        .unwrap();
        assert_eq!(response.area, -12.0);
    }

    #[test]
    fn test_strict_rejects_negative() {
        init_logger();
        let err = evaluate(br#"{"shape":"circle","radius":-1}"#, &strict()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, "negative_dimension");
        assert_eq!(body.message, "radius must be non-negative, got -1");
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        init_logger();
        let bodies: [&[u8]; 3] = [b"", b"not json", br#"{"shape":"rectangle","width":4}"#];
        for body in bodies {
            let err = evaluate(body, &strict()).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "body {body:?}");
        }
    }

    #[test]
    fn test_null_radius_with_sides_is_bad_request() {
        let err = evaluate(
            br#"{"shape":"rectangle","radius":null,"height":3,"width":4}"#,
            &AreaConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorResponse::from(&err).error, "malformed_shape");
    }
}
