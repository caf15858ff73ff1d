use log::info;
use serde_json::json;
use shape_area::config::AreaConfig;
use shape_area::models::area::ErrorResponse;
use shape_area::service::evaluate;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let config = AreaConfig::from_env();
    info!("area endpoint starting with {} validation", config.validation);
    run(|req| handler(req, config)).await
}

/// POST /api/area — Compute the area of a circle or rectangle.
///
/// The body is a bare shape object: `{"shape": "circle", "radius": 2}` or
/// `{"shape": "rectangle", "height": 3, "width": 4}`.
pub async fn handler(req: Request, config: AreaConfig) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use POST to submit a shape"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let body: &[u8] = match req.body() {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes,
    };

    let (status, payload) = match evaluate(body, &config) {
        Ok(response) => (StatusCode::OK, serde_json::to_string(&response)?),
        Err(err) => (
            err.status_code(),
            serde_json::to_string(&ErrorResponse::from(&err))?,
        ),
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload))?)
}
