/// Shape Area — Shared Library
///
/// This crate contains the shape models, the area calculator, and the
/// request handling used across all API handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod calculator;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod service;

pub use calculator::{calculate_shape_area, try_calculate_shape_area};
pub use error::ShapeError;
pub use models::shape::{Circle, Rectangle, Shape, ShapeKind};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
