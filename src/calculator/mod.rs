/// Shape area calculation.
///
/// `calculate_shape_area` is the permissive core: it does arithmetic on
/// whatever dimensions it is given. `try_calculate_shape_area` validates
/// the dimensions first and reports bad geometry as a typed error.

pub mod validation;

use std::f64::consts::PI;

use log::debug;

use crate::error::ShapeError;
use crate::models::shape::Shape;

/// Compute the area of a shape.
///
/// Circles use π·r², rectangles use height·width. No rounding is applied and
/// no dimension is checked: NaN propagates, a negative radius still squares
/// to a positive area, and a negative side gives a negative area.
pub fn calculate_shape_area(shape: &Shape) -> f64 {
    let area = match shape {
        Shape::Circle(circle) => PI * circle.radius * circle.radius,
        Shape::Rectangle(rect) => rect.height * rect.width,
    };
    debug!("{} area = {}", shape.kind(), area);
    area
}

/// Compute the area of a shape after checking every dimension is finite and
/// non-negative.
pub fn try_calculate_shape_area(shape: &Shape) -> Result<f64, ShapeError> {
    shape.validate()?;
    Ok(calculate_shape_area(shape))
}
