use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ShapeError;

/// A circle, described by its radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Free-form label supplied by the caller (e.g., "circle").
    /// Carried through untouched; never consulted for dispatch.
    #[serde(default)]
    pub shape: String,
    /// Radius in arbitrary length units.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle labelled "circle".
    pub fn new(radius: f64) -> Self {
        Circle {
            shape: "circle".to_string(),
            radius,
        }
    }
}

/// An axis-aligned rectangle, described by its height and width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Free-form label supplied by the caller (e.g., "rectangle").
    #[serde(default)]
    pub shape: String,
    pub height: f64,
    pub width: f64,
}

impl Rectangle {
    /// Creates a rectangle labelled "rectangle".
    pub fn new(height: f64, width: f64) -> Self {
        Rectangle {
            shape: "rectangle".to_string(),
            height,
            width,
        }
    }
}

/// Either of the supported shapes.
///
/// On the wire a shape is a bare JSON object with no discriminant. The
/// variant is picked by which fields are present: anything carrying a
/// `radius` key is a circle, whatever its `shape` label says, and must then
/// parse as one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        if fields.contains_key("radius") {
            Circle::deserialize(Value::Object(fields))
                .map(Shape::Circle)
                .map_err(de::Error::custom)
        } else {
            Rectangle::deserialize(Value::Object(fields))
                .map(Shape::Rectangle)
                .map_err(de::Error::custom)
        }
    }
}

/// Which variant a [`Shape`] resolved to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "circle"),
            ShapeKind::Rectangle => write!(f, "rectangle"),
        }
    }
}

impl Shape {
    /// Parses a shape from a JSON object.
    pub fn from_json(bytes: &[u8]) -> Result<Shape, ShapeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// The caller-supplied label.
    pub fn label(&self) -> &str {
        match self {
            Shape::Circle(c) => &c.shape,
            Shape::Rectangle(r) => &r.shape,
        }
    }

    /// Named dimensions of this shape, in declaration order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            Shape::Circle(c) => vec![("radius", c.radius)],
            Shape::Rectangle(r) => vec![("height", r.height), ("width", r.width)],
        }
    }

    /// Checks that every dimension is finite and non-negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        crate::calculator::validation::validate_dimensions(&self.dimensions())
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}
