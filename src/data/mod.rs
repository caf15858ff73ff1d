//! Sample shape data.
//!
//! Two sources: a fixed list of reference scenarios with known areas, and a
//! larger generated batch. Generation uses a seeded RNG so the batch is the
//! same on every run.
//!
//! # Generated Distribution
//! - ~60% circles, ~40% rectangles
//! - Dimensions in 0.0–100.0, rounded to 2 decimal places
//! - Roughly 1 in 20 shapes carries a label that disagrees with its fields

use crate::models::shape::{Circle, Rectangle, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Data seed for reproducible generation.
const DATA_SEED: u64 = 42;

/// Upper bound for generated dimensions.
const MAX_DIMENSION: f64 = 100.0;

/// Size of the default generated batch.
const DEFAULT_BATCH: usize = 100;

/// Reference shapes paired with their expected area.
pub fn reference_scenarios() -> Vec<(Shape, f64)> {
    use std::f64::consts::PI;
    vec![
        (Circle::new(1.0).into(), PI),
        (Circle::new(0.0).into(), 0.0),
        (Rectangle::new(3.0, 4.0).into(), 12.0),
        (Rectangle::new(0.0, 5.0).into(), 0.0),
        (Circle::new(2.5).into(), PI * 6.25),
        (
            Shape::Circle(Circle {
                shape: "rectangle".to_string(),
                radius: 2.0,
            }),
            PI * 4.0,
        ),
    ]
}

/// Generate a batch of shapes with a fixed distribution.
pub fn generate_shapes(count: usize) -> Vec<Shape> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    let mut shapes = Vec::with_capacity(count);

    for _ in 0..count {
        let mislabelled = rng.gen_bool(0.05);
        let shape = if rng.gen_bool(0.6) {
            Shape::Circle(Circle {
                shape: label("circle", mislabelled),
                radius: generate_dimension(&mut rng),
            })
        } else {
            Shape::Rectangle(Rectangle {
                shape: label("rectangle", mislabelled),
                height: generate_dimension(&mut rng),
                width: generate_dimension(&mut rng),
            })
        };
        shapes.push(shape);
    }

    shapes
}

/// Get the standard generated batch of 100 shapes.
pub fn get_sample_shapes() -> Vec<Shape> {
    generate_shapes(DEFAULT_BATCH)
}

fn label(kind: &str, mislabelled: bool) -> String {
    match (kind, mislabelled) {
        ("circle", true) => "rectangle".to_string(),
        ("rectangle", true) => "circle".to_string(),
        _ => kind.to_string(),
    }
}

fn generate_dimension(rng: &mut StdRng) -> f64 {
    round_to_hundredths(rng.gen_range(0.0..MAX_DIMENSION))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
