use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::shape::{Shape, ShapeKind};

/// Areas computed for a batch of shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaReport {
    /// Number of shapes in the batch.
    pub total_shapes: usize,
    /// Sum of every computed area.
    pub total_area: f64,
    /// Per-variant breakdown, keyed by kind name.
    pub by_kind: HashMap<String, KindSummary>,
    /// One entry per input shape, in input order.
    pub entries: Vec<AreaEntry>,
}

/// Aggregate figures for one shape variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KindSummary {
    pub count: usize,
    pub total_area: f64,
    /// Smallest area seen.
    pub min_area: f64,
    /// Largest area seen.
    pub max_area: f64,
}

/// A single shape and its area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaEntry {
    pub shape: Shape,
    pub kind: ShapeKind,
    pub area: f64,
}
