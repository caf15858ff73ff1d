/// Area report generation.
///
/// Runs a batch of shapes through the calculator and summarises the results
/// per shape kind.

use crate::calculator::calculate_shape_area;
use crate::models::report::{AreaEntry, AreaReport, KindSummary};
use crate::models::shape::Shape;
use std::collections::HashMap;

/// Compute every area in the batch and build the report.
pub fn generate_report(shapes: &[Shape]) -> AreaReport {
    let entries: Vec<AreaEntry> = shapes
        .iter()
        .map(|shape| AreaEntry {
            shape: shape.clone(),
            kind: shape.kind(),
            area: calculate_shape_area(shape),
        })
        .collect();

    let mut by_kind: HashMap<String, KindSummary> = HashMap::new();
    for entry in &entries {
        let summary = by_kind
            .entry(entry.kind.to_string())
            .or_insert(KindSummary {
                count: 0,
                total_area: 0.0,
                min_area: entry.area,
                max_area: entry.area,
            });
        summary.count += 1;
        summary.total_area += entry.area;
        summary.min_area = summary.min_area.min(entry.area);
        summary.max_area = summary.max_area.max(entry.area);
    }

    AreaReport {
        total_shapes: entries.len(),
        total_area: entries.iter().map(|e| e.area).sum(),
        by_kind,
        entries,
    }
}
