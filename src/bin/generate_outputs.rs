//! CLI tool to generate sample shape data and an area report.
//!
//! Produces:
//! - `output/sample_shapes.json` — 100 generated shapes
//! - `output/area_report.json` — Areas for every sample shape, grouped by kind

use log::info;
use shape_area::calculator::calculate_shape_area;
use shape_area::data::{get_sample_shapes, reference_scenarios};
use shape_area::report::generate_report;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Generate sample shapes
    let shapes = get_sample_shapes();
    let shapes_json = serde_json::to_string_pretty(&shapes)?;
    std::fs::create_dir_all("output")?;
    std::fs::write("output/sample_shapes.json", &shapes_json)?;
    info!("Wrote output/sample_shapes.json ({} shapes)", shapes.len());

    // Generate area report
    let report = generate_report(&shapes);
    let report_json = serde_json::to_string_pretty(&report)?;
    std::fs::write("output/area_report.json", &report_json)?;
    info!("Wrote output/area_report.json");

    // Print summary
    println!();
    println!("=== AREA REPORT SUMMARY ===");
    println!("Total Shapes: {}", report.total_shapes);
    println!("Total Area:   {:.2}", report.total_area);
    println!();
    println!("--- By Kind ---");
    let mut kinds: Vec<_> = report.by_kind.iter().collect();
    kinds.sort_by(|a, b| a.0.cmp(b.0));
    for (kind, summary) in kinds {
        println!("  {}: {} shapes, total {:.2}, min {:.2}, max {:.2}",
            kind, summary.count, summary.total_area, summary.min_area, summary.max_area);
    }
    println!();
    println!("--- Reference Scenarios ---");
    for (shape, expected) in reference_scenarios() {
        println!("  {} labelled {:?}: {:.10} (expected {:.10})",
            shape.kind(), shape.label(), calculate_shape_area(&shape), expected);
    }

    Ok(())
}
