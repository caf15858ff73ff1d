//! Domain models for the shape area service.
//!
//! These types are shared across all modules: calculator, data, report, and service.

pub mod shape;
pub mod area;
pub mod report;
