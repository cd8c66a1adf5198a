//! Chart Panel
//!
//! Canvas charts for the dashboard's aggregate series, split into pure
//! model builders (payload to [`model::ChartModel`]), canvas painters, a
//! slot registry, and the panel component that wires them together.

pub mod draw;
pub mod model;
pub mod panel;
pub mod registry;

pub use panel::ChartPanel;
