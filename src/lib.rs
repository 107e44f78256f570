//! bar-chart-rs: category bar chart engine.
//!
//! The crate computes a nice numeric value axis, lays grouped bars out over
//! a category axis, resolves pointer hits to bar slices and keeps a set of
//! active (highlighted) bars stable across data mutations. Drawing goes
//! through a backend-agnostic [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChart, BarChartConfig, BarChartData, DatasetInput};
pub use error::{ChartError, ChartResult};
