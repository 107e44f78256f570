//! Observer hooks for collaborators outside the chart core, such as tooltip
//! overlays.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent, TooltipEntry};
