use serde::{Deserialize, Serialize};

use crate::core::{ScaleRange, Viewport};
use crate::render::Color;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub range: ScaleRange,
    pub datasets_len: usize,
    pub categories_len: usize,
    pub active_len: usize,
}

/// One line of tooltip content for a hovered bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub dataset_index: usize,
    pub bar_index: usize,
    pub label: String,
    pub dataset_label: Option<String>,
    pub value: f64,
    pub fill_color: Color,
    /// Anchor point at the top center of the bar.
    pub x: f64,
    pub y: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataUpdated { datasets: usize, categories: usize },
    ActiveBarsChanged { active: usize },
    /// Empty `entries` means the tooltip should be hidden.
    TooltipShown { entries: Vec<TooltipEntry> },
    Resized { width: u32, height: u32 },
    Rendered { progress: f64 },
}

/// Extension hook interface for tooltip renderers, legends and other
/// observers.
///
/// Plugins see events and read-only context; they never mutate the chart.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
