mod animation;
mod axis_render_frame_builder;
mod chart;
mod chart_init;
mod chart_snapshot;
mod config;
mod data;
mod data_controller;
mod interaction_controller;
mod layout_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod render_frame_builder;
mod snapshot_controller;
mod validation;

pub use animation::AnimationFrames;
pub use chart::BarChart;
pub use chart_snapshot::{
    BarStateSnapshot, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use config::{
    AnimationConfig, BarChartConfig, BarStyleConfig, Easing, GridConfig, ScaleConfig,
    TooltipConfig, linear_easing,
};
pub use data::{BarChartData, DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR, DatasetInput};

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent, TooltipEntry};
