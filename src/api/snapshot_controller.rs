use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarChart, BarStateSnapshot, ChartSnapshot};

impl<R: Renderer> BarChart<R> {
    /// Captures the current geometry, colors and active flags.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let bars = self
            .datasets
            .iter()
            .enumerate()
            .flat_map(|(dataset_index, dataset)| {
                dataset
                    .bars
                    .iter()
                    .enumerate()
                    .map(move |(bar_index, bar)| (dataset_index, bar_index, bar))
            })
            .map(|(dataset_index, bar_index, bar)| BarStateSnapshot {
                dataset_index,
                bar_index,
                key: bar.key,
                value: bar.value,
                label: bar.label.clone(),
                x: bar.x,
                y: bar.y,
                width: bar.width,
                base: bar.base,
                fill_color: bar.fill_color,
                stroke_color: bar.stroke_color,
                active: self.active.contains(bar.key),
            })
            .collect();

        ChartSnapshot {
            viewport: self.viewport,
            range: self.scale.range(),
            start_point: self.scale.start_point(),
            end_point: self.scale.end_point(),
            labels: self.scale.labels().to_vec(),
            bars,
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression
    /// checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
