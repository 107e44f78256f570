use tracing::debug;

use crate::core::{Bar, BarFrame, BarLayout, BarSeed, CategoryScale, Dataset};
use crate::error::ChartResult;
use crate::interaction::{ActiveBars, InteractionState};
use crate::render::Renderer;

use super::validation::{validate_config, validate_values};
use super::{BarChart, BarChartConfig, BarChartData};

impl<R: Renderer> BarChart<R> {
    /// Builds datasets, bars and the scale from `data`.
    ///
    /// Every bar starts collapsed on the baseline at its final x and width,
    /// so the first animated draw grows bars upward. Nothing is drawn yet.
    pub fn new(renderer: R, data: BarChartData, config: BarChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        let values: Vec<f64> = data.values().collect();
        validate_values(&values)?;

        let scale = CategoryScale::new(
            config.scale_options(),
            config.viewport,
            data.labels.clone(),
            &values,
        );
        let layout = BarLayout::new(&scale, config.bar_spacing());
        let base = scale.end_point();
        let dataset_count = data.datasets.len();
        let mut next_key = 0_u64;

        let datasets = data
            .datasets
            .iter()
            .enumerate()
            .map(|(dataset_index, input)| {
                let bars = input
                    .data
                    .iter()
                    .enumerate()
                    .map(|(index, &value)| {
                        let seed = BarSeed {
                            key: Self::allocate_key(&mut next_key),
                            index,
                            value,
                            label: data.labels.get(index).cloned().unwrap_or_default(),
                            dataset_label: input.label.clone(),
                            fill_color: input.resolved_fill(),
                            stroke_color: input.resolved_stroke(),
                            highlight_fill: input.resolved_highlight_fill(),
                            highlight_stroke: input.resolved_highlight_stroke(),
                            stroke_width: config.bars.stroke_width,
                            show_stroke: config.bars.show_stroke,
                        };
                        let frame = BarFrame {
                            x: layout.bar_x(dataset_count, dataset_index, index),
                            y: base,
                            width: layout.bar_width(dataset_count),
                        };
                        Bar::new(seed, frame, base)
                    })
                    .collect();
                Dataset {
                    label: input.label.clone(),
                    fill_color: input.resolved_fill(),
                    stroke_color: input.resolved_stroke(),
                    highlight_fill: input.resolved_highlight_fill(),
                    highlight_stroke: input.resolved_highlight_stroke(),
                    bars,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            datasets = datasets.len(),
            categories = scale.values_count(),
            bars = values.len(),
            "construct bar chart"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            config,
            scale,
            datasets,
            active: ActiveBars::default(),
            interaction: InteractionState::default(),
            plugins: Vec::new(),
            next_key,
        })
    }
}
