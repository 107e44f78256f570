use tracing::{debug, trace, warn};

use crate::core::{Bar, BarFrame, BarLayout, BarSeed};
use crate::error::{ChartError, ChartResult};
use crate::interaction::apply_highlight;
use crate::render::Renderer;

use super::validation::validate_values;
use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    /// Refits the scale, re-baselines every bar and redraws the first frame
    /// of the transition to the new layout.
    ///
    /// Hover highlight is cleared, stale active bars are pruned and the
    /// remaining active bars are highlighted again on top of the fresh
    /// snapshot.
    pub fn update(&mut self) -> ChartResult<()> {
        let values = self.all_values();
        self.scale.fit(&values);
        self.prune_active_bars();
        self.interaction.clear_hovered();

        for dataset in &mut self.datasets {
            for (index, bar) in dataset.bars.iter_mut().enumerate() {
                bar.restore_style();
                bar.index = index;
                bar.save();
            }
        }
        apply_highlight(&mut self.datasets, &self.active, &[]);

        debug!(
            datasets = self.datasets.len(),
            categories = self.scale.values_count(),
            min = self.scale.range().min,
            max = self.scale.range().max,
            "update bar chart"
        );
        self.emit_plugin_event(PluginEvent::DataUpdated {
            datasets: self.datasets.len(),
            categories: self.scale.values_count(),
        });

        let progress = self.first_frame_progress();
        self.draw(progress)
    }

    /// Appends one category holding `values[i]` for dataset `i`.
    ///
    /// New bars start on the baseline just right of the current last
    /// category and animate into place.
    pub fn add_data(&mut self, values: &[f64], label: impl Into<String>) -> ChartResult<()> {
        if values.len() != self.datasets.len() {
            return Err(ChartError::InvalidData(format!(
                "add_data expects one value per dataset: got {} values for {} datasets",
                values.len(),
                self.datasets.len()
            )));
        }
        validate_values(values)?;

        let label = label.into();
        let dataset_count = self.datasets.len();
        let tail_index = self.scale.values_count();
        let base = self.scale.end_point();
        let bar_style = self.config.bars;
        let layout = BarLayout::new(&self.scale, self.config.bar_spacing());
        let frame_width = layout.bar_width(dataset_count);

        for (dataset_index, (dataset, &value)) in
            self.datasets.iter_mut().zip(values).enumerate()
        {
            let seed = BarSeed {
                key: Self::allocate_key(&mut self.next_key),
                index: dataset.bars.len(),
                value,
                label: label.clone(),
                dataset_label: dataset.label.clone(),
                fill_color: dataset.fill_color,
                stroke_color: dataset.stroke_color,
                highlight_fill: dataset.highlight_fill,
                highlight_stroke: dataset.highlight_stroke,
                stroke_width: bar_style.stroke_width,
                show_stroke: bar_style.show_stroke,
            };
            let frame = BarFrame {
                x: layout.bar_x(dataset_count, dataset_index, tail_index),
                y: base,
                width: frame_width,
            };
            dataset.bars.push(Bar::new(seed, frame, base));
        }

        trace!(label = %label, tail_index, "add data column");
        self.scale.add_x_label(label);
        self.update()
    }

    /// Drops the head category from the scale and from every dataset.
    ///
    /// A chart with no categories and no bars is left untouched.
    pub fn remove_data(&mut self) -> ChartResult<()> {
        if self.scale.values_count() == 0 && self.datasets.iter().all(|dataset| dataset.is_empty())
        {
            warn!("remove_data called on an empty chart; ignoring");
            return Ok(());
        }

        let removed_label = self.scale.remove_x_label();
        for dataset in &mut self.datasets {
            if !dataset.bars.is_empty() {
                dataset.bars.remove(0);
            }
        }

        trace!(label = ?removed_label, "remove data column");
        self.update()
    }

    /// Removes active bars that no longer exist in any dataset.
    pub(super) fn prune_active_bars(&mut self) {
        let existing = self.existing_keys();
        let dropped = self.active.retain_existing(&existing);
        if dropped > 0 {
            debug!(dropped, remaining = self.active.len(), "prune stale active bars");
            self.emit_plugin_event(PluginEvent::ActiveBarsChanged {
                active: self.active.len(),
            });
        }
    }
}
