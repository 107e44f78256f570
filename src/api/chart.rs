use std::collections::HashSet;

use crate::core::{Bar, BarKey, CategoryScale, Dataset, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::{ActiveBars, BarRef, BarSlice, InteractionState};
use crate::render::Renderer;

use super::BarChartConfig;

/// Grouped bar chart bound to a drawing surface.
///
/// `BarChart` owns the datasets, the category scale, the active (highlighted)
/// bar set and the renderer. Every operation runs synchronously; animation is
/// driven by the host calling [`BarChart::draw`] once per frame.
pub struct BarChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) viewport: Viewport,
    pub(super) scale: CategoryScale,
    pub(super) datasets: Vec<Dataset>,
    pub(super) active: ActiveBars,
    pub(super) interaction: InteractionState,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) next_key: u64,
}

impl<R: Renderer> BarChart<R> {
    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale(&self) -> &CategoryScale {
        &self.scale
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.scale.labels()
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn dataset(&self, index: usize) -> ChartResult<&Dataset> {
        self.datasets
            .get(index)
            .ok_or(ChartError::DatasetOutOfRange {
                index,
                count: self.datasets.len(),
            })
    }

    #[must_use]
    pub fn bar(&self, dataset_index: usize, bar_index: usize) -> Option<&Bar> {
        self.datasets.get(dataset_index)?.bars.get(bar_index)
    }

    /// Looks a reference up again; `None` once the bar has been removed.
    #[must_use]
    pub fn resolve(&self, bar_ref: BarRef) -> Option<&Bar> {
        self.bar(bar_ref.dataset_index, bar_ref.bar_index)
            .filter(|bar| bar.key == bar_ref.key)
            .or_else(|| {
                let found = self.bar_ref_for_key(bar_ref.key)?;
                self.bar(found.dataset_index, found.bar_index)
            })
    }

    /// Currently active bars, in activation order.
    #[must_use]
    pub fn active_bars(&self) -> Vec<BarRef> {
        self.active
            .iter()
            .filter_map(|key| self.bar_ref_for_key(key))
            .collect()
    }

    #[must_use]
    pub fn is_active(&self, key: BarKey) -> bool {
        self.active.contains(key)
    }

    /// Whether the bar is painted in its highlight colors, either because it
    /// is active or because the pointer is over it.
    #[must_use]
    pub fn is_highlighted(&self, key: BarKey) -> bool {
        self.active.contains(key) || self.interaction.hovered().iter().any(|entry| entry.key == key)
    }

    /// Bars under the pointer as of the last pointer event.
    #[must_use]
    pub fn hovered_bars(&self) -> &BarSlice {
        self.interaction.hovered()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn all_values(&self) -> Vec<f64> {
        self.bars().map(|bar| bar.value).collect()
    }

    pub(super) fn bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.datasets.iter().flat_map(|dataset| dataset.bars.iter())
    }

    pub(super) fn bars_mut(&mut self) -> impl Iterator<Item = &mut Bar> + '_ {
        self.datasets
            .iter_mut()
            .flat_map(|dataset| dataset.bars.iter_mut())
    }

    pub(super) fn existing_keys(&self) -> HashSet<BarKey> {
        self.bars().map(|bar| bar.key).collect()
    }

    pub(super) fn bar_ref_for_key(&self, key: BarKey) -> Option<BarRef> {
        self.datasets
            .iter()
            .enumerate()
            .find_map(|(dataset_index, dataset)| {
                dataset
                    .bars
                    .iter()
                    .position(|bar| bar.key == key)
                    .map(|bar_index| BarRef {
                        dataset_index,
                        bar_index,
                        key,
                    })
            })
    }

    pub(super) fn allocate_key(next_key: &mut u64) -> BarKey {
        let key = BarKey(*next_key);
        *next_key += 1;
        key
    }
}
