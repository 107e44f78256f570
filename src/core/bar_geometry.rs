use serde::{Deserialize, Serialize};

use crate::core::CategoryScale;

/// Horizontal gaps between bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    /// Gap kept on each side of a category slice.
    pub value_spacing: f64,
    /// Gap between neighbouring bars of one category.
    pub dataset_spacing: f64,
}

impl Default for BarSpacing {
    fn default() -> Self {
        Self {
            value_spacing: 5.0,
            dataset_spacing: 1.0,
        }
    }
}

/// Horizontal placement and size of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarFrame {
    /// Horizontal center.
    pub x: f64,
    /// Top edge for positive values.
    pub y: f64,
    pub width: f64,
}

impl BarFrame {
    #[must_use]
    pub fn lerp(self, target: Self, progress: f64) -> Self {
        Self {
            x: self.x + (target.x - self.x) * progress,
            y: self.y + (target.y - self.y) * progress,
            width: self.width + (target.width - self.width) * progress,
        }
    }
}

/// Grouped-bar layout over a [`CategoryScale`].
///
/// Within each category slice the bars of all datasets sit left-to-right in
/// dataset order, `dataset_spacing` apart, centered on the category tick.
#[derive(Debug, Clone, Copy)]
pub struct BarLayout<'a> {
    scale: &'a CategoryScale,
    spacing: BarSpacing,
}

impl<'a> BarLayout<'a> {
    #[must_use]
    pub fn new(scale: &'a CategoryScale, spacing: BarSpacing) -> Self {
        Self { scale, spacing }
    }

    /// Width shared by all bars of one category slice.
    #[must_use]
    pub fn base_width(&self) -> f64 {
        (self.scale.calculate_x(1) - self.scale.calculate_x(0)) - 2.0 * self.spacing.value_spacing
    }

    #[must_use]
    pub fn bar_width(&self, dataset_count: usize) -> f64 {
        let dataset_count = dataset_count.max(1) as f64;
        let base_width = self.base_width() - (dataset_count - 1.0) * self.spacing.dataset_spacing;
        base_width / dataset_count
    }

    /// Horizontal center of the bar for `dataset_index` in category `bar_index`.
    #[must_use]
    pub fn bar_x(&self, dataset_count: usize, dataset_index: usize, bar_index: usize) -> f64 {
        let slice_left = self.scale.calculate_x(bar_index) - self.base_width() / 2.0;
        let bar_width = self.bar_width(dataset_count);
        let offset = dataset_index as f64;
        slice_left + bar_width * offset + offset * self.spacing.dataset_spacing + bar_width / 2.0
    }

    /// Fully settled frame for a bar holding `value`.
    #[must_use]
    pub fn target(
        &self,
        dataset_count: usize,
        dataset_index: usize,
        bar_index: usize,
        value: f64,
    ) -> BarFrame {
        BarFrame {
            x: self.bar_x(dataset_count, dataset_index, bar_index),
            y: self.scale.calculate_y(value),
            width: self.bar_width(dataset_count),
        }
    }
}
