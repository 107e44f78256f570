use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::scale_range::{ScaleRange, calculate_scale_range};
use crate::core::types::Viewport;

/// Fixed value range that bypasses data-driven fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOverride {
    pub steps: u32,
    pub step_value: f64,
    pub start_value: f64,
}

impl ScaleOverride {
    #[must_use]
    pub fn range(self) -> ScaleRange {
        ScaleRange {
            steps: self.steps,
            step_value: self.step_value,
            min: self.start_value,
            max: self.start_value + f64::from(self.steps) * self.step_value,
        }
    }
}

/// Layout options consumed by [`CategoryScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub begin_at_zero: bool,
    pub integers_only: bool,
    /// Whether axis labels take up room above and below the plot.
    pub display: bool,
    pub font_size: f64,
    /// Vertical inset applied to both plot edges.
    pub padding: f64,
    pub x_padding_left: f64,
    pub x_padding_right: f64,
    pub range_override: Option<ScaleOverride>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            integers_only: true,
            display: true,
            font_size: 12.0,
            padding: 0.0,
            x_padding_left: 0.0,
            x_padding_right: 0.0,
            range_override: None,
        }
    }
}

/// Category x-axis paired with a linear value y-axis.
///
/// Categories split the inner width into equal slots and each category tick
/// sits at the center of its slot. Values map linearly between
/// `start_point` (top, range max) and `end_point` (bottom, range min).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScale {
    options: ScaleOptions,
    width: f64,
    height: f64,
    labels: Vec<String>,
    range: ScaleRange,
    start_point: f64,
    end_point: f64,
}

impl CategoryScale {
    /// Builds a scale and fits it to `values`.
    #[must_use]
    pub fn new(options: ScaleOptions, viewport: Viewport, labels: Vec<String>, values: &[f64]) -> Self {
        let mut scale = Self {
            options,
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
            labels,
            range: ScaleRange::UNIT,
            start_point: 0.0,
            end_point: f64::from(viewport.height),
        };
        scale.fit(values);
        scale
    }

    /// Recomputes vertical extents and the value range.
    pub fn fit(&mut self, values: &[f64]) {
        let (mut start_point, mut end_point) = if self.options.display {
            (
                self.options.font_size,
                self.height - self.options.font_size * 1.5 - 5.0,
            )
        } else {
            (0.0, self.height)
        };
        start_point += self.options.padding;
        end_point -= self.options.padding;
        self.start_point = start_point;
        self.end_point = end_point;

        self.range = match self.options.range_override {
            Some(range_override) => range_override.range(),
            None => calculate_scale_range(
                values,
                end_point - start_point,
                self.options.font_size,
                self.options.begin_at_zero,
                self.options.integers_only,
            ),
        };
        trace!(
            min = self.range.min,
            max = self.range.max,
            steps = self.range.steps,
            end_point = self.end_point,
            "fit category scale"
        );
    }

    /// Changes the surface size and refits against `values`.
    pub fn resize(&mut self, viewport: Viewport, values: &[f64]) {
        self.width = f64::from(viewport.width);
        self.height = f64::from(viewport.height);
        self.fit(values);
    }

    /// Appends a category at the tail. Takes effect on the next [`Self::fit`].
    pub fn add_x_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Removes the head category, if any.
    pub fn remove_x_label(&mut self) -> Option<String> {
        if self.labels.is_empty() {
            return None;
        }
        Some(self.labels.remove(0))
    }

    #[must_use]
    pub fn values_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn range(&self) -> ScaleRange {
        self.range
    }

    #[must_use]
    pub fn options(&self) -> ScaleOptions {
        self.options
    }

    /// Pixel y of the range maximum.
    #[must_use]
    pub fn start_point(&self) -> f64 {
        self.start_point
    }

    /// Baseline pixel y, where the range minimum sits.
    #[must_use]
    pub fn end_point(&self) -> f64 {
        self.end_point
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width of one category slot.
    #[must_use]
    pub fn value_width(&self) -> f64 {
        let inner_width = self.width - (self.options.x_padding_left + self.options.x_padding_right);
        inner_width / self.values_count().max(1) as f64
    }

    /// Pixel x of the center tick of category `index`.
    ///
    /// Indices past the last category extrapolate at the same spacing.
    #[must_use]
    pub fn calculate_x(&self, index: usize) -> f64 {
        let value_width = self.value_width();
        (value_width * index as f64 + self.options.x_padding_left + value_width / 2.0).round()
    }

    /// Pixel y of `value`.
    #[must_use]
    pub fn calculate_y(&self, value: f64) -> f64 {
        let span = self.range.span();
        if span == 0.0 {
            return self.end_point;
        }
        let scaling_factor = (self.end_point - self.start_point) / span;
        self.end_point - scaling_factor * (value - self.range.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(labels: &[&str], values: &[f64]) -> CategoryScale {
        CategoryScale::new(
            ScaleOptions::default(),
            Viewport::new(600, 300),
            labels.iter().map(|label| (*label).to_owned()).collect(),
            values,
        )
    }

    #[test]
    fn categories_split_width_evenly() {
        let scale = scale(&["a", "b", "c"], &[1.0, 2.0, 3.0]);
        assert_eq!(scale.calculate_x(0), 100.0);
        assert_eq!(scale.calculate_x(1), 300.0);
        assert_eq!(scale.calculate_x(2), 500.0);
    }

    #[test]
    fn baseline_matches_range_minimum() {
        let scale = scale(&["a", "b"], &[4.0, 8.0]);
        assert_eq!(scale.calculate_y(scale.range().min), scale.end_point());
        assert_eq!(scale.calculate_y(scale.range().max), scale.start_point());
    }

    #[test]
    fn override_bypasses_data_fitting() {
        let options = ScaleOptions {
            range_override: Some(ScaleOverride {
                steps: 4,
                step_value: 25.0,
                start_value: -50.0,
            }),
            ..ScaleOptions::default()
        };
        let scale = CategoryScale::new(options, Viewport::new(400, 300), vec!["a".to_owned()], &[1.0]);
        assert_eq!(scale.range().min, -50.0);
        assert_eq!(scale.range().max, 50.0);
        assert_eq!(scale.range().steps, 4);
    }

    #[test]
    fn hidden_scale_uses_full_height() {
        let options = ScaleOptions {
            display: false,
            padding: 2.0,
            ..ScaleOptions::default()
        };
        let scale = CategoryScale::new(options, Viewport::new(400, 300), Vec::new(), &[]);
        assert_eq!(scale.start_point(), 2.0);
        assert_eq!(scale.end_point(), 298.0);
    }

    #[test]
    fn label_queue_tracks_values_count() {
        let mut scale = scale(&["a", "b"], &[1.0]);
        scale.add_x_label("c");
        assert_eq!(scale.values_count(), 3);
        assert_eq!(scale.remove_x_label().as_deref(), Some("a"));
        assert_eq!(scale.labels(), ["b".to_owned(), "c".to_owned()]);
    }
}
