use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_FILL_COLOR: Color = Color::rgba(220.0 / 255.0, 220.0 / 255.0, 220.0 / 255.0, 0.5);
pub const DEFAULT_STROKE_COLOR: Color =
    Color::rgba(220.0 / 255.0, 220.0 / 255.0, 220.0 / 255.0, 0.8);

/// One input series. Missing colors fall back to the defaults, missing
/// highlight colors to the base colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetInput {
    pub label: Option<String>,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub highlight_fill: Option<Color>,
    pub highlight_stroke: Option<Color>,
    pub data: Vec<f64>,
}

impl DatasetInput {
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, fill_color: Color, stroke_color: Color) -> Self {
        self.fill_color = Some(fill_color);
        self.stroke_color = Some(stroke_color);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight_fill: Color, highlight_stroke: Color) -> Self {
        self.highlight_fill = Some(highlight_fill);
        self.highlight_stroke = Some(highlight_stroke);
        self
    }

    #[must_use]
    pub fn resolved_fill(&self) -> Color {
        self.fill_color.unwrap_or(DEFAULT_FILL_COLOR)
    }

    #[must_use]
    pub fn resolved_stroke(&self) -> Color {
        self.stroke_color.unwrap_or(DEFAULT_STROKE_COLOR)
    }

    #[must_use]
    pub fn resolved_highlight_fill(&self) -> Color {
        self.highlight_fill.unwrap_or_else(|| self.resolved_fill())
    }

    #[must_use]
    pub fn resolved_highlight_stroke(&self) -> Color {
        self.highlight_stroke
            .unwrap_or_else(|| self.resolved_stroke())
    }
}

/// Chart input: category labels plus one value per category per dataset.
///
/// Datasets may be shorter or longer than `labels`; bars without a label
/// get an empty one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetInput>,
}

impl BarChartData {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: DatasetInput) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))
    }

    pub(super) fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
    }
}
