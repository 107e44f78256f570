use serde::{Deserialize, Serialize};

use crate::core::{BarSpacing, ScaleOptions, ScaleOverride, Viewport};
use crate::interaction::PointerEventKind;
use crate::render::Color;

/// Maps linear animation progress in `0..=1` to eased progress.
pub type Easing = fn(f64) -> f64;

#[must_use]
pub fn linear_easing(progress: f64) -> f64 {
    progress
}

/// Value axis and category axis options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Pin the range minimum to zero while all values are non-negative.
    pub begin_at_zero: bool,
    /// Only allow whole-number step values.
    pub integers_only: bool,
    pub show_scale: bool,
    pub font_size: f64,
    /// Room reserved left of the first category for value labels.
    pub x_padding_left: f64,
    pub x_padding_right: f64,
    pub range_override: Option<ScaleOverride>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            integers_only: true,
            show_scale: true,
            font_size: 12.0,
            x_padding_left: 40.0,
            x_padding_right: 0.0,
            range_override: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show_grid_lines: bool,
    pub show_horizontal_lines: bool,
    pub show_vertical_lines: bool,
    pub grid_line_width: f64,
    pub grid_line_color: Color,
    pub line_width: f64,
    pub line_color: Color,
    pub text_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show_grid_lines: true,
            show_horizontal_lines: true,
            show_vertical_lines: true,
            grid_line_width: 1.0,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.05),
            line_width: 1.0,
            line_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            text_color: Color::from_rgb8(0x66, 0x66, 0x66, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyleConfig {
    pub show_stroke: bool,
    pub stroke_width: f64,
    /// Gap on each side of a category slice.
    pub value_spacing: f64,
    /// Gap between the bars of one category.
    pub dataset_spacing: f64,
}

impl Default for BarStyleConfig {
    fn default() -> Self {
        Self {
            show_stroke: true,
            stroke_width: 2.0,
            value_spacing: 5.0,
            dataset_spacing: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub enabled: bool,
    /// Pointer kinds that refresh hover highlight and tooltip content.
    pub events: Vec<PointerEventKind>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            events: vec![
                PointerEventKind::Move,
                PointerEventKind::TouchStart,
                PointerEventKind::TouchMove,
                PointerEventKind::Leave,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub steps: u32,
    #[serde(skip, default = "default_easing")]
    pub easing: Easing,
}

fn default_easing() -> Easing {
    linear_easing
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            steps: 60,
            easing: linear_easing,
        }
    }
}

/// Full chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    pub scale: ScaleConfig,
    pub grid: GridConfig,
    pub bars: BarStyleConfig,
    pub tooltips: TooltipConfig,
    pub animation: AnimationConfig,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scale: ScaleConfig::default(),
            grid: GridConfig::default(),
            bars: BarStyleConfig::default(),
            tooltips: TooltipConfig::default(),
            animation: AnimationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.scale.begin_at_zero = begin_at_zero;
        self
    }

    #[must_use]
    pub fn with_integers_only(mut self, integers_only: bool) -> Self {
        self.scale.integers_only = integers_only;
        self
    }

    #[must_use]
    pub fn with_scale_override(mut self, range_override: ScaleOverride) -> Self {
        self.scale.range_override = Some(range_override);
        self
    }

    #[must_use]
    pub fn with_x_padding(mut self, left: f64, right: f64) -> Self {
        self.scale.x_padding_left = left;
        self.scale.x_padding_right = right;
        self
    }

    #[must_use]
    pub fn with_show_scale(mut self, show_scale: bool) -> Self {
        self.scale.show_scale = show_scale;
        self
    }

    #[must_use]
    pub fn with_bar_spacing(mut self, value_spacing: f64, dataset_spacing: f64) -> Self {
        self.bars.value_spacing = value_spacing;
        self.bars.dataset_spacing = dataset_spacing;
        self
    }

    #[must_use]
    pub fn with_bar_stroke(mut self, show_stroke: bool, stroke_width: f64) -> Self {
        self.bars.show_stroke = show_stroke;
        self.bars.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_tooltips(mut self, enabled: bool) -> Self {
        self.tooltips.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_tooltip_events(mut self, events: Vec<PointerEventKind>) -> Self {
        self.tooltips.events = events;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, enabled: bool, steps: u32) -> Self {
        self.animation.enabled = enabled;
        self.animation.steps = steps;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation.easing = easing;
        self
    }

    #[must_use]
    pub fn bar_spacing(&self) -> BarSpacing {
        BarSpacing {
            value_spacing: self.bars.value_spacing,
            dataset_spacing: self.bars.dataset_spacing,
        }
    }

    /// Scale layout derived from the axis and bar options.
    ///
    /// A hidden scale insets the plot by the stroke width so bar outlines
    /// are not clipped at the surface edge.
    #[must_use]
    pub fn scale_options(&self) -> ScaleOptions {
        let padding = if self.scale.show_scale || !self.bars.show_stroke {
            0.0
        } else {
            self.bars.stroke_width
        };
        ScaleOptions {
            begin_at_zero: self.scale.begin_at_zero,
            integers_only: self.scale.integers_only,
            display: self.scale.show_scale,
            font_size: self.scale.font_size,
            padding,
            x_padding_left: self.scale.x_padding_left,
            x_padding_right: self.scale.x_padding_right,
            range_override: self.scale.range_override,
        }
    }
}
