use serde::{Deserialize, Serialize};

use crate::core::bar_geometry::BarFrame;
use crate::render::Color;

/// Stable identity of a bar, unaffected by index shifts when columns are
/// added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarKey(pub u64);

/// Saved baseline style a highlight can be reverted to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSnapshot {
    pub fill_color: Color,
    pub stroke_color: Color,
}

/// One drawable bar.
///
/// `x` is the horizontal center, `y` the value edge and `base` the baseline
/// edge; the drawn rectangle spans `x ± width / 2` between `y` and `base`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub key: BarKey,
    pub index: usize,
    pub value: f64,
    pub label: String,
    pub dataset_label: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub base: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub highlight_fill: Color,
    pub highlight_stroke: Color,
    pub stroke_width: f64,
    pub show_stroke: bool,
    saved_style: StyleSnapshot,
    saved_frame: BarFrame,
}

/// Everything needed to create a [`Bar`]; geometry starts collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeed {
    pub key: BarKey,
    pub index: usize,
    pub value: f64,
    pub label: String,
    pub dataset_label: Option<String>,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub highlight_fill: Color,
    pub highlight_stroke: Color,
    pub stroke_width: f64,
    pub show_stroke: bool,
}

impl Bar {
    #[must_use]
    pub fn new(seed: BarSeed, frame: BarFrame, base: f64) -> Self {
        let saved_style = StyleSnapshot {
            fill_color: seed.fill_color,
            stroke_color: seed.stroke_color,
        };
        Self {
            key: seed.key,
            index: seed.index,
            value: seed.value,
            label: seed.label,
            dataset_label: seed.dataset_label,
            x: frame.x,
            y: frame.y,
            width: frame.width,
            base,
            fill_color: seed.fill_color,
            stroke_color: seed.stroke_color,
            highlight_fill: seed.highlight_fill,
            highlight_stroke: seed.highlight_stroke,
            stroke_width: seed.stroke_width,
            show_stroke: seed.show_stroke,
            saved_style,
            saved_frame: frame,
        }
    }

    #[must_use]
    pub fn frame(&self) -> BarFrame {
        BarFrame {
            x: self.x,
            y: self.y,
            width: self.width,
        }
    }

    #[must_use]
    pub fn saved_style(&self) -> StyleSnapshot {
        self.saved_style
    }

    /// Frame the next transition starts from.
    #[must_use]
    pub fn saved_frame(&self) -> BarFrame {
        self.saved_frame
    }

    /// Records the current style and frame as the new baseline.
    pub fn save(&mut self) {
        self.saved_style = StyleSnapshot {
            fill_color: self.fill_color,
            stroke_color: self.stroke_color,
        };
        self.saved_frame = self.frame();
    }

    /// Reverts fill and stroke to the last saved style.
    pub fn restore_style(&mut self) {
        self.fill_color = self.saved_style.fill_color;
        self.stroke_color = self.saved_style.stroke_color;
    }

    /// Restores the saved style, then paints the highlight colors over it.
    pub fn highlight(&mut self) {
        self.restore_style();
        self.fill_color = self.highlight_fill;
        self.stroke_color = self.highlight_stroke;
    }

    /// Moves geometry `progress` of the way from the saved frame to `target`.
    ///
    /// Progress 0 keeps the saved frame and 1 lands on `target`; values
    /// outside `0..=1` extrapolate.
    pub fn transition(&mut self, target: BarFrame, progress: f64) {
        let frame = self.saved_frame.lerp(target, progress);
        self.x = frame.x;
        self.y = frame.y;
        self.width = frame.width;
    }

    /// Vertical extent as `(top, bottom)` regardless of value sign.
    #[must_use]
    pub fn vertical_extent(&self) -> (f64, f64) {
        (self.y.min(self.base), self.y.max(self.base))
    }

    #[must_use]
    pub fn in_range(&self, chart_x: f64, chart_y: f64) -> bool {
        let half_width = self.width / 2.0;
        let (top, bottom) = self.vertical_extent();
        chart_x >= self.x - half_width
            && chart_x <= self.x + half_width
            && chart_y >= top
            && chart_y <= bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const DARK_RED: Color = Color::rgb(0.5, 0.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    const DARK_BLUE: Color = Color::rgb(0.0, 0.0, 0.5);

    fn bar() -> Bar {
        Bar::new(
            BarSeed {
                key: BarKey(1),
                index: 0,
                value: 10.0,
                label: "a".to_owned(),
                dataset_label: None,
                fill_color: RED,
                stroke_color: DARK_RED,
                highlight_fill: BLUE,
                highlight_stroke: DARK_BLUE,
                stroke_width: 2.0,
                show_stroke: true,
            },
            BarFrame { x: 50.0, y: 100.0, width: 20.0 },
            200.0,
        )
    }

    #[test]
    fn highlight_then_restore_returns_saved_style() {
        let mut bar = bar();
        bar.highlight();
        assert_eq!(bar.fill_color, BLUE);
        assert_eq!(bar.stroke_color, DARK_BLUE);
        bar.restore_style();
        assert_eq!(bar.fill_color, RED);
        assert_eq!(bar.stroke_color, DARK_RED);
        bar.restore_style();
        assert_eq!(bar.fill_color, RED);
    }

    #[test]
    fn in_range_covers_rectangle_edges() {
        let bar = bar();
        assert!(bar.in_range(40.0, 100.0));
        assert!(bar.in_range(60.0, 200.0));
        assert!(!bar.in_range(61.0, 150.0));
        assert!(!bar.in_range(50.0, 99.0));
    }

    #[test]
    fn in_range_handles_bars_below_baseline() {
        let mut bar = bar();
        bar.y = 260.0;
        assert!(bar.in_range(50.0, 230.0));
        assert!(!bar.in_range(50.0, 150.0));
    }

    #[test]
    fn transition_interpolates_from_saved_frame() {
        let mut bar = bar();
        let target = BarFrame { x: 50.0, y: 0.0, width: 20.0 };
        bar.transition(target, 0.5);
        assert_eq!(bar.y, 50.0);
        bar.transition(target, 0.5);
        assert_eq!(bar.y, 50.0);
        bar.transition(target, 1.0);
        assert_eq!(bar.y, 0.0);
    }
}
