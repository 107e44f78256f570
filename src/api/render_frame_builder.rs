use crate::core::Bar;
use crate::render::{RectPrimitive, RenderFrame, Renderer};

use super::BarChart;
use super::axis_render_frame_builder::append_axis_primitives;

impl<R: Renderer> BarChart<R> {
    /// Materializes the current state into a frame: axes first, then bars in
    /// dataset-major order.
    pub(super) fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        append_axis_primitives(&mut frame, &self.scale, self.config.grid);
        for bar in self.bars() {
            frame.push_bar(bar_primitive(bar));
        }
        frame
    }
}

/// Rectangle for `bar`, inset by half the stroke on the sides and on the
/// value edge so the outline stays inside the bar's footprint.
pub(super) fn bar_primitive(bar: &Bar) -> RectPrimitive {
    let half_width = bar.width / 2.0;
    let mut left = bar.x - half_width;
    let mut right = bar.x + half_width;
    let (mut top, mut bottom) = bar.vertical_extent();

    let stroked = bar.show_stroke && bar.stroke_width > 0.0;
    if stroked {
        let half_stroke = bar.stroke_width / 2.0;
        left += half_stroke;
        right -= half_stroke;
        if bar.y <= bar.base {
            top += half_stroke;
        } else {
            bottom -= half_stroke;
        }
    }

    let rect = RectPrimitive::new(
        left,
        top.min(bottom),
        (right - left).max(0.0),
        (bottom - top).max(0.0),
        bar.fill_color,
    );
    if stroked {
        rect.with_border(bar.stroke_width, bar.stroke_color)
    } else {
        rect
    }
}
