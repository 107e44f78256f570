use crate::core::{CategoryScale, step_decimal_places};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::GridConfig;

const Y_LABEL_GAP_PX: f64 = 10.0;

/// Appends grid lines, axis lines and tick labels for `scale`.
pub(super) fn append_axis_primitives(
    frame: &mut RenderFrame,
    scale: &CategoryScale,
    grid: GridConfig,
) {
    let options = scale.options();
    if !options.display {
        return;
    }

    let range = scale.range();
    let left = options.x_padding_left;
    let right = scale.width() - options.x_padding_right;
    let top = scale.start_point();
    let bottom = scale.end_point();
    let draw_grid = grid.show_grid_lines && grid.grid_line_width > 0.0;
    let precision = step_decimal_places(range.step_value);

    for (step, value) in range.tick_values().enumerate() {
        let y = scale.calculate_y(value);
        if step > 0 && draw_grid && grid.show_horizontal_lines {
            frame.push_line(LinePrimitive::new(
                left,
                y,
                right,
                y,
                grid.grid_line_width,
                grid.grid_line_color,
            ));
        }
        frame.push_text(TextPrimitive::new(
            format!("{value:.precision$}"),
            left - Y_LABEL_GAP_PX,
            y,
            options.font_size,
            grid.text_color,
            TextHAlign::Right,
        ));
    }

    let value_width = scale.value_width();
    if draw_grid && grid.show_vertical_lines {
        for index in 1..scale.values_count() {
            let x = left + value_width * index as f64;
            frame.push_line(LinePrimitive::new(
                x,
                top,
                x,
                bottom,
                grid.grid_line_width,
                grid.grid_line_color,
            ));
        }
    }

    if grid.line_width > 0.0 {
        frame.push_line(LinePrimitive::new(
            left,
            bottom,
            right,
            bottom,
            grid.line_width,
            grid.line_color,
        ));
        frame.push_line(LinePrimitive::new(
            left,
            top,
            left,
            bottom,
            grid.line_width,
            grid.line_color,
        ));
    }

    let label_y = bottom + 5.0 + options.font_size * 0.75;
    for (index, label) in scale.labels().iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        frame.push_text(TextPrimitive::new(
            label.clone(),
            scale.calculate_x(index),
            label_y,
            options.font_size,
            grid.text_color,
            TextHAlign::Center,
        ));
    }
}
