use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::BarChartConfig;

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_config(config: &BarChartConfig) -> ChartResult<()> {
    validate_viewport(config.viewport)?;

    for (name, value) in [
        ("scale font size", config.scale.font_size),
        ("scale x padding left", config.scale.x_padding_left),
        ("scale x padding right", config.scale.x_padding_right),
        ("bar stroke width", config.bars.stroke_width),
        ("bar value spacing", config.bars.value_spacing),
        ("bar dataset spacing", config.bars.dataset_spacing),
        ("grid line width", config.grid.grid_line_width),
        ("axis line width", config.grid.line_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    if config.scale.font_size == 0.0 {
        return Err(ChartError::InvalidData(
            "scale font size must be > 0".to_owned(),
        ));
    }

    if let Some(range_override) = config.scale.range_override {
        if range_override.steps == 0 {
            return Err(ChartError::InvalidData(
                "scale override steps must be > 0".to_owned(),
            ));
        }
        if !range_override.step_value.is_finite() || range_override.step_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale override step value must be finite and > 0".to_owned(),
            ));
        }
        if !range_override.start_value.is_finite() {
            return Err(ChartError::InvalidData(
                "scale override start value must be finite".to_owned(),
            ));
        }
    }

    if config.animation.enabled && config.animation.steps == 0 {
        return Err(ChartError::InvalidData(
            "animation steps must be > 0 when animation is enabled".to_owned(),
        ));
    }

    for color in [
        config.grid.grid_line_color,
        config.grid.line_color,
        config.grid.text_color,
    ] {
        color.validate()?;
    }

    Ok(())
}

pub(super) fn validate_values(values: &[f64]) -> ChartResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "bar values must be finite".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_progress(progress: f64) -> ChartResult<f64> {
    if !progress.is_finite() {
        return Err(ChartError::InvalidData(
            "animation progress must be finite".to_owned(),
        ));
    }
    Ok(progress)
}
