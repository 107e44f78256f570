use serde::{Deserialize, Serialize};

/// Numeric value range of the vertical axis, split into equal steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub steps: u32,
    pub step_value: f64,
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    /// Range used when there is nothing to fit.
    pub const UNIT: Self = Self {
        steps: 1,
        step_value: 1.0,
        min: 0.0,
        max: 1.0,
    };

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Tick values from `min` to `max`, one per step boundary.
    pub fn tick_values(self) -> impl Iterator<Item = f64> {
        (0..=self.steps).map(move |step| self.min + f64::from(step) * self.step_value)
    }
}

const MIN_STEPS: u32 = 2;

#[must_use]
pub fn order_of_magnitude(value: f64) -> i32 {
    value.log10().floor() as i32
}

/// Computes a "nice" value range for `values` that fits `drawing_height`
/// pixels with roughly one tick label per `font_size * 1.5` pixels.
///
/// Non-finite values are ignored. An empty set yields [`ScaleRange::UNIT`].
#[must_use]
pub fn calculate_scale_range(
    values: &[f64],
    drawing_height: f64,
    font_size: f64,
    begin_at_zero: bool,
    integers_only: bool,
) -> ScaleRange {
    let (mut min_value, mut max_value) = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    if min_value > max_value {
        return ScaleRange::UNIT;
    }

    let max_steps = if font_size > 0.0 && drawing_height.is_finite() {
        (drawing_height / (font_size * 1.5)).floor().max(0.0) as u32
    } else {
        0
    };
    let skip_fitting = MIN_STEPS >= max_steps;

    if max_value == min_value {
        max_value += 0.5;
        if min_value >= 0.5 && !begin_at_zero {
            min_value -= 0.5;
        } else {
            max_value += 0.5;
        }
    }

    let magnitude = order_of_magnitude((max_value - min_value).abs());
    let unit = 10f64.powi(magnitude);
    let graph_max = (max_value / unit).ceil() * unit;
    // Begin-at-zero only pins the floor while the data stays non-negative.
    let graph_min = if begin_at_zero && min_value >= 0.0 {
        0.0
    } else {
        (min_value / unit).floor() * unit
    };
    let graph_range = graph_max - graph_min;
    let mut step_value = unit;
    let mut steps = covering_steps(graph_range, step_value);

    while !skip_fitting && (steps > max_steps || steps * 2 < max_steps) {
        if steps > max_steps {
            step_value *= 2.0;
        } else if integers_only && magnitude >= 0 {
            if (step_value / 2.0).fract() != 0.0 {
                break;
            }
            step_value /= 2.0;
        } else {
            step_value /= 2.0;
        }
        steps = covering_steps(graph_range, step_value);
    }

    if skip_fitting {
        steps = MIN_STEPS;
        step_value = graph_range / f64::from(steps);
    }

    ScaleRange {
        steps,
        step_value,
        min: graph_min,
        max: graph_min + f64::from(steps) * step_value,
    }
}

/// Whole steps of `step` needed to span `range`, rounding a partial step up
/// so the range never ends below the data.
fn covering_steps(range: f64, step: f64) -> u32 {
    let raw = range / step;
    let nearest = raw.round();
    if (raw - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        nearest as u32
    } else {
        raw.ceil() as u32
    }
}

/// Number of decimals needed to print every multiple of `step` exactly.
#[must_use]
pub fn step_decimal_places(step: f64) -> usize {
    if !step.is_finite() {
        return 0;
    }
    (0..=8)
        .find(|&places| {
            let scaled = step * 10f64.powi(places as i32);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(8)
}
